use crate::domain::ports::MessageService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::error;

/// Delivers invitation messages through an external HTTP gateway. The
/// gateway is opaque: this client only knows how to hand it a recipient and
/// a rendered body, and how to report failure back to the caller.
pub struct HttpMessageService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpMessageService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct MessagePayload {
    from_alias: String,
    to_addr: String,
    body: String,
}

#[async_trait]
impl MessageService for HttpMessageService {
    async fn send(&self, recipient: &str, body: &str) -> Result<(), AppError> {
        let payload = MessagePayload {
            from_alias: "default".to_string(),
            to_addr: recipient.to_string(),
            body: body.to_string(),
        };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Message service connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Message service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        Ok(())
    }
}
