#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    invitation_backend::run().await;
}
