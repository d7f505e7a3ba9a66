pub mod http_message_service;
