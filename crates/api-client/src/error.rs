use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to send the HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The API request returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Failed to parse feed {url}: {reason}")]
    Feed { url: String, reason: String },

    #[error("Client configuration error: {0}")]
    Configuration(String),

    #[error("The model returned no text")]
    EmptyResponse,
}
