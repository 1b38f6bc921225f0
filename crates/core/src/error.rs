use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfChatError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PdfChatError>;
