use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not an image: {name}")]
    NotAnImage { name: String },

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
