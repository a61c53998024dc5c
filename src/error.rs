use thiserror::Error;

/// Errors that can occur while exploring bike-share data.
#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input closed before a valid answer was given")]
    InputClosed,
}
