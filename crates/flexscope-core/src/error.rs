use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlexscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialization failed: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("No image with id {0} in gallery")]
    UnknownImage(u32),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Non-finite {field} in viewport input: {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("Script line {line}: {message}")]
    Script { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, FlexscopeError>;
