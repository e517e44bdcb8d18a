use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("No such command: {0}")]
    UnknownCommand(String),

    #[error("Wrong args for {command}: expected {expected}, got {given}")]
    ArityMismatch {
        command: String,
        expected: usize,
        given: usize,
    },

    #[error("Could not find recipe for {0}")]
    RecipeNotFound(String),

    #[error("Empty command line")]
    EmptyInput,

    #[error("Could not write shopping list: {source}")]
    Persistence {
        #[source]
        source: std::io::Error,
    },

    #[error("Could not load recipes from {path}: {source}")]
    CatalogLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;
