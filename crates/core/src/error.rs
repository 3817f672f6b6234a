use thiserror::Error;

/// A type tree or class name that cannot be rendered as valid source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeNameError {
    #[error("class name has no simple names (package `{package}`)")]
    EmptySimpleNames { package: String },
    #[error("invalid Java identifier: `{0}`")]
    InvalidIdentifier(String),
    #[error("parameterized type `{base}` has no type parameters")]
    EmptyParameters { base: String },
    #[error("unknown primitive type: `{0}`")]
    UnknownPrimitive(String),
    #[error("cannot guess a class name from `{0}`")]
    BestGuess(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("malformed type tree: {0}")]
    Malformed(#[from] TypeNameError),
    #[error("sink rejected output")]
    Sink(#[from] std::fmt::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot create log directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, TypeNameError>;
pub type RenderResult<T> = std::result::Result<T, RenderError>;
