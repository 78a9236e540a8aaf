use std::fmt;

/// Errors surfaced by the engine.
///
/// Nothing on the internal step path returns these: every division there is
/// guarded. They come from direct calls by the embedding shell.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// A vector was divided by an explicit zero scalar.
    DivisionByZero,
    /// A read addressed a body index outside the collection.
    InvalidIndex { index: usize, len: usize },
    /// A configuration or scenario value is outside its domain, or failed to parse.
    InvalidConfiguration(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DivisionByZero => write!(f, "division of a vector by zero"),
            EngineError::InvalidIndex { index, len } => {
                write!(f, "body index {} out of range (len {})", index, len)
            }
            EngineError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidConfiguration(err.to_string())
    }
}
