use thiserror::Error;

#[derive(Error, Debug)]
/// Mapping error
pub enum BindError {
    /// A required field is absent from the input tree.
    #[error("missing required field: {path}")]
    MissingField { path: String },

    /// A field exists but holds a value of the wrong JSON kind.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A date string does not match the fixed `yyyy-MM-dd` pattern.
    #[error("malformed date at {path}: {value:?}")]
    MalformedDate { path: String, value: String },

    /// No codec has been registered for the given type tag.
    #[error("no codec registered for tag: {0}")]
    Unregistered(String),

    /// A registered codec was invoked with a value of a different type.
    #[error("codec type mismatch for tag: {0}")]
    CodecType(String),

    /// The underlying token-stream reader failed.
    #[error("stream read: {0}")]
    StreamRead(String),

    /// The tree/text emitter failed.
    #[error("emit: {0}")]
    Emit(String),
}

#[cfg(feature = "stream")]
impl From<struson::reader::ReaderError> for BindError {
    fn from(error: struson::reader::ReaderError) -> Self {
        BindError::StreamRead(error.to_string())
    }
}

impl From<std::io::Error> for BindError {
    fn from(error: std::io::Error) -> Self {
        BindError::Emit(error.to_string())
    }
}
