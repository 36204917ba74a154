pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidArgument(String),
    IndexOutOfRange { index: usize, len: usize },
}

impl SessionError {
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        SessionError::IndexOutOfRange { index, len }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            SessionError::IndexOutOfRange { index, len } => write!(
                f,
                "Buffer index {} out of range: must be >= 0 and < the number of buffers ({})",
                index, len
            ),
        }
    }
}

impl std::error::Error for SessionError {}
