#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no sample at position {0}")]
    KeyNotFound(i64),
    #[error("{0}")]
    Parse(#[from] crate::parse::ParseError),
}

impl Error {
    pub fn invalid_input(msg: impl ToString) -> Self {
        Self::InvalidInput(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
