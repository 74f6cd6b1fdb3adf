use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("No contact found for number: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
