use thiserror::Error;

#[derive(Error, Debug)]
pub enum EasyTextError {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("A logger is already installed")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, EasyTextError>;
