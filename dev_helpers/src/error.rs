use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
    #[error("failed to read or write wav file")]
    Wav(#[from] hound::Error),
    #[error("wav file contains no samples")]
    EmptyWav,
    #[error("the other end of the frequency channel hung up")]
    Disconnected,
    #[error("{0} thread panicked")]
    ThreadPanicked(&'static str),
}

pub type Result<T> = std::result::Result<T, HelperError>;
