use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Rejected before any renderer call was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The renderer or output sink could not produce the encoded image.
    #[error("encode failed: {0}")]
    Encode(String),
}
