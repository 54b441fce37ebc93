use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The drawing surface was driven out of protocol (for example `fill`
    /// without a path, or `line_to` before any `move_to`).
    #[error("drawing surface protocol violation: {0}")]
    SurfaceState(String),

    #[error("drawing backend error: {0}")]
    Backend(String),
}
