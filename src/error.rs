use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("grid size must be positive")]
  InvalidSize,

  #[error("cell ({row}, {col}) lies outside the {size}x{size} grid")]
  OutOfBounds {
    row: usize,
    col: usize,
    size: usize,
  },

  #[error("no pattern named {0:?}")]
  UnknownPattern(String),

  #[error("malformed RLE pattern: {0}")]
  MalformedPattern(String),
}
