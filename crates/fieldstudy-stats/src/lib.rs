use thiserror::Error;

pub mod correlation;

pub use correlation::{Correlation, pearson_correlation};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("input sequences are empty")]
    Empty,
    #[error("input sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },
    #[error("at least 4 paired observations are required, got {n}")]
    InsufficientData { n: usize },
    #[error("input sequence has zero variance; correlation is undefined")]
    ConstantInput,
}
