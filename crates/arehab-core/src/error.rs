use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("pain score {value} is outside range [0, 10]")]
    PainScoreOutOfRange { value: i64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
