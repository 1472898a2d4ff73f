use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("duplicate exercise name in catalog: {0}")]
    DuplicateExercise(String),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
