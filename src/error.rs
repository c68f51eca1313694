// src/error.rs
use thiserror::Error;

pub type ProblemOrResult<T> = Result<T, ProblemOrError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemOrError {
    #[error("a problem list must contain at least one problem")]
    EmptyProblems,
}
