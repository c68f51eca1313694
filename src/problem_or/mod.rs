// src/problem_or/mod.rs
mod async_dispatch;
mod dispatch;
pub mod list;
mod state;

pub use list::ProblemList;
pub use state::ProblemOrState;

use crate::error::{ProblemOrError, ProblemOrResult};
use crate::problem::{Problem, ProblemType};

/// Returned by [`ProblemOr::problems`] when the instance holds a value.
pub static NO_PROBLEMS: Problem = Problem::from_static(
    "ProblemOr.NoProblems",
    "problem list cannot be retrieved from a successful ProblemOr.",
    ProblemType::Unexpected,
);

/// Returned by [`ProblemOr::first_problem`] when the instance holds a value.
pub static NO_FIRST_PROBLEM: Problem = Problem::from_static(
    "ProblemOr.NoFirstProblem",
    "First problem cannot be retrieved from a successful ProblemOr.",
    ProblemType::Unexpected,
);

/// Either a successful value or a non-empty, ordered list of problems.
///
/// Instances are built once and never mutated. The problem-shaped accessors
/// tolerate being called on a value: they hand back the [`NO_PROBLEMS`] /
/// [`NO_FIRST_PROBLEM`] sentinels instead of failing, and
/// [`value_or_default`](Self::value_or_default) substitutes `T::default()`
/// when called on problems.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemOr<T> {
    Value(T),
    Problems(ProblemList),
}

impl<T> ProblemOr<T> {
    #[must_use]
    pub const fn from_value(value: T) -> Self {
        Self::Value(value)
    }

    #[must_use]
    pub fn from_problem(problem: Problem) -> Self {
        Self::Problems(ProblemList::new(problem))
    }

    /// # Errors
    ///
    /// Returns [`ProblemOrError::EmptyProblems`] when `problems` is empty.
    pub fn from_problems(problems: Vec<Problem>) -> ProblemOrResult<Self> {
        ProblemList::from_vec(problems).map(Self::Problems)
    }

    #[must_use]
    pub const fn has_problem(&self) -> bool {
        matches!(self, Self::Problems(_))
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        !self.has_problem()
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Problems(_) => None,
        }
    }

    #[must_use]
    pub fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.value().cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn into_value(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Value(value) => value,
            Self::Problems(_) => T::default(),
        }
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        match self {
            Self::Problems(problems) => problems.as_slice(),
            Self::Value(_) => std::slice::from_ref(&NO_PROBLEMS),
        }
    }

    #[must_use]
    pub fn problems_or_empty(&self) -> &[Problem] {
        match self {
            Self::Problems(problems) => problems.as_slice(),
            Self::Value(_) => &[],
        }
    }

    #[must_use]
    pub fn first_problem(&self) -> &Problem {
        match self {
            Self::Problems(problems) => problems.first(),
            Self::Value(_) => &NO_FIRST_PROBLEM,
        }
    }

    /// # Errors
    ///
    /// Hands back the problem list when the instance is in the problem state.
    pub fn into_result(self) -> Result<T, ProblemList> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Problems(problems) => Err(problems),
        }
    }
}

impl<T> From<Problem> for ProblemOr<T> {
    fn from(value: Problem) -> Self {
        Self::from_problem(value)
    }
}

impl<T> From<ProblemList> for ProblemOr<T> {
    fn from(value: ProblemList) -> Self {
        Self::Problems(value)
    }
}

impl<T> TryFrom<Vec<Problem>> for ProblemOr<T> {
    type Error = ProblemOrError;

    fn try_from(value: Vec<Problem>) -> Result<Self, Self::Error> {
        Self::from_problems(value)
    }
}

impl<T, const N: usize> TryFrom<[Problem; N]> for ProblemOr<T> {
    type Error = ProblemOrError;

    fn try_from(value: [Problem; N]) -> Result<Self, Self::Error> {
        ProblemList::try_from(value).map(Self::Problems)
    }
}

impl<T> From<Result<T, Problem>> for ProblemOr<T> {
    fn from(value: Result<T, Problem>) -> Self {
        match value {
            Ok(value) => Self::Value(value),
            Err(problem) => Self::from_problem(problem),
        }
    }
}

impl<T> From<Result<T, ProblemList>> for ProblemOr<T> {
    fn from(value: Result<T, ProblemList>) -> Self {
        match value {
            Ok(value) => Self::Value(value),
            Err(problems) => Self::Problems(problems),
        }
    }
}

impl<T> From<ProblemOr<T>> for Result<T, ProblemList> {
    fn from(value: ProblemOr<T>) -> Self {
        value.into_result()
    }
}
