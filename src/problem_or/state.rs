// src/problem_or/state.rs
use super::ProblemOr;
use crate::problem::Problem;

/// Problem-side view of a [`ProblemOr`] with the value type erased.
///
/// Pipeline code that only cares whether something went wrong can hold
/// `&dyn ProblemOrState` over results of unrelated value types.
pub trait ProblemOrState {
    fn has_problem(&self) -> bool;

    /// Same contract as [`ProblemOr::problems`]: never empty.
    fn problems(&self) -> &[Problem];

    fn problems_or_empty(&self) -> &[Problem];
}

impl<T> ProblemOrState for ProblemOr<T> {
    fn has_problem(&self) -> bool {
        Self::has_problem(self)
    }

    fn problems(&self) -> &[Problem] {
        Self::problems(self)
    }

    fn problems_or_empty(&self) -> &[Problem] {
        Self::problems_or_empty(self)
    }
}
