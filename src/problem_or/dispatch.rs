// src/problem_or/dispatch.rs
use super::ProblemOr;
use crate::problem::Problem;

/// Synchronous dispatch. Each combinator looks at the discriminant once and
/// runs exactly one of its branches.
impl<T> ProblemOr<T> {
    pub fn switch<V, P>(&self, on_value: V, on_problem: P)
    where
        V: FnOnce(&T),
        P: FnOnce(&[Problem]),
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Problems(problems) => on_problem(problems.as_slice()),
        }
    }

    pub fn switch_first<V, P>(&self, on_value: V, on_first_problem: P)
    where
        V: FnOnce(&T),
        P: FnOnce(&Problem),
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Problems(problems) => on_first_problem(problems.first()),
        }
    }

    #[must_use]
    pub fn match_with<R, V, P>(&self, on_value: V, on_problem: P) -> R
    where
        V: FnOnce(&T) -> R,
        P: FnOnce(&[Problem]) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Problems(problems) => on_problem(problems.as_slice()),
        }
    }

    #[must_use]
    pub fn match_first<R, V, P>(&self, on_value: V, on_first_problem: P) -> R
    where
        V: FnOnce(&T) -> R,
        P: FnOnce(&Problem) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Problems(problems) => on_first_problem(problems.first()),
        }
    }
}
