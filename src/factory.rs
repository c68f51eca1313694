// src/factory.rs
use crate::problem_or::ProblemOr;
use crate::results::{Created, Deleted, Success, Updated};

#[must_use]
pub const fn from<T>(value: T) -> ProblemOr<T> {
    ProblemOr::from_value(value)
}

#[must_use]
pub const fn success() -> ProblemOr<Success> {
    ProblemOr::Value(Success)
}

#[must_use]
pub const fn created() -> ProblemOr<Created> {
    ProblemOr::Value(Created)
}

#[must_use]
pub const fn deleted() -> ProblemOr<Deleted> {
    ProblemOr::Value(Deleted)
}

#[must_use]
pub const fn updated() -> ProblemOr<Updated> {
    ProblemOr::Value(Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Problem;

    #[test]
    fn from_wraps_value() {
        let result = from(42);
        assert!(!result.has_problem());
        assert_eq!(result.value(), Some(&42));
        assert_eq!(result.problems(), &[crate::problem_or::NO_PROBLEMS.clone()]);
    }

    #[test]
    fn from_keeps_problem_as_value() {
        // A Problem passed to `from` is a value, not a problem state.
        let result = from(Problem::conflict());
        assert!(!result.has_problem());
        assert_eq!(result.value(), Some(&Problem::conflict()));
    }

    #[test]
    fn marker_helpers_are_value_states() {
        assert_eq!(success(), ProblemOr::Value(Success));
        assert_eq!(created(), ProblemOr::Value(Created));
        assert_eq!(deleted(), ProblemOr::Value(Deleted));
        assert_eq!(updated(), ProblemOr::Value(Updated));
    }
}
