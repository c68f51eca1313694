// src/results.rs
use crate::problem_or::ProblemOr;

/// The operation succeeded and has nothing to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Success;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Created;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deleted;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Updated;

macro_rules! marker_into_problem_or {
    ($($marker:ident),+) => {
        $(
            impl From<$marker> for ProblemOr<$marker> {
                fn from(value: $marker) -> Self {
                    Self::Value(value)
                }
            }
        )+
    };
}

marker_into_problem_or!(Success, Created, Deleted, Updated);
