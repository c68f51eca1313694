// src/problem/problem_type.rs
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Category of a [`Problem`](super::Problem).
///
/// The six built-in categories have stable ordinals (`Unexpected = 0` through
/// `Failure = 5`) which double as their numeric type. Application-defined
/// categories are carried as `Other(n)`.
///
/// Equality and hashing go through [`numeric`](Self::numeric), so
/// `Other(3)` is the same category as `NotFound`.
#[derive(Debug, Clone, Copy)]
pub enum ProblemType {
    Unexpected,
    Validation,
    Conflict,
    NotFound,
    NotAuthorized,
    Failure,
    Other(i32),
}

impl ProblemType {
    pub const BUILTINS: [Self; 6] = [
        Self::Unexpected,
        Self::Validation,
        Self::Conflict,
        Self::NotFound,
        Self::NotAuthorized,
        Self::Failure,
    ];

    #[must_use]
    pub const fn numeric(self) -> i32 {
        match self {
            Self::Unexpected => 0,
            Self::Validation => 1,
            Self::Conflict => 2,
            Self::NotFound => 3,
            Self::NotAuthorized => 4,
            Self::Failure => 5,
            Self::Other(value) => value,
        }
    }

    /// Maps a numeric type onto a category. Ordinals of the built-ins map to
    /// the built-in; every other integer is kept verbatim as `Other`.
    #[must_use]
    pub const fn from_numeric(value: i32) -> Self {
        match value {
            0 => Self::Unexpected,
            1 => Self::Validation,
            2 => Self::Conflict,
            3 => Self::NotFound,
            4 => Self::NotAuthorized,
            5 => Self::Failure,
            other => Self::Other(other),
        }
    }

    /// Folds an `Other` carrying a built-in ordinal onto that built-in.
    #[must_use]
    pub const fn normalized(self) -> Self {
        Self::from_numeric(self.numeric())
    }

    #[must_use]
    pub const fn is_builtin(self) -> bool {
        !matches!(self.normalized(), Self::Other(_))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.normalized() {
            Self::Unexpected => "unexpected",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::NotAuthorized => "not_authorized",
            Self::Failure => "failure",
            Self::Other(_) => "other",
        }
    }
}

impl PartialEq for ProblemType {
    fn eq(&self, other: &Self) -> bool {
        self.numeric() == other.numeric()
    }
}

impl Eq for ProblemType {}

impl Hash for ProblemType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric().hash(state);
    }
}

impl From<i32> for ProblemType {
    fn from(value: i32) -> Self {
        Self::from_numeric(value)
    }
}

impl From<ProblemType> for i32 {
    fn from(value: ProblemType) -> Self {
        value.numeric()
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalized() {
            Self::Other(value) => write!(f, "other({value})"),
            builtin => f.write_str(builtin.as_str()),
        }
    }
}
