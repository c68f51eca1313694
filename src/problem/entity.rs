// src/problem/entity.rs
use super::problem_type::ProblemType;
use std::borrow::Cow;
use thiserror::Error;

type Text = Cow<'static, str>;

/// One occurrence of a domain-level problem.
///
/// Problems are immutable and compare by value. Codes conventionally follow
/// `"Category.Reason"`; neither the code nor the description is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{code}: {description}")]
pub struct Problem {
    code: Text,
    description: Text,
    problem_type: ProblemType,
}

impl Problem {
    pub(crate) const fn from_static(
        code: &'static str,
        description: &'static str,
        problem_type: ProblemType,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            description: Cow::Borrowed(description),
            problem_type: problem_type.normalized(),
        }
    }

    fn new(code: impl Into<Text>, description: impl Into<Text>, problem_type: ProblemType) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            problem_type: problem_type.normalized(),
        }
    }

    #[must_use]
    pub const fn failure() -> Self {
        Self::from_static(
            "General.Failure",
            "A failure has occurred.",
            ProblemType::Failure,
        )
    }

    #[must_use]
    pub fn failure_with(code: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self::new(code, description, ProblemType::Failure)
    }

    #[must_use]
    pub const fn unexpected() -> Self {
        Self::from_static(
            "General.Unexpected",
            "An unexpected problem has occurred.",
            ProblemType::Unexpected,
        )
    }

    #[must_use]
    pub fn unexpected_with(code: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self::new(code, description, ProblemType::Unexpected)
    }

    #[must_use]
    pub const fn validation() -> Self {
        Self::from_static(
            "General.Validation",
            "A validation problem has occurred.",
            ProblemType::Validation,
        )
    }

    #[must_use]
    pub fn validation_with(code: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self::new(code, description, ProblemType::Validation)
    }

    #[must_use]
    pub const fn conflict() -> Self {
        Self::from_static(
            "General.Conflict",
            "A conflict problem has occurred.",
            ProblemType::Conflict,
        )
    }

    #[must_use]
    pub fn conflict_with(code: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self::new(code, description, ProblemType::Conflict)
    }

    #[must_use]
    pub const fn not_found() -> Self {
        Self::from_static(
            "General.NotFound",
            "A 'Not Found' problem has occurred.",
            ProblemType::NotFound,
        )
    }

    #[must_use]
    pub fn not_found_with(code: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self::new(code, description, ProblemType::NotFound)
    }

    #[must_use]
    pub const fn not_authorized() -> Self {
        Self::from_static(
            "General.NotAuthorized",
            "A 'Not Authorized' problem has occurred.",
            ProblemType::NotAuthorized,
        )
    }

    #[must_use]
    pub fn not_authorized_with(code: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self::new(code, description, ProblemType::NotAuthorized)
    }

    /// Builds a problem of an application-defined category.
    ///
    /// `problem_type` may be a [`ProblemType`] or a raw `i32`. A built-in
    /// ordinal always lands on the built-in category, even when passed as
    /// `ProblemType::Other(n)`; other integers are preserved as `Other`.
    #[must_use]
    pub fn custom(
        code: impl Into<Text>,
        description: impl Into<Text>,
        problem_type: impl Into<ProblemType>,
    ) -> Self {
        Self::new(code, description, problem_type.into())
    }

    /// Returns a copy of this problem carrying `code` instead.
    #[must_use]
    pub fn with_code(&self, code: impl Into<Text>) -> Self {
        Self::new(code, self.description.clone(), self.problem_type)
    }

    /// Returns a copy of this problem carrying `description` instead.
    #[must_use]
    pub fn with_description(&self, description: impl Into<Text>) -> Self {
        Self::new(self.code.clone(), description, self.problem_type)
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn problem_type(&self) -> ProblemType {
        self.problem_type
    }

    #[must_use]
    pub const fn numeric_type(&self) -> i32 {
        self.problem_type.numeric()
    }
}
