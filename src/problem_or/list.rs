// src/problem_or/list.rs
use crate::error::{ProblemOrError, ProblemOrResult};
use crate::problem::Problem;
use std::ops::Deref;

/// Ordered sequence of problems that always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemList(Vec<Problem>);

impl ProblemList {
    #[must_use]
    pub fn new(problem: Problem) -> Self {
        Self(vec![problem])
    }

    /// # Errors
    ///
    /// Returns [`ProblemOrError::EmptyProblems`] when `problems` is empty.
    pub fn from_vec(problems: Vec<Problem>) -> ProblemOrResult<Self> {
        if problems.is_empty() {
            return Err(ProblemOrError::EmptyProblems);
        }
        Ok(Self(problems))
    }

    #[must_use]
    pub fn first(&self) -> &Problem {
        // Non-empty by construction.
        &self.0[0]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Problem] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Problem> {
        self.0
    }
}

impl Deref for ProblemList {
    type Target = [Problem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Problem> for ProblemList {
    fn from(value: Problem) -> Self {
        Self::new(value)
    }
}

impl TryFrom<Vec<Problem>> for ProblemList {
    type Error = ProblemOrError;

    fn try_from(value: Vec<Problem>) -> Result<Self, Self::Error> {
        Self::from_vec(value)
    }
}

impl<const N: usize> TryFrom<[Problem; N]> for ProblemList {
    type Error = ProblemOrError;

    fn try_from(value: [Problem; N]) -> Result<Self, Self::Error> {
        Self::from_vec(Vec::from(value))
    }
}

impl From<ProblemList> for Vec<Problem> {
    fn from(value: ProblemList) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a ProblemList {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ProblemList {
    type Item = Problem;
    type IntoIter = std::vec::IntoIter<Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vec_is_rejected() {
        assert_eq!(ProblemList::from_vec(Vec::new()), Err(ProblemOrError::EmptyProblems));
        assert_eq!(ProblemList::try_from([] as [Problem; 0]), Err(ProblemOrError::EmptyProblems));
    }

    #[test]
    fn order_is_preserved() {
        let problems = vec![
            Problem::validation_with("User.Name", "too short"),
            Problem::validation_with("User.Email", "missing @"),
            Problem::conflict(),
        ];
        let list = ProblemList::from_vec(problems.clone()).unwrap();
        assert_eq!(list.as_slice(), problems.as_slice());
        assert_eq!(list.first(), &problems[0]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn array_is_copied_into_owned_list() {
        let list = ProblemList::try_from([Problem::not_found(), Problem::failure()]).unwrap();
        let codes: Vec<&str> = list.iter().map(Problem::code).collect();
        assert_eq!(codes, vec!["General.NotFound", "General.Failure"]);
    }
}
