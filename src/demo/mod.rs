// src/demo/mod.rs
//! Call-site illustration: an operation that succeeds and one that reports a
//! problem, both returning `ProblemOr<Success>`.
pub mod config;

pub use config::{ConfigError, DemoConfig, Scenario};

use crate::factory;
use crate::problem::Problem;
use crate::problem_or::ProblemOr;
use crate::results::Success;

pub trait DemoOperations: Send + Sync {
    fn success(&self) -> ProblemOr<Success>;
    fn problem(&self) -> ProblemOr<Success>;
}

#[derive(Debug, Clone, Default)]
pub struct Demo {
    problem_code: Option<String>,
}

impl Demo {
    #[must_use]
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            problem_code: config.problem_code().map(str::to_string),
        }
    }
}

impl DemoOperations for Demo {
    fn success(&self) -> ProblemOr<Success> {
        tracing::debug!("demo success operation");
        factory::success()
    }

    fn problem(&self) -> ProblemOr<Success> {
        let problem = self
            .problem_code
            .as_deref()
            .map_or_else(Problem::failure, |code| {
                Problem::failure().with_code(code.to_string())
            });
        tracing::debug!(code = %problem.code(), "demo problem operation");
        problem.into()
    }
}

/// One-line summary of an outcome, logging problems as warnings.
#[must_use]
pub fn describe(operation: &str, outcome: &ProblemOr<Success>) -> String {
    outcome.match_with(
        |_| {
            tracing::info!(operation, "completed");
            format!("{operation}: success")
        },
        |problems| {
            for problem in problems {
                tracing::warn!(
                    operation,
                    code = %problem.code(),
                    kind = %problem.problem_type(),
                    "problem reported"
                );
            }
            let codes: Vec<&str> = problems.iter().map(Problem::code).collect();
            format!(
                "{operation}: {} problem(s) [{}]",
                problems.len(),
                codes.join(", ")
            )
        },
    )
}
