//! `ProblemOr<T>`: either a value or one-or-more domain problems.
//!
//! Expected failures in business logic are returned as data rather than
//! raised. A producer builds a [`ProblemOr`] from a value, a [`Problem`] or a
//! list of problems; a consumer branches with [`ProblemOr::match_with`] and
//! friends, or their `*_async` counterparts.
//!
//! ```
//! use problem_or::{Problem, ProblemOr};
//!
//! fn find_user(id: u32) -> ProblemOr<String> {
//!     if id == 0 {
//!         return Problem::not_found_with("User.NotFound", "no user with id 0").into();
//!     }
//!     ProblemOr::from_value(format!("user-{id}"))
//! }
//!
//! let label = find_user(0).match_first(|name| name.clone(), |p| p.code().to_string());
//! assert_eq!(label, "User.NotFound");
//! ```
#[cfg(feature = "demo")]
pub mod demo;
pub mod error;
pub mod factory;
pub mod problem;
pub mod problem_or;
pub mod results;

pub use error::{ProblemOrError, ProblemOrResult};
pub use problem::{Problem, ProblemType};
pub use problem_or::{NO_FIRST_PROBLEM, NO_PROBLEMS, ProblemList, ProblemOr, ProblemOrState};
pub use results::{Created, Deleted, Success, Updated};
