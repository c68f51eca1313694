pub mod entity;
pub mod problem_type;

pub use entity::Problem;
pub use problem_type::ProblemType;
