// src/problem_or/async_dispatch.rs
use super::ProblemOr;
use crate::problem::Problem;
use futures::future::Either;

/// Asynchronous dispatch.
///
/// Branch selection happens when the method is called, not when the returned
/// future is first polled: exactly one branch closure is invoked immediately
/// and the returned future resolves with that branch's output. Cancellation is
/// the branch's own business; dropping the returned future drops the branch.
impl<T> ProblemOr<T> {
    pub fn switch_async<'a, V, VF, P, PF>(
        &'a self,
        on_value: V,
        on_problem: P,
    ) -> impl Future<Output = ()>
    where
        V: FnOnce(&'a T) -> VF,
        VF: Future<Output = ()>,
        P: FnOnce(&'a [Problem]) -> PF,
        PF: Future<Output = ()>,
    {
        match self {
            Self::Value(value) => Either::Left(on_value(value)),
            Self::Problems(problems) => Either::Right(on_problem(problems.as_slice())),
        }
    }

    pub fn switch_first_async<'a, V, VF, P, PF>(
        &'a self,
        on_value: V,
        on_first_problem: P,
    ) -> impl Future<Output = ()>
    where
        V: FnOnce(&'a T) -> VF,
        VF: Future<Output = ()>,
        P: FnOnce(&'a Problem) -> PF,
        PF: Future<Output = ()>,
    {
        match self {
            Self::Value(value) => Either::Left(on_value(value)),
            Self::Problems(problems) => Either::Right(on_first_problem(problems.first())),
        }
    }

    pub fn match_async<'a, R, V, VF, P, PF>(
        &'a self,
        on_value: V,
        on_problem: P,
    ) -> impl Future<Output = R>
    where
        V: FnOnce(&'a T) -> VF,
        VF: Future<Output = R>,
        P: FnOnce(&'a [Problem]) -> PF,
        PF: Future<Output = R>,
    {
        match self {
            Self::Value(value) => Either::Left(on_value(value)),
            Self::Problems(problems) => Either::Right(on_problem(problems.as_slice())),
        }
    }

    pub fn match_first_async<'a, R, V, VF, P, PF>(
        &'a self,
        on_value: V,
        on_first_problem: P,
    ) -> impl Future<Output = R>
    where
        V: FnOnce(&'a T) -> VF,
        VF: Future<Output = R>,
        P: FnOnce(&'a Problem) -> PF,
        PF: Future<Output = R>,
    {
        match self {
            Self::Value(value) => Either::Left(on_value(value)),
            Self::Problems(problems) => Either::Right(on_first_problem(problems.first())),
        }
    }
}
