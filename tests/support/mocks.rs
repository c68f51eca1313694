// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use problem_or::{Created, Deleted, Problem, ProblemOr};

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn create(&self, username: &str) -> ProblemOr<Created>;
    async fn find(&self, username: &str) -> ProblemOr<u64>;
    async fn delete(&self, username: &str) -> ProblemOr<Deleted>;
}

#[derive(Default)]
pub struct InMemoryAccountStore {
    inner: Mutex<HashMap<String, u64>>,
}

impl InMemoryAccountStore {
    pub fn with_accounts(names: &[&str]) -> Self {
        let accounts = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), u64::try_from(i + 1).unwrap()))
            .collect();
        Self {
            inner: Mutex::new(accounts),
        }
    }
}

pub fn validate_username(username: &str) -> Vec<Problem> {
    let mut problems = Vec::new();
    if username.trim().is_empty() {
        problems.push(Problem::validation_with(
            "Account.UsernameEmpty",
            "username cannot be empty",
        ));
    }
    if username.len() < 3 {
        problems.push(Problem::validation_with(
            "Account.UsernameShort",
            "username must be at least 3 characters long",
        ));
    }
    problems
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, username: &str) -> ProblemOr<Created> {
        let problems = validate_username(username);
        if !problems.is_empty() {
            return ProblemOr::from_problems(problems).unwrap();
        }

        let mut map = self.inner.lock().unwrap();
        if map.contains_key(username) {
            return Problem::conflict_with("Account.Duplicate", "username already taken").into();
        }
        let id = u64::try_from(map.len() + 1).unwrap();
        map.insert(username.to_string(), id);
        Created.into()
    }

    async fn find(&self, username: &str) -> ProblemOr<u64> {
        let map = self.inner.lock().unwrap();
        match map.get(username) {
            Some(id) => ProblemOr::from_value(*id),
            None => Problem::not_found_with("Account.NotFound", "no such account").into(),
        }
    }

    async fn delete(&self, username: &str) -> ProblemOr<Deleted> {
        let mut map = self.inner.lock().unwrap();
        match map.remove(username) {
            Some(_) => Deleted.into(),
            None => Problem::not_found_with("Account.NotFound", "no such account").into(),
        }
    }
}
