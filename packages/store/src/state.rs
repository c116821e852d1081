//! # Client-side user store
//!
//! [`UserStore`] is the single holder of the user collection, the loading flag and the
//! last user-facing error. Every change goes through [`UserStore::reduce`] with a
//! [`UserAction`]; the `apply_*` methods are the named transitions behind those actions
//! and can be called directly.
//!
//! The async functions in the `api` crate issue the network request and then dispatch
//! the matching action, so the store itself never performs I/O and is usable in plain
//! unit tests.

use thiserror::Error;

use crate::models::User;

/// User-facing failure of a store-affecting operation.
///
/// Transport and status failures collapse into these fixed messages; the detail is
/// logged by the caller and never shown.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Failed to fetch users")]
    Fetch,
    #[error("Failed to submit form")]
    Submission,
    #[error("Failed to delete user with id {id}")]
    Delete { id: i64 },
}

impl UserError {
    /// Whether the list view must show this error instead of the table.
    pub fn blocks_table(&self) -> bool {
        matches!(self, Self::Fetch)
    }
}

/// State transitions understood by [`UserStore::reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum UserAction {
    FetchRequest,
    FetchSuccess(Vec<User>),
    FetchFailure,
    Add(User),
    Edit(User),
    Delete(i64),
    DeleteFailure(i64),
}

/// Users, loading flag and last error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserStore {
    users: Vec<User>,
    loading: bool,
    error: Option<UserError>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users in arrival order. Empty while a fetch is in flight.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&UserError> {
        self.error.as_ref()
    }

    pub fn reduce(&mut self, action: UserAction) {
        match action {
            UserAction::FetchRequest => self.begin_refresh(),
            UserAction::FetchSuccess(users) => self.finish_refresh(Ok(users)),
            UserAction::FetchFailure => self.finish_refresh(Err(UserError::Fetch)),
            UserAction::Add(user) => self.apply_create(user),
            UserAction::Edit(user) => self.apply_update(user),
            UserAction::Delete(id) => self.apply_delete(id),
            UserAction::DeleteFailure(id) => self.fail_delete(id),
        }
    }

    /// Mark a reload as in flight. Users from the previous load are dropped so they
    /// are never presented as fresh.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.error = None;
        self.users.clear();
    }

    /// Complete a reload. A failure empties the collection.
    pub fn finish_refresh(&mut self, result: Result<Vec<User>, UserError>) {
        match result {
            Ok(users) => {
                self.users = users;
                self.error = None;
            }
            Err(err) => {
                self.users.clear();
                self.error = Some(err);
            }
        }
        self.loading = false;
    }

    /// Append a user. Ids are not checked for duplicates.
    pub fn apply_create(&mut self, user: User) {
        self.users.push(user);
    }

    /// Replace the user with the same id. No-op when absent.
    pub fn apply_update(&mut self, user: User) {
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) {
            *slot = user;
        }
    }

    /// Remove the user with this id. No-op when absent.
    pub fn apply_delete(&mut self, id: i64) {
        self.users.retain(|u| u.id != id);
        if matches!(self.error, Some(UserError::Delete { .. })) {
            self.error = None;
        }
    }

    /// Record a failed delete; the row stays.
    pub fn fail_delete(&mut self, id: i64) {
        self.error = Some(UserError::Delete { id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonName;

    fn user(id: i64, first: &str, last: &str) -> User {
        User::new(
            id,
            PersonName::new(first, last),
            format!("{first}@example.com"),
            "Eng",
        )
    }

    fn loaded(users: Vec<User>) -> UserStore {
        let mut store = UserStore::new();
        store.reduce(UserAction::FetchRequest);
        store.reduce(UserAction::FetchSuccess(users));
        store
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut store = UserStore::new();

        store.reduce(UserAction::FetchRequest);
        assert!(store.loading());
        assert!(store.error().is_none());

        store.reduce(UserAction::FetchSuccess(vec![user(1, "Leanne", "Graham")]));
        assert!(!store.loading());
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_fetch_failure_clears_users() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham")]);

        store.reduce(UserAction::FetchRequest);
        store.reduce(UserAction::FetchFailure);

        assert!(!store.loading());
        assert!(store.users().is_empty());
        assert_eq!(store.error(), Some(&UserError::Fetch));
        assert_eq!(store.error().unwrap().to_string(), "Failed to fetch users");
    }

    #[test]
    fn test_stale_users_hidden_while_loading() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham")]);

        store.reduce(UserAction::FetchRequest);

        assert!(store.loading());
        assert!(store.users().is_empty());
    }

    #[test]
    fn test_refetch_clears_previous_error() {
        let mut store = UserStore::new();
        store.reduce(UserAction::FetchRequest);
        store.reduce(UserAction::FetchFailure);

        store.reduce(UserAction::FetchRequest);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_create_appends_without_dedup() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham")]);

        store.apply_create(user(2, "Ervin", "Howell"));
        store.apply_create(user(2, "Ervin", "Howell"));

        let ids: Vec<i64> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 2]);
    }

    #[test]
    fn test_update_replaces_matching_user() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham"), user(2, "Ervin", "Howell")]);

        store.apply_update(user(2, "Ervin", "Howard"));

        assert_eq!(store.users()[1].name.last, "Howard");
        assert_eq!(store.users()[0].name.last, "Graham");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham")]);
        let before = store.clone();

        store.apply_update(user(99, "Nobody", "Here"));

        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham"), user(2, "Ervin", "Howell")]);

        store.apply_delete(1);
        let after_first = store.clone();
        store.apply_delete(1);

        assert_eq!(store, after_first);
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_delete_failure_keeps_row() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham")]);

        store.reduce(UserAction::DeleteFailure(1));

        assert_eq!(store.users().len(), 1);
        let err = store.error().unwrap();
        assert!(!err.blocks_table());
        assert_eq!(err.to_string(), "Failed to delete user with id 1");
    }

    #[test]
    fn test_successful_delete_clears_delete_error() {
        let mut store = loaded(vec![user(1, "Leanne", "Graham"), user(2, "Ervin", "Howell")]);

        store.reduce(UserAction::DeleteFailure(1));
        store.reduce(UserAction::Delete(2));

        assert!(store.error().is_none());
        assert_eq!(store.users().len(), 1);
    }
}
