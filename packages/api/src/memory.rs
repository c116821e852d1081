use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use store::User;

use crate::{ApiError, UserService};

/// A [`UserService`] operation, used to inject failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn method(self) -> &'static str {
        match self {
            Operation::List => "GET",
            Operation::Create => "POST",
            Operation::Update => "PUT",
            Operation::Delete => "DELETE",
        }
    }
}

/// A request as received by [`MemoryUserService`], bodies included.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    List,
    Create(User),
    Update(i64, User),
    Delete(i64),
}

/// In-memory UserService used by the action tests.
///
/// Clones share the same table, failure set and request log.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserService {
    users: Arc<Mutex<Vec<User>>>,
    failing: Arc<Mutex<HashSet<Operation>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let service = Self::new();
        *service.users.lock().unwrap() = users;
        service
    }

    /// Make every later call of `op` fail with a 503.
    pub fn fail(&self, op: Operation) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Operation) {
        self.failing.lock().unwrap().remove(&op);
    }

    /// Current contents of the table.
    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, op: Operation, request: Request) -> Result<(), ApiError> {
        self.requests.lock().unwrap().push(request);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(ApiError::Status {
                method: op.method(),
                url: "memory://users".to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

impl UserService for MemoryUserService {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record(Operation::List, Request::List)?;
        Ok(self.users())
    }

    async fn create_user(&self, user: &User) -> Result<(), ApiError> {
        self.record(Operation::Create, Request::Create(user.clone()))?;
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_user(&self, id: i64, user: &User) -> Result<(), ApiError> {
        self.record(Operation::Update, Request::Update(id, user.clone()))?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(ApiError::Status {
                method: "PUT",
                url: format!("memory://users/{id}"),
                status: 404,
            }),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.record(Operation::Delete, Request::Delete(id))?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}
