use std::future::Future;

use store::User;

use crate::ApiError;

/// Async interface to the remote user service.
///
/// Implemented over HTTP by [`crate::HttpUserService`] and in memory by
/// [`crate::MemoryUserService`].
pub trait UserService {
    /// `GET /users`
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;

    /// `POST /users`. Any 2xx counts as accepted; the response body is not read.
    fn create_user(&self, user: &User) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT /users/{id}`. Any 2xx counts as accepted; the response body is not read.
    fn update_user(&self, id: i64, user: &User) -> impl Future<Output = Result<(), ApiError>>;

    /// `DELETE /users/{id}`
    fn delete_user(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
}
