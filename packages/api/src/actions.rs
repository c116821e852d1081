//! # Store actions
//!
//! Async operations that pair one call to a [`UserService`] with the store transitions
//! that follow it. Each function receives a `dispatch` callback instead of the store
//! itself, so the caller decides how the [`UserAction`] reaches the store: a plain
//! `&mut UserStore` in tests, a Dioxus signal write in the UI. No store borrow is held
//! across the network await.
//!
//! | Function | Request | Dispatched on success | On failure |
//! |----------|---------|-----------------------|------------|
//! | [`fetch_users`] | `list_users` | `FetchRequest`, then `FetchSuccess` | `FetchRequest`, then `FetchFailure` |
//! | [`submit_user`] | `create_user` / `update_user` | `Add` / `Edit` with the locally built record | nothing; returns [`SubmitError::Failed`] |
//! | [`delete_user`] | `delete_user` | `Delete` | `DeleteFailure` |
//!
//! Service errors are logged with their detail and then reduced to the fixed
//! [`UserError`] messages.

use store::{FormMode, SubmitError, User, UserAction, UserDraft, UserError};

use crate::UserService;

/// Reload the whole collection.
pub async fn fetch_users<S: UserService>(service: &S, mut dispatch: impl FnMut(UserAction)) {
    dispatch(UserAction::FetchRequest);
    match service.list_users().await {
        Ok(users) => {
            tracing::debug!("Fetched {} users", users.len());
            dispatch(UserAction::FetchSuccess(users));
        }
        Err(e) => {
            tracing::warn!("Failed to fetch users: {e}");
            dispatch(UserAction::FetchFailure);
        }
    }
}

/// Validate `draft`, send it, and report the record to the store.
///
/// Nothing is sent when validation fails, and nothing is dispatched unless the
/// service accepted the request.
pub async fn submit_user<S: UserService>(
    service: &S,
    mode: FormMode,
    draft: &UserDraft,
    mut dispatch: impl FnMut(UserAction),
) -> Result<User, SubmitError> {
    let user = draft.to_user().map_err(SubmitError::Invalid)?;

    let result = match mode {
        FormMode::Create => service.create_user(&user).await,
        FormMode::Edit => service.update_user(user.id, &user).await,
    };
    if let Err(e) = result {
        tracing::warn!("Failed to submit user {}: {e}", user.id);
        return Err(UserError::Submission.into());
    }

    tracing::info!("Saved user {}", user.id);
    dispatch(match mode {
        FormMode::Create => UserAction::Add(user.clone()),
        FormMode::Edit => UserAction::Edit(user.clone()),
    });
    Ok(user)
}

/// Delete a user; the row is only removed once the service confirms.
pub async fn delete_user<S: UserService>(
    service: &S,
    id: i64,
    mut dispatch: impl FnMut(UserAction),
) -> bool {
    match service.delete_user(id).await {
        Ok(()) => {
            tracing::info!("Deleted user {id}");
            dispatch(UserAction::Delete(id));
            true
        }
        Err(e) => {
            tracing::warn!("Failed to delete user {id}: {e}");
            dispatch(UserAction::DeleteFailure(id));
            false
        }
    }
}
