//! # API crate — client for the remote user service
//!
//! The user list and form talk to a JSONPlaceholder-style REST endpoint. This crate
//! defines that boundary and the async actions that sequence a request with the
//! resulting [`store::UserStore`] transitions.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | `fetch_users`, `submit_user`, `delete_user`: one request each, then dispatch |
//! | [`error`] | [`ApiError`], the transport/status error shared by all implementations |
//! | [`http`] | [`HttpUserService`], the `reqwest` implementation used by the apps |
//! | [`memory`] | [`MemoryUserService`], an in-memory implementation with failure injection |

pub mod actions;
pub mod error;
pub mod http;
pub mod memory;
mod service;

pub use actions::{delete_user, fetch_users, submit_user};
pub use error::ApiError;
pub use http::HttpUserService;
pub use memory::{MemoryUserService, Operation, Request};
pub use service::UserService;
