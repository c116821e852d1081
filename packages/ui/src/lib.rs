//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod app;
pub use app::UserManagementApp;

mod context;
pub use context::{
    use_list_settings, use_user_service, use_user_store, ListSettings, UserStoreProvider,
};

mod pagination;
pub use pagination::Pagination;

mod user_list;
pub use user_list::UserList;

mod user_form;
pub use user_form::UserForm;
