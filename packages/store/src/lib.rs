//! Client-side state for the user admin app: models, store, pagination, form
//! validation and configuration. Nothing in this crate performs I/O.

pub mod config;
pub mod form;
pub mod models;
pub mod pagination;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use form::{Field, FormMode, FormState, SubmitError, UserDraft, ValidationErrors};
pub use models::{Company, PersonName, User};
pub use pagination::{paginate, Page};
pub use state::{UserAction, UserError, UserStore};
