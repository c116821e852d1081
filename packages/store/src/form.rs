//! # User form draft and validation
//!
//! [`UserDraft`] holds the raw text of the create/edit form. [`UserDraft::validate`]
//! checks every field at once and returns a [`ValidationErrors`] map containing only the
//! failing fields; [`UserDraft::to_user`] turns a valid draft into the [`User`] that is
//! sent to the service and reported to the store.
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | `id` | non-empty, integer | `User ID is required.` / `User ID must be a number.` |
//! | `first_name` | non-empty | `First Name is required.` |
//! | `last_name` | non-empty | `Last Name is required.` |
//! | `email` | `^[^@\s]+@[^@\s]+\.[^@\s]+$` | `Email is not valid.` |
//! | `department` | non-empty | `Department is required.` |

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{PersonName, User};
use crate::state::UserError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should compile"));

/// A form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Email,
    Department,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Department,
    ];
}

/// Per-field validation messages. A field without an entry is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn check(&mut self, field: Field, ok: bool, message: &'static str) {
        if !ok {
            self.0.entry(field).or_insert(message);
        }
    }
}

/// Raw text of the user form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserDraft {
    /// Prefill the form for editing `user`.
    pub fn for_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.name.first.clone(),
            last_name: user.name.last.clone(),
            email: user.email.clone(),
            department: user.department().unwrap_or_default().to_string(),
        }
    }

    /// A blank id means the form is creating a user.
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Department => &self.department,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Id => self.id = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Department => self.department = value,
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.check(Field::Id, !self.id.is_empty(), "User ID is required.");
        errors.check(Field::Id, self.parsed_id().is_some(), "User ID must be a number.");
        errors.check(
            Field::FirstName,
            !self.first_name.is_empty(),
            "First Name is required.",
        );
        errors.check(
            Field::LastName,
            !self.last_name.is_empty(),
            "Last Name is required.",
        );
        errors.check(
            Field::Email,
            EMAIL_REGEX.is_match(&self.email),
            "Email is not valid.",
        );
        errors.check(
            Field::Department,
            !self.department.is_empty(),
            "Department is required.",
        );
        errors
    }

    /// Build the outgoing record, or the validation errors that prevent it.
    pub fn to_user(&self) -> Result<User, ValidationErrors> {
        let errors = self.validate();
        match self.parsed_id() {
            Some(id) if errors.is_empty() => Ok(User::new(
                id,
                PersonName::new(self.first_name.as_str(), self.last_name.as_str()),
                self.email.as_str(),
                self.department.as_str(),
            )),
            _ => Err(errors),
        }
    }

    fn parsed_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}

/// Why a submit attempt did not go through.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form has invalid fields")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Failed(#[from] UserError),
}

/// Whether the form creates a new user or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Create => "Add User",
            FormMode::Edit => "Update User",
        }
    }
}

/// Everything the form view tracks between renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: UserDraft,
    pub errors: ValidationErrors,
    pub submission_error: Option<UserError>,
}

impl FormState {
    /// A blank form, or one prefilled for editing `user`.
    pub fn new(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                mode: FormMode::Edit,
                draft: UserDraft::for_user(user),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Show the outcome of a rejected submit. The form stays open.
    pub fn reject(&mut self, err: SubmitError) {
        match err {
            SubmitError::Invalid(errors) => self.errors = errors,
            SubmitError::Failed(err) => {
                self.errors = ValidationErrors::default();
                self.submission_error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        UserDraft {
            id: "10".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            department: "Eng".into(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn test_bad_email_is_the_only_error() {
        let draft = UserDraft {
            email: "bad-email".into(),
            ..valid_draft()
        };
        let errors = draft.validate();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
        assert_eq!(errors.get(Field::Email), Some("Email is not valid."));
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = UserDraft::default().validate();

        assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
        assert_eq!(errors.get(Field::Id), Some("User ID is required."));
        assert_eq!(errors.get(Field::FirstName), Some("First Name is required."));
        assert_eq!(errors.get(Field::LastName), Some("Last Name is required."));
        assert_eq!(errors.get(Field::Department), Some("Department is required."));
    }

    #[test]
    fn test_non_numeric_id() {
        let draft = UserDraft {
            id: "abc".into(),
            ..valid_draft()
        };
        assert_eq!(draft.validate().get(Field::Id), Some("User ID must be a number."));
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["a@b.co", "Sincere@april.biz", "x.y@sub.domain.org"] {
            assert!(EMAIL_REGEX.is_match(ok), "{ok}");
        }
        for bad in ["", "a@b", "@b.co", "a b@c.de", "a@@b.co"] {
            assert!(!EMAIL_REGEX.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn test_to_user_builds_record() {
        let user = valid_draft().to_user().unwrap();

        assert_eq!(user.id, 10);
        assert_eq!(user.name.to_string(), "Ann Lee");
        assert_eq!(user.email, "ann@x.com");
        assert_eq!(user.department(), Some("Eng"));
    }

    #[test]
    fn test_prefill_from_user() {
        let user = User::new(
            3,
            PersonName::parse("Clementine Bauch"),
            "Nathan@yesenia.net",
            "Keebler LLC",
        );
        let draft = UserDraft::for_user(&user);

        assert_eq!(draft.id, "3");
        assert_eq!(draft.first_name, "Clementine");
        assert_eq!(draft.last_name, "Bauch");
        assert_eq!(draft.department, "Keebler LLC");
        assert!(!draft.is_new());
        assert_eq!(draft.to_user().unwrap(), user);
    }

    #[test]
    fn test_prefill_without_company() {
        let user = User {
            company: None,
            ..User::new(5, PersonName::parse("Chelsey Dietrich"), "c@d.io", "")
        };
        assert_eq!(UserDraft::for_user(&user).department, "");
    }

    #[test]
    fn test_new_form_state_is_blank() {
        let state = FormState::new(None);
        assert_eq!(state.mode, FormMode::Create);
        assert_eq!(state.mode.submit_label(), "Add User");
        assert!(state.draft.is_new());
        assert!(state.errors.is_empty());
        assert!(state.submission_error.is_none());
    }

    #[test]
    fn test_edit_form_state() {
        let user = User::new(2, PersonName::parse("Ervin Howell"), "Shanna@melissa.tv", "Deckow-Crist");
        let state = FormState::new(Some(&user));
        assert_eq!(state.mode, FormMode::Edit);
        assert_eq!(state.mode.submit_label(), "Update User");
        assert_eq!(state.draft.first_name, "Ervin");
    }

    #[test]
    fn test_reject() {
        let mut state = FormState::new(None);

        state.reject(SubmitError::Invalid(state.draft.validate()));
        assert_eq!(state.errors.fields().count(), 5);
        assert!(state.submission_error.is_none());

        state.reject(SubmitError::Failed(UserError::Submission));
        assert!(state.errors.is_empty());
        assert_eq!(
            state.submission_error.as_ref().map(ToString::to_string).as_deref(),
            Some("Failed to submit form")
        );
    }
}
