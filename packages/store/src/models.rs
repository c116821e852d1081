//! # Domain models for user records
//!
//! Defines the data structures exchanged with the remote user service and held by
//! [`crate::UserStore`]. These types are `Serialize + Deserialize` and their JSON shape
//! matches the service's wire format exactly, so the same value that enters the store
//! is the one sent as a request body.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A single user record: integer `id`, [`PersonName`], `email`, and an optional [`Company`]. |
//! | [`PersonName`] | First and last name. Travels as one string on the wire (`"Leanne Graham"`), split at the first space on decode and joined back on encode. |
//! | [`Company`] | The `company` object. Only `name` is used; the UI presents it as the user's department. |
//!
//! ## Name handling
//!
//! The service only knows a single free-text `name`. [`PersonName`] keeps everything
//! after the first space as the last name, so `"Mrs. Dennis Schulist"` becomes
//! `Mrs.` / `Dennis Schulist` and encodes back to the original string. No tokens
//! are dropped on a read/edit/write cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record as exposed by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Externally assigned identifier.
    pub id: i64,
    pub name: PersonName,
    pub email: String,
    /// Shown as "department" in the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl User {
    /// Build a record from form-level parts.
    pub fn new(
        id: i64,
        name: PersonName,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name,
            email: email.into(),
            company: Some(Company {
                name: department.into(),
            }),
        }
    }

    /// The company name, if the service sent one.
    pub fn department(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }
}

/// The `company` object of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A person's name, serialized as a single space-joined string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PersonName {
    pub first: String,
    /// Everything after the first space, possibly containing further spaces.
    pub last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Split a free-text name at its first space.
    pub fn parse(full: &str) -> Self {
        match full.split_once(' ') {
            Some((first, last)) => Self::new(first, last),
            None => Self::new(full, ""),
        }
    }
}

impl From<String> for PersonName {
    fn from(full: String) -> Self {
        Self::parse(&full)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.to_string()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.last.is_empty() {
            f.write_str(&self.first)
        } else {
            write!(f, "{} {}", self.first, self.last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_service_record() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name.first, "Leanne");
        assert_eq!(user.name.last, "Graham");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.department(), Some("Romaguera-Crona"));
    }

    #[test]
    fn test_decode_without_company() {
        let user: User =
            serde_json::from_str(r#"{"id": 4, "name": "Cher", "email": "cher@example.com"}"#)
                .unwrap();

        assert_eq!(user.name, PersonName::new("Cher", ""));
        assert!(user.department().is_none());
    }

    #[test]
    fn test_name_keeps_extra_tokens() {
        let name = PersonName::parse("Mrs. Dennis Schulist");
        assert_eq!(name.first, "Mrs.");
        assert_eq!(name.last, "Dennis Schulist");
        assert_eq!(name.to_string(), "Mrs. Dennis Schulist");
    }

    #[test]
    fn test_encode_request_body() {
        let user = User::new(10, PersonName::new("Ann", "Lee"), "ann@x.com", "Eng");
        let body = serde_json::to_value(&user).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "id": 10,
                "name": "Ann Lee",
                "email": "ann@x.com",
                "company": { "name": "Eng" }
            })
        );
    }
}
