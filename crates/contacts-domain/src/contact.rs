//! Contact record types.

use serde::{Deserialize, Serialize};

use crate::id::{ContactId, InfoId};

/// One person's entry in the address book.
///
/// Wire format: a JSON object; unknown keys are rejected so a fixture that
/// drifts from the schema fails to load instead of silently dropping data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub contact_id: ContactId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default)]
    pub emails: Vec<ContactInfo>,
    #[serde(default)]
    pub phones: Vec<ContactInfo>,
    #[serde(default)]
    pub urls: Vec<ContactInfo>,
}

impl Contact {
    /// Create a contact with only its id set.
    pub fn new(contact_id: impl Into<ContactId>) -> Self {
        Self {
            contact_id: contact_id.into(),
            first_name: None,
            last_name: None,
            nickname: None,
            organization: None,
            birthday: None,
            emails: Vec::new(),
            phones: Vec::new(),
            urls: Vec::new(),
        }
    }

    pub fn field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FirstName => self.first_name.as_deref(),
            ContactField::LastName => self.last_name.as_deref(),
            ContactField::Nickname => self.nickname.as_deref(),
            ContactField::Organization => self.organization.as_deref(),
            ContactField::Birthday => self.birthday.as_deref(),
        }
    }

    pub fn infos(&self, field: InfoField) -> &[ContactInfo] {
        match field {
            InfoField::Emails => &self.emails,
            InfoField::Phones => &self.phones,
            InfoField::Urls => &self.urls,
        }
    }
}

/// A labelled structured value such as an email address or phone number.
///
/// `info_id` is `None` for entries the backend has not stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_id: Option<InfoId>,
    pub label: String,
    pub value: String,
}

impl ContactInfo {
    pub fn new(info_id: Option<InfoId>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            info_id,
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Single-valued contact attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Nickname,
    Organization,
    Birthday,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Nickname,
        Self::Organization,
        Self::Birthday,
    ];

    /// Wire name, matching the `Contact` JSON key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Nickname => "nickname",
            Self::Organization => "organization",
            Self::Birthday => "birthday",
        }
    }
}

/// Multi-valued contact attributes made of [`ContactInfo`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoField {
    Emails,
    Phones,
    Urls,
}

impl InfoField {
    pub const ALL: [Self; 3] = [Self::Emails, Self::Phones, Self::Urls];

    /// Wire name, matching the `Contact` JSON key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emails => "emails",
            Self::Phones => "phones",
            Self::Urls => "urls",
        }
    }
}
