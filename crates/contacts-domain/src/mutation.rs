//! Mutation requests sent to an address book.

use serde::{Deserialize, Serialize};

use crate::id::{ContactId, InfoId};

/// One mutation call against an address book, with its arguments.
///
/// Field names are kept as free-form strings: the address book decides what is
/// a valid attribute, not the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    UpdateField {
        contact_id: ContactId,
        field: String,
        value: String,
    },
    DeleteField {
        contact_id: ContactId,
        field: String,
    },
    UpdateInfo {
        contact_id: ContactId,
        field: String,
        info_id: InfoId,
        label: String,
        value: String,
    },
    AddInfo {
        contact_id: ContactId,
        field: String,
        label: String,
        value: String,
    },
    DeleteInfo {
        contact_id: ContactId,
        field: String,
        info_id: InfoId,
    },
}

impl Mutation {
    pub fn update_field(contact_id: &str, field: &str, value: &str) -> Self {
        Self::UpdateField {
            contact_id: contact_id.into(),
            field: field.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn delete_field(contact_id: &str, field: &str) -> Self {
        Self::DeleteField {
            contact_id: contact_id.into(),
            field: field.to_owned(),
        }
    }

    pub fn update_info(
        contact_id: &str,
        field: &str,
        info_id: &str,
        label: &str,
        value: &str,
    ) -> Self {
        Self::UpdateInfo {
            contact_id: contact_id.into(),
            field: field.to_owned(),
            info_id: info_id.into(),
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn add_info(contact_id: &str, field: &str, label: &str, value: &str) -> Self {
        Self::AddInfo {
            contact_id: contact_id.into(),
            field: field.to_owned(),
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn delete_info(contact_id: &str, field: &str, info_id: &str) -> Self {
        Self::DeleteInfo {
            contact_id: contact_id.into(),
            field: field.to_owned(),
            info_id: info_id.into(),
        }
    }

    pub fn contact_id(&self) -> &ContactId {
        match self {
            Self::UpdateField { contact_id, .. }
            | Self::DeleteField { contact_id, .. }
            | Self::UpdateInfo { contact_id, .. }
            | Self::AddInfo { contact_id, .. }
            | Self::DeleteInfo { contact_id, .. } => contact_id,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::UpdateField { field, .. }
            | Self::DeleteField { field, .. }
            | Self::UpdateInfo { field, .. }
            | Self::AddInfo { field, .. }
            | Self::DeleteInfo { field, .. } => field,
        }
    }

    /// Name of the address-book operation this mutation corresponds to.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::UpdateField { .. } => "update_field",
            Self::DeleteField { .. } => "delete_field",
            Self::UpdateInfo { .. } => "update_info",
            Self::AddInfo { .. } => "add_info",
            Self::DeleteInfo { .. } => "delete_info",
        }
    }
}
