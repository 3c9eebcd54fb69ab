use std::fmt;

use contacts_domain::id::ContactId;

/// Read operations of the address book, used to tag simulated failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOperation {
    Count,
    Find,
    Get,
}

impl fmt::Display for ReadOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Count => "count",
            Self::Find => "find",
            Self::Get => "get",
        })
    }
}

/// Address book error variants.
#[derive(Debug, thiserror::Error)]
pub enum AddressBookError {
    #[error("simulated failure in {0}")]
    SimulatedFailure(ReadOperation),
    #[error("contact not found: {0}")]
    NotFound(ContactId),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AddressBookError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SimulatedFailure(_) => "SIMULATED_FAILURE",
            Self::NotFound(_) => "CONTACT_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}
