//! Contact fixture loader.
//!
//! A fixture is a JSON file `<root>/<identifier>.json` holding one `Contact`.

use std::path::{Path, PathBuf};

use contacts_domain::contact::Contact;

/// Failure to read or parse a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture not found at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in fixture {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FixtureError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// # Example
/// ```no_run
/// use std::path::Path;
/// use contacts_testing::fixture::Fixture;
/// let alice = Fixture::load_contact(Path::new("fixtures/contacts"), "alice")?;
/// # Ok::<(), contacts_testing::fixture::FixtureError>(())
/// ```
pub struct Fixture;

impl Fixture {
    /// Path of the fixture named `identifier` under `root`.
    pub fn path(root: &Path, identifier: &str) -> PathBuf {
        root.join(format!("{identifier}.json"))
    }

    /// Load and parse the contact fixture `root/identifier.json`.
    pub fn load_contact(root: &Path, identifier: &str) -> Result<Contact, FixtureError> {
        let path = Self::path(root, identifier);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(FixtureError::Io { path, source }),
        };
        serde_json::from_str(&contents).map_err(|source| FixtureError::Parse { path, source })
    }
}
