use std::path::PathBuf;

/// Seed fixtures shipped with this crate.
const DEFAULT_FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/contacts");

/// Fixture configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Directory holding `<identifier>.json` contact fixtures.
    /// Env var: `CONTACTS_FIXTURE_DIR` (default: this crate's `fixtures/contacts`).
    pub fixture_dir: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
        }
    }
}

impl FixtureConfig {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var("CONTACTS_FIXTURE_DIR").ok())
    }

    fn from_var(fixture_dir: Option<String>) -> Self {
        fixture_dir
            .filter(|dir| !dir.is_empty())
            .map(|dir| Self {
                fixture_dir: PathBuf::from(dir),
            })
            .unwrap_or_default()
    }
}
