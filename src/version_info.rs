use std::fmt::Display;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct VersionInfo {
    pub local_version: semver::Version,
}

impl VersionInfo {
    pub fn new() -> Result<Self, semver::Error> {
        Ok(Self {
            local_version: semver::Version::parse(VERSION)?,
        })
    }
}

impl Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "epc-qr v{}", self.local_version)
    }
}
