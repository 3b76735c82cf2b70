use std::{fmt::Display, str::FromStr};

/// Version of the EPC QR guidelines a record is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V001,
    V002,
}

impl Version {
    pub const ALL: [Version; 2] = [Version::V001, Version::V002];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V001 => "001",
            Version::V002 => "002",
        }
    }

    /// Version 001 still demands the BIC of the beneficiary's bank.
    pub fn requires_bic(&self) -> bool {
        matches!(self, Version::V001)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown EPC version `{0}`")]
pub struct UnknownVersion(pub String);

impl FromStr for Version {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownVersion(s.to_string()))
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Version;

    #[test]
    fn codes() {
        assert_eq!(Version::from_code("001"), Some(Version::V001));
        assert_eq!(Version::from_code("002"), Some(Version::V002));
        assert_eq!(Version::from_code("003"), None);
        assert_eq!(Version::from_code("2"), None);
        assert!(Version::V001.requires_bic());
        assert!(!Version::V002.requires_bic());
    }

    #[test]
    fn from_str() {
        assert_eq!("001".parse::<Version>(), Ok(Version::V001));
        assert_eq!("002".parse::<Version>(), Ok(Version::V002));
        let err = "003".parse::<Version>().unwrap_err();
        assert_eq!(err.to_string(), "unknown EPC version `003`");
        for v in Version::ALL {
            assert_eq!(v.to_string().parse::<Version>(), Ok(v));
        }
    }
}
