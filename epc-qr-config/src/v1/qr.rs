use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct QrConfig {
    /// smallest symbol version to use, larger ones are picked when the text does not fit
    pub min_version: i16,
    /// size of one module in pixels
    pub module_size: u32,
    pub quiet_zone: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            min_version: 6,
            module_size: 10,
            quiet_zone: true,
        }
    }
}
