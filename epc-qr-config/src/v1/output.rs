use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// png written by `create` when no `--out` is given
    pub qr_file: String,
    /// also write the record text here, encoded in its declared character set
    pub text_file: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            qr_file: "qr.png".to_string(),
            text_file: None,
        }
    }
}
