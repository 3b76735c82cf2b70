use std::path::Path;

use anyhow::Context;
use epc_qr_config::QrConfig;
use image::Luma;
use qrcode::{types::QrError, EcLevel, QrCode, Version};

/// Turns record text into a QR symbol with error correction level M.
pub struct QrRenderer {
    min_version: i16,
    module_size: u32,
    quiet_zone: bool,
}

impl QrRenderer {
    pub fn from_config(cfg: &QrConfig) -> Self {
        Self {
            min_version: cfg.min_version,
            module_size: cfg.module_size,
            quiet_zone: cfg.quiet_zone,
        }
    }

    /// Uses the configured version, or the smallest larger one the text fits in.
    pub fn encode(&self, text: &str) -> Result<QrCode, QrError> {
        match QrCode::with_version(text, Version::Normal(self.min_version), EcLevel::M) {
            Err(QrError::DataTooLong) => {
                log::info!(
                    "record does not fit a version {} symbol, picking a larger one",
                    self.min_version
                );
                QrCode::with_error_correction_level(text, EcLevel::M)
            }
            res => res,
        }
    }

    pub fn save_png(&self, text: &str, path: &Path) -> anyhow::Result<()> {
        let code = self.encode(text).context("could not encode QR code")?;
        log::debug!("encoded record as {:?}", code.version());
        code.render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .quiet_zone(self.quiet_zone)
            .build()
            .save(path)
            .with_context(|| format!("could not write {}", path.display()))
    }
}
