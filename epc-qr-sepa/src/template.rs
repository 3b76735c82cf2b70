//! Consumer records from declarative TOML templates.
//!
//! ```toml
//! beneficiary = "Wikimedia Foerdergesellschaft"
//! iban = "DE33100205000001194700"
//! amount = 123.45
//! remittance = "Spende fuer Wikipedia"
//! ```

use std::{fmt::Display, path::Path};

use serde::Deserialize;

use crate::{
    checks::{ErrorKind, ValidationError},
    Record, Result,
};

pub const ALLOWED_KEYS: [&str; 4] = ["beneficiary", "iban", "amount", "remittance"];

#[derive(Debug, Deserialize)]
struct ConsumerTemplate {
    beneficiary: String,
    iban: String,
    amount: TemplateAmount,
    remittance: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TemplateAmount {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Display for TemplateAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateAmount::Text(s) => f.write_str(s),
            TemplateAmount::Integer(i) => write!(f, "{i}"),
            TemplateAmount::Float(x) => write!(f, "{x}"),
        }
    }
}

pub fn load_consumer_template(path: impl AsRef<Path>) -> Result<Record> {
    let path = path.as_ref();
    log::debug!("loading template {}", path.display());
    let source = std::fs::read_to_string(path)?;
    parse_consumer_template(&source)
}

/// The key set is checked before any field is looked at.
pub fn parse_consumer_template(source: &str) -> Result<Record> {
    let table: toml::Table = source.parse()?;

    let mut keys = table.keys().map(String::as_str).collect::<Vec<_>>();
    keys.sort_unstable();
    let mut allowed = ALLOWED_KEYS;
    allowed.sort_unstable();
    if keys != allowed {
        return Err(ValidationError::new(
            ErrorKind::SchemaMismatch,
            format!("template has incorrect entries {keys:?} (allowed are {ALLOWED_KEYS:?})"),
        )
        .into());
    }

    let template: ConsumerTemplate = toml::Value::Table(table).try_into().map_err(|e| {
        ValidationError::new(
            ErrorKind::TypeMismatch,
            format!("template has a value of the wrong type: {e}"),
        )
    })?;

    Ok(Record::consumer(
        template.beneficiary,
        template.iban,
        template.amount,
        template.remittance,
    )?)
}
