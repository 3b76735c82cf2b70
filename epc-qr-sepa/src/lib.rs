//! Validation and serialization of EPC QR records, the text payload of the
//! European Payments Council QR code for SEPA credit transfers.

pub mod checks;
mod error;
mod record;
pub mod template;

pub use checks::{ErrorKind, ValidationError, ValidationResult};
pub use error::{Error, Result};
pub use record::{Record, RecordBuilder, IDENTIFICATION_CODE, ROW_COUNT, SERVICE_TAG};
pub use template::{load_consumer_template, parse_consumer_template};
