use std::{fmt::Display, io::Write};

use epc_qr_types::{Encoding, Euro, Version};

use crate::checks::{self, ValidationError};

use self::record_gen::RecordString;

mod record_gen;

pub const SERVICE_TAG: &str = "BCD";
pub const IDENTIFICATION_CODE: &str = "SCT";
pub const ROW_COUNT: usize = 12;

/// A fully validated EPC QR record.
///
/// Only [`RecordBuilder::build`] and [`Record::consumer`] create one, so every
/// `Record` that exists has passed all field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    version: Version,
    encoding: Encoding,
    bic: String,
    beneficiary: String,
    iban: String,
    amount: Euro,
    purpose: String,
    remittance_structured: String,
    remittance_unstructured: String,
    originator_information: String,
}

impl Record {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Standard consumer record for an IBAN-based transfer within the EEA.
    ///
    /// Version `002`, UTF-8, no BIC, and only the unstructured remittance.
    pub fn consumer(
        beneficiary: impl ToString,
        iban: impl ToString,
        amount: impl ToString,
        remittance: impl ToString,
    ) -> Result<Self, ValidationError> {
        Self::builder()
            .version(Version::V002)
            .encoding(Encoding::Utf8.code())
            .beneficiary(beneficiary)
            .iban(iban)
            .amount(amount)
            .remittance_unstructured(remittance)
            .build()
    }

    pub fn service_tag(&self) -> &'static str {
        SERVICE_TAG
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn identification_code(&self) -> &'static str {
        IDENTIFICATION_CODE
    }

    pub fn bic(&self) -> &str {
        &self.bic
    }

    pub fn beneficiary(&self) -> &str {
        &self.beneficiary
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn amount(&self) -> Euro {
        self.amount
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn remittance_structured(&self) -> &str {
        &self.remittance_structured
    }

    pub fn remittance_unstructured(&self) -> &str {
        &self.remittance_unstructured
    }

    pub fn originator_information(&self) -> &str {
        &self.originator_information
    }

    /// Name of the character set declared in row 3.
    pub fn resolve_encoding(&self) -> &'static str {
        self.encoding.name()
    }

    /// The twelve rows, in record order.
    pub fn rows(&self) -> [String; ROW_COUNT] {
        RecordString::from(self).into_rows()
    }

    /// The rows joined by `\n`, without a trailing newline.
    pub fn serialize(&self) -> String {
        let text = RecordString::from(self).rows().join("\n");
        log::trace!("serialized record ({} bytes)", text.len());
        text
    }

    /// [`Record::serialize`] encoded in the record's declared character set.
    pub fn serialize_to_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(self.encoding.encode(&self.serialize())?)
    }

    pub fn write_text<W: Write>(&self, mut writer: W) -> crate::Result<()> {
        writer.write_all(&self.serialize_to_bytes()?)?;
        writer.flush()?;
        Ok(())
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Collects raw field values; nothing is checked until [`RecordBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    version: String,
    encoding: String,
    bic: String,
    beneficiary: String,
    iban: String,
    amount: String,
    purpose: String,
    remittance_structured: String,
    remittance_unstructured: String,
    originator_information: String,
}

macro_rules! setters {
    ($($field:ident),* $(,)?) => {
        $(pub fn $field(mut self, value: impl ToString) -> Self {
            self.$field = value.to_string();
            self
        })*
    };
}

impl RecordBuilder {
    setters!(
        version,
        encoding,
        bic,
        beneficiary,
        iban,
        amount,
        purpose,
        remittance_structured,
        remittance_unstructured,
        originator_information,
    );

    /// Check every field and materialise the record.
    ///
    /// Stops at the first field that fails. Fields without a format of their
    /// own (BIC, purpose, structured remittance, originator information) only
    /// have to stay on one line; the BIC also feeds the version check.
    pub fn build(self) -> Result<Record, ValidationError> {
        let free_text = [
            ("bic", &self.bic),
            ("purpose", &self.purpose),
            ("remittance_structured", &self.remittance_structured),
            ("originator_information", &self.originator_information),
        ];
        for (field, value) in free_text {
            checks::validate_single_line(field, value)
                .into_result()
                .map_err(rejected(field))?;
        }
        let version = checks::parse_version(&self.version, &self.bic).map_err(rejected("version"))?;
        let encoding = checks::parse_encoding(&self.encoding).map_err(rejected("encoding"))?;
        checks::validate_beneficiary(&self.beneficiary)
            .into_result()
            .map_err(rejected("beneficiary"))?;
        checks::validate_iban(&self.iban)
            .into_result()
            .map_err(rejected("iban"))?;
        let amount = checks::parse_amount(&self.amount).map_err(rejected("amount"))?;
        checks::validate_remittance_unstructured(&self.remittance_unstructured)
            .into_result()
            .map_err(rejected("remittance_unstructured"))?;

        log::debug!("built EPC record for {}", self.beneficiary);
        Ok(Record {
            version,
            encoding,
            bic: self.bic,
            beneficiary: self.beneficiary,
            iban: self.iban,
            amount,
            purpose: self.purpose,
            remittance_structured: self.remittance_structured,
            remittance_unstructured: self.remittance_unstructured,
            originator_information: self.originator_information,
        })
    }
}

fn rejected(field: &'static str) -> impl FnOnce(ValidationError) -> ValidationError {
    move |e| {
        log::debug!("rejected {field} ({}): {e}", e.kind());
        e
    }
}
