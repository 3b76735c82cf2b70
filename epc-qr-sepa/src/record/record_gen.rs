use super::{IDENTIFICATION_CODE, ROW_COUNT, SERVICE_TAG};

/// A [`super::Record`] with every field rendered as its row text.
pub(super) struct RecordString {
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

impl RecordString {
    pub(super) fn rows(&self) -> [&str; ROW_COUNT] {
        [
            SERVICE_TAG,
            &self.version,
            &self.encoding,
            IDENTIFICATION_CODE,
            &self.bic,
            &self.beneficiary,
            &self.iban,
            &self.amount,
            &self.purpose,
            &self.remittance_structured,
            &self.remittance_unstructured,
            &self.originator_information,
        ]
    }

    pub(super) fn into_rows(self) -> [String; ROW_COUNT] {
        self.rows().map(str::to_string)
    }
}

impl From<&super::Record> for RecordString {
    fn from(value: &super::Record) -> Self {
        Self {
            version: value.version.to_string(),
            encoding: value.encoding.code().to_string(),
            bic: value.bic.clone(),
            beneficiary: value.beneficiary.clone(),
            iban: value.iban.clone(),
            amount: value.amount.epc_string(),
            purpose: value.purpose.clone(),
            remittance_structured: value.remittance_structured.clone(),
            remittance_unstructured: value.remittance_unstructured.clone(),
            originator_information: value.originator_information.clone(),
        }
    }
}
