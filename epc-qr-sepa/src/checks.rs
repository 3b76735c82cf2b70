//! Field checks for EPC records.
//!
//! Every check is a pure function returning a [`ValidationResult`]. Deciding
//! whether a failure is fatal is left to the caller.

use std::fmt::Display;

use epc_qr_types::{Encoding, Euro, Version};
use rust_decimal::Decimal;

pub const BENEFICIARY_MAX_LEN: usize = 70;
pub const REMITTANCE_MAX_LEN: usize = 140;
pub const BBAN_MAX_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidEnum,
    MissingDependency,
    TypeMismatch,
    OutOfRange,
    PrecisionError,
    NotAlphanumeric,
    LengthExceeded,
    InvalidCountryCode,
    InvalidCheckDigits,
    SchemaMismatch,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::InvalidEnum => "invalid enum",
            ErrorKind::MissingDependency => "missing dependency",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::PrecisionError => "precision error",
            ErrorKind::NotAlphanumeric => "not alphanumeric",
            ErrorKind::LengthExceeded => "length exceeded",
            ErrorKind::InvalidCountryCode => "invalid country code",
            ErrorKind::InvalidCheckDigits => "invalid check digits",
            ErrorKind::SchemaMismatch => "schema mismatch",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl ToString) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { kind: ErrorKind, message: String },
}

impl ValidationResult {
    fn invalid(kind: ErrorKind, message: impl ToString) -> Self {
        ValidationResult::Invalid {
            kind,
            message: message.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { kind, .. } => Some(*kind),
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { kind, message } => Err(ValidationError { kind, message }),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(value: Result<(), ValidationError>) -> Self {
        match value {
            Ok(()) => ValidationResult::Valid,
            Err(ValidationError { kind, message }) => ValidationResult::Invalid { kind, message },
        }
    }
}

/// Spaces are allowed in free text, everything else has to be a letter or digit.
fn is_alphanumeric_text(value: &str) -> bool {
    let mut chars = value.chars().filter(|c| *c != ' ').peekable();
    chars.peek().is_some() && chars.all(char::is_alphanumeric)
}

pub fn parse_version(value: &str, bic: &str) -> Result<Version, ValidationError> {
    let Ok(version) = value.parse::<Version>() else {
        let valid = Version::ALL.map(|v| v.as_str());
        return Err(ValidationError::new(
            ErrorKind::InvalidEnum,
            format!("invalid version `{value}` (choose from {valid:?})"),
        ));
    };
    if version.requires_bic() && bic.is_empty() {
        return Err(ValidationError::new(
            ErrorKind::MissingDependency,
            format!("version {version} requires a BIC"),
        ));
    }
    Ok(version)
}

pub fn validate_version(value: &str, bic: &str) -> ValidationResult {
    parse_version(value, bic).map(|_| ()).into()
}

pub fn parse_amount(value: &str) -> Result<Euro, ValidationError> {
    let amount: Euro = value.parse().map_err(|_| {
        // a real number too large or too small for the decimal type
        if value.trim().parse::<f64>().is_ok_and(f64::is_finite) {
            ValidationError::new(
                ErrorKind::OutOfRange,
                format!("the amount {} is out of bounds", value.trim()),
            )
        } else {
            ValidationError::new(
                ErrorKind::TypeMismatch,
                format!("the amount `{value}` is not a number"),
            )
        }
    })?;
    let min = Decimal::new(1, 2);
    let max = Decimal::new(99_999_999_999, 2);
    if !(min..=max).contains(&amount.amount()) {
        return Err(ValidationError::new(
            ErrorKind::OutOfRange,
            format!("the amount {} is out of bounds", amount.amount()),
        ));
    }
    if !amount.is_whole_cents() {
        return Err(ValidationError::new(
            ErrorKind::PrecisionError,
            "the amount is not a two-digit decimal number",
        ));
    }
    Ok(amount)
}

pub fn validate_amount(value: &str) -> ValidationResult {
    parse_amount(value).map(|_| ()).into()
}

pub fn parse_encoding(value: &str) -> Result<Encoding, ValidationError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Encoding::from_code)
        .ok_or_else(|| {
            ValidationError::new(
                ErrorKind::OutOfRange,
                format!("encoding must be between 1 and 8, got `{value}`"),
            )
        })
}

pub fn validate_encoding(value: &str) -> ValidationResult {
    parse_encoding(value).map(|_| ()).into()
}

pub fn validate_beneficiary(value: &str) -> ValidationResult {
    if !is_alphanumeric_text(value) {
        return ValidationResult::invalid(
            ErrorKind::NotAlphanumeric,
            "beneficiary is not alphanumeric",
        );
    }
    if !(1..=BENEFICIARY_MAX_LEN).contains(&value.chars().count()) {
        return ValidationResult::invalid(
            ErrorKind::LengthExceeded,
            format!("beneficiary is mandatory, and must not exceed {BENEFICIARY_MAX_LEN} characters"),
        );
    }
    ValidationResult::Valid
}

/// Structural IBAN check.
///
/// Only the shape is checked: a letter first, digits at positions 2 and 3 and
/// a BBAN of at most 30 characters. The mod-97 checksum is *not* verified.
pub fn validate_iban(value: &str) -> ValidationResult {
    if value.is_empty() || !value.chars().all(char::is_alphanumeric) {
        return ValidationResult::invalid(ErrorKind::NotAlphanumeric, "iban is not alphanumeric");
    }
    let chars = value.chars().collect::<Vec<_>>();
    if !chars[0].is_alphabetic() {
        return ValidationResult::invalid(
            ErrorKind::InvalidCountryCode,
            "invalid iban country code",
        );
    }
    match chars.get(2..4) {
        Some(check_digits) if check_digits.iter().all(char::is_ascii_digit) => {}
        _ => {
            return ValidationResult::invalid(ErrorKind::InvalidCheckDigits, "invalid check digits")
        }
    }
    let bban = chars.len() - 4;
    if bban > BBAN_MAX_LEN {
        return ValidationResult::invalid(
            ErrorKind::LengthExceeded,
            format!("bban is too long ({bban} > {BBAN_MAX_LEN} characters)"),
        );
    }
    ValidationResult::Valid
}

/// Fields without a format of their own still have to stay on their row.
pub fn validate_single_line(field: &str, value: &str) -> ValidationResult {
    if value.contains(['\n', '\r']) {
        return ValidationResult::invalid(
            ErrorKind::NotAlphanumeric,
            format!("{field} must not contain line breaks"),
        );
    }
    ValidationResult::Valid
}

pub fn validate_remittance_unstructured(value: &str) -> ValidationResult {
    if !is_alphanumeric_text(value) {
        return ValidationResult::invalid(
            ErrorKind::NotAlphanumeric,
            "unstructured remittance is not alphanumeric",
        );
    }
    if value.chars().count() > REMITTANCE_MAX_LEN {
        return ValidationResult::invalid(
            ErrorKind::LengthExceeded,
            format!("unstructured remittance exceeds {REMITTANCE_MAX_LEN} characters"),
        );
    }
    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use super::*;

    fn valid_dummy_iban() -> String {
        format!("DE{}", "1".repeat(18))
    }

    #[test]
    fn version() {
        assert_eq!(validate_version("001", "").kind(), Some(ErrorKind::MissingDependency));
        assert!(validate_version("001", "BFSWDE33BER").is_valid());
        assert!(validate_version("002", "").is_valid());
        for bad in ["003", "000", "00", "0", ""] {
            assert_eq!(validate_version(bad, "").kind(), Some(ErrorKind::InvalidEnum), "{bad}");
        }
    }

    #[test]
    fn amount_rejections() {
        let cases = [
            ("0", ErrorKind::OutOfRange),
            ("-1", ErrorKind::OutOfRange),
            ("1000000000", ErrorKind::OutOfRange),
            ("10.001", ErrorKind::PrecisionError),
            ("0.011", ErrorKind::PrecisionError),
            ("999999999.99+0.01", ErrorKind::TypeMismatch),
            ("ten", ErrorKind::TypeMismatch),
            ("", ErrorKind::TypeMismatch),
            ("inf", ErrorKind::TypeMismatch),
            ("1e30", ErrorKind::OutOfRange),
            ("1e300", ErrorKind::OutOfRange),
            ("-1e30", ErrorKind::OutOfRange),
            ("99999999999999999999999999999999", ErrorKind::OutOfRange),
        ];
        for (value, kind) in cases {
            assert_eq!(validate_amount(value).kind(), Some(kind), "{value}");
        }
    }

    #[test]
    fn amount_bounds_are_inclusive() {
        assert!(validate_amount("0.01").is_valid());
        assert!(validate_amount("999999999.99").is_valid());
        assert!(validate_amount("12.2").is_valid());
        assert!(validate_amount("12.200").is_valid());
        assert_eq!(parse_amount("123.45").unwrap().epc_string(), "EUR123.45");
    }

    #[test]
    fn amount_message_names_value() {
        let err = parse_amount("0").unwrap_err();
        assert_eq!(err.message(), "the amount 0 is out of bounds");
    }

    #[test]
    fn encoding() {
        for code in 1..=8 {
            assert!(validate_encoding(&code.to_string()).is_valid());
        }
        for bad in ["0", "9", "-1", "x", "", "1.5"] {
            assert_eq!(validate_encoding(bad).kind(), Some(ErrorKind::OutOfRange), "{bad}");
        }
        assert_eq!(parse_encoding("8").unwrap().name(), "ISO-8859-15");
    }

    #[test]
    fn beneficiary() {
        assert!(validate_beneficiary("me").is_valid());
        assert!(validate_beneficiary("Wikimedia Foerdergesellschaft").is_valid());
        assert!(validate_beneficiary("Wikimedia Fördergesellschaft").is_valid());
        assert!(validate_beneficiary(&"a".repeat(70)).is_valid());
        assert_eq!(
            validate_beneficiary(&"a".repeat(71)).kind(),
            Some(ErrorKind::LengthExceeded)
        );
        assert_eq!(validate_beneficiary("§23").kind(), Some(ErrorKind::NotAlphanumeric));
        assert_eq!(validate_beneficiary("").kind(), Some(ErrorKind::NotAlphanumeric));
        assert_eq!(validate_beneficiary("   ").kind(), Some(ErrorKind::NotAlphanumeric));
    }

    #[test]
    fn iban() {
        assert!(validate_iban("DE33100205000001194700").is_valid());
        assert!(validate_iban(&valid_dummy_iban()).is_valid());
        assert_eq!(validate_iban("DEA1").kind(), Some(ErrorKind::InvalidCheckDigits));
        assert_eq!(validate_iban("DE1A").kind(), Some(ErrorKind::InvalidCheckDigits));
        assert_eq!(validate_iban("DE").kind(), Some(ErrorKind::InvalidCheckDigits));
        assert_eq!(validate_iban("123").kind(), Some(ErrorKind::InvalidCountryCode));
        assert_eq!(validate_iban("DE12%").kind(), Some(ErrorKind::NotAlphanumeric));
        assert_eq!(validate_iban("").kind(), Some(ErrorKind::NotAlphanumeric));
        assert_eq!(
            validate_iban(&format!("DE12{}", "a".repeat(31))).kind(),
            Some(ErrorKind::LengthExceeded)
        );
        assert!(validate_iban(&format!("DE12{}", "a".repeat(30))).is_valid());
    }

    #[test]
    fn iban_checksum_is_not_verified() {
        // wrong check digits, structurally fine
        assert!(validate_iban("DE00100205000001194700").is_valid());
    }

    #[test]
    fn remittance() {
        assert!(validate_remittance_unstructured("Spende fuer Wikipedia").is_valid());
        assert!(validate_remittance_unstructured(&"a".repeat(140)).is_valid());
        assert_eq!(
            validate_remittance_unstructured(&"a".repeat(141)).kind(),
            Some(ErrorKind::LengthExceeded)
        );
        assert_eq!(
            validate_remittance_unstructured(&"%".repeat(141)).kind(),
            Some(ErrorKind::NotAlphanumeric)
        );
        assert_eq!(
            validate_remittance_unstructured("DE12%").kind(),
            Some(ErrorKind::NotAlphanumeric)
        );
        assert_eq!(
            validate_remittance_unstructured("").kind(),
            Some(ErrorKind::NotAlphanumeric)
        );
    }

    #[test]
    fn single_line() {
        assert!(validate_single_line("purpose", "").is_valid());
        assert!(validate_single_line("purpose", "CHAR").is_valid());
        for bad in ["a\nb", "a\rb", "\n"] {
            let res = validate_single_line("purpose", bad);
            assert_eq!(res.kind(), Some(ErrorKind::NotAlphanumeric), "{bad:?}");
        }
        let err = validate_single_line("bic", "X\n").into_result().unwrap_err();
        assert_eq!(err.message(), "bic must not contain line breaks");
    }

    #[test]
    fn result_conversion() {
        let err = validate_iban("123").into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCountryCode);
        assert_eq!(err.to_string(), "invalid iban country code");
        assert_eq!(ValidationResult::from(Err::<(), _>(err)).kind(), Some(ErrorKind::InvalidCountryCode));
        assert_eq!(validate_iban("DE33100205000001194700").into_result(), Ok(()));
    }

    proptest! {
        #[test]
        fn amount_valid_iff_in_range_with_cents(cents in -1_000i64..2_000, scale in 0u32..5) {
            let value = Decimal::new(cents, scale);
            let in_range = value >= Decimal::new(1, 2) && value <= Decimal::new(99_999_999_999, 2);
            let whole_cents = value.round_dp(2) == value;
            prop_assert_eq!(validate_amount(&value.to_string()).is_valid(), in_range && whole_cents);
        }

        #[test]
        fn amount_upper_bound(cents in 99_999_999_900i64..100_000_000_100) {
            let value = Decimal::new(cents, 2);
            prop_assert_eq!(
                validate_amount(&value.to_string()).is_valid(),
                cents <= 99_999_999_999
            );
        }

        #[test]
        fn beneficiary_valid_iff_short_alphanumeric(s in "[a-zA-Z0-9 äß%.-]{0,80}") {
            let stripped = s.replace(' ', "");
            let expected = (1..=70).contains(&s.chars().count())
                && !stripped.is_empty()
                && stripped.chars().all(char::is_alphanumeric);
            prop_assert_eq!(validate_beneficiary(&s).is_valid(), expected);
        }

        #[test]
        fn validators_never_panic(s in "\\PC*") {
            let _ = validate_version(&s, &s);
            let _ = validate_amount(&s);
            let _ = validate_encoding(&s);
            let _ = validate_beneficiary(&s);
            let _ = validate_iban(&s);
            let _ = validate_remittance_unstructured(&s);
        }
    }
}
