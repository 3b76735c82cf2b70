use std::io::{BufRead, Write};

use epc_qr_sepa::{checks, Record, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Beneficiary,
    Iban,
    Amount,
    Remittance,
}

impl Field {
    const ALL: [Field; 4] = [Field::Beneficiary, Field::Iban, Field::Amount, Field::Remittance];

    fn prompt(&self) -> &'static str {
        match self {
            Field::Beneficiary => "Enter the beneficiary",
            Field::Iban => "Enter the IBAN",
            Field::Amount => "Enter the amount",
            Field::Remittance => "Enter reason for payment",
        }
    }

    fn check(&self, value: &str) -> ValidationResult {
        match self {
            Field::Beneficiary => checks::validate_beneficiary(value),
            Field::Iban => checks::validate_iban(value),
            Field::Amount => checks::validate_amount(value),
            Field::Remittance => checks::validate_remittance_unstructured(value),
        }
    }

    pub fn rejection(&self) -> &'static str {
        match self {
            Field::Beneficiary => "The beneficiary is not valid.",
            Field::Iban => "The IBAN appears incorrect.",
            Field::Amount => "The amount appears incorrect (must be a number).",
            Field::Remittance => "The value for the remittance appears incorrect.",
        }
    }
}

/// An answer that did not pass its check. `reason` is empty when input ended early.
#[derive(Debug)]
pub struct Rejected {
    pub field: Field,
    pub reason: Option<ValidationError>,
}

/// Ask for the four consumer fields, checking each answer as soon as it is given.
pub fn ask_consumer_record<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Result<Record, Rejected>> {
    let mut answers = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        write!(out, "{}: ", field.prompt())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input ended before {:?}", field);
            return Ok(Err(Rejected {
                field,
                reason: None,
            }));
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        if let Err(reason) = field.check(&answer).into_result() {
            log::debug!("rejected {:?}: {}", field, reason);
            return Ok(Err(Rejected {
                field,
                reason: Some(reason),
            }));
        }
        answers.push(answer);
    }

    let [beneficiary, iban, amount, remittance] = <[String; 4]>::try_from(answers)
        .map_err(|_| anyhow::anyhow!("expected one answer per field"))?;
    Ok(Ok(Record::consumer(beneficiary, iban, amount, remittance)?))
}
