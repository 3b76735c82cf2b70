use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use rust_decimal::Decimal;

/// An amount of euros, kept as an exact decimal.
///
/// Exact within the 28 significant digits of [`Decimal`]; parsing rounds away
/// fractional digits beyond that. Nothing here enforces the EPC bounds, that
/// is the job of the amount check.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
pub struct Euro(Decimal);

impl Euro {
    /// The form used in row 8 of an EPC record, e.g. `EUR123.45`.
    pub fn epc_string(&self) -> String {
        format!("EUR{}", self.two_places())
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// true if rounding to the nearest cent does not change the value
    pub fn is_whole_cents(&self) -> bool {
        self.0.round_dp(2) == self.0
    }

    fn two_places(&self) -> Decimal {
        let mut value = self.0;
        value.rescale(2);
        value
    }
}

impl FromStr for Euro {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Euro)
    }
}

impl From<Decimal> for Euro {
    fn from(value: Decimal) -> Self {
        Euro(value)
    }
}

macro_rules! from_integer_type {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Euro {
            fn from(value: $t) -> Self {
                Euro(Decimal::from(value))
            }
        })*
    };
}

from_integer_type!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Debug for Euro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Euro").field(&self.0).finish()
    }
}

impl Display for Euro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "€{}", self.two_places())
    }
}
