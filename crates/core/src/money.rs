//! Money in integer minor units.
//!
//! All arithmetic happens on minor units (cents). Decimal text only appears
//! when parsing user/config input and when formatting for display.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: u64 = 100;

/// A non-negative amount in minor currency units.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(u64::MAX);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn from_major_minor(major: u64, minor: u64) -> Self {
        Self(major * MINOR_PER_MAJOR + minor)
    }

    pub const fn minor(self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Unit price times a quantity.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Portion of this amount expressed in basis points (1/100 of a percent),
    /// rounded half-up to the nearest minor unit.
    pub fn basis_points(self, bps: u32) -> Money {
        let scaled = u128::from(self.0) * u128::from(bps) + 5_000;
        Money(u64::try_from(scaled / 10_000).unwrap_or(u64::MAX))
    }

    /// Amount after removing `percent` percent, rounded half-up.
    pub fn discounted(self, percent: u8) -> Money {
        let keep = 100u32.saturating_sub(u32::from(percent));
        self.basis_points(keep * 100)
    }

    /// Parse a decimal amount such as `"129.99"`, `"200"` or `"5.5"`.
    ///
    /// Negative values, more than two fractional digits, and anything that is
    /// not plain digits are rejected.
    pub fn parse_decimal(raw: &str) -> DomainResult<Money> {
        let trimmed = raw.trim();
        let invalid = || DomainError::validation(format!("invalid amount '{raw}'"));

        let (major, fraction) = match trimmed.split_once('.') {
            Some((major, fraction)) => (major, fraction),
            None => (trimmed, ""),
        };

        if major.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !major.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || fraction.len() > 2
        {
            return Err(invalid());
        }

        let major: u64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| invalid())?
        };
        let minor: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .map(Money)
            .ok_or_else(invalid)
    }

    /// Display adapter for a currency (`$1,599.99`, `KSh 1,599.99`).
    pub fn display(self, currency: Currency) -> MoneyDisplay {
        MoneyDisplay {
            amount: self,
            currency,
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// Display currency. Selects the symbol and the checkout fee schedule; amounts
/// are never converted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Kes,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Kes => "KES",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Kes => "KSh ",
        }
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "KES" | "KSH" => Ok(Currency::Kes),
            other => Err(DomainError::validation(format!("unknown currency '{other}'"))),
        }
    }
}

/// Formats a [`Money`] amount with grouping separators.
#[derive(Debug, Copy, Clone)]
pub struct MoneyDisplay {
    amount: Money,
    currency: Currency,
}

impl fmt::Display for MoneyDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.amount.0 / MINOR_PER_MAJOR;
        let minor = self.amount.0 % MINOR_PER_MAJOR;

        let digits = major.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        write!(f, "{}{}.{:02}", self.currency.prefix(), grouped, minor)
    }
}
