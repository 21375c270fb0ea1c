//! Transaction amount in centavos.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A BRL amount stored in centavos (smallest currency unit).
///
/// Integer storage avoids floating-point drift; the wire format demands
/// exactly two fractional digits, which `Display` produces (`10.00`,
/// `0.50`). A zero or negative amount is not constructible: a request with
/// no fixed amount omits the field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates an Amount from centavos.
    pub fn from_centavos(centavos: i64) -> Result<Self, DomainError> {
        if centavos <= 0 {
            return Err(DomainError::InvalidAmount(format!(
                "amount must be positive, got {} centavos",
                centavos
            )));
        }
        Ok(Self(centavos))
    }

    /// Returns the amount in centavos.
    pub fn centavos(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    /// Parses a decimal string with at most two fractional digits.
    /// No thousands separators, no currency symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(DomainError::InvalidAmount("empty amount".into()));
        }
        if frac.len() > 2 {
            return Err(DomainError::InvalidAmount(format!(
                "{:?} has more than two fractional digits",
                s
            )));
        }
        let digits_ok = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !digits_ok(whole) || !digits_ok(frac) {
            return Err(DomainError::InvalidAmount(format!(
                "{:?} is not a plain decimal number",
                s
            )));
        }
        let whole_part: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| DomainError::InvalidAmount(format!("{:?} is out of range", s)))?
        };
        let frac_part: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };
        let centavos = whole_part
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_part))
            .ok_or_else(|| DomainError::InvalidAmount(format!("{:?} is out of range", s)))?;
        Self::from_centavos(centavos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centavos() {
        let amount = Amount::from_centavos(1000).unwrap();
        assert_eq!(amount.centavos(), 1000);
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(matches!(
            Amount::from_centavos(0),
            Err(DomainError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_centavos(-50),
            Err(DomainError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_display_two_fraction_digits() {
        assert_eq!(Amount::from_centavos(1000).unwrap().to_string(), "10.00");
        assert_eq!(Amount::from_centavos(50).unwrap().to_string(), "0.50");
        assert_eq!(Amount::from_centavos(150000).unwrap().to_string(), "1500.00");
        assert_eq!(Amount::from_centavos(1).unwrap().to_string(), "0.01");
    }

    #[test]
    fn test_parse_common_forms() {
        assert_eq!("10.00".parse::<Amount>().unwrap().centavos(), 1000);
        assert_eq!("10".parse::<Amount>().unwrap().centavos(), 1000);
        assert_eq!("10.5".parse::<Amount>().unwrap().centavos(), 1050);
        assert_eq!("0.01".parse::<Amount>().unwrap().centavos(), 1);
        assert_eq!(".50".parse::<Amount>().unwrap().centavos(), 50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Amount>().is_err());
        assert!("10,00".parse::<Amount>().is_err());
        assert!("1.234".parse::<Amount>().is_err());
        assert!("-5.00".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
        assert!("0.00".parse::<Amount>().is_err());
    }

    #[test]
    fn test_parse_display_roundtrip() {
        let amount: Amount = "1500.00".parse().unwrap();
        assert_eq!(amount.to_string(), "1500.00");
        assert_eq!(amount.to_string().parse::<Amount>().unwrap(), amount);
    }
}
