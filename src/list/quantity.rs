//! Quantity expression grammar.
//!
//! ```text
//! "0"    -> Delete
//! "+N"   -> RelativeAdd(N)
//! "-N"   -> RelativeSubtract(N)
//! "N"    -> AbsoluteSet(N)
//! ```
//!
//! `N` is an unsigned decimal integer and must not be zero. Only the literal
//! `"0"` means delete; `"00"`, `"+0"` and `"-0"` are rejected.

use std::fmt;

use crate::error::BasketError;

/// Parsed quantity instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityExpr {
    AbsoluteSet(i64),
    RelativeAdd(i64),
    RelativeSubtract(i64),
    Delete,
}

impl QuantityExpr {
    pub fn parse(raw: &str) -> Result<Self, BasketError> {
        let input = raw.trim();
        if input == "0" {
            return Ok(Self::Delete);
        }

        if let Some(rest) = input.strip_prefix('+') {
            return parse_amount(rest, raw).map(Self::RelativeAdd);
        }
        if let Some(rest) = input.strip_prefix('-') {
            return parse_amount(rest, raw).map(Self::RelativeSubtract);
        }
        parse_amount(input, raw).map(Self::AbsoluteSet)
    }

    /// Quantity after applying this expression to `current`.
    ///
    /// `None` on arithmetic overflow. A result of zero or below means the
    /// item should be removed.
    pub fn apply_to(self, current: i64) -> Option<i64> {
        match self {
            Self::AbsoluteSet(n) => Some(n),
            Self::RelativeAdd(n) => current.checked_add(n),
            Self::RelativeSubtract(n) => current.checked_sub(n),
            Self::Delete => Some(0),
        }
    }
}

impl fmt::Display for QuantityExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsoluteSet(n) => write!(f, "{n}"),
            Self::RelativeAdd(n) => write!(f, "+{n}"),
            Self::RelativeSubtract(n) => write!(f, "-{n}"),
            Self::Delete => f.write_str("0"),
        }
    }
}

fn parse_amount(digits: &str, raw: &str) -> Result<i64, BasketError> {
    // i64 parsing would also accept a sign, which would let "+-3" through.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BasketError::invalid_quantity(raw));
    }
    match digits.parse::<i64>() {
        Ok(0) | Err(_) => Err(BasketError::invalid_quantity(raw)),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_zero_is_delete() {
        assert_eq!(QuantityExpr::parse("0"), Ok(QuantityExpr::Delete));
        assert_eq!(QuantityExpr::parse(" 0 "), Ok(QuantityExpr::Delete));
    }

    #[test]
    fn signed_forms_are_relative() {
        assert_eq!(QuantityExpr::parse("+5"), Ok(QuantityExpr::RelativeAdd(5)));
        assert_eq!(
            QuantityExpr::parse("-12"),
            Ok(QuantityExpr::RelativeSubtract(12))
        );
    }

    #[test]
    fn bare_number_is_absolute() {
        assert_eq!(QuantityExpr::parse("7"), Ok(QuantityExpr::AbsoluteSet(7)));
    }

    #[test]
    fn zero_amounts_are_rejected() {
        for input in ["+0", "-0", "00", "+000"] {
            assert!(
                matches!(
                    QuantityExpr::parse(input),
                    Err(BasketError::InvalidQuantity { .. })
                ),
                "{input} should be invalid"
            );
        }
    }

    #[test]
    fn garbage_is_rejected() {
        for input in ["", "abc", "+", "-", "1.5", "+-3", "--1", "3x", "99999999999999999999"] {
            assert!(QuantityExpr::parse(input).is_err(), "{input} should be invalid");
        }
    }

    #[test]
    fn error_keeps_raw_input() {
        assert_eq!(
            QuantityExpr::parse("abc"),
            Err(BasketError::InvalidQuantity {
                input: "abc".to_string()
            })
        );
    }

    #[test]
    fn apply_to_current_quantity() {
        assert_eq!(QuantityExpr::RelativeAdd(5).apply_to(3), Some(8));
        assert_eq!(QuantityExpr::RelativeSubtract(5).apply_to(3), Some(-2));
        assert_eq!(QuantityExpr::AbsoluteSet(4).apply_to(3), Some(4));
        assert_eq!(QuantityExpr::Delete.apply_to(3), Some(0));
        assert_eq!(QuantityExpr::RelativeAdd(1).apply_to(i64::MAX), None);
    }
}
