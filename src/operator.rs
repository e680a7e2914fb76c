//! Comparison operators and the bitmask codec.

use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::IntoEnumIterator;

/// Bit for "installed version is less than the target".
pub const LESS: u8 = 0x02;
/// Bit for "installed version is greater than the target".
pub const GREATER: u8 = 0x04;
/// Bit for "installed version is equal to the target".
pub const EQUAL: u8 = 0x08;

/// Recognized masks, in decode precedence order (composed masks first).
const DECODE_TABLE: [(u8, Operator); 5] = [
    (GREATER | EQUAL, Operator::GreaterOrEqual),
    (LESS | EQUAL, Operator::LessOrEqual),
    (EQUAL, Operator::Equal),
    (GREATER, Operator::Greater),
    (LESS, Operator::Less),
];

/// A relational operator applied as `installed <op> target`.
///
/// The five variants are the only valid comparisons; a mask such as
/// `LESS | GREATER` has no `Operator` value and is rejected by
/// [`Operator::from_bits`].
///
/// # Example
///
/// ```rust
/// use requires_version::{Operator, EQUAL, GREATER};
///
/// let op = Operator::from_bits(GREATER | EQUAL).unwrap();
/// assert_eq!(op, Operator::GreaterOrEqual);
/// assert_eq!(op.to_string(), ">=");
/// assert_eq!(">=".parse::<Operator>().unwrap(), op);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Operator {
    /// `<`
    #[serde(rename = "<")]
    #[strum(to_string = "<")]
    Less,
    /// `>`
    #[serde(rename = ">")]
    #[strum(to_string = ">")]
    Greater,
    /// `=`; `==` is accepted when parsing.
    #[serde(rename = "=", alias = "==")]
    #[strum(to_string = "=", serialize = "==")]
    Equal,
    /// `<=`
    #[serde(rename = "<=")]
    #[strum(to_string = "<=")]
    LessOrEqual,
    /// `>=`
    #[serde(rename = ">=")]
    #[strum(to_string = ">=")]
    GreaterOrEqual,
}

impl Operator {
    /// Decode a bitmask built from [`LESS`], [`GREATER`] and [`EQUAL`].
    ///
    /// Returns [`VersionError::InvalidOperator`] for `0`, for any mask
    /// combining `LESS` and `GREATER`, and for unknown bits.
    pub fn from_bits(bits: u8) -> Result<Self> {
        DECODE_TABLE
            .iter()
            .find(|(mask, _)| *mask == bits)
            .map(|(_, op)| *op)
            .ok_or(VersionError::InvalidOperator { bits })
    }

    /// The bitmask this operator decodes from.
    pub fn bits(self) -> u8 {
        match self {
            Self::Less => LESS,
            Self::Greater => GREATER,
            Self::Equal => EQUAL,
            Self::LessOrEqual => LESS | EQUAL,
            Self::GreaterOrEqual => GREATER | EQUAL,
        }
    }

    /// The comparison token (`=`, `<`, `>`, `<=`, `>=`).
    pub fn token(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
        }
    }

    /// Whether `installed.cmp(target)` satisfies this operator.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Self::Less => ordering == Ordering::Less,
            Self::Greater => ordering == Ordering::Greater,
            Self::Equal => ordering == Ordering::Equal,
            Self::LessOrEqual => ordering != Ordering::Greater,
            Self::GreaterOrEqual => ordering != Ordering::Less,
        }
    }

    /// Iterator over all five operators.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl TryFrom<u8> for Operator {
    type Error = VersionError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_bits() {
        assert_eq!(Operator::from_bits(LESS), Ok(Operator::Less));
        assert_eq!(Operator::from_bits(GREATER), Ok(Operator::Greater));
        assert_eq!(Operator::from_bits(EQUAL), Ok(Operator::Equal));
    }

    #[test]
    fn test_decode_composed_bits() {
        assert_eq!(Operator::from_bits(LESS | EQUAL), Ok(Operator::LessOrEqual));
        assert_eq!(
            Operator::from_bits(EQUAL | GREATER),
            Ok(Operator::GreaterOrEqual)
        );
    }

    #[test]
    fn test_decode_rejects_invalid_masks() {
        for bits in [0, LESS | GREATER, LESS | GREATER | EQUAL, 0x01, 0x10, 0xff] {
            assert_eq!(
                Operator::from_bits(bits),
                Err(VersionError::InvalidOperator { bits }),
                "mask {bits:#04x} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_is_stable() {
        for op in Operator::all() {
            let first = Operator::from_bits(op.bits()).unwrap();
            let second = Operator::from_bits(op.bits()).unwrap();
            assert_eq!(first, op);
            assert_eq!(first.token(), second.token());
        }
    }

    #[test]
    fn test_tokens() {
        assert_eq!(Operator::Equal.token(), "=");
        assert_eq!(Operator::Less.token(), "<");
        assert_eq!(Operator::Greater.token(), ">");
        assert_eq!(Operator::LessOrEqual.token(), "<=");
        assert_eq!(Operator::GreaterOrEqual.token(), ">=");
    }

    #[test]
    fn test_display_matches_token() {
        for op in Operator::all() {
            assert_eq!(op.to_string(), op.token());
        }
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("<".parse::<Operator>().unwrap(), Operator::Less);
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::GreaterOrEqual);
        assert_eq!("==".parse::<Operator>().unwrap(), Operator::Equal);
        assert!("=>".parse::<Operator>().is_err());
    }

    #[test]
    fn test_matches_orderings() {
        use Ordering::*;

        assert!(Operator::Less.matches(Less));
        assert!(!Operator::Less.matches(Equal));
        assert!(Operator::Greater.matches(Greater));
        assert!(!Operator::Greater.matches(Equal));
        assert!(Operator::Equal.matches(Equal));
        assert!(!Operator::Equal.matches(Less));
        assert!(Operator::LessOrEqual.matches(Less));
        assert!(Operator::LessOrEqual.matches(Equal));
        assert!(!Operator::LessOrEqual.matches(Greater));
        assert!(Operator::GreaterOrEqual.matches(Greater));
        assert!(Operator::GreaterOrEqual.matches(Equal));
        assert!(!Operator::GreaterOrEqual.matches(Less));
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Operator::try_from(GREATER), Ok(Operator::Greater));
        assert!(Operator::try_from(LESS | GREATER).is_err());
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&Operator::GreaterOrEqual).unwrap();
        assert_eq!(json, "\">=\"");

        let op: Operator = serde_json::from_str("\"==\"").unwrap();
        assert_eq!(op, Operator::Equal);
    }
}
