use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::types::{format_one_dp, round_display};

/// Period-over-period change in percent.
///
/// On the wire a change is a one-decimal string (`"12.5"`), and the sentinel
/// is the bare number `0`. Consumers tell "no comparison" apart from
/// "flat" (`"0.0"`) by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentChange {
    /// Previous or current value missing/zero, or the ratio overflowed.
    NotComparable,
    /// Change rounded to one decimal place.
    Change(Decimal),
}

impl PercentChange {
    /// Numeric value; the sentinel reads as zero.
    pub fn value(&self) -> Decimal {
        match self {
            PercentChange::NotComparable => Decimal::ZERO,
            PercentChange::Change(d) => *d,
        }
    }

    /// Trend arrow direction. The sentinel counts as non-negative.
    pub fn is_positive(&self) -> bool {
        self.value() >= Decimal::ZERO
    }

    /// Absolute size of the change, for "x% from previous month" labels.
    pub fn magnitude(&self) -> Decimal {
        self.value().abs()
    }

    pub fn is_comparable(&self) -> bool {
        matches!(self, PercentChange::Change(_))
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::NotComparable => f.write_str("0"),
            PercentChange::Change(d) => f.write_str(&format_one_dp(*d)),
        }
    }
}

impl Serialize for PercentChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PercentChange::NotComparable => serializer.serialize_u8(0),
            PercentChange::Change(d) => serializer.serialize_str(&format_one_dp(*d)),
        }
    }
}

struct PercentChangeVisitor;

impl<'de> Visitor<'de> for PercentChangeVisitor {
    type Value = PercentChange;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a one-decimal percentage string or the number 0")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PercentChange, E> {
        if v == 0 {
            Ok(PercentChange::NotComparable)
        } else {
            Err(E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PercentChange, E> {
        if v == 0 {
            Ok(PercentChange::NotComparable)
        } else {
            Err(E::invalid_value(de::Unexpected::Signed(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PercentChange, E> {
        v.parse::<Decimal>()
            .map(PercentChange::Change)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for PercentChange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PercentChangeVisitor)
    }
}

/// `((current - previous) / previous) * 100`, rounded to one decimal place.
///
/// Returns [`PercentChange::NotComparable`] when either side is zero or the
/// arithmetic overflows. A genuine drop to zero is reported as not comparable.
pub fn percentage_change(current: Decimal, previous: Decimal) -> PercentChange {
    if previous.is_zero() || current.is_zero() {
        return PercentChange::NotComparable;
    }

    let change = current
        .checked_sub(previous)
        .and_then(|delta| delta.checked_div(previous))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));

    match change {
        Some(pct) => PercentChange::Change(round_display(pct, 1)),
        None => PercentChange::NotComparable,
    }
}
