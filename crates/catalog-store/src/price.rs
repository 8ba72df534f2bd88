//! Decimal product prices.
//!
//! Prices are stored in cents to avoid floating-point drift. Snapshots and
//! API payloads carry them as decimal numbers (`12.99`), so serde goes
//! through the decimal form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of fractional digits a price carries.
const DECIMAL_PLACES: u32 = 2;

/// A product price in the store's single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from a decimal amount, rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and amounts whose cents do not fit
    /// in an `i64`.
    ///
    /// ```
    /// use catalog_store::Price;
    /// assert_eq!(Price::from_decimal(49.99).map(|p| p.cents()), Some(4999));
    /// assert_eq!(Price::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        let multiplier = 10_i64.pow(DECIMAL_PLACES);
        let cents = (amount * multiplier as f64).round();
        // i64::MAX is not representable; its nearest f64 is 2^63.
        let in_range = cents >= i64::MIN as f64 && cents < i64::MAX as f64;
        (cents.is_finite() && in_range).then(|| Self::from_cents(cents as i64))
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(DECIMAL_PLACES);
        self.cents as f64 / divisor as f64
    }

    /// Format as a plain decimal string (e.g., "49.99").
    pub fn to_decimal_string(&self) -> String {
        let divisor = 10_i64.pow(DECIMAL_PLACES);
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!(
            "{}{}.{:0width$}",
            sign,
            abs / divisor as u64,
            abs % divisor as u64,
            width = DECIMAL_PLACES as usize
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let (amount, raw) = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => (n, n.to_string()),
            Raw::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => (n, s),
                Err(_) => return Err(serde::de::Error::custom(format!("invalid price: {s:?}"))),
            },
        };
        Price::from_decimal(amount)
            .ok_or_else(|| serde::de::Error::custom(format!("price out of range: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_decimal() {
        assert_eq!(Price::from_decimal(49.99), Some(Price::from_cents(4999)));
        assert_eq!(Price::from_decimal(0.1 + 0.2), Some(Price::from_cents(30)));
        assert_eq!(Price::from_decimal(f64::INFINITY), None);
        assert_eq!(Price::from_decimal(1e300), None);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(4999).to_string(), "49.99");
        assert_eq!(Price::from_cents(500).to_string(), "5.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
        assert_eq!(Price::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn test_price_serde_accepts_number_and_string() {
        let a: Price = serde_json::from_str("12.5").unwrap();
        let b: Price = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "12.5");
        assert!(serde_json::from_str::<Price>("\"twelve\"").is_err());
    }

    #[test]
    fn test_price_serde_rejects_non_finite_and_out_of_range() {
        for raw in [r#""NaN""#, r#""inf""#, r#""-infinity""#, "1e300", r#""1e17""#] {
            let err = serde_json::from_str::<Price>(raw).unwrap_err();
            assert!(err.to_string().contains("price"), "{raw}: {err}");
        }
    }
}
