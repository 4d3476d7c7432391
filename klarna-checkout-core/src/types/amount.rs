//! [`MinorUnits`] represents a purchase amount in the smallest currency subunit.
//!
//! This module holds its type definition and the major-to-minor unit conversion.

use serde::Serialize;

/// A monetary amount in minor units (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorUnits(pub i64);

impl MinorUnits {
    /// Converts a decimal major-unit amount to minor units, truncating past two fractional digits.
    ///
    /// The conversion works on the shortest decimal rendering of `amount` rather than on
    /// `amount * 100.0`, so binary floating-point error never shifts the result by one.
    ///
    /// Returns `None` for non-finite values and values outside the `i64` range.
    ///
    /// ```
    /// use klarna_checkout_core::types::MinorUnits;
    ///
    /// assert_eq!(MinorUnits::from_major(12.34), Some(MinorUnits(1234)));
    /// assert_eq!(MinorUnits::from_major(0.1), Some(MinorUnits(10)));
    /// assert_eq!(MinorUnits::from_major(19.999), Some(MinorUnits(1999)));
    /// assert_eq!(MinorUnits::from_major(f64::NAN), None);
    /// ```
    pub fn from_major(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        // `Display` for f64 is the shortest round-trip form and never uses exponent notation.
        let rendered = amount.abs().to_string();
        let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let cents: String = fraction
            .chars()
            .chain(std::iter::repeat('0'))
            .take(2)
            .collect();

        let magnitude = whole
            .parse::<i64>()
            .ok()?
            .checked_mul(100)?
            .checked_add(cents.parse::<i64>().ok()?)?;

        Some(if amount.is_sign_negative() {
            MinorUnits(-magnitude)
        } else {
            MinorUnits(magnitude)
        })
    }
}

impl Serialize for MinorUnits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}
