//! Computed body mass index values.

use std::fmt::{self, Display};

use crate::category::Category;

/// A computed body mass index.
///
/// Produced only from a validated [`Measurement`](crate::Measurement), so the
/// wrapped value is always positive and finite. Displayed with exactly two
/// decimal digits.
///
/// # Examples
///
/// ```
/// use bmical_core::Measurement;
///
/// let bmi = Measurement::new(1.75, 70.0).unwrap().bmi();
/// assert_eq!(bmi.to_string(), "22.86");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bmi(f64);

impl Bmi {
    pub(crate) fn from_value(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw index value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmical_core::Measurement;
    ///
    /// let bmi = Measurement::new(2.0, 100.0).unwrap().bmi();
    /// assert_eq!(bmi.value(), 25.0);
    /// ```
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the WHO classification band for this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmical_core::{Category, Measurement};
    ///
    /// let bmi = Measurement::new(1.75, 70.0).unwrap().bmi();
    /// assert_eq!(bmi.category(), Category::Normal);
    /// ```
    #[must_use]
    pub fn category(&self) -> Category {
        Category::of(self.0)
    }
}

impl Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
