//! Validated height/weight measurements.

use crate::bmi::Bmi;

/// A validated pair of body measurements.
///
/// A `Measurement` can only be constructed through [`Measurement::new`], which
/// rejects non-positive and non-finite components. Every existing value
/// therefore satisfies `height_m > 0` and `weight_kg > 0`, and computing a BMI
/// from it cannot fail.
///
/// Measurements are transient: created per calculation request and discarded
/// afterwards. They carry no identity and are never mutated.
///
/// # Examples
///
/// ```
/// use bmical_core::Measurement;
///
/// let m = Measurement::new(1.75, 70.0).unwrap();
/// assert_eq!(m.height_m(), 1.75);
/// assert_eq!(m.weight_kg(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    height_m: f64,
    weight_kg: f64,
}

/// Errors rejecting an invalid height/weight pair.
///
/// Height is checked before weight, so a pair that is invalid on both counts
/// reports the height variant.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum MeasurementError {
    /// Height was zero or negative.
    #[display("height must be positive, got {value} m")]
    NonPositiveHeight {
        /// The rejected height in meters.
        value: f64,
    },
    /// Weight was zero or negative.
    #[display("weight must be positive, got {value} kg")]
    NonPositiveWeight {
        /// The rejected weight in kilograms.
        value: f64,
    },
    /// Height was NaN or infinite.
    #[display("height must be finite")]
    NonFiniteHeight,
    /// Weight was NaN or infinite.
    #[display("weight must be finite")]
    NonFiniteWeight,
}

impl Measurement {
    /// Creates a measurement from a height in meters and a weight in kilograms.
    ///
    /// No upper bound is enforced on either component.
    ///
    /// # Errors
    ///
    /// Returns the matching [`MeasurementError`] variant if either component
    /// is non-positive or non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmical_core::{Measurement, MeasurementError};
    ///
    /// assert!(Measurement::new(1.75, 70.0).is_ok());
    /// assert_eq!(
    ///     Measurement::new(0.0, 70.0),
    ///     Err(MeasurementError::NonPositiveHeight { value: 0.0 }),
    /// );
    /// assert_eq!(
    ///     Measurement::new(1.75, -3.0),
    ///     Err(MeasurementError::NonPositiveWeight { value: -3.0 }),
    /// );
    /// ```
    pub fn new(height_m: f64, weight_kg: f64) -> Result<Self, MeasurementError> {
        if height_m.is_nan() || height_m.is_infinite() {
            return Err(MeasurementError::NonFiniteHeight);
        }
        if weight_kg.is_nan() || weight_kg.is_infinite() {
            return Err(MeasurementError::NonFiniteWeight);
        }
        if height_m <= 0.0 {
            return Err(MeasurementError::NonPositiveHeight { value: height_m });
        }
        if weight_kg <= 0.0 {
            return Err(MeasurementError::NonPositiveWeight { value: weight_kg });
        }
        Ok(Self {
            height_m,
            weight_kg,
        })
    }

    /// Returns the height in meters.
    #[must_use]
    pub const fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Returns the weight in kilograms.
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Computes the BMI for this measurement.
    ///
    /// Infallible: the constructor invariant guarantees a positive, finite
    /// quotient.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmical_core::Measurement;
    ///
    /// let m = Measurement::new(2.0, 100.0).unwrap();
    /// assert_eq!(m.bmi().value(), 25.0);
    /// ```
    #[must_use]
    pub fn bmi(&self) -> Bmi {
        Bmi::from_value(self.weight_kg / (self.height_m * self.height_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_measurement() {
        let m = Measurement::new(1.75, 70.0).unwrap();
        assert_eq!(m.height_m(), 1.75);
        assert_eq!(m.weight_kg(), 70.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            Measurement::new(0.0, 70.0),
            Err(MeasurementError::NonPositiveHeight { value: 0.0 }),
        );
        assert_eq!(
            Measurement::new(-1.0, 70.0),
            Err(MeasurementError::NonPositiveHeight { value: -1.0 }),
        );
        assert_eq!(
            Measurement::new(1.75, 0.0),
            Err(MeasurementError::NonPositiveWeight { value: 0.0 }),
        );
        assert_eq!(
            Measurement::new(1.75, -70.0),
            Err(MeasurementError::NonPositiveWeight { value: -70.0 }),
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(
            Measurement::new(f64::NAN, 70.0),
            Err(MeasurementError::NonFiniteHeight),
        );
        assert_eq!(
            Measurement::new(f64::INFINITY, 70.0),
            Err(MeasurementError::NonFiniteHeight),
        );
        assert_eq!(
            Measurement::new(1.75, f64::NAN),
            Err(MeasurementError::NonFiniteWeight),
        );
        assert_eq!(
            Measurement::new(1.75, f64::NEG_INFINITY),
            Err(MeasurementError::NonFiniteWeight),
        );
    }

    #[test]
    fn test_height_checked_before_weight() {
        assert_eq!(
            Measurement::new(-1.0, -1.0),
            Err(MeasurementError::NonPositiveHeight { value: -1.0 }),
        );
    }

    #[test]
    fn test_error_display() {
        let err = MeasurementError::NonPositiveHeight { value: -1.0 };
        assert_eq!(err.to_string(), "height must be positive, got -1 m");
        let err = MeasurementError::NonPositiveWeight { value: 0.0 };
        assert_eq!(err.to_string(), "weight must be positive, got 0 kg");
    }

    #[test]
    fn test_bmi_computation() {
        let m = Measurement::new(2.0, 100.0).unwrap();
        assert_eq!(m.bmi().value(), 25.0);

        let m = Measurement::new(1.75, 70.0).unwrap();
        let expected = 70.0 / (1.75 * 1.75);
        assert_eq!(m.bmi().value(), expected);
    }
}
