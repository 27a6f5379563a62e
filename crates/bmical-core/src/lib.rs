//! Core calculation logic for the Bmical application.
//!
//! This crate implements the whole of the calculator's behavior: validating a
//! height/weight pair and turning it into a formatted BMI result. The
//! presentation layer is a separate crate that collects two numbers, calls
//! [`calculate`], and renders the returned string.
//!
//! # Overview
//!
//! The crate is organized around three types and one function:
//!
//! 1. **Validated input** - [`measurement`]: [`Measurement`] pairs a height in
//!    meters with a weight in kilograms and can only be constructed when both
//!    are positive and finite; [`MeasurementError`] names the rejection.
//! 2. **Computed result** - [`bmi`]: [`Bmi`] wraps the computed index and
//!    displays it with exactly two decimal digits.
//! 3. **Classification** - [`category`]: [`Category`] places a BMI value into
//!    the WHO adult bands.
//! 4. **The contract** - [`calculate`] composes the above into the single
//!    string the caller displays.
//!
//! # Examples
//!
//! ```
//! use bmical_core::calculate;
//!
//! assert_eq!(calculate(1.75, 70.0), "Your BMI is 22.86");
//! assert_eq!(calculate(0.0, 70.0), "Invalid input values");
//! ```

pub mod bmi;
pub mod category;
pub mod measurement;

pub use self::{
    bmi::Bmi,
    category::Category,
    measurement::{Measurement, MeasurementError},
};

/// Message returned when either input fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input values";

/// Computes a BMI from a height in meters and a weight in kilograms.
///
/// Returns `"Your BMI is {bmi}"` with the index rounded to two decimal
/// digits, or `"Invalid input values"` when either input is zero, negative,
/// or not finite. Pure and deterministic: identical inputs always produce the
/// identical string, and invalid inputs never panic.
///
/// # Examples
///
/// ```
/// use bmical_core::calculate;
///
/// assert_eq!(calculate(2.0, 100.0), "Your BMI is 25.00");
/// assert_eq!(calculate(-1.0, 70.0), "Invalid input values");
/// ```
#[must_use]
pub fn calculate(height_m: f64, weight_kg: f64) -> String {
    match Measurement::new(height_m, weight_kg) {
        Ok(measurement) => format!("Your BMI is {}", measurement.bmi()),
        Err(_) => INVALID_INPUT_MESSAGE.to_owned(),
    }
}
