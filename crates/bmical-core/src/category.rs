//! WHO adult BMI classification.

use std::fmt::{self, Display};

/// WHO adult classification band for a BMI value.
///
/// Bands are left-closed: a value exactly on a boundary belongs to the upper
/// band (a BMI of 25.0 is [`Category::Overweight`]).
///
/// # Examples
///
/// ```
/// use bmical_core::Category;
///
/// assert_eq!(Category::of(22.0), Category::Normal);
/// assert_eq!(Category::of(25.0), Category::Overweight);
/// assert_eq!(Category::Obese.to_string(), "Obese");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to but not including 25.
    Normal,
    /// BMI from 25 up to but not including 30.
    Overweight,
    /// BMI of 30 or above.
    Obese,
}

impl Category {
    /// Classifies a BMI value.
    #[must_use]
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Returns the band name as a static string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
