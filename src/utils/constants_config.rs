// src/utils/constants_config.rs
use crate::utils::DEFAULT_FORCE_CONSTANTS;

/// Interaction constants shared by every pairwise force evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceConstants {
    /// Scales every pairwise force magnitude (gravitational or Coulomb constant).
    pub coefficient: f64,
}

impl Default for ForceConstants {
    fn default() -> Self {
        DEFAULT_FORCE_CONSTANTS
    }
}

impl ForceConstants {
    /// Builds constants, falling back to the defaults for anything not given.
    ///
    /// # Example
    /// ```
    /// use rs_pairforce::utils::ForceConstants;
    ///
    /// let constants = ForceConstants::new(None);
    /// assert_eq!(constants.coefficient, 10.0);
    ///
    /// let unit = ForceConstants::new(Some(1.0));
    /// assert_eq!(unit.coefficient, 1.0);
    /// ```
    pub fn new(coefficient: Option<f64>) -> Self {
        let default = DEFAULT_FORCE_CONSTANTS;
        Self {
            coefficient: coefficient.unwrap_or(default.coefficient),
        }
    }

    /// Magnitude of the force between two masses separated by a squared distance.
    ///
    /// No guard against a zero distance: coincident points yield an infinite or NaN value.
    pub fn inverse_square(&self, mass_a: f64, mass_b: f64, distance_squared: f64) -> f64 {
        self.coefficient * mass_a * mass_b / distance_squared
    }
}
