use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{PointSet, Vector3D};
use crate::utils::ForceError;

/// Parameters for a random input set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateConfig {
    pub count: usize,
    pub seed: u64,
    /// Coordinates are drawn uniformly from `[-extent, extent)` on every axis.
    pub extent: f64,
    pub min_mass: f64,
    pub max_mass: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            seed: 0,
            extent: 100.0,
            min_mass: 1.0,
            max_mass: 10.0,
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<(), ForceError> {
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(ForceError::InvalidParameter(format!("extent must be positive, got {}", self.extent)));
        }
        if !(self.min_mass.is_finite() && self.max_mass.is_finite()) || self.min_mass > self.max_mass {
            return Err(ForceError::InvalidParameter(format!(
                "mass range [{}, {}] is empty or not finite",
                self.min_mass, self.max_mass
            )));
        }
        Ok(())
    }
}

/// Draws a reproducible random point set: the same config always yields the same points.
///
/// # Examples
///
/// ```
/// use rs_pairforce::io::{generate_point_set, GenerateConfig};
///
/// let config = GenerateConfig { count: 16, seed: 7, ..GenerateConfig::default() };
/// let a = generate_point_set(&config).unwrap();
/// let b = generate_point_set(&config).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 16);
/// ```
pub fn generate_point_set(config: &GenerateConfig) -> Result<PointSet, ForceError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let extent = config.extent;

    let positions = (0..config.count)
        .map(|_| Vector3D::new(
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
        ))
        .collect();
    let masses = (0..config.count)
        .map(|_| {
            if config.min_mass < config.max_mass {
                rng.gen_range(config.min_mass..config.max_mass)
            } else {
                config.min_mass
            }
        })
        .collect();

    PointSet::new(positions, masses)
}
