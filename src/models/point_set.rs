use crate::models::Vector3D;
use crate::utils::ForceError;

/// The immutable input of one job: positions and masses, index-aligned.
///
/// Every worker holds an identical copy; nothing mutates it after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    positions: Vec<Vector3D>,
    masses: Vec<f64>,
}

impl PointSet {
    /// Pairs a position list with a mass list.
    ///
    /// # Errors
    ///
    /// Returns `ForceError::LengthMismatch` if the lists differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pairforce::models::{PointSet, Vector3D};
    ///
    /// let points = PointSet::new(
    ///     vec![Vector3D::new(0.0, 0.0, 0.0), Vector3D::new(0.0, 0.0, 1.0)],
    ///     vec![1.0, 2.0],
    /// ).expect("lists have the same length");
    /// assert_eq!(points.len(), 2);
    ///
    /// assert!(PointSet::new(vec![Vector3D::ZERO], vec![]).is_err());
    /// ```
    pub fn new(positions: Vec<Vector3D>, masses: Vec<f64>) -> Result<Self, ForceError> {
        if positions.len() != masses.len() {
            return Err(ForceError::LengthMismatch {
                positions: positions.len(),
                masses: masses.len(),
            });
        }
        Ok(PointSet { positions, masses })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn position(&self, index: usize) -> Vector3D {
        self.positions[index]
    }

    pub fn mass(&self, index: usize) -> f64 {
        self.masses[index]
    }

    /// Indices of distinct points sharing identical coordinates, as `(first, later)` pairs.
    ///
    /// Such pairs make the inverse-square sum non-finite. Quadratic, like the force pass itself.
    pub fn coincident_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.positions.iter().enumerate() {
            for (offset, b) in self.positions[i + 1..].iter().enumerate() {
                if a == b {
                    pairs.push((i, i + 1 + offset));
                }
            }
        }
        pairs
    }
}
