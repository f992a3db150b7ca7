mod coordinates;
mod vector_3d;
mod point_set;

pub use coordinates::*;
pub use vector_3d::*;
pub use point_set::*;

#[cfg(test)]
mod vector_3d_tests;
