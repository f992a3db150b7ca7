mod pairwise;

pub use pairwise::*;
