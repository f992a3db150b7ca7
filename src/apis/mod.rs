pub mod force_job;

pub use force_job::*;
