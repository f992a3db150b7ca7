mod reporting;
mod partition;
mod worker;
mod aggregation;
mod comm;

pub use reporting::*;
pub use partition::*;
pub use worker::*;
pub use aggregation::*;
pub use comm::*;

#[cfg(test)]
mod aggregation_tests;
