mod delimiter;
mod tables;
mod generate;

pub use delimiter::*;
pub use tables::*;
pub use generate::*;

#[cfg(test)]
mod generate_tests;
