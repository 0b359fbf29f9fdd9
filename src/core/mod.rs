//! Rule constants shared across the encounter pipeline.

pub mod constants;
