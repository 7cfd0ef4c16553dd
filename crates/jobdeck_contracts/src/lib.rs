#![forbid(unsafe_code)]

pub mod application;
pub mod common;
pub mod job;

pub use common::{ContractViolation, Validate};
