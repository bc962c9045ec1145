//! Low-level numerical utilities shared by the distribution types.

pub mod constants;
pub mod linalg;
