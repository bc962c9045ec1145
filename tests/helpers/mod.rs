//! Shared test helpers
//!
//! Each integration test binary uses a different subset of these.
#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
