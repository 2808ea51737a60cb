// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

pub mod address;
pub mod config;
pub mod fake;
pub mod generator;
pub mod schema;
pub mod writer;
