#![allow(clippy::module_inception)]

pub mod constants;
pub mod models;
pub mod runtime;
pub mod types;

#[cfg(test)]
mod unit_tests;
