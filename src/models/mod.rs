pub mod common;
pub mod ctx;

pub mod catalog_with_filters;
pub mod filter_options;
