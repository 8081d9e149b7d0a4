//! Integration test suite entry point.

mod fixture;

mod catalog_tests;
mod cli_tests;
