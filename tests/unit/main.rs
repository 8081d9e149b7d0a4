//! Unit test suite entry point.

mod classify_tests;
mod layout_tests;
