//! Property-based test suite entry point.

mod classify_properties;
mod slug_properties;
