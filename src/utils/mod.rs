//! Filesystem helpers shared by the importer.

pub mod fs;
