//! Verbose test logger that also records the import log.

use std::time::Instant;

use crate::import::{ImportObserver, LogLine};

/// Prints test progress and echoes the import log as it happens.
pub struct TestLogger {
    start_time: Instant,
    lines: Vec<String>,
}

impl TestLogger {
    pub fn new(test_name: &str) -> Self {
        let separator = "=".repeat(60);
        println!("\n{}", separator);
        println!("[TEST START] {}", test_name);
        println!("{}", separator);
        Self {
            start_time: Instant::now(),
            lines: Vec::new(),
        }
    }

    pub fn log_input<T: std::fmt::Debug>(&self, name: &str, value: &T) {
        println!("[INPUT] {}: {:?}", name, value);
    }

    pub fn log_actual<T: std::fmt::Debug>(&self, value: &T) {
        println!("[ACTUAL] {:?}", value);
    }

    /// Import log lines seen so far, as rendered for users.
    pub fn import_log(&self) -> &[String] {
        &self.lines
    }

    pub fn pass(&self) {
        let elapsed = self.start_time.elapsed();
        println!("[RESULT] PASSED in {:?}", elapsed);
        println!("{}\n", "=".repeat(60));
    }
}

impl ImportObserver for TestLogger {
    fn observe(&mut self, line: &LogLine) {
        let rendered = line.to_string();
        println!("[IMPORT] {rendered}");
        self.lines.push(rendered);
    }
}
