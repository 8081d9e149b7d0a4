use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use aimp::import::{ImportInput, ImportOrchestrator, PathResolver, Vocabulary};
use chrono::NaiveDate;
use tempfile::TempDir;

// =============================================================================
// Assertion Macros
// =============================================================================

/// Assert that a file exists at the given path
#[macro_export]
macro_rules! assert_file_exists {
    ($path:expr) => {
        assert!(
            std::path::Path::new($path).exists(),
            "Expected file to exist: {:?}",
            $path
        );
    };
}

/// Assert that nothing exists at the given path
#[macro_export]
macro_rules! assert_not_exists {
    ($path:expr) => {
        assert!(
            !std::path::Path::new($path).exists(),
            "Expected nothing at: {:?}",
            $path
        );
    };
}

/// Assert that a file contains expected content
#[macro_export]
macro_rules! assert_file_contains {
    ($path:expr, $expected:expr) => {{
        let content = std::fs::read_to_string($path).expect(&format!("Failed to read {:?}", $path));
        assert!(
            content.contains($expected),
            "File {:?} does not contain '{}'\nActual content:\n{}",
            $path,
            $expected,
            &content[..std::cmp::min(content.len(), 500)]
        );
    }};
}

/// Assert stdout contains expected text
#[macro_export]
macro_rules! assert_stdout_contains {
    ($output:expr, $expected:expr) => {
        assert!(
            $output.stdout.contains($expected),
            "stdout does not contain '{}'\nActual stdout:\n{}",
            $expected,
            $output.stdout
        );
    };
}

/// Assert command succeeded
#[macro_export]
macro_rules! assert_command_success {
    ($output:expr) => {
        assert!(
            $output.success,
            "Command failed with exit code {}\nstdout: {}\nstderr: {}",
            $output.exit_code, $output.stdout, $output.stderr
        );
    };
}

/// Integration test fixture providing an isolated site checkout
pub struct TestFixture {
    /// Root temp directory; also the working directory for CLI runs
    pub temp_dir: TempDir,
    pub root: PathBuf,
    /// Content root articles are imported into
    pub content_root: PathBuf,
    /// Config file handed to the binary through AIMP_CONFIG
    pub config_path: PathBuf,
    /// Where source folders are created
    pub sources_dir: PathBuf,
    start_time: std::time::Instant,
    test_name: String,
}

impl TestFixture {
    /// Create a fresh test fixture
    pub fn new(test_name: &str) -> Self {
        let start_time = std::time::Instant::now();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let content_root = root.join("posts");
        let config_path = root.join("aimp.toml");
        let sources_dir = root.join("sources");

        std::fs::create_dir_all(&sources_dir).expect("Failed to create sources dir");
        std::fs::write(
            &config_path,
            "[content]\nroot = \"posts\"\n\n[article]\ndefault_author = \"Fixture Author\"\n",
        )
        .expect("Failed to write config");

        println!("\n{}", "=".repeat(70));
        println!("[FIXTURE] Test: {}", test_name);
        println!("[FIXTURE] Root: {:?}", root);
        println!("[FIXTURE] Content root: {:?}", content_root);
        println!("[FIXTURE] Config: {:?}", config_path);
        println!("{}", "=".repeat(70));

        Self {
            temp_dir,
            root,
            content_root,
            config_path,
            sources_dir,
            start_time,
            test_name: test_name.to_string(),
        }
    }

    /// Create a source folder with the given files
    pub fn add_source(&self, folder: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.sources_dir.join(folder);
        std::fs::create_dir_all(&dir).expect("Failed to create source folder");
        for (name, content) in files {
            std::fs::write(dir.join(name), content).expect("Failed to write source file");
        }
        println!("[FIXTURE] Added source: {} ({} files)", folder, files.len());
        dir
    }

    /// Import input for `source` with sensible defaults
    pub fn input(&self, source: &Path, category: &str) -> ImportInput {
        ImportInput {
            source: source.to_path_buf(),
            category: category.to_string(),
            title: "Fixture Article".to_string(),
            author: "Fixture Author".to_string(),
            ..ImportInput::default()
        }
    }

    /// Orchestrator writing into this fixture's content root with a fixed date
    pub fn orchestrator(&self) -> ImportOrchestrator {
        ImportOrchestrator::new(PathResolver::new(&self.content_root, Vocabulary::standard()))
            .with_date(NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"))
    }

    /// Run the aimp binary and capture output
    pub fn run_aimp(&self, args: &[&str]) -> CommandOutput {
        self.run_aimp_with_env(args, &[])
    }

    /// Run the aimp binary with extra environment variables
    pub fn run_aimp_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> CommandOutput {
        let start = std::time::Instant::now();
        println!("\n[CMD] aimp {}", args.join(" "));

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_aimp"));
        cmd.args(args)
            .env("HOME", &self.root)
            .env("XDG_CONFIG_HOME", self.root.join(".config"))
            .env("AIMP_CONFIG", &self.config_path)
            .env_remove("AIMP_CONTENT_ROOT")
            .env_remove("AIMP_INDEX_FILE")
            .env_remove("AIMP_DEFAULT_AUTHOR")
            .env_remove("RUST_LOG")
            .current_dir(&self.root);

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute aimp command");

        let elapsed = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        println!("[CMD] Exit code: {}", output.status.code().unwrap_or(-1));
        println!("[CMD] Timing: {:?}", elapsed);

        const SLOW_THRESHOLD: Duration = Duration::from_secs(5);
        if elapsed > SLOW_THRESHOLD {
            println!("[SLOW] Command took {:?} (threshold: {:?})", elapsed, SLOW_THRESHOLD);
        }

        if !stdout.is_empty() {
            println!("[STDOUT]\n{}", stdout);
        }
        if !stderr.is_empty() {
            println!("[STDERR]\n{}", stderr);
        }

        CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
            elapsed,
        }
    }

    /// Parse stdout of a machine-mode run
    pub fn json(output: &CommandOutput) -> serde_json::Value {
        serde_json::from_str(&output.stdout).expect("stdout should be valid JSON")
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        println!(
            "[FIXTURE] {} finished in {:?}",
            self.test_name,
            self.start_time.elapsed()
        );
    }
}

/// Captured result of a CLI run
#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}
