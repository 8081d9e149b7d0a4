use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Isolated filesystem for import tests: a scratch area for source folders
/// and a content root that starts out absent.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {:?}", data_path);

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Where imported articles land.
    pub fn content_root(&self) -> PathBuf {
        self.data_path.join("posts")
    }

    /// Create a test file with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Create a source folder holding `files` (name, content) and return it.
    pub fn create_source(&self, folder: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.data_path.join("sources").join(folder);
        std::fs::create_dir_all(&dir).expect("Failed to create source folder");
        for (name, content) in files {
            std::fs::write(dir.join(name), content).expect("Failed to write source file");
        }
        println!("[FIXTURE] Created source folder: {:?} ({} files)", dir, files.len());
        dir
    }

    /// Create an already-imported article with the given front matter body.
    pub fn create_article(&self, relative_dir: &str, front_matter: &str) -> PathBuf {
        self.create_file(
            &format!("posts/{relative_dir}/index.md"),
            &format!("---\n{front_matter}---\n\nbody\n"),
        )
    }

    /// Files directly inside `dir`, sorted.
    pub fn list_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .expect("Failed to read dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
