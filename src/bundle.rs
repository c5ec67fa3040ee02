//! Host side: where artifacts come from and where headers go.

use crate::model::{Artifact, Content, RenderedHeader};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub trait ArtifactSource {
    fn list_artifacts(&self) -> Result<Vec<Artifact>>;
}

pub trait Sink {
    fn emit(&mut self, derived_name: &str, text: &str) -> Result<()>;
}

impl ArtifactSource for Vec<Artifact> {
    fn list_artifacts(&self) -> Result<Vec<Artifact>> {
        Ok(self.clone())
    }
}

/// Collects headers in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub headers: Vec<RenderedHeader>,
}

impl Sink for MemorySink {
    fn emit(&mut self, derived_name: &str, text: &str) -> Result<()> {
        self.headers.push(RenderedHeader {
            derived_name: derived_name.to_owned(),
            text: text.to_owned(),
        });
        Ok(())
    }
}

/// Reads a single file, or every file below a directory.
///
/// Names are relative to the directory and always use `/`, so generated
/// identifiers don't depend on the host platform.
#[derive(Debug, Clone)]
pub struct FsSource {
    pub root: PathBuf,
    /// Files ending with this suffix are not listed (headers from a previous run).
    pub skip_suffix: Option<String>,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_suffix: None,
        }
    }

    pub fn skipping(mut self, suffix: impl Into<String>) -> Self {
        self.skip_suffix = Some(suffix.into());
        self
    }

    /// Whether headers written to `out_dir` would show up in this source.
    pub fn overlaps(&self, out_dir: &Path) -> bool {
        let walk_root = if self.root.is_dir() {
            self.root.clone()
        } else {
            self.default_out_dir()
        };
        match (fs::canonicalize(walk_root), fs::canonicalize(out_dir)) {
            (Ok(root), Ok(out)) => out.starts_with(root),
            _ => false,
        }
    }

    fn skipped(&self, name: &str) -> bool {
        self.skip_suffix
            .as_deref()
            .is_some_and(|suffix| name.ends_with(suffix))
    }

    /// Directory headers are written back into when no output is given.
    pub fn default_out_dir(&self) -> PathBuf {
        if self.root.is_dir() {
            self.root.clone()
        } else {
            match self.root.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            }
        }
    }
}

fn read_artifact(path: &Path, name: String) -> Result<Artifact> {
    let bytes = fs::read(path).with_context(|| format!("Reading {}", path.display()))?;
    tracing::debug!(artifact = %name, bytes = bytes.len(), "loaded");
    Ok(Artifact {
        name,
        content: Content::Bytes(bytes),
    })
}

impl ArtifactSource for FsSource {
    fn list_artifacts(&self) -> Result<Vec<Artifact>> {
        if self.root.is_file() {
            let name = self
                .root
                .file_name()
                .with_context(|| format!("{} has no file name", self.root.display()))?
                .to_string_lossy()
                .into_owned();
            return Ok(vec![read_artifact(&self.root, name)?]);
        }

        let mut artifacts = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Walking {}", self.root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .with_context(|| format!("{} escapes the input root", entry.path().display()))?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if self.skipped(&name) {
                tracing::debug!(artifact = %name, "skipping generated header");
                continue;
            }
            artifacts.push(read_artifact(entry.path(), name)?);
        }
        Ok(artifacts)
    }
}

/// Writes `out_dir/<derived name>`; in dry-run mode only logs.
#[derive(Debug, Clone)]
pub struct FsSink {
    pub out_dir: PathBuf,
    pub dry_run: bool,
}

impl FsSink {
    pub fn new(out_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            out_dir: out_dir.into(),
            dry_run,
        }
    }
}

impl Sink for FsSink {
    fn emit(&mut self, derived_name: &str, text: &str) -> Result<()> {
        let path = self.out_dir.join(derived_name);
        if self.dry_run {
            tracing::info!(path = %path.display(), bytes = text.len(), "dry run, not writing");
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Creating {}", parent.display()))?;
        }
        fs::write(&path, text).with_context(|| format!("Writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_source_uses_relative_slash_names_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("b.js"), "b").unwrap();
        fs::write(dir.path().join("assets/logo.png"), [0x89u8, 0x50]).unwrap();
        fs::write(dir.path().join("a.css"), "").unwrap();

        let artifacts = FsSource::new(dir.path()).list_artifacts().unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, ["a.css", "assets/logo.png", "b.js"]);
        assert_eq!(artifacts[1].content, Content::Bytes(vec![0x89, 0x50]));
    }

    #[test]
    fn file_source_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, [1u8, 2, 3]).unwrap();

        let source = FsSource::new(&file);
        let artifacts = source.list_artifacts().unwrap();

        assert_eq!(artifacts, vec![Artifact::new("data.bin", vec![1u8, 2, 3])]);
        assert_eq!(source.default_out_dir(), dir.path());
    }

    #[test]
    fn skip_suffix_hides_previous_headers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("main.js"), "x").unwrap();
        fs::write(dir.path().join("main.js.h"), "old").unwrap();

        let source = FsSource::new(dir.path()).skipping(".h");
        let artifacts = source.list_artifacts().unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, ["main.js"]);
        assert!(source.overlaps(dir.path()));
        let elsewhere = tempfile::tempdir().unwrap();
        assert!(!source.overlaps(elsewhere.path()));
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsSource::new(dir.path().join("nope"))
            .list_artifacts()
            .unwrap_err();
        assert!(format!("{err:#}").contains("Walking"), "got: {err:#}");
    }

    #[test]
    fn sink_writes_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsSink::new(dir.path(), false);
        sink.emit("assets/logo.png.h", "text").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("assets/logo.png.h")).unwrap(),
            "text"
        );
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsSink::new(dir.path(), true);
        sink.emit("main.js.h", "text").unwrap();
        assert!(!dir.path().join("main.js.h").exists());
    }
}
