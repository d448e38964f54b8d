//! Source discovery.
//!
//! Lists the images to convert for a run. Two inputs feed the job list:
//!
//! ```text
//! photos/                 # source_dir, flat, not recursive
//! ├── a.png               # → job "a.png"
//! ├── b.JPG               # → job "b.JPG" (extension match is case-insensitive)
//! ├── notes.txt           # ignored
//! └── old/                # ignored, subdirectories are never entered
//! hero.jpg                # hero_file → job "hero_success.jpg", is_hero
//! ```
//!
//! Directory jobs keep the order the filesystem lists them in. The hero job,
//! if present, always comes last.
//!
//! A missing source directory or hero file is not an error: the condition is
//! recorded as a [`ScanNote`] and the run continues with whatever remains.

use crate::config::OptimizeConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions accepted from the source directory.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// One image scheduled for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    /// File name the output is derived from (extension gets replaced).
    pub output_name: String,
    pub is_hero: bool,
}

/// Non-fatal conditions observed while scanning, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanNote {
    SourceFound { path: PathBuf, count: usize },
    SourceMissing(PathBuf),
    HeroFound(PathBuf),
    HeroMissing(PathBuf),
}

impl ScanNote {
    /// Whether the note concerns the hero file rather than the source directory.
    pub fn is_hero(&self) -> bool {
        matches!(self, Self::HeroFound(_) | Self::HeroMissing(_))
    }
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub jobs: Vec<Job>,
    pub notes: Vec<ScanNote>,
}

/// Whether the path carries one of the [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Build the job list for a run.
pub fn scan(config: &OptimizeConfig) -> Result<ScanResult, ScanError> {
    let mut result = ScanResult::default();

    if config.source_dir.is_dir() {
        let jobs = scan_dir(&config.source_dir)?;
        result.notes.push(ScanNote::SourceFound {
            path: config.source_dir.clone(),
            count: jobs.len(),
        });
        result.jobs.extend(jobs);
    } else {
        result
            .notes
            .push(ScanNote::SourceMissing(config.source_dir.clone()));
    }

    if config.hero_file.is_file() {
        result
            .notes
            .push(ScanNote::HeroFound(config.hero_file.clone()));
        result.jobs.push(Job {
            source: config.hero_file.clone(),
            output_name: config.hero_name.clone(),
            is_hero: true,
        });
    } else {
        result
            .notes
            .push(ScanNote::HeroMissing(config.hero_file.clone()));
    }

    Ok(result)
}

fn scan_dir(dir: &Path) -> Result<Vec<Job>, ScanError> {
    let mut jobs = Vec::new();
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    for entry in walker {
        // Only a failure to list the directory itself ends the scan. A bad
        // entry inside it is scheduled and fails in the converter like any
        // other unreadable file.
        let path = match entry {
            Ok(entry) => {
                let file_type = entry.file_type();
                // Symlinks are followed by the converter; one pointing at a
                // directory is skipped like a directory.
                let wanted = file_type.is_file()
                    || (file_type.is_symlink() && !entry.path().is_dir());
                if !wanted {
                    continue;
                }
                entry.into_path()
            }
            Err(err) if err.depth() > 0 => match err.path() {
                Some(path) => path.to_path_buf(),
                None => continue,
            },
            Err(source) => {
                return Err(ScanError::Walk {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };
        if !is_supported_image(&path) {
            continue;
        }
        let output_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        jobs.push(Job {
            source: path,
            output_name,
            is_hero: false,
        });
    }
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(tmp: &Path) -> OptimizeConfig {
        OptimizeConfig {
            source_dir: tmp.join("photos"),
            hero_file: tmp.join("hero.jpg"),
            ..Default::default()
        }
    }

    fn output_names(result: &ScanResult) -> Vec<&str> {
        let mut names: Vec<&str> = result
            .jobs
            .iter()
            .map(|j| j.output_name.as_str())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("a.Jpeg")));
        assert!(is_supported_image(Path::new("a.webp")));
        assert!(!is_supported_image(Path::new("a.gif")));
        assert!(!is_supported_image(Path::new("a.tiff")));
        assert!(!is_supported_image(Path::new("jpg")));
        assert!(!is_supported_image(Path::new("notes.txt")));
    }

    #[test]
    fn scan_filters_by_extension() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());
        fs::create_dir_all(&config.source_dir).unwrap();
        for name in ["a.png", "b.JPG", "c.jpeg", "d.webp", "notes.txt", "e.gif"] {
            fs::write(config.source_dir.join(name), b"").unwrap();
        }

        let result = scan(&config).unwrap();
        assert_eq!(output_names(&result), vec!["a.png", "b.JPG", "c.jpeg", "d.webp"]);
        assert!(result.jobs.iter().all(|j| !j.is_hero));
        assert_eq!(
            result.notes[0],
            ScanNote::SourceFound {
                path: config.source_dir.clone(),
                count: 4
            }
        );
    }

    #[test]
    fn scan_does_not_recurse() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());
        let nested = config.source_dir.join("nested.jpg");
        fs::create_dir_all(nested.join("inner")).unwrap();
        fs::write(nested.join("inner/deep.jpg"), b"").unwrap();
        fs::write(config.source_dir.join("top.jpg"), b"").unwrap();

        let result = scan(&config).unwrap();
        // A directory named like an image is skipped, and so is everything below it
        assert_eq!(output_names(&result), vec!["top.jpg"]);
    }

    #[test]
    fn missing_source_dir_is_noted_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());

        let result = scan(&config).unwrap();
        assert!(result.jobs.is_empty());
        assert_eq!(
            result.notes,
            vec![
                ScanNote::SourceMissing(config.source_dir.clone()),
                ScanNote::HeroMissing(config.hero_file.clone()),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_scheduled_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());
        fs::create_dir_all(&config.source_dir).unwrap();
        fs::write(config.source_dir.join("good.png"), b"").unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("missing.jpg"),
            config.source_dir.join("dangling.jpg"),
        )
        .unwrap();

        let result = scan(&config).unwrap();
        assert_eq!(output_names(&result), vec!["dangling.jpg", "good.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());
        fs::create_dir_all(&config.source_dir).unwrap();
        fs::create_dir_all(tmp.path().join("elsewhere")).unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("elsewhere"),
            config.source_dir.join("album.jpg"),
        )
        .unwrap();
        fs::write(config.source_dir.join("top.jpg"), b"").unwrap();

        let result = scan(&config).unwrap();
        assert_eq!(output_names(&result), vec!["top.jpg"]);
    }

    #[test]
    fn hero_job_uses_override_name_and_comes_last() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());
        fs::create_dir_all(&config.source_dir).unwrap();
        fs::write(config.source_dir.join("a.png"), b"").unwrap();
        fs::write(&config.hero_file, b"").unwrap();

        let result = scan(&config).unwrap();
        assert_eq!(result.jobs.len(), 2);
        let hero = result.jobs.last().unwrap();
        assert_eq!(hero.output_name, "hero_success.jpg");
        assert_eq!(hero.source, config.hero_file);
        assert!(hero.is_hero);
        assert!(result.notes.contains(&ScanNote::HeroFound(config.hero_file.clone())));
    }

    #[test]
    fn hero_without_source_dir() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());
        fs::write(&config.hero_file, b"").unwrap();

        let result = scan(&config).unwrap();
        assert_eq!(result.jobs.len(), 1);
        assert!(result.jobs[0].is_hero);
        assert_eq!(
            result.notes[0],
            ScanNote::SourceMissing(config.source_dir.clone())
        );
    }
}
