//! The batch run: scan, convert every job, write the manifest.
//!
//! ```text
//! photos/a.png ─┐
//! photos/b.jpg ─┼─ convert ─→ public/memories/{a,b,hero_success}.webp
//! hero.jpg ─────┘     │
//!                     └────→ src/data/memories.json
//! ```
//!
//! Processing is strictly sequential. Each file either yields a
//! [`ManifestEntry`] or a [`ProcessEvent::Failed`]; a failed file never stops
//! the run. Only setup problems (invalid config, output directories that
//! cannot be created, a source directory that cannot be listed, a manifest
//! that cannot be written) end the run early with a [`ProcessError`], and in
//! that case no manifest is written.
//!
//! Progress is reported through a caller-supplied callback so this module
//! never prints; see [`output`](crate::output) for the console format.

use crate::config::{ConfigError, OptimizeConfig};
use crate::imaging::{
    BackendError, ConvertParams, Dimensions, ImageBackend, Quality, RustBackend,
};
use crate::manifest::{self, ManifestEntry, Orientation};
use crate::scan::{self, Job, ScanError, ScanNote};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Progress of a run, in the order things happen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    CreatedOutputDir(PathBuf),
    Scan(ScanNote),
    Converted {
        file_name: String,
        orientation: Orientation,
        dimensions: Dimensions,
        is_hero: bool,
    },
    Failed {
        name: String,
        message: String,
    },
    /// A second source was converted to a file name already written this run.
    Collision {
        file_name: String,
        previous: PathBuf,
        source: PathBuf,
    },
    ManifestWritten {
        path: PathBuf,
        count: usize,
    },
}

#[derive(Debug)]
pub struct ProcessResult {
    pub entries: Vec<ManifestEntry>,
    pub failed: usize,
}

/// Run the whole batch with the production backend and a thread-local RNG.
pub fn process(
    config: &OptimizeConfig,
    on_event: impl FnMut(ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    process_with_backend(&RustBackend::new(), config, &mut rand::rng(), on_event)
}

/// Run the whole batch with a specific backend and caption RNG (allows
/// testing with a mock and a seeded RNG).
pub fn process_with_backend<R: Rng + ?Sized>(
    backend: &impl ImageBackend,
    config: &OptimizeConfig,
    rng: &mut R,
    mut on_event: impl FnMut(ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    config.validate()?;

    if !config.output_dir.is_dir() {
        fs::create_dir_all(&config.output_dir)?;
        on_event(ProcessEvent::CreatedOutputDir(config.output_dir.clone()));
    }
    if let Some(parent) = config
        .manifest_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    let scanned = scan::scan(config)?;

    let mut run = Run {
        backend,
        config,
        entries: Vec::new(),
        written: HashMap::new(),
        failed: 0,
    };

    // Directory jobs first, then the hero, each preceded by its scan notes
    let (hero_notes, source_notes): (Vec<_>, Vec<_>) =
        scanned.notes.into_iter().partition(ScanNote::is_hero);
    let (hero_jobs, source_jobs): (Vec<_>, Vec<_>) =
        scanned.jobs.into_iter().partition(|j| j.is_hero);

    for (notes, jobs) in [(source_notes, source_jobs), (hero_notes, hero_jobs)] {
        for note in notes {
            on_event(ProcessEvent::Scan(note));
        }
        for job in &jobs {
            run.process_job(job, rng, &mut on_event);
        }
    }

    manifest::write_manifest(&config.manifest_path, &run.entries)?;
    on_event(ProcessEvent::ManifestWritten {
        path: config.manifest_path.clone(),
        count: run.entries.len(),
    });

    Ok(ProcessResult {
        entries: run.entries,
        failed: run.failed,
    })
}

/// State accumulated over one run.
struct Run<'a, B> {
    backend: &'a B,
    config: &'a OptimizeConfig,
    entries: Vec<ManifestEntry>,
    /// Output file name → source that last wrote it.
    written: HashMap<String, PathBuf>,
    failed: usize,
}

impl<B: ImageBackend> Run<'_, B> {
    fn process_job<R: Rng + ?Sized>(
        &mut self,
        job: &Job,
        rng: &mut R,
        on_event: &mut impl FnMut(ProcessEvent),
    ) {
        let file_name = manifest::output_file_name(&job.output_name);
        let params = ConvertParams {
            source: job.source.clone(),
            output: self.config.output_dir.join(&file_name),
            bounds: self.config.max_size.into(),
            quality: Quality::new(self.config.quality),
        };

        let converted = match self.backend.convert(&params) {
            Ok(converted) => converted,
            Err(e) => {
                self.failed += 1;
                on_event(failure_event(job, &e));
                return;
            }
        };

        if let Some(previous) = self.written.insert(file_name.clone(), job.source.clone()) {
            on_event(ProcessEvent::Collision {
                file_name: file_name.clone(),
                previous,
                source: job.source.clone(),
            });
        }

        let orientation =
            Orientation::from_dimensions(converted.oriented.width, converted.oriented.height);
        on_event(ProcessEvent::Converted {
            file_name: file_name.clone(),
            orientation,
            dimensions: converted.output,
            is_hero: job.is_hero,
        });

        self.entries.push(ManifestEntry {
            src: manifest::public_src(&self.config.public_prefix, &file_name),
            orientation,
            caption: self.config.captions.choose(rng).cloned().unwrap_or_default(),
            date: self.config.date.clone(),
            is_hero: job.is_hero,
        });
    }
}

fn failure_event(job: &Job, error: &BackendError) -> ProcessEvent {
    ProcessEvent::Failed {
        name: job.output_name.clone(),
        message: error.to_string(),
    }
}
