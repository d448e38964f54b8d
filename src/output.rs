//! CLI output formatting.
//!
//! # Format
//!
//! ## Run
//!
//! ```text
//! Created output directory: public/memories
//! Found 3 images in photos
//! Optimized: a.webp (landscape, 1200x675)
//! Optimized: b.webp (portrait, 400x400)
//! Error processing broken.jpg: Failed to decode: ...
//! Processing hero file: hero.jpg
//! Optimized: hero_success.webp (portrait, 900x1200, hero)
//! Generated metadata for 3 images at src/data/memories.json
//! ```
//!
//! ## Check
//!
//! ```text
//! Found 2 images in photos
//!     a.png → a.webp
//!     b.jpg → b.webp
//! Processing hero file: hero.jpg
//!     hero.jpg → hero_success.webp (hero)
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns lines and does no I/O, so the formats are
//! unit tested. The `print_*` wrappers write those lines to stdout.

use crate::manifest::output_file_name;
use crate::process::ProcessEvent;
use crate::scan::{ScanNote, ScanResult};
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_scan_note(note: &ScanNote) -> String {
    match note {
        ScanNote::SourceFound { path, count } => {
            format!("Found {} images in {}", count, path.display())
        }
        ScanNote::SourceMissing(path) => {
            format!("Source directory not found: {}", path.display())
        }
        ScanNote::HeroFound(path) => format!("Processing hero file: {}", path.display()),
        ScanNote::HeroMissing(path) => format!("Hero file not found: {}", path.display()),
    }
}

/// Format one progress event as console lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::CreatedOutputDir(path) => {
            vec![format!("Created output directory: {}", path.display())]
        }
        ProcessEvent::Scan(note) => vec![format_scan_note(note)],
        ProcessEvent::Converted {
            file_name,
            orientation,
            dimensions,
            is_hero,
        } => {
            let hero = if *is_hero { ", hero" } else { "" };
            vec![format!(
                "Optimized: {} ({}, {}x{}{})",
                file_name, orientation, dimensions.width, dimensions.height, hero
            )]
        }
        ProcessEvent::Failed { name, message } => {
            vec![format!("Error processing {}: {}", name, message)]
        }
        ProcessEvent::Collision {
            file_name,
            previous,
            source,
        } => vec![format!(
            "Warning: {} overwrites {} (from {})",
            display_name(source),
            file_name,
            display_name(previous)
        )],
        ProcessEvent::ManifestWritten { path, count } => vec![format!(
            "Generated metadata for {} images at {}",
            count,
            path.display()
        )],
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

/// Format a dry-run listing: each scan note followed by the jobs it produced.
pub fn format_scan_output(result: &ScanResult) -> Vec<String> {
    let mut lines = Vec::new();
    for note in &result.notes {
        lines.push(format_scan_note(note));
        if matches!(note, ScanNote::SourceMissing(_) | ScanNote::HeroMissing(_)) {
            continue;
        }
        for job in result.jobs.iter().filter(|j| j.is_hero == note.is_hero()) {
            let hero = if job.is_hero { " (hero)" } else { "" };
            lines.push(format!(
                "{}{} → {}{}",
                indent(1),
                display_name(&job.source),
                output_file_name(&job.output_name),
                hero
            ));
        }
    }
    lines
}

pub fn print_scan_output(result: &ScanResult) {
    for line in format_scan_output(result) {
        println!("{}", line);
    }
}
