//! Dataset-backed infrared image selection.
//!
//! When a directory of real satellite samples is configured, frames prefer a
//! matching sample over procedural synthesis. File names embed a numeric
//! token; each archetype maps a progress bucket to a token allow-list so a
//! frame picks imagery from the right development stage. Every failure mode
//! (missing directory, unreadable listing, no usable files) silently
//! degrades to procedural synthesis.

use crate::catalog::Archetype;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Numeric filename tokens accepted for an archetype at a given progress.
///
/// Bucket boundaries differ per archetype, matching the pacing of its
/// evolution story.
fn bucket_tokens(archetype: Archetype, progress: f32) -> &'static [&'static str] {
    match archetype {
        Archetype::DevelopingCyclone => {
            if progress < 0.25 {
                &["25", "27", "28", "30"]
            } else if progress < 0.5 {
                &["35", "36", "37", "38"]
            } else if progress < 0.75 {
                &["45", "46", "47", "48"]
            } else {
                &["55", "56", "57", "58"]
            }
        }
        Archetype::RapidIntensification => {
            if progress < 0.3 {
                &["40", "41", "42", "43"]
            } else if progress < 0.6 {
                &["50", "51", "52", "53"]
            } else {
                &["60", "61", "62", "63"]
            }
        }
        Archetype::EyeFormation => {
            if progress < 0.4 {
                &["65", "67", "68", "69"]
            } else if progress < 0.7 {
                &["70", "73", "74", "75"]
            } else {
                &["77", "81", "82", "83"]
            }
        }
        Archetype::WeakeningSystem => {
            if progress < 0.3 {
                &["85", "86", "87", "94"]
            } else if progress < 0.6 {
                &["98", "99", "101", "102"]
            } else {
                &["106", "111", "112", "115"]
            }
        }
    }
}

/// A directory of real sample images, selected by bucketed filename tokens.
#[derive(Debug, Clone)]
pub struct SampleDataset {
    dir: PathBuf,
}

impl SampleDataset {
    /// Wrap a dataset directory. The directory is not checked here; a
    /// missing or unreadable directory degrades at selection time.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SampleDataset { dir: dir.into() }
    }

    /// Directory this dataset reads from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Select a sample file name for a frame, or `None` when the dataset
    /// cannot serve one (caller falls back to procedural synthesis).
    ///
    /// Filters the directory's `.jpg` files by the archetype/progress token
    /// allow-list, widening to the full listing when no file matches, then
    /// picks uniformly at random.
    pub fn select_ir<R: Rng>(
        &self,
        archetype: Archetype,
        progress: f32,
        rng: &mut R,
    ) -> Option<String> {
        let mut files = match self.list_jpg_files() {
            Ok(files) => files,
            Err(err) => {
                warn!(
                    "sample dataset unavailable at {}: {err}; using procedural synthesis",
                    self.dir.display()
                );
                return None;
            }
        };
        if files.is_empty() {
            debug!("sample dataset at {} holds no .jpg files", self.dir.display());
            return None;
        }
        // Listing order is filesystem-dependent; sort for reproducible draws.
        files.sort();

        let tokens = bucket_tokens(archetype, progress);
        let matching: Vec<&String> = files
            .iter()
            .filter(|name| tokens.iter().any(|token| name.contains(token)))
            .collect();

        let chosen = if matching.is_empty() {
            // No stage-specific imagery; any sample beats a synthetic frame.
            &files[rng.random_range(0..files.len())]
        } else {
            matching[rng.random_range(0..matching.len())]
        };
        Some(chosen.clone())
    }

    fn list_jpg_files(&self) -> std::io::Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.to_ascii_lowercase().ends_with(".jpg") {
                files.push(name.to_string());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn buckets_cover_the_unit_interval() {
        for archetype in Archetype::ALL {
            for step in 0..=20_i32 {
                let p = step as f32 / 20.0;
                assert!(
                    !bucket_tokens(archetype, p).is_empty(),
                    "{archetype} has no tokens at p={p}"
                );
            }
        }
    }

    #[test]
    fn bucket_boundaries_follow_archetype_pacing() {
        assert_eq!(bucket_tokens(Archetype::DevelopingCyclone, 0.0)[0], "25");
        assert_eq!(bucket_tokens(Archetype::DevelopingCyclone, 0.25)[0], "35");
        assert_eq!(bucket_tokens(Archetype::DevelopingCyclone, 1.0)[0], "55");
        assert_eq!(bucket_tokens(Archetype::RapidIntensification, 0.6)[0], "60");
        assert_eq!(bucket_tokens(Archetype::EyeFormation, 0.69)[0], "70");
        assert_eq!(bucket_tokens(Archetype::WeakeningSystem, 0.95)[0], "106");
    }

    #[test]
    fn missing_directory_yields_none() {
        let dataset = SampleDataset::new("/nonexistent/definitely/not/here");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            dataset.select_ir(Archetype::DevelopingCyclone, 0.5, &mut rng),
            None
        );
    }
}
