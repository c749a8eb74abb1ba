use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{Emotion, Reference, Trial, TrialTable, UNEXPECTED_EMOTION};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every `.tsv` trial file directly inside `dir` (non-recursive) into
/// one unified [`TrialTable`].
///
/// Files are processed in lexicographic path order so `setnum` assignment is
/// deterministic regardless of how the filesystem enumerates the directory.
/// A directory with no `.tsv` files yields an empty table, not an error.
pub fn load_dir(dir: &Path) -> Result<TrialTable> {
    if !dir.is_dir() {
        bail!("data directory '{}' not found or not a directory", dir.display());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory '{}'", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && has_extension(p, "tsv"))
        .collect();
    paths.sort();

    let mut table = TrialTable::default();
    for (setnum, path) in paths.iter().enumerate() {
        let before = table.trials.len();
        load_file(path, setnum, &mut table.trials)
            .with_context(|| format!("loading '{}'", path.display()))?;
        log::info!(
            "loaded {} trials from {}",
            table.trials.len() - before,
            path.display()
        );
        table.source_files.push(path.clone());
    }
    Ok(table)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(wanted))
}

// ---------------------------------------------------------------------------
// Per-file TSV parsing
// ---------------------------------------------------------------------------

/// Raw row as it appears in a trial file. Columns beyond these are ignored;
/// the condition columns may be absent entirely.
#[derive(Debug, Deserialize)]
struct RawTrial {
    emotion: i64,
    #[serde(default)]
    condition1: Option<i64>,
    #[serde(default)]
    condition2: Option<i64>,
    x: f64,
    y: f64,
}

/// Parse one tab-separated file (one header row) and append its rows.
///
/// An out-of-range emotion index degrades to the sentinel label with a
/// warning; an out-of-range condition2 code is fatal.
fn load_file(path: &Path, setnum: usize, out: &mut Vec<Trial>) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .context("opening TSV")?;

    for (row_no, result) in reader.deserialize::<RawTrial>().enumerate() {
        let raw = result.with_context(|| format!("row {row_no}"))?;

        let emotion = Emotion::from_index(raw.emotion);
        if emotion == Emotion::Unexpected {
            log::warn!(
                "{}: row {row_no}: emotion index {} out of range, labelling {}",
                path.display(),
                raw.emotion,
                UNEXPECTED_EMOTION
            );
        }

        let reference = raw
            .condition2
            .map(Reference::try_from)
            .transpose()
            .with_context(|| format!("row {row_no}"))?;

        out.push(Trial {
            emotion_index: raw.emotion,
            emotion,
            condition1: raw.condition1,
            reference,
            valence: raw.x,
            arousal: raw.y,
            setnum,
        });
    }
    Ok(())
}
