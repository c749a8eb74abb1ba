use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Emotion – fixed five-category label set
// ---------------------------------------------------------------------------

/// The five emotion categories, in raw-index order (0–4).
pub const EMOTIONS: [Emotion; 5] = [
    Emotion::AngerCl,
    Emotion::Excite,
    Emotion::Happy,
    Emotion::Relax,
    Emotion::Sad,
];

/// Display name of the sentinel used for out-of-range category indices.
pub const UNEXPECTED_EMOTION: &str = "UnExpectedEmotion";

/// Emotion category of a trial, derived from the raw integer code.
///
/// `Unexpected` is a sentinel for indices outside 0–4: labelling is lenient
/// by policy, a bad code degrades to the sentinel instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    AngerCl,
    Excite,
    Happy,
    Relax,
    Sad,
    Unexpected,
}

impl Emotion {
    /// Map a raw category code to its emotion. Never fails; anything outside
    /// 0–4 becomes [`Emotion::Unexpected`].
    pub fn from_index(index: i64) -> Emotion {
        match index {
            0 => Emotion::AngerCl,
            1 => Emotion::Excite,
            2 => Emotion::Happy,
            3 => Emotion::Relax,
            4 => Emotion::Sad,
            _ => Emotion::Unexpected,
        }
    }

    /// Fixed display name, matching the source-file label vocabulary.
    pub fn name(&self) -> &'static str {
        match self {
            Emotion::AngerCl => "anger_cl",
            Emotion::Excite => "excite",
            Emotion::Happy => "happy",
            Emotion::Relax => "relax",
            Emotion::Sad => "sad",
            Emotion::Unexpected => UNEXPECTED_EMOTION,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Reference – SELF/OTHER face condition
// ---------------------------------------------------------------------------

/// Error for condition codes outside the known vocabulary. Unlike emotion
/// indices, a bad condition code is fatal.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unexpected condition2 code {0} (expected 0 = SELF or 1 = OTHER)")]
pub struct InvalidReference(pub i64);

/// Reference-face condition of a trial (`condition2` in the source files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    /// The subject's own face was shown (code 0).
    SelfFace,
    /// Another person's face was shown (code 1).
    OtherFace,
}

impl TryFrom<i64> for Reference {
    type Error = InvalidReference;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Reference::SelfFace),
            1 => Ok(Reference::OtherFace),
            other => Err(InvalidReference(other)),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::SelfFace => f.write_str("SELF"),
            Reference::OtherFace => f.write_str("OTHER"),
        }
    }
}

// ---------------------------------------------------------------------------
// Trial – one row of the unified table
// ---------------------------------------------------------------------------

/// A single subject response (one row of one source file).
#[derive(Debug, Clone)]
pub struct Trial {
    /// Raw category code as read from the file.
    pub emotion_index: i64,
    /// Derived category label (sentinel for out-of-range codes).
    pub emotion: Emotion,
    /// Self-face display code, carried through but not used for faceting.
    pub condition1: Option<i64>,
    /// Reference-face condition; `None` when the file has no `condition2` column.
    pub reference: Option<Reference>,
    /// Valence rating (x axis), roughly within [-4.5, 4.5].
    pub valence: f64,
    /// Arousal rating (y axis), roughly within [-4.5, 4.5].
    pub arousal: f64,
    /// Index of the source file this row came from.
    pub setnum: usize,
}

// ---------------------------------------------------------------------------
// TrialTable – the unified, immutable table
// ---------------------------------------------------------------------------

/// The ordered concatenation of all trials across all input files.
///
/// Row order is preserved per file; files are concatenated in lexicographic
/// path order so `setnum` assignment is deterministic. The table is built once
/// and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct TrialTable {
    /// All trials (rows), in load order.
    pub trials: Vec<Trial>,
    /// Source files in processing order; `Trial::setnum` indexes into this.
    pub source_files: Vec<PathBuf>,
}

impl TrialTable {
    /// Number of trials.
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Whether the table has no trials.
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Whether any trial carries a reference condition.
    pub fn has_reference(&self) -> bool {
        self.trials.iter().any(|t| t.reference.is_some())
    }

    /// Indices of the trials originating from the given source file.
    pub fn rows_from_file(&self, setnum: usize) -> Vec<usize> {
        self.trials
            .iter()
            .enumerate()
            .filter(|(_, t)| t.setnum == setnum)
            .map(|(i, _)| i)
            .collect()
    }
}
