use std::fmt;

use super::model::{Emotion, Reference, Trial, TrialTable};

// ---------------------------------------------------------------------------
// Mode – which reference condition a render includes
// ---------------------------------------------------------------------------

/// Facet selector for one render: everything, or only one reference condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    All,
    SelfRef,
    OtherRef,
}

impl Mode {
    /// Whether a trial is included under this mode.
    ///
    /// `All` keeps every row, including rows with no reference condition;
    /// the condition modes keep only rows whose reference matches.
    pub fn includes(&self, trial: &Trial) -> bool {
        match self {
            Mode::All => true,
            Mode::SelfRef => trial.reference == Some(Reference::SelfFace),
            Mode::OtherRef => trial.reference == Some(Reference::OtherFace),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::All => f.write_str("ALL"),
            Mode::SelfRef => f.write_str("SELF"),
            Mode::OtherRef => f.write_str("OTHER"),
        }
    }
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// Return indices of trials included under the given mode.
pub fn filtered_indices(table: &TrialTable, mode: Mode) -> Vec<usize> {
    table
        .trials
        .iter()
        .enumerate()
        .filter(|(_, t)| mode.includes(t))
        .map(|(i, _)| i)
        .collect()
}

/// Narrow a pre-filtered index set down to one emotion category.
pub fn emotion_indices(table: &TrialTable, indices: &[usize], emotion: Emotion) -> Vec<usize> {
    indices
        .iter()
        .copied()
        .filter(|&i| table.trials[i].emotion == emotion)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn trial(emotion_index: i64, reference: Option<Reference>) -> Trial {
        Trial {
            emotion_index,
            emotion: Emotion::from_index(emotion_index),
            condition1: None,
            reference,
            valence: 0.0,
            arousal: 0.0,
            setnum: 0,
        }
    }

    fn sample_table() -> TrialTable {
        TrialTable {
            trials: vec![
                trial(0, Some(Reference::SelfFace)),
                trial(1, Some(Reference::OtherFace)),
                trial(2, Some(Reference::SelfFace)),
                trial(2, None),
                trial(4, Some(Reference::OtherFace)),
            ],
            source_files: Vec::new(),
        }
    }

    #[test]
    fn all_mode_keeps_every_row() {
        let table = sample_table();
        assert_eq!(filtered_indices(&table, Mode::All), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn self_and_other_are_disjoint_and_cover_referenced_rows() {
        let table = sample_table();
        let self_set: BTreeSet<usize> =
            filtered_indices(&table, Mode::SelfRef).into_iter().collect();
        let other_set: BTreeSet<usize> =
            filtered_indices(&table, Mode::OtherRef).into_iter().collect();

        assert!(self_set.is_disjoint(&other_set));

        let referenced: BTreeSet<usize> = filtered_indices(&table, Mode::All)
            .into_iter()
            .filter(|&i| table.trials[i].reference.is_some())
            .collect();
        let union: BTreeSet<usize> = self_set.union(&other_set).copied().collect();
        assert_eq!(union, referenced);
    }

    #[test]
    fn emotion_partition_respects_prior_filter() {
        let table = sample_table();
        let self_rows = filtered_indices(&table, Mode::SelfRef);
        assert_eq!(emotion_indices(&table, &self_rows, Emotion::Happy), vec![2]);
        assert_eq!(
            emotion_indices(&table, &self_rows, Emotion::Sad),
            Vec::<usize>::new()
        );
    }
}
