/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  dat/*.tsv
///      │
///      ▼
///  ┌──────────┐
///  │  loader   │  parse + label rows → TrialTable
///  └──────────┘
///      │
///      ▼
///  ┌────────────┐
///  │ TrialTable  │  Vec<Trial>, source-file index
///  └────────────┘
///      │
///      ▼
///  ┌──────────┐
///  │  filter   │  mode + emotion predicates → row indices
///  └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
