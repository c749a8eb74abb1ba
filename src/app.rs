use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Local;

use crate::data::filter::Mode;
use crate::data::loader;
use crate::plot;

// ---------------------------------------------------------------------------
// One batch run: load → summarize → render
// ---------------------------------------------------------------------------

/// Settings for one batch run.
pub struct RunConfig {
    /// Directory holding the `.tsv` trial logs.
    pub data_dir: PathBuf,
    /// Directory the PNG files are written to.
    pub out_dir: PathBuf,
    /// Facet by reference condition (SELF, OTHER, ALL in sequence) or render
    /// a single unfaceted grid.
    pub facet: bool,
}

/// Load the unified table and render the requested grid sequence.
///
/// A faceted run over data that carries no reference condition at all is an
/// error; an entirely empty table still renders (empty axes).
pub fn run(config: &RunConfig) -> Result<()> {
    let table = loader::load_dir(&config.data_dir)?;

    let names: Vec<String> = table
        .source_files
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    println!(
        "processing [{}] with {} trials total",
        names.join(", "),
        table.len()
    );

    // One timestamp per run so the three facet outputs sort together.
    let stamp = Local::now().format("%Y-%m-%d-%H%M%S").to_string();

    if config.facet {
        if !table.is_empty() && !table.has_reference() {
            bail!(
                "cannot facet by reference condition: input files have no \
                 'condition2' column (use --no-facet)"
            );
        }
        for mode in [Mode::SelfRef, Mode::OtherRef, Mode::All] {
            let path = config.out_dir.join(format!("plot_{stamp}_{mode}.png"));
            println!("plotting {mode} condition to {}", path.display());
            plot::render_grid(&table, mode, &path)?;
        }
    } else {
        let path = config.out_dir.join(format!("plot_{stamp}.png"));
        println!("plotting everything to {}", path.display());
        plot::render_grid(&table, Mode::All, &path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn png_names(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".png"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn faceted_run_writes_one_png_per_mode() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(
            data.path().join("s01.tsv"),
            "emotion\tcondition2\tx\ty\n2\t0\t1.0\t1.0\n2\t1\t-1.0\t0.5\n",
        )
        .unwrap();

        run(&RunConfig {
            data_dir: data.path().to_path_buf(),
            out_dir: out.path().to_path_buf(),
            facet: true,
        })
        .unwrap();

        let names = png_names(out.path());
        assert_eq!(names.len(), 3);
        assert!(names.iter().any(|n| n.ends_with("_SELF.png")));
        assert!(names.iter().any(|n| n.ends_with("_OTHER.png")));
        assert!(names.iter().any(|n| n.ends_with("_ALL.png")));
    }

    #[test]
    fn unfaceted_run_writes_a_single_unsuffixed_png() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(data.path().join("s01.tsv"), "emotion\tx\ty\n1\t0.2\t0.4\n").unwrap();

        run(&RunConfig {
            data_dir: data.path().to_path_buf(),
            out_dir: out.path().to_path_buf(),
            facet: false,
        })
        .unwrap();

        let names = png_names(out.path());
        assert_eq!(names.len(), 1);
        assert!(!names[0].contains("_SELF") && !names[0].contains("_ALL"));
    }

    #[test]
    fn faceting_without_condition_column_is_an_error() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(data.path().join("s01.tsv"), "emotion\tx\ty\n1\t0.2\t0.4\n").unwrap();

        let err = run(&RunConfig {
            data_dir: data.path().to_path_buf(),
            out_dir: out.path().to_path_buf(),
            facet: true,
        })
        .unwrap_err();
        assert!(err.to_string().contains("condition2"));
    }

    #[test]
    fn empty_data_directory_still_renders() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        run(&RunConfig {
            data_dir: data.path().to_path_buf(),
            out_dir: out.path().to_path_buf(),
            facet: true,
        })
        .unwrap();

        assert_eq!(png_names(out.path()).len(), 3);
    }
}
