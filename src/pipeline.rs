use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::derive::derive_quantities;
use crate::data::filter::{apply_quality_filter_with_report, FilterReport, QualityCriteria};
use crate::data::loader::load_catalog;
use crate::plot::html::write_document;
use crate::plot::scene::Scene;
use crate::plot::PlotStyle;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything a run needs.  The defaults are the only configuration the
/// binary uses.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Whitespace-separated catalog to read.
    pub input: PathBuf,
    /// HTML document to write.
    pub output: PathBuf,
    pub criteria: QualityCriteria,
    pub style: PlotStyle,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("catalog.dat"),
            output: PathBuf::from("ngc5139_3d.html"),
            criteria: QualityCriteria::default(),
            style: PlotStyle::default(),
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub filter: FilterReport,
    /// Stars in the written scene (after the render cap).
    pub rendered: usize,
    pub output: PathBuf,
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Load → filter → derive → render.  The output is only written once every
/// earlier stage has succeeded.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let catalog = load_catalog(&config.input)
        .with_context(|| format!("loading catalog {}", config.input.display()))?;

    let (selected, report) = apply_quality_filter_with_report(&catalog, &config.criteria)
        .context("applying quality selection")?;
    log::info!(
        "{} of {} stars pass the quality selection",
        report.output_rows,
        report.input_rows
    );

    let derived = derive_quantities(&selected).context("deriving colour indices")?;

    let scene = Scene::scatter(&derived, &config.style).context("building scene")?;
    write_document(&scene, &config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;

    Ok(RunSummary {
        filter: report,
        rendered: scene.point_count(),
        output: config.output.clone(),
    })
}
