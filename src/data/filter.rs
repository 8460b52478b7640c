use super::error::CatalogError;
use super::model::Catalog;
use super::schema::{BMAG, MISSING_MAGNITUDE, PMDE, PMRA, PM_MAG, RCMAG, VMAG};

// ---------------------------------------------------------------------------
// Quality criteria
// ---------------------------------------------------------------------------

/// Selection applied before plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityCriteria {
    /// Magnitude value meaning "not measured".  Compared with exact equality.
    pub sentinel: f64,
    /// Rows whose proper-motion magnitude is not strictly below this (mas/yr) are dropped.
    pub pm_cutoff: f64,
    /// Bands that must be measured, checked in this order.
    pub required_bands: Vec<String>,
}

impl Default for QualityCriteria {
    fn default() -> Self {
        QualityCriteria {
            sentinel: MISSING_MAGNITUDE,
            pm_cutoff: 10.0,
            required_bands: vec![BMAG.to_string(), RCMAG.to_string(), VMAG.to_string()],
        }
    }
}

/// Number of rows surviving each filter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub input_rows: usize,
    /// `(band, rows remaining after requiring it)`, in check order.
    pub after_bands: Vec<(String, usize)>,
    pub output_rows: usize,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Apply the quality selection, returning a new catalog with a `pmMag` column.
///
/// Steps, in order:
/// 1. drop rows where any required band equals the sentinel;
/// 2. attach `pmMag = sqrt(pmRA² + pmDE²)` (replacing any existing column);
/// 3. keep rows with `pmMag < pm_cutoff`.
///
/// Row order is preserved.  An empty result is valid.
pub fn apply_quality_filter(
    catalog: &Catalog,
    criteria: &QualityCriteria,
) -> Result<Catalog, CatalogError> {
    apply_quality_filter_with_report(catalog, criteria).map(|(filtered, _)| filtered)
}

/// Same as [`apply_quality_filter`], also reporting per-step survivor counts.
pub fn apply_quality_filter_with_report(
    catalog: &Catalog,
    criteria: &QualityCriteria,
) -> Result<(Catalog, FilterReport), CatalogError> {
    let mut current = catalog.clone();
    let mut after_bands = Vec::with_capacity(criteria.required_bands.len());

    for band in &criteria.required_bands {
        let keep = sentinel_free_indices(current.column(band)?, criteria.sentinel);
        current = current.select_rows(&keep);
        log::debug!("{band} measured: {} rows remain", current.len());
        after_bands.push((band.clone(), current.len()));
    }

    let pm_mag = proper_motion_magnitudes(current.column(PMRA)?, current.column(PMDE)?);
    current = current.with_column(PM_MAG, pm_mag)?;

    let keep = below_indices(current.column(PM_MAG)?, criteria.pm_cutoff);
    let filtered = current.select_rows(&keep);
    log::debug!(
        "{PM_MAG} < {}: {} rows remain",
        criteria.pm_cutoff,
        filtered.len()
    );

    let report = FilterReport {
        input_rows: catalog.len(),
        after_bands,
        output_rows: filtered.len(),
    };
    Ok((filtered, report))
}

/// Indices of values that are not exactly `sentinel`.
pub fn sentinel_free_indices(values: &[f64], sentinel: f64) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != sentinel)
        .map(|(i, _)| i)
        .collect()
}

/// Euclidean norm of the two proper-motion components, row by row.
pub fn proper_motion_magnitudes(pm_ra: &[f64], pm_de: &[f64]) -> Vec<f64> {
    pm_ra
        .iter()
        .zip(pm_de)
        .map(|(&ra, &de)| (ra * ra + de * de).sqrt())
        .collect()
}

fn below_indices(values: &[f64], limit: f64) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v < limit)
        .map(|(i, _)| i)
        .collect()
}
