use super::error::CatalogError;
use super::model::Catalog;
use super::schema::{BMAG, PM_MAG, RCMAG, VMAG};

/// Plot coordinates computed from a quality-filtered catalog.
///
/// All four sequences are row-aligned with the catalog they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedQuantities {
    /// B − Rc.
    pub color_index_1: Vec<f64>,
    /// B − V.
    pub color_index_2: Vec<f64>,
    /// −B, so brighter stars sit higher on the plot.
    pub depth: Vec<f64>,
    /// Proper-motion magnitude carried over from the filter.
    pub pm_mag: Vec<f64>,
}

impl DerivedQuantities {
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// The first `max` rows of every sequence.
    pub fn truncated(&self, max: usize) -> DerivedQuantities {
        let take = |v: &Vec<f64>| v.iter().take(max).copied().collect::<Vec<_>>();
        DerivedQuantities {
            color_index_1: take(&self.color_index_1),
            color_index_2: take(&self.color_index_2),
            depth: take(&self.depth),
            pm_mag: take(&self.pm_mag),
        }
    }
}

/// Compute colour indices and depth for every row of a filtered catalog.
///
/// The catalog must already carry the `pmMag` column added by the quality filter.
pub fn derive_quantities(catalog: &Catalog) -> Result<DerivedQuantities, CatalogError> {
    let b = catalog.column(BMAG)?;
    let v = catalog.column(VMAG)?;
    let rc = catalog.column(RCMAG)?;
    let pm = catalog.column(PM_MAG)?;

    Ok(DerivedQuantities {
        color_index_1: difference(b, rc),
        color_index_2: difference(b, v),
        depth: b.iter().map(|&mag| -mag).collect(),
        pm_mag: pm.to_vec(),
    })
}

fn difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(&x, &y)| x - y).collect()
}
