// ---------------------------------------------------------------------------
// Catalog layout
// ---------------------------------------------------------------------------

/// One field of the catalog's byte-by-byte description (Bellini et al. 2009).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    /// Column label used as the table key.
    pub label: &'static str,
    /// First byte of the field (1-based, inclusive).
    pub start: usize,
    /// Last byte of the field (1-based, inclusive).
    pub end: usize,
    /// Fortran edit descriptor, e.g. `F6.3`.
    pub format: &'static str,
    pub unit: &'static str,
    /// Value that marks the field as not measured, if any.
    pub null_value: Option<f64>,
    pub description: &'static str,
}

impl ColumnSpec {
    const fn new(
        label: &'static str,
        start: usize,
        end: usize,
        format: &'static str,
        unit: &'static str,
        null_value: Option<f64>,
        description: &'static str,
    ) -> Self {
        ColumnSpec {
            label,
            start,
            end,
            format,
            unit,
            null_value,
            description,
        }
    }

    /// Field width in bytes.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// "Not measured" marker used by every magnitude column.
pub const MISSING_MAGNITUDE: f64 = 99.999;

const MAG_NULL: Option<f64> = Some(MISSING_MAGNITUDE);

pub const SEQ: &str = "Seq";
pub const PMRA: &str = "pmRA";
pub const PMDE: &str = "pmDE";
pub const BMAG: &str = "Bmag";
pub const VMAG: &str = "Vmag";
pub const RCMAG: &str = "Rcmag";

/// Label of the proper-motion magnitude column added by the quality filter.
pub const PM_MAG: &str = "pmMag";

/// The catalog fields, in file order.
pub const COLUMNS: [ColumnSpec; 23] = [
    ColumnSpec::new(SEQ, 1, 6, "I6", "---", None, "Star sequential number"),
    ColumnSpec::new("RAdeg", 8, 17, "F10.6", "deg", None, "Right ascension (J2000, Epoch J2003.29)"),
    ColumnSpec::new("DEdeg", 19, 28, "F10.6", "deg", None, "Declination (J2000, Epoch J2003.29)"),
    ColumnSpec::new("Xpos", 30, 37, "F8.3", "pix", None, "X master frame position (distortion free)"),
    ColumnSpec::new("Ypos", 39, 46, "F8.3", "pix", None, "Y master frame position (distortion free)"),
    ColumnSpec::new(PMRA, 48, 53, "F6.2", "mas/yr", None, "Proper motion along RA, pmRAcosDE"),
    ColumnSpec::new("e_pmRA", 55, 59, "F5.2", "mas/yr", None, "Proper motion rms along pmRAcosDE"),
    ColumnSpec::new(PMDE, 61, 66, "F6.2", "mas/yr", None, "Proper motion along pmDE"),
    ColumnSpec::new("e_pmDE", 68, 72, "F5.2", "mas/yr", None, "Proper motion rms along pmDE"),
    ColumnSpec::new("Umag", 74, 79, "F6.3", "mag", MAG_NULL, "Johnson U magnitude"),
    ColumnSpec::new("e_Umag", 81, 86, "F6.3", "mag", MAG_NULL, "Johnson U magnitude rms"),
    ColumnSpec::new(BMAG, 88, 93, "F6.3", "mag", MAG_NULL, "Johnson B magnitude"),
    ColumnSpec::new("e_Bmag", 95, 100, "F6.3", "mag", MAG_NULL, "Johnson B magnitude rms"),
    ColumnSpec::new(VMAG, 102, 107, "F6.3", "mag", MAG_NULL, "Johnson V magnitude"),
    ColumnSpec::new("e_Vmag", 109, 114, "F6.3", "mag", MAG_NULL, "Johnson V magnitude rms"),
    ColumnSpec::new(RCMAG, 116, 121, "F6.3", "mag", MAG_NULL, "Cousins R magnitude"),
    ColumnSpec::new("e_Rcmag", 123, 128, "F6.3", "mag", MAG_NULL, "Cousins R magnitude rms"),
    ColumnSpec::new("Icmag", 130, 135, "F6.3", "mag", MAG_NULL, "Cousins I magnitude"),
    ColumnSpec::new("e_Icmag", 137, 142, "F6.3", "mag", MAG_NULL, "Cousins I magnitude rms"),
    ColumnSpec::new("Ha", 144, 149, "F6.3", "mag", MAG_NULL, "Halpha magnitude"),
    ColumnSpec::new("e_Ha", 151, 156, "F6.3", "mag", MAG_NULL, "Halpha magnitude rms"),
    ColumnSpec::new("Mm", 158, 160, "I3", "%", None, "Membership probability"),
    ColumnSpec::new("Mm2", 162, 164, "I3", "%", Some(-1.0), "Membership probability alternative"),
];

/// Number of whitespace-separated fields in every record.
pub const COLUMN_COUNT: usize = COLUMNS.len();

/// Ordered column labels.
pub fn column_names() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_spec(label: &str) -> Option<&'static ColumnSpec> {
        COLUMNS.iter().find(|c| c.label == label)
    }

    #[test]
    fn names_follow_file_order() {
        let names = column_names();
        assert_eq!(names.len(), COLUMN_COUNT);
        assert_eq!(names.first(), Some(&"Seq"));
        assert_eq!(names.last(), Some(&"Mm2"));
        assert_eq!(names[11], BMAG);
        assert_eq!(names[13], VMAG);
        assert_eq!(names[15], RCMAG);
    }

    #[test]
    fn byte_ranges_are_ordered_and_separated() {
        for pair in COLUMNS.windows(2) {
            assert!(pair[0].end < pair[1].start, "{} overlaps {}", pair[0].label, pair[1].label);
        }
        assert_eq!(column_spec(BMAG).map(ColumnSpec::width), Some(6));
    }

    #[test]
    fn magnitudes_carry_the_sentinel() {
        for label in [BMAG, VMAG, RCMAG] {
            assert_eq!(column_spec(label).unwrap().null_value, Some(MISSING_MAGNITUDE));
        }
        assert_eq!(column_spec(PMRA).unwrap().null_value, None);
        assert!(column_spec(PM_MAG).is_none());
    }
}
