use std::collections::BTreeMap;

use super::error::CatalogError;

// ---------------------------------------------------------------------------
// Catalog – the columnar table
// ---------------------------------------------------------------------------

/// A columnar numeric table: every column is a `Vec<f64>` of the same length.
///
/// All operations are column-wise, so the catalog is stored as columns
/// rather than row objects. A `Catalog` is never mutated in place; reshaping
/// operations return a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Column labels in insertion order.
    column_names: Vec<String>,
    columns: BTreeMap<String, Vec<f64>>,
    n_rows: usize,
}

impl Catalog {
    /// Build a table from `(label, values)` pairs.  All columns must share one length.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self, CatalogError> {
        let n_rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        if let Some((name, values)) = columns.iter().find(|(_, v)| v.len() != n_rows) {
            return Err(CatalogError::ColumnLength {
                column: name.clone(),
                expected: n_rows,
                found: values.len(),
            });
        }
        Ok(Self::build(columns, n_rows))
    }

    fn build(columns: Vec<(String, Vec<f64>)>, n_rows: usize) -> Self {
        let mut column_names = Vec::with_capacity(columns.len());
        let mut map = BTreeMap::new();
        for (name, values) in columns {
            if !map.contains_key(&name) {
                column_names.push(name.clone());
            }
            map.insert(name, values);
        }
        Catalog {
            column_names,
            columns: map,
            n_rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Whether the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Ordered column labels.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Borrow a column by label.
    pub fn column(&self, name: &str) -> Result<&[f64], CatalogError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
    }

    /// Return a copy with `name` set to `values`.
    ///
    /// An existing column of the same name is replaced in place (keeping its
    /// position); otherwise the column is appended.
    pub fn with_column(&self, name: &str, values: Vec<f64>) -> Result<Catalog, CatalogError> {
        if values.len() != self.n_rows {
            return Err(CatalogError::ColumnLength {
                column: name.to_string(),
                expected: self.n_rows,
                found: values.len(),
            });
        }
        let mut out = self.clone();
        if !out.columns.contains_key(name) {
            out.column_names.push(name.to_string());
        }
        out.columns.insert(name.to_string(), values);
        Ok(out)
    }

    /// Return a copy holding only the rows at `indices`, in the given order.
    ///
    /// Indices must be in range; callers pass indices they obtained from this table.
    pub fn select_rows(&self, indices: &[usize]) -> Catalog {
        let columns = self
            .columns
            .iter()
            .map(|(name, values)| {
                let picked: Vec<f64> = indices.iter().map(|&i| values[i]).collect();
                (name.clone(), picked)
            })
            .collect();
        Catalog {
            column_names: self.column_names.clone(),
            columns,
            n_rows: indices.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_columns(vec![
            ("a".to_string(), vec![1.0, 2.0, 3.0]),
            ("b".to_string(), vec![10.0, 20.0, 30.0]),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = Catalog::from_columns(vec![
            ("a".to_string(), vec![1.0, 2.0]),
            ("b".to_string(), vec![1.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::ColumnLength { expected: 2, found: 1, .. }));
    }

    #[test]
    fn with_column_appends_then_replaces() {
        let cat = sample();
        let added = cat.with_column("c", vec![0.5, 0.5, 0.5]).unwrap();
        assert_eq!(added.column_names(), ["a", "b", "c"]);

        let replaced = added.with_column("a", vec![7.0, 8.0, 9.0]).unwrap();
        assert_eq!(replaced.column_names(), ["a", "b", "c"]);
        assert_eq!(replaced.column("a").unwrap(), [7.0, 8.0, 9.0]);
        // source untouched
        assert_eq!(cat.column("a").unwrap(), [1.0, 2.0, 3.0]);
        assert!(cat.column("c").is_err());
    }

    #[test]
    fn with_column_checks_length() {
        assert!(sample().with_column("c", vec![1.0]).is_err());
    }

    #[test]
    fn select_rows_keeps_requested_order() {
        let picked = sample().select_rows(&[2, 0]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.column("b").unwrap(), [30.0, 10.0]);
        assert_eq!(picked.column("a").unwrap(), [3.0, 1.0]);
        assert_eq!(picked.column_names(), ["a", "b"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = sample().column("zzz").unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "zzz"));
    }

    #[test]
    fn empty_catalog_keeps_schema() {
        let cat = Catalog::from_columns(vec![
            ("x".to_string(), Vec::new()),
            ("y".to_string(), Vec::new()),
        ])
        .unwrap();
        assert!(cat.is_empty());
        assert_eq!(cat.column("y").unwrap().len(), 0);
    }
}
