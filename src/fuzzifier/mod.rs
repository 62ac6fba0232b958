//! Fuzzifier
//!
//! Turns a table of crisp features into fuzzy variables, one per column.
//!
//! Lifecycle:
//! - `new` borrows the input table and keeps the modality configuration as is
//! - `fuzzify` (re)builds every variable and drops the cached membership table
//! - `membership_table` materializes `"<feature>;<modality>"` columns once and
//!   reuses them until the next `fuzzify`
//! - `interpolate` maps unseen rows through the stored membership degrees
//! - `view` / `render_svg` draw each variable's membership functions

mod variable;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{FeatureModalities, ModalityConfig};
use crate::error::{FuzzifyError, Result};
use crate::interp::LookupTable;
use crate::membership::{auto_partition, MembershipFunction};
use crate::plot;
use crate::table::Table;
use crate::types::{FuzzifierOptions, COLUMN_SEPARATOR, DEFAULT_PARTITION};

pub use variable::{FuzzyVariable, Term};

/// Column name of a (feature, modality) pair in membership tables
pub fn membership_column(feature: &str, modality: &str) -> String {
    format!("{feature}{COLUMN_SEPARATOR}{modality}")
}

/// Crisp-to-fuzzy converter over a borrowed table
#[derive(Debug)]
pub struct Fuzzifier<'a> {
    /// Crisp input, never modified
    data: &'a Table,
    modalities: ModalityConfig,
    options: FuzzifierOptions,
    /// One variable per column, in column order
    variables: Vec<FuzzyVariable>,
    /// Materialized membership table, cleared by `fuzzify`
    table: Option<Table>,
}

impl<'a> Fuzzifier<'a> {
    /// Create a fuzzifier; the configuration is only checked by `fuzzify`.
    pub fn new(data: &'a Table, modalities: ModalityConfig) -> Self {
        Self::with_options(data, modalities, FuzzifierOptions::default())
    }

    pub fn with_options(
        data: &'a Table,
        modalities: ModalityConfig,
        options: FuzzifierOptions,
    ) -> Self {
        Self {
            data,
            modalities,
            options,
            variables: Vec::new(),
            table: None,
        }
    }

    pub fn data(&self) -> &Table {
        self.data
    }

    pub fn modalities(&self) -> &ModalityConfig {
        &self.modalities
    }

    // ==================== Fuzzification ====================

    /// Build one fuzzy variable per column, replacing any previous ones.
    ///
    /// On error the previous variables and cached table are left untouched.
    pub fn fuzzify(&mut self) -> Result<()> {
        if self.data.is_empty() {
            return Err(FuzzifyError::EmptyTable);
        }
        for feature in self.modalities.features() {
            if self.data.column(feature).is_none() {
                warn!(feature, "modality configuration for unknown feature ignored");
            }
        }

        let mut variables = Vec::with_capacity(self.data.n_cols());
        for (name, values) in self.data.iter_columns() {
            let mut variable = FuzzyVariable::new(name.to_string(), values.to_vec());
            match self.modalities.get(name) {
                Some(FeatureModalities::Auto(count)) => self.add_auto_terms(&mut variable, *count)?,
                Some(FeatureModalities::Explicit(modalities)) => {
                    for (modality, function) in modalities {
                        add_explicit_term(&mut variable, modality, function)?;
                    }
                }
                None => self.add_auto_terms(&mut variable, DEFAULT_PARTITION)?,
            }
            debug!(
                feature = name,
                modalities = variable.len(),
                "built fuzzy variable"
            );
            variables.push(variable);
        }

        self.variables = variables;
        self.table = None;
        Ok(())
    }

    fn add_auto_terms(&self, variable: &mut FuzzyVariable, count: usize) -> Result<()> {
        let mut names = self
            .options
            .naming
            .names(count)
            .ok_or(FuzzifyError::UnsupportedPartition(count))?;
        if self.options.invert {
            names.reverse();
        }
        let (min, max) = variable.range();
        for (name, function) in names.into_iter().zip(auto_partition(min, max, count)) {
            variable.add_term(name.to_string(), function);
        }
        Ok(())
    }

    pub fn is_fuzzified(&self) -> bool {
        !self.variables.is_empty()
    }

    // ==================== Lookup ====================

    /// Fuzzy variable of `feature`.
    ///
    /// Fails with `NotFound` listing the known features, which is empty
    /// before `fuzzify` has run.
    pub fn variable(&self, feature: &str) -> Result<&FuzzyVariable> {
        self.variables
            .iter()
            .find(|v| v.name() == feature)
            .ok_or_else(|| FuzzifyError::NotFound {
                key: feature.to_string(),
                available: self.variables.iter().map(|v| v.name().to_string()).collect(),
            })
    }

    /// All variables, in column order
    pub fn variables(&self) -> &[FuzzyVariable] {
        &self.variables
    }

    // ==================== Membership Table ====================

    /// Membership degree table, one `"<feature>;<modality>"` column per
    /// modality, row-aligned with the input. Built once per `fuzzify`.
    pub fn membership_table(&mut self) -> Result<&Table> {
        if !self.is_fuzzified() {
            return Err(FuzzifyError::NotFuzzified);
        }
        let table = match self.table.take() {
            Some(table) => table,
            None => {
                let table = self.build_membership_table()?;
                info!(
                    columns = table.n_cols(),
                    rows = table.n_rows(),
                    "materialized membership table"
                );
                table
            }
        };
        Ok(self.table.insert(table))
    }

    /// Current cache state, `None` until `membership_table` runs
    pub fn cached_table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    fn build_membership_table(&self) -> Result<Table> {
        let mut table = Table::with_index(self.data.index().to_vec());
        for variable in &self.variables {
            for term in variable.terms() {
                table.push_column(
                    membership_column(variable.name(), term.name()),
                    term.degrees().to_vec(),
                )?;
            }
        }
        Ok(table)
    }

    // ==================== Interpolation ====================

    /// Membership degrees of unseen rows.
    ///
    /// Each modality is treated as a lookup table of the original
    /// `(value, degree)` pairs; values outside the observed range take the
    /// degree of the nearest edge. The result keeps `new_rows`' index.
    pub fn interpolate(&self, new_rows: &Table) -> Result<Table> {
        if !self.is_fuzzified() {
            return Err(FuzzifyError::NotFuzzified);
        }
        let mut table = Table::with_index(new_rows.index().to_vec());
        for variable in &self.variables {
            let queries = new_rows.require_column(variable.name())?;
            for term in variable.terms() {
                let lookup = LookupTable::new(variable.universe(), term.degrees());
                table.push_column(
                    membership_column(variable.name(), term.name()),
                    lookup.interpolate_all(queries),
                )?;
            }
        }
        debug!(rows = table.n_rows(), "interpolated new entries");
        Ok(table)
    }

    // ==================== Visualization ====================

    /// SVG chart of one variable's membership functions
    pub fn render_svg(&self, feature: &str) -> Result<String> {
        self.variable(feature).map(plot::render_svg)
    }

    /// Write one `<feature>.svg` per variable into `dir`.
    pub fn view<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>> {
        if !self.is_fuzzified() {
            return Err(FuzzifyError::NotFuzzified);
        }
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.variables.len());
        for variable in &self.variables {
            let path = dir.join(format!("{}.svg", plot::file_stem(variable.name())));
            fs::write(&path, plot::render_svg(variable))?;
            written.push(path);
        }
        info!(plots = written.len(), dir = %dir.display(), "rendered membership plots");
        Ok(written)
    }
}

fn add_explicit_term(
    variable: &mut FuzzyVariable,
    modality: &str,
    function: &MembershipFunction,
) -> Result<()> {
    function
        .validate()
        .map_err(|reason| FuzzifyError::InvalidMembership {
            feature: variable.name().to_string(),
            modality: modality.to_string(),
            reason,
        })?;
    variable.add_term(modality.to_string(), *function);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PartitionNaming, EPSILON};

    fn people() -> Table {
        Table::new(vec![
            ("age", vec![0.0, 25.0, 50.0, 75.0, 100.0]),
            ("income", vec![10.0, 90.0, 30.0, 50.0, 70.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_three_modalities() {
        let data = people();
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
        fuzzifier.fuzzify().unwrap();

        for feature in ["age", "income"] {
            let var = fuzzifier.variable(feature).unwrap();
            assert_eq!(var.term_names(), vec!["poor", "average", "good"]);
        }
        assert_eq!(fuzzifier.variable("income").unwrap().range(), (10.0, 90.0));
    }

    #[test]
    fn test_auto_degrees_over_universe() {
        let data = people();
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new().with_auto("age", 5));
        fuzzifier.fuzzify().unwrap();

        let age = fuzzifier.variable("age").unwrap();
        assert_eq!(age.len(), 5);
        // Universe points sit exactly on the five peaks
        for (i, term) in age.terms().iter().enumerate() {
            for (j, &degree) in term.degrees().iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((degree - expected).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_quantity_naming_inverted() {
        let data = people();
        let options = FuzzifierOptions {
            naming: PartitionNaming::Quantity,
            invert: true,
        };
        let mut fuzzifier = Fuzzifier::with_options(&data, ModalityConfig::new(), options);
        fuzzifier.fuzzify().unwrap();

        let age = fuzzifier.variable("age").unwrap();
        assert_eq!(age.term_names(), vec!["high", "average", "low"]);
        // "high" now labels the lowest triangle
        assert_eq!(age.term("high").unwrap().degrees()[0], 1.0);
    }

    #[test]
    fn test_unsupported_partition() {
        let data = people();
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new().with_auto("age", 4));
        let err = fuzzifier.fuzzify().unwrap_err();
        assert!(matches!(err, FuzzifyError::UnsupportedPartition(4)));
        assert!(!fuzzifier.is_fuzzified());
    }

    #[test]
    fn test_invalid_membership_reports_location() {
        let data = people();
        let config = ModalityConfig::new().with(
            "income",
            FeatureModalities::explicit(vec![(
                "mid",
                MembershipFunction::Gaussian(50.0, -1.0),
            )]),
        );
        let mut fuzzifier = Fuzzifier::new(&data, config);
        match fuzzifier.fuzzify().unwrap_err() {
            FuzzifyError::InvalidMembership { feature, modality, .. } => {
                assert_eq!(feature, "income");
                assert_eq!(modality, "mid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_table() {
        let data = Table::default();
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
        assert!(matches!(fuzzifier.fuzzify(), Err(FuzzifyError::EmptyTable)));
    }

    #[test]
    fn test_lookup_before_fuzzify() {
        let data = people();
        let fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
        match fuzzifier.variable("age").unwrap_err() {
            FuzzifyError::NotFound { key, available } => {
                assert_eq!(key, "age");
                assert!(available.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_operations_require_fuzzify() {
        let data = people();
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
        assert!(matches!(
            fuzzifier.membership_table(),
            Err(FuzzifyError::NotFuzzified)
        ));
        assert!(matches!(
            fuzzifier.interpolate(&data),
            Err(FuzzifyError::NotFuzzified)
        ));
        assert!(matches!(
            fuzzifier.view(std::env::temp_dir()),
            Err(FuzzifyError::NotFuzzified)
        ));
    }

    #[test]
    fn test_membership_table_cache_invalidation() {
        let data = people();
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
        fuzzifier.fuzzify().unwrap();
        assert!(fuzzifier.cached_table().is_none());

        let first = fuzzifier.membership_table().unwrap().clone();
        assert_eq!(first.n_cols(), 6);
        assert!(fuzzifier.cached_table().is_some());

        fuzzifier.fuzzify().unwrap();
        assert!(fuzzifier.cached_table().is_none());
        assert_eq!(fuzzifier.membership_table().unwrap(), &first);
    }

    #[test]
    fn test_interpolate_missing_column() {
        let data = people();
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
        fuzzifier.fuzzify().unwrap();

        let partial = Table::new(vec![("age", vec![30.0])]).unwrap();
        let err = fuzzifier.interpolate(&partial).unwrap_err();
        assert!(matches!(err, FuzzifyError::MissingColumn(name) if name == "income"));
    }

    #[test]
    fn test_membership_column_name() {
        assert_eq!(membership_column("age", "young"), "age;young");
    }
}
