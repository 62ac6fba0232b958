//! # fuzzifier - crisp-to-fuzzy data preparation
//!
//! Turns a table of numerical features into fuzzy membership degrees for
//! fuzzy-logic pipelines:
//!
//! - **Fuzzy variables** - one per feature, holding the observed universe and
//!   one membership function per modality
//! - **Modalities** - auto-generated triangular partitions (3, 5 or 7) or
//!   explicit `trimf` / `trapmf` / `gaussmf` shapes
//! - **Membership table** - every row re-expressed as `"<feature>;<modality>"`
//!   degrees, cached until the next fuzzification
//! - **Interpolation** - degrees for unseen rows, clamped at the observed edges
//! - **Plots** - SVG charts of each variable's membership functions
//!
//! Rule evaluation and defuzzification are out of scope.
//!
//! ## Modules
//!
//! - [`fuzzifier`] - the `Fuzzifier` and its fuzzy variables
//! - [`config`] - per-feature modality configuration (JSON)
//! - [`membership`] - membership function shapes and auto partitions
//! - [`interp`] - lookup-table interpolation
//! - [`table`] - numeric column store with CSV I/O
//! - [`plot`] - SVG rendering
//! - [`types`] - shared constants and options
//!
//! ## Example
//!
//! ```rust
//! use fuzzifier::{Fuzzifier, ModalityConfig, Table};
//!
//! let data = Table::new(vec![
//!     ("age", vec![18.0, 35.0, 62.0, 80.0]),
//!     ("income", vec![0.0, 40.0, 75.0, 100.0]),
//! ])
//! .unwrap();
//! let config = ModalityConfig::from_json_str(
//!     r#"{"age": {"auto": 5},
//!         "income": {"low": {"trimf": [0, 0, 50]}, "high": {"trimf": [0, 50, 100]}}}"#,
//! )
//! .unwrap();
//!
//! let mut fuzzifier = Fuzzifier::new(&data, config);
//! fuzzifier.fuzzify().unwrap();
//! assert_eq!(fuzzifier.variable("age").unwrap().len(), 5);
//!
//! let table = fuzzifier.membership_table().unwrap();
//! assert!(table.column("income;low").is_some());
//!
//! let unseen = Table::new(vec![("age", vec![120.0]), ("income", vec![25.0])]).unwrap();
//! let degrees = fuzzifier.interpolate(&unseen).unwrap();
//! assert_eq!(degrees.n_rows(), 1);
//! ```

pub mod config;
pub mod error;
pub mod fuzzifier;
pub mod interp;
pub mod logging;
pub mod membership;
pub mod plot;
pub mod settings;
pub mod table;
pub mod types;

pub use config::{FeatureModalities, ModalityConfig};
pub use error::{FuzzifyError, Result};
pub use fuzzifier::{membership_column, Fuzzifier, FuzzyVariable, Term};
pub use membership::MembershipFunction;
pub use table::Table;
pub use types::{FuzzifierOptions, PartitionNaming};
