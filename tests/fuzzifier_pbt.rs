//! Property-Based Tests for the Fuzzifier
//!
//! Tests the following invariants:
//! - Degrees: every membership degree lies in [0, 1]
//! - Partition of unity: auto-partition degrees sum to one inside the range
//! - Idempotence: fuzzify twice yields identical variables
//! - Consistency: interpolating an original row reproduces the membership table
//! - Clamping: values outside the observed range take the edge degrees

use proptest::prelude::*;

use fuzzifier::{Fuzzifier, ModalityConfig, Table};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_column(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-10_000i64..=10_000i64).prop_map(|v| v as f64 / 10.0), len)
}

fn arb_table() -> impl Strategy<Value = Table> {
    (2usize..=20).prop_flat_map(|rows| {
        (arb_column(rows), arb_column(rows)).prop_map(|(a, b)| {
            Table::new(vec![("a", a), ("b", b)]).expect("equal column lengths")
        })
    })
}

fn arb_partition() -> impl Strategy<Value = usize> {
    prop_oneof![Just(3usize), Just(5usize), Just(7usize)]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_degrees_in_unit_interval(data in arb_table(), n in arb_partition()) {
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new().with_auto("a", n));
        fuzzifier.fuzzify().unwrap();
        let table = fuzzifier.membership_table().unwrap();
        for (_, values) in table.iter_columns() {
            for &v in values {
                prop_assert!((0.0..=1.0).contains(&v), "degree {} out of range", v);
            }
        }
    }

    #[test]
    fn prop_auto_partition_sums_to_one(data in arb_table(), n in arb_partition()) {
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new().with_auto("b", n));
        fuzzifier.fuzzify().unwrap();
        let b = fuzzifier.variable("b").unwrap();
        let (min, max) = b.range();
        prop_assume!(max > min);
        for i in 0..data.n_rows() {
            let total: f64 = b.terms().iter().map(|t| t.degrees()[i]).sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "row {} sums to {}", i, total);
        }
    }

    #[test]
    fn prop_fuzzify_idempotent(data in arb_table(), n in arb_partition()) {
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new().with_auto("a", n));
        fuzzifier.fuzzify().unwrap();
        let first = fuzzifier.variables().to_vec();
        fuzzifier.fuzzify().unwrap();
        prop_assert_eq!(fuzzifier.variables(), first.as_slice());
    }

    #[test]
    fn prop_interpolation_reproduces_table(data in arb_table(), n in arb_partition()) {
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new().with_auto("a", n));
        fuzzifier.fuzzify().unwrap();
        let table = fuzzifier.membership_table().unwrap().clone();
        let interpolated = fuzzifier.interpolate(&data).unwrap();

        prop_assert_eq!(interpolated.column_names(), table.column_names());
        for (name, values) in interpolated.iter_columns() {
            let expected = table.column(name).unwrap();
            for (got, want) in values.iter().zip(expected) {
                prop_assert!((got - want).abs() < 1e-9, "{}: {} vs {}", name, got, want);
            }
        }
    }

    #[test]
    fn prop_out_of_range_clamps(data in arb_table(), offset in 0.1f64..1_000.0) {
        let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
        fuzzifier.fuzzify().unwrap();
        let (a_min, a_max) = fuzzifier.variable("a").unwrap().range();
        let (b_min, b_max) = fuzzifier.variable("b").unwrap().range();

        let below = Table::new(vec![("a", vec![a_min - offset]), ("b", vec![b_min - offset])]).unwrap();
        let at_min = Table::new(vec![("a", vec![a_min]), ("b", vec![b_min])]).unwrap();
        let above = Table::new(vec![("a", vec![a_max + offset]), ("b", vec![b_max + offset])]).unwrap();
        let at_max = Table::new(vec![("a", vec![a_max]), ("b", vec![b_max])]).unwrap();

        let (lo, lo_edge) = (fuzzifier.interpolate(&below).unwrap(), fuzzifier.interpolate(&at_min).unwrap());
        let (hi, hi_edge) = (fuzzifier.interpolate(&above).unwrap(), fuzzifier.interpolate(&at_max).unwrap());
        for ((_, v), (_, e)) in lo.iter_columns().zip(lo_edge.iter_columns()) {
            prop_assert_eq!(v[0], e[0]);
        }
        for ((_, v), (_, e)) in hi.iter_columns().zip(hi_edge.iter_columns()) {
            prop_assert_eq!(v[0], e[0]);
        }
    }
}
