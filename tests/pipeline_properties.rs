//! Property-based tests for the lazy pipeline
//!
//! These tests verify invariants that should hold for all inputs:
//! - `map` preserves length and position
//! - `fold` is a strict left fold from the identity
//! - `reduce` equals `fold` seeded with the first element
//! - Functor identity and composition laws
//! - Every scenario agrees with the procedural count

use lambdagame::consonants::devowelize;
use lambdagame::pipeline::Pipeline;
use lambdagame::scenarios;
use proptest::collection::vec;
use proptest::prelude::*;

/// Names made of ASCII letters, including uppercase vowels
fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,12}"
}

proptest! {
    /// Property: map yields one output per input, in the same position
    #[test]
    fn prop_map_preserves_length_and_position(values in vec(any::<i64>(), 0..64)) {
        let mapped = Pipeline::from_sequence(values.clone())
            .map(|x: i64| x.wrapping_mul(3))
            .to_vec();

        prop_assert_eq!(mapped.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(mapped[i], value.wrapping_mul(3));
        }
    }

    /// Property: fold matches a hand-written left fold, even for a
    /// non-associative operator
    #[test]
    fn prop_fold_is_left_fold(values in vec(any::<i32>(), 0..64), seed in any::<i32>()) {
        let mut expected = seed;
        for value in &values {
            expected = expected.wrapping_sub(*value);
        }

        let actual = Pipeline::from_sequence(values)
            .fold(seed, |a: i32, b: i32| a.wrapping_sub(b));
        prop_assert_eq!(actual, expected);
    }

    /// Property: fold over an empty pipeline returns the identity
    #[test]
    fn prop_fold_empty_returns_identity(seed in any::<u64>()) {
        let pipeline: Pipeline<u64> = Pipeline::from_sequence(Vec::new());
        prop_assert_eq!(pipeline.fold(seed, |a: u64, b: u64| a ^ b), seed);
    }

    /// Property: reduce on a non-empty pipeline equals folding the rest
    /// from the first element
    #[test]
    fn prop_reduce_equals_fold_from_first(values in vec(any::<i32>(), 1..64)) {
        let first = values[0];
        let rest = values[1..].to_vec();

        let reduced = Pipeline::from_sequence(values)
            .reduce(|a: i32, b: i32| a.wrapping_sub(b))
            .get()
            .unwrap();
        let folded = Pipeline::from_sequence(rest)
            .fold(first, |a: i32, b: i32| a.wrapping_sub(b));

        prop_assert_eq!(reduced, folded);
    }

    /// Property: mapping the identity changes nothing
    #[test]
    fn prop_identity_law(values in vec(name(), 0..32)) {
        let mapped = Pipeline::from_sequence(values.clone())
            .map(|s: String| s)
            .to_vec();
        prop_assert_eq!(mapped, values);
    }

    /// Property: map(f).map(g) equals map(g . f)
    #[test]
    fn prop_composition_law(values in vec(name(), 0..32)) {
        let f = |s: String| devowelize(&s);
        let g = |s: String| s.chars().count();

        let chained = Pipeline::from_sequence(values.clone()).map(f).map(g).to_vec();
        let composed = Pipeline::from_sequence(values)
            .map(move |s: String| g(f(s)))
            .to_vec();

        prop_assert_eq!(chained, composed);
    }

    /// Property: devowelize removes exactly the lowercase vowels
    #[test]
    fn prop_devowelize_strips_lowercase_vowels(value in name()) {
        let stripped = devowelize(&value);
        prop_assert!(!stripped.contains(['a', 'e', 'i', 'o', 'u']));

        let kept: String = value
            .chars()
            .filter(|c| !"aeiou".contains(*c))
            .collect();
        prop_assert_eq!(stripped, kept);
    }

    /// Property: every scenario agrees with the plain loop on non-empty input
    #[test]
    fn prop_scenarios_agree(names in vec(name(), 1..8)) {
        let expected = scenarios::find("procedural").unwrap().run(&names).unwrap();
        for scenario in scenarios::all() {
            prop_assert_eq!(scenario.run(&names).unwrap(), expected, "scenario {}", scenario.name);
        }
    }
}
