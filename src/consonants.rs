//! The example computation: strip vowels, measure, sum.
//!
//! The same three operations are exposed in every shape the scenarios need:
//! plain functions, named function values, associated "method" functions
//! and function objects implementing the pipeline's functional interfaces.

use crate::pipeline::{BinaryOperator, Function};
use once_cell::sync::Lazy;
use regex::Regex;

/// The names every scenario counts consonants in by default.
pub const DEFAULT_NAMES: [&str; 5] = ["Cristiano", "Michele", "Sergio", "Giuseppe", "Stefano"];

/// Consonants in [`DEFAULT_NAMES`]: Crstn (5), Mchl (4), Srg (3), Gspp (4)
/// and Stfn (4).
pub const EXPECTED_CONSONANTS: usize = 20;

static VOWELS: Lazy<Regex> = Lazy::new(|| Regex::new("[aeiou]").unwrap());

/// [`DEFAULT_NAMES`] as owned strings.
pub fn default_names() -> Vec<String> {
    DEFAULT_NAMES.iter().map(|name| name.to_string()).collect()
}

/// Remove lowercase vowels. Uppercase vowels are kept.
pub fn devowelize(name: &str) -> String {
    VOWELS.replace_all(name, "").into_owned()
}

/// Number of characters in `word`.
pub fn length(word: &str) -> usize {
    word.chars().count()
}

pub fn sum(a: usize, b: usize) -> usize {
    a + b
}

// Named function values.

pub const DEVOWELIZER_MAPPER: fn(String) -> String = |p| devowelize(&p);
pub const LENGTH_MAPPER: fn(String) -> usize = |a| length(&a);
pub const ACCUMULATOR: fn(usize, usize) -> usize = |a, b| sum(a, b);

/// Associated functions equivalent to the named function values, usable as
/// paths (`LambdaMethods::accumulator`) wherever a closure is expected.
pub struct LambdaMethods;

impl LambdaMethods {
    pub fn accumulator(a: usize, b: usize) -> usize {
        sum(a, b)
    }

    pub fn length_mapper(s: String) -> usize {
        s.chars().count()
    }

    pub fn devowelizer_mapper(s: String) -> String {
        VOWELS.replace_all(&s, "").into_owned()
    }
}

/// The same associated functions, implemented by delegating to the named
/// function values.
pub struct MethodsUsingLambdas;

impl MethodsUsingLambdas {
    pub fn accumulator(t: usize, u: usize) -> usize {
        ACCUMULATOR(t, u)
    }

    pub fn length_mapper(s: String) -> usize {
        LENGTH_MAPPER(s)
    }

    pub fn devowelizer_mapper(s: String) -> String {
        DEVOWELIZER_MAPPER(s)
    }
}

/// Function object stripping lowercase vowels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Devowelizer;

impl Function<String, String> for Devowelizer {
    fn apply(&self, input: String) -> String {
        devowelize(&input)
    }

    fn name(&self) -> &str {
        "devowelize"
    }
}

/// Function object measuring a word.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthMapper;

impl Function<String, usize> for LengthMapper {
    fn apply(&self, input: String) -> usize {
        length(&input)
    }

    fn name(&self) -> &str {
        "length"
    }
}

/// Function object adding two counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summation;

impl BinaryOperator<usize> for Summation {
    fn apply(&self, left: usize, right: usize) -> usize {
        sum(left, right)
    }

    fn name(&self) -> &str {
        "sum"
    }
}
