//! Scenarios built on the standard library's iterators.

use crate::consonants::{
    devowelize, length, Devowelizer, LambdaMethods, LengthMapper, MethodsUsingLambdas,
    Summation, ACCUMULATOR, DEVOWELIZER_MAPPER, LENGTH_MAPPER,
};
use crate::errors::{Error, Result};
use crate::pipeline::{lift, lift_operator, BinaryOperator, Function};

pub fn closures(names: &[String]) -> Result<usize> {
    names
        .iter()
        .map(|p| devowelize(p)) // strip lowercase vowels from each name
        .map(|a| a.chars().count()) // count what is left
        .reduce(|a, b| a + b) // sum the counts
        .ok_or(Error::EmptyOptional)
}

pub fn typed_closures(names: &[String]) -> Result<usize> {
    names
        .iter()
        .map(|p: &String| -> String { devowelize(p) })
        .map(|a: String| -> usize { a.chars().count() })
        .reduce(|a: usize, b: usize| -> usize { a + b })
        .ok_or(Error::EmptyOptional)
}

pub fn named_functions(names: &[String]) -> Result<usize> {
    names
        .iter()
        .cloned()
        .map(DEVOWELIZER_MAPPER)
        .map(LENGTH_MAPPER)
        .reduce(ACCUMULATOR)
        .ok_or(Error::EmptyOptional)
}

pub fn each_step(names: &[String]) -> Result<usize> {
    let stream = names.iter().cloned();
    let devowelized = stream.map(DEVOWELIZER_MAPPER);
    let lengths = devowelized.map(LENGTH_MAPPER);
    let reduced: Option<usize> = lengths.reduce(ACCUMULATOR);
    reduced.ok_or(Error::EmptyOptional)
}

pub fn method_references(names: &[String]) -> Result<usize> {
    names
        .iter()
        .cloned()
        .map(LambdaMethods::devowelizer_mapper)
        .map(LambdaMethods::length_mapper)
        .reduce(LambdaMethods::accumulator)
        .ok_or(Error::EmptyOptional)
}

pub fn methods_using_lambdas(names: &[String]) -> Result<usize> {
    names
        .iter()
        .cloned()
        .map(MethodsUsingLambdas::devowelizer_mapper)
        .map(MethodsUsingLambdas::length_mapper)
        .reduce(MethodsUsingLambdas::accumulator)
        .ok_or(Error::EmptyOptional)
}

/// Function objects declared where they are used, then adapted into
/// closures for the iterator adapters.
pub fn inline_function_objects(names: &[String]) -> Result<usize> {
    struct StripVowels;

    impl Function<String, String> for StripVowels {
        fn apply(&self, p: String) -> String {
            devowelize(&p)
        }
    }

    struct Measure;

    impl Function<String, usize> for Measure {
        fn apply(&self, a: String) -> usize {
            length(&a)
        }
    }

    struct Add;

    impl BinaryOperator<usize> for Add {
        fn apply(&self, a: usize, b: usize) -> usize {
            a + b
        }
    }

    names
        .iter()
        .cloned()
        .map(lift(StripVowels))
        .map(lift(Measure))
        .reduce(lift_operator(Add))
        .ok_or(Error::EmptyOptional)
}

pub fn function_objects(names: &[String]) -> Result<usize> {
    names
        .iter()
        .cloned()
        .map(lift(Devowelizer))
        .map(lift(LengthMapper))
        .reduce(lift_operator(Summation))
        .ok_or(Error::EmptyOptional)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Count = fn(&[String]) -> Result<usize>;

    const ALL: [(&str, Count); 8] = [
        ("closures", closures),
        ("typed_closures", typed_closures),
        ("named_functions", named_functions),
        ("each_step", each_step),
        ("method_references", method_references),
        ("methods_using_lambdas", methods_using_lambdas),
        ("inline_function_objects", inline_function_objects),
        ("function_objects", function_objects),
    ];

    #[test]
    fn test_single_name() {
        let names = vec!["Giuseppe".to_string()];
        for (label, count) in ALL {
            assert_eq!(count(&names).unwrap(), 4, "{label}");
        }
    }

    #[test]
    fn test_empty_names_fail_on_get() {
        for (label, count) in ALL {
            assert!(
                matches!(count(&[]), Err(Error::EmptyOptional)),
                "{label} should fail on empty input"
            );
        }
    }

    #[test]
    fn test_uppercase_vowels_are_consonants_here() {
        let names = vec!["Anna".to_string(), "Ugo".to_string()];
        for (label, count) in ALL {
            // "Ann" + "Ug"
            assert_eq!(count(&names).unwrap(), 5, "{label}");
        }
    }
}
