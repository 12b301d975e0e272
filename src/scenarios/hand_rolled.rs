//! Scenarios that avoid the standard iterator adapters: a plain loop and
//! the crate's own [`Pipeline`].

use crate::consonants::{devowelize, Devowelizer, LengthMapper, Summation};
use crate::errors::Result;
use crate::pipeline::{Optional, Pipeline};

pub fn procedural(names: &[String]) -> Result<usize> {
    let mut out = 0;
    for name in names {
        let consonants = devowelize(name);
        let length = consonants.chars().count();
        out += length;
    }
    Ok(out)
}

pub fn pipeline(names: &[String]) -> Result<usize> {
    Pipeline::from_sequence(names.to_vec())
        .map(Devowelizer)
        .map(LengthMapper)
        .reduce(Summation)
        .get()
}

pub fn pipeline_each_step(names: &[String]) -> Result<usize> {
    let stream: Pipeline<String> = Pipeline::from_sequence(names.to_vec());
    let devowelized: Pipeline<String> = stream.map(Devowelizer);
    let lengths: Pipeline<usize> = devowelized.map(LengthMapper);
    let reduced: Optional<usize> = lengths.reduce(Summation);
    reduced.get()
}

/// Folding from zero never needs the optional, so empty input counts as 0.
pub fn pipeline_fold(names: &[String]) -> Result<usize> {
    Ok(Pipeline::from_sequence(names.to_vec())
        .map(Devowelizer)
        .map(LengthMapper)
        .fold(0, Summation))
}
