//! Catalog of consonant-counting scenarios.
//!
//! Each scenario computes the same number with a different idiom. The
//! catalog is static data: scenarios are looked up by name and run against
//! whatever list of names the caller supplies.

pub mod hand_rolled;
pub mod native;

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The programming idiom a scenario demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Manual loop with a mutable accumulator
    Procedural,
    /// Standard iterators with closures
    Closures,
    /// Standard iterators with named functions or paths to functions
    FunctionReferences,
    /// Standard iterators with function objects
    FunctionObjects,
    /// The crate's own lazy pipeline
    HandRolledPipeline,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Procedural => "procedural",
            Self::Closures => "closures",
            Self::FunctionReferences => "function references",
            Self::FunctionObjects => "function objects",
            Self::HandRolledPipeline => "hand-rolled pipeline",
        };
        f.write_str(label)
    }
}

/// A named way of counting consonants.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub style: Style,
    count: fn(&[String]) -> Result<usize>,
}

impl Scenario {
    /// Count the consonants in `names`.
    ///
    /// Scenarios that reduce without an identity fail with
    /// [`Error::EmptyOptional`] when `names` is empty.
    pub fn run(&self, names: &[String]) -> Result<usize> {
        log::debug!("Running scenario '{}' over {} names", self.name, names.len());
        (self.count)(names)
    }
}

static SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "procedural",
        description: "for loop with a mutable accumulator",
        style: Style::Procedural,
        count: hand_rolled::procedural,
    },
    Scenario {
        name: "closures",
        description: "iterator map/map/reduce with inline closures",
        style: Style::Closures,
        count: native::closures,
    },
    Scenario {
        name: "typed-closures",
        description: "inline closures with explicit parameter and return types",
        style: Style::Closures,
        count: native::typed_closures,
    },
    Scenario {
        name: "named-functions",
        description: "closures stored in named function values",
        style: Style::FunctionReferences,
        count: native::named_functions,
    },
    Scenario {
        name: "each-step",
        description: "named function values with every stage bound to a local",
        style: Style::FunctionReferences,
        count: native::each_step,
    },
    Scenario {
        name: "method-references",
        description: "paths to associated functions",
        style: Style::FunctionReferences,
        count: native::method_references,
    },
    Scenario {
        name: "methods-using-lambdas",
        description: "associated functions delegating to named function values",
        style: Style::FunctionReferences,
        count: native::methods_using_lambdas,
    },
    Scenario {
        name: "inline-function-objects",
        description: "function objects declared inside the function body",
        style: Style::FunctionObjects,
        count: native::inline_function_objects,
    },
    Scenario {
        name: "function-objects",
        description: "reusable function objects adapted to iterator closures",
        style: Style::FunctionObjects,
        count: native::function_objects,
    },
    Scenario {
        name: "pipeline",
        description: "hand-rolled lazy pipeline with function objects",
        style: Style::HandRolledPipeline,
        count: hand_rolled::pipeline,
    },
    Scenario {
        name: "pipeline-each-step",
        description: "hand-rolled pipeline with every stage bound to a local",
        style: Style::HandRolledPipeline,
        count: hand_rolled::pipeline_each_step,
    },
    Scenario {
        name: "pipeline-fold",
        description: "hand-rolled pipeline folded from an identity of zero",
        style: Style::HandRolledPipeline,
        count: hand_rolled::pipeline_fold,
    },
];

/// Every registered scenario, in presentation order.
pub fn all() -> &'static [Scenario] {
    SCENARIOS
}

/// Names of every registered scenario.
pub fn names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|scenario| scenario.name).collect()
}

/// Look up a scenario by name.
pub fn find(name: &str) -> Result<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|scenario| scenario.name == name)
        .ok_or_else(|| Error::UnknownScenario(name.to_string()))
}

/// Resolve a selection of names; an empty selection means every scenario.
pub fn select<S: AsRef<str>>(selection: &[S]) -> Result<Vec<&'static Scenario>> {
    if selection.is_empty() {
        return Ok(SCENARIOS.iter().collect());
    }
    selection.iter().map(|name| find(name.as_ref())).collect()
}
