//! Lazy, chainable pipeline over an immutable backing sequence.
//!
//! A [`Pipeline`] is a value, not a running computation: it holds the
//! backing sequence plus the chain of transforms that have not been applied
//! yet. Nothing is evaluated until a terminal operation ([`Pipeline::fold`],
//! [`Pipeline::reduce`], [`Pipeline::to_vec`] or iteration) consumes the
//! pipeline.
//!
//! # Example
//!
//! ```rust
//! use lambdagame::pipeline::Pipeline;
//!
//! let names = Pipeline::from_sequence(vec!["Michele".to_string(), "Sergio".to_string()]);
//! let lengths = names.map(|name: String| name.len());
//!
//! // `names` is untouched and can be transformed again.
//! let initials = names.map(|name: String| name.chars().next());
//!
//! assert_eq!(lengths.reduce(|a: usize, b: usize| a + b).get().unwrap(), 13);
//! assert_eq!(initials.to_vec(), vec![Some('M'), Some('S')]);
//! ```

use super::function::{BinaryOperator, Function};
use super::optional::Optional;
use im::Vector;
use std::fmt;
use std::rc::Rc;

type Elements<T> = Box<dyn Iterator<Item = T>>;

/// Produces a fresh pass over the pipeline's logical contents.
type Source<T> = Rc<dyn Fn() -> Elements<T>>;

/// A lazily-evaluated sequence of `T`.
///
/// Pipelines share their backing data through `Rc`, so they are neither
/// `Send` nor `Sync` and stay confined to the thread that built them.
pub struct Pipeline<T> {
    source: Source<T>,
    len: usize,
    stages: Vector<String>,
}

impl<T: Clone + 'static> Pipeline<T> {
    /// Wrap a sequence, preserving element order and count.
    ///
    /// An empty sequence is valid and yields an empty pipeline.
    pub fn from_sequence<S>(sequence: S) -> Self
    where
        S: IntoIterator<Item = T>,
    {
        let backing: Vector<T> = sequence.into_iter().collect();
        let len = backing.len();
        log::trace!("Created pipeline over {} elements", len);

        let source: Source<T> =
            Rc::new(move || -> Elements<T> { Box::new(backing.clone().into_iter()) });

        Self {
            source,
            len,
            stages: Vector::new(),
        }
    }
}

impl<T: 'static> Pipeline<T> {
    /// Return a new pipeline whose elements are `mapper` applied to each
    /// element of this one, in order.
    ///
    /// The receiver is not consumed and stays valid. The mapper runs only
    /// when a terminal operation evaluates the returned pipeline, once per
    /// element per evaluation.
    pub fn map<R, F>(&self, mapper: F) -> Pipeline<R>
    where
        R: 'static,
        F: Function<T, R> + 'static,
    {
        let name = Function::<T, R>::name(&mapper).to_string();
        log::trace!("Adding stage '{}' after {} stage(s)", name, self.stages.len());

        let upstream = Rc::clone(&self.source);
        let mapper = Rc::new(mapper);
        let source: Source<R> = Rc::new(move || -> Elements<R> {
            let mapper = Rc::clone(&mapper);
            Box::new(upstream().map(move |element| Function::apply(&*mapper, element)))
        });

        let mut stages = self.stages.clone();
        stages.push_back(name);

        Pipeline {
            source,
            len: self.len,
            stages,
        }
    }

    /// Left fold starting from `identity`, applying `operator(acc, element)`
    /// to every element in order.
    ///
    /// This is the two-argument `reduce(identity, operator)` form; it is
    /// named `fold` because Rust has no overloading and std uses the same
    /// name for the same operation. Returns `identity` unchanged for an
    /// empty pipeline.
    pub fn fold<F>(self, identity: T, operator: F) -> T
    where
        F: BinaryOperator<T>,
    {
        log::debug!(
            "Folding [{}] with '{}'",
            self.describe(),
            BinaryOperator::<T>::name(&operator)
        );
        self.evaluate().fold(identity, |acc, element| {
            BinaryOperator::apply(&operator, acc, element)
        })
    }

    /// Left fold using the first element as the initial accumulator.
    ///
    /// Returns an empty [`Optional`] for an empty pipeline. `operator` is
    /// expected to be associative; this is not validated, and a
    /// non-associative operator yields the strict left-to-right result.
    pub fn reduce<F>(self, operator: F) -> Optional<T>
    where
        F: BinaryOperator<T>,
    {
        log::debug!(
            "Reducing [{}] with '{}'",
            self.describe(),
            BinaryOperator::<T>::name(&operator)
        );
        self.evaluate()
            .reduce(|acc, element| BinaryOperator::apply(&operator, acc, element))
            .into()
    }

    /// Evaluate every stage and collect the elements in order.
    pub fn to_vec(self) -> Vec<T> {
        self.evaluate().collect()
    }

    /// Number of elements; `map` never changes it.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Names of the transforms applied so far, oldest first.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(String::as_str).collect()
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    fn describe(&self) -> String {
        if self.stages.is_empty() {
            "source".to_string()
        } else {
            format!("source -> {}", self.stage_names().join(" -> "))
        }
    }

    fn evaluate(&self) -> Elements<T> {
        (self.source)()
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            len: self.len,
            stages: self.stages.clone(),
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("len", &self.len)
            .field("stages", &self.stages)
            .finish()
    }
}

impl<T: Clone + 'static> FromIterator<T> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T: 'static> IntoIterator for Pipeline<T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.evaluate()
    }
}
