//! Functional interfaces accepted by the pipeline.
//!
//! [`Function`] and [`BinaryOperator`] are the two shapes of computation the
//! pipeline understands: an element transform and a same-typed combiner.
//! Both are implemented for every matching closure or function pointer, so
//! callers can pass plain closures, named `fn` items, or hand-written
//! function objects interchangeably.
//!
//! # Closures and type inference
//!
//! Closure parameter types are not inferred through these traits, so inline
//! closures need annotated parameters:
//!
//! ```rust
//! use lambdagame::pipeline::Pipeline;
//!
//! let total = Pipeline::from_sequence(vec![1, 2, 3])
//!     .map(|x: i32| x * 2)
//!     .fold(0, |a: i32, b: i32| a + b);
//! assert_eq!(total, 12);
//! ```

/// An element transform from `I` to `O`.
///
/// The pipeline assumes a transform is total over every element it is
/// applied to. A transform that cannot produce a value should panic; the
/// pipeline does not catch or reinterpret the failure.
pub trait Function<I, O> {
    /// Applies this function to the given argument.
    fn apply(&self, input: I) -> O;

    /// Name used when logging the pipeline stage built from this function.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<I, O, F> Function<I, O> for F
where
    F: Fn(I) -> O,
{
    fn apply(&self, input: I) -> O {
        self(input)
    }
}

/// Combines two values of the same type into one.
///
/// Reductions expect the operator to be associative. This is not checked:
/// a non-associative operator still produces a deterministic left fold, but
/// the result depends on element order.
pub trait BinaryOperator<T> {
    /// Applies this operator to an accumulator and the next element.
    fn apply(&self, left: T, right: T) -> T;

    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<T, F> BinaryOperator<T> for F
where
    F: Fn(T, T) -> T,
{
    fn apply(&self, left: T, right: T) -> T {
        self(left, right)
    }
}

/// A function value carrying a display name.
///
/// Wrapping a closure in `Named` is how a caller gives an otherwise
/// anonymous pipeline stage a meaningful label.
///
/// # Example
///
/// ```rust
/// use lambdagame::pipeline::{Function, Named, Pipeline};
///
/// let double = Named::new("double", |x: i32| x * 2);
/// assert_eq!(Function::<i32, i32>::name(&double), "double");
///
/// let pipeline = Pipeline::from_sequence(vec![1, 2]).map(double);
/// assert_eq!(pipeline.stage_names(), vec!["double"]);
/// ```
#[derive(Debug, Clone)]
pub struct Named<F> {
    name: String,
    func: F,
}

impl<F> Named<F> {
    /// Create a new named function value.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    /// Unwrap the underlying function value.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<I, O, F> Function<I, O> for Named<F>
where
    F: Function<I, O>,
{
    fn apply(&self, input: I) -> O {
        Function::apply(&self.func, input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<T, F> BinaryOperator<T> for Named<F>
where
    F: BinaryOperator<T>,
{
    fn apply(&self, left: T, right: T) -> T {
        BinaryOperator::apply(&self.func, left, right)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Adapt a [`Function`] into a closure usable with `Iterator::map`.
pub fn lift<I, O, F>(function: F) -> impl Fn(I) -> O
where
    F: Function<I, O>,
{
    move |input| Function::apply(&function, input)
}

/// Adapt a [`BinaryOperator`] into a closure usable with `Iterator::reduce`.
pub fn lift_operator<T, F>(operator: F) -> impl Fn(T, T) -> T
where
    F: BinaryOperator<T>,
{
    move |left, right| BinaryOperator::apply(&operator, left, right)
}
