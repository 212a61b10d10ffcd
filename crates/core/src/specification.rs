//! Specification pattern: composable boolean predicates over a candidate.
//!
//! Leaf specifications test one rule; [`AndSpecification`], [`OrSpecification`] and
//! [`NotSpecification`] combine them into trees. Combining always wraps existing
//! specifications in a new parent node (operands are moved, never mutated), so a tree
//! is acyclic by construction.
//!
//! Composite nodes evaluate strictly left to right and short-circuit: AND stops at the
//! first unsatisfied child, OR at the first satisfied one. Expensive or side-effecting
//! predicates can therefore be ordered deliberately.

use core::ops::{BitAnd, BitOr, Not};

/// A business rule evaluated against a candidate.
pub trait Specification<T: ?Sized> {
    /// Returns `true` when `candidate` satisfies the rule.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Both `self` and `other` must hold; `other` is only evaluated if `self` holds.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }

    /// Either `self` or `other` must hold; `other` is only evaluated if `self` does not.
    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpecification::new(self, other)
    }

    /// Negation of `self`.
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification::new(self)
    }

    /// Candidates satisfying the rule, in input order.
    fn filter<'a, I>(&self, candidates: I) -> Vec<&'a T>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.is_satisfied_by(candidate))
            .collect()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

/// Leaf specification backed by a closure.
#[derive(Clone, Copy)]
pub struct Predicate<F> {
    rule: F,
}

impl<F> core::fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Predicate")
    }
}

/// Build a leaf specification from a closure.
pub fn predicate<T, F>(rule: F) -> Predicate<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Predicate { rule }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for Predicate<F> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.rule)(candidate)
    }
}

/// Logical AND of two specifications.
#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T>
    for AndSpecification<A, B>
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.first.is_satisfied_by(candidate) && self.second.is_satisfied_by(candidate)
    }
}

/// Logical OR of two specifications.
#[derive(Debug, Clone, Copy)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T>
    for OrSpecification<A, B>
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.first.is_satisfied_by(candidate) || self.second.is_satisfied_by(candidate)
    }
}

/// Logical NOT of a specification.
#[derive(Debug, Clone, Copy)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for NotSpecification<S> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

// `&`, `|` and `!` sugar for the specification types defined here.
macro_rules! impl_spec_operators {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param,)+ Rhs> BitAnd<Rhs> for $name<$($param),+> {
            type Output = AndSpecification<Self, Rhs>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                AndSpecification::new(self, rhs)
            }
        }

        impl<$($param,)+ Rhs> BitOr<Rhs> for $name<$($param),+> {
            type Output = OrSpecification<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                OrSpecification::new(self, rhs)
            }
        }

        impl<$($param),+> Not for $name<$($param),+> {
            type Output = NotSpecification<Self>;

            fn not(self) -> Self::Output {
                NotSpecification::new(self)
            }
        }
    };
}

impl_spec_operators!(Predicate<F>);
impl_spec_operators!(AndSpecification<A, B>);
impl_spec_operators!(OrSpecification<A, B>);
impl_spec_operators!(NotSpecification<S>);
