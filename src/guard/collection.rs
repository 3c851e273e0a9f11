//! Guards on the element count of collections.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::engine::Guard;
use super::error::GuardError;
use crate::message::{ItemTemplate, SingleValueComparisonTemplate};

/// Anything that can report how many elements it holds.
pub trait ElementCount {
    fn element_count(&self) -> usize;
}

impl<T> ElementCount for [T] {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> ElementCount for [T; N] {
    fn element_count(&self) -> usize {
        N
    }
}

impl<T> ElementCount for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> ElementCount for VecDeque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> ElementCount for HashMap<K, V, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, S> ElementCount for HashSet<T, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> ElementCount for BTreeMap<K, V> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> ElementCount for BTreeSet<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<C: ElementCount + ?Sized> ElementCount for &C {
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

impl<C: ElementCount + ?Sized> ElementCount for &mut C {
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

pub trait CollectionGuards: ElementCount + Sized {
    /// Requires at least one element.
    fn guard_has_elements(self, item: &str) -> Result<Self, GuardError> {
        self.guard_has_elements_with_message(|| ItemTemplate::NO_ELEMENTS.using_item(item).prepare())
    }

    fn guard_has_elements_with_message(
        self,
        message: impl FnOnce() -> String,
    ) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|collection| collection.element_count() > 0)
            .error_builder(|_| GuardError::invalid_operation(message()))
            .validate_and_return()
    }

    /// Requires at least `min` elements.
    fn guard_has_at_least(self, min: usize, item: &str) -> Result<Self, GuardError> {
        self.guard_has_at_least_with_message(min, |count| {
            SingleValueComparisonTemplate::TOO_FEW_ELEMENTS
                .using_item(item)
                .using_value(count)
                .compared_to(min)
                .prepare()
        })
    }

    /// The message builder receives the actual element count.
    fn guard_has_at_least_with_message(
        self,
        min: usize,
        message: impl FnOnce(usize) -> String,
    ) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|collection| collection.element_count() >= min)
            .error_builder(|collection| {
                GuardError::invalid_operation(message(collection.element_count()))
            })
            .validate_and_return()
    }
}

impl<C: ElementCount> CollectionGuards for C {}
