use std::cmp::Ordering;

/// Comparison helpers over a three-way `partial_cmp`.
///
/// Values that do not compare (NaN against anything) are neither less than,
/// equal to, nor greater than the other value.
pub trait OrderingExt: PartialOrd {
    fn less_than(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less))
    }

    fn less_than_or_equal(&self, other: &Self) -> bool {
        matches!(
            self.partial_cmp(other),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    fn equal_to(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Equal))
    }

    fn greater_than_or_equal(&self, other: &Self) -> bool {
        matches!(
            self.partial_cmp(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    fn greater_than(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Greater))
    }
}

impl<T: PartialOrd + ?Sized> OrderingExt for T {}
