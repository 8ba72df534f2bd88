//! Bounded result types.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Deref};

use serde::{Deserialize, Serialize};

/// A list read under a cap.
///
/// `truncated` is set when the cap was reached and the index held more rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capped<T> {
    pub items: Vec<T>,
    pub truncated: bool,
}

impl<T> Capped<T> {
    /// Every matching row.
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            truncated: false,
        }
    }

    /// A prefix of the matching rows.
    pub fn truncated(items: Vec<T>) -> Self {
        Self {
            items,
            truncated: true,
        }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Capped<T> {
    fn default() -> Self {
        Self::complete(Vec::new())
    }
}

impl<T> Deref for Capped<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Capped<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Capped<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A count taken under a cap.
///
/// An inexact count is a lower bound; it displays with a trailing `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub value: u64,
    pub exact: bool,
}

impl Count {
    pub const ZERO: Count = Count {
        value: 0,
        exact: true,
    };

    pub fn exact(value: u64) -> Self {
        Self { value, exact: true }
    }

    pub fn at_least(value: u64) -> Self {
        Self {
            value,
            exact: false,
        }
    }

    /// Count of `counted` rows read with a cap of `cap`, where the read asked
    /// for `cap + 1` rows to detect overflow.
    pub fn from_probe(counted: usize, cap: usize) -> Self {
        if counted > cap {
            Self::at_least(cap as u64)
        } else {
            Self::exact(counted as u64)
        }
    }

    /// Mark the count inexact when `truncated`.
    pub fn or_inexact(self, truncated: bool) -> Self {
        Self {
            value: self.value,
            exact: self.exact && !truncated,
        }
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Count {
    type Output = Count;

    fn add(self, rhs: Count) -> Count {
        Count {
            value: self.value.saturating_add(rhs.value),
            exact: self.exact && rhs.exact,
        }
    }
}

impl Sum for Count {
    fn sum<I: Iterator<Item = Count>>(iter: I) -> Count {
        iter.fold(Count::ZERO, Add::add)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exact {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}+", self.value)
        }
    }
}
