use tracing::trace;

use crate::math::Bijection;

/// Assigns dense indices to names in the order in which they are first seen.
///
/// An [`Interner`] is a bijection between names and the indices `0..len()`. The index of a
/// name is determined by the first call to [`Interner::intern`] with that name, so feeding the
/// same sequence of names into two fresh interners always results in the same assignment.
/// Serializers create a new interner for every document they produce, an interner is never
/// shared between two automata or two output formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interner {
    table: Bijection<String, usize>,
}

impl Interner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `name`, assigning the next free index if `name` has not been seen
    /// before.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.table.get_by_left(name) {
            return idx;
        }
        let idx = self.table.len();
        trace!("interning {name:?} as {idx}");
        self.table.insert(name.to_string(), idx);
        idx
    }

    /// Looks up the index of `name` without assigning one.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.table.get_by_left(name).copied()
    }

    /// Returns the name that was assigned index `idx`.
    pub fn name_of(&self, idx: usize) -> Option<&str> {
        self.table.get_by_right(&idx).map(|s| s.as_str())
    }

    /// The number of distinct names that have been interned.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no name has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterates over all interned names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len()).filter_map(|idx| self.name_of(idx))
    }
}

impl<'a> FromIterator<&'a str> for Interner {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut interner = Interner::new();
        for name in iter {
            interner.intern(name);
        }
        interner
    }
}
