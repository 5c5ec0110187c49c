//! The growable contiguous sequence container.
//!
//! [`GrowVec`] keeps length, capacity, and the owned backing store behind
//! one handle. Capacity is managed by an explicit policy rather than left
//! to the standard library: on overflow the store doubles, corrected up
//! to the exact requirement when doubling falls short, with a floor of
//! [`GrowVec::MIN_CAPACITY`] to avoid repeated tiny reallocations for
//! short sequences.

use std::ops::{Deref, DerefMut};

use crate::error::GrowVecError;

/// A growable, contiguous sequence of `T` with amortized O(1) append.
///
/// Two logical states: *empty* (capacity 0, no backing allocation) and
/// *allocated* (capacity > 0). A fresh container is empty; [`push`] moves
/// it to allocated, growing the store as needed; [`release`] returns it
/// to empty. Slots past the current length are never observable — all
/// reads go through bounds-checked slice views of the live prefix.
///
/// Growth is fallible: [`push`] and [`reserve`] return
/// [`GrowVecError::OutOfMemory`] when the allocator refuses the new
/// store, leaving the container exactly as it was.
///
/// [`push`]: GrowVec::push
/// [`reserve`]: GrowVec::reserve
/// [`release`]: GrowVec::release
#[derive(Debug)]
pub struct GrowVec<T> {
    /// Backing storage. Capacity is driven exclusively by `grow`, so the
    /// observable capacity follows the documented policy exactly.
    data: Vec<T>,
}

impl<T> GrowVec<T> {
    /// Smallest capacity the store grows to from empty.
    pub const MIN_CAPACITY: usize = 4;

    /// Create an empty container. Does not allocate.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of element slots in the backing store. Zero means no
    /// backing allocation exists.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Append `value` at the back.
    ///
    /// Writes in place when a slot is free; otherwise grows the store
    /// first (the one point where the store's address may change, which
    /// is why this takes `&mut self` and invalidates prior borrows).
    ///
    /// # Errors
    ///
    /// [`GrowVecError::OutOfMemory`] if the grown store cannot be
    /// allocated. The container is unchanged on error.
    pub fn push(&mut self, value: T) -> Result<(), GrowVecError> {
        self.grow(1)?;
        // Capacity was secured above, so this never reallocates.
        self.data.push(value);
        Ok(())
    }

    /// Ensure capacity for at least `additional` more elements.
    ///
    /// Applies the same policy as [`push`]: double the current capacity,
    /// or jump straight to `len + additional` when doubling falls short.
    /// A no-op when the current capacity already suffices.
    ///
    /// # Errors
    ///
    /// [`GrowVecError::OutOfMemory`] if the grown store cannot be
    /// allocated. The container is unchanged on error.
    ///
    /// [`push`]: GrowVec::push
    pub fn reserve(&mut self, additional: usize) -> Result<(), GrowVecError> {
        self.grow(additional)
    }

    /// Drop all elements, keeping the backing store for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Drop all elements and deallocate the backing store, returning the
    /// container to the empty state.
    ///
    /// Idempotent: releasing an empty container is a no-op. A released
    /// container regrows from scratch exactly like a fresh one.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }

    /// View the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Grow the store so that `len + additional` elements fit.
    ///
    /// Policy: new capacity is double the current one unless that still
    /// falls short of the requirement, in which case the requirement
    /// itself, with a floor of [`Self::MIN_CAPACITY`]. Doubling uses
    /// checked arithmetic; on overflow it falls back to the exact
    /// requirement rather than wrapping.
    fn grow(&mut self, additional: usize) -> Result<(), GrowVecError> {
        let needed = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(GrowVecError::OutOfMemory {
                requested: usize::MAX,
            })?;
        if needed <= self.data.capacity() {
            return Ok(());
        }
        let mut new_cap = match self.data.capacity().checked_mul(2) {
            Some(doubled) if doubled >= needed => doubled,
            _ => needed,
        };
        if new_cap < Self::MIN_CAPACITY {
            new_cap = Self::MIN_CAPACITY;
        }
        // Exact reservation keeps the observable capacity on the policy
        // staircase instead of whatever Vec would pick on its own.
        self.data
            .try_reserve_exact(new_cap - self.data.len())
            .map_err(|_| GrowVecError::OutOfMemory { requested: new_cap })
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
