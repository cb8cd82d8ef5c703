//! Bounded last-in first-out stack
//!
//! Items are owned by the stack. A stack is neither `Clone` nor `Copy`, so
//! handing it to another binding moves it. Pushing past the maximum capacity
//! fails instead of growing without bound.

use alloc::vec::Vec;

use crate::error::{ExerciseError, Result};

/// Maximum number of items a [`Stack::new`] stack accepts
pub const MAX_CAPACITY: usize = 32768;

/// Items preallocated by [`Stack::new`]
const INITIAL_CAPACITY: usize = 16;

/// Generic stack with a fixed upper bound on its length
#[derive(Debug, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
    max_capacity: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack bounded by [`MAX_CAPACITY`]
    pub fn new() -> Self {
        Self::with_max_capacity(MAX_CAPACITY)
    }

    /// Create an empty stack that holds at most `max_capacity` items
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY.min(max_capacity)),
            max_capacity,
        }
    }

    /// Push `item` on top of the stack
    ///
    /// Fails with [`ExerciseError::StackFull`] when the stack already holds
    /// its maximum number of items; the item is dropped in that case.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(ExerciseError::StackFull {
                max_capacity: self.max_capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item, left in place
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another push would fail
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_capacity
    }

    /// Get the maximum number of items
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
