#![cfg_attr(not(test), no_std)]

//! Exercises Core - Pure value types and functions
//!
//! This crate holds the exercises that need no I/O: the quaternion value
//! type, the lazy power sequence, greedy coin change and the search helpers.
//! With the `alloc` feature it also provides the word accumulator, the
//! bounded stack and the persistent string tree.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod change;
pub mod error;
pub mod powers;
pub mod quaternion;
pub mod search;

#[cfg(feature = "alloc")]
pub mod say;
#[cfg(feature = "alloc")]
pub mod stack;
#[cfg(feature = "alloc")]
pub mod tree;

pub use change::{change, CoinBreakdown, DENOMINATIONS};
pub use error::*;
pub use powers::{powers, PowerSequence};
pub use quaternion::Quaternion;
pub use search::first_then_apply;

#[cfg(feature = "alloc")]
pub use say::{say, Say};
#[cfg(feature = "alloc")]
pub use search::first_then_lower_case;
#[cfg(feature = "alloc")]
pub use stack::Stack;
#[cfg(feature = "alloc")]
pub use tree::BinarySearchTree;
