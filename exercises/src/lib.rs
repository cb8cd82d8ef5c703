//! Exercises - Small standalone programming exercises
//!
//! The pure exercises live in `exercises-core` and are re-exported here;
//! this crate adds the parts that touch the file system.
//!
//! ## Architecture
//!
//! - **exercises-core**: value types and pure functions (no I/O, `no_std`)
//! - **exercises**: file-backed exercises, logging and the command line tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exercises::{change, meaningful_line_count, powers, Quaternion};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let coins = change(41)?;
//!     assert_eq!(coins.get(25), Some(1));
//!
//!     let q = Quaternion::new(1.0, 2.0, 0.0, -1.0);
//!     println!("{q} * {q} = {}", q * q);
//!
//!     let small: Vec<i64> = powers(2, 10).collect();
//!     assert_eq!(small, vec![1, 2, 4, 8]);
//!
//!     let lines = meaningful_line_count("notes.txt")?;
//!     println!("{lines} meaningful lines");
//!     Ok(())
//! }
//! ```

// Re-export the pure exercises
pub use exercises_core::{
    // Core value types
    Quaternion, PowerSequence, powers,
    // Collaborator exercises
    change, CoinBreakdown, DENOMINATIONS,
    first_then_apply, first_then_lower_case,
    say, Say, BinarySearchTree, Stack,
    // Error handling
    ExerciseError, ErrorCategory,
};

pub mod config;
pub mod error;
pub mod line_count;

pub use config::LineCountConfig;
pub use error::LineCountError;
#[cfg(feature = "mmap")]
pub use line_count::meaningful_line_count_mmap;
pub use line_count::{count_meaningful_lines, meaningful_line_count, meaningful_line_count_with_config};
