//! Chainable word accumulator
//!
//! ```
//! use exercises_core::say;
//!
//! assert_eq!(say("hi").and("there").phrase(), "hi there");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// Ordered collection of words joined into a phrase on demand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Say {
    words: Vec<String>,
}

impl Say {
    /// Create an accumulator with no words
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Append a word
    #[must_use]
    pub fn and(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    /// Words collected so far
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words joined by single spaces
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

impl<S: Into<String>> Extend<S> for Say {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for Say {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut say = Self::new();
        say.extend(iter);
        say
    }
}

/// Start a chain with its first word
pub fn say(word: impl Into<String>) -> Say {
    Say::new().and(word)
}
