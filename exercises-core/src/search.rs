//! First-match search helpers

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Apply `consumer` to the first item satisfying `predicate`
///
/// Returns `None` when no item matches; `consumer` is called at most once.
pub fn first_then_apply<T, U, P, F>(items: &[T], mut predicate: P, consumer: F) -> Option<U>
where
    P: FnMut(&T) -> bool,
    F: FnOnce(&T) -> U,
{
    items.iter().find(|item| predicate(item)).map(consumer)
}

/// Lowercase the first string satisfying `predicate`
#[cfg(feature = "alloc")]
pub fn first_then_lower_case<S, P>(strings: &[S], mut predicate: P) -> Option<String>
where
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    first_then_apply(strings, |s| predicate(s.as_ref()), |s| s.as_ref().to_lowercase())
}
