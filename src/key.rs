//! The comparison capability required of keys stored in an `LlrbMap`.

use std::cmp::Ordering;

/// A key that can be ordered against another key of the same type.
///
/// `compare_to` must describe a strict total order:
///
/// - `a.compare_to(b)` is the reverse of `b.compare_to(a)`.
/// - If `a > b` and `b > c` then `a > c`.
/// - If `a == b` then `a` and `b` compare the same way against every other key.
///
/// The tree trusts this contract. A key that violates it produces wrong lookups or an unbalanced
/// tree, never undefined behavior.
///
/// Every `Ord` type is a `Key` through a blanket implementation. Types without `Ord` implement the
/// trait directly.
///
/// # Examples
///
/// ```
/// use llrb_map::Key;
/// use llrb_map::llrb_tree::LlrbMap;
/// use std::cmp::Ordering;
///
/// struct Reversed(u32);
///
/// impl Key for Reversed {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         other.0.cmp(&self.0)
///     }
/// }
///
/// let mut map = LlrbMap::new();
/// map.insert(Reversed(1), "one");
/// map.insert(Reversed(2), "two");
/// assert_eq!(map.min().map(|key| key.0), Some(2));
/// ```
pub trait Key {
    /// Returns `Less`, `Equal` or `Greater` as `self` is less than, equal to or greater than
    /// `other`.
    fn compare_to(&self, other: &Self) -> Ordering;
}

impl<T> Key for T
where
    T: Ord + ?Sized,
{
    fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
