//! An in-memory ordered map backed by a left-leaning red-black tree.
//!
//! Keys carry their own ordering through the [`Key`](key/trait.Key.html) trait, which every `Ord`
//! type implements automatically.
//!
//! # Examples
//!
//! ```
//! use llrb_map::llrb_tree::LlrbMap;
//!
//! let mut map = LlrbMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//!
//! assert_eq!(map.first(), Some((&"a", &1)));
//! assert_eq!(map.remove(&"b"), Some(2));
//! assert_eq!(map.len(), 1);
//! ```

mod entry;
pub mod key;
pub mod llrb_tree;

pub use crate::key::Key;
