use crate::key::Key;
use crate::llrb_tree::tree;
use crate::llrb_tree::Result;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a left-leaning red black tree.
///
/// A left-leaning red black tree is a binary search tree that encodes a 2-3 tree by coloring the
/// link from each node to its parent. Red links bind two keys into one 3-node and always lean
/// left. Every path from the root to an empty child crosses the same number of black links, which
/// bounds the height of the tree to `O(log n)`.
///
/// The map is not synchronized. Callers that share it between threads must wrap it in a lock.
///
/// # Examples
///
/// ```
/// use llrb_map::llrb_tree::LlrbMap;
///
/// let mut map = LlrbMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.last(), Some((&3, &4)));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some(2));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct LlrbMap<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> LlrbMap<T, U> {
    /// Constructs a new, empty `LlrbMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let map: LlrbMap<u32, u32> = LlrbMap::new();
    /// ```
    pub fn new() -> Self {
        LlrbMap { tree: None }
    }

    pub(super) fn root(&self) -> &tree::Tree<T, U> {
        &self.tree
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the value is
    /// replaced and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Key,
    {
        let ret = tree::insert(&mut self.tree, key, value);
        tree::blacken_root(&mut self.tree);
        ret
    }

    /// Removes a key from the map. If the key exists in the map, it will return the associated
    /// value. Otherwise it will return `None` and leave the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some(1));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<U>
    where
        T: Borrow<V>,
        V: Key + ?Sized,
    {
        if !self.contains_key(key) {
            return None;
        }

        tree::fix_root(&mut self.tree);
        let entry = tree::remove(&mut self.tree, key);
        tree::blacken_root(&mut self.tree);
        Some(entry.value)
    }

    /// Removes the entry with the smallest key from the map and returns it. Returns `None` if the
    /// map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(2, 20);
    /// map.insert(1, 10);
    /// assert_eq!(map.remove_min(), Some((1, 10)));
    /// assert_eq!(map.remove_min(), Some((2, 20)));
    /// assert_eq!(map.remove_min(), None);
    /// ```
    pub fn remove_min(&mut self) -> Option<(T, U)> {
        if self.tree.is_none() {
            return None;
        }

        tree::fix_root(&mut self.tree);
        let entry = tree::remove_min(&mut self.tree);
        tree::blacken_root(&mut self.tree);
        Some(entry.into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Key + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(String::from("a"), 1);
    /// assert_eq!(map.get("b"), None);
    /// assert_eq!(map.get("a"), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Key + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Key + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map. No count is cached, so this walks the whole
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let map: LlrbMap<u32, u32> = LlrbMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the key-value pair with the smallest key. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    pub fn first(&self) -> Option<(&T, &U)> {
        tree::min(&self.tree).map(|entry| entry.as_pair())
    }

    /// Returns the key-value pair with the largest key. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// assert_eq!(map.last(), Some((&3, &"c")));
    /// ```
    pub fn last(&self) -> Option<(&T, &U)> {
        tree::max(&self.tree).map(|entry| entry.as_pair())
    }

    /// Copies every key-value pair of `other` into the map. Keys that already exist in the map
    /// have their values replaced. The two maps share no nodes afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut source = LlrbMap::new();
    /// source.insert(1, 10);
    /// source.insert(2, 20);
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(2, 0);
    /// map.insert(3, 30);
    /// map.insert_all(&source);
    ///
    /// assert_eq!(map.get(&1), Some(&10));
    /// assert_eq!(map.get(&2), Some(&20));
    /// assert_eq!(map.get(&3), Some(&30));
    /// assert_eq!(source.len(), 2);
    /// ```
    pub fn insert_all(&mut self, other: &LlrbMap<T, U>)
    where
        T: Key + Clone,
        U: Clone,
    {
        tree::for_each(&other.tree, &mut |key: &T, value: &U| {
            self.insert(key.clone(), value.clone());
        });
    }

    /// Checks that the tree is a valid left-leaning red black tree and returns its black height.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// for key in 0..7 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.validate(), Ok(3));
    /// ```
    pub fn validate(&self) -> Result<usize>
    where
        T: Key,
    {
        tree::validate(&self.tree)
    }
}

impl<T, U> Default for LlrbMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for LlrbMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug_map = f.debug_map();
        tree::for_each(&self.tree, &mut |key: &T, value: &U| {
            debug_map.entry(key, value);
        });
        debug_map.finish()
    }
}

impl<T, U> Extend<(T, U)> for LlrbMap<T, U>
where
    T: Key,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> FromIterator<(T, U)> for LlrbMap<T, U>
where
    T: Key,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = LlrbMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, T, U, V> Index<&'a V> for LlrbMap<T, U>
where
    T: Borrow<V>,
    V: Key + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for LlrbMap<T, U>
where
    T: Borrow<V>,
    V: Key + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
