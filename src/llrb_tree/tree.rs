use crate::entry::Entry;
use crate::key::Key;
use crate::llrb_tree::node::{Color, Node};
use crate::llrb_tree::{Error, Result};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

fn should_move_red<T, U>(child: &Tree<T, U>) -> bool {
    match child {
        Some(ref node) => node.color != Color::Red && !is_red(&node.left),
        None => true,
    }
}

/// Colors the root red if both of its children are black so that the first `move_red_left` or
/// `move_red_right` of a deletion has a red link to push down.
pub fn fix_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Key,
{
    let ret = match tree {
        Some(ref mut node) => {
            match key.compare_to(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, key, value),
                Ordering::Greater => insert(&mut node.right, key, value),
                Ordering::Equal => Some(mem::replace(&mut node.entry.value, value)),
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        node.fix_up();
    }

    ret
}

// precondition: the tree is not empty
pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Entry<T, U> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            if should_move_red(&node.left) {
                node.move_red_left();
            }

            let ret = remove_min(&mut node.left);
            node.fix_up();
            return ret;
        }
    }

    let node = tree.take().expect("Expected a non-empty tree.");
    let Node { entry, right, .. } = *node;
    debug_assert!(right.is_none());
    *tree = right;
    entry
}

// precondition: the key exists in the tree
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Entry<T, U>
where
    T: Borrow<V>,
    V: Key + ?Sized,
{
    let mut node = tree.take().expect("Expected the key to exist in the tree.");

    let ret = if key.compare_to(node.entry.key.borrow()) == Ordering::Less {
        if should_move_red(&node.left) {
            node.move_red_left();
        }
        remove(&mut node.left, key)
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key.compare_to(node.entry.key.borrow()) == Ordering::Equal && node.right.is_none() {
            debug_assert!(node.left.is_none());
            return node.entry;
        }

        if should_move_red(&node.right) {
            node.move_red_right();
        }

        if key.compare_to(node.entry.key.borrow()) == Ordering::Equal {
            let successor = remove_min(&mut node.right);
            mem::replace(&mut node.entry, successor)
        } else {
            remove(&mut node.right, key)
        }
    };

    node.fix_up();
    *tree = Some(node);
    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Key + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.compare_to(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Key + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.compare_to(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn size<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        Some(ref node) => size(&node.left) + size(&node.right) + 1,
        None => 0,
    }
}

/// Visits every entry in key order.
pub fn for_each<T, U, F>(tree: &Tree<T, U>, f: &mut F)
where
    F: FnMut(&T, &U),
{
    if let Some(ref node) = tree {
        for_each(&node.left, f);
        f(&node.entry.key, &node.entry.value);
        for_each(&node.right, f);
    }
}

/// Checks every structural invariant of the tree and returns its black height.
pub fn validate<T, U>(tree: &Tree<T, U>) -> Result<usize>
where
    T: Key,
{
    if is_red(tree) {
        return Err(Error::RedRoot);
    }
    validate_node(tree, None, None)
}

fn validate_node<T, U>(tree: &Tree<T, U>, lower: Option<&T>, upper: Option<&T>) -> Result<usize>
where
    T: Key,
{
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let key = &node.entry.key;
    let above_lower = lower.map_or(true, |lower| key.compare_to(lower) == Ordering::Greater);
    let below_upper = upper.map_or(true, |upper| key.compare_to(upper) == Ordering::Less);
    if !above_lower || !below_upper {
        return Err(Error::OutOfOrder);
    }

    if is_red(&node.right) {
        return Err(Error::RightLeaningRed);
    }
    if node.is_red() && is_red(&node.left) {
        return Err(Error::ConsecutiveReds);
    }

    let left = validate_node(&node.left, lower, Some(key))?;
    let right = validate_node(&node.right, Some(key), upper)?;
    if left != right {
        return Err(Error::UnbalancedBlacks { left, right });
    }

    match node.color {
        Color::Red => Ok(left),
        Color::Black => Ok(left + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[u32]) -> Tree<u32, u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key, *key * 10);
            blacken_root(&mut tree);
        }
        tree
    }

    fn delete(tree: &mut Tree<u32, u32>, key: u32) -> Entry<u32, u32> {
        fix_root(tree);
        let ret = remove(tree, &key);
        blacken_root(tree);
        ret
    }

    #[test]
    fn test_is_red_empty() {
        let tree: Tree<u32, u32> = None;
        assert!(!is_red(&tree));
    }

    #[test]
    fn test_insert_ascending_is_balanced() {
        let keys: Vec<u32> = (0..1024).collect();
        let tree = build(&keys);
        assert_eq!(size(&tree), 1024);
        let height = validate(&tree).unwrap();
        assert!(height <= 11);
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut tree = build(&[1, 2, 3]);
        assert_eq!(insert(&mut tree, 2, 7), Some(20));
        assert_eq!(get(&tree, &2).map(|entry| entry.value), Some(7));
        assert_eq!(size(&tree), 3);
    }

    #[test]
    fn test_remove_leaf_and_internal() {
        let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(delete(&mut tree, 1).into_pair(), (1, 10));
        validate(&tree).unwrap();

        assert_eq!(delete(&mut tree, 5).into_pair(), (5, 50));
        validate(&tree).unwrap();

        assert!(get(&tree, &5).is_none());
        assert_eq!(size(&tree), 5);
    }

    #[test]
    fn test_remove_min_drains_in_order() {
        let mut tree = build(&[6, 2, 9, 4, 1, 8]);
        let mut drained = Vec::new();
        while tree.is_some() {
            fix_root(&mut tree);
            drained.push(remove_min(&mut tree).key);
            blacken_root(&mut tree);
            validate(&tree).unwrap();
        }
        assert_eq!(drained, vec![1, 2, 4, 6, 8, 9]);
    }

    #[test]
    fn test_remove_all_descending() {
        let keys: Vec<u32> = (0..200).collect();
        let mut tree = build(&keys);
        for key in keys.iter().rev() {
            assert_eq!(delete(&mut tree, *key).key, *key);
            validate(&tree).unwrap();
        }
        assert!(tree.is_none());
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[4, 2, 6]);
        assert_eq!(min(&tree).map(|entry| entry.key), Some(2));
        assert_eq!(max(&tree).map(|entry| entry.key), Some(6));

        let empty: Tree<u32, u32> = None;
        assert!(min(&empty).is_none());
        assert!(max(&empty).is_none());
    }

    #[test]
    fn test_for_each_in_order() {
        let tree = build(&[3, 1, 2]);
        let mut keys = Vec::new();
        for_each(&tree, &mut |key: &u32, _: &u32| keys.push(*key));
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_validate_red_root() {
        let tree: Tree<u32, u32> = Some(Box::new(Node::new(1, 1)));
        assert_eq!(validate(&tree), Err(Error::RedRoot));
    }

    #[test]
    fn test_validate_right_leaning_red() {
        let mut root = Node::new(1, 1);
        root.color = Color::Black;
        root.right = Some(Box::new(Node::new(2, 2)));
        let tree = Some(Box::new(root));
        assert_eq!(validate(&tree), Err(Error::RightLeaningRed));
    }

    #[test]
    fn test_validate_consecutive_reds() {
        let mut child = Node::new(2, 2);
        child.left = Some(Box::new(Node::new(1, 1)));
        let mut root = Node::new(3, 3);
        root.color = Color::Black;
        root.left = Some(Box::new(child));
        let tree = Some(Box::new(root));
        assert_eq!(validate(&tree), Err(Error::ConsecutiveReds));
    }

    #[test]
    fn test_validate_unbalanced_blacks() {
        let mut child = Node::new(1, 1);
        child.color = Color::Black;
        let mut root = Node::new(2, 2);
        root.color = Color::Black;
        root.left = Some(Box::new(child));
        let tree = Some(Box::new(root));
        assert_eq!(validate(&tree), Err(Error::UnbalancedBlacks { left: 1, right: 0 }));
    }

    #[test]
    fn test_validate_out_of_order() {
        let mut child = Node::new(5, 5);
        child.color = Color::Black;
        let mut other = Node::new(9, 9);
        other.color = Color::Black;
        let mut root = Node::new(3, 3);
        root.color = Color::Black;
        root.left = Some(Box::new(child));
        root.right = Some(Box::new(other));
        let tree = Some(Box::new(root));
        assert_eq!(validate(&tree), Err(Error::OutOfOrder));
    }
}
