use crate::entry::Entry;
use crate::llrb_tree::tree;
use std::mem;

/// An enum representing the color of the link from a node to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a left-leaning red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    fn is_left_left_red(&self) -> bool {
        match self.left {
            Some(ref child) => child.is_red() && tree::is_red(&child.left),
            None => false,
        }
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // precondition: the right child exists and is red
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    // precondition: the left child exists and is red
    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    /// Restores the left-leaning invariants at this node on the way back up from an insertion or
    /// a deletion. The order of the three steps matters.
    pub fn fix_up(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        if self.is_left_left_red() {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    /// Makes the left child or one of its children red before descending left during a deletion,
    /// borrowing from the right sibling if it is a 3-node.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        let should_borrow = match self.right {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if should_borrow {
            if let Some(ref mut child) = self.right {
                child.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    /// Mirror of `move_red_left` for a descent to the right.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        if self.is_left_left_red() {
            self.rotate_right();
            self.flip_colors();
        }
    }
}
