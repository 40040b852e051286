//! An owned BST. Each node exclusively owns its children through `Box`ed
//! links, so the whole tree is torn down when the root goes out of scope.
//! `insert` consumes the tree and returns the new root, which keeps the
//! recursion free of borrow juggling.
//!
//! # Examples
//!
//! ```
//! use bstree::owned::Tree;
//!
//! let tree = Tree::new().insert(2).insert(1).insert(3);
//!
//! // In-order traversal of a BST is ascending.
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // Breadth-first order starts at the root.
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
//!
//! // Height counts nodes on the longest root-to-leaf path.
//! assert_eq!(tree.height(), 2);
//! ```

use std::cmp;
use std::collections::VecDeque;
use std::iter::FromIterator;

/// A Binary Search Tree storing one value per node. Values can be inserted
/// and visited in several orders; duplicates are silently rejected so the
/// tree always holds distinct values.
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a value and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Inserts the given value into the tree, returning the new root.
    /// Inserting a value the tree already holds leaves it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2);
    /// assert_eq!(tree.len(), 2);
    ///
    /// // A duplicate is a no-op.
    /// let tree = tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::Node(Node {
                value,
                left: Box::new(Self::Leaf),
                right: Box::new(Self::Leaf),
            }),
            Self::Node(n) => match value.cmp(&n.value) {
                cmp::Ordering::Less => Self::Node(Node {
                    left: Box::new(n.left.insert(value)),
                    ..n
                }),
                cmp::Ordering::Equal => Self::Node(n),
                cmp::Ordering::Greater => Self::Node(Node {
                    right: Box::new(n.right.insert(value)),
                    ..n
                }),
            },
        }
    }

    /// Gets the height of this tree: the number of nodes on the longest
    /// root-to-leaf path. An empty tree has height 0 and a single node has
    /// height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// let tree = tree.insert(1);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    /// Returns the number of nodes in this tree.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// Returns `true` if this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Returns an iterator visiting the values in ascending order: left
    /// subtree, node, right subtree. The iterator keeps its own stack so
    /// deep, unbalanced trees can't exhaust the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 3, 1].into_iter().collect();
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder {
            stack: Vec::new(),
            subtree: self,
        }
    }

    /// Returns an iterator visiting the values breadth-first: the root,
    /// then every depth-1 node left-to-right, then every depth-2 node, and
    /// so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 3, 1].into_iter().collect();
    /// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        let mut queue = VecDeque::new();
        if let Self::Node(n) = self {
            queue.push_back(n);
        }
        LevelOrder { queue }
    }

    /// Visits the values level by level, alternating direction: depth 0 is
    /// emitted left-to-right, depth 1 right-to-left, depth 2 left-to-right,
    /// and so on. Each inner `Vec` holds one full depth.
    ///
    /// Unlike [`level_order`][Self::level_order] this can't stream node by
    /// node: a level has to be buffered in full before it can be reversed,
    /// so each queue round drains exactly the nodes that were enqueued by
    /// the previous level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.zigzag(), vec![vec![&2], vec![&3, &1]]);
    /// ```
    pub fn zigzag(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut queue = VecDeque::new();
        if let Self::Node(n) = self {
            queue.push_back(n);
        }

        let mut depth = 0;
        while !queue.is_empty() {
            let width = queue.len();
            let mut level = Vec::with_capacity(width);
            for _ in 0..width {
                let Some(node) = queue.pop_front() else { break };
                level.push(&node.value);
                if let Self::Node(left) = &*node.left {
                    queue.push_back(left);
                }
                if let Self::Node(right) = &*node.right {
                    queue.push_back(right);
                }
            }
            if depth % 2 == 1 {
                level.reverse();
            }
            levels.push(level);
            depth += 1;
        }

        levels
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

/// A `Node` has a value used for searching/sorting. It always has two
/// children although those children may be [`Leaf`][Tree::Leaf]s.
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

/// Lazy in-order traversal returned by [`Tree::inorder`].
pub struct InOrder<'a, T> {
    /// Nodes whose value and right subtree are still unvisited.
    stack: Vec<&'a Node<T>>,
    /// The subtree to descend into before popping the stack again.
    subtree: &'a Tree<T>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Tree::Node(n) = self.subtree {
            self.stack.push(n);
            self.subtree = &n.left;
        }
        let node = self.stack.pop()?;
        self.subtree = &node.right;
        Some(&node.value)
    }
}

/// Lazy breadth-first traversal returned by [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        if let Tree::Node(left) = &*node.left {
            self.queue.push_back(left);
        }
        if let Tree::Node(right) = &*node.right {
            self.queue.push_back(right);
        }
        Some(&node.value)
    }
}
