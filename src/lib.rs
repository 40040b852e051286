//! This crate implements a Binary Search Tree (BST) together with the
//! classic traversal strategies, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure storing ordered records. BSTs
//! are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The ordering invariants make several visit orders interesting:
//!
//! - **In-order** traversal (left subtree, node, right subtree) yields the
//!   stored values in ascending order.
//! - **Level-order** (breadth-first) traversal yields values by increasing
//!   depth, left-to-right within each depth.
//! - **Zigzag** (spiral) traversal is a level-order traversal where every
//!   other depth is emitted right-to-left instead.
//!
//! The tree also exposes its **height**, defined as the number of nodes on
//! the longest root-to-leaf path (1 for a single node, 0 for an empty tree).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod owned;
