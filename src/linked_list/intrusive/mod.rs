//! # Intrusive Linked List
//!
//! This module provides an implementation of an intrusive doubly linked list.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits, `Link`, `LinkWithPrev`, `Node` and `NodeWithData`.
//! - [`double::DoubleLink`]: The link pair embedded in every node.
//! - [`double::DoubleNode`]: A ready-made node carrying an arbitrary payload.
//! - [`list::LinkedList`]: The list itself, holding only its first and last node.
//! - [`iter::ForwardIter`] and [`iter::ReverseIter`]: Copyable cursors that can
//!   insert, remove, split and merge at their position.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code extensively to manage raw pointers.
//! The user of this module is responsible for upholding several invariants:
//!
//! - Nodes must outlive every list and cursor that references them.
//! - A node must not be in two lists at the same time.
//! - A list must stay in place while a cursor is bound to it.
//! - Cursors are independent snapshots. Mutating the list through one cursor
//!   does not update another cursor sitting on the same node.
//! - Operations anchored at a node require that node to be on the list. This
//!   is asserted in debug builds, or always with the `checked` feature.

/// Asserts that `node` is on `list` in debug builds, or with the `checked` feature.
macro_rules! assert_member {
    ($list:expr, $node:expr) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!(
                $list.contains_node($node),
                "Node must be a member of the list it is used with"
            );
        }
    };
}

pub mod traits;
pub mod double;
pub mod list;
pub mod iter;

#[cfg(test)]
mod tests;
