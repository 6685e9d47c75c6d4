//! An intrusive linked list implementation.
//!
//! In an intrusive linked list, the links are stored directly in the records
//! being chained. A record joins a list by owning a `link: DoubleLink<Self>`
//! field and deriving [`Node`](intrusive::traits::Node); the list only keeps
//! pointers to its first and last records and never allocates or frees them.
//!
//! # Examples
//!
//! ```
//! use heni_collections::linked_list::intrusive::{
//!     double::DoubleNode,
//!     iter::ForwardIter,
//!     list::LinkedList,
//!     traits::NodeWithData,
//! };
//! use core::ptr::NonNull;
//!
//! let mut list = LinkedList::<DoubleNode<i32>>::new();
//! let mut node1 = DoubleNode::new(1);
//! let mut node2 = DoubleNode::new(2);
//! let mut node3 = DoubleNode::new(3);
//!
//! list.add_back(NonNull::from(&mut node1));
//! list.add_back(NonNull::from(&mut node3));
//!
//! unsafe {
//!     // Walk to `3` and slot `2` in front of it.
//!     let mut iter = ForwardIter::new(&mut list);
//!     iter.advance();
//!     iter.add_before_without_moving(NonNull::from(&mut node2));
//!     assert_eq!(*iter.node().unwrap().as_ref().data(), 3);
//!
//!     let values: Vec<i32> = list.iter().map(|n| *n.as_ref().data()).collect();
//!     assert_eq!(values, vec![1, 2, 3]);
//! }
//! assert_eq!(list.count(), 3);
//! ```
pub mod intrusive;
