//! Zero-copy payload plumbing for the HENI network stack.
//!
//! Two building blocks live here:
//!
//! - [`linked_list::intrusive`]: a generic intrusive doubly linked list with
//!   O(1) splice, split and merge, plus forward and reverse cursors that can
//!   reshape the list while walking it.
//! - [`iobuf`]: a vectored I/O buffer list built on that list, describing a
//!   packet payload as an ordered chain of borrowed memory spans.
//!
//! Nothing in this crate allocates or owns memory. Nodes and spans belong to
//! whoever created them, and the caller keeps them alive for as long as a list
//! references them.
#![no_std]

pub mod error;
pub mod iobuf;
pub mod linked_list;

pub use error::Error;
