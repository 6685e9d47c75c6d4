//! Vectored I/O buffer lists.
//!
//! An [`IoBufList`] strings borrowed memory spans together into one logical
//! byte sequence, typically a packet or frame payload. Reading and writing go
//! through an [`IoBufFIter`], a byte-granular cursor that crosses span
//! boundaries on its own. Bytes are only ever moved when a copy is asked for;
//! splitting, merging and concatenating relink nodes and adjust span lengths.
//!
//! # Examples
//!
//! ```
//! use heni_collections::iobuf::{IoBufFIter, IoBufList, IoBufNode, Split};
//! use core::ptr::NonNull;
//!
//! let mut header = [0u8; 2];
//! let mut body = *b"payload";
//! let mut header_node = IoBufNode::from_slice(&mut header);
//! let mut body_node = IoBufNode::from_slice(&mut body);
//! let mut extra = IoBufNode::default();
//!
//! let mut frame = IoBufList::new();
//! frame.add_back(NonNull::from(&mut header_node));
//! frame.add_back(NonNull::from(&mut body_node));
//! assert_eq!(frame.capacity(), 9);
//!
//! let mut cursor = unsafe { IoBufFIter::new(&mut frame) };
//! assert_eq!(cursor.try_copy_from_buf_and_advance(&[0xAB, 0xCD]), 2);
//!
//! // Peel the header off without copying the body.
//! let mut rest = IoBufList::new();
//! let split = cursor.split_at(&mut rest, Some(NonNull::from(&mut extra))).unwrap();
//! assert!(matches!(split, Split::Aligned { extra: Some(_) }));
//! assert_eq!(frame.capacity(), 2);
//!
//! let mut flat = [0u8; 7];
//! assert_eq!(cursor.try_copy_into_buf_and_advance(&mut flat), 7);
//! assert_eq!(&flat, b"payload");
//! assert_eq!(header, [0xAB, 0xCD]);
//! ```

mod cursor;
mod list;
mod node;
mod span;

#[cfg(test)]
mod tests;

pub use cursor::{IoBufFIter, Split};
pub use list::{IoBufList, Spans};
pub use node::IoBufNode;
pub use span::Span;
