use core::{fmt, iter::FusedIterator, ptr::NonNull};

use tracing::trace;

use crate::linked_list::intrusive::list::{Iter, LinkedList};

use super::{node::IoBufNode, span::Span};

/// An ordered chain of spans read as one byte sequence.
///
/// The list holds nodes, never bytes. Its capacity is the sum of its spans'
/// lengths and, like the node count, is computed by walking the list.
#[derive(Default)]
pub struct IoBufList {
    nodes: LinkedList<IoBufNode>,
}

impl IoBufList {
    pub const fn new() -> Self {
        Self {
            nodes: LinkedList::new(),
        }
    }

    /// Forgets every node. Nodes and spans are not touched.
    pub fn init(&mut self) {
        self.nodes.init();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node must be unlinked and, together with the memory its span
    /// describes, outlive the list.
    pub fn add_front(&mut self, node: NonNull<IoBufNode>) {
        self.nodes.add_front(node);
    }

    /// Same requirements as [`add_front`](Self::add_front).
    pub fn add_back(&mut self, node: NonNull<IoBufNode>) {
        self.nodes.add_back(node);
    }

    /// Number of nodes. This walks the list.
    pub fn count(&self) -> usize {
        self.nodes.count()
    }

    /// Total length of all spans. This walks the list.
    pub fn capacity(&self) -> usize {
        self.spans().map(|span| span.len()).sum()
    }

    /// Appends `tail` to `self`, leaving `tail` empty.
    pub fn merge(&mut self, tail: &mut IoBufList) {
        trace!(head = ?self.nodes.last(), tail = ?tail.nodes.first(), "merging buffer lists");
        self.nodes.merge(&mut tail.nodes);
    }

    /// The spans of the list, front to back.
    pub fn spans(&self) -> Spans<'_> {
        Spans {
            // SAFETY: nodes outlive the list they are linked into, and the
            // shared borrow keeps the list from being relinked.
            nodes: unsafe { self.nodes.iter() },
        }
    }

    /// The underlying node list.
    pub fn as_list(&self) -> &LinkedList<IoBufNode> {
        &self.nodes
    }

    /// The underlying node list, for node-level surgery.
    pub fn as_list_mut(&mut self) -> &mut LinkedList<IoBufNode> {
        &mut self.nodes
    }
}

impl fmt::Debug for IoBufList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.spans()).finish()
    }
}

/// Iterator over the spans of an [`IoBufList`].
pub struct Spans<'a> {
    nodes: Iter<'a, IoBufNode>,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| unsafe { node.as_ref().span() })
    }
}

impl DoubleEndedIterator for Spans<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.nodes.next_back().map(|node| unsafe { node.as_ref().span() })
    }
}

impl FusedIterator for Spans<'_> {}
