use heni_collections_derive::Node;

use crate::linked_list::intrusive::{double::DoubleLink, traits::Node as _};

use super::span::Span;

/// A buffer list node: list links plus the span it contributes.
///
/// The node borrows its span. Dropping or recycling the node leaves the
/// memory alone.
#[derive(Node, Debug)]
#[node(crate_path = "crate")]
pub struct IoBufNode {
    link: DoubleLink<IoBufNode>,
    #[node(data)]
    span: Span,
}

impl IoBufNode {
    /// Creates an unlinked node describing `span`.
    pub const fn new(span: Span) -> Self {
        Self {
            link: DoubleLink::new(),
            span,
        }
    }

    /// Creates an unlinked node over `buf`. The borrow is not tracked.
    pub fn from_slice(buf: &mut [u8]) -> Self {
        Self::new(Span::from_slice(buf))
    }

    /// Reinitializes a node that is on no list to describe `span`.
    pub fn init(&mut self, span: Span) {
        self.unlink();
        self.span = span;
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn base(&self) -> *mut u8 {
        self.span.base()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub(crate) fn set_span(&mut self, span: Span) {
        self.span = span;
    }
}

impl Default for IoBufNode {
    fn default() -> Self {
        Self::new(Span::EMPTY)
    }
}
