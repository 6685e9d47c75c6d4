use core::ptr::NonNull;

/// A trait for a link in a linked list.
pub trait Link: Sized {
    /// The record the link points at.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the previous pointer in the linked list
    fn prev(&self) -> Option<NonNull<Self::Target>>;

    /// Set the previous pointer in the linked list
    fn set_prev(&mut self, prev: Option<NonNull<Self::Target>>);
}

/// A trait for a record that can be threaded onto a
/// [`LinkedList`](super::list::LinkedList).
///
/// Usually implemented with `#[derive(Node)]` on a struct owning a
/// `link: DoubleLink<Self>` field.
pub trait Node: LinkWithPrev<Target = Self> {
    /// Clears both links.
    ///
    /// Lists call this on every node they give back, so a removed node can be
    /// inserted again right away.
    #[inline]
    fn unlink(&mut self) {
        self.set_next(None);
        self.set_prev(None);
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
