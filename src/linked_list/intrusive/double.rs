use core::{fmt, ptr::NonNull};

use heni_collections_derive::Node;

use super::traits::{Link, LinkWithPrev};

/// A general purpose node carrying a payload of type `T`.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct DoubleNode<T> {
    link: DoubleLink<DoubleNode<T>>,
    data: T,
}

impl<T> DoubleNode<T> {
    /// Creates an unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            link: DoubleLink::new(),
            data,
        }
    }
}

impl<T: Default> Default for DoubleNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// The pair of links embedded in every node of a doubly linked list.
///
/// `T` is the enclosing record, so following a link lands on the record
/// itself rather than on its link field.
pub struct DoubleLink<T> {
    next: Option<NonNull<T>>,
    prev: Option<NonNull<T>>,
}

impl<T> DoubleLink<T> {
    /// Creates a link pair that points nowhere.
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }
}

impl<T> Default for DoubleLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DoubleLink<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DoubleLink<T> {}

impl<T> fmt::Debug for DoubleLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleLink")
            .field("next", &self.next)
            .field("prev", &self.prev)
            .finish()
    }
}

impl<T> Link for DoubleLink<T> {
    type Target = T;

    #[inline]
    fn next(&self) -> Option<NonNull<Self::Target>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>) {
        self.next = next;
    }
}

impl<T> LinkWithPrev for DoubleLink<T> {
    #[inline]
    fn prev(&self) -> Option<NonNull<Self::Target>> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NonNull<Self::Target>>) {
        self.prev = prev;
    }
}

unsafe impl<T: Send> Send for DoubleLink<T> {}
unsafe impl<T: Sync> Sync for DoubleLink<T> {}
