use core::{fmt, ptr::NonNull};

use crate::error::Error;

use super::{list::LinkedList, traits::Node};

/// A cursor walking a list from its first node to its last.
///
/// A cursor is either active, sitting on a node, or finished. Cursors are
/// plain values: copies are independent, and a cursor is not told when the
/// list changes underneath it through another cursor.
///
/// Positions in terms of insertion: a finished cursor sits on a sentinel
/// between the last and the first node, so "after" it is the front of the
/// list and "before" it is the back.
pub struct ForwardIter<T: Node> {
    list: NonNull<LinkedList<T>>,
    current: Option<NonNull<T>>,
}

/// A cursor walking a list from its last node to its first.
///
/// It mirrors [`ForwardIter`]: "next", "after" and "advance" are all meant in
/// the reverse direction, so advancing moves to the previous node of the list.
pub struct ReverseIter<T: Node> {
    list: NonNull<LinkedList<T>>,
    current: Option<NonNull<T>>,
}

// Both cursors share the bookkeeping that does not depend on the direction.
macro_rules! impl_common {
    ($iter:ident, $opposite:ident, $start:ident) => {
        impl<T: Node> $iter<T> {
            /// Creates a cursor on the first node in walking order.
            ///
            /// # Safety
            ///
            /// The list must stay in place, and it and all its nodes must
            /// outlive the cursor and every copy of it.
            pub unsafe fn new(list: &mut LinkedList<T>) -> Self {
                Self {
                    current: list.$start(),
                    list: NonNull::from(list),
                }
            }

            /// Creates a cursor sitting on `node`.
            ///
            /// # Safety
            ///
            /// Same requirements as [`new`](Self::new). In addition `node`
            /// must be on `list`; this is only checked in debug builds or with
            /// the `checked` feature.
            pub unsafe fn at(list: &mut LinkedList<T>, node: NonNull<T>) -> Self {
                assert_member!(list, node);
                Self {
                    current: Some(node),
                    list: NonNull::from(list),
                }
            }

            /// Like [`at`](Self::at), but walks the list to verify that `node`
            /// belongs to it.
            ///
            /// # Safety
            ///
            /// Same requirements as [`new`](Self::new).
            pub unsafe fn try_at(
                list: &mut LinkedList<T>,
                node: NonNull<T>,
            ) -> Result<Self, Error> {
                if !list.contains_node(node) {
                    return Err(Error::NotAMember);
                }
                Ok(Self {
                    current: Some(node),
                    list: NonNull::from(list),
                })
            }

            /// Whether the cursor sits on a node.
            #[inline]
            pub fn is_active(&self) -> bool {
                self.current.is_some()
            }

            /// Moves the cursor past the end.
            #[inline]
            pub fn finish(&mut self) {
                self.current = None;
            }

            /// The node under the cursor.
            #[inline]
            pub fn node(&self) -> Option<NonNull<T>> {
                self.current
            }

            /// The list the cursor is bound to.
            #[inline]
            pub fn list(&self) -> NonNull<LinkedList<T>> {
                self.list
            }

            /// Whether the cursor is bound to `list`.
            #[inline]
            pub fn is_bound_to(&self, list: &LinkedList<T>) -> bool {
                core::ptr::eq(self.list.as_ptr(), list)
            }

            /// A cursor over the same list and node, walking the other way.
            #[inline]
            pub fn to_opposite(&self) -> $opposite<T> {
                $opposite {
                    list: self.list,
                    current: self.current,
                }
            }

            #[inline]
            fn list_mut(&mut self) -> &mut LinkedList<T> {
                // SAFETY: the constructor contract keeps the list alive and in place.
                unsafe { &mut *self.list.as_ptr() }
            }
        }

        impl<T: Node> Clone for $iter<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: Node> Copy for $iter<T> {}

        impl<T: Node> PartialEq for $iter<T> {
            fn eq(&self, other: &Self) -> bool {
                self.list == other.list && self.current == other.current
            }
        }

        impl<T: Node> Eq for $iter<T> {}

        impl<T: Node> fmt::Debug for $iter<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($iter))
                    .field("list", &self.list)
                    .field("current", &self.current)
                    .finish()
            }
        }
    };
}

impl_common!(ForwardIter, ReverseIter, first);
impl_common!(ReverseIter, ForwardIter, last);

impl<T: Node> ForwardIter<T> {
    /// Moves to the next node, finishing after the last one.
    ///
    /// The cursor must be active.
    pub fn advance(&mut self) {
        debug_assert!(self.is_active(), "Cannot advance a finished cursor");
        self.current = self.current.and_then(|node| unsafe { node.as_ref().next() });
    }

    /// Removes the node under the cursor and moves to its successor.
    ///
    /// Returns the removed node, or `None` if the cursor was finished.
    pub fn remove_and_advance(&mut self) -> Option<NonNull<T>> {
        let node = self.current?;
        self.current = unsafe { node.as_ref().next() };
        Some(unsafe { self.list_mut().remove(node) })
    }

    /// Inserts `node` after the cursor and moves the cursor onto it.
    pub fn add_after_and_advance(&mut self, node: NonNull<T>) {
        let anchor = self.current;
        self.list_mut().add_after(anchor, node);
        self.current = Some(node);
    }

    /// Inserts `node` before the cursor. The cursor stays where it is.
    pub fn add_before_without_moving(&mut self, node: NonNull<T>) {
        let anchor = self.current;
        self.list_mut().add_before(anchor, node);
    }

    /// Moves the node under the cursor, and everything after it, into `tail`.
    ///
    /// `tail` is overwritten, not merged into. The cursor keeps its node and
    /// is rebound to `tail`. A finished cursor splits nothing: `tail` is left
    /// empty and the cursor stays finished on it.
    pub fn split_before_without_moving(&mut self, tail: &mut LinkedList<T>) {
        debug_assert!(!self.is_bound_to(tail), "Cannot split a list into itself");
        *tail = match self.current {
            Some(node) => unsafe { self.list_mut().split_off_before(node) },
            None => LinkedList::new(),
        };
        self.list = NonNull::from(tail);
    }

    /// Moves everything after the node under the cursor into `tail`, then
    /// advances onto the first node of `tail`.
    ///
    /// `tail` is overwritten and the cursor is rebound to it, finished if
    /// nothing followed. A finished cursor splits nothing.
    pub fn split_after_and_advance(&mut self, tail: &mut LinkedList<T>) {
        debug_assert!(!self.is_bound_to(tail), "Cannot split a list into itself");
        let next = self.current.and_then(|node| unsafe { node.as_ref().next() });
        *tail = match next {
            Some(next) => unsafe { self.list_mut().split_off_before(next) },
            None => LinkedList::new(),
        };
        self.current = next;
        self.list = NonNull::from(tail);
    }

    /// Appends `tail` to `head` and, if given, moves `iter` onto the first node
    /// that came from `tail`.
    ///
    /// The cursor is rebound to `head`, and is finished when `tail` was empty.
    pub fn set_after_merge(
        iter: Option<&mut Self>,
        head: &mut LinkedList<T>,
        tail: &mut LinkedList<T>,
    ) {
        let seam = tail.first();
        head.merge(tail);
        if let Some(iter) = iter {
            iter.list = NonNull::from(head);
            iter.current = seam;
        }
    }
}

impl<T: Node> ReverseIter<T> {
    /// Moves to the previous node of the list, finishing after the first one.
    ///
    /// The cursor must be active.
    pub fn advance(&mut self) {
        debug_assert!(self.is_active(), "Cannot advance a finished cursor");
        self.current = self.current.and_then(|node| unsafe { node.as_ref().prev() });
    }

    /// Removes the node under the cursor and moves to its predecessor.
    ///
    /// Returns the removed node, or `None` if the cursor was finished.
    pub fn remove_and_advance(&mut self) -> Option<NonNull<T>> {
        let node = self.current?;
        self.current = unsafe { node.as_ref().prev() };
        Some(unsafe { self.list_mut().remove(node) })
    }

    /// Inserts `node` in front of the cursor in list order, which is after it
    /// in walking order, and moves the cursor onto it.
    pub fn add_after_and_advance(&mut self, node: NonNull<T>) {
        let anchor = self.current;
        self.list_mut().add_before(anchor, node);
        self.current = Some(node);
    }

    /// Inserts `node` behind the cursor in list order. The cursor stays where
    /// it is.
    pub fn add_before_without_moving(&mut self, node: NonNull<T>) {
        let anchor = self.current;
        self.list_mut().add_after(anchor, node);
    }

    /// Moves the node under the cursor, and everything still to be walked,
    /// into `tail`.
    ///
    /// In list order `tail` receives the front of the list up to and including
    /// the cursor's node; the bound list keeps the nodes already walked. `tail`
    /// is overwritten and the cursor is rebound to it without moving.
    pub fn split_before_without_moving(&mut self, tail: &mut LinkedList<T>) {
        debug_assert!(!self.is_bound_to(tail), "Cannot split a list into itself");
        *tail = match self.current {
            Some(node) => unsafe { self.list_mut().split_off_through(node) },
            None => LinkedList::new(),
        };
        self.list = NonNull::from(tail);
    }

    /// Moves every node still to be walked after the cursor's node into
    /// `tail`, then advances onto the last node of `tail`.
    ///
    /// `tail` is overwritten and the cursor is rebound to it, finished if the
    /// cursor was on the first node of the list.
    pub fn split_after_and_advance(&mut self, tail: &mut LinkedList<T>) {
        debug_assert!(!self.is_bound_to(tail), "Cannot split a list into itself");
        let prev = self.current.and_then(|node| unsafe { node.as_ref().prev() });
        *tail = match prev {
            Some(prev) => unsafe { self.list_mut().split_off_through(prev) },
            None => LinkedList::new(),
        };
        self.current = prev;
        self.list = NonNull::from(tail);
    }
}
