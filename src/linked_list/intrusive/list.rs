use core::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use crate::error::Error;

use super::traits::Node;

/// A generic intrusive doubly linked list.
///
/// The list only remembers its first and last node. Counting is a traversal,
/// which keeps splicing, splitting and merging O(1).
pub struct LinkedList<T: Node> {
    first: Option<NonNull<T>>,
    last: Option<NonNull<T>>,
}

impl<T> LinkedList<T>
where
    T: Node,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            first: None,
            last: None,
        }
    }

    /// Forgets every node. The nodes themselves are not touched.
    pub fn init(&mut self) {
        self.first = None;
        self.last = None;
    }

    /// Check if the linked list is empty
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(
            self.first.is_none(),
            self.last.is_none(),
            "inconsistent state: a list had only one of its ends"
        );
        self.first.is_none()
    }

    /// The first node of the list.
    pub fn first(&self) -> Option<NonNull<T>> {
        self.first
    }

    /// The last node of the list.
    pub fn last(&self) -> Option<NonNull<T>> {
        self.last
    }

    /// Makes `self` describe the same chain of nodes as `src`.
    ///
    /// # Safety
    ///
    /// Afterwards two lists share the same nodes. The caller must make sure
    /// only one of them is used to modify the chain, and that the other one is
    /// reinitialized or dropped before it observes a stale end.
    pub unsafe fn copy_shallow(&mut self, src: &Self) {
        self.first = src.first;
        self.last = src.last;
    }

    /// Exchanges the contents of two lists.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Get the number of nodes in the linked list.
    ///
    /// This walks the whole list.
    pub fn count(&self) -> usize {
        // SAFETY: nodes outlive the list they are linked into.
        unsafe { self.iter().count() }
    }

    /// Whether `node` is one of the list's nodes. This walks the list.
    pub fn contains_node(&self, node: NonNull<T>) -> bool {
        // SAFETY: nodes outlive the list they are linked into.
        unsafe { self.iter().any(|current| current == node) }
    }

    /// Adds a node in front of the first node.
    ///
    /// Like every insertion, this trusts the node-lifetime rules of the
    /// [module](super): `node` must be unlinked and must outlive the list.
    pub fn add_front(&mut self, node: NonNull<T>) {
        self.add_after(None, node);
    }

    /// Adds a node behind the last node.
    pub fn add_back(&mut self, node: NonNull<T>) {
        self.add_before(None, node);
    }

    /// Inserts `node` right after `anchor`, or at the front when `anchor` is `None`.
    ///
    /// `node` must be unlinked and outlive the list. `anchor` must be on the
    /// list; that is asserted in debug builds or with the `checked` feature.
    pub fn add_after(&mut self, anchor: Option<NonNull<T>>, node: NonNull<T>) {
        if let Some(anchor) = anchor {
            assert_member!(self, anchor);
        }
        let next = match anchor {
            Some(anchor) => unsafe { anchor.as_ref().next() },
            None => self.first,
        };
        unsafe { self.link_between(anchor, node, next) };
    }

    /// Inserts `node` right before `anchor`, or at the back when `anchor` is `None`.
    ///
    /// Same requirements as [`add_after`](Self::add_after).
    pub fn add_before(&mut self, anchor: Option<NonNull<T>>, node: NonNull<T>) {
        if let Some(anchor) = anchor {
            assert_member!(self, anchor);
        }
        let prev = match anchor {
            Some(anchor) => unsafe { anchor.as_ref().prev() },
            None => self.last,
        };
        unsafe { self.link_between(prev, node, anchor) };
    }

    /// Removes and returns the first node, if any.
    pub fn try_remove_front(&mut self) -> Option<NonNull<T>> {
        self.first.map(|first| unsafe { self.remove(first) })
    }

    /// Removes and returns the last node, if any.
    pub fn try_remove_back(&mut self) -> Option<NonNull<T>> {
        self.last.map(|last| unsafe { self.remove(last) })
    }

    /// Unlinks `node` in O(1) and returns it with cleared links.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the node is linked into this list. It is
    /// only verified in debug builds or with the `checked` feature.
    pub unsafe fn remove(&mut self, node: NonNull<T>) -> NonNull<T> {
        assert_member!(self, node);
        unsafe {
            let node_ref = &mut *node.as_ptr();
            let prev = node_ref.prev();
            let next = node_ref.next();

            match prev {
                Some(prev) => (*prev.as_ptr()).set_next(next),
                None => self.first = next,
            }
            match next {
                Some(next) => (*next.as_ptr()).set_prev(prev),
                None => self.last = prev,
            }

            node_ref.unlink();
        }
        node
    }

    /// Unlinks `node` after checking that it is on the list.
    pub fn try_remove(&mut self, node: NonNull<T>) -> Result<NonNull<T>, Error> {
        if !self.contains_node(node) {
            return Err(Error::NotAMember);
        }
        Ok(unsafe { self.remove(node) })
    }

    /// Splices every node of `tail` onto the back of `self`, leaving `tail` empty.
    pub fn merge(&mut self, tail: &mut Self) {
        let (Some(tail_first), Some(tail_last)) = (tail.first, tail.last) else {
            return;
        };

        match self.last {
            Some(last) => unsafe {
                (*last.as_ptr()).set_next(Some(tail_first));
                (*tail_first.as_ptr()).set_prev(Some(last));
            },
            None => self.first = Some(tail_first),
        }
        self.last = Some(tail_last);
        tail.init();
    }

    /// Detaches `node` and everything after it into a new list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the node is linked into this list.
    pub unsafe fn split_off_before(&mut self, node: NonNull<T>) -> Self {
        assert_member!(self, node);
        let tail = LinkedList {
            first: Some(node),
            last: self.last,
        };
        unsafe {
            let node_ref = &mut *node.as_ptr();
            match node_ref.prev() {
                Some(prev) => {
                    (*prev.as_ptr()).set_next(None);
                    self.last = Some(prev);
                }
                None => self.init(),
            }
            node_ref.set_prev(None);
        }
        tail
    }

    /// Detaches every node up to and including `node` into a new list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the node is linked into this list.
    pub unsafe fn split_off_through(&mut self, node: NonNull<T>) -> Self {
        assert_member!(self, node);
        let front = LinkedList {
            first: self.first,
            last: Some(node),
        };
        unsafe {
            let node_ref = &mut *node.as_ptr();
            match node_ref.next() {
                Some(next) => {
                    (*next.as_ptr()).set_prev(None);
                    self.first = Some(next);
                }
                None => self.init(),
            }
            node_ref.set_next(None);
        }
        front
    }

    /// Get an iterator over the nodes of the linked list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that every node is still alive and that the
    /// list is not relinked while iterating.
    pub unsafe fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.first,
            back: self.last,
            _list: PhantomData,
        }
    }

    /// Points the neighbours of `node` at it and vice versa.
    unsafe fn link_between(
        &mut self,
        prev: Option<NonNull<T>>,
        node: NonNull<T>,
        next: Option<NonNull<T>>,
    ) {
        debug_assert!(
            Some(node) != prev && Some(node) != next,
            "Node is already linked at this position"
        );
        unsafe {
            let node_ref = &mut *node.as_ptr();
            node_ref.set_prev(prev);
            node_ref.set_next(next);

            match prev {
                Some(prev) => (*prev.as_ptr()).set_next(Some(node)),
                None => self.first = Some(node),
            }
            match next {
                Some(next) => (*next.as_ptr()).set_prev(Some(node)),
                None => self.last = Some(node),
            }
        }
    }
}

impl<T> Default for LinkedList<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Node> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}

unsafe impl<T: Node + Send> Send for LinkedList<T> {}
unsafe impl<T: Node + Sync> Sync for LinkedList<T> {}

/// An iterator over the nodes of a linked list, from either end.
pub struct Iter<'a, T: Node> {
    front: Option<NonNull<T>>,
    back: Option<NonNull<T>>,
    _list: PhantomData<&'a LinkedList<T>>,
}

impl<T: Node> Iter<'_, T> {
    /// Marks the iterator exhausted once both ends have met.
    fn take_and_close(&mut self, node: NonNull<T>) {
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else if self.front == Some(node) {
            self.front = unsafe { node.as_ref().next() };
        } else {
            self.back = unsafe { node.as_ref().prev() };
        }
    }
}

impl<T: Node> Iterator for Iter<'_, T> {
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.front.inspect(|&current| self.take_and_close(current))
    }
}

impl<T: Node> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back.inspect(|&current| self.take_and_close(current))
    }
}

impl<T: Node> FusedIterator for Iter<'_, T> {}
