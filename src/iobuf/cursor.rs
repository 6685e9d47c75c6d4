use core::ptr::{self, NonNull};

use tracing::{debug, trace};

use crate::{error::Error, linked_list::intrusive::iter::ForwardIter};

use super::{list::IoBufList, node::IoBufNode, span::Span};

/// How [`IoBufFIter::split_at`] cut the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// The cursor was on a node boundary, or finished. No node was needed and
    /// the extra node, if one was offered, is handed back untouched.
    Aligned { extra: Option<NonNull<IoBufNode>> },
    /// The cursor was inside a span. The extra node now describes the second
    /// half of that span and heads the tail list.
    Unaligned,
}

impl Split {
    /// Whether the caller's extra node was threaded into the tail list.
    pub fn consumed_extra(&self) -> bool {
        matches!(self, Split::Unaligned)
    }
}

/// A forward byte cursor over an [`IoBufList`].
///
/// The cursor is a list cursor plus `boff`, the offset into the current
/// node's span. While active, `0 <= boff < len` holds for the current node;
/// empty spans are stepped over. A finished cursor reads as the null span.
///
/// Like list cursors, copies are independent values.
#[derive(Debug, Clone, Copy)]
pub struct IoBufFIter {
    iter: ForwardIter<IoBufNode>,
    boff: usize,
}

impl IoBufFIter {
    /// Creates a cursor on the first byte of `list`.
    ///
    /// # Safety
    ///
    /// `list` must stay in place, and it, its nodes and the memory behind
    /// their spans must outlive the cursor and every copy of it. Writing
    /// through the cursor requires the spans to be writable.
    pub unsafe fn new(list: &mut IoBufList) -> Self {
        let mut cursor = Self {
            iter: unsafe { ForwardIter::new(list.as_list_mut()) },
            boff: 0,
        };
        cursor.skip_empty();
        cursor
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.iter.is_active()
    }

    /// The node under the cursor.
    #[inline]
    pub fn node(&self) -> Option<NonNull<IoBufNode>> {
        self.iter.node()
    }

    /// Offset of the cursor into the current node's span.
    #[inline]
    pub fn offset(&self) -> usize {
        self.boff
    }

    /// Whether the cursor is bound to `list`.
    #[inline]
    pub fn is_bound_to(&self, list: &IoBufList) -> bool {
        self.iter.is_bound_to(list.as_list())
    }

    /// Moves the cursor past the end.
    pub fn finish(&mut self) {
        self.iter.finish();
        self.boff = 0;
    }

    /// What is left of the current span: `{base + boff, len - boff}`, or the
    /// null span once finished.
    pub fn buf(&self) -> Span {
        match self.node() {
            Some(node) => unsafe { node.as_ref() }.span().sub_span(self.boff),
            None => Span::EMPTY,
        }
    }

    /// Number of bytes from the cursor to the end of the list. This walks the
    /// rest of the list.
    pub fn remaining(&self) -> usize {
        let mut iter = self.iter;
        let mut total = 0;
        while let Some(node) = iter.node() {
            total += unsafe { node.as_ref() }.len();
            iter.advance();
        }
        total.saturating_sub(self.boff)
    }

    /// Moves forward by up to `delta` bytes, crossing span boundaries.
    ///
    /// Returns how far the cursor actually moved, which is less than `delta`
    /// only if the list ran out. Advancing by zero never moves the cursor.
    pub fn try_advance(&mut self, delta: usize) -> usize {
        let mut left = delta;
        while left > 0 {
            let Some(node) = self.node() else { break };
            let available = unsafe { node.as_ref() }.len() - self.boff;
            if left < available {
                self.boff += left;
                left = 0;
            } else {
                left -= available;
                self.next_node();
            }
        }
        delta - left
    }

    /// Writes one byte at the cursor and moves past it.
    ///
    /// Returns the number of bytes written, zero if the cursor was finished.
    pub fn try_set_byte_and_advance(&mut self, byte: u8) -> usize {
        let dst = self.buf();
        if dst.is_empty() {
            return 0;
        }
        unsafe { dst.base().write(byte) };
        self.try_advance(1)
    }

    /// Reads the byte at the cursor and moves past it, or returns `None` if
    /// the cursor was finished.
    pub fn try_get_byte_and_advance(&mut self) -> Option<u8> {
        let src = self.buf();
        if src.is_empty() {
            return None;
        }
        let byte = unsafe { src.base().read() };
        self.try_advance(1);
        Some(byte)
    }

    /// Copies `src` into the list at the cursor and advances past the copied
    /// bytes. Stops early only when the list runs out.
    pub fn try_copy_from_buf_and_advance(&mut self, src: &[u8]) -> usize {
        unsafe { self.copy_from_raw(src.as_ptr(), src.len()) }
    }

    /// Fills `dst` from the list at the cursor and advances past the copied
    /// bytes. Stops early only when the list runs out.
    pub fn try_copy_into_buf_and_advance(&mut self, dst: &mut [u8]) -> usize {
        let mut copied = 0;
        while copied < dst.len() {
            let src = self.buf();
            if src.is_empty() {
                break;
            }
            let n = src.len().min(dst.len() - copied);
            unsafe { ptr::copy(src.base(), dst.as_mut_ptr().add(copied), n) };
            copied += n;
            self.try_advance(n);
        }
        copied
    }

    /// Copies up to `num` bytes from this cursor's list into `to`'s list,
    /// advancing both cursors by the amount copied.
    ///
    /// The result is bounded by `num`, by what is left behind this cursor and
    /// by what is left behind `to`.
    pub fn try_copy_to_another_and_advance_both(
        &mut self,
        to: &mut IoBufFIter,
        num: usize,
    ) -> usize {
        let mut moved = 0;
        while moved < num {
            let chunk = self.buf();
            if chunk.is_empty() {
                break;
            }
            let want = chunk.len().min(num - moved);
            let n = unsafe { to.copy_from_raw(chunk.base(), want) };
            self.try_advance(n);
            moved += n;
            if n < want {
                break;
            }
        }
        moved
    }

    /// Splits the list at the cursor.
    ///
    /// Bytes already walked stay on the bound list; the rest goes to `tail`,
    /// whose previous contents are dropped. The cursor is rebound to `tail`,
    /// on its first byte.
    ///
    /// - On a node boundary this is a pure node split and `extra` is handed
    ///   back in [`Split::Aligned`].
    /// - Inside a span, the current node is cut down to the walked part and
    ///   `extra` is set up to describe the rest and placed at the front of
    ///   `tail` ([`Split::Unaligned`]). Without an `extra` node this fails with
    ///   [`Error::MissingExtraNode`] and nothing changes.
    /// - On a finished cursor nothing is split: `tail` is emptied and the
    ///   cursor stays finished on it.
    ///
    /// `extra` must not be on any list.
    pub fn split_at(
        &mut self,
        tail: &mut IoBufList,
        extra: Option<NonNull<IoBufNode>>,
    ) -> Result<Split, Error> {
        let node = match self.node() {
            Some(node) if self.boff > 0 => node,
            _ => {
                trace!(node = ?self.node(), "splitting buffer list on a node boundary");
                self.iter.split_before_without_moving(tail.as_list_mut());
                return Ok(Split::Aligned { extra });
            }
        };
        let Some(mut extra) = extra else {
            debug!(offset = self.boff, "refusing to split inside a span without an extra node");
            return Err(Error::MissingExtraNode);
        };

        let span = unsafe { node.as_ref() }.span();
        trace!(?span, offset = self.boff, "splitting buffer list inside a span");
        unsafe {
            (*node.as_ptr()).set_span(span.truncated(self.boff));
            extra.as_mut().init(span.sub_span(self.boff));
        }
        self.iter.add_after_and_advance(extra);
        self.iter.split_before_without_moving(tail.as_list_mut());
        self.boff = 0;
        Ok(Split::Unaligned)
    }

    /// Appends `tail` to `head` and, if given, puts `cursor` on the first byte
    /// that came from `tail`.
    ///
    /// The cursor is rebound to `head`, and finished if `tail` had no bytes.
    pub fn set_after_merge(
        cursor: Option<&mut IoBufFIter>,
        head: &mut IoBufList,
        tail: &mut IoBufList,
    ) {
        trace!(
            head = ?head.as_list().last(),
            tail = ?tail.as_list().first(),
            "merging buffer lists"
        );
        match cursor {
            Some(cursor) => {
                ForwardIter::set_after_merge(
                    Some(&mut cursor.iter),
                    head.as_list_mut(),
                    tail.as_list_mut(),
                );
                cursor.boff = 0;
                cursor.skip_empty();
            }
            None => head.as_list_mut().merge(tail.as_list_mut()),
        }
    }

    /// Undoes a split inside a span.
    ///
    /// If the span before the cursor's node ends exactly where the current
    /// span starts in memory, the previous node grows over the current span,
    /// the current node is unlinked and returned, and the cursor moves onto
    /// the previous node at the same logical byte. Otherwise nothing changes
    /// and `None` is returned.
    pub fn try_concatenate_with_previous(&mut self) -> Option<NonNull<IoBufNode>> {
        let current = self.node()?;
        let mut rev = self.iter.to_opposite();
        rev.advance();
        let prev = rev.node()?;

        let prev_span = unsafe { prev.as_ref() }.span();
        let span = unsafe { current.as_ref() }.span();
        if !prev_span.is_adjacent_to(&span) {
            return None;
        }

        let joined = Span::new(prev_span.base(), prev_span.len() + span.len());
        unsafe { (*prev.as_ptr()).set_span(joined) };
        let removed = self.iter.remove_and_advance();
        debug_assert_eq!(removed, Some(current));
        self.iter = rev.to_opposite();
        self.boff += prev_span.len();
        trace!(?prev_span, merged = span.len(), "concatenated adjacent spans");
        removed
    }

    /// Copies `len` bytes from `src` into the list, advancing past them.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `len` bytes.
    unsafe fn copy_from_raw(&mut self, src: *const u8, len: usize) -> usize {
        let mut copied = 0;
        while copied < len {
            let dst = self.buf();
            if dst.is_empty() {
                break;
            }
            let n = dst.len().min(len - copied);
            unsafe { ptr::copy(src.add(copied), dst.base(), n) };
            copied += n;
            self.try_advance(n);
        }
        copied
    }

    fn next_node(&mut self) {
        self.iter.advance();
        self.boff = 0;
        self.skip_empty();
    }

    /// Steps over empty spans so an active cursor always has a byte under it.
    fn skip_empty(&mut self) {
        while let Some(node) = self.node() {
            if !unsafe { node.as_ref() }.is_empty() {
                break;
            }
            self.iter.advance();
        }
    }
}

impl PartialEq for IoBufFIter {
    /// Two cursors are equal when they sit on the same byte of the same node.
    fn eq(&self, other: &Self) -> bool {
        self.node() == other.node() && self.boff == other.boff
    }
}

impl Eq for IoBufFIter {}
