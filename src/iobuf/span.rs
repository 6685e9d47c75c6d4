use core::{fmt, ptr, slice};

/// A borrowed memory region: a base address and a length in bytes.
///
/// A span never owns its bytes. Whoever handed out the memory (a static
/// array, a pool slot, a stack frame) keeps it alive while spans describe it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span {
    base: *mut u8,
    len: usize,
}

impl Span {
    /// The null, zero-length span.
    pub const EMPTY: Span = Span {
        base: ptr::null_mut(),
        len: 0,
    };

    pub const fn new(base: *mut u8, len: usize) -> Self {
        Self { base, len }
    }

    /// Describes the memory of `buf`. The borrow is not tracked.
    pub fn from_slice(buf: &mut [u8]) -> Self {
        Self {
            base: buf.as_mut_ptr(),
            len: buf.len(),
        }
    }

    #[inline]
    pub fn base(&self) -> *mut u8 {
        self.base
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the span.
    #[inline]
    pub fn end(&self) -> *mut u8 {
        self.base.wrapping_add(self.len)
    }

    /// The part of the span starting `offset` bytes in.
    #[inline]
    pub fn sub_span(&self, offset: usize) -> Span {
        assert!(offset <= self.len, "Offset {offset} is past the end of a {} byte span", self.len);
        Span {
            base: self.base.wrapping_add(offset),
            len: self.len - offset,
        }
    }

    /// The first `len` bytes of the span.
    #[inline]
    pub fn truncated(&self, len: usize) -> Span {
        assert!(len <= self.len, "Cannot grow a {} byte span to {len}", self.len);
        Span {
            base: self.base,
            len,
        }
    }

    /// Whether `next` starts exactly where this span ends in memory.
    ///
    /// Only the addresses are compared. Two spans that happen to describe
    /// back-to-back parts of one buffer are adjacent; spans over separate
    /// buffers are not, whatever their contents.
    #[inline]
    pub fn is_adjacent_to(&self, next: &Span) -> bool {
        !self.base.is_null() && self.end() == next.base
    }

    /// Views the span as a byte slice.
    ///
    /// # Safety
    ///
    /// The memory must be valid for reads for `'a` and must not be written
    /// through another path meanwhile.
    pub unsafe fn as_slice<'a>(&self) -> &'a [u8] {
        if self.base.is_null() {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.base, self.len) }
    }

    /// Views the span as a mutable byte slice.
    ///
    /// # Safety
    ///
    /// The memory must be valid for writes for `'a` and must not be accessed
    /// through another path meanwhile.
    pub unsafe fn as_mut_slice<'a>(&self) -> &'a mut [u8] {
        if self.base.is_null() {
            return &mut [];
        }
        unsafe { slice::from_raw_parts_mut(self.base, self.len) }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("base", &self.base)
            .field("len", &self.len)
            .finish()
    }
}
