//! Lane predicates for masked chunk processing
//!
//! A [`LaneMask`] selects which lanes of a vector chunk index valid buffer
//! elements. It is computed per chunk from the current offset and the buffer
//! length, and threaded through load, compute, and store as an explicit
//! parameter, never implicit state, so the same code path is correct for
//! full chunks and for the partial tail when the buffer length is not a
//! multiple of the vector width.
//!
//! Because valid lanes are always the leading ones (`offset + lane < len`),
//! the mask is a prefix mask: full everywhere except possibly the final
//! chunk of a sweep.

/// Per-chunk active-lane mask
///
/// Lane `lane` is active when `offset + lane < len` for the offset/length
/// pair the mask was built from.
///
/// # Example
///
/// ```
/// use medir::mask::LaneMask;
///
/// // 10-element buffer, 4-lane chunks: the chunk at offset 8 is partial
/// let mask = LaneMask::for_offset(8, 10, 4);
/// assert!(mask.active(0));
/// assert!(mask.active(1));
/// assert!(!mask.active(2));
/// assert!(!mask.is_full());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneMask {
    width: usize,
    active: usize,
}

impl LaneMask {
    /// Build the mask for the chunk starting at `offset` in a buffer of
    /// `len` elements, with `width` lanes per chunk
    ///
    /// An offset at or past the end yields an empty mask.
    #[must_use]
    pub fn for_offset(offset: usize, len: usize, width: usize) -> Self {
        let remaining = len.saturating_sub(offset);
        Self {
            width,
            active: remaining.min(width),
        }
    }

    /// Whether `lane` indexes a valid buffer element
    #[must_use]
    pub const fn active(&self, lane: usize) -> bool {
        lane < self.active
    }

    /// Count of active lanes (between 0 and `width`)
    #[must_use]
    pub const fn active_lanes(&self) -> usize {
        self.active
    }

    /// Lane count of the chunk this mask gates
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether every lane is active (all chunks except possibly the tail)
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.active == self.width
    }

    /// Whether no lane is active
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active == 0
    }
}
