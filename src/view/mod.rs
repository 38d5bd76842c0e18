//! # Strided Views
//!
//! A [`StridedView`] is a non-owning window over a sample buffer: logical element `i` lives at
//! backing index `offset + i * stride`. Views compose, so a column of a column is again a plain
//! view over the original buffer with
//!
//! ```text
//! stride = outer_stride * inner_stride
//! offset = outer_offset + inner_offset * outer_stride
//! ```
//!
//! This is what lets the depth-first engine recurse on interleaved columns without copying them
//! out. A view mutably borrows whatever it is laid over, so it can neither outlive its buffer nor
//! coexist with a second, possibly overlapping, writer.

pub mod errors;

use core::{
    fmt,
    ops::{Index, IndexMut},
};

use errors::ViewError;

/// Mutable strided window over a borrowed buffer.
pub struct StridedView<'a, T> {
    /// The backing buffer, shared by every view derived from the same root.
    data: &'a mut [T],
    /// Distance in the backing buffer between consecutive logical elements.
    stride: usize,
    /// Backing index of logical element `0`.
    offset: usize,
    /// Number of logical elements.
    len: usize,
}

/// Checks that `len` elements, `stride` apart and starting at `offset`, fit in `available`.
const fn check_layout(
    stride: usize,
    offset: usize,
    len: usize,
    available: usize,
) -> Result<(), ViewError> {
    if stride == 0 {
        return Err(ViewError::ZeroStride);
    }
    let out_of_bounds = ViewError::OutOfBounds {
        offset,
        stride,
        len,
        available,
    };
    if len == 0 {
        return if offset <= available {
            Ok(())
        } else {
            Err(out_of_bounds)
        };
    }
    let Some(span) = (len - 1).checked_mul(stride) else {
        return Err(out_of_bounds);
    };
    match offset.checked_add(span) {
        Some(last) if last < available => Ok(()),
        _ => Err(out_of_bounds),
    }
}

impl<'a, T> StridedView<'a, T> {
    /// Identity view over the whole buffer (`stride = 1`, `offset = 0`).
    pub const fn new(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            stride: 1,
            offset: 0,
            len,
        }
    }

    /// View of `len` elements of `data`, `stride` apart, starting at `offset`.
    pub fn with_layout(
        data: &'a mut [T],
        stride: usize,
        offset: usize,
        len: usize,
    ) -> Result<Self, ViewError> {
        check_layout(stride, offset, len, data.len())?;
        Ok(Self {
            data,
            stride,
            offset,
            len,
        })
    }

    /// View over this view.
    ///
    /// `stride` and `offset` are expressed in logical elements of `self`; the result addresses
    /// the backing buffer directly with the composed stride and offset. The sub-view must fit
    /// inside `self`.
    pub fn subview(
        &mut self,
        stride: usize,
        offset: usize,
        len: usize,
    ) -> Result<StridedView<'_, T>, ViewError> {
        check_layout(stride, offset, len, self.len)?;
        let composed = self.stride.checked_mul(stride).and_then(|composed_stride| {
            offset
                .checked_mul(self.stride)
                .and_then(|shift| shift.checked_add(self.offset))
                .map(|composed_offset| (composed_stride, composed_offset))
        });
        let Some((stride, offset)) = composed else {
            return Err(ViewError::OutOfBounds {
                offset,
                stride,
                len,
                available: self.len,
            });
        };
        Ok(StridedView {
            data: &mut *self.data,
            stride,
            offset,
            len,
        })
    }

    /// Number of logical elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the view addresses no element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in the backing buffer between consecutive logical elements.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Backing index of logical element `0`.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Backing index of logical element `index`.
    const fn backing_index(&self, index: usize) -> usize {
        self.offset + index * self.stride
    }

    /// Logical element `index`, or `None` past the end of the view.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.data.get(self.backing_index(index))
        } else {
            None
        }
    }

    /// Mutable logical element `index`, or `None` past the end of the view.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let backing = self.backing_index(index);
            self.data.get_mut(backing)
        } else {
            None
        }
    }

    /// Iterates over the logical elements in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        // An empty sub-view may start one past the end of its parent.
        self.data
            .get(self.offset..)
            .unwrap_or(&[])
            .iter()
            .step_by(self.stride)
            .take(self.len)
    }

    /// Overwrites every logical element with the matching element of `src`.
    ///
    /// # Panics
    /// Panics if `src.len() != self.len()`.
    pub fn copy_from_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        assert_eq!(
            src.len(),
            self.len,
            "source slice length does not match strided view length"
        );
        for (index, value) in src.iter().enumerate() {
            let backing = self.backing_index(index);
            self.data[backing] = *value;
        }
    }

    /// Copies the logical elements into a contiguous vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.iter().copied().collect()
    }
}

impl<T> Index<usize> for StridedView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index {index} out of range for strided view of length {}",
            self.len
        );
        &self.data[self.backing_index(index)]
    }
}

impl<T> IndexMut<usize> for StridedView<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "index {index} out of range for strided view of length {}",
            self.len
        );
        let backing = self.backing_index(index);
        &mut self.data[backing]
    }
}

impl<T> fmt::Debug for StridedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedView")
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("backing_len", &self.data.len())
            .finish()
    }
}
