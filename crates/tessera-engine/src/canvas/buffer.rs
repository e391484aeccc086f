//! Page-aligned RGBA8 pixel storage.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

use super::CanvasError;

/// Row stride alignment in bytes.
pub const ROW_ALIGNMENT: usize = 64;
/// Allocation size and address alignment in bytes.
pub const PAGE_SIZE: usize = 4096;

/// One stored pixel: straight alpha, bytes in R, G, B, A order.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BYTES: usize = std::mem::size_of::<Pixel>();

    #[inline]
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.to_bytes();
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_bytes(self.r, self.g, self.b, self.a)
    }
}

/// Rounds `size` up to a multiple of `align`, which must be a power of two.
/// `None` on overflow.
pub fn align_up(size: usize, align: usize) -> Option<usize> {
    assert!(align.is_power_of_two(), "align must be a power of two, got {align}");
    Some(size.checked_add(align - 1)? & !(align - 1))
}

/// Owned, zero-initialised pixel memory with a padded row stride.
///
/// Padding bytes at the end of each row and of the allocation are never
/// read as pixels.
pub struct PixelBuffer {
    data: NonNull<u8>,
    layout: Layout,
    width: usize,
    height: usize,
    bytes_per_row: usize,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let overflow = CanvasError::Allocation { bytes: usize::MAX };
        let bytes_per_row = width
            .checked_mul(Pixel::BYTES)
            .and_then(|row| align_up(row, ROW_ALIGNMENT))
            .ok_or(overflow.clone())?;
        let bytes = bytes_per_row
            .checked_mul(height)
            .and_then(|total| align_up(total, PAGE_SIZE))
            .ok_or(overflow)?;
        let layout = Layout::from_size_align(bytes, PAGE_SIZE).map_err(|_| CanvasError::Allocation { bytes })?;
        if layout.size() == 0 {
            return Err(CanvasError::Allocation { bytes });
        }
        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let data = NonNull::new(raw).ok_or(CanvasError::Allocation { bytes })?;
        Ok(Self { data, layout, width, height, bytes_per_row })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Total allocation size, including trailing page padding.
    #[inline]
    pub fn allocation_size(&self) -> usize {
        self.layout.size()
    }

    /// The strided pixel rows, `bytes_per_row * height` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `data` points to `layout.size()` initialised bytes owned by
        // `self`, and `bytes_per_row * height` never exceeds that.
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.bytes_per_row * self.height) }
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_bytes`; `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.bytes_per_row * self.height) }
    }

    pub fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.bytes_per_row;
        bytemuck::cast_slice(&self.as_bytes()[start..start + self.width * Pixel::BYTES])
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        let start = y * self.bytes_per_row;
        let end = start + self.width * Pixel::BYTES;
        bytemuck::cast_slice_mut(&mut self.as_bytes_mut()[start..end])
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.row(y)[x]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.row_mut(y)[x] = pixel;
    }

    pub fn fill(&mut self, pixel: Pixel) {
        for y in 0..self.height {
            self.row_mut(y).fill(pixel);
        }
    }

    /// Zeroes the whole allocation, padding included.
    pub fn zero(&mut self) {
        // SAFETY: writes exactly `layout.size()` bytes into memory owned by `self`.
        unsafe { std::ptr::write_bytes(self.data.as_ptr(), 0, self.layout.size()) }
    }
}

impl Drop for PixelBuffer {
    fn drop(&mut self) {
        // SAFETY: `data` was allocated with `layout` in `new` and is freed once.
        unsafe { alloc::dealloc(self.data.as_ptr(), self.layout) }
    }
}
