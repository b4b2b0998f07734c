use cgmath::*;
use std::fmt;
use std::fmt::Write;
use thiserror::Error;

use crate::geom::Bounds;
use crate::surface::{PixelFormat, Surface};

/// Errors produced when building a `PixelMask` from a surface region.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("pixel masks require an 8-bit indexed surface, got {0}")]
    UnsupportedFormat(PixelFormat),

    #[error("frame region {region:?} is empty or outside the {width}x{height} surface")]
    RegionOutOfBounds {
        region: Bounds,
        width: i32,
        height: i32,
    },
}

/// Per-pixel opacity of one sprite frame, packed one bit per pixel into
/// 32-bit words. Bit 31 of a word covers the leftmost pixel of its 32-pixel
/// span, so bits are consumed most-significant-first across a row; rows
/// whose width is not a multiple of 32 leave the trailing low-order bits of
/// their last word at zero. Built once per frame and immutable afterward.
pub struct PixelMask {
    width: i32,
    height: i32,
    words_per_row: usize,
    words: Vec<u32>,
}

impl PixelMask {
    /// Builds the opacity mask for `region` of `surface`, treating
    /// `transparent` as the colorkey: a bit is set iff the source palette
    /// index differs from it.
    pub fn from_surface(
        surface: &Surface,
        region: Bounds,
        transparent: u8,
    ) -> Result<Self, MaskError> {
        if surface.format() != PixelFormat::Indexed8 {
            return Err(MaskError::UnsupportedFormat(surface.format()));
        }
        if region.width() <= 0 || region.height() <= 0 || !surface.bounds().contains(&region) {
            return Err(MaskError::RegionOutOfBounds {
                region,
                width: surface.width(),
                height: surface.height(),
            });
        }

        let width = region.width();
        let height = region.height();
        let words_per_row = (width as usize + 31) / 32;
        let mut words = vec![0u32; words_per_row * height as usize];

        for i in 0..height {
            let row = &mut words[i as usize * words_per_row..][..words_per_row];

            let mut k = 0;
            let mut bit = 0x8000_0000u32;
            for j in 0..width {
                if surface.index_at(region.left() + j, region.top() + i) != transparent {
                    row[k] |= bit;
                }
                bit >>= 1;
                if bit == 0 {
                    bit = 0x8000_0000;
                    k += 1;
                }
            }
        }

        log::trace!(
            "built {}x{} pixel mask, {} word(s) per row",
            width,
            height,
            words_per_row
        );

        Ok(Self {
            width,
            height,
            words_per_row,
            words,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn words_per_row(&self) -> usize {
        self.words_per_row
    }

    /// Bounding box of this frame with its top-left corner at `position`.
    pub fn bounds_at(&self, position: Point2<i32>) -> Bounds {
        Bounds::new(position, vec2(self.width, self.height))
    }

    /// Whether the pixel at (x, y) of the frame is opaque.
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        assert!(
            x >= 0 && x < self.width && y >= 0 && y < self.height,
            "Pixel ({}, {}) outside {}x{} mask",
            x,
            y,
            self.width,
            self.height
        );
        let word = self.row(y as usize)[x as usize / 32];
        word & (0x8000_0000 >> (x % 32)) != 0
    }

    /// One row's packed words.
    pub(crate) fn row(&self, row: usize) -> &[u32] {
        &self.words[row * self.words_per_row..][..self.words_per_row]
    }
}

impl fmt::Display for PixelMask {
    /// Renders the frame one text line per pixel row, `X` opaque, `.`
    /// transparent. Handy when a collision test fails and you want to see
    /// the two frames involved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(if self.is_opaque(x, y) { 'X' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
