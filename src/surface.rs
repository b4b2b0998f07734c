use cgmath::*;
use std::fmt;

use crate::geom::Bounds;

/// Pixel encodings a source surface can carry. Opacity masks are only
/// buildable from `Indexed8` data; the truecolor formats exist so a caller
/// handing over the wrong asset gets a typed error instead of garbage bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Indexed8,
    Rgb888,
    Rgba8888,
}

impl PixelFormat {
    pub fn bits_per_pixel(&self) -> u32 {
        match self {
            PixelFormat::Indexed8 => 8,
            PixelFormat::Rgb888 => 24,
            PixelFormat::Rgba8888 => 32,
        }
    }

    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Indexed8 => write!(f, "8-bit indexed"),
            PixelFormat::Rgb888 => write!(f, "24-bit RGB"),
            PixelFormat::Rgba8888 => write!(f, "32-bit RGBA"),
        }
    }
}

/// Borrowed view of a caller-owned flat pixel buffer, typically a sprite
/// sheet the individual frames are cut from. `stride` is in pixels and may
/// exceed `width` when rows carry padding.
#[derive(Clone, Copy, Debug)]
pub struct Surface<'a> {
    format: PixelFormat,
    width: i32,
    height: i32,
    stride: i32,
    pixels: &'a [u8],
}

impl<'a> Surface<'a> {
    pub fn new(format: PixelFormat, width: i32, height: i32, stride: i32, pixels: &'a [u8]) -> Self {
        assert!(width > 0 && height > 0, "Surface dimensions must be positive");
        assert!(stride >= width, "Surface stride must cover its width");
        assert!(
            pixels.len() >= stride as usize * height as usize * format.bytes_per_pixel(),
            "Pixel buffer too small for {}x{} surface with stride {}",
            width,
            height,
            stride
        );

        Self {
            format,
            width,
            height,
            stride,
            pixels,
        }
    }

    /// View over a tightly packed buffer, i.e. stride == width.
    pub fn new_packed(format: PixelFormat, width: i32, height: i32, pixels: &'a [u8]) -> Self {
        Self::new(format, width, height, width, pixels)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(point2(0, 0), vec2(self.width, self.height))
    }

    /// Palette index at (x, y). Only meaningful for `Indexed8` surfaces.
    pub(crate) fn index_at(&self, x: i32, y: i32) -> u8 {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        self.pixels[(y * self.stride + x) as usize]
    }
}
