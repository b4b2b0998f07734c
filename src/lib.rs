//! Pixel-accurate collision detection between sprite frames.
//!
//! A [`PixelMask`] is built once per sprite frame from 8-bit indexed pixel
//! data: one bit per pixel, set when the source index differs from the
//! frame's colorkey. [`masks_collide`] then answers, per game tick, whether
//! two frames placed at integer positions on a shared plane have overlapping
//! opaque pixels — a cheap bounding-box test first, then a word-at-a-time
//! comparison of the overlap region.
//!
//! ```
//! use cgmath::{point2, vec2};
//! use pixel_collision::{masks_collide, Bounds, PixelFormat, PixelMask, Surface};
//!
//! // two fully opaque 2x2 frames cut from a 4x2 sheet; index 0 is the colorkey
//! let sheet = vec![1u8; 8];
//! let surface = Surface::new_packed(PixelFormat::Indexed8, 4, 2, &sheet);
//! let a = PixelMask::from_surface(&surface, Bounds::new(point2(0, 0), vec2(2, 2)), 0).unwrap();
//! let b = PixelMask::from_surface(&surface, Bounds::new(point2(2, 0), vec2(2, 2)), 0).unwrap();
//!
//! assert!(masks_collide(&a, point2(0, 0), &b, point2(1, 0)));
//! assert!(!masks_collide(&a, point2(0, 0), &b, point2(2, 0)));
//! ```

pub mod collision;
pub mod geom;
pub mod mask;
pub mod surface;

pub use collision::masks_collide;
pub use geom::Bounds;
pub use mask::{MaskError, PixelMask};
pub use surface::{PixelFormat, Surface};
