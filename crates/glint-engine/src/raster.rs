//! CPU render target.
//!
//! [`Surface`] is a premultiplied RGBA8 pixel buffer with src-over
//! compositing, matching the blend configuration GPU UI renderers use
//! (`One` / `OneMinusSrcAlpha` on both color and alpha).

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// One packed premultiplied RGBA8 pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[inline]
    fn from_color(c: Color) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Self { r: q(c.r), g: q(c.g), b: q(c.b), a: q(c.a) }
    }

    #[inline]
    fn to_color(self) -> Color {
        Color::from_premul(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }
}

/// Owned premultiplied RGBA8 pixel buffer, origin top-left.
///
/// All coordinates are logical pixels (1:1 with buffer pixels). Writes
/// outside the buffer are clipped, never an error.
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Surface {
    /// Creates a fully transparent surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Pixel::default(); width * height] }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Surface extent as a rect at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Raw RGBA8 bytes, row-major. Suitable for image export.
    #[inline]
    pub fn data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn clear(&mut self, color: Color) {
        let px = Pixel::from_color(color);
        self.pixels.fill(px);
    }

    /// Reads the pixel at `(x, y)`. Out-of-bounds reads are transparent.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Color::transparent();
        }
        self.pixels[y as usize * self.width + x as usize].to_color()
    }

    /// Src-over blends `src` (premultiplied) onto the pixel at `(x, y)`.
    ///
    /// Out-of-bounds writes are silently clipped.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, src: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        if src.a <= 0.0 && src.r <= 0.0 && src.g <= 0.0 && src.b <= 0.0 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let dst = self.pixels[idx].to_color();
        let inv = 1.0 - src.a;
        self.pixels[idx] = Pixel::from_color(Color::from_premul(
            src.r + dst.r * inv,
            src.g + dst.g * inv,
            src.b + dst.b * inv,
            src.a + dst.a * inv,
        ));
    }

    /// Src-over fills `rect` with a solid color, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.intersect(self.bounds()) else {
            return;
        };
        let x0 = clipped.origin.x.floor() as i32;
        let y0 = clipped.origin.y.floor() as i32;
        let x1 = clipped.max().x.ceil() as i32;
        let y1 = clipped.max().y.ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Position helper for per-pixel paints: center of pixel `(x, y)`.
#[inline]
pub fn pixel_center(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}
