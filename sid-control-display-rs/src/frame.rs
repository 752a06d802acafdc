//! In-memory one-bit frame buffer for the 128×64 screen.
//!
//! [`FrameBuffer`] is the draw target the module renders into each tick. The
//! host reads the packed pixels with [`FrameBuffer::as_bytes`] and pushes them
//! to the physical display.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

/// Screen width in pixels.
pub const WIDTH: usize = 128;
/// Screen height in pixels.
pub const HEIGHT: usize = 64;

const BYTES_PER_ROW: usize = WIDTH / 8;

/// Packed 128×64 monochrome frame.
///
/// Rows are stored top to bottom, 16 bytes per row, most significant bit
/// leftmost. Pixels drawn outside the screen are clipped.
///
/// # Example
///
/// ```
/// use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
/// use sid_control_display::FrameBuffer;
///
/// let mut frame = FrameBuffer::new();
/// Pixel(Point::new(3, 1), BinaryColor::On).draw(&mut frame).unwrap();
///
/// assert_eq!(frame.pixel(3, 1), Some(true));
/// assert_eq!(frame.as_bytes()[16], 0b0001_0000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    buffer: [u8; BYTES_PER_ROW * HEIGHT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank (all pixels off) frame.
    pub const fn new() -> Self {
        Self {
            buffer: [0; BYTES_PER_ROW * HEIGHT],
        }
    }

    /// State of the pixel at `(x, y)`, or `None` if off-screen.
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (index, mask) = Self::locate(x, y)?;
        Some(self.buffer[index] & mask != 0)
    }

    /// Packed pixel data, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.buffer.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn set_pixel(&mut self, point: Point, on: bool) {
        if let Some((index, mask)) = Self::locate(point.x, point.y) {
            if on {
                self.buffer[index] |= mask;
            } else {
                self.buffer[index] &= !mask;
            }
        }
    }

    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * BYTES_PER_ROW + x / 8, 0x80 >> (x % 8)))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}
