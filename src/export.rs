use std::path::Path;

use image::{ImageBuffer, Luma};

use crate::universe::Universe;

/// Pack each grid row into bytes, eight cells per byte, most
/// significant bit first.
pub fn write_buffer(uni: &Universe) -> Vec<Vec<u8>> {
  let grid = uni.grid();
  let n = grid.size();
  let row_bytes = (n + 7) / 8;
  let mut buffer = vec![vec![0u8; row_bytes]; n];
  for (row, col) in grid.live_cells() {
    buffer[row][col / 8] |= 0x80 >> (col % 8);
  }
  buffer
}

/// Render the current generation to a grayscale image, one pixel per
/// cell, live cells white.
pub fn save_image(uni: &Universe, path: impl AsRef<Path>) -> image::ImageResult<()> {
  let n = uni.size() as u32;
  let mut buffer = ImageBuffer::new(n, n);
  for (row, col) in uni.grid().live_cells() {
    buffer.put_pixel(col as u32, row as u32, Luma([255u8]));
  }
  buffer.save(path)
}
