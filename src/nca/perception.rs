use super::CellGrid;

/// Horizontal Sobel kernel, applied as cross-correlation (not flipped).
pub const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical Sobel kernel: transpose of `SOBEL_X`.
pub const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Depthwise 3x3 cross-correlation of one channel at `(x, y)`, circular padding.
#[inline]
fn correlate(grid: &CellGrid, kernel: &[[f32; 3]; 3], channel: usize, x: usize, y: usize) -> f32 {
    let mut acc = 0.0;
    for (ky, row) in kernel.iter().enumerate() {
        for (kx, &k) in row.iter().enumerate() {
            if k != 0.0 {
                let sx = x as isize + kx as isize - 1;
                let sy = y as isize + ky as isize - 1;
                acc += k * grid.get_wrapped(channel, sx, sy);
            }
        }
    }
    acc
}

/// Perception vector of a single cell: `[state; grad_x; grad_y]`, each block
/// `channels` long, written into `out` (length `3 * channels`).
pub fn perceive_cell(grid: &CellGrid, x: usize, y: usize, out: &mut [f32]) {
    let c = grid.channels();
    debug_assert_eq!(out.len(), 3 * c);
    for ch in 0..c {
        out[ch] = grid.get(ch, x, y);
        out[c + ch] = correlate(grid, &SOBEL_X, ch, x, y);
        out[2 * c + ch] = correlate(grid, &SOBEL_Y, ch, x, y);
    }
}
