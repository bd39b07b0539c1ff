/// Square grid of cells, each carrying `channels` f32 values.
///
/// Storage is channel-major: channel `c` of cell `(x, y)` lives at
/// `c * size * size + y * size + x`, so one channel is a contiguous plane.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    size: usize,
    channels: usize,
    data: Vec<f32>,
}

impl CellGrid {
    pub fn new(size: usize, channels: usize) -> Self {
        Self {
            size,
            channels,
            data: vec![0.0; size * size * channels],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    fn index(&self, channel: usize, x: usize, y: usize) -> usize {
        channel * self.cell_count() + y * self.size + x
    }

    #[inline]
    pub fn get(&self, channel: usize, x: usize, y: usize) -> f32 {
        self.data[self.index(channel, x, y)]
    }

    #[inline]
    pub fn set(&mut self, channel: usize, x: usize, y: usize, value: f32) {
        let i = self.index(channel, x, y);
        self.data[i] = value;
    }

    /// Read with circular (toroidal) wrapping of coordinates.
    #[inline]
    pub fn get_wrapped(&self, channel: usize, x: isize, y: isize) -> f32 {
        let n = self.size as isize;
        self.get(channel, x.rem_euclid(n) as usize, y.rem_euclid(n) as usize)
    }

    pub fn plane(&self, channel: usize) -> &[f32] {
        let n = self.cell_count();
        &self.data[channel * n..(channel + 1) * n]
    }

    pub fn plane_mut(&mut self, channel: usize) -> &mut [f32] {
        let n = self.cell_count();
        &mut self.data[channel * n..(channel + 1) * n]
    }

    /// Zero every channel from `first` onwards at cell `(x, y)`.
    pub fn clear_cell_from(&mut self, first: usize, x: usize, y: usize) {
        for c in first..self.channels {
            self.set(c, x, y, 0.0);
        }
    }

    /// 3x3 neighbourhood maximum of one channel, with circular wrap.
    pub fn neighbourhood_max(&self, channel: usize, x: usize, y: usize) -> f32 {
        let mut max = f32::NEG_INFINITY;
        for dy in -1..=1 {
            for dx in -1..=1 {
                max = max.max(self.get_wrapped(channel, x as isize + dx, y as isize + dy));
            }
        }
        max
    }

    /// RGBA8 pixels, row-major, for `ImageData`.
    ///
    /// Colour comes from the first (up to three) input channels; a single input
    /// channel is shown as greyscale. The alpha channel, when present, tints
    /// the pixel towards the highlight colour.
    pub fn to_rgba(&self, input_channels: usize, alpha_channel: Option<usize>) -> Vec<u8> {
        const HIGHLIGHT: [f32; 3] = [0.23, 0.51, 0.96];
        let mut out = Vec::with_capacity(self.cell_count() * 4);
        for y in 0..self.size {
            for x in 0..self.size {
                let mut rgb = [0.0f32; 3];
                for (i, v) in rgb.iter_mut().enumerate() {
                    let c = if input_channels >= 3 { i } else { 0 };
                    *v = self.get(c, x, y).clamp(0.0, 1.0);
                }
                if let Some(a) = alpha_channel {
                    let t = self.get(a, x, y).clamp(0.0, 1.0) * 0.6;
                    for (v, h) in rgb.iter_mut().zip(HIGHLIGHT) {
                        *v = *v * (1.0 - t) + h * t;
                    }
                }
                out.extend(rgb.iter().map(|v| (v * 255.0).round() as u8));
                out.push(255);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_channel_major() {
        let mut grid = CellGrid::new(4, 2);
        grid.set(1, 2, 3, 5.0);
        assert_eq!(grid.plane(1)[3 * 4 + 2], 5.0);
        assert!(grid.plane(0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_wrapped_reads() {
        let mut grid = CellGrid::new(4, 1);
        grid.set(0, 3, 0, 1.0);
        assert_eq!(grid.get_wrapped(0, -1, 0), 1.0);
        assert_eq!(grid.get_wrapped(0, 3, 4), 1.0);
        assert_eq!(grid.get_wrapped(0, 7, -4), 1.0);
    }

    #[test]
    fn test_neighbourhood_max_wraps_across_edges() {
        let mut grid = CellGrid::new(8, 1);
        grid.set(0, 7, 7, 0.5);
        assert_eq!(grid.neighbourhood_max(0, 0, 0), 0.5);
        assert_eq!(grid.neighbourhood_max(0, 4, 4), 0.0);
    }

    #[test]
    fn test_rgba_buffer() {
        let mut grid = CellGrid::new(2, 4);
        grid.set(0, 0, 0, 1.0);
        grid.set(1, 1, 1, 2.0); // clamped
        let rgba = grid.to_rgba(3, None);
        assert_eq!(rgba.len(), 2 * 2 * 4);
        assert_eq!(&rgba[0..4], &[255, 0, 0, 255]);
        assert_eq!(&rgba[12..16], &[0, 255, 0, 255]);
    }

    #[test]
    fn test_alpha_tints_towards_highlight() {
        let mut grid = CellGrid::new(1, 4);
        let plain = grid.to_rgba(3, Some(3));
        grid.set(3, 0, 0, 1.0);
        let tinted = grid.to_rgba(3, Some(3));
        assert_eq!(&plain[0..3], &[0, 0, 0]);
        assert!(tinted[2] > tinted[0], "Tint should lean blue: {:?}", &tinted[0..3]);
    }

    #[test]
    fn test_clear_cell_keeps_input_channels() {
        let mut grid = CellGrid::new(2, 4);
        for c in 0..4 {
            grid.set(c, 1, 0, 1.0);
        }
        grid.clear_cell_from(3, 1, 0);
        assert_eq!(grid.get(2, 1, 0), 1.0);
        assert_eq!(grid.get(3, 1, 0), 0.0);
    }
}
