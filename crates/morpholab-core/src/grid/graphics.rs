//! Rendering of simple shapes onto RGB grids
//!
//! All primitives take signed coordinates and clip silently at the grid
//! edge, so shapes may extend partially (or entirely) off the canvas.

use super::RgbGridMut;

/// An RGB color triple
pub type Rgb = (u8, u8, u8);

/// Generate the points of a 1-pixel line using Bresenham's algorithm.
///
/// Both endpoints are included.
pub fn generate_line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        points.push((x, y));
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

impl RgbGridMut {
    /// Set one pixel if it lies on the grid.
    #[inline]
    fn put_clipped(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.set_rgb_unchecked(x as u32, y as u32, color);
        }
    }

    /// Fill the inclusive rectangle spanned by two corners.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        let (xmin, xmax) = (x1.min(x2).max(0), x1.max(x2).min(self.width() as i32 - 1));
        let (ymin, ymax) = (y1.min(y2).max(0), y1.max(y2).min(self.height() as i32 - 1));
        for y in ymin..=ymax {
            for x in xmin..=xmax {
                self.set_rgb_unchecked(x as u32, y as u32, color);
            }
        }
    }

    /// Draw a rectangle outline with the given stroke width (inward).
    pub fn draw_rect_outline(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u32,
        color: Rgb,
    ) {
        if width == 0 {
            return;
        }
        let (xmin, xmax) = (x1.min(x2), x1.max(x2));
        let (ymin, ymax) = (y1.min(y2), y1.max(y2));
        let t = width as i32 - 1;
        self.fill_rect(xmin, ymin, xmax, ymin + t, color);
        self.fill_rect(xmin, ymax - t, xmax, ymax, color);
        self.fill_rect(xmin, ymin, xmin + t, ymax, color);
        self.fill_rect(xmax - t, ymin, xmax, ymax, color);
    }

    /// Fill a disk of the given radius.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
        let r = radius as i32;
        let r2 = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r2 {
                    self.put_clipped(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Fill the lower half (`y >= cy`) of an axis-aligned ellipse.
    pub fn fill_half_ellipse(&mut self, cx: i32, cy: i32, rx: u32, ry: u32, color: Rgb) {
        if rx == 0 || ry == 0 {
            return;
        }
        let (rxf, ryf) = (rx as f32, ry as f32);
        for dy in 0..=ry as i32 {
            for dx in -(rx as i32)..=rx as i32 {
                let u = dx as f32 / rxf;
                let v = dy as f32 / ryf;
                if u * u + v * v <= 1.0 {
                    self.put_clipped(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draw a line with the given stroke width.
    ///
    /// Widths above 1 stamp a disk of diameter `width` at each point.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: u32, color: Rgb) {
        let points = generate_line_points(x1, y1, x2, y2);
        if width <= 1 {
            for (x, y) in points {
                self.put_clipped(x, y, color);
            }
            return;
        }
        let radius = width / 2;
        for (x, y) in points {
            self.fill_circle(x, y, radius, color);
        }
    }

    /// Add a per-sample offset, saturating at 255.
    ///
    /// `offset(x, y, channel)` is called once per sample.
    pub fn add_saturating(&mut self, mut offset: impl FnMut(u32, u32, usize) -> u8) {
        let width = self.width() as usize;
        for (i, px) in self.data_mut().chunks_exact_mut(3).enumerate() {
            let (x, y) = ((i % width) as u32, (i / width) as u32);
            for (c, s) in px.iter_mut().enumerate() {
                *s = s.saturating_add(offset(x, y, c));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RgbGrid;

    const RED: Rgb = (255, 0, 0);

    #[test]
    fn test_line_points_endpoints() {
        let pts = generate_line_points(0, 0, 4, 2);
        assert_eq!(pts.first(), Some(&(0, 0)));
        assert_eq!(pts.last(), Some(&(4, 2)));
        assert_eq!(pts.len(), 5);

        let single = generate_line_points(3, 3, 3, 3);
        assert_eq!(single, vec![(3, 3)]);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut gm = RgbGridMut::new_filled(5, 5, (0, 0, 0)).unwrap();
        gm.fill_rect(-3, 3, 10, 10, RED);
        let grid: RgbGrid = gm.into();
        assert_eq!(grid.get_rgb(0, 4), Some(RED));
        assert_eq!(grid.get_rgb(4, 3), Some(RED));
        assert_eq!(grid.get_rgb(2, 2), Some((0, 0, 0)));
    }

    #[test]
    fn test_rect_outline_leaves_interior() {
        let mut gm = RgbGridMut::new_filled(7, 7, (0, 0, 0)).unwrap();
        gm.draw_rect_outline(0, 0, 6, 6, 2, RED);
        assert_eq!(gm.get_rgb(1, 1), Some(RED));
        assert_eq!(gm.get_rgb(5, 3), Some(RED));
        assert_eq!(gm.get_rgb(3, 3), Some((0, 0, 0)));
        assert_eq!(gm.get_rgb(2, 2), Some((0, 0, 0)));
    }

    #[test]
    fn test_fill_circle_shape() {
        let mut gm = RgbGridMut::new_filled(5, 5, (0, 0, 0)).unwrap();
        gm.fill_circle(2, 2, 1, RED);
        let grid: RgbGrid = gm.into();
        let red_count = grid.channel(crate::Channel::Red).count_value(255);
        assert_eq!(red_count, 5);
        assert_eq!(grid.get_rgb(1, 1), Some((0, 0, 0)));
    }

    #[test]
    fn test_half_ellipse_lower_only() {
        let mut gm = RgbGridMut::new_filled(9, 9, (0, 0, 0)).unwrap();
        gm.fill_half_ellipse(4, 4, 3, 2, RED);
        assert_eq!(gm.get_rgb(4, 3), Some((0, 0, 0)));
        assert_eq!(gm.get_rgb(4, 6), Some(RED));
        assert_eq!(gm.get_rgb(7, 4), Some(RED));
    }

    #[test]
    fn test_add_saturating() {
        let mut gm = RgbGridMut::new_filled(2, 1, (250, 0, 10)).unwrap();
        gm.add_saturating(|_, _, _| 10);
        assert_eq!(gm.get_rgb(1, 0), Some((255, 10, 20)));
    }
}
