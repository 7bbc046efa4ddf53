//! Structuring element for morphological operations
//!
//! A structuring element defines the neighborhood used by erosion,
//! dilation and everything derived from them. It is a square boolean
//! mask of odd side `size` whose center cell is the origin.
//!
//! Membership rules, with `c = (size - 1) / 2` and `(dx, dy)` measured
//! from the center:
//!
//! - **Rectangle**: every cell
//! - **Ellipse**: `(dx / c)^2 + (dy / c)^2 <= 1`, i.e. the inscribed disk
//!   `dx^2 + dy^2 <= c^2` (evaluated in integers)
//! - **Cross**: `dx == 0 || dy == 0`
//!
//! All three shapes contain the origin and are symmetric under 180-degree
//! rotation, so reflection never changes an element.

use crate::{MorphError, MorphResult};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Shape of a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementShape {
    /// Full `size x size` square
    #[default]
    Rectangle,
    /// Disk inscribed in the square
    Ellipse,
    /// Plus sign through the center
    Cross,
}

impl ElementShape {
    /// Every supported shape.
    pub const ALL: [ElementShape; 3] = [
        ElementShape::Rectangle,
        ElementShape::Ellipse,
        ElementShape::Cross,
    ];

    /// Configuration tag (`rect`, `ellipse`, `cross`).
    pub fn tag(self) -> &'static str {
        match self {
            ElementShape::Rectangle => "rect",
            ElementShape::Ellipse => "ellipse",
            ElementShape::Cross => "cross",
        }
    }
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementShape {
    type Err = MorphError;

    /// Parse a shape tag, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::UnsupportedShape`] for any other tag.
    fn from_str(s: &str) -> MorphResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Ok(ElementShape::Rectangle),
            "ellipse" => Ok(ElementShape::Ellipse),
            "cross" => Ok(ElementShape::Cross),
            _ => Err(MorphError::UnsupportedShape(s.to_string())),
        }
    }
}

/// Map an even size to the next odd one; odd sizes pass through.
///
/// This is a caller-side policy applied before
/// [`StructuringElement::new`], which itself only accepts odd sizes.
/// Zero is returned unchanged so that the constructor still rejects it.
pub fn normalize_size(size: u32) -> u32 {
    if size != 0 && size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

/// Structuring element
///
/// The offset list is built on first use and cached.
#[derive(Debug, Clone)]
pub struct StructuringElement {
    shape: ElementShape,
    size: u32,
    mask: Vec<bool>,
    offsets: OnceLock<Vec<(i32, i32)>>,
}

impl StructuringElement {
    /// Create an element of the given shape and odd size.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidElement`] if `size` is 0 or even.
    /// Normalize with [`normalize_size`] first when the size comes from
    /// user input.
    pub fn new(shape: ElementShape, size: u32) -> MorphResult<Self> {
        if size == 0 {
            return Err(MorphError::InvalidElement(
                "size must be a positive integer".to_string(),
            ));
        }
        if size % 2 == 0 {
            return Err(MorphError::InvalidElement(format!(
                "size must be odd, got {size} (normalize to {})",
                size + 1
            )));
        }

        let c = ((size - 1) / 2) as i64;
        let mut mask = Vec::with_capacity(size as usize * size as usize);
        for y in 0..size as i64 {
            for x in 0..size as i64 {
                let (dx, dy) = (x - c, y - c);
                let member = match shape {
                    ElementShape::Rectangle => true,
                    ElementShape::Ellipse => dx * dx + dy * dy <= c * c,
                    ElementShape::Cross => dx == 0 || dy == 0,
                };
                mask.push(member);
            }
        }

        log::debug!("built {shape} element of size {size}");
        Ok(StructuringElement {
            shape,
            size,
            mask,
            offsets: OnceLock::new(),
        })
    }

    /// Build an element from raw configuration values.
    ///
    /// Parses the shape tag, rejects non-positive sizes and normalizes an
    /// even size to the next odd one.
    ///
    /// # Errors
    ///
    /// - [`MorphError::UnsupportedShape`] for an unknown tag
    /// - [`MorphError::InvalidElement`] for `size <= 0`
    pub fn from_config(shape: &str, size: i64) -> MorphResult<Self> {
        let shape: ElementShape = shape.parse()?;
        if size <= 0 {
            return Err(MorphError::InvalidElement(format!(
                "size must be a positive integer, got {size}"
            )));
        }
        let size = u32::try_from(size)
            .map_err(|_| MorphError::InvalidElement(format!("size {size} is too large")))?;
        Self::new(shape, normalize_size(size))
    }

    /// Square element (alias of `new(Rectangle, size)`).
    pub fn rectangle(size: u32) -> MorphResult<Self> {
        Self::new(ElementShape::Rectangle, size)
    }

    /// Disk element (alias of `new(Ellipse, size)`).
    pub fn ellipse(size: u32) -> MorphResult<Self> {
        Self::new(ElementShape::Ellipse, size)
    }

    /// Plus-sign element (alias of `new(Cross, size)`).
    pub fn cross(size: u32) -> MorphResult<Self> {
        Self::new(ElementShape::Cross, size)
    }

    /// Get the shape.
    #[inline]
    pub fn shape(&self) -> ElementShape {
        self.shape
    }

    /// Get the side length of the mask.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center to the mask edge, `(size - 1) / 2`.
    #[inline]
    pub fn radius(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Row-major `size x size` membership mask.
    #[inline]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Check membership of mask cell `(x, y)`; `false` outside the mask.
    pub fn is_member(&self, x: u32, y: u32) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.mask[(y * self.size + x) as usize]
    }

    /// Number of member cells.
    pub fn member_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// `(dx, dy)` offsets of the member cells relative to the origin, in
    /// row-major order.
    pub fn offsets(&self) -> &[(i32, i32)] {
        self.offsets.get_or_init(|| {
            let c = self.radius() as i32;
            let size = self.size;
            self.mask
                .iter()
                .enumerate()
                .filter(|&(_, &m)| m)
                .map(|(idx, _)| {
                    let x = (idx as u32 % size) as i32;
                    let y = (idx as u32 / size) as i32;
                    (x - c, y - c)
                })
                .collect()
        })
    }

    /// Check whether an offset from the origin is a member.
    pub fn contains_offset(&self, dx: i32, dy: i32) -> bool {
        let c = self.radius() as i32;
        let (x, y) = (dx + c, dy + c);
        x >= 0 && y >= 0 && self.is_member(x as u32, y as u32)
    }
}

impl PartialEq for StructuringElement {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.size == other.size
    }
}

impl Eq for StructuringElement {}

impl fmt::Display for StructuringElement {
    /// One text row per mask row: `x` for members, `.` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.mask.chunks(self.size as usize) {
            let line: String = row.iter().map(|&m| if m { 'x' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
