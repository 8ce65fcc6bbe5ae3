// Imports
use crate::transform::{Resizable, Transform};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The symbolic layout modes, with the integer values used in configuration files.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
)]
#[serde(rename = "align_mode")]
pub enum AlignMode {
    /// Leave the axis untouched.
    #[serde(rename = "default")]
    #[default]
    Default = 0,
    /// Align to the left edge.
    #[serde(rename = "left")]
    Left = 1,
    /// Align to the right edge.
    #[serde(rename = "right")]
    Right = 2,
    /// Center inside the region.
    #[serde(rename = "middle")]
    Middle = 3,
    /// Align to the top edge.
    #[serde(rename = "above")]
    Above = 4,
    /// Align to the bottom edge.
    #[serde(rename = "below")]
    Below = 5,
    /// Stretch over the region.
    #[serde(rename = "fill")]
    Fill = 6,
}

impl TryFrom<u32> for AlignMode {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .with_context(|| format!("AlignMode try_from::<u32>() for value {value} failed"))
    }
}

/// The alignment policy of one axis of a shape.
///
/// It decides where a shape is placed inside a containing region and how its position
/// compensates when its size changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "alignment")]
pub enum Alignment {
    /// No alignment. Sizes grow from the upper-left corner.
    #[serde(rename = "default")]
    #[default]
    Default,
    /// Aligned to the left or top edge.
    #[serde(rename = "left_above")]
    LeftAbove {
        /// Offset from the edge.
        #[serde(rename = "offset")]
        offset: f64,
    },
    /// Aligned to the right or bottom edge.
    #[serde(rename = "right_below")]
    RightBelow {
        /// Offset from the edge.
        #[serde(rename = "offset")]
        offset: f64,
    },
    /// Centered.
    #[serde(rename = "middle")]
    Middle {
        /// Offset from the center.
        #[serde(rename = "offset")]
        offset: f64,
    },
    /// Stretched from the start of the region to its end.
    #[serde(rename = "fill")]
    Fill {
        /// Offset of the start.
        #[serde(rename = "offset_1")]
        offset_1: f64,
        /// Offset of the end.
        #[serde(rename = "offset_2")]
        offset_2: f64,
    },
    /// Centered at a fraction of the region.
    #[serde(rename = "fraction")]
    Fraction {
        /// Offset from the fractional position.
        #[serde(rename = "offset")]
        offset: f64,
        /// Numerator of the fraction.
        #[serde(rename = "numerator")]
        numerator: f64,
        /// Denominator of the fraction.
        #[serde(rename = "denominator")]
        denominator: f64,
    },
}

impl From<AlignMode> for Alignment {
    fn from(mode: AlignMode) -> Self {
        Self::from_mode(mode)
    }
}

impl Alignment {
    /// The alignment for a symbolic mode, with zero offsets.
    pub fn from_mode(mode: AlignMode) -> Self {
        match mode {
            AlignMode::Default => Self::Default,
            AlignMode::Left | AlignMode::Above => Self::LeftAbove { offset: 0.0 },
            AlignMode::Right | AlignMode::Below => Self::RightBelow { offset: 0.0 },
            AlignMode::Middle => Self::Middle { offset: 0.0 },
            AlignMode::Fill => Self::Fill {
                offset_1: 0.0,
                offset_2: 0.0,
            },
        }
    }

    /// The alignment for an integer mode. Unrecognized values fall back to [Alignment::Default].
    pub fn from_u32(value: u32) -> Self {
        match AlignMode::try_from(value) {
            Ok(mode) => Self::from_mode(mode),
            Err(e) => {
                tracing::warn!(
                    "Invalid layout mode, falling back to the default alignment, Err: {e:?}"
                );
                Self::Default
            }
        }
    }

    /// A fraction alignment.
    pub fn fraction(offset: f64, numerator: f64, denominator: f64) -> Self {
        Self::Fraction {
            offset,
            numerator,
            denominator,
        }
    }

    /// The (first) offset. Zero for [Alignment::Default].
    pub fn offset(&self) -> f64 {
        match self {
            Self::Default => 0.0,
            Self::LeftAbove { offset }
            | Self::RightBelow { offset }
            | Self::Middle { offset }
            | Self::Fraction { offset, .. } => *offset,
            Self::Fill { offset_1, .. } => *offset_1,
        }
    }

    /// Whether this stretches the shape over the region.
    pub fn is_fill(&self) -> bool {
        matches!(self, Self::Fill { .. })
    }

    /// Whether this leaves the axis untouched.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// The aligned start coordinate of a shape with the given size inside the region `[start, start + total]`.
    ///
    /// `None` when the alignment does not position the shape.
    pub fn aligned_start(&self, size: f64, total: f64, start: f64) -> Option<f64> {
        match self {
            Self::Default => None,
            Self::LeftAbove { offset } => Some(offset + start),
            Self::RightBelow { offset } => Some(total - size + offset + start),
            Self::Middle { offset } => Some((total - size) * 0.5 + offset + start),
            Self::Fill { offset_1, .. } => Some(offset_1 + start),
            Self::Fraction {
                offset,
                numerator,
                denominator,
            } => Some(numerator / denominator * total - size * 0.5 + offset + start),
        }
    }

    /// The aligned size of a shape starting at `pos` inside the region `[start, start + total]`.
    ///
    /// `None` when the alignment does not size the shape.
    pub fn aligned_size(&self, pos: f64, total: f64, start: f64) -> Option<f64> {
        match self {
            Self::Fill { offset_2, .. } => Some(total - pos + offset_2 + start),
            _ => None,
        }
    }

    /// The position delta compensating a size change of `d_size`.
    pub fn resize_compensation(&self, d_size: f64) -> f64 {
        match self {
            Self::Default | Self::LeftAbove { .. } | Self::Fill { .. } => 0.0,
            Self::RightBelow { .. } => -d_size,
            Self::Middle { .. } => -d_size * 0.5,
            Self::Fraction {
                numerator,
                denominator,
                ..
            } => numerator * -d_size / denominator,
        }
    }

    /// Replace the (first) offset, returning the difference to the previous one.
    ///
    /// [Alignment::Default] has no offset, the difference is always zero.
    pub fn replace_offset(&mut self, new_offset: f64) -> f64 {
        match self {
            Self::Default => 0.0,
            Self::LeftAbove { offset }
            | Self::RightBelow { offset }
            | Self::Middle { offset }
            | Self::Fraction { offset, .. }
            | Self::Fill {
                offset_1: offset, ..
            } => {
                let delta = new_offset - *offset;
                *offset = new_offset;
                delta
            }
        }
    }

    /// Replace the second offset of [Alignment::Fill], returning the difference to the previous one.
    ///
    /// Other alignments have no second offset, the difference is always zero.
    pub fn replace_offset_2(&mut self, new_offset: f64) -> f64 {
        match self {
            Self::Fill { offset_2, .. } => {
                let delta = new_offset - *offset_2;
                *offset_2 = new_offset;
                delta
            }
            _ => 0.0,
        }
    }

    /// Align the x-axis of the shape inside the region `[x_start, x_start + total_width]`.
    pub fn align_x<S>(&self, shape: &mut S, total_width: f64, x_start: f64)
    where
        S: Resizable + ?Sized,
    {
        if let Some(x) = self.aligned_start(shape.width(), total_width, x_start) {
            shape.set_x(x);
        }
        if let Some(width) = self.aligned_size(shape.x(), total_width, x_start) {
            shape.set_width(width);
        }
    }

    /// Align the y-axis of the shape inside the region `[y_start, y_start + total_height]`.
    pub fn align_y<S>(&self, shape: &mut S, total_height: f64, y_start: f64)
    where
        S: Resizable + ?Sized,
    {
        if let Some(y) = self.aligned_start(shape.height(), total_height, y_start) {
            shape.set_y(y);
        }
        if let Some(height) = self.aligned_size(shape.y(), total_height, y_start) {
            shape.set_height(height);
        }
    }

    /// Align the x-axis of the shape inside the box.
    pub fn align_x_in<S>(&self, shape: &mut S, region: &Transform)
    where
        S: Resizable + ?Sized,
    {
        self.align_x(shape, region.width, region.x);
    }

    /// Align the y-axis of the shape inside the box.
    pub fn align_y_in<S>(&self, shape: &mut S, region: &Transform)
    where
        S: Resizable + ?Sized,
    {
        self.align_y(shape, region.height, region.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rect;
    use approx::assert_relative_eq;

    #[test]
    fn modes_from_integers() {
        assert_eq!(Alignment::from_u32(0), Alignment::Default);
        assert_eq!(Alignment::from_u32(1), Alignment::LeftAbove { offset: 0.0 });
        assert_eq!(Alignment::from_u32(4), Alignment::LeftAbove { offset: 0.0 });
        assert_eq!(Alignment::from_u32(2), Alignment::RightBelow { offset: 0.0 });
        assert_eq!(Alignment::from_u32(5), Alignment::RightBelow { offset: 0.0 });
        assert_eq!(Alignment::from_u32(3), Alignment::Middle { offset: 0.0 });
        assert!(Alignment::from_u32(6).is_fill());
        assert_eq!(Alignment::from_u32(42), Alignment::Default);
        assert!(AlignMode::try_from(7).is_err());
    }

    #[test]
    fn aligned_positions() {
        assert_eq!(Alignment::Default.aligned_start(10.0, 100.0, 5.0), None);
        assert_eq!(
            Alignment::LeftAbove { offset: 2.0 }.aligned_start(10.0, 100.0, 5.0),
            Some(7.0)
        );
        assert_eq!(
            Alignment::RightBelow { offset: 2.0 }.aligned_start(10.0, 100.0, 5.0),
            Some(97.0)
        );
        assert_eq!(
            Alignment::Middle { offset: 0.0 }.aligned_start(10.0, 100.0, 5.0),
            Some(50.0)
        );
        assert_eq!(
            Alignment::fraction(0.0, 1.0, 4.0).aligned_start(10.0, 100.0, 0.0),
            Some(20.0)
        );

        let fill = Alignment::Fill {
            offset_1: 10.0,
            offset_2: -10.0,
        };
        assert_eq!(fill.aligned_start(0.0, 100.0, 0.0), Some(10.0));
        assert_eq!(fill.aligned_size(10.0, 100.0, 0.0), Some(80.0));
    }

    #[test]
    fn resize_compensation() {
        assert_relative_eq!(Alignment::Default.resize_compensation(10.0), 0.0);
        assert_relative_eq!(Alignment::from_mode(AlignMode::Fill).resize_compensation(10.0), 0.0);
        assert_relative_eq!(
            Alignment::from_mode(AlignMode::Right).resize_compensation(10.0),
            -10.0
        );
        assert_relative_eq!(
            Alignment::from_mode(AlignMode::Middle).resize_compensation(10.0),
            -5.0
        );
        assert_relative_eq!(Alignment::fraction(0.0, 1.0, 4.0).resize_compensation(8.0), -2.0);
    }

    #[test]
    fn offsets_move_the_shape() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0, AlignMode::Right, AlignMode::Middle);
        rect.update_alignment(100.0, 100.0, 0.0, 0.0);
        assert_relative_eq!(rect.x(), 90.0);
        assert_relative_eq!(rect.y(), 45.0);

        rect.set_x_offset(-5.0);
        assert_relative_eq!(rect.x(), 85.0);
        assert_eq!(rect.x_mode(), Alignment::RightBelow { offset: -5.0 });

        // Re-aligning keeps the new offset.
        rect.update_alignment(100.0, 100.0, 0.0, 0.0);
        assert_relative_eq!(rect.x(), 85.0);
    }

    #[test]
    fn fill_stretches() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0, AlignMode::Fill, AlignMode::Default);
        rect.update_alignment(200.0, 100.0, 20.0, 0.0);
        assert_relative_eq!(rect.x(), 20.0);
        assert_relative_eq!(rect.width(), 200.0);

        rect.set_x_offset_2(-10.0);
        assert_relative_eq!(rect.width(), 190.0);
        rect.update_alignment(200.0, 100.0, 20.0, 0.0);
        assert_relative_eq!(rect.width(), 190.0);
    }
}
