use typed_builder::TypedBuilder;

use crate::AlignmentPolicy;

/// Ring thickness and radial displacement of a segment in one selection state.
///
/// Both values are in the same logical units as the size the chart is painted at.
#[derive(PartialEq, Clone, Copy, Debug, TypedBuilder)]
pub struct SegmentStyle {
    pub thickness: f32,
    #[builder(default = 0.0)]
    pub offset: f32,
}

impl SegmentStyle {
    pub const NORMAL: Self = Self {
        thickness: 34.0,
        offset: 0.0,
    };

    pub const SELECTED: Self = Self {
        thickness: 40.0,
        offset: 12.0,
    };
}

#[derive(PartialEq, Clone, Debug, TypedBuilder)]
pub struct ChartConfiguration {
    /// Gap left after every segment, in degrees.
    #[builder(default = 3.0)]
    pub space_between_segments: f32,
    /// Clockwise rotation applied on top of the alignment policy, in degrees.
    #[builder(default = 0.0)]
    pub rotation: f32,
    /// Which landmark of the chart is placed at zero degrees.
    #[builder(default = AlignmentPolicy::StartOfFirstSegment)]
    pub point_at_zero_degrees: AlignmentPolicy,
    #[builder(default = SegmentStyle::NORMAL)]
    pub normal: SegmentStyle,
    #[builder(default = SegmentStyle::SELECTED)]
    pub selected: SegmentStyle,
}

impl ChartConfiguration {
    pub fn style_for(&self, is_selected: bool) -> SegmentStyle {
        if is_selected {
            self.selected
        } else {
            self.normal
        }
    }
}

impl Default for ChartConfiguration {
    fn default() -> Self {
        Self::builder().build()
    }
}
