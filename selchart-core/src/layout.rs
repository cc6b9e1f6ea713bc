use peniko::Color;
use smallvec::SmallVec;

use crate::{ChartConfiguration, PieChartSegment, Selection, MAX_DEGREES};

/// Resolved placement of one segment. Angles are in degrees, clockwise from the positive
/// x axis, before the chart-wide [PieChartLayout::rotation] is applied.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct SegmentLayout {
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub thickness: f32,
    pub offset: f32,
    pub color: Color,
}

impl SegmentLayout {
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    pub fn median_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle / 2.0
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct PieChartLayout {
    pub segments: SmallVec<[SegmentLayout; 8]>,
    /// Chart-wide clockwise rotation in degrees, base rotation included.
    pub rotation: f32,
    /// The selection after bounds checking.
    pub selected: Option<usize>,
}

/// Assigns every segment its angular span and style, then resolves the chart rotation
/// from the configured [crate::AlignmentPolicy].
///
/// Returns `None` when there is nothing to draw.
pub fn layout_segments(
    segments: &[PieChartSegment],
    selected: impl Into<Selection>,
    config: &ChartConfiguration,
) -> Option<PieChartLayout> {
    if segments.is_empty() {
        return None;
    }
    let selection = selected.into();
    let selected = selection.resolve(segments.len());
    if selected.is_none() {
        if let Some(index) = selection.get() {
            tracing::debug!(
                index,
                len = segments.len(),
                "Selected segment index is out of bounds, treating the chart as unselected"
            );
        }
    }

    let total_weight: f64 = segments.iter().map(|segment| segment.weight).sum();
    if !(total_weight > 0.0 && total_weight.is_finite()) {
        tracing::warn!(total_weight, "Pie chart weights do not sum to a positive number");
        return None;
    }
    let spacing = config.space_between_segments;
    let pure_segments_space = (MAX_DEGREES - segments.len() as f32 * spacing) as f64;

    let mut next_start_angle = 0.0f32;
    let segments = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let sweep_angle = (segment.weight / total_weight * pure_segments_space) as f32;
            let style = config.style_for(selected == Some(index));
            let start_angle = next_start_angle;
            next_start_angle += sweep_angle + spacing;
            SegmentLayout {
                start_angle,
                sweep_angle,
                thickness: style.thickness,
                offset: style.offset,
                color: segment.color,
            }
        })
        .collect();

    let mut layout = PieChartLayout {
        segments,
        rotation: config.rotation,
        selected,
    };
    layout.rotation += config.point_at_zero_degrees.anchor_offset(&layout);
    Some(layout)
}
