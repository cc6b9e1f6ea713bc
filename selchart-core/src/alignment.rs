use crate::PieChartLayout;

/// Chooses which angular landmark of the chart lands at zero degrees (clockwise from the
/// positive x axis).
///
/// Policies that refer to the selected segment contribute no rotation when nothing is
/// selected.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub enum AlignmentPolicy {
    #[default]
    StartOfFirstSegment,
    MiddleOfFirstSegment,
    EndOfFirstSegment,
    StartOfSelectedSegment,
    MiddleOfSelectedSegment,
    EndOfSelectedSegment,
}

impl AlignmentPolicy {
    pub const ALL: [Self; 6] = [
        Self::StartOfFirstSegment,
        Self::MiddleOfFirstSegment,
        Self::EndOfFirstSegment,
        Self::StartOfSelectedSegment,
        Self::MiddleOfSelectedSegment,
        Self::EndOfSelectedSegment,
    ];

    /// Rotation in degrees that brings the anchor of this policy to zero, not including the
    /// base rotation of the chart.
    pub fn anchor_offset(&self, layout: &PieChartLayout) -> f32 {
        use AlignmentPolicy::*;
        let anchor = match self {
            StartOfFirstSegment | MiddleOfFirstSegment | EndOfFirstSegment => {
                layout.segments.first()
            }
            StartOfSelectedSegment | MiddleOfSelectedSegment | EndOfSelectedSegment => layout
                .selected
                .and_then(|index| layout.segments.get(index)),
        };
        let Some(anchor) = anchor else {
            return 0.0;
        };
        match self {
            StartOfFirstSegment => 0.0,
            MiddleOfFirstSegment => -(anchor.sweep_angle / 2.0),
            EndOfFirstSegment => -anchor.sweep_angle,
            StartOfSelectedSegment => -anchor.start_angle,
            MiddleOfSelectedSegment => -anchor.start_angle - anchor.sweep_angle / 2.0,
            EndOfSelectedSegment => -anchor.start_angle - anchor.sweep_angle,
        }
    }

    pub fn references_selection(&self) -> bool {
        matches!(
            self,
            Self::StartOfSelectedSegment
                | Self::MiddleOfSelectedSegment
                | Self::EndOfSelectedSegment
        )
    }
}
