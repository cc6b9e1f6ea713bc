use selchart_core::{
    layout_segments, ChartConfiguration, PieChartLayout, PieChartSegment, Selection,
};
use typed_builder::TypedBuilder;

use crate::{AnimationSpec, DEFAULT_ROTATION_ANIMATION, DEFAULT_SEGMENT_ANIMATION};

/// Declarative description of a selectable pie chart.
///
/// A description is cheap to rebuild every time the application state changes; the
/// [crate::PieChartState] it is fed into takes care of animating between descriptions.
///
/// ```
/// use selchart_common::SelectablePieChart;
/// use selchart_core::{AlignmentPolicy, ChartConfiguration, Color, PieChartSegment};
///
/// let chart = SelectablePieChart::builder()
///     .segments(vec![
///         PieChartSegment::new(0.2, Color::RED),
///         PieChartSegment::new(0.8, Color::BLUE),
///     ])
///     .selected(1usize)
///     .config(
///         ChartConfiguration::builder()
///             .point_at_zero_degrees(AlignmentPolicy::MiddleOfSelectedSegment)
///             .build(),
///     )
///     .build();
/// assert_eq!(chart.layout().unwrap().segments.len(), 2);
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct SelectablePieChart {
    #[builder(setter(into))]
    pub segments: Vec<PieChartSegment>,
    #[builder(default, setter(into))]
    pub selected: Selection,
    #[builder(default)]
    pub config: ChartConfiguration,
    /// Animation of the chart-wide rotation when the alignment anchor moves.
    #[builder(default = DEFAULT_ROTATION_ANIMATION.clone())]
    pub rotation_animation: AnimationSpec,
    /// Animation of each segment's angles, thickness and offset.
    #[builder(default = DEFAULT_SEGMENT_ANIMATION.clone())]
    pub segment_animation: AnimationSpec,
}

impl SelectablePieChart {
    pub fn layout(&self) -> Option<PieChartLayout> {
        layout_segments(&self.segments, self.selected, &self.config)
    }
}
