use peniko::kurbo::{Affine, Point, Size, Vec2};
use peniko::Color;
use selchart_2d::{Circle, PaintContext, PaintContextExt, RingSector};
use selchart_core::{AnnularSector, SegmentLayout};

use crate::{AnimatedValue, AnimationFrame, AnimationSpec, ChartChanges, SelectablePieChart};

/// Where a segment is drawn at a given frame. Angles are in degrees, before chart rotation.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct SegmentGeometry {
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub thickness: f32,
    pub offset: f32,
    pub color: Color,
}

impl SegmentGeometry {
    pub fn median_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle / 2.0
    }

    fn radial_shift(&self) -> Vec2 {
        Vec2::from_angle((self.median_angle() as f64).to_radians()) * self.offset as f64
    }

    fn inner_radius(&self, outer_radius: f64) -> f64 {
        (outer_radius - self.thickness as f64).max(0.0)
    }

    fn ring_sector(&self, center: Point, outer_radius: f64) -> RingSector {
        RingSector {
            outer_circle: Circle {
                c: center + self.radial_shift(),
                r: outer_radius,
            },
            inner_radius: self.inner_radius(outer_radius),
            start_angle: (self.start_angle as f64).to_radians(),
            sweep_angle: (self.sweep_angle as f64).to_radians(),
        }
    }
}

#[derive(Debug)]
struct AnimatedSegment {
    start_angle: AnimatedValue<f32>,
    sweep_angle: AnimatedValue<f32>,
    thickness: AnimatedValue<f32>,
    offset: AnimatedValue<f32>,
    color: Color,
}

impl AnimatedSegment {
    /// A newly added segment grows out of its start angle.
    fn appear(layout: &SegmentLayout, spec: &AnimationSpec, frame: &AnimationFrame) -> Self {
        let mut sweep_angle = AnimatedValue::new(0.0);
        sweep_angle.animate_to(layout.sweep_angle, spec, frame);
        Self {
            start_angle: AnimatedValue::new(layout.start_angle),
            sweep_angle,
            thickness: AnimatedValue::new(layout.thickness),
            offset: AnimatedValue::new(layout.offset),
            color: layout.color,
        }
    }

    fn animate_to(
        &mut self,
        layout: &SegmentLayout,
        spec: &AnimationSpec,
        frame: &AnimationFrame,
    ) -> bool {
        let changed = [
            self.start_angle.animate_to(layout.start_angle, spec, frame),
            self.sweep_angle.animate_to(layout.sweep_angle, spec, frame),
            self.thickness.animate_to(layout.thickness, spec, frame),
            self.offset.animate_to(layout.offset, spec, frame),
            std::mem::replace(&mut self.color, layout.color) != layout.color,
        ];
        changed.iter().any(|&changed| changed)
    }

    fn geometry(&self, frame: &AnimationFrame) -> SegmentGeometry {
        SegmentGeometry {
            start_angle: self.start_angle.value(frame),
            sweep_angle: self.sweep_angle.value(frame),
            thickness: self.thickness.value(frame),
            offset: self.offset.value(frame),
            color: self.color,
        }
    }

    fn is_animating(&self, frame: &AnimationFrame) -> bool {
        self.start_angle.is_animating(frame)
            || self.sweep_angle.is_animating(frame)
            || self.thickness.is_animating(frame)
            || self.offset.is_animating(frame)
    }
}

/// Retained state behind a [SelectablePieChart]: the animated values of every segment and
/// of the chart rotation.
///
/// Segments are matched by position between updates.
#[derive(Debug, Default)]
pub struct PieChartState {
    segments: Vec<AnimatedSegment>,
    rotation: Option<AnimatedValue<f32>>,
    selected: Option<usize>,
}

impl PieChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The selection of the last update, after bounds checking.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Moves every animated value toward the layout of `widget`.
    pub fn update(&mut self, widget: &SelectablePieChart, frame: &AnimationFrame) -> ChartChanges {
        let Some(layout) = widget.layout() else {
            if self.segments.is_empty() && self.rotation.is_none() {
                return ChartChanges::empty();
            }
            tracing::debug!(frame = frame.frame_count, "Pie chart has no segments left");
            *self = Self::default();
            return ChartChanges::CLEARED;
        };

        let mut changes = ChartChanges::empty();
        let spec = &widget.segment_animation;
        if layout.segments.len() < self.segments.len() {
            tracing::debug!(
                from = self.segments.len(),
                to = layout.segments.len(),
                "Removing pie chart segments"
            );
            self.segments.truncate(layout.segments.len());
            changes |= ChartChanges::SEGMENTS_REMOVED;
        }
        for (index, target) in layout.segments.iter().enumerate() {
            match self.segments.get_mut(index) {
                Some(segment) => {
                    if segment.animate_to(target, spec, frame) {
                        tracing::trace!(index, "Retargeting pie chart segment");
                        changes |= ChartChanges::SEGMENTS_RETARGETED;
                    }
                }
                None => {
                    tracing::debug!(index, "Adding pie chart segment");
                    self.segments
                        .push(AnimatedSegment::appear(target, spec, frame));
                    changes |= ChartChanges::SEGMENTS_ADDED;
                }
            }
        }

        match &mut self.rotation {
            Some(rotation) => {
                if rotation.animate_to(layout.rotation, &widget.rotation_animation, frame) {
                    tracing::trace!(rotation = layout.rotation, "Retargeting pie chart rotation");
                    changes |= ChartChanges::ROTATION_RETARGETED;
                }
            }
            None => self.rotation = Some(AnimatedValue::new(layout.rotation)),
        }
        self.selected = layout.selected;
        changes
    }

    /// Whether painting a later frame would produce a different picture.
    pub fn is_animating(&self, frame: &AnimationFrame) -> bool {
        self.rotation
            .as_ref()
            .is_some_and(|rotation| rotation.is_animating(frame))
            || self
                .segments
                .iter()
                .any(|segment| segment.is_animating(frame))
    }

    /// Current chart rotation in degrees, if there is anything to draw.
    pub fn rotation(&self, frame: &AnimationFrame) -> Option<f32> {
        self.rotation.as_ref().map(|rotation| rotation.value(frame))
    }

    pub fn segment_geometry(&self, frame: &AnimationFrame) -> Vec<SegmentGeometry> {
        self.segments
            .iter()
            .map(|segment| segment.geometry(frame))
            .collect()
    }

    /// Paints the chart into the square formed by the shorter side of `size`, anchored at
    /// the origin of the paint context.
    pub fn paint(&self, paint_ctx: &mut impl PaintContext, size: Size, frame: &AnimationFrame) {
        let Some((center, outer_radius, rotation)) = self.frame_placement(size, frame) else {
            return;
        };
        paint_ctx.with_transform(Affine::rotate_about(rotation, center), |paint_ctx| {
            for geometry in self.segment_geometry(frame) {
                paint_ctx.fill_ring_sector(geometry.ring_sector(center, outer_radius), geometry.color);
            }
        });
    }

    /// The segment painted at `point`, in the same coordinates [Self::paint] draws in.
    pub fn segment_at(&self, point: Point, size: Size, frame: &AnimationFrame) -> Option<usize> {
        let (center, outer_radius, rotation) = self.frame_placement(size, frame)?;
        let unrotated = Affine::rotate_about(-rotation, center) * point;
        let geometry = self.segment_geometry(frame);
        // Later segments are painted on top.
        geometry.iter().enumerate().rev().find_map(|(index, geometry)| {
            let ring = geometry.ring_sector(center, outer_radius);
            // Only what paint draws can be hit.
            if ring.is_empty() {
                return None;
            }
            let local = unrotated - ring.outer_circle.c;
            let sector = AnnularSector {
                inner_radius: ring.inner_radius as f32,
                outer_radius: ring.outer_circle.r as f32,
                start_angle: ring.start_angle as f32,
                sweep_angle: ring.sweep_angle as f32,
            };
            sector
                .contains(local.x as f32, local.y as f32)
                .then_some(index)
        })
    }

    /// Center, outer radius and rotation in radians of the chart painted at `size`.
    fn frame_placement(&self, size: Size, frame: &AnimationFrame) -> Option<(Point, f64, f64)> {
        let rotation = self.rotation.as_ref()?.value(frame);
        if self.segments.is_empty() {
            return None;
        }
        let side = size.width.min(size.height);
        if !(side > 0.0) {
            return None;
        }
        let outer_radius = side / 2.0;
        Some((
            Point::new(outer_radius, outer_radius),
            outer_radius,
            (rotation as f64).to_radians(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use selchart_2d::{PaintCommand, RecordingPaintContext};
    use selchart_core::{AlignmentPolicy, ChartConfiguration, PieChartSegment, Selection};
    use AlignmentPolicy::*;

    use super::*;

    const EPSILON: f32 = 1e-3;
    const COLORS: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];

    fn chart(weights: &[f64], selected: Selection, policy: AlignmentPolicy) -> SelectablePieChart {
        SelectablePieChart::builder()
            .segments(
                weights
                    .iter()
                    .zip(COLORS.iter().cycle())
                    .map(|(&weight, &color)| PieChartSegment::new(weight, color))
                    .collect::<Vec<_>>(),
            )
            .selected(selected)
            .config(
                ChartConfiguration::builder()
                    .point_at_zero_degrees(policy)
                    .build(),
            )
            .build()
    }

    fn settle(frame: &AnimationFrame) -> AnimationFrame {
        frame.advance(Duration::from_secs(5))
    }

    fn assert_matches_layout(
        state: &PieChartState,
        widget: &SelectablePieChart,
        frame: &AnimationFrame,
    ) {
        let layout = widget.layout().unwrap();
        let geometry = state.segment_geometry(frame);
        assert_eq!(geometry.len(), layout.segments.len());
        for (actual, expected) in geometry.iter().zip(layout.segments.iter()) {
            assert!((actual.start_angle - expected.start_angle).abs() < EPSILON);
            assert!((actual.sweep_angle - expected.sweep_angle).abs() < EPSILON);
            assert!((actual.thickness - expected.thickness).abs() < EPSILON);
            assert!((actual.offset - expected.offset).abs() < EPSILON);
            assert_eq!(actual.color, expected.color);
        }
        let rotation = state.rotation(frame).unwrap();
        assert!((rotation - layout.rotation).abs() < EPSILON);
    }

    #[test]
    fn new_segments_grow_from_their_start_angle() {
        let frame = AnimationFrame::now(0);
        let widget = chart(&[0.2, 0.3, 0.5], Selection::NONE, StartOfFirstSegment);
        let mut state = PieChartState::new();
        assert_eq!(state.update(&widget, &frame), ChartChanges::SEGMENTS_ADDED);
        assert_eq!(state.len(), 3);

        let layout = widget.layout().unwrap();
        let geometry = state.segment_geometry(&frame);
        for (geometry, target) in geometry.iter().zip(layout.segments.iter()) {
            assert_eq!(geometry.sweep_angle, 0.0);
            assert_eq!(geometry.start_angle, target.start_angle);
            assert_eq!(geometry.thickness, target.thickness);
        }
        assert!(state.is_animating(&frame));
        // The first rotation is applied without animating.
        assert_eq!(state.rotation(&frame), Some(layout.rotation));

        let settled = settle(&frame);
        assert!(!state.is_animating(&settled));
        assert_matches_layout(&state, &widget, &settled);
    }

    #[test]
    fn identical_update_changes_nothing() {
        let frame = AnimationFrame::now(0);
        let widget = chart(&[1.0, 2.0], Selection::index(0), MiddleOfSelectedSegment);
        let mut state = PieChartState::new();
        state.update(&widget, &frame);
        let later = frame.advance(Duration::from_millis(16));
        assert_eq!(state.update(&widget, &later), ChartChanges::empty());
        assert!(!state.update(&widget, &later).needs_repaint());
    }

    #[test]
    fn adding_and_removing_segments() {
        let frame = AnimationFrame::now(0);
        let mut state = PieChartState::new();
        state.update(&chart(&[1.0; 3], Selection::NONE, StartOfFirstSegment), &frame);

        let settled = settle(&frame);
        let grown = chart(&[1.0; 4], Selection::NONE, StartOfFirstSegment);
        let changes = state.update(&grown, &settled);
        assert_eq!(
            changes,
            ChartChanges::SEGMENTS_ADDED | ChartChanges::SEGMENTS_RETARGETED
        );
        assert_eq!(state.len(), 4);
        let geometry = state.segment_geometry(&settled);
        assert_eq!(geometry[3].sweep_angle, 0.0);
        // Existing segments shrink from a third to a quarter of the circle.
        assert!((geometry[0].sweep_angle - (360.0 - 9.0) / 3.0).abs() < EPSILON);
        assert_matches_layout(&state, &grown, &settle(&settled));

        let later = settle(&settled);
        let shrunk = chart(&[1.0; 2], Selection::NONE, StartOfFirstSegment);
        let changes = state.update(&shrunk, &later);
        assert!(changes.contains(ChartChanges::SEGMENTS_REMOVED));
        assert!(!changes.contains(ChartChanges::SEGMENTS_ADDED));
        assert_eq!(state.len(), 2);
        assert_matches_layout(&state, &shrunk, &settle(&later));
    }

    #[test]
    fn empty_chart_clears_state() {
        let frame = AnimationFrame::now(0);
        let mut state = PieChartState::new();
        state.update(&chart(&[1.0, 2.0], Selection::index(1), StartOfFirstSegment), &frame);

        let empty = chart(&[], Selection::index(1), StartOfFirstSegment);
        assert_eq!(state.update(&empty, &frame), ChartChanges::CLEARED);
        assert!(state.is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(state.rotation(&frame), None);
        assert_eq!(state.update(&empty, &frame), ChartChanges::empty());

        let mut paint_ctx = RecordingPaintContext::new();
        state.paint(&mut paint_ctx, Size::new(100.0, 100.0), &frame);
        assert!(paint_ctx.commands().is_empty());
    }

    #[test]
    fn selection_change_moves_style_and_rotation() {
        let frame = AnimationFrame::now(0);
        let policy = MiddleOfSelectedSegment;
        let mut state = PieChartState::new();
        state.update(&chart(&[0.2, 0.3, 0.5], Selection::index(0), policy), &frame);

        let settled = settle(&frame);
        let reselected = chart(&[0.2, 0.3, 0.5], Selection::index(1), policy);
        let changes = state.update(&reselected, &settled);
        assert_eq!(
            changes,
            ChartChanges::SEGMENTS_RETARGETED | ChartChanges::ROTATION_RETARGETED
        );
        assert_eq!(state.selected(), Some(1));

        let midway = settled.advance(Duration::from_millis(250));
        assert!(state.is_animating(&midway));
        let done = settle(&settled);
        assert_matches_layout(&state, &reselected, &done);
        let geometry = state.segment_geometry(&done);
        assert_eq!(geometry[0].thickness, 34.0);
        assert_eq!(geometry[1].thickness, 40.0);
        assert_eq!(geometry[1].offset, 12.0);
    }

    #[test]
    fn out_of_range_selection_is_unselected() {
        let frame = AnimationFrame::now(0);
        let policy = EndOfSelectedSegment;
        let mut unselected = PieChartState::new();
        unselected.update(&chart(&[1.0, 2.0, 3.0], Selection::NONE, policy), &frame);
        let mut out_of_range = PieChartState::new();
        let widget = chart(&[1.0, 2.0, 3.0], Selection::index(7), policy);
        out_of_range.update(&widget, &frame);

        assert_eq!(out_of_range.selected(), None);
        let settled = settle(&frame);
        assert_eq!(
            unselected.segment_geometry(&settled),
            out_of_range.segment_geometry(&settled)
        );
        assert_eq!(unselected.rotation(&settled), Some(0.0));
        assert_eq!(out_of_range.rotation(&settled), Some(0.0));
    }

    #[test]
    fn paints_one_sector_per_segment() {
        let frame = AnimationFrame::now(0);
        let widget = chart(&[0.2, 0.3, 0.5], Selection::index(2), MiddleOfFirstSegment);
        let mut state = PieChartState::new();
        state.update(&widget, &frame);
        let settled = settle(&frame);

        let mut paint_ctx = RecordingPaintContext::new();
        state.paint(&mut paint_ctx, Size::new(200.0, 300.0), &settled);
        let commands = paint_ctx.commands();
        assert_eq!(commands.len(), 3);

        let center = Point::new(100.0, 100.0);
        let rotation = (widget.layout().unwrap().rotation as f64).to_radians();
        for (index, (transform, command)) in commands.iter().enumerate() {
            assert_eq!(*transform, Affine::rotate_about(rotation, center));
            let PaintCommand::DrawRingSector { sector, .. } = command;
            assert_eq!(sector.outer_circle.r, 100.0);
            let expected_inner = if index == 2 { 60.0 } else { 66.0 };
            assert!((sector.inner_radius - expected_inner).abs() < 1e-3);
            if index == 2 {
                assert!((sector.outer_circle.c - center).hypot() > 11.9);
            } else {
                assert_eq!(sector.outer_circle.c, center);
            }
        }
    }

    #[test]
    fn zero_size_paints_nothing() {
        let frame = AnimationFrame::now(0);
        let mut state = PieChartState::new();
        state.update(&chart(&[1.0], Selection::NONE, StartOfFirstSegment), &frame);
        let mut paint_ctx = RecordingPaintContext::new();
        state.paint(&mut paint_ctx, Size::new(0.0, 50.0), &frame);
        assert!(paint_ctx.commands().is_empty());
    }

    #[test]
    fn segment_at_inverts_paint() {
        let frame = AnimationFrame::now(0);
        let widget = chart(&[0.2, 0.3, 0.5], Selection::index(1), MiddleOfFirstSegment);
        let mut state = PieChartState::new();
        state.update(&widget, &frame);
        let settled = settle(&frame);

        let size = Size::new(200.0, 200.0);
        let center = Point::new(100.0, 100.0);
        let rotation = (state.rotation(&settled).unwrap() as f64).to_radians();
        for (index, geometry) in state.segment_geometry(&settled).iter().enumerate() {
            let median = (geometry.median_angle() as f64).to_radians();
            let radius = 100.0 - geometry.thickness as f64 / 2.0;
            let local = center + geometry.radial_shift() + Vec2::from_angle(median) * radius;
            let point = Affine::rotate_about(rotation, center) * local;
            assert_eq!(state.segment_at(point, size, &settled), Some(index));
        }
        assert_eq!(state.segment_at(center, size, &settled), None);
        assert_eq!(state.segment_at(Point::ZERO, size, &settled), None);
    }

    #[test]
    fn unpainted_segments_cannot_be_hit() {
        let frame = AnimationFrame::now(0);
        let widget = chart(&[0.5, 0.5], Selection::NONE, StartOfFirstSegment);
        let mut state = PieChartState::new();
        state.update(&widget, &frame);

        let size = Size::new(200.0, 200.0);
        let mut paint_ctx = RecordingPaintContext::new();
        state.paint(&mut paint_ctx, size, &frame);
        assert!(paint_ctx.commands().is_empty());

        // Every segment has just appeared with a zero sweep, so the rays at their start
        // angles are not painted.
        let center = Point::new(100.0, 100.0);
        for geometry in state.segment_geometry(&frame) {
            assert_eq!(geometry.sweep_angle, 0.0);
            let start = (geometry.start_angle as f64).to_radians();
            let on_start_ray = center + Vec2::from_angle(start) * 80.0;
            assert_eq!(state.segment_at(on_start_ray, size, &frame), None);
        }

        let settled = settle(&frame);
        let on_first = center + Vec2::from_angle(90f64.to_radians()) * 80.0;
        assert_eq!(state.segment_at(on_first, size, &settled), Some(0));
    }
}
