use peniko::kurbo::{Arc, BezPath, Point, Rect, Vec2};

#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Circle {
    pub c: Point,
    pub r: f64,
}

impl Circle {
    pub fn point_at(&self, angle: f64) -> Point {
        self.c + Vec2::from_angle(angle) * self.r
    }
}

/// Area between the outer circle and a concentric inner circle, cut to an angular span.
///
/// Angles are in radians, clockwise on a y-down canvas.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct RingSector {
    pub outer_circle: Circle,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl RingSector {
    pub fn inner_circle(&self) -> Circle {
        Circle {
            c: self.outer_circle.c,
            r: self.inner_radius.max(0.0),
        }
    }

    /// Nothing would be filled by this sector.
    pub fn is_empty(&self) -> bool {
        !(self.sweep_angle.abs() > 0.0) || !(self.inner_radius.max(0.0) < self.outer_circle.r)
    }

    /// Outer arc over the sweep, then the inner arc back from the end of the sweep to its
    /// start, joined into one closed path.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        let outer = self.outer_circle;
        let inner = self.inner_circle();
        let end_angle = self.start_angle + self.sweep_angle;

        let mut path = BezPath::new();
        path.move_to(outer.point_at(self.start_angle));
        path.extend(
            Arc {
                center: outer.c,
                radii: Vec2::new(outer.r, outer.r),
                start_angle: self.start_angle,
                sweep_angle: self.sweep_angle,
                x_rotation: 0.0,
            }
            .append_iter(tolerance),
        );
        path.line_to(inner.point_at(end_angle));
        if inner.r > 0.0 {
            path.extend(
                Arc {
                    center: inner.c,
                    radii: Vec2::new(inner.r, inner.r),
                    start_angle: end_angle,
                    sweep_angle: -self.sweep_angle,
                    x_rotation: 0.0,
                }
                .append_iter(tolerance),
            );
        }
        path.close_path();
        path
    }

    pub fn bounding_box(&self) -> Rect {
        use peniko::kurbo::Shape;
        self.to_path(crate::PATH_TOLERANCE).bounding_box()
    }
}
