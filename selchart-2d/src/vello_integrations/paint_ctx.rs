use peniko::kurbo::{Affine, Shape};
use peniko::{BrushRef, Fill};
use vello::Scene;

use crate::{PaintCommand, PaintContext, PATH_TOLERANCE};

/// Encodes paint commands straight into a [vello::Scene].
pub struct VelloPaintContext<'a> {
    curr_transform: Affine,
    scene: &'a mut Scene,
}

impl<'a> VelloPaintContext<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self::with_base_transform(scene, Affine::IDENTITY)
    }

    pub fn with_base_transform(scene: &'a mut Scene, transform: Affine) -> Self {
        Self {
            curr_transform: transform,
            scene,
        }
    }

    /// Fills a shape using the specified style and brush.
    fn fill<'b>(
        &mut self,
        style: Fill,
        brush: impl Into<BrushRef<'b>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    ) {
        self.scene
            .fill(style, self.curr_transform, brush, brush_transform, shape);
    }
}

impl<'a> PaintContext for VelloPaintContext<'a> {
    #[inline(always)]
    fn add_command(&mut self, command: PaintCommand) {
        use PaintCommand::*;
        match command {
            DrawRingSector { sector, painter } => {
                let path = sector.to_path(PATH_TOLERANCE);
                self.fill(painter.fill, &painter.brush, painter.transform, &path);
            }
        }
    }

    #[inline(always)]
    fn with_transform(&mut self, transform: Affine, op: impl FnOnce(&mut Self)) {
        let new_transform = self.curr_transform * transform;
        let old_transform = std::mem::replace(&mut self.curr_transform, new_transform);
        op(self);
        self.curr_transform = old_transform;
    }
}
