use peniko::kurbo::Affine;
use peniko::{Brush, Color, Fill};

use crate::RingSector;

#[derive(Clone, Debug)]
pub enum PaintCommand {
    DrawRingSector {
        sector: RingSector,
        painter: FillPainter,
    },
}

#[derive(Clone, Debug)]
pub struct FillPainter {
    pub fill: Fill,
    pub brush: Brush,
    pub transform: Option<Affine>,
}

impl FillPainter {
    pub fn solid(color: Color) -> Self {
        Self {
            fill: Fill::NonZero,
            brush: Brush::Solid(color),
            transform: None,
        }
    }
}

/// A sink for paint commands with a current transform stack.
pub trait PaintContext {
    fn add_command(&mut self, command: PaintCommand);

    /// Runs `op` with `transform` applied after the current transform.
    fn with_transform(&mut self, transform: Affine, op: impl FnOnce(&mut Self));
}

pub trait PaintContextExt {
    fn draw_ring_sector(&mut self, sector: RingSector, painter: FillPainter);

    fn fill_ring_sector(&mut self, sector: RingSector, color: Color) {
        self.draw_ring_sector(sector, FillPainter::solid(color))
    }
}

impl<T> PaintContextExt for T
where
    T: PaintContext,
{
    #[inline(always)]
    fn draw_ring_sector(&mut self, sector: RingSector, painter: FillPainter) {
        if sector.is_empty() {
            tracing::trace!(?sector, "Skipping empty ring sector");
            return;
        }
        self.add_command(PaintCommand::DrawRingSector { sector, painter })
    }
}
