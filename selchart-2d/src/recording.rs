use peniko::kurbo::Affine;

use crate::{PaintCommand, PaintContext};

/// Keeps every command together with the transform that was current when it was issued.
///
/// Useful for inspecting what a chart would draw without a GPU.
pub struct RecordingPaintContext {
    curr_transform: Affine,
    commands: Vec<(Affine, PaintCommand)>,
}

impl RecordingPaintContext {
    pub fn new() -> Self {
        Self {
            curr_transform: Affine::IDENTITY,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[(Affine, PaintCommand)] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<(Affine, PaintCommand)> {
        self.commands
    }
}

impl Default for RecordingPaintContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintContext for RecordingPaintContext {
    fn add_command(&mut self, command: PaintCommand) {
        self.commands.push((self.curr_transform, command));
    }

    fn with_transform(&mut self, transform: Affine, op: impl FnOnce(&mut Self)) {
        let new_transform = self.curr_transform * transform;
        let old_transform = std::mem::replace(&mut self.curr_transform, new_transform);
        op(self);
        self.curr_transform = old_transform;
    }
}
