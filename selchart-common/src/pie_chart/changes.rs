bitflags::bitflags! {
    /// What a [crate::PieChartState::update] call changed.
    #[derive(PartialEq, Eq, Clone, Copy, Debug)]
    pub struct ChartChanges: u8 {
        const SEGMENTS_ADDED = 1;
        const SEGMENTS_REMOVED = 1 << 1;
        const SEGMENTS_RETARGETED = 1 << 2;
        const ROTATION_RETARGETED = 1 << 3;
        const CLEARED = 1 << 4;
    }
}

impl ChartChanges {
    /// Whether the chart looks different from the previously painted frame, animations aside.
    pub fn needs_repaint(&self) -> bool {
        !self.is_empty()
    }
}
