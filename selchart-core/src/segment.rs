use peniko::Color;

/// A single weighted slice of a pie chart.
///
/// Weights are relative: they are normalized against the sum of all weights in the chart,
/// so `[1.0, 1.0]` and `[0.5, 0.5]` lay out identically.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct PieChartSegment {
    pub weight: f64,
    pub color: Color,
}

impl PieChartSegment {
    pub fn new(weight: f64, color: Color) -> Self {
        debug_assert!(
            weight.is_finite() && weight > 0.0,
            "Segment weight must be a positive finite number, got {weight}"
        );
        Self { weight, color }
    }
}

/// Which segment, if any, is currently selected.
///
/// An index that does not point at an existing segment is indistinguishable from no
/// selection at all; see [Selection::resolve].
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Selection(Option<usize>);

impl Selection {
    pub const NONE: Self = Self(None);

    pub fn index(index: usize) -> Self {
        Self(Some(index))
    }

    /// Accepts the signed convention where `-1` (or any negative value) means "nothing selected".
    pub fn from_raw(raw: i64) -> Self {
        Self(usize::try_from(raw).ok())
    }

    pub fn get(&self) -> Option<usize> {
        self.0
    }

    /// Drops the selection if it is out of bounds for a chart with `len` segments.
    pub fn resolve(self, len: usize) -> Option<usize> {
        self.0.filter(|&index| index < len)
    }
}

impl From<Option<usize>> for Selection {
    fn from(value: Option<usize>) -> Self {
        Self(value)
    }
}

impl From<usize> for Selection {
    fn from(value: usize) -> Self {
        Self(Some(value))
    }
}
