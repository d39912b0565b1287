/// How a node sizes itself along one axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SizeSpec {
    /// Literal size in logical pixels.
    Fixed(f32),
    /// Percentage (0..=100) of the parent's content size.
    Percent(f32),
    /// Share of whatever the fixed and percent siblings leave over.
    Fill,
}

impl SizeSpec {
    #[inline]
    pub fn is_fill(self) -> bool {
        matches!(self, SizeSpec::Fill)
    }

    /// Resolves against `available`. `Fill` takes all of it.
    ///
    /// The result is never negative.
    #[inline]
    pub fn resolve(self, available: f32) -> f32 {
        let v = match self {
            SizeSpec::Fixed(px) => px,
            SizeSpec::Percent(p) => available * (p / 100.0),
            SizeSpec::Fill => available,
        };
        v.max(0.0)
    }
}

impl Default for SizeSpec {
    fn default() -> Self {
        SizeSpec::Fill
    }
}

/// Placement of children inside a container along one axis.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Offset of an item of `size` inside `space`.
    #[inline]
    pub fn offset(self, space: f32, size: f32) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Center => (space - size) / 2.0,
            Align::End => space - size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_exact_at_boundaries() {
        assert_eq!(SizeSpec::Percent(0.0).resolve(640.0), 0.0);
        assert_eq!(SizeSpec::Percent(100.0).resolve(640.0), 640.0);
        assert_eq!(SizeSpec::Percent(25.0).resolve(640.0), 160.0);
    }

    #[test]
    fn fill_takes_everything_and_fixed_ignores_parent() {
        assert_eq!(SizeSpec::Fill.resolve(300.0), 300.0);
        assert_eq!(SizeSpec::Fixed(42.0).resolve(10.0), 42.0);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        assert_eq!(SizeSpec::Fixed(-5.0).resolve(100.0), 0.0);
        assert_eq!(SizeSpec::Fill.resolve(-20.0), 0.0);
    }

    #[test]
    fn align_offsets() {
        assert_eq!(Align::Start.offset(100.0, 40.0), 0.0);
        assert_eq!(Align::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(Align::End.offset(100.0, 40.0), 60.0);
    }
}
