use super::Vec2;

/// Window content size in device pixels, as reported by the platform.
///
/// The UI divides this by its effective scale to get the logical space that
/// layout runs in.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Logical size after dividing by `scale`. Non-positive scales count as 1.
    #[inline]
    pub fn logical(self, scale: f32) -> Vec2 {
        let s = if scale > 0.0 { scale } else { 1.0 };
        Vec2::new(self.width / s, self.height / s)
    }
}
