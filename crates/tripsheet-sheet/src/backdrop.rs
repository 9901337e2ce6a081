use tripsheet_graphics::Color;

/// Dimming layer behind a sheet.
///
/// Opacity is derived from the sheet offset alone: `max_opacity` at OPEN,
/// zero at CLOSE, linear in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    max_opacity: f32,
    color: Color,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            max_opacity: 1.0,
            color: Color::BLACK,
        }
    }
}

impl Backdrop {
    pub fn new(color: Color, max_opacity: f32) -> Self {
        Self {
            max_opacity: max_opacity.clamp(0.0, 1.0),
            color,
        }
    }

    /// Linear interpolation of `offset` from `open` (1.0) to `close` (0.0),
    /// clamped to [0, 1]. A degenerate span, where CLOSE is not below OPEN,
    /// has nothing to dim and yields 0.0.
    pub fn progress(offset: f32, open: f32, close: f32) -> f32 {
        let span = close - open;
        if span <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        (1.0 - (offset - open) / span).clamp(0.0, 1.0)
    }

    pub fn opacity(&self, offset: f32, open: f32, close: f32) -> f32 {
        Self::progress(offset, open, close) * self.max_opacity
    }

    pub fn color(&self, offset: f32, open: f32, close: f32) -> Color {
        self.color.with_alpha(self.opacity(offset, open, close))
    }

    /// A fully transparent backdrop lets taps through to the screen.
    pub fn intercepts_taps(&self, offset: f32, open: f32, close: f32) -> bool {
        self.opacity(offset, open, close) > 0.0
    }
}

#[cfg(test)]
#[path = "tests/backdrop_tests.rs"]
mod tests;
