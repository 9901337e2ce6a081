use tripsheet_graphics::EdgeInsets;

use crate::config::SheetHeight;
use crate::error::SheetError;

/// The two resting offsets of a sheet and the geometry they derive from.
///
/// Offsets grow downward: OPEN is the fully shown panel, CLOSE translates
/// it just past the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionModel {
    mode: SheetHeight,
    open: f32,
    height: f32,
    bottom_inset: f32,
}

impl PositionModel {
    pub fn new(mode: SheetHeight, open: f32, safe_area: EdgeInsets) -> Self {
        let height = match mode {
            SheetHeight::Measured { initial } => initial,
            SheetHeight::Fixed(height) => height,
        };
        Self {
            mode,
            open,
            height: height.max(0.0),
            bottom_inset: safe_area.bottom.max(0.0),
        }
    }

    pub fn open(&self) -> f32 {
        self.open
    }

    pub fn close(&self) -> f32 {
        let close = match self.mode {
            SheetHeight::Measured { .. } => self.height + self.bottom_inset,
            SheetHeight::Fixed(height) => height,
        };
        close.max(self.open)
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bottom_inset(&self) -> f32 {
        self.bottom_inset
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.open, self.close())
    }

    /// Record a measured panel height. Fixed sheets keep their own height.
    ///
    /// Returns whether CLOSE moved.
    pub fn set_measured_height(&mut self, height: f32) -> Result<bool, SheetError> {
        if !height.is_finite() || height < 0.0 {
            return Err(SheetError::InvalidGeometry {
                what: "height",
                value: height,
            });
        }
        if matches!(self.mode, SheetHeight::Fixed(_)) {
            return Ok(false);
        }
        if height == 0.0 {
            log::warn!(
                "sheet measured at zero height; CLOSE falls back to the {}px inset",
                self.bottom_inset
            );
        }
        let before = self.close();
        self.height = height;
        Ok(self.close() != before)
    }

    /// Record new safe-area insets. Returns whether CLOSE moved.
    pub fn set_safe_area(&mut self, safe_area: EdgeInsets) -> Result<bool, SheetError> {
        if !safe_area.bottom.is_finite() || safe_area.bottom < 0.0 {
            return Err(SheetError::InvalidGeometry {
                what: "bottom inset",
                value: safe_area.bottom,
            });
        }
        let before = self.close();
        self.bottom_inset = safe_area.bottom;
        Ok(self.close() != before)
    }
}
