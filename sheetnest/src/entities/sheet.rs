use crate::error::{NestError, Result};

/// A fixed-size rectangular surface on which parts are placed.
/// Sheets are identical and opened on demand, so a single [`Sheet`] describes all of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(NestError::InvalidConfiguration(format!(
                "sheet dimensions must be positive and finite, got {width} x {height}"
            )));
        }
        Ok(Sheet { width, height })
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether a footprint of `w` by `h` fits on an empty sheet
    pub fn fits(&self, w: f64, h: f64) -> bool {
        w <= self.width && h <= self.height
    }
}
