use crate::error::{NestError, Result};
use crate::geometry::Shape;
use crate::geometry::primitives::Polygon;

/// A caller-defined shape with the quantity in which it has to be placed.
/// Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    /// Opaque identifier chosen by the caller, reported back in every placement
    pub id: String,
    /// Prototype shape, placed rotated and translated
    pub shape: Polygon,
    /// Number of copies to place, always positive
    pub quantity: usize,
}

impl Part {
    pub fn new(id: impl Into<String>, shape: Polygon, quantity: usize) -> Result<Self> {
        let id = id.into();
        if quantity == 0 {
            return Err(NestError::InvalidPart {
                id,
                reason: "quantity must be positive".to_string(),
            });
        }
        if !shape.points.iter().all(|p| p.is_finite()) {
            return Err(NestError::InvalidPart {
                id,
                reason: "shape contains non-finite coordinates".to_string(),
            });
        }
        Ok(Part {
            id,
            shape,
            quantity,
        })
    }

    /// Creates a part from a flat coordinate sequence `[x0, y0, x1, y1, ...]`
    pub fn from_flat(id: impl Into<String>, coords: &[f64], quantity: usize) -> Result<Self> {
        let id = id.into();
        match Polygon::from_flat(coords) {
            Ok(shape) => Part::new(id, shape, quantity),
            Err(e) => Err(NestError::InvalidPart {
                id,
                reason: e.to_string(),
            }),
        }
    }

    /// Area of a single copy
    pub fn area(&self) -> f64 {
        self.shape.area()
    }
}
