use log::debug;

use crate::entities::{NestInstance, Part};
use crate::error::{NestError, Result};
use crate::geometry::primitives::Polygon;
use crate::io::ext_repr::{ExtNestInstance, ExtPart, ExtShape};

/// Converts the external representation of an instance into an internal one,
/// validating every part on the way.
pub fn import_instance(ext_instance: &ExtNestInstance) -> Result<NestInstance> {
    let parts = ext_instance
        .parts
        .iter()
        .map(import_part)
        .collect::<Result<Vec<Part>>>()?;

    debug!(
        "[IMPORT] instance '{}': {} parts, {} instances",
        ext_instance.name,
        parts.len(),
        parts.iter().map(|p| p.quantity).sum::<usize>()
    );

    Ok(NestInstance::new(parts))
}

pub fn import_part(ext_part: &ExtPart) -> Result<Part> {
    match &ext_part.shape {
        ExtShape::Rectangle { width, height } => {
            let valid = |d: f64| d.is_finite() && d >= 0.0;
            if !(valid(*width) && valid(*height)) {
                return Err(NestError::InvalidPart {
                    id: ext_part.id.clone(),
                    reason: format!("invalid rectangle dimensions {width} x {height}"),
                });
            }
            Part::new(
                ext_part.id.clone(),
                Polygon::rectangle(*width, *height),
                ext_part.quantity,
            )
        }
        ExtShape::Polygon(coords) => Part::from_flat(ext_part.id.clone(), coords, ext_part.quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;

    fn ext_instance(json: &str) -> ExtNestInstance {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn imports_polygons_and_rectangles() {
        let ext = ext_instance(
            r#"{
                "name": "mixed",
                "parts": [
                    {"id": "tri", "quantity": 2, "shape": {"type": "polygon", "data": [0, 0, 10, 0, 0, 10]}},
                    {"id": "plate", "quantity": 1, "shape": {"type": "rectangle", "data": {"width": 30, "height": 20}}}
                ]
            }"#,
        );
        let instance = import_instance(&ext).unwrap();
        assert_eq!(instance.parts.len(), 2);
        assert_eq!(instance.part(0).shape.area(), 50.0);
        assert_eq!(instance.part(1).shape.area(), 600.0);
        assert_eq!(instance.total_part_qty(), 3);
    }

    #[test]
    fn rejects_zero_quantity() {
        let ext = ext_instance(
            r#"{"parts": [{"id": "x", "quantity": 0, "shape": {"type": "rectangle", "data": {"width": 1, "height": 1}}}]}"#,
        );
        assert!(matches!(
            import_instance(&ext),
            Err(NestError::InvalidPart { id, .. }) if id == "x"
        ));
    }

    #[test]
    fn rejects_odd_coordinate_sequences() {
        let ext = ext_instance(
            r#"{"parts": [{"id": "bad", "quantity": 1, "shape": {"type": "polygon", "data": [0, 0, 1]}}]}"#,
        );
        assert!(matches!(
            import_instance(&ext),
            Err(NestError::InvalidPart { id, .. }) if id == "bad"
        ));
    }

    #[test]
    fn rejects_negative_rectangles() {
        let ext = ext_instance(
            r#"{"parts": [{"id": "neg", "quantity": 1, "shape": {"type": "rectangle", "data": {"width": -1, "height": 1}}}]}"#,
        );
        assert!(import_instance(&ext).is_err());
    }
}
