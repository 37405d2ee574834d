use std::fmt::Display;

/// Where and how a single part instance was placed
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Identifier of the source part
    pub part_id: String,
    /// Index of the source part in the submitted part list
    pub part_idx: usize,
    /// Index of the sheet, in order of creation
    pub sheet_index: usize,
    /// Lower-left corner of the rotated (padded) bounding box
    pub x: f64,
    pub y: f64,
    /// Rotation in radians, applied around the center of the part's bounding box
    pub rotation: f64,
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ sheet {}: ({:.3}, {:.3}), r: {:.3}°",
            self.part_id,
            self.sheet_index,
            self.x,
            self.y,
            self.rotation.to_degrees()
        )
    }
}
