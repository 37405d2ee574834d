use serde::{Deserialize, Serialize};

/// External representation of a [`NestInstance`](crate::entities::NestInstance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// Set of parts to be placed
    pub parts: Vec<ExtPart>,
}

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    /// Identifier of the part, echoed back in every placement
    pub id: String,
    /// Number of copies to place
    pub quantity: usize,
    /// Shape of the part
    pub shape: ExtShape,
}

/// Various ways to represent the shape of a part
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Axis-aligned rectangle with its lower-left corner at the origin
    Rectangle { width: f64, height: f64 },
    /// Polygon as a flat coordinate sequence `[x0, y0, x1, y1, ...]`, implicitly closed
    Polygon(Vec<f64>),
}

/// External representation of a [`NestResult`](crate::entities::NestResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestSolution {
    pub placements: Vec<ExtPlacement>,
    pub sheets_used: usize,
    /// Used area over sheet area, per sheet
    pub utilization: Vec<f64>,
    pub iterations_run: usize,
    /// Instances which could not be placed
    pub n_dropped: usize,
    /// Score of the selected attempt: all part area over all opened sheet area
    pub best_attempt_utilization: f64,
    pub run_time_sec: u64,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub part_id: String,
    pub sheet_index: usize,
    /// Lower-left corner of the rotated bounding box
    pub x: f64,
    pub y: f64,
    /// The rotation angle in radians
    pub rotation: f64,
}
