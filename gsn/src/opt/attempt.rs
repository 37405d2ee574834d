use itertools::Itertools;
use sheetnest::entities::{NestInstance, PartInstance};
use sheetnest::geometry::Shape;
use sheetnest::geometry::primitives::Point;

/// An instance placed during an attempt
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedInstance {
    pub instance: PartInstance,
    pub sheet_index: usize,
    pub anchor: Point,
    pub rotation: f64,
}

/// Outcome of a single run of a [`PlacementHeuristic`] over one ordering of the instances
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attempt {
    /// Placements in the order the instances were placed
    pub placed: Vec<PlacedInstance>,
    /// Number of sheets opened during the attempt
    pub n_sheets: usize,
    /// Instances which fit on no sheet in any rotation
    pub n_dropped: usize,
}

/// Assigns every instance of an ordering a sheet, an anchor and a rotation,
/// opening new sheets on demand. Every call starts from an empty set of sheets.
pub trait PlacementHeuristic {
    fn place_all(&self, order: &[PartInstance]) -> Attempt;
}

/// Rotated bounding box dimensions (without spacing) of every part in every allowed rotation.
/// Rotating a prototype always yields the same bounds, so they are computed once per search.
#[derive(Clone, Debug)]
pub struct Footprints {
    pub rotations: Vec<f64>,
    /// `dims[part_idx][rotation_idx] = (width, height)`
    dims: Vec<Vec<(f64, f64)>>,
}

impl Footprints {
    pub fn new(instance: &NestInstance, rotations: Vec<f64>) -> Self {
        let dims = instance
            .parts
            .iter()
            .map(|part| {
                rotations
                    .iter()
                    .map(|&r| {
                        let bbox = part.shape.rotate(r).bbox();
                        (bbox.width(), bbox.height())
                    })
                    .collect_vec()
            })
            .collect_vec();
        Self { rotations, dims }
    }

    /// Iterates over `(rotation, width, height)` of a part, in rotation order
    pub fn of_part(&self, part_idx: usize) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.rotations
            .iter()
            .zip(self.dims[part_idx].iter())
            .map(|(&r, &(w, h))| (r, w, h))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use float_cmp::approx_eq;
    use sheetnest::entities::Part;
    use sheetnest::geometry::primitives::Polygon;

    use super::*;

    #[test]
    fn footprints_follow_rotations() {
        let instance =
            NestInstance::new(vec![Part::new("bar", Polygon::rectangle(40.0, 10.0), 1).unwrap()]);
        let footprints = Footprints::new(&instance, vec![0.0, FRAC_PI_2]);
        let dims = footprints.of_part(0).collect_vec();
        assert_eq!(dims.len(), 2);
        assert_eq!(dims[0], (0.0, 40.0, 10.0));
        let (r, w, h) = dims[1];
        assert_eq!(r, FRAC_PI_2);
        assert!(approx_eq!(f64, w, 10.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, h, 40.0, epsilon = 1e-9));
    }
}
