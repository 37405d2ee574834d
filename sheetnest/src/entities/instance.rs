use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::Part;

/// One concrete copy of a [`Part`] to be placed.
/// Copies of the same part are only distinguished by their position in the working list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartInstance {
    /// Index of the source part in the [`NestInstance`]
    pub part_idx: usize,
}

/// The static description of a nesting problem: the parts with their quantities.
#[derive(Clone, Debug, Default)]
pub struct NestInstance {
    pub parts: Vec<Part>,
}

impl NestInstance {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn part(&self, idx: usize) -> &Part {
        &self.parts[idx]
    }

    /// Prototype shape area of a single instance
    pub fn instance_area(&self, pi: PartInstance) -> f64 {
        self.parts[pi.part_idx].area()
    }

    /// Total number of copies to place
    pub fn total_part_qty(&self) -> usize {
        self.parts.iter().map(|p| p.quantity).sum()
    }

    /// Summed area of all copies of all parts
    pub fn total_part_area(&self) -> f64 {
        self.parts
            .iter()
            .map(|p| p.area() * p.quantity as f64)
            .sum()
    }

    /// Expands every part into `quantity` instances, copies of a part contiguous and in
    /// submission order, then sorts them by descending prototype area (largest first).
    /// The sort is stable: instances with equal area keep their relative order.
    pub fn expand(&self) -> Vec<PartInstance> {
        self.parts
            .iter()
            .enumerate()
            .flat_map(|(part_idx, part)| {
                std::iter::repeat_n(PartInstance { part_idx }, part.quantity)
            })
            .sorted_by_cached_key(|pi| Reverse(OrderedFloat(self.instance_area(*pi))))
            .collect_vec()
    }
}
