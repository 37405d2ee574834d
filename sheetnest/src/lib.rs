//! Geometry and entities for nesting 2D polygonal parts onto fixed-size rectangular sheets.
//!
//! This crate holds everything the optimizers share: polygon primitives, the [`Part`](entities::Part)
//! and [`NestInstance`](entities::NestInstance) model, the result containers and the serializable
//! external representations used to get instances in and solutions out.

/// Everything related to geometry
pub mod geometry;

/// Entities to model nesting problems and their results
pub mod entities;

/// Importing and exporting problems and results
pub mod io;

/// Error types shared by the library and the optimizers
pub mod error;

/// Helper functions which do not belong to any specific module
pub mod util;
