#[doc(inline)]
pub use geo_traits::Shape;

/// Set of traits for geometric primitives
pub mod geo_traits;

/// Set of geometric primitives: [`Point`](primitives::Point), [`Rect`](primitives::Rect), [`Polygon`](primitives::Polygon)
pub mod primitives;
