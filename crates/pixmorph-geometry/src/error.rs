/// An error type for the geometry primitives.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The segment has coincident endpoints and defines no frame.
    #[error("segment has zero length")]
    DegenerateSegment,

    /// The operation has no defined behavior yet.
    #[error("{0}: method undefined")]
    Unimplemented(&'static str),
}
