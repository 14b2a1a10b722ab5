//! Hasse-diagram construction: grouping species by character set, drawing
//! cover edges between comparable groups, transitive reduction, and pruning
//! vertices already touched by an active species.

mod builder;
mod diagram;
mod edge;
mod reduce;
mod vertex;

pub use builder::build;
pub use diagram::HasseDiagram;
pub use edge::HasseEdge;
pub use reduce::reduce_diagram;
pub use vertex::{HasseVertex, HdvIdx};
