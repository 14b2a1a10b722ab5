use index_vec::IndexVec;

use crate::edge::HasseEdge;
use crate::vertex::{HasseVertex, HdvIdx};

/// A directed acyclic graph of Hasse vertices, transitively reduced: see
/// [`crate::builder::build`].
#[derive(Debug, Clone, Default)]
pub struct HasseDiagram {
    pub(crate) vertices: IndexVec<HdvIdx, HasseVertex>,
    pub(crate) edges: Vec<HasseEdge>,
}

impl HasseDiagram {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, idx: HdvIdx) -> &HasseVertex {
        &self.vertices[idx]
    }

    pub fn vertices(&self) -> impl Iterator<Item = (HdvIdx, &HasseVertex)> {
        self.vertices.iter_enumerated()
    }

    pub fn edges(&self) -> impl Iterator<Item = &HasseEdge> {
        self.edges.iter()
    }

    pub fn in_degree(&self, idx: HdvIdx) -> usize {
        self.edges.iter().filter(|e| e.to == idx).count()
    }

    pub fn out_degree(&self, idx: HdvIdx) -> usize {
        self.edges.iter().filter(|e| e.from == idx).count()
    }

    pub fn out_edges(&self, idx: HdvIdx) -> impl Iterator<Item = &HasseEdge> {
        self.edges.iter().filter(move |e| e.from == idx)
    }

    pub fn in_edges(&self, idx: HdvIdx) -> impl Iterator<Item = &HasseEdge> {
        self.edges.iter().filter(move |e| e.to == idx)
    }

    /// Vertices with in-degree 0, in insertion order: the candidate safe sources.
    pub fn sources(&self) -> impl Iterator<Item = HdvIdx> + '_ {
        self.vertices
            .indices()
            .filter(move |idx| self.in_degree(*idx) == 0)
    }

    /// Whether an edge `from -> to` exists (irrespective of label).
    pub fn has_edge(&self, from: HdvIdx, to: HdvIdx) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }
}
