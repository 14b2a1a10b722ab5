//! The red-black graph engine: typed vertices, two-colored edges, connected-component
//! decomposition, and the structural predicates (`universal`, `active`, `maximal`, `inactive`,
//! `free`) that drive a c-reduction.

mod color;
mod error;
mod graph;
mod kind;
mod matrix;
#[cfg(test)]
mod proptests;
mod signed;

pub use color::Color;
pub use error::Error;
pub use graph::{Component, Graph, MaximalGraph};
pub use kind::Kind;
pub use matrix::Matrix;
pub use signed::{SignedChar, SignedState};
