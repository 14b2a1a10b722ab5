//! The maximal-character filter (C3): which characters survive into the
//! maximal reducible subgraph GM that the Hasse-diagram builder consumes.

use std::collections::BTreeSet;

use super::Graph;
use crate::Color;

/// The maximal reducible subgraph of a single (black-connected) component: the set of inactive
/// characters not strictly dominated, species-set-wise, by another inactive character.
///
/// Characters tied for maximality (identical species-sets) are all retained rather than
/// collapsed into a single record: since every species either has all of a tied group or none of
/// it, they always appear together in every Hasse edge label they touch, which gives the same
/// observable effect as collapsing them to one representative.
#[derive(Debug, Clone)]
pub struct MaximalGraph {
    retained: BTreeSet<String>,
}

impl Graph {
    /// Computes the maximal reducible subgraph of `self`, which must already be a single
    /// black-connected component (see [`Graph::black_components`]).
    pub fn maximal_reducible(&self) -> MaximalGraph {
        let inactive: Vec<String> = self
            .characters()
            .filter(|c| self.is_inactive(c))
            .map(str::to_owned)
            .collect();

        let species_set = |c: &str| self.neighbors(c, Color::Black);

        let retained = inactive
            .iter()
            .filter(|c| {
                let s_c = species_set(c);
                !inactive.iter().any(|other| {
                    other != *c && s_c.is_subset(&species_set(other)) && s_c != species_set(other)
                })
            })
            .cloned()
            .collect();

        MaximalGraph { retained }
    }
}

impl MaximalGraph {
    /// The names of every character retained by the filter.
    pub fn retained_characters(&self) -> &BTreeSet<String> {
        &self.retained
    }

    /// `C(s)` restricted to GM: the retained character names adjacent to `species` by a black
    /// edge in `graph`.
    pub fn character_set_of(&self, graph: &Graph, species: &str) -> BTreeSet<String> {
        graph
            .neighbors(species, Color::Black)
            .into_iter()
            .filter(|c| self.retained.contains(c))
            .collect()
    }
}
