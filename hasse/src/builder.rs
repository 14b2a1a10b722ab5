//! The Hasse-diagram builder (C4): species grouped by character set, cover
//! edges between comparable groups, then transitive reduction.

use std::collections::BTreeSet;

use ppp_utils::natural_order;
use rbg::{Graph, MaximalGraph, SignedChar};

use crate::diagram::HasseDiagram;
use crate::edge::HasseEdge;
use crate::vertex::HasseVertex;

/// Builds the Hasse diagram of `gm`'s retained characters over `graph`'s species.
///
/// `graph` must be the same (single-component) graph `gm` was computed from; every species of
/// `graph`, including ones left isolated by the character filter, gets a vertex.
pub fn build(gm: &MaximalGraph, graph: &Graph) -> HasseDiagram {
    let mut species: Vec<String> = graph.species().map(str::to_owned).collect();
    natural_order::sort(&mut species);
    species.sort_by_key(|s| gm.character_set_of(graph, s).len());
    log::debug!("building Hasse diagram over {} species", species.len());

    let mut h = HasseDiagram::new();
    for s in &species {
        let characters = gm.character_set_of(graph, s);
        insert_species(&mut h, s, characters);
    }

    let before = h.edges.len();
    transitive_reduce(&mut h);
    log::trace!(
        "transitive reduction removed {} of {before} cover edge(s)",
        before - h.edges.len()
    );
    h
}

fn insert_species(h: &mut HasseDiagram, species: &str, characters: BTreeSet<String>) {
    if let Some(existing) = h
        .vertices
        .iter_mut()
        .find(|v| v.characters() == &characters)
    {
        existing.absorb(species.to_owned());
        return;
    }

    let new_idx = h.vertices.push(HasseVertex::new(species, characters.clone()));
    let cover_sources: Vec<_> = h
        .vertices
        .indices()
        .filter(|&idx| idx != new_idx && h.vertices[idx].is_covered_by(&characters))
        .collect();

    for w in cover_sources {
        let mut gained: Vec<String> = characters.difference(h.vertices[w].characters()).cloned().collect();
        natural_order::sort(&mut gained);
        let label = gained.into_iter().map(SignedChar::gain).collect();
        h.edges.push(HasseEdge {
            from: w,
            to: new_idx,
            label,
        });
    }
}

/// Removes every edge `(p, q)` for which an intermediate `u` exists with `p -> u` and `u -> q`.
fn transitive_reduce(h: &mut HasseDiagram) {
    let internal: Vec<_> = h
        .vertices
        .indices()
        .filter(|&u| h.in_degree(u) > 0 && h.out_degree(u) > 0)
        .collect();

    let mut redundant = BTreeSet::new();
    for u in internal {
        let preds: Vec<_> = h.in_edges(u).map(|e| e.from).collect();
        let succs: Vec<_> = h.out_edges(u).map(|e| e.to).collect();
        for &p in &preds {
            for &q in &succs {
                if p != q && h.has_edge(p, q) {
                    redundant.insert((p, q));
                }
            }
        }
    }

    h.edges.retain(|e| !redundant.contains(&(e.from, e.to)));
}
