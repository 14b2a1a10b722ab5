//! The safe-source / safe-chain finder (C5).

use hasse::{HasseDiagram, HdvIdx};
use ppp_utils::natural_order;
use rbg::{Graph, SignedChar, SignedState};

/// One candidate realization: a display name (for interactive prompting) and the full,
/// in-order list of signed characters that realizing it requires.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub display_name: String,
    pub label: Vec<SignedChar>,
}

/// Finds every *safe* candidate in `h`: first the safe sources, in Hasse-vertex insertion order;
/// if none are safe, the safe chains obtained by extending each source along its unique out-edge
/// until it branches or runs out. Returns an empty vector if no candidate is safe.
pub fn find_safe(h: &HasseDiagram, component: &Graph) -> Vec<Candidate> {
    let sources: Vec<Candidate> = h
        .sources()
        .map(|idx| source_candidate(h, idx))
        .filter(|c| is_safe(component, &c.label))
        .collect();
    if !sources.is_empty() {
        return sources;
    }

    h.sources()
        .map(|idx| extend_to_chain(h, idx, source_candidate(h, idx)))
        .filter(|c| is_safe(component, &c.label))
        .collect()
}

/// The candidate for realizing a source vertex on its own: gain every character in its set, in
/// canonical name order (there being no incoming edge to supply a label).
fn source_candidate(h: &HasseDiagram, idx: HdvIdx) -> Candidate {
    let v = h.vertex(idx);
    let mut characters: Vec<String> = v.characters().iter().cloned().collect();
    natural_order::sort(&mut characters);
    let label = characters.into_iter().map(SignedChar::gain).collect();

    let mut species: Vec<String> = v.species().iter().cloned().collect();
    natural_order::sort(&mut species);
    Candidate {
        display_name: species.join(","),
        label,
    }
}

/// Extends `candidate` (anchored at `idx`) forward along out-edges while `idx` has exactly one,
/// appending each edge's label and stopping at a branch (out-degree != 1).
fn extend_to_chain(h: &HasseDiagram, idx: HdvIdx, mut candidate: Candidate) -> Candidate {
    let mut current = idx;
    loop {
        let outs: Vec<_> = h.out_edges(current).collect();
        if outs.len() != 1 {
            return candidate;
        }
        let edge = outs[0];
        candidate.label.extend(edge.label.iter().cloned());
        let to = h.vertex(edge.to);
        let mut species: Vec<String> = to.species().iter().cloned().collect();
        natural_order::sort(&mut species);
        candidate.display_name.push_str(" -> ");
        candidate.display_name.push_str(&species.join(","));
        current = edge.to;
    }
}

/// A candidate is safe iff realizing its label on a clone of `component`, then closing, leaves no
/// dead-end black-component behind.
fn is_safe(component: &Graph, label: &[SignedChar]) -> bool {
    let mut g = component.clone();
    for signed in label {
        let result = match signed.state {
            SignedState::Gain => g.realize_gain(&signed.name),
            SignedState::Lose => g.realize_lose(&signed.name),
        };
        if result.is_err() {
            return false;
        }
    }
    g.closure();
    g.black_components().iter().all(|c| !is_dead_end(&c.graph))
}

/// A dead end: a non-empty component with no universal character, no free species, and -- once
/// it's built -- an empty reduced Hasse diagram, so nothing further can be realized.
fn is_dead_end(g: &Graph) -> bool {
    if g.is_empty() {
        return false;
    }
    if g.characters().any(|c| g.is_universal(c)) {
        return false;
    }
    // A species that is free only vacuously (no red neighbors to lose) offers no actual forced
    // move; see the matching guard on `reduction::driver::free_species`.
    if g.species().any(|s| g.is_free(s) && !g.neighbors(s, rbg::Color::Red).is_empty()) {
        return false;
    }
    let gm = g.maximal_reducible();
    let h = hasse::build(&gm, g);
    let reduced = hasse::reduce_diagram(&h, g);
    reduced.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbg::{Color, Kind};

    fn two_way_split() -> Graph {
        // s1: {c1, c2}; s2: {c1}; s3: {c2} -- c1 and c2 have incomparable species-sets, so the
        // Hasse diagram has two incomparable sources, both converging on s1's vertex.
        let mut g = Graph::new();
        for s in ["s1", "s2", "s3"] {
            g.add_vertex(Kind::Species, s);
        }
        for c in ["c1", "c2"] {
            g.add_vertex(Kind::Character, c);
        }
        let black = [("s1", "c1"), ("s1", "c2"), ("s2", "c1"), ("s3", "c2")];
        for (s, c) in black {
            g.add_edge(Color::Black, s, c).unwrap();
        }
        g
    }

    #[test]
    fn a_universal_like_single_source_is_safe() {
        let mut g = Graph::new();
        g.add_vertex(Kind::Species, "s1");
        g.add_vertex(Kind::Character, "c1");
        g.add_vertex(Kind::Character, "c2");
        g.add_edge(Color::Black, "s1", "c1").unwrap();
        g.add_edge(Color::Black, "s1", "c2").unwrap();

        let gm = g.maximal_reducible();
        let h = hasse::build(&gm, &g);
        let reduced = hasse::reduce_diagram(&h, &g);
        let safe = find_safe(&reduced, &g);
        assert_eq!(safe.len(), 1);
        assert_eq!(safe[0].label.len(), 2);
    }

    #[test]
    fn incomparable_sources_both_surface_as_candidates() {
        let g = two_way_split();
        let gm = g.maximal_reducible();
        let h = hasse::build(&gm, &g);
        let reduced = hasse::reduce_diagram(&h, &g);
        assert_eq!(reduced.sources().count(), 2, "c1 and c2 must not dominate each other");
        let safe = find_safe(&reduced, &g);
        assert_eq!(safe.len(), 2);
    }
}
