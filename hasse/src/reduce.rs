//! The "reduced Hasse diagram" supplement (C4): dropping any HDV touched by
//! an already-active species before handing the diagram to the safe-source
//! finder.

use rbg::{Color, Graph};

use crate::diagram::HasseDiagram;
use crate::vertex::HdvIdx;

/// Prunes every HDV whose species list contains a species with at least one red edge in `graph`,
/// along with every edge incident to a pruned vertex.
pub fn reduce_diagram(h: &HasseDiagram, graph: &Graph) -> HasseDiagram {
    let dead: Vec<HdvIdx> = h
        .vertices()
        .filter(|(_, v)| {
            v.species()
                .iter()
                .any(|s| !graph.neighbors(s, Color::Red).is_empty())
        })
        .map(|(idx, _)| idx)
        .collect();
    log::trace!("pruning {} HDV(s) touched by an active species", dead.len());

    let mut out = HasseDiagram::new();
    let mut remap = std::collections::HashMap::new();
    for (idx, v) in h.vertices() {
        if dead.contains(&idx) {
            continue;
        }
        let new_idx = out.vertices.push(v.clone());
        remap.insert(idx, new_idx);
    }
    for e in h.edges() {
        if let (Some(&from), Some(&to)) = (remap.get(&e.from), remap.get(&e.to)) {
            out.edges.push(crate::edge::HasseEdge {
                from,
                to,
                label: e.label.clone(),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbg::Kind;

    #[test]
    fn vertices_touched_by_active_species_are_pruned() {
        let mut g = Graph::new();
        g.add_vertex(Kind::Species, "s1");
        g.add_vertex(Kind::Species, "s2");
        g.add_vertex(Kind::Character, "c1");
        g.add_vertex(Kind::Character, "c2");
        g.add_edge(Color::Black, "s1", "c1").unwrap();
        g.add_edge(Color::Black, "s2", "c1").unwrap();
        g.add_edge(Color::Black, "s2", "c2").unwrap();
        g.add_edge(Color::Red, "s1", "c2").unwrap();

        let gm = g.maximal_reducible();
        let h = crate::builder::build(&gm, &g);
        let reduced = reduce_diagram(&h, &g);

        assert!(reduced.vertices().count() < h.vertices().count());
        for (_, v) in reduced.vertices() {
            assert!(!v.species().contains("s1"));
        }
    }
}
