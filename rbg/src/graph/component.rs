//! Black-connected component decomposition (C2).

use ppp_utils::natural_order;

use super::Graph;
use crate::{Color, Kind};

/// One black-connected component of a [`Graph`], carried as its own standalone graph (including
/// any red edges among its vertices). [`Graph::black_components`] discovers components in
/// natural-name order (by each component's lexicographically smallest vertex name), so the
/// returned `Vec<Component>` is itself already in a deterministic, reproducible order; no name is
/// retained on `Component` itself.
#[derive(Debug, Clone)]
pub struct Component {
    pub graph: Graph,
}

impl Graph {
    /// Partitions `self` into its black-connected components, in a deterministic discovery order
    /// (by the natural order of each component's smallest vertex name). Red edges are retained
    /// within each component's subgraph but never used to decide connectivity.
    pub fn black_components(&self) -> Vec<Component> {
        let mut names: Vec<String> = self.vertex_names().map(str::to_owned).collect();
        natural_order::sort(&mut names);

        let mut visited = std::collections::HashSet::new();
        let mut components = Vec::new();
        for start in &names {
            if visited.contains(start) {
                continue;
            }
            let members = self.black_component_of(start);
            for m in &members {
                visited.insert(m.clone());
            }
            components.push(Component {
                graph: self.induced_subgraph(&members),
            });
        }
        components
    }

    /// Builds a standalone [`Graph`] containing exactly `names` and the edges of `self` between
    /// them (both colors).
    fn induced_subgraph(&self, names: &std::collections::BTreeSet<String>) -> Graph {
        let mut out = Graph::new();
        for name in names {
            out.add_vertex(self.kind_of(name).unwrap(), name.clone());
        }
        for name in names {
            if self.kind_of(name) != Some(Kind::Species) {
                continue;
            }
            for c in self.neighbors(name, Color::Black) {
                if names.contains(&c) {
                    out.add_edge(Color::Black, name, &c).unwrap();
                }
            }
            for c in self.neighbors(name, Color::Red) {
                if names.contains(&c) {
                    out.add_edge(Color::Red, name, &c).unwrap();
                }
            }
        }
        out
    }
}
