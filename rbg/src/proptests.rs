//! Property tests for two core invariants: bipartiteness is preserved under any sequence of
//! mutations, and realizing a universal character strictly shrinks the graph. Bounded-size
//! random matrices keep these fast enough to run on every build.

use quickcheck::{Gen, TestResult};
use quickcheck_macros::quickcheck;

use ppp_utils::natural_order;

use crate::{Color, Graph, Kind};

#[derive(Debug, Clone)]
struct SmallMatrix {
    rows: Vec<Vec<bool>>,
}

impl quickcheck::Arbitrary for SmallMatrix {
    fn arbitrary(g: &mut Gen) -> Self {
        let m = 1 + usize::arbitrary(g) % 4;
        let n = 1 + usize::arbitrary(g) % 4;
        let rows = (0..m)
            .map(|_| (0..n).map(|_| bool::arbitrary(g)).collect())
            .collect();
        SmallMatrix { rows }
    }
}

impl SmallMatrix {
    fn to_graph(&self) -> Graph {
        let n = self.rows.first().map_or(0, Vec::len);
        let mut g = Graph::new();
        for i in 0..self.rows.len() {
            g.add_vertex(Kind::Species, format!("s{}", i + 1));
        }
        for j in 0..n {
            g.add_vertex(Kind::Character, format!("c{}", j + 1));
        }
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &bit) in row.iter().enumerate() {
                if bit {
                    g.add_edge(Color::Black, &format!("s{}", i + 1), &format!("c{}", j + 1))
                        .unwrap();
                }
            }
        }
        g
    }
}

/// Counts edges by summing each species' neighbor sets: every edge has exactly one species
/// endpoint, so this counts each edge once regardless of color.
fn edge_count(g: &Graph) -> usize {
    g.species()
        .map(|s| g.neighbors(s, Color::Black).len() + g.neighbors(s, Color::Red).len())
        .sum()
}

fn sorted_names(g: &Graph) -> Vec<String> {
    let mut names: Vec<String> = g.vertex_names().map(str::to_owned).collect();
    names.sort();
    names
}

#[quickcheck]
fn every_edge_stays_bipartite_after_closure(m: SmallMatrix) -> bool {
    let mut g = m.to_graph();
    g.closure();
    g.species().all(|s| {
        g.neighbors(s, Color::Black)
            .iter()
            .chain(g.neighbors(s, Color::Red).iter())
            .all(|n| g.is_character(n))
    })
}

#[quickcheck]
fn closure_is_idempotent(m: SmallMatrix) -> bool {
    let mut g = m.to_graph();
    g.closure();
    let before = sorted_names(&g);
    g.closure();
    sorted_names(&g) == before
}

#[quickcheck]
fn gaining_a_universal_character_strictly_shrinks_the_graph(m: SmallMatrix) -> TestResult {
    let g = m.to_graph();
    let mut universal: Vec<String> = g.characters().filter(|c| g.is_universal(c)).map(str::to_owned).collect();
    if universal.is_empty() {
        return TestResult::discard();
    }
    natural_order::sort(&mut universal);

    for c in universal {
        let mut g = g.clone();
        let before = g.vertex_names().count() + edge_count(&g);
        g.realize_gain(&c).unwrap();
        g.closure();
        let after = g.vertex_names().count() + edge_count(&g);
        if after >= before {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}
