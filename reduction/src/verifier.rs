//! The verification boundary: after the driver returns a sequence, it's replayed against a
//! *fresh* copy of the original graph to confirm it actually reduces to nothing. This is a
//! pluggable trait so tests can swap in a double without rebuilding a graph.

use rbg::{Graph, SignedChar, SignedState};

/// Replays a signed-character sequence against a graph and reports whether it reduces it fully.
pub trait Verifier {
    fn verify(&self, graph: &Graph, sequence: &[SignedChar]) -> bool;
}

/// The default verifier: literally replays `sequence` on a clone of `graph`, applying closure
/// after each step, and checks the result is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixVerifier;

impl Verifier for MatrixVerifier {
    fn verify(&self, graph: &Graph, sequence: &[SignedChar]) -> bool {
        let mut g = graph.clone();
        for signed in sequence {
            let result = match signed.state {
                SignedState::Gain => g.realize_gain(&signed.name),
                SignedState::Lose => g.realize_lose(&signed.name),
            };
            if result.is_err() {
                return false;
            }
            g.closure();
        }
        g.is_empty()
    }
}

/// A verifier that always returns a fixed answer, for tests that want to exercise the CLI
/// boundary's handling of a passing or failing verification without building a failing graph.
#[derive(Debug, Clone, Copy)]
pub struct FixedVerifier(pub bool);

impl Verifier for FixedVerifier {
    fn verify(&self, _graph: &Graph, _sequence: &[SignedChar]) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbg::{Color, Kind};

    #[test]
    fn accepts_a_genuinely_reducing_sequence() {
        let mut g = Graph::new();
        g.add_vertex(Kind::Species, "s1");
        g.add_vertex(Kind::Character, "c1");
        g.add_edge(Color::Black, "s1", "c1").unwrap();

        let seq = vec![SignedChar::gain("c1")];
        assert!(MatrixVerifier.verify(&g, &seq));
    }

    #[test]
    fn rejects_a_sequence_that_leaves_residue() {
        let mut g = Graph::new();
        g.add_vertex(Kind::Species, "s1");
        g.add_vertex(Kind::Species, "s2");
        g.add_vertex(Kind::Character, "c1");
        g.add_edge(Color::Black, "s1", "c1").unwrap();
        g.add_edge(Color::Black, "s2", "c1").unwrap();

        // Nothing realized at all: graph is non-empty, so verification must fail.
        assert!(!MatrixVerifier.verify(&g, &[]));
    }

    #[test]
    fn rejects_an_invalid_move() {
        let mut g = Graph::new();
        g.add_vertex(Kind::Species, "s1");
        g.add_vertex(Kind::Character, "c1");
        g.add_edge(Color::Black, "s1", "c1").unwrap();

        // Losing a still-inactive character is not a legal move.
        let seq = vec![SignedChar::lose("c1")];
        assert!(!MatrixVerifier.verify(&g, &seq));
    }

    #[test]
    fn fixed_verifier_ignores_its_arguments() {
        let g = Graph::new();
        assert!(FixedVerifier(true).verify(&g, &[]));
        assert!(!FixedVerifier(false).verify(&g, &[]));
    }
}
