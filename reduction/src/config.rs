/// Which of the three safe-source policies the driver should follow when a component has no
/// forced move left and must choose from the Hasse diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Realize the first safe source, in Hasse-vertex insertion order. No backtracking.
    #[default]
    Standard,
    /// Try every safe source in turn, backtracking to the next one if a branch dead-ends.
    Exponential,
    /// Present the ordered candidate list to a [`SourceOracle`] and realize its pick.
    Interactive,
}

/// Drives the policy choice at each Hasse diagram the reduction builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub strategy: Strategy,
}

impl Config {
    pub fn standard() -> Self {
        Self {
            strategy: Strategy::Standard,
        }
    }

    pub fn exponential() -> Self {
        Self {
            strategy: Strategy::Exponential,
        }
    }

    pub fn interactive() -> Self {
        Self {
            strategy: Strategy::Interactive,
        }
    }
}

/// An external decision-maker consulted in [`Strategy::Interactive`] mode: given the display
/// names of the current candidate safe sources/chains, in order, picks which one to realize.
pub trait SourceOracle {
    fn choose(&mut self, candidates: &[String]) -> usize;
}

/// An oracle that always returns a fixed index, for tests and for non-interactive embeddings that
/// still want to pass a `Strategy::Interactive` config through shared code paths.
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice(pub usize);

impl SourceOracle for FixedChoice {
    fn choose(&mut self, _candidates: &[String]) -> usize {
        self.0
    }
}
