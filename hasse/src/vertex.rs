//! Hasse-vertex storage: HDVs are created once per build and never removed, so an
//! [`index_vec::IndexVec`] keyed by a typed index fits better than a name-keyed map.

use std::collections::BTreeSet;

index_vec::define_index_type! {
    /// A stable index into a [`crate::HasseDiagram`]'s vertex list.
    pub struct HdvIdx = usize;
}

/// One Hasse-diagram vertex: the species collapsed together because they share exactly this
/// character set, plus the character set itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasseVertex {
    species: BTreeSet<String>,
    characters: BTreeSet<String>,
}

impl HasseVertex {
    pub(crate) fn new(species: impl Into<String>, characters: BTreeSet<String>) -> Self {
        let mut set = BTreeSet::new();
        set.insert(species.into());
        Self {
            species: set,
            characters,
        }
    }

    pub(crate) fn absorb(&mut self, species: impl Into<String>) {
        self.species.insert(species.into());
    }

    pub fn species(&self) -> &BTreeSet<String> {
        &self.species
    }

    pub fn characters(&self) -> &BTreeSet<String> {
        &self.characters
    }

    /// Whether `self`'s character set is a strict subset of `other`'s: the condition for a cover
    /// candidate edge `self -> other`.
    pub(crate) fn is_covered_by(&self, other: &BTreeSet<String>) -> bool {
        self.characters.is_subset(other) && &self.characters != other
    }
}
