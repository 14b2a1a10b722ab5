//! The two realization mutators (`c+`, `c-`) and the closure fixpoint that
//! follows every realization.

use crate::{Color, Error, Kind};

use super::Graph;

impl Graph {
    /// Realizes `c+` (gain): for each species in `character`'s component, an existing black edge
    /// is deleted and a missing one becomes red. `character` is active afterwards.
    pub fn realize_gain(&mut self, character: &str) -> Result<(), Error> {
        self.check_kind(character, Kind::Character)?;
        if self.is_active(character) {
            return Err(Error::InconsistentMove(format!(
                "`{character}` is already active; it can't be gained again"
            )));
        }

        let component = self.black_component_of(character);
        for name in component {
            if !self.is_species(&name) {
                continue;
            }
            if self.neighbors(character, Color::Black).contains(&name) {
                self.remove_edge(Color::Black, &name, character);
            } else {
                self.add_edge(Color::Red, &name, character)?;
            }
        }
        log::debug!("realized gain of `{character}`");
        Ok(())
    }

    /// Realizes `c-` (lose): only legal once `character` is active and every remaining edge
    /// touching it is red. Deletes `character` entirely.
    pub fn realize_lose(&mut self, character: &str) -> Result<(), Error> {
        self.check_kind(character, Kind::Character)?;
        if !self.is_active(character) || self.is_pending(character) {
            return Err(Error::InconsistentMove(format!(
                "`{character}` must be fully-red before it can be lost"
            )));
        }
        self.remove_vertex(character);
        log::debug!("realized loss of `{character}`");
        Ok(())
    }

    /// Repeatedly collapses any character whose every incident edge is red -- which holds
    /// vacuously for a character with no incident edges at all, the state a universal character
    /// is left in once gaining it has deleted its last black edge without ever adding a red one
    /// -- and removes any species left with no remaining edges, until a fixpoint is reached.
    pub fn closure(&mut self) {
        loop {
            let collapsible: Vec<String> = self
                .characters()
                .filter(|c| self.degree(c) == 0 || (self.is_active(c) && !self.is_pending(c)))
                .map(str::to_owned)
                .collect();
            let isolated_species: Vec<String> = self
                .species()
                .filter(|s| self.degree(s) == 0)
                .map(str::to_owned)
                .collect();

            if collapsible.is_empty() && isolated_species.is_empty() {
                return;
            }
            for c in &collapsible {
                self.remove_vertex(c);
            }
            for s in &isolated_species {
                self.remove_vertex(s);
            }
            log::trace!(
                "closure collapsed {} character(s), {} isolated species",
                collapsible.len(),
                isolated_species.len()
            );
        }
    }

}
