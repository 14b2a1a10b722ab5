//! The recursive reduction driver (C6).

use ppp_utils::natural_order;
use rbg::{Color, Graph, SignedChar};

use crate::config::{Config, SourceOracle, Strategy};
use crate::error::Error;
use crate::safe::{find_safe, Candidate};

/// Computes a c-reduction of `graph`: an ordered sequence of signed characters whose sequential
/// realization reduces it to the empty graph, or [`Error::NoReduction`] if the chosen strategy
/// finds none.
///
/// `oracle` is only consulted when `config.strategy` is [`Strategy::Interactive`]; pass any
/// implementation (e.g. [`crate::config::FixedChoice`]) otherwise.
pub fn reduce(
    graph: &Graph,
    config: &Config,
    oracle: &mut dyn SourceOracle,
) -> Result<Vec<SignedChar>, Error> {
    let mut sequence = Vec::new();
    for component in graph.black_components() {
        log::debug!("reducing component rooted at `{:?}`", component.graph.vertex_names().next());
        sequence.extend(reduce_component(&component.graph, config, oracle)?);
    }
    Ok(sequence)
}

fn reduce_component(
    component: &Graph,
    config: &Config,
    oracle: &mut dyn SourceOracle,
) -> Result<Vec<SignedChar>, Error> {
    let mut g = component.clone();
    let mut out = Vec::new();
    loop {
        if g.is_empty() {
            return Ok(out);
        }

        if let Some(c) = universal_character(&g) {
            g.realize_gain(&c)?;
            g.closure();
            log::trace!("forced move: gain universal character `{c}`");
            out.push(SignedChar::gain(c));
            continue;
        }

        if let Some(s) = free_species(&g) {
            let mut reds: Vec<String> = g.neighbors(&s, Color::Red).into_iter().collect();
            natural_order::sort(&mut reds);
            log::trace!("forced move: lose every red character of free species `{s}`");
            for c in reds {
                g.realize_lose(&c)?;
                out.push(SignedChar::lose(c));
            }
            g.closure();
            continue;
        }

        let gm = g.maximal_reducible();
        let h = hasse::build(&gm, &g);
        let reduced = hasse::reduce_diagram(&h, &g);
        let safe = find_safe(&reduced, &g);
        if safe.is_empty() {
            return Err(Error::NoReduction(format!(
                "no safe source or chain remains for a component of {} species",
                g.species().count()
            )));
        }

        match config.strategy {
            Strategy::Standard => {
                apply(&mut g, &safe[0], &mut out)?;
            }
            Strategy::Interactive => {
                let names: Vec<String> = safe.iter().map(|c| c.display_name.clone()).collect();
                let choice = oracle.choose(&names);
                let chosen = safe.get(choice).ok_or_else(|| {
                    Error::NoReduction(format!("oracle chose out-of-range index {choice}"))
                })?;
                apply(&mut g, chosen, &mut out)?;
            }
            Strategy::Exponential => {
                return branch(&g, &safe, config, oracle, out);
            }
        }
    }
}

/// Applies `candidate`'s label to `g`, running closure, and records it in `out`.
fn apply(g: &mut Graph, candidate: &Candidate, out: &mut Vec<SignedChar>) -> Result<(), Error> {
    for signed in &candidate.label {
        match signed.state {
            rbg::SignedState::Gain => g.realize_gain(&signed.name)?,
            rbg::SignedState::Lose => g.realize_lose(&signed.name)?,
        }
    }
    g.closure();
    out.extend(candidate.label.iter().cloned());
    Ok(())
}

/// Tries each safe candidate in turn, recursing into the rest of the reduction and backtracking
/// to the next candidate if that branch doesn't pan out.
fn branch(
    g: &Graph,
    candidates: &[Candidate],
    config: &Config,
    oracle: &mut dyn SourceOracle,
    prefix: Vec<SignedChar>,
) -> Result<Vec<SignedChar>, Error> {
    let mut last_err = None;
    for candidate in candidates {
        let mut trial = g.clone();
        let mut trial_out = prefix.clone();
        let applied = apply(&mut trial, candidate, &mut trial_out)
            .and_then(|()| reduce_component(&trial, config, oracle))
            .map(|rest| {
                trial_out.extend(rest);
                trial_out
            });
        match applied {
            Ok(full) => return Ok(full),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        Error::NoReduction("every safe candidate's branch failed to reduce fully".to_owned())
    }))
}

fn universal_character(g: &Graph) -> Option<String> {
    let mut candidates: Vec<String> =
        g.characters().filter(|c| g.is_universal(c)).map(str::to_owned).collect();
    natural_order::sort(&mut candidates);
    candidates.into_iter().next()
}

/// A species qualifies as a forced move only if realizing it actually does something: a free
/// species with no red neighbors satisfies `is_free` vacuously (it has no active characters to
/// lose), and emitting its empty `c-` list would loop forever without shrinking the graph.
fn free_species(g: &Graph) -> Option<String> {
    let mut candidates: Vec<String> = g
        .species()
        .filter(|s| g.is_free(s) && !g.neighbors(s, Color::Red).is_empty())
        .map(str::to_owned)
        .collect();
    natural_order::sort(&mut candidates);
    candidates.into_iter().next()
}
