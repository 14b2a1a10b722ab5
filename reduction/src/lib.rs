//! The safe-source/safe-chain finder (C5) and the recursive c-reduction driver (C6): the layer
//! that turns a red-black graph and its Hasse diagrams into an ordered reduction sequence.

mod config;
mod driver;
mod error;
mod safe;
mod verifier;

pub use config::{Config, FixedChoice, SourceOracle, Strategy};
pub use driver::reduce;
pub use error::Error;
pub use safe::{find_safe, Candidate};
pub use verifier::{FixedVerifier, MatrixVerifier, Verifier};
