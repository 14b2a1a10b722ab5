use std::fmt::{self, Display, Formatter};

/// Errors the reduction driver can report once parsing has already succeeded.
#[derive(Debug, Clone)]
pub enum Error {
    /// The driver exhausted every choice at some component without finding a reducing sequence.
    NoReduction(String),
    /// A realization the driver attempted violated its precondition. This only escapes a
    /// [`crate::reduce`] call in standard/interactive mode; exponential mode treats it as a
    /// pruned branch.
    InconsistentMove(rbg::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoReduction(reason) => write!(f, "no c-reduction exists: {reason}"),
            Error::InconsistentMove(e) => write!(f, "inconsistent move: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<rbg::Error> for Error {
    fn from(e: rbg::Error) -> Self {
        Error::InconsistentMove(e)
    }
}
