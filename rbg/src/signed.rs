use std::fmt::{self, Display, Formatter};

/// Whether a [`SignedChar`] gains or loses its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignedState {
    Gain,
    Lose,
}

/// A character name paired with a [`SignedState`], e.g. `c1+` or `c3-`.
/// This is the unit of output the reduction driver accumulates: a
/// `c-reduction` is an ordered `Vec<SignedChar>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedChar {
    pub name: String,
    pub state: SignedState,
}

impl SignedChar {
    pub fn gain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: SignedState::Gain,
        }
    }

    pub fn lose(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: SignedState::Lose,
        }
    }
}

impl Display for SignedChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = match self.state {
            SignedState::Gain => '+',
            SignedState::Lose => '-',
        };
        write!(f, "{}{}", self.name, sign)
    }
}
