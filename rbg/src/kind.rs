use std::fmt::{self, Display, Formatter};

/// The two vertex classes of a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Species,
    Character,
}

impl Kind {
    pub fn is_species(self) -> bool {
        matches!(self, Kind::Species)
    }

    pub fn is_character(self) -> bool {
        matches!(self, Kind::Character)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Species => write!(f, "species"),
            Kind::Character => write!(f, "character"),
        }
    }
}
