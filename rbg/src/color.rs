use std::fmt::{self, Display, Formatter};

/// The two edge colors of a red-black graph.  Black marks a character still
/// present in a species; red marks one already realized (gained) against
/// that species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::Red => write!(f, "red"),
        }
    }
}
