use rbg::SignedChar;

use crate::vertex::HdvIdx;

/// A cover edge `from -> to`, labeled by the (gain-only) characters gained moving from `from`'s
/// set to `to`'s: `characters(to) \ characters(from)`, in canonical name order.
#[derive(Debug, Clone)]
pub struct HasseEdge {
    pub from: HdvIdx,
    pub to: HdvIdx,
    pub label: Vec<SignedChar>,
}
