use crate::{Card, HandKind, HandType};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("cards do not form a recognized hand type")]
    InvalidShape,
    #[error("table cards do not form a recognized hand type")]
    InvalidReference,
    #[error("{played} cannot be played on {reference}")]
    ShapeMismatch {
        played: HandType,
        reference: HandType,
    },
    #[error("{played} does not beat {reference}")]
    DoesNotBeat {
        played: HandType,
        reference: HandType,
    },
    #[error("hand type analyzers overlap: {}", kind_ids(.kinds))]
    AmbiguousClassification { kinds: Vec<HandKind> },
    #[error("no cards selected")]
    EmptySelection,
    #[error("card {0} selected twice")]
    DuplicateCard(Card),
    #[error("card {0} is not in hand")]
    NotInHand(Card),
}

impl PlayError {
    /// Errors a player can cause, as opposed to a broken analyzer set.
    pub fn is_player_facing(&self) -> bool {
        !matches!(self, PlayError::AmbiguousClassification { .. })
    }
}

fn kind_ids(kinds: &[HandKind]) -> String {
    kinds.iter().map(|kind| kind.id()).collect::<Vec<_>>().join(", ")
}
