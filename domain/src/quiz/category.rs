//! Quiz category selector

use crate::core::category::CategoryId;
use crate::core::question::Question;

/// Which questions form the pool of a quiz round.
///
/// Clients send `0` for "all categories" and a category identifier otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    All,
    Only(CategoryId),
}

impl QuizCategory {
    /// Selector value that means "every category".
    pub const ALL_SELECTOR: i64 = 0;

    pub fn from_selector(id: i64) -> Self {
        if id == Self::ALL_SELECTOR {
            QuizCategory::All
        } else {
            QuizCategory::Only(CategoryId::new(id))
        }
    }

    pub fn includes(&self, question: &Question) -> bool {
        match self {
            QuizCategory::All => true,
            QuizCategory::Only(id) => question.category == *id,
        }
    }
}

impl std::fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizCategory::All => write!(f, "all"),
            QuizCategory::Only(id) => write!(f, "category {id}"),
        }
    }
}
