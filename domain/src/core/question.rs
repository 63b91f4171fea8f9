//! Question entity and its validated creation input

use super::category::CategoryId;
use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored trivia question (Entity)
///
/// Serializes to exactly five fields: `id`, `question`, `answer`,
/// `difficulty` and `category`. The front-end relies on that shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    /// Category reference; it is not required to resolve to a stored category.
    pub category: CategoryId,
}

impl Question {
    /// Attach a store-assigned identifier to a validated [`NewQuestion`].
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        }
    }

    /// Case-insensitive substring match against the question text.
    pub fn matches_term(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

/// A question that has not been persisted yet (Value Object)
///
/// Only constructible through [`NewQuestion::try_new`], so a value of this
/// type always carries non-empty question text and a positive difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i64,
    category: CategoryId,
}

impl NewQuestion {
    /// Validate raw creation input.
    pub fn try_new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        if difficulty < 1 {
            return Err(DomainError::InvalidDifficulty(difficulty));
        }
        Ok(Self {
            question,
            answer: answer.into(),
            difficulty,
            category,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: QuestionId::new(6),
            question: "What was the title of the 1990 fantasy directed by Tim Burton?".to_string(),
            answer: "Edward Scissorhands".to_string(),
            difficulty: 3,
            category: CategoryId::new(5),
        }
    }

    #[test]
    fn test_serializes_to_five_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["id"], 6);
        assert_eq!(object["category"], 5);
        assert_eq!(object["difficulty"], 3);
        assert_eq!(object["answer"], "Edward Scissorhands");
    }

    #[test]
    fn test_matches_term_ignores_case() {
        let q = sample();
        assert!(q.matches_term("TITLE"));
        assert!(q.matches_term("tim burton"));
        assert!(!q.matches_term("red apple"));
    }

    #[test]
    fn test_new_question_valid() {
        let new = NewQuestion::try_new(
            "What is the capital city of Germany?",
            "Berlin",
            CategoryId::new(3),
            1,
        )
        .unwrap();
        assert_eq!(new.question(), "What is the capital city of Germany?");
        assert_eq!(new.answer(), "Berlin");
        assert_eq!(new.category(), CategoryId::new(3));
        assert_eq!(new.difficulty(), 1);
    }

    #[test]
    fn test_new_question_rejects_blank_text() {
        assert_eq!(
            NewQuestion::try_new("   ", "x", CategoryId::new(1), 1),
            Err(DomainError::EmptyQuestion)
        );
    }

    #[test]
    fn test_new_question_allows_empty_answer() {
        assert!(NewQuestion::try_new("Why?", "", CategoryId::new(1), 2).is_ok());
    }

    #[test]
    fn test_new_question_rejects_zero_difficulty() {
        assert_eq!(
            NewQuestion::try_new("Why?", "Because", CategoryId::new(1), 0),
            Err(DomainError::InvalidDifficulty(0))
        );
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let new = NewQuestion::try_new(
            "Who discovered penicillin?",
            "Alexander Fleming",
            CategoryId::new(1),
            3,
        )
        .unwrap();
        let q = Question::from_new(QuestionId::new(21), new);
        assert_eq!(q.id.value(), 21);
        assert_eq!(q.answer, "Alexander Fleming");
    }
}
