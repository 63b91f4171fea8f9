//! Wire format of request and response bodies.
//!
//! Request bodies come from the front-end's forms, which send numeric fields
//! as strings, so every numeric field accepts either form.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use trivia_application::{CreateQuestionInput, ListQuestionsOutput, PlayQuizInput, QuestionList};
use trivia_domain::{CategoryId, CategoryMap, Question, QuestionId, QuizCategory};

/// Deserialize an optional integer given as a JSON number or a numeric string.
///
/// `null` and the empty string read as absent.
fn lenient_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("integer or numeric string")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
                Ok(Some(v as i64))
            } else {
                Err(E::custom(format!("expected an integer, got {v}")))
            }
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(None);
            }
            v.parse().map(Some).map_err(E::custom)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }
    d.deserialize_any(Vis)
}

/// Query string of `GET /questions`.
///
/// `page` stays raw so that non-integer values can fall back to page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Body of `POST /questions`: either a search or a new question.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub difficulty: Option<i64>,
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// What a `POST /questions` body asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionCommand {
    Search(String),
    Create(CreateQuestionInput),
}

impl QuestionsBody {
    /// A present, non-empty `searchTerm` selects search; anything else is a
    /// creation request.
    pub fn into_command(self) -> QuestionCommand {
        match self.search_term {
            Some(term) if !term.is_empty() => QuestionCommand::Search(term),
            _ => QuestionCommand::Create(CreateQuestionInput {
                question: self.question,
                answer: self.answer,
                category: self.category,
                difficulty: self.difficulty,
            }),
        }
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizCategoryBody {
    #[serde(default, deserialize_with = "lenient_int")]
    pub id: Option<i64>,
    /// Display label echoed back by the front-end; ignored.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizBody {
    pub fn into_input(self) -> PlayQuizInput {
        let input = PlayQuizInput {
            quiz_category: self
                .quiz_category
                .and_then(|c| c.id)
                .map(QuizCategory::from_selector),
            ..PlayQuizInput::default()
        };
        input.with_previous(self.previous_questions.unwrap_or_default())
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
    pub categories: CategoryMap,
}

impl From<ListQuestionsOutput> for QuestionPageResponse {
    fn from(output: ListQuestionsOutput) -> Self {
        Self {
            questions: output.questions,
            total_questions: output.total_questions,
            current_category: None,
            categories: output.categories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

impl From<QuestionList> for QuestionListResponse {
    fn from(list: QuestionList) -> Self {
        Self {
            questions: list.questions,
            total_questions: list.total_questions,
            current_category: list.current_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
