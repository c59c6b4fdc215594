//! Assessment question bank.
//!
//! The questionnaire asks eight questions in a fixed order. Sliders collect
//! a 0-10 rating, the appetite question is a radio group over
//! [`AppetiteLevel::LABELS`], and the closing question is free text.

use serde::Serialize;
use std::fmt;

use crate::answers::{AnswerValue, AssessmentAnswers};
use crate::appetite::AppetiteLevel;

/// Topic a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Mood,
    Sleep,
    Anxiety,
    Energy,
    Appetite,
    Stress,
    General,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Mood => "mood",
            QuestionCategory::Sleep => "sleep",
            QuestionCategory::Anxiety => "anxiety",
            QuestionCategory::Energy => "energy",
            QuestionCategory::Appetite => "appetite",
            QuestionCategory::Stress => "stress",
            QuestionCategory::General => "general",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input control used to collect an answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Slider { min: f64, max: f64, step: f64 },
    Radio { options: &'static [&'static str] },
    Textarea,
}

impl QuestionKind {
    const RATING: QuestionKind = QuestionKind::Slider {
        min: 0.0,
        max: 10.0,
        step: 1.0,
    };

    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::Slider { .. } => "slider",
            QuestionKind::Radio { .. } => "radio",
            QuestionKind::Textarea => "textarea",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub required: bool,
    pub category: QuestionCategory,
}

impl Question {
    /// Whether `value` is a usable answer for this question.
    ///
    /// - Slider: a number within `[min, max]`.
    /// - Radio: exactly one of the option labels.
    /// - Textarea: any string.
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        match (&self.kind, value) {
            (QuestionKind::Slider { min, max, .. }, AnswerValue::Number(n)) => {
                n.is_finite() && *n >= *min && *n <= *max
            }
            (QuestionKind::Radio { options }, AnswerValue::Text(text)) => {
                options.contains(&text.as_str())
            }
            (QuestionKind::Textarea, AnswerValue::Text(_)) => true,
            _ => false,
        }
    }
}

const STANDARD_QUESTIONS: [Question; 8] = [
    Question {
        id: "mood",
        text: "How would you rate your mood today?",
        kind: QuestionKind::RATING,
        required: true,
        category: QuestionCategory::Mood,
    },
    Question {
        id: "sleep",
        text: "How well did you sleep last night?",
        kind: QuestionKind::RATING,
        required: true,
        category: QuestionCategory::Sleep,
    },
    Question {
        id: "anxiety",
        text: "How anxious have you been feeling?",
        kind: QuestionKind::RATING,
        required: true,
        category: QuestionCategory::Anxiety,
    },
    Question {
        id: "energy",
        text: "How would you rate your energy level today?",
        kind: QuestionKind::RATING,
        required: true,
        category: QuestionCategory::Energy,
    },
    Question {
        id: "appetite",
        text: "How has your appetite been recently?",
        kind: QuestionKind::Radio {
            options: &AppetiteLevel::LABELS,
        },
        required: true,
        category: QuestionCategory::Appetite,
    },
    Question {
        id: "interest",
        text: "How interested are you in activities you usually enjoy?",
        kind: QuestionKind::RATING,
        required: true,
        category: QuestionCategory::Mood,
    },
    Question {
        id: "concentration",
        text: "How would you rate your ability to concentrate today?",
        kind: QuestionKind::RATING,
        required: true,
        category: QuestionCategory::General,
    },
    Question {
        id: "stressors",
        text: "What are your main sources of stress currently?",
        kind: QuestionKind::Textarea,
        required: false,
        category: QuestionCategory::Stress,
    },
];

/// Ordered collection of assessment questions.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// The standard eight-question assessment.
    pub fn standard() -> Self {
        Self {
            questions: &STANDARD_QUESTIONS,
        }
    }

    pub fn get(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Ids of required questions without a usable answer, in question order.
    pub fn missing_required(&self, answers: &AssessmentAnswers) -> Vec<&'static str> {
        self.questions
            .iter()
            .filter(|question| question.required)
            .filter(|question| {
                answers
                    .get(question.id)
                    .is_none_or(|value| !question.accepts(value))
            })
            .map(|question| question.id)
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}
