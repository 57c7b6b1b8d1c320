use chrono::{
    DateTime,
    Local,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Subjects the backend has curriculum material for.
pub const SUBJECTS: &[&str] =
    &["mathematics", "chemistry", "biology", "physics", "kiswahili", "english"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeLevel {
    Primary,
    Secondary,
}

impl GradeLevel {
    /// Wire form used by the backend (`grade_level` field).
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Primary => "primary",
            GradeLevel::Secondary => "secondary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Primary => "Primary",
            GradeLevel::Secondary => "Secondary",
        }
    }
}

/// Grade level and subject a request is asked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyContext {
    pub grade: GradeLevel,
    pub subject: String,
}

impl StudyContext {
    pub fn new(grade: GradeLevel, subject: impl Into<String>) -> Self {
        Self { grade, subject: subject.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrigin {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once appended; the transcript
/// only ever grows, in creation order.
#[derive(Debug, Clone)]
pub struct Turn {
    pub content: String,
    pub origin: TurnOrigin,
    pub created_at: DateTime<Local>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { content: content.into(), origin: TurnOrigin::User, created_at: Local::now() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { content: content.into(), origin: TurnOrigin::Assistant, created_at: Local::now() }
    }

    pub fn is_user(&self) -> bool {
        self.origin == TurnOrigin::User
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashCard {
    pub question: String,
    pub answer: String,
}

/// The fixed, ordered set of flashcards produced by one generation call.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<FlashCard>,
}

impl Deck {
    pub fn new(cards: Vec<FlashCard>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&FlashCard> {
        self.cards.get(index)
    }
}
