use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// The phrase pair every card carries: study language on the front,
/// target language on the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub source: String,
    pub target: String,
}

impl TextPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        TextPair { source: source.into(), target: target.into() }
    }
}

impl fmt::Display for TextPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.source, self.target)
    }
}

/// A vocabulary card that belongs to a numbered lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCard {
    pub text: TextPair,
    pub lesson: u32,
    /// 1-based, dense and unique across every lesson card.
    pub global_index: u32,
}

/// A proverb card. Proverbs live outside the lesson numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverbCard {
    pub text: TextPair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Lesson(LessonCard),
    Proverb(ProverbCard),
}

impl Card {
    pub fn text(&self) -> &TextPair {
        match self {
            Card::Lesson(c)  => &c.text,
            Card::Proverb(c) => &c.text,
        }
    }

    pub fn source(&self) -> &str {
        &self.text().source
    }

    pub fn target(&self) -> &str {
        &self.text().target
    }

    pub fn lesson(&self) -> Option<u32> {
        match self {
            Card::Lesson(c)  => Some(c.lesson),
            Card::Proverb(_) => None,
        }
    }

    pub fn global_index(&self) -> Option<u32> {
        match self {
            Card::Lesson(c)  => Some(c.global_index),
            Card::Proverb(_) => None,
        }
    }

    pub fn is_proverb(&self) -> bool {
        matches!(self, Card::Proverb(_))
    }
}

impl From<LessonCard> for Card {
    fn from(card: LessonCard) -> Self {
        Card::Lesson(card)
    }
}

impl From<ProverbCard> for Card {
    fn from(card: ProverbCard) -> Self {
        Card::Proverb(card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Lesson(c)  => write!(f, "#{} {}", c.global_index, c.text),
            Card::Proverb(c) => write!(f, "{}", c.text),
        }
    }
}

// ---------------------------------------------------------------------------
// Deck summaries
// ---------------------------------------------------------------------------

/// Summary of one lesson's contiguous run of global indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Lesson number.
    pub id: u32,
    /// Raw lesson label as it appeared in the dataset (e.g. "Lesson 7").
    pub title: String,
    pub count: usize,
    pub global_start: u32,
    /// Inclusive.
    pub global_end: u32,
}

impl Deck {
    pub fn contains(&self, global_index: u32) -> bool {
        (self.global_start..=self.global_end).contains(&global_index)
    }
}

// ---------------------------------------------------------------------------
// Quiz request / response types
// ---------------------------------------------------------------------------

/// Which deck a quiz draws its questions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizSelector {
    Lesson(u32),
    Proverbs,
}

impl fmt::Display for QuizSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizSelector::Lesson(id) => write!(f, "Lesson {id}"),
            QuizSelector::Proverbs   => write!(f, "Proverbs"),
        }
    }
}

impl From<u32> for QuizSelector {
    fn from(lesson: u32) -> Self {
        QuizSelector::Lesson(lesson)
    }
}

pub const DEFAULT_QUESTION_COUNT: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub selector: QuizSelector,
    pub question_count: usize,
    /// `Some` makes the quiz reproducible; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Request a quiz with the default question count and an entropy seed.
    pub fn new(selector: impl Into<QuizSelector>) -> Self {
        QuizRequest {
            selector: selector.into(),
            question_count: DEFAULT_QUESTION_COUNT,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub card: Card,
    /// Target-language strings, all distinct; one equals `card.target()`.
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

impl QuizQuestion {
    pub fn correct_text(&self) -> &str {
        self.card.target()
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proverb_cards_have_no_lesson_or_index() {
        let card = Card::from(ProverbCard { text: TextPair::new("a", "b") });
        assert!(card.is_proverb());
        assert_eq!(card.lesson(), None);
        assert_eq!(card.global_index(), None);
        assert_eq!(card.target(), "b");
    }

    #[test]
    fn lesson_card_serializes_with_kind_tag() {
        let card = Card::from(LessonCard {
            text: TextPair::new("house", "domus"),
            lesson: 1,
            global_index: 1,
        });
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["kind"], "lesson");
        assert_eq!(json["global_index"], 1);
        assert_eq!(json["text"]["target"], "domus");
    }

    #[test]
    fn quiz_request_defaults() {
        let req = QuizRequest::new(3u32);
        assert_eq!(req.selector, QuizSelector::Lesson(3));
        assert_eq!(req.question_count, DEFAULT_QUESTION_COUNT);
        assert!(req.rng_seed.is_none());
    }
}
