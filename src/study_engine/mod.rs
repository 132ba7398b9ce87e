//! Core study engine: dataset loading, the card index, and quiz generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cards, decks, quiz request/response structs |
//! | `loader`    | Raw nested dataset -> [`Catalog`], with a configurable schema |
//! | `catalog`   | Read-only card index: lookup by lesson and by global index |
//! | `shuffle`   | Fisher-Yates shuffle and sampling without replacement |
//! | `generator` | `generate_quiz()`: randomized multiple-choice questions |
//! | `session`   | Scoring for one run through a quiz |
//! | `player`    | Card-by-card navigation and "jump to card" validation |

pub mod catalog;
pub mod generator;
pub mod loader;
pub mod models;
pub mod player;
pub mod session;
pub mod shuffle;

pub use catalog::Catalog;
pub use generator::{generate_quiz, generate_quiz_with_rng};
pub use loader::{load_path, load_str, load_value, DatasetSchema};
pub use models::{
    Card, Deck, LessonCard, ProverbCard, QuizQuestion, QuizRequest, QuizSelector, TextPair,
    DEFAULT_QUESTION_COUNT,
};
pub use player::{CardPlayer, StudyView};
pub use session::{AnswerOutcome, QuizSession, QuizSummary, Verdict};
