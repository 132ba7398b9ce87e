//! # vocab_drill_gen
//!
//! An offline vocabulary flashcard and quiz engine.
//!
//! The library loads a nested lesson dataset (lesson label -> vocabulary list,
//! plus an optional proverbs list), flattens it into a globally numbered card
//! index, and generates randomized multiple-choice quizzes from any lesson or
//! from the proverbs.
//!
//! ## How it works
//!
//! 1. Load the dataset once with [`load_path`] / [`load_str`]. Every valid
//!    vocabulary entry becomes a [`LessonCard`] with a 1-based global index;
//!    lessons are ordered by their number ("Lesson 10" after "Lesson 2").
//! 2. Pass the resulting [`Catalog`] by reference to whatever needs it. It is
//!    immutable and answers lookups by lesson and by global index.
//! 3. Call [`generate_quiz`] with a [`QuizRequest`]. Each call shuffles afresh;
//!    set `rng_seed` to make a quiz reproducible.
//! 4. Optionally drive the quiz through a [`QuizSession`] for scoring, or walk
//!    cards with a [`CardPlayer`].
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill_gen::{generate_quiz, load_str, DatasetSchema, QuizRequest, QuizSelector};
//!
//! let data = r#"{
//!     "Lesson 1": { "Vocabulary": [
//!         { "source": "house", "target": "domus" },
//!         { "source": "road",  "target": "via" },
//!         { "source": "water", "target": "aqua" },
//!         { "source": "fire",  "target": "ignis" }
//!     ]}
//! }"#;
//! let catalog = load_str(data, &DatasetSchema::default()).unwrap();
//!
//! let quiz = generate_quiz(&catalog, QuizRequest {
//!     selector: QuizSelector::Lesson(1),
//!     question_count: 2,
//!     rng_seed: Some(42),
//! });
//! assert_eq!(quiz.len(), 2);
//! for q in &quiz {
//!     assert_eq!(q.options[q.correct_option_index], q.card.target());
//! }
//! ```

pub mod client_view;
pub mod error;
pub mod study_engine;

// Convenience re-exports so callers can use `vocab_drill_gen::generate_quiz`
// directly without reaching into `study_engine::`.
pub use error::{JumpError, LoadError, SessionError};
pub use study_engine::{
    generate_quiz, generate_quiz_with_rng, load_path, load_str, load_value, AnswerOutcome, Card,
    CardPlayer, Catalog, DatasetSchema, Deck, LessonCard, ProverbCard, QuizQuestion, QuizRequest,
    QuizSelector, QuizSession, QuizSummary, StudyView, TextPair, Verdict, DEFAULT_QUESTION_COUNT,
};
