use serde_json::{json, Value};

use crate::study_engine::{catalog::Catalog, models::{Card, QuizQuestion}};

/// Build the card block shown on the question face.
fn card_face(card: &Card) -> Value {
    match card {
        Card::Lesson(c) => json!({
            "kind": "lesson",
            "prompt": c.text.source,
            "lesson": c.lesson,
            "global_index": c.global_index
        }),
        Card::Proverb(c) => json!({
            "kind": "proverb",
            "prompt": c.text.source
        }),
    }
}

/// Map a question to the JSON a client renders.
///
/// `number` is the 1-based position within the quiz. The correct option is
/// left out; clients check answers with [`check_answer`].
pub fn question_payload(question: &QuizQuestion, number: usize) -> Value {
    let options: Vec<Value> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| json!({ "id": i, "text": text }))
        .collect();

    json!({
        "number": number,
        "card": card_face(&question.card),
        "options": options
    })
}

/// Payloads for a whole quiz, numbered from 1.
pub fn quiz_payload(questions: &[QuizQuestion]) -> Value {
    let items: Vec<Value> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| question_payload(q, i + 1))
        .collect();
    json!({ "total": questions.len(), "questions": items })
}

/// Grade one option against a question.
pub fn check_answer(question: &QuizQuestion, option: usize) -> Value {
    json!({
        "is_correct": question.is_correct(option),
        "correct_index": question.correct_option_index,
        "correct_text": question.correct_text()
    })
}

/// Home-screen listing: one entry per deck plus the proverb count.
pub fn deck_listing(catalog: &Catalog) -> Value {
    let decks: Vec<Value> = catalog
        .decks()
        .iter()
        .map(|d| json!({
            "id": d.id,
            "title": d.title,
            "count": d.count,
            "range": format!("{}-{}", d.global_start, d.global_end)
        }))
        .collect();

    json!({
        "total_cards": catalog.all_cards().len(),
        "decks": decks,
        "proverbs": catalog.proverbs().len()
    })
}
