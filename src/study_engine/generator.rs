use std::collections::HashSet;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::study_engine::{
    catalog::Catalog,
    models::{Card, LessonCard, QuizQuestion, QuizRequest, QuizSelector},
    shuffle,
};

/// Wrong answers shown next to the correct one.
pub const DISTRACTORS_PER_QUESTION: usize = 3;

/// Lessons at or below this size borrow distractors from every lesson card.
pub const SMALL_LESSON_LIMIT: usize = 10;

/// Entry point: seeds an rng from the request and builds a fresh quiz.
pub fn generate_quiz(catalog: &Catalog, request: QuizRequest) -> Vec<QuizQuestion> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_quiz_with_rng(catalog, request.selector, request.question_count, &mut rng)
}

/// Build up to `question_count` questions from the selected deck.
///
/// Questions never repeat a card. Distractors are distinct target strings
/// that differ from the correct answer; a lesson quiz whose pool runs short
/// tops up from every lesson card, a proverb quiz keeps the shorter list.
pub fn generate_quiz_with_rng<R: Rng + ?Sized>(
    catalog: &Catalog,
    selector: QuizSelector,
    question_count: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let (deck, distractors, fallback) = pools(catalog, selector);
    if deck.is_empty() {
        debug!("{selector}: no cards, empty quiz");
        return Vec::new();
    }

    let mut selected = shuffle::shuffled(rng, &deck);
    selected.truncate(question_count.min(deck.len()));

    selected
        .into_iter()
        .map(|card| build_question(&mut *rng, card, &distractors, &fallback))
        .collect()
}

/// Resolve (deck pool, distractor pool, fallback pool) for a selector.
fn pools(catalog: &Catalog, selector: QuizSelector) -> (Vec<Card>, Vec<Card>, Vec<Card>) {
    let lesson_cards =
        |cards: &[LessonCard]| cards.iter().cloned().map(Card::Lesson).collect::<Vec<_>>();

    match selector {
        QuizSelector::Lesson(id) => {
            let deck = lesson_cards(catalog.deck_cards(id));
            let all = lesson_cards(catalog.all_cards());
            if deck.len() > SMALL_LESSON_LIMIT {
                (deck.clone(), deck, all)
            } else {
                (deck, all, Vec::new())
            }
        }
        QuizSelector::Proverbs => {
            let deck: Vec<Card> = catalog.proverbs().iter().cloned().map(Card::Proverb).collect();
            (deck.clone(), deck, Vec::new())
        }
    }
}

fn build_question<R: Rng + ?Sized>(
    rng: &mut R,
    card: Card,
    pool: &[Card],
    fallback: &[Card],
) -> QuizQuestion {
    let correct = card.target().to_string();

    let mut wrong = pick_distractors(rng, pool, &correct, &HashSet::new(), DISTRACTORS_PER_QUESTION);
    if wrong.len() < DISTRACTORS_PER_QUESTION && !fallback.is_empty() {
        let taken: HashSet<&str> = wrong.iter().map(String::as_str).collect();
        let extra = pick_distractors(
            rng,
            fallback,
            &correct,
            &taken,
            DISTRACTORS_PER_QUESTION - wrong.len(),
        );
        wrong.extend(extra);
    }
    if wrong.len() < DISTRACTORS_PER_QUESTION {
        debug!("only {} distractors for \"{}\"", wrong.len(), correct);
    }

    let mut options = wrong;
    options.push(correct.clone());
    shuffle::shuffle(rng, &mut options);
    let correct_option_index = options
        .iter()
        .position(|o| *o == correct)
        .unwrap_or_default();

    QuizQuestion { card, options, correct_option_index }
}

/// Sample `n` distinct target texts from `pool`, excluding `correct` and
/// anything in `taken`.
fn pick_distractors<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[Card],
    correct: &str,
    taken: &HashSet<&str>,
    n: usize,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let candidates: Vec<&str> = pool
        .iter()
        .map(Card::target)
        .filter(|t| *t != correct && !taken.contains(t))
        .filter(|t| seen.insert(*t))
        .collect();
    shuffle::sample(rng, candidates, n)
        .into_iter()
        .map(str::to_string)
        .collect()
}
