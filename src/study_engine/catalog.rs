//! The card index: the flattened lesson cards, their deck summaries and the
//! proverb list, built once by the loader and read-only afterwards.
//!
//! Lesson cards are stored in global-index order, so card `i` lives at slot
//! `i - 1` and each deck is a contiguous slice. Both lookups avoid scanning.

use serde::Serialize;

use crate::study_engine::models::{Deck, LessonCard, ProverbCard};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    cards: Vec<LessonCard>,
    decks: Vec<Deck>,
    proverbs: Vec<ProverbCard>,
}

impl Catalog {
    /// Assemble a catalog from loader output.
    ///
    /// Callers must pass cards numbered `1..=N` in order and decks that tile
    /// that range in ascending lesson order; the loader guarantees both.
    pub(crate) fn from_parts(
        cards: Vec<LessonCard>,
        decks: Vec<Deck>,
        proverbs: Vec<ProverbCard>,
    ) -> Self {
        debug_assert!(cards
            .iter()
            .enumerate()
            .all(|(i, c)| c.global_index as usize == i + 1));
        debug_assert!(decks.windows(2).all(|w| w[0].id < w[1].id));
        Catalog { cards, decks, proverbs }
    }

    pub fn all_cards(&self) -> &[LessonCard] {
        &self.cards
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn proverbs(&self) -> &[ProverbCard] {
        &self.proverbs
    }

    pub fn deck(&self, lesson_id: u32) -> Option<&Deck> {
        self.decks
            .binary_search_by_key(&lesson_id, |d| d.id)
            .ok()
            .map(|i| &self.decks[i])
    }

    /// Cards of one lesson in source order; empty when the lesson is unknown.
    pub fn deck_cards(&self, lesson_id: u32) -> &[LessonCard] {
        match self.deck(lesson_id) {
            Some(deck) => {
                let start = deck.global_start as usize - 1;
                let end = deck.global_end as usize;
                self.cards.get(start..end).unwrap_or(&[])
            }
            None => &[],
        }
    }

    /// Look up a lesson card by its 1-based global index.
    ///
    /// Takes a signed value so raw user input (0, negatives) can be checked
    /// without a separate conversion step.
    pub fn card_by_global_index(&self, index: i64) -> Option<&LessonCard> {
        if index < 1 {
            return None;
        }
        let slot = usize::try_from(index - 1).ok()?;
        self.cards.get(slot).filter(|c| i64::from(c.global_index) == index)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.proverbs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::models::TextPair;

    fn card(lesson: u32, global_index: u32) -> LessonCard {
        LessonCard {
            text: TextPair::new(format!("s{global_index}"), format!("t{global_index}")),
            lesson,
            global_index,
        }
    }

    fn two_lessons() -> Catalog {
        let cards = vec![card(2, 1), card(2, 2), card(2, 3), card(10, 4), card(10, 5)];
        let decks = vec![
            Deck { id: 2, title: "Lesson 2".into(), count: 3, global_start: 1, global_end: 3 },
            Deck { id: 10, title: "Lesson 10".into(), count: 2, global_start: 4, global_end: 5 },
        ];
        Catalog::from_parts(cards, decks, Vec::new())
    }

    #[test]
    fn deck_cards_slices_the_lesson() {
        let cat = two_lessons();
        let ten = cat.deck_cards(10);
        assert_eq!(ten.len(), 2);
        assert!(ten.iter().all(|c| c.lesson == 10));
        assert_eq!(ten[0].global_index, 4);
        assert!(cat.deck_cards(3).is_empty());
    }

    #[test]
    fn global_lookup_handles_out_of_range() {
        let cat = two_lessons();
        assert_eq!(cat.card_by_global_index(1).map(|c| c.global_index), Some(1));
        assert_eq!(cat.card_by_global_index(5).map(|c| c.lesson), Some(10));
        assert!(cat.card_by_global_index(0).is_none());
        assert!(cat.card_by_global_index(-3).is_none());
        assert!(cat.card_by_global_index(6).is_none());
        assert!(cat.card_by_global_index(i64::MAX).is_none());
    }

    #[test]
    fn empty_catalog_answers_every_query() {
        let cat = Catalog::default();
        assert!(cat.is_empty());
        assert!(cat.all_cards().is_empty());
        assert!(cat.decks().is_empty());
        assert!(cat.deck_cards(1).is_empty());
        assert!(cat.card_by_global_index(1).is_none());
    }
}
