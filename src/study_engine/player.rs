//! Card-player navigation over one study view.
//!
//! Movement wraps at both ends. Jump targets are validated here so a UI can
//! show the [`JumpError`] message as-is.

use serde::{Deserialize, Serialize};

use crate::error::JumpError;
use crate::study_engine::{catalog::Catalog, models::Card};

/// Which cards the player walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyView {
    AllCards,
    Lesson(u32),
    Proverbs,
}

#[derive(Debug, Clone)]
pub struct CardPlayer {
    view: StudyView,
    cards: Vec<Card>,
    cursor: usize,
}

impl CardPlayer {
    pub fn new(catalog: &Catalog, view: StudyView) -> Self {
        let cards = match view {
            StudyView::AllCards => catalog.all_cards().iter().cloned().map(Card::Lesson).collect(),
            StudyView::Lesson(id) => {
                catalog.deck_cards(id).iter().cloned().map(Card::Lesson).collect()
            }
            StudyView::Proverbs => catalog.proverbs().iter().cloned().map(Card::Proverb).collect(),
        };
        CardPlayer { view, cards, cursor: 0 }
    }

    pub fn view(&self) -> StudyView {
        self.view
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn next_card(&mut self) -> Option<&Card> {
        if !self.cards.is_empty() {
            self.cursor = (self.cursor + 1) % self.cards.len();
        }
        self.current()
    }

    pub fn previous_card(&mut self) -> Option<&Card> {
        if !self.cards.is_empty() {
            let len = self.cards.len();
            self.cursor = (self.cursor + len - 1) % len;
        }
        self.current()
    }

    /// Move to the card named by user input and return its position.
    ///
    /// Proverbs are addressed by 1-based position, lesson cards by their
    /// global index. The cursor only moves on success.
    pub fn jump(&mut self, input: &str) -> Result<usize, JumpError> {
        let target: i64 = input.trim().parse().map_err(|_| JumpError::NotANumber)?;
        if self.cards.is_empty() {
            return Err(JumpError::EmptyView);
        }

        let position = match self.view {
            StudyView::Proverbs => {
                let max = self.cards.len();
                usize::try_from(target)
                    .ok()
                    .filter(|n| (1..=max).contains(n))
                    .map(|n| n - 1)
                    .ok_or(JumpError::OutOfRange { max })?
            }
            StudyView::AllCards => self
                .find_global(target)
                .ok_or(JumpError::CardNotFound(target))?,
            StudyView::Lesson(lesson) => self
                .find_global(target)
                .ok_or(JumpError::NotInLesson { index: target, lesson })?,
        };

        self.cursor = position;
        Ok(position)
    }

    fn find_global(&self, target: i64) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| c.global_index().map(i64::from) == Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::loader::{load_value, DatasetSchema};
    use serde_json::json;

    fn catalog() -> Catalog {
        let raw = json!({
            "Lesson 1": { "Vocabulary": [
                { "source": "house", "target": "domus" },
                { "source": "road", "target": "via" }
            ]},
            "Lesson 2": { "Vocabulary": [
                { "source": "water", "target": "aqua" },
                { "source": "fire", "target": "ignis" },
                { "source": "earth", "target": "terra" }
            ]},
            "Proverbs": [
                { "source": "time flies", "target": "tempus fugit" },
                { "source": "seize the day", "target": "carpe diem" }
            ]
        });
        load_value(&raw, &DatasetSchema::default())
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let cat = catalog();
        let mut p = CardPlayer::new(&cat, StudyView::Lesson(2));
        assert_eq!(p.current().map(Card::target), Some("aqua"));
        assert_eq!(p.previous_card().map(Card::target), Some("terra"));
        assert_eq!(p.next_card().map(Card::target), Some("aqua"));
        p.next_card();
        p.next_card();
        assert_eq!(p.next_card().map(Card::target), Some("aqua"));
    }

    #[test]
    fn lesson_view_jumps_by_global_index() {
        let cat = catalog();
        let mut p = CardPlayer::new(&cat, StudyView::Lesson(2));
        assert_eq!(p.jump(" 4 "), Ok(1));
        assert_eq!(p.current().map(Card::target), Some("ignis"));
        assert_eq!(p.jump("1"), Err(JumpError::NotInLesson { index: 1, lesson: 2 }));
        assert_eq!(p.position(), 1);
    }

    #[test]
    fn all_cards_view_reports_missing_cards() {
        let cat = catalog();
        let mut p = CardPlayer::new(&cat, StudyView::AllCards);
        assert_eq!(p.len(), 5);
        assert_eq!(p.jump("5"), Ok(4));
        assert_eq!(p.jump("0"), Err(JumpError::CardNotFound(0)));
        assert_eq!(p.jump("99"), Err(JumpError::CardNotFound(99)));
        assert_eq!(p.jump("abc"), Err(JumpError::NotANumber));
    }

    #[test]
    fn proverb_view_jumps_by_position() {
        let cat = catalog();
        let mut p = CardPlayer::new(&cat, StudyView::Proverbs);
        assert_eq!(p.jump("2"), Ok(1));
        assert_eq!(p.current().map(Card::target), Some("carpe diem"));
        assert_eq!(p.jump("3"), Err(JumpError::OutOfRange { max: 2 }));
        assert_eq!(p.jump("-1"), Err(JumpError::OutOfRange { max: 2 }));
        assert_eq!(JumpError::OutOfRange { max: 2 }.to_string(), "enter a number from 1 to 2");
    }

    #[test]
    fn empty_view_is_inert() {
        let cat = catalog();
        let mut p = CardPlayer::new(&cat, StudyView::Lesson(42));
        assert!(p.is_empty());
        assert!(p.next_card().is_none());
        assert!(p.previous_card().is_none());
        assert_eq!(p.jump("1"), Err(JumpError::EmptyView));
    }
}
