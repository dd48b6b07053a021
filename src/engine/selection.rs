use crate::core::card::Card;

/// Where the currently selected cards were picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    None,
    Waste,
    Tableau { column: usize, start: usize },
}

/// The player's current selection. Cards stay on the board while selected;
/// the selection only records what would move and from where.
#[derive(Debug, Clone)]
pub struct Selection {
    cards: Vec<Card>,
    source: SelectionSource,
}

impl Selection {
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            source: SelectionSource::None,
        }
    }

    pub fn new(cards: Vec<Card>, source: SelectionSource) -> Self {
        Self { cards, source }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card that must satisfy the destination rule (bottom of the run).
    pub fn leading_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn source(&self) -> SelectionSource {
        self.source
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.source = SelectionSource::None;
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::empty()
    }
}
