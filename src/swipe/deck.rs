use crate::swipe::gesture::SwipeDirection;

/// Position within a stack of `count` cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDeck {
    count: usize,
    active: usize,
}

impl CardDeck {
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `None` for an empty deck, otherwise always in `0..count`.
    pub fn active(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    pub fn can_go_previous(&self) -> bool {
        self.active > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.active + 1 < self.count
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.active += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.active -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }

    /// A completed swipe moves to the next card.
    pub fn advance(&mut self) {
        self.next();
    }

    /// Left and right swipes both advance for now; the direction is kept so a
    /// "like" outcome can hang off right swipes later.
    pub fn on_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left | SwipeDirection::Right => self.advance(),
        }
    }

    /// Stacking order: the active card on top, neighbours just beneath.
    pub fn z_index(&self, index: usize) -> usize {
        self.count - index.abs_diff(self.active)
    }

    /// Fill ratio for the progress bar, `(active + 1) / count`.
    pub fn progress(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            (self.active + 1) as f64 / self.count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe::gesture::SwipeGesture;

    #[test]
    fn empty_deck_has_no_active_card() {
        let mut deck = CardDeck::new(0);
        deck.next();
        deck.previous();
        deck.advance();
        assert!(deck.is_empty());
        assert_eq!(deck.active(), None);
        assert!(!deck.is_active(0));
        assert_eq!(deck.progress(), 0.0);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut deck = CardDeck::new(3);
        deck.previous();
        assert_eq!(deck.active(), Some(0));
        deck.next();
        deck.next();
        deck.next();
        assert_eq!(deck.active(), Some(2));
        assert!(!deck.can_go_next());
        deck.reset();
        assert_eq!(deck.active(), Some(0));
        assert!(!deck.can_go_previous());
    }

    #[test]
    fn both_directions_advance() {
        let mut deck = CardDeck::new(3);
        deck.on_swipe(SwipeDirection::Left);
        assert_eq!(deck.active(), Some(1));
        deck.on_swipe(SwipeDirection::Right);
        assert_eq!(deck.active(), Some(2));
        deck.on_swipe(SwipeDirection::Right);
        assert_eq!(deck.active(), Some(2));
    }

    #[test]
    fn swipe_threshold_governs_index_changes() {
        for offset in [-250.0, -100.5, -100.0, -30.0, 0.0, 30.0, 100.0, 100.5, 250.0] {
            let mut deck = CardDeck::new(5);
            let mut gesture = SwipeGesture::new();
            gesture.begin(400.0);
            gesture.update(400.0 + offset);
            if let Some(direction) = gesture.release() {
                deck.on_swipe(direction);
            }
            let expected = if f64::abs(offset) > 100.0 { 1 } else { 0 };
            assert_eq!(deck.active(), Some(expected), "offset {offset}");
        }
    }

    #[test]
    fn active_index_stays_in_bounds() {
        // Deterministic pseudo-random operation sequences over several sizes.
        let mut seed: u32 = 0x2545_f491;
        for count in 1..=6 {
            let mut deck = CardDeck::new(count);
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                match seed % 5 {
                    0 => deck.advance(),
                    1 => deck.previous(),
                    2 => deck.next(),
                    3 => deck.reset(),
                    _ => deck.on_swipe(SwipeDirection::Left),
                }
                let active = deck.active().unwrap();
                assert!(active < count);
            }
        }
    }

    #[test]
    fn z_index_puts_active_card_on_top() {
        let mut deck = CardDeck::new(4);
        deck.next();
        let order: Vec<usize> = (0..4).map(|i| deck.z_index(i)).collect();
        assert_eq!(order, vec![3, 4, 3, 2]);
    }

    #[test]
    fn progress_tracks_position() {
        let mut deck = CardDeck::new(4);
        assert_eq!(deck.progress(), 0.25);
        deck.next();
        deck.next();
        deck.next();
        assert_eq!(deck.progress(), 1.0);
    }
}
