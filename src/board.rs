//! # Memory Board State Machine
//!
//! The whole game lives in [`Board`]: dealing a shuffled deck of paired
//! cards, flipping two at a time, resolving matches and mismatches, counting
//! moves, and detecting the win. The struct is pure state: no terminal
//! types, no real clock. Callers pass the current [`Instant`] into
//! [`Board::handle_click`] and [`Board::tick`], which keeps every transition
//! deterministic and testable.
//!
//! ## State transitions
//! - First click flips a card face up.
//! - Second click either matches (both cards lock face up immediately) or
//!   mismatches (both stay revealed until a fixed deadline passes, during
//!   which the board rejects further clicks).
//! - Clicking the flipped card again, or a card already solved, cancels the
//!   selection without a match check.
//!
//! The move counter counts *accepted* clicks: any click taken while the
//! board is neither locked nor won, including the cancel cases above. That
//! is the scoring rule, not an accident of ordering.

use std::time::{Duration, Instant};

use crate::rng::DealRng;

/// Smallest allowed grid size.
pub const MIN_SIZE: usize = 2;
/// Largest allowed grid size.
pub const MAX_SIZE: usize = 8;
/// Grid size used when none (or an out-of-range one) is supplied.
pub const DEFAULT_SIZE: usize = 4;
/// How long a mismatched pair stays revealed before flipping back.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// A single dealt card.
///
/// `id` is the card's position in the grid (row-major, `0..deck_len`).
/// `value` is the pair identifier; exactly two cards share each value.
/// Cards are immutable once dealt and replaced wholesale on a re-deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub value: u32,
}

/// What a click did to the board. Used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Click ignored: board locked, game won, or no card at that position.
    /// Does not count as a move.
    Rejected,
    /// Accepted click that changed nothing: the card was already the sole
    /// flipped card, or already solved. Counts as a move.
    Cancelled,
    /// First card of a pair revealed.
    First,
    /// Second card matched the first; both are now solved.
    Matched,
    /// Second card did not match; both stay revealed until the deadline.
    Mismatched,
}

/// Computes the win flag from the solved set and the dealt deck.
///
/// Won iff every dealt card has been solved. The empty-deck guard keeps a
/// board that has not dealt yet from reading as won.
#[must_use]
pub fn compute_won(solved: &[usize], cards: &[Card]) -> bool {
    !cards.is_empty() && solved.len() == cards.len()
}

/// The complete state of one memory game.
#[derive(Debug, Clone)]
pub struct Board {
    grid_size: usize,
    cards: Vec<Card>,
    /// Ids of cards currently revealed by the player (0, 1, or 2 entries).
    flipped: Vec<usize>,
    /// Ids of cards permanently revealed, appended in matched pairs.
    solved: Vec<usize>,
    move_count: u32,
    /// Rejects clicks while a mismatched pair is on display.
    locked: bool,
    won: bool,
    /// When the current mismatched pair flips back, if one is pending.
    mismatch_deadline: Option<Instant>,
    mismatch_delay: Duration,
    rng: DealRng,
}

impl Board {
    /// Creates a board and deals the first deck.
    ///
    /// An out-of-range `grid_size` falls back to [`DEFAULT_SIZE`], the same
    /// silent-ignore rule that governs size changes during play.
    pub fn new(grid_size: usize, mismatch_delay: Duration, rng: DealRng) -> Self {
        let grid_size = if (MIN_SIZE..=MAX_SIZE).contains(&grid_size) {
            grid_size
        } else {
            DEFAULT_SIZE
        };
        let mut board = Self {
            grid_size,
            cards: Vec::new(),
            flipped: Vec::new(),
            solved: Vec::new(),
            move_count: 0,
            locked: false,
            won: false,
            mismatch_deadline: None,
            mismatch_delay,
            rng,
        };
        board.deal();
        board
    }

    /// Deals a fresh shuffled deck for the current grid size.
    ///
    /// Builds the values `1..=pairs` twice over, shuffles them uniformly,
    /// and assigns sequential ids in final order. All per-game state resets.
    /// When the grid has an odd number of slots the unpaired slot is dropped,
    /// so a size-3 grid deals 8 cards, not 9.
    pub fn deal(&mut self) {
        let total = self.grid_size * self.grid_size;
        let pairs = total / 2;

        let mut values: Vec<u32> = (1..=pairs as u32).chain(1..=pairs as u32).collect();
        self.rng.shuffle(&mut values);

        self.cards = values
            .into_iter()
            .enumerate()
            .map(|(id, value)| Card { id, value })
            .collect();

        self.flipped.clear();
        self.solved.clear();
        self.move_count = 0;
        self.locked = false;
        self.mismatch_deadline = None;
        self.won = compute_won(&self.solved, &self.cards);
    }

    /// Changes the grid size and re-deals.
    ///
    /// Values outside `[MIN_SIZE, MAX_SIZE]` are silently ignored, no error
    /// surfaces and the board is left untouched. Setting the current size
    /// again is also a no-op, so the deck only reshuffles on a real change.
    pub fn set_grid_size(&mut self, size: usize) {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) && size != self.grid_size {
            self.grid_size = size;
            self.deal();
        }
    }

    /// Handles a click on the card at `id`.
    ///
    /// Guards first: nothing happens while the board is locked, after a win,
    /// or when `id` names no dealt card. Every click past the guards counts
    /// one move, then the transition runs:
    ///
    /// - no card flipped: `id` becomes the first selection;
    /// - one card flipped: a second selection resolves immediately on a
    ///   match, or arms the mismatch deadline at `now + delay` on a miss.
    ///   Re-clicking the same card or a solved card cancels the selection.
    ///
    /// A third simultaneous flip cannot happen: the lock is held for the
    /// whole two-flipped window.
    pub fn handle_click(&mut self, id: usize, now: Instant) -> FlipOutcome {
        if self.locked || self.won || id >= self.cards.len() {
            return FlipOutcome::Rejected;
        }

        // Moves count accepted clicks, not useful flips. The increment lands
        // before the cancel checks below.
        self.move_count += 1;

        if self.flipped.is_empty() {
            if self.solved.contains(&id) {
                return FlipOutcome::Cancelled;
            }
            self.flipped.push(id);
            return FlipOutcome::First;
        }

        let prev = self.flipped[0];
        self.locked = true;

        if id == prev || self.solved.contains(&id) {
            self.flipped.clear();
            self.locked = false;
            return FlipOutcome::Cancelled;
        }

        self.flipped.push(id);
        if self.cards[prev].value == self.cards[id].value {
            self.solved.push(prev);
            self.solved.push(id);
            self.flipped.clear();
            self.locked = false;
            self.won = compute_won(&self.solved, &self.cards);
            FlipOutcome::Matched
        } else {
            self.mismatch_deadline = Some(now + self.mismatch_delay);
            FlipOutcome::Mismatched
        }
    }

    /// Flips a mismatched pair back once its deadline has passed.
    ///
    /// Called once per frame from the event loop. The deadline is never
    /// cancelled early; until it expires the lock keeps the pair on display
    /// and the board inert.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.mismatch_deadline {
            if now >= deadline {
                self.flipped.clear();
                self.locked = false;
                self.mismatch_deadline = None;
            }
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Ids currently flipped by the player (not the solved ones).
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn is_solved(&self, id: usize) -> bool {
        self.solved.contains(&id)
    }

    /// Whether the card at `id` shows its face: flipped or solved.
    pub fn is_revealed(&self, id: usize) -> bool {
        self.flipped.contains(&id) || self.is_solved(id)
    }

    /// The seed the deck was shuffled with, when one was supplied.
    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: usize) -> Board {
        Board::new(size, MISMATCH_DELAY, DealRng::seeded(42))
    }

    /// Two ids sharing a value, and one id from a different pair.
    fn sample_ids(board: &Board) -> (usize, usize, usize) {
        let cards = board.cards();
        let first = cards[0];
        let partner = cards
            .iter()
            .find(|c| c.value == first.value && c.id != first.id)
            .expect("every value appears twice");
        let other = cards
            .iter()
            .find(|c| c.value != first.value)
            .expect("more than one pair");
        (first.id, partner.id, other.id)
    }

    #[test]
    fn deal_drops_the_odd_slot() {
        assert_eq!(board(2).cards().len(), 4);
        assert_eq!(board(3).cards().len(), 8);
        assert_eq!(board(5).cards().len(), 24);
        assert_eq!(board(8).cards().len(), 64);
    }

    #[test]
    fn out_of_range_size_is_ignored() {
        let mut b = board(4);
        let before: Vec<Card> = b.cards().to_vec();

        b.set_grid_size(9);
        b.set_grid_size(1);
        b.set_grid_size(0);

        assert_eq!(b.grid_size(), 4);
        assert_eq!(b.cards(), &before[..]);
    }

    #[test]
    fn match_fast_path_needs_no_tick() {
        let mut b = board(4);
        let (a, partner, _) = sample_ids(&b);
        let now = Instant::now();

        assert_eq!(b.handle_click(a, now), FlipOutcome::First);
        assert_eq!(b.handle_click(partner, now), FlipOutcome::Matched);

        assert!(b.is_solved(a));
        assert!(b.is_solved(partner));
        assert!(!b.is_locked());
        assert!(b.flipped().is_empty());
    }

    #[test]
    fn mismatch_holds_until_deadline() {
        let mut b = board(4);
        let (a, _, other) = sample_ids(&b);
        let t0 = Instant::now();

        b.handle_click(a, t0);
        assert_eq!(b.handle_click(other, t0), FlipOutcome::Mismatched);
        assert!(b.is_locked());
        assert!(b.is_revealed(a) && b.is_revealed(other));

        // One millisecond short: still locked, still revealed.
        b.tick(t0 + MISMATCH_DELAY - Duration::from_millis(1));
        assert!(b.is_locked());

        b.tick(t0 + MISMATCH_DELAY);
        assert!(!b.is_locked());
        assert!(!b.is_revealed(a) && !b.is_revealed(other));
        assert!(!b.is_solved(a) && !b.is_solved(other));
    }

    #[test]
    fn clicks_while_locked_are_rejected_and_uncounted() {
        let mut b = board(4);
        let (a, partner, other) = sample_ids(&b);
        let t0 = Instant::now();

        b.handle_click(a, t0);
        b.handle_click(other, t0);
        let moves = b.move_count();

        assert_eq!(b.handle_click(partner, t0), FlipOutcome::Rejected);
        assert_eq!(b.move_count(), moves);
    }

    #[test]
    fn self_click_cancels_but_counts() {
        let mut b = board(4);
        let (a, _, _) = sample_ids(&b);
        let now = Instant::now();

        b.handle_click(a, now);
        assert_eq!(b.handle_click(a, now), FlipOutcome::Cancelled);

        assert_eq!(b.move_count(), 2);
        assert!(b.flipped().is_empty());
        assert!(!b.is_locked());
        assert!(!b.is_solved(a));
    }

    #[test]
    fn solved_card_click_cancels_but_counts() {
        let mut b = board(4);
        let (a, partner, other) = sample_ids(&b);
        let now = Instant::now();

        b.handle_click(a, now);
        b.handle_click(partner, now);
        assert!(b.is_solved(a));

        // As a first selection.
        assert_eq!(b.handle_click(a, now), FlipOutcome::Cancelled);
        assert!(b.flipped().is_empty());

        // As a second selection.
        b.handle_click(other, now);
        assert_eq!(b.handle_click(partner, now), FlipOutcome::Cancelled);
        assert!(b.flipped().is_empty());
        assert!(!b.is_locked());
    }

    #[test]
    fn compute_won_guards_the_empty_deck() {
        assert!(!compute_won(&[], &[]));
        let cards = [Card { id: 0, value: 1 }, Card { id: 1, value: 1 }];
        assert!(!compute_won(&[], &cards));
        assert!(compute_won(&[0, 1], &cards));
    }
}
