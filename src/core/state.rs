//! Full match state.
//!
//! `GameState` is the single source of truth for one Cambio match: hands,
//! piles, whose turn it is, the phase machine data, cambio bookkeeping, the
//! RNG stream, and the append-only round log. It is created by the deal,
//! mutated exclusively through the action resolver, and read by the
//! observation layer.
//!
//! The round log uses an `im` persistent vector so cloning a state for a
//! search-based agent stays O(1) on the log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::card::Card;
use super::deck::Deck;
use super::error::GameError;
use super::hand::{Hand, HAND_SIZE};
use super::rng::GameRng;
use super::seat::{SeatId, SeatMap};

/// Smallest supported table.
pub const MIN_SEATS: usize = 2;
/// Largest supported table; 6 seats leave 29 cards in the piles after the
/// deal.
pub const MAX_SEATS: usize = 6;
/// Slots each seat looks at before play starts (slots 0 and 1).
pub const INITIAL_PEEKS: usize = 2;

/// Where a turn currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The seat to act has not drawn yet.
    AwaitingDraw,
    /// The seat to act holds a drawn card and must place or discard it.
    DecidingDrawnCard,
    /// A discarded power card awaits its decision(s); see
    /// [`PendingPower`].
    ResolvingPower,
    /// The match finished normally and can be scored.
    GameOver,
    /// The match died on the fatal empty-pile condition. Distinct from
    /// [`Phase::GameOver`] so trainers can tell the two apart.
    Aborted,
}

impl Phase {
    /// Whether the match has stopped, normally or not.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Aborted)
    }
}

/// The sub-step an unresolved power card is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingPower {
    /// 7 or 8: the actor may look at one own slot.
    PeekOwn,
    /// 9 or 10: the actor may look at one slot of another seat.
    PeekOther,
    /// Jack or Queen: the actor may blind-swap an own slot with another
    /// seat's slot.
    BlindSwap,
    /// King, first step: the actor may look at one slot of another seat.
    KingLook,
    /// King, second step: the actor saw `seat`/`slot` and may now swap it
    /// with an own slot, or skip.
    KingDecide { seat: SeatId, slot: usize },
}

/// Complete state of a single match.
///
/// Hands and deck are private: reads go through accessors, mutation is
/// crate-internal so only the resolver can touch cards.
#[derive(Clone, Debug)]
pub struct GameState {
    seat_count: usize,
    hands: SeatMap<Hand>,
    deck: Deck,
    current_seat: SeatId,
    phase: Phase,
    pending_power: Option<PendingPower>,
    /// The card held between draw and decision, if any.
    drawn: Option<Card>,
    cambio_caller: Option<SeatId>,
    /// Turns still to be played once cambio is called.
    final_turns_left: Option<u8>,
    turn_number: u32,
    rng: GameRng,
    round_log: Vector<ActionRecord>,
}

impl GameState {
    /// Deal a fresh match from a shuffled standard deck.
    ///
    /// Four cards per seat; each seat privately looks at its slots 0 and 1;
    /// one card is flipped from the draw pile to start the discard pile.
    /// Seat 0 acts first.
    #[must_use]
    pub fn new(seat_count: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = Deck::standard(&mut rng);
        Self::deal(seat_count, deck, rng).expect("standard deck covers the deal")
    }

    /// Deal a match from an explicit deck, for tests and replay.
    ///
    /// Errors with [`GameError::EmptyPile`] if the deck cannot cover the
    /// deal (four cards per seat plus the flipped starter).
    pub fn from_deck(seat_count: usize, deck: Deck, seed: u64) -> Result<Self, GameError> {
        Self::deal(seat_count, deck, GameRng::new(seed))
    }

    fn deal(seat_count: usize, mut deck: Deck, mut rng: GameRng) -> Result<Self, GameError> {
        assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&seat_count),
            "Seat count must be {MIN_SEATS}-{MAX_SEATS}"
        );

        let mut dealt: Vec<[Card; HAND_SIZE]> = Vec::with_capacity(seat_count);
        for _ in 0..seat_count {
            dealt.push([
                deck.draw(&mut rng)?,
                deck.draw(&mut rng)?,
                deck.draw(&mut rng)?,
                deck.draw(&mut rng)?,
            ]);
        }
        let mut hands = SeatMap::new(seat_count, |seat| Hand::new(dealt[seat.index()], seat_count));

        for (seat, hand) in hands.iter_mut() {
            for slot in 0..INITIAL_PEEKS {
                hand.grant(seat, slot);
            }
        }

        let first_up = deck.draw(&mut rng)?;
        deck.discard(first_up);

        Ok(Self {
            seat_count,
            hands,
            deck,
            current_seat: SeatId::new(0),
            phase: Phase::AwaitingDraw,
            pending_power: None,
            drawn: None,
            cambio_caller: None,
            final_turns_left: None,
            turn_number: 1,
            rng,
            round_log: Vector::new(),
        })
    }

    // === Read access ===

    /// Number of seats at the table.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seat_count
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, seat: SeatId) -> &Hand {
        &self.hands[seat]
    }

    /// The shared piles.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The seat currently to act.
    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current_seat
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The power sub-step awaiting a decision, if any.
    #[must_use]
    pub fn pending_power(&self) -> Option<PendingPower> {
        self.pending_power
    }

    /// The card held between draw and decision, if any. Only the current
    /// seat has seen it; observations mask it for everyone else.
    #[must_use]
    pub fn drawn(&self) -> Option<Card> {
        self.drawn
    }

    /// The seat that called cambio, if any.
    #[must_use]
    pub fn cambio_caller(&self) -> Option<SeatId> {
        self.cambio_caller
    }

    /// Turns left in the final round, once cambio is called.
    #[must_use]
    pub fn final_turns_left(&self) -> Option<u8> {
        self.final_turns_left
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The append-only log of resolved actions.
    #[must_use]
    pub fn round_log(&self) -> &Vector<ActionRecord> {
        &self.round_log
    }

    /// Every card in the match: piles, hands, and the held drawn card.
    ///
    /// Constant for the whole match; the conservation invariant the tests
    /// assert after every resolution.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.card_count()
            + self.seat_count * HAND_SIZE
            + usize::from(self.drawn.is_some())
    }

    /// Clone this state for speculative play.
    ///
    /// Takes `&mut self` because the clone gets a forked RNG stream, so the
    /// clone and the original diverge deterministically.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        let rng = self.rng.fork();
        Self {
            rng,
            ..self.clone()
        }
    }

    // === Crate-internal mutation (resolver and turn machine only) ===

    pub(crate) fn hand_mut(&mut self, seat: SeatId) -> &mut Hand {
        &mut self.hands[seat]
    }

    pub(crate) fn draw_from_pile(&mut self) -> Result<Card, GameError> {
        self.deck.draw(&mut self.rng)
    }

    pub(crate) fn discard(&mut self, card: Card) {
        self.deck.discard(card);
    }

    pub(crate) fn set_drawn(&mut self, card: Option<Card>) {
        self.drawn = card;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_pending_power(&mut self, pending: Option<PendingPower>) {
        self.pending_power = pending;
    }

    pub(crate) fn set_current_seat(&mut self, seat: SeatId) {
        self.current_seat = seat;
    }

    pub(crate) fn set_final_turns_left(&mut self, turns: Option<u8>) {
        self.final_turns_left = turns;
    }

    pub(crate) fn mark_cambio(&mut self, caller: SeatId) {
        self.cambio_caller = Some(caller);
        self.final_turns_left = Some((self.seat_count - 1) as u8);
    }

    pub(crate) fn bump_turn(&mut self) {
        self.turn_number += 1;
    }

    /// Exchange two slots across two hands without revealing either card.
    ///
    /// Both slots become unknown to every viewer (`Hand::replace` clears
    /// the masks); the resolver re-grants the actor's knowledge for the
    /// King's look-then-decide swap.
    pub(crate) fn blind_swap(
        &mut self,
        seat_a: SeatId,
        slot_a: usize,
        seat_b: SeatId,
        slot_b: usize,
    ) {
        let card_a = self.hands[seat_a].card(slot_a);
        let card_b = self.hands[seat_b].card(slot_b);
        self.hands[seat_a].replace(slot_a, card_b);
        self.hands[seat_b].replace(slot_b, card_a);
    }

    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.round_log.push_back(record);
    }
}
