//! Hidden-information invariants: who knows what, and when they stop
//! knowing it.

use cambio_engine::{
    resolve, Action, Card, Deck, GameState, Observation, PendingPower, Phase, Rank, SeatId,
    SlotView, Suit, HAND_SIZE,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Deal a fully scripted match: explicit hands, starter discard, and the
/// cards the draw pile will yield in order.
fn rig(seat_hands: &[[Card; 4]], starter: Card, draws: &[Card]) -> GameState {
    let mut cards: Vec<Card> = seat_hands.iter().flatten().copied().collect();
    cards.push(starter);
    cards.extend_from_slice(draws);
    cards.reverse();
    GameState::from_deck(seat_hands.len(), Deck::from_piles(cards, vec![]), 0).unwrap()
}

fn four_seat_king_state() -> GameState {
    rig(
        &[
            [
                card(Rank::Two, Suit::Clubs),
                card(Rank::Three, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Five, Suit::Clubs),
            ],
            [
                card(Rank::Two, Suit::Hearts),
                card(Rank::Three, Suit::Hearts),
                card(Rank::Four, Suit::Hearts),
                card(Rank::Six, Suit::Hearts),
            ],
            [
                card(Rank::Six, Suit::Spades),
                card(Rank::Five, Suit::Spades), // the slot the King will find
                card(Rank::Nine, Suit::Clubs),
                card(Rank::Nine, Suit::Diamonds),
            ],
            [
                card(Rank::Ace, Suit::Hearts),
                card(Rank::Ace, Suit::Diamonds),
                card(Rank::Ace, Suit::Clubs),
                card(Rank::Ace, Suit::Spades),
            ],
        ],
        card(Rank::Six, Suit::Diamonds),
        &[card(Rank::King, Suit::Hearts)],
    )
}

/// Snapshot of what a viewer sees of every hand.
fn hand_views(state: &GameState, viewer: SeatId) -> Vec<[SlotView; HAND_SIZE]> {
    SeatId::all(state.seat_count())
        .map(|seat| Observation::of(state, viewer).hands[seat].clone())
        .collect()
}

#[test]
fn test_king_look_then_swap_into_unknown_slot() {
    // Seat 0 draws a King, looks at seat 2 slot 1 (a five), and swaps it
    // into own slot 2, which it never knew.
    let mut state = four_seat_king_state();
    let s0 = SeatId::new(0);
    let s2 = SeatId::new(2);

    resolve(&mut state, s0, Action::Draw).unwrap();
    resolve(&mut state, s0, Action::DiscardDrawn).unwrap();
    assert_eq!(state.pending_power(), Some(PendingPower::KingLook));

    let bystander1_before = hand_views(&state, SeatId::new(1));
    let bystander3_before = hand_views(&state, SeatId::new(3));

    let outcome = resolve(&mut state, s0, Action::PeekOther { seat: s2, slot: 1 }).unwrap();
    assert_eq!(outcome.reveals.len(), 1);
    assert_eq!(outcome.reveals[0].viewer(), s0);
    assert_eq!(
        state.pending_power(),
        Some(PendingPower::KingDecide { seat: s2, slot: 1 })
    );

    resolve(
        &mut state,
        s0,
        Action::BlindSwap {
            own_slot: 2,
            seat: s2,
            slot: 1,
        },
    )
    .unwrap();

    // The five landed in seat 0's slot 2, and seat 0 knows it.
    assert_eq!(state.hand(s0).card(2), card(Rank::Five, Suit::Spades));
    assert!(state.hand(s0).knows(s0, 2));
    assert_eq!(
        Observation::of(&state, s0).hands[s0][2],
        SlotView::Known(card(Rank::Five, Suit::Spades))
    );

    // Seat 2 lost its deal-time knowledge of slot 1.
    assert!(!state.hand(s2).knows(s2, 1));

    // Seat 0 never knew its outgoing slot 2 card, so it gains nothing
    // about where that card went.
    assert!(!state.hand(s2).knows(s0, 1));

    // Bystanders saw nothing change in any hand.
    assert_eq!(hand_views(&state, SeatId::new(1)), bystander1_before);
    assert_eq!(hand_views(&state, SeatId::new(3)), bystander3_before);
}

#[test]
fn test_king_swap_from_known_slot_transfers_knowledge() {
    // Same King, but the actor swaps out slot 0, which the deal revealed.
    // Watching their own known card move, they now know the target slot.
    let mut state = four_seat_king_state();
    let s0 = SeatId::new(0);
    let s2 = SeatId::new(2);

    resolve(&mut state, s0, Action::Draw).unwrap();
    resolve(&mut state, s0, Action::DiscardDrawn).unwrap();
    resolve(&mut state, s0, Action::PeekOther { seat: s2, slot: 1 }).unwrap();
    resolve(
        &mut state,
        s0,
        Action::BlindSwap {
            own_slot: 0,
            seat: s2,
            slot: 1,
        },
    )
    .unwrap();

    assert_eq!(state.hand(s0).card(0), card(Rank::Five, Suit::Spades));
    assert!(state.hand(s0).knows(s0, 0));

    // Seat 0's old 2C sits in seat 2 slot 1, and only seat 0 knows it.
    assert_eq!(state.hand(s2).card(1), card(Rank::Two, Suit::Clubs));
    assert!(state.hand(s2).knows(s0, 1));
    assert!(!state.hand(s2).knows(s2, 1));
}

#[test]
fn test_king_swap_must_name_the_peeked_slot() {
    let mut state = four_seat_king_state();
    let s0 = SeatId::new(0);
    let s2 = SeatId::new(2);

    resolve(&mut state, s0, Action::Draw).unwrap();
    resolve(&mut state, s0, Action::DiscardDrawn).unwrap();
    resolve(&mut state, s0, Action::PeekOther { seat: s2, slot: 1 }).unwrap();

    // A different slot, or a different seat, is not what was looked at.
    let err = resolve(
        &mut state,
        s0,
        Action::BlindSwap {
            own_slot: 0,
            seat: s2,
            slot: 2,
        },
    )
    .unwrap_err();
    assert_eq!(err, cambio_engine::GameError::InvalidTarget);

    let err = resolve(
        &mut state,
        s0,
        Action::BlindSwap {
            own_slot: 0,
            seat: SeatId::new(1),
            slot: 1,
        },
    )
    .unwrap_err();
    assert_eq!(err, cambio_engine::GameError::InvalidTarget);

    // Declining is always allowed; nothing moved.
    resolve(&mut state, s0, Action::SkipPower).unwrap();
    assert_eq!(state.hand(s2).card(1), card(Rank::Five, Suit::Spades));
    assert!(state.hand(s2).knows(s2, 1), "a declined swap destroys nothing");
}

/// The chosen blind-swap variant: a Jack/Queen swap never creates
/// knowledge: it destroys both slots' knowledge for every viewer, the
/// two owners and the actor included.
#[test]
fn test_blind_swap_destroys_knowledge_for_everyone() {
    let mut state = rig(
        &[
            [
                card(Rank::Two, Suit::Clubs),
                card(Rank::Three, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Five, Suit::Clubs),
            ],
            [
                card(Rank::Two, Suit::Hearts),
                card(Rank::Three, Suit::Hearts),
                card(Rank::Four, Suit::Hearts),
                card(Rank::Five, Suit::Hearts),
            ],
        ],
        card(Rank::Six, Suit::Diamonds),
        &[card(Rank::Jack, Suit::Spades)],
    );
    let s0 = SeatId::new(0);
    let s1 = SeatId::new(1);

    // Both owners know the slots about to move (deal peeks slot 0).
    assert!(state.hand(s0).knows(s0, 0));
    assert!(state.hand(s1).knows(s1, 0));

    resolve(&mut state, s0, Action::Draw).unwrap();
    resolve(&mut state, s0, Action::DiscardDrawn).unwrap();
    assert_eq!(state.pending_power(), Some(PendingPower::BlindSwap));

    resolve(
        &mut state,
        s0,
        Action::BlindSwap {
            own_slot: 0,
            seat: s1,
            slot: 0,
        },
    )
    .unwrap();

    // Contents crossed over.
    assert_eq!(state.hand(s0).card(0), card(Rank::Two, Suit::Hearts));
    assert_eq!(state.hand(s1).card(0), card(Rank::Two, Suit::Clubs));

    // Knowledge of both slots is gone for every viewer, actor included.
    for viewer in SeatId::all(2) {
        assert!(!state.hand(s0).knows(viewer, 0));
        assert!(!state.hand(s1).knows(viewer, 0));
    }
}

#[test]
fn test_peek_other_reveals_to_the_peeker_only() {
    let mut state = rig(
        &[
            [
                card(Rank::Two, Suit::Clubs),
                card(Rank::Three, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Five, Suit::Clubs),
            ],
            [
                card(Rank::Two, Suit::Hearts),
                card(Rank::Three, Suit::Hearts),
                card(Rank::Four, Suit::Hearts),
                card(Rank::Five, Suit::Hearts),
            ],
            [
                card(Rank::Two, Suit::Spades),
                card(Rank::Three, Suit::Spades),
                card(Rank::Four, Suit::Spades),
                card(Rank::Five, Suit::Spades),
            ],
        ],
        card(Rank::Six, Suit::Diamonds),
        &[card(Rank::Nine, Suit::Hearts)],
    );
    let s0 = SeatId::new(0);
    let s1 = SeatId::new(1);

    resolve(&mut state, s0, Action::Draw).unwrap();
    resolve(&mut state, s0, Action::DiscardDrawn).unwrap();
    resolve(&mut state, s0, Action::PeekOther { seat: s1, slot: 3 }).unwrap();

    // The peeker sees the slot from now on.
    assert_eq!(
        Observation::of(&state, s0).hands[s1][3],
        SlotView::Known(card(Rank::Five, Suit::Hearts))
    );
    // The owner still does not know its own slot 3.
    assert_eq!(Observation::of(&state, s1).hands[s1][3], SlotView::Hidden);
    // The third seat sees nothing.
    assert_eq!(
        Observation::of(&state, SeatId::new(2)).hands[s1][3],
        SlotView::Hidden
    );
}

#[test]
fn test_swap_drawn_keeps_knowledge_private_to_the_actor() {
    let mut state = rig(
        &[
            [
                card(Rank::Two, Suit::Clubs),
                card(Rank::Three, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Five, Suit::Clubs),
            ],
            [
                card(Rank::Two, Suit::Hearts),
                card(Rank::Three, Suit::Hearts),
                card(Rank::Four, Suit::Hearts),
                card(Rank::Five, Suit::Hearts),
            ],
        ],
        card(Rank::Six, Suit::Diamonds),
        &[card(Rank::Ace, Suit::Spades)],
    );
    let s0 = SeatId::new(0);
    let s1 = SeatId::new(1);

    resolve(&mut state, s0, Action::Draw).unwrap();
    resolve(&mut state, s0, Action::SwapDrawn { slot: 1 }).unwrap();

    // The actor placed a card it saw; the opponent only sees the discard.
    assert!(state.hand(s0).knows(s0, 1));
    assert!(!state.hand(s0).knows(s1, 1));
    assert_eq!(
        Observation::of(&state, s1).hands[s0][1],
        SlotView::Hidden
    );
    assert_eq!(
        Observation::of(&state, s1).top_discard,
        Some(card(Rank::Three, Suit::Clubs))
    );

    // The match stays card-complete.
    assert_eq!(state.total_cards(), 2 * HAND_SIZE + 2);
}

#[test]
fn test_peeks_never_change_hand_contents() {
    let mut state = four_seat_king_state();
    let s0 = SeatId::new(0);
    let s2 = SeatId::new(2);
    let before: Vec<Card> = state.hand(s2).cards().to_vec();

    resolve(&mut state, s0, Action::Draw).unwrap();
    resolve(&mut state, s0, Action::DiscardDrawn).unwrap();
    resolve(&mut state, s0, Action::PeekOther { seat: s2, slot: 1 }).unwrap();
    resolve(&mut state, s0, Action::SkipPower).unwrap();

    assert_eq!(state.hand(s2).cards().to_vec(), before);
    assert_eq!(state.phase(), Phase::AwaitingDraw);
}
