//! The fixed rank-to-power table.
//!
//! Discarding a drawn power card opens a resolution step before the turn
//! ends. The mapping is rank-only; suit never selects a power (it only
//! changes a King's score):
//!
//! | Rank | Power |
//! |------|-------|
//! | 7, 8 | look at one own slot |
//! | 9, 10 | look at one slot of another seat |
//! | Jack, Queen | blind-swap one own slot with another seat's slot |
//! | King | look at another seat's slot, then optionally swap it into an own slot |
//!
//! Every power may be declined. A card displaced out of a hand by a swap
//! goes to the discard pile without triggering this table.

use crate::core::{Card, PendingPower, Rank};

/// The resolution step a discarded card opens, if any.
#[must_use]
pub fn power_of(card: Card) -> Option<PendingPower> {
    match card.rank {
        Rank::Seven | Rank::Eight => Some(PendingPower::PeekOwn),
        Rank::Nine | Rank::Ten => Some(PendingPower::PeekOther),
        Rank::Jack | Rank::Queen => Some(PendingPower::BlindSwap),
        Rank::King => Some(PendingPower::KingLook),
        Rank::Ace
        | Rank::Two
        | Rank::Three
        | Rank::Four
        | Rank::Five
        | Rank::Six
        | Rank::Joker => None,
    }
}
