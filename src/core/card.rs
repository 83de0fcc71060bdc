//! Card identity and values.
//!
//! Cards are small `Copy` values: a rank, a suit (`None` only for jokers),
//! and a derived point value used exclusively by the scorer. Legality never
//! depends on point values; identity matters only for knowledge tracking.
//!
//! Scoring values: Ace = 1, pips face value, Jack/Queen = 10, black King
//! = 10, red King = -1, Joker = 0.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Card rank: the thirteen standard symbols plus the joker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    /// The thirteen suited ranks, ace low.
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];
}

/// An immutable playing card.
///
/// `suit` is `None` exactly when `rank` is [`Rank::Joker`]. Use
/// [`Card::new`] and [`Card::joker`] to uphold that.
///
/// ```
/// use cambio_engine::core::{Card, Rank, Suit};
///
/// let red_king = Card::new(Rank::King, Suit::Hearts);
/// assert_eq!(red_king.point_value(), -1);
/// assert_eq!(Card::joker().point_value(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        assert!(rank != Rank::Joker, "Jokers carry no suit; use Card::joker");
        Self {
            rank,
            suit: Some(suit),
        }
    }

    /// Create a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
        }
    }

    /// Whether the card is a red suit (hearts or diamonds).
    #[must_use]
    pub fn is_red(self) -> bool {
        self.suit.is_some_and(Suit::is_red)
    }

    /// Scoring value of this card. Lower totals win.
    #[must_use]
    pub fn point_value(self) -> i32 {
        match self.rank {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen => 10,
            Rank::King => {
                if self.is_red() {
                    -1
                } else {
                    10
                }
            }
            Rank::Joker => 0,
        }
    }

    /// The full 54-card deck: 13 ranks x 4 suits plus two jokers, unshuffled.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(54);
        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.push(Card::joker());
        cards.push(Card::joker());
        cards
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Joker => return write!(f, "Joker"),
        };
        let suit = match self.suit {
            Some(Suit::Hearts) => "H",
            Some(Suit::Diamonds) => "D",
            Some(Suit::Clubs) => "C",
            Some(Suit::Spades) => "S",
            None => "",
        };
        write!(f, "{rank}{suit}")
    }
}
