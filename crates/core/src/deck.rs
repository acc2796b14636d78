use crate::{Card, Rank, Shuffler, Suit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DECK_SIZE: usize = 54;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("at least one seat is required")]
    NoSeats,
    #[error("{seats} seats cannot share {cards} cards")]
    TooManySeats { seats: usize, cards: usize },
}

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
}

/// Hands dealt to each seat, sorted, plus the undealt remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub kitty: Vec<Card>,
}

impl Deck {
    /// Thirteen ranks in four suits plus both jokers.
    pub fn standard54() -> Self {
        let mut draw = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::STANDARD {
            for rank in Rank::SUITED {
                draw.push(Card::new(rank, suit));
            }
        }
        draw.push(Card::small_joker());
        draw.push(Card::big_joker());
        Self { draw }
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn shuffle(&mut self, shuffler: &mut Shuffler) {
        shuffler.shuffle(&mut self.draw);
    }

    /// Moves the cards above a random cut point to the bottom.
    pub fn cut(&mut self, shuffler: &mut Shuffler) {
        let point = shuffler.cut_point(self.draw.len());
        self.draw.rotate_left(point);
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    /// Deals round-robin until every seat holds the same count; whatever
    /// is left goes to the kitty.
    pub fn deal(mut self, seats: usize) -> Result<Deal, DealError> {
        if seats == 0 {
            return Err(DealError::NoSeats);
        }
        if seats > self.draw.len() {
            return Err(DealError::TooManySeats {
                seats,
                cards: self.draw.len(),
            });
        }
        let per_seat = self.draw.len() / seats;
        let mut hands = vec![Vec::with_capacity(per_seat); seats];
        for _ in 0..per_seat {
            for hand in hands.iter_mut() {
                hand.extend(self.draw_cards(1));
            }
        }
        for hand in hands.iter_mut() {
            hand.sort_unstable();
        }
        let mut kitty = self.draw;
        kitty.sort_unstable();
        Ok(Deal { hands, kitty })
    }
}

/// Shuffles and cuts a fresh deck with `seed`, then deals it to `seats`.
pub fn deal_seeded(seed: u64, seats: usize) -> Result<Deal, DealError> {
    let mut shuffler = Shuffler::from_seed(seed);
    let mut deck = Deck::standard54();
    deck.shuffle(&mut shuffler);
    deck.cut(&mut shuffler);
    deck.deal(seats)
}
