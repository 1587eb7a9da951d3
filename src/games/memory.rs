//! Card memory game: every icon is dealt twice, once as a picture and once
//! as its name, and the player turns cards over two at a time looking for
//! picture/name pairs.
//!
//! The engine never schedules anything. A mismatched pair stays face up and
//! the session records a [`PendingReset`]; the host feeds its clock back in
//! through [`MemoryGame::resolve_pending_reset`] and the pair turns back over
//! once [`MISMATCH_DELAY`] has passed. Replacing the session drops the pending
//! reset with it, so a restart can never flip cards of the new deck.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, trace};

pub const MISMATCH_DELAY: Duration = Duration::from_secs(1);
pub const GRID_COLUMNS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon
{
    pub image: &'static str,
    pub name: &'static str,
    /// Stand-in for the picture when drawn in a terminal.
    pub glyph: &'static str,
}

pub static ICONS: [Icon; 6] = [
    Icon {
        image: "./img/Disgust.png",
        name: "Disgust",
        glyph: "🤢",
    },
    Icon {
        image: "./img/Fear.png",
        name: "Fear",
        glyph: "😱",
    },
    Icon {
        image: "./img/Joy.png",
        name: "Joy",
        glyph: "😄",
    },
    Icon {
        image: "./img/Sadness.png",
        name: "Sadness",
        glyph: "😢",
    },
    Icon {
        image: "./img/Anxiety.png",
        name: "Anxiety",
        glyph: "😰",
    },
    Icon {
        image: "./img/Envy.png",
        name: "Envy",
        glyph: "😒",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind
{
    Image,
    Name,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card
{
    pub id: usize,
    pub content: String,
    pub kind: CardKind,
    pub flipped: bool,
    pub solved: bool,
}

impl Card
{
    pub fn is_face_up(&self) -> bool
    {
        self.flipped || self.solved
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReset
{
    pub ids: [usize; 2],
    pub due_at: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome
{
    /// Unknown card, card already up, or a pair is still waiting to resolve.
    Ignored,
    /// First card of a new pair.
    Revealed,
    Matched,
    Mismatched {
        reset_at: Duration,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryGame
{
    cards: Vec<Card>,
    flipped_pair: Vec<usize>,
    solved_ids: BTreeSet<usize>,
    attempts: u32,
    pending_reset: Option<PendingReset>,
}

/// One picture card and one name card per icon; icon `i` owns ids `2i` and `2i + 1`.
pub fn build_deck(icons: &[Icon]) -> Vec<Card>
{
    let mut cards = Vec::with_capacity(icons.len() * 2);
    for (index, icon) in icons.iter().enumerate() {
        cards.push(Card {
            id: index * 2,
            content: icon.image.to_string(),
            kind: CardKind::Image,
            flipped: false,
            solved: false,
        });
        cards.push(Card {
            id: index * 2 + 1,
            content: icon.name.to_string(),
            kind: CardKind::Name,
            flipped: false,
            solved: false,
        });
    }
    cards
}

/// A picture matches a name when the picture's path contains the name.
pub fn is_pair(first: &Card, second: &Card) -> bool
{
    match (first.kind, second.kind) {
        (CardKind::Image, CardKind::Name) => first.content.contains(second.content.as_str()),
        (CardKind::Name, CardKind::Image) => second.content.contains(first.content.as_str()),
        _ => false,
    }
}

pub fn icon_for(card: &Card) -> Option<&'static Icon>
{
    ICONS.iter().find(|icon| match card.kind {
        CardKind::Image => icon.image == card.content,
        CardKind::Name => icon.name == card.content,
    })
}

impl MemoryGame
{
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self
    {
        let mut cards = build_deck(&ICONS);
        cards.shuffle(rng);
        debug!(cards = cards.len(), "dealt memory deck");
        Self::from_cards(cards)
    }

    /// Starts a session on `cards` exactly as given, without shuffling.
    pub fn from_cards(cards: Vec<Card>) -> Self
    {
        Self {
            cards,
            flipped_pair: Vec::with_capacity(2),
            solved_ids: BTreeSet::new(),
            attempts: 0,
            pending_reset: None,
        }
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R)
    {
        if self.pending_reset.is_some() {
            debug!("restart dropped a pending mismatch reset");
        }
        *self = Self::new_game(rng);
    }

    pub fn cards(&self) -> &[Card]
    {
        &self.cards
    }

    pub fn card(&self, id: usize) -> Option<&Card>
    {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn flipped_pair(&self) -> &[usize]
    {
        &self.flipped_pair
    }

    pub fn solved_ids(&self) -> &BTreeSet<usize>
    {
        &self.solved_ids
    }

    pub fn attempts(&self) -> u32
    {
        self.attempts
    }

    pub fn pending_reset(&self) -> Option<PendingReset>
    {
        self.pending_reset
    }

    pub fn is_complete(&self) -> bool
    {
        self.solved_ids.len() == self.cards.len() && self.attempts > 0
    }

    /// Turns card `card_id` face up. `now` is the host clock, only used to
    /// stamp the reset of a mismatched pair.
    pub fn flip_card(&mut self, card_id: usize, now: Duration) -> FlipOutcome
    {
        if self.flipped_pair.len() >= 2 {
            trace!(card_id, "flip ignored, pair still face up");
            return FlipOutcome::Ignored;
        }
        let Some(index) = self.cards.iter().position(|card| card.id == card_id) else {
            trace!(card_id, "flip ignored, unknown card");
            return FlipOutcome::Ignored;
        };
        if self.cards[index].is_face_up() {
            trace!(card_id, "flip ignored, card already up");
            return FlipOutcome::Ignored;
        }

        self.cards[index].flipped = true;
        self.flipped_pair.push(card_id);
        if self.flipped_pair.len() < 2 {
            return FlipOutcome::Revealed;
        }

        self.attempts += 1;
        let ids = [self.flipped_pair[0], self.flipped_pair[1]];
        let matched = match (self.card(ids[0]), self.card(ids[1])) {
            (Some(first), Some(second)) => is_pair(first, second),
            _ => false,
        };

        if matched {
            for card in self.cards.iter_mut().filter(|card| ids.contains(&card.id)) {
                card.solved = true;
            }
            self.solved_ids.extend(ids);
            self.flipped_pair.clear();
            debug!(?ids, attempts = self.attempts, "pair matched");
            FlipOutcome::Matched
        } else {
            let due_at = now + MISMATCH_DELAY;
            self.pending_reset = Some(PendingReset { ids, due_at });
            debug!(?ids, attempts = self.attempts, "pair mismatched");
            FlipOutcome::Mismatched { reset_at: due_at }
        }
    }

    /// Turns a mismatched pair back over once its delay has passed.
    /// Returns whether anything changed.
    pub fn resolve_pending_reset(&mut self, now: Duration) -> bool
    {
        let Some(pending) = self.pending_reset else {
            return false;
        };
        if now < pending.due_at {
            return false;
        }

        for card in self
            .cards
            .iter_mut()
            .filter(|card| pending.ids.contains(&card.id))
        {
            card.flipped = false;
        }
        self.flipped_pair.clear();
        self.pending_reset = None;
        trace!(ids = ?pending.ids, "mismatched pair turned back");
        true
    }
}
