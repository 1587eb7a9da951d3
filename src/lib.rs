//! Braini games: a name-entry lobby plus two mini-games, a card-matching
//! memory game and a timed color-naming game.
//!
//! Every game is a plain state machine driven by host events (clicks,
//! clock readings, ticks). Nothing in this crate owns a timer or touches the
//! terminal; the `braini-games` binary is the host that does.

pub mod error;
pub mod games;
pub mod lobby;
pub mod profile;
pub mod rng;

pub use crate::error::ProfileError;
pub use crate::games::color::{AnswerOutcome, ColorGame, LabelOrder, PaletteColor, Rgb, PALETTE};
pub use crate::games::memory::{Card, CardKind, FlipOutcome, Icon, MemoryGame, PendingReset, ICONS};
pub use crate::lobby::{Greeting, Lobby, Screen};
pub use crate::profile::{FileStore, MemoryStore, ProfileStore, USER_NAME_KEY};
pub use crate::rng::{seeded, GameRng};
