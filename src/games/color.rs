//! Color game: a color name is printed in the ink of a different color and
//! the player must pick the button naming the ink. A session lasts
//! [`ROUND_TICKS`] host ticks; answers after that are ignored until restart.

use rand::Rng;
use std::time::Duration;
use tracing::{debug, trace};

pub const ROUND_TICKS: u32 = 30;
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColor
{
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: Rgb,
}

const fn entry(name: &'static str, hex: &'static str, r: u8, g: u8, b: u8) -> PaletteColor
{
    PaletteColor {
        name,
        hex,
        rgb: Rgb { r, g, b },
    }
}

pub const PALETTE: [PaletteColor; 10] = [
    entry("Blue", "#2563eb", 0x25, 0x63, 0xeb),
    entry("Red", "#dc2626", 0xdc, 0x26, 0x26),
    entry("Yellow", "#ca8a04", 0xca, 0x8a, 0x04),
    entry("Green", "#16a34a", 0x16, 0xa3, 0x4a),
    entry("Rose", "#ec4899", 0xec, 0x48, 0x99),
    entry("Violet", "#7c3aed", 0x7c, 0x3a, 0xed),
    entry("Cyan", "#0891b2", 0x08, 0x91, 0xb2),
    entry("Teal", "#0d9488", 0x0d, 0x94, 0x88),
    entry("White", "#fff", 0xff, 0xff, 0xff),
    entry("Black", "#000", 0x00, 0x00, 0x00),
];

pub fn find_color(hex: &str) -> Option<PaletteColor>
{
    PALETTE.iter().copied().find(|color| color.hex == hex)
}

/// Which of the two answer buttons comes first on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelOrder
{
    TargetFirst,
    DisplayedFirst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome
{
    Correct,
    Wrong,
    /// The session is over; nothing was scored.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGame
{
    target: PaletteColor,
    displayed: PaletteColor,
    label_order: LabelOrder,
    correct: u32,
    wrong: u32,
    elapsed_ticks: u32,
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> PaletteColor
{
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

impl ColorGame
{
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self
    {
        let mut game = Self {
            target: PALETTE[0],
            displayed: PALETTE[1],
            label_order: LabelOrder::TargetFirst,
            correct: 0,
            wrong: 0,
            elapsed_ticks: 0,
        };
        game.new_round(rng);
        game
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R)
    {
        debug!(correct = self.correct, wrong = self.wrong, "color game restarted");
        *self = Self::new_game(rng);
    }

    /// Draws a fresh target/displayed pair with distinct names and a new
    /// button order.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R)
    {
        let target = draw(rng);
        let mut displayed = draw(rng);
        while displayed.name == target.name {
            displayed = draw(rng);
        }

        self.target = target;
        self.displayed = displayed;
        self.label_order = if rng.gen_bool(0.5) {
            LabelOrder::TargetFirst
        } else {
            LabelOrder::DisplayedFirst
        };
        trace!(ink = target.name, word = displayed.name, "new color round");
    }

    /// Advances the countdown by one tick. Returns `true` on the tick that
    /// ends the session.
    pub fn tick(&mut self) -> bool
    {
        if self.is_over() {
            return false;
        }
        self.elapsed_ticks += 1;
        if self.is_over() {
            debug!(correct = self.correct, wrong = self.wrong, "color game over");
            return true;
        }
        false
    }

    pub fn answer<R: Rng + ?Sized>(&mut self, chosen_hex: &str, rng: &mut R) -> AnswerOutcome
    {
        if self.is_over() {
            return AnswerOutcome::Ignored;
        }

        let outcome = if chosen_hex == self.target.hex {
            self.correct += 1;
            AnswerOutcome::Correct
        } else {
            self.wrong += 1;
            AnswerOutcome::Wrong
        };
        trace!(?outcome, chosen_hex, "answer scored");
        self.new_round(rng);
        outcome
    }

    pub fn is_over(&self) -> bool
    {
        self.elapsed_ticks >= ROUND_TICKS
    }

    /// Ink color of the word; the correct answer.
    pub fn target(&self) -> PaletteColor
    {
        self.target
    }

    /// Color whose name is printed.
    pub fn displayed(&self) -> PaletteColor
    {
        self.displayed
    }

    pub fn label_order(&self) -> LabelOrder
    {
        self.label_order
    }

    pub fn buttons(&self) -> [PaletteColor; 2]
    {
        match self.label_order {
            LabelOrder::TargetFirst => [self.target, self.displayed],
            LabelOrder::DisplayedFirst => [self.displayed, self.target],
        }
    }

    pub fn correct(&self) -> u32
    {
        self.correct
    }

    pub fn wrong(&self) -> u32
    {
        self.wrong
    }

    pub fn elapsed_ticks(&self) -> u32
    {
        self.elapsed_ticks
    }

    pub fn time_left(&self) -> u32
    {
        ROUND_TICKS.saturating_sub(self.elapsed_ticks)
    }
}
