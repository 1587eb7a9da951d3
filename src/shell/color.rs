use super::{bold, frame_pause, ink, ink_on, on_background, poll_keys, present, Key, TerminalGuard, Ticker};
use braini_games::games::color::TICK_INTERVAL;
use braini_games::{AnswerOutcome, ColorGame, GameRng, Rgb};
use std::time::Instant;
use tracing::info;

const CARD_WIDTH: usize = 28;
const CARD_BG: Rgb = Rgb { r: 241, g: 245, b: 249 };
const BUTTON_BG: Rgb = Rgb { r: 71, g: 85, b: 105 };
const FLASH_CORRECT: Rgb = Rgb { r: 22, g: 163, b: 74 };
const FLASH_WRONG: Rgb = Rgb { r: 220, g: 38, b: 38 };

pub fn run(term: &mut TerminalGuard, rng: &mut GameRng, player: &str) -> Result<(), String>
{
    let mut game = ColorGame::new_game(rng);
    let mut ticker = Ticker::new(TICK_INTERVAL, Instant::now());
    let mut last_outcome: Option<AnswerOutcome> = None;
    info!("color game started");

    loop {
        // The countdown only runs while the session is live.
        if !game.is_over() {
            for _ in 0..ticker.due(Instant::now()) {
                if game.tick() {
                    info!(correct = game.correct(), wrong = game.wrong(), "color game finished");
                }
            }
        }

        for key in poll_keys()? {
            if game.is_over() {
                match key {
                    Key::Quit => return Ok(()),
                    Key::Char('r') | Key::Char('R') => {
                        game.restart(rng);
                        ticker = Ticker::new(TICK_INTERVAL, Instant::now());
                        last_outcome = None;
                    }
                    _ => {}
                }
                continue;
            }

            let slot = match key {
                Key::Quit => return Ok(()),
                Key::Left | Key::Char('1') => Some(0),
                Key::Right | Key::Char('2') => Some(1),
                _ => None,
            };
            if let Some(slot) = slot {
                let chosen = game.buttons()[slot];
                last_outcome = Some(game.answer(chosen.hex, rng));
            }
        }

        if game.is_over() {
            draw_summary(term, &game, player)?;
        } else {
            draw_round(term, &game, last_outcome)?;
        }
        frame_pause();
    }
}

fn draw_round(
    term: &mut TerminalGuard,
    game: &ColorGame,
    last_outcome: Option<AnswerOutcome>,
) -> Result<(), String>
{
    let word = game.displayed().name.to_uppercase();
    let [left, right] = game.buttons();

    let mut lines = Vec::new();
    lines.push(bold("Braini games - Get the color game"));
    lines.push(format!("Time: {}", game.elapsed_ticks()));
    lines.push(String::new());
    lines.push(on_background(CARD_BG, &" ".repeat(CARD_WIDTH)));
    lines.push(ink_on(
        game.target().rgb,
        CARD_BG,
        &format!("{word:^width$}", width = CARD_WIDTH),
    ));
    lines.push(on_background(CARD_BG, &" ".repeat(CARD_WIDTH)));
    lines.push(String::new());
    lines.push(format!(
        "  {}   {}",
        on_background(BUTTON_BG, &format!(" 1 {:<8}", left.name.to_uppercase())),
        on_background(BUTTON_BG, &format!(" 2 {:<8}", right.name.to_uppercase())),
    ));
    lines.push(String::new());
    lines.push(format!("Correct: {:<10} Wrong: {}", game.correct(), game.wrong()));
    lines.push(match last_outcome {
        Some(AnswerOutcome::Correct) => ink(FLASH_CORRECT, "Correct!"),
        Some(AnswerOutcome::Wrong) => ink(FLASH_WRONG, "Wrong!"),
        _ => String::new(),
    });
    lines.push("Pick the name of the ink color, not the word.".to_string());
    lines.push("Left/1 and Right/2 answer, Esc goes back.".to_string());
    present(term.stdout(), &lines)
}

fn draw_summary(term: &mut TerminalGuard, game: &ColorGame, player: &str) -> Result<(), String>
{
    let mut lines = Vec::new();
    lines.push(bold("Braini games - Get the color game"));
    lines.push(String::new());
    if player.is_empty() {
        lines.push("Well done! You finished the game with this score:".to_string());
    } else {
        lines.push(format!("Well done {player}! You finished the game with this score:"));
    }
    lines.push(bold(&format!(
        "Corrects: {} and Wrongs: {}",
        game.correct(),
        game.wrong()
    )));
    lines.push(String::new());
    lines.push("Press R to restart, Esc to go back to games.".to_string());
    present(term.stdout(), &lines)
}
