use super::{bold, on_background, poll_keys, present, frame_pause, Key, TerminalGuard};
use braini_games::games::memory::{icon_for, Card, CardKind, FlipOutcome, MemoryGame, GRID_COLUMNS};
use braini_games::{GameRng, Rgb};
use std::time::Instant;
use tracing::info;

const CELL_WIDTH: usize = 14;
const CURSOR_BG: Rgb = Rgb { r: 91, g: 33, b: 182 };
const SOLVED_BG: Rgb = Rgb { r: 22, g: 101, b: 52 };
const UP_BG: Rgb = Rgb { r: 71, g: 85, b: 105 };
const DOWN_BG: Rgb = Rgb { r: 30, g: 27, b: 75 };

pub fn run(term: &mut TerminalGuard, rng: &mut GameRng, player: &str) -> Result<(), String>
{
    let start = Instant::now();
    let mut game = MemoryGame::new_game(rng);
    let mut cursor = 0usize;
    info!("memory game started");

    loop {
        let now = start.elapsed();
        game.resolve_pending_reset(now);

        for key in poll_keys()? {
            if game.is_complete() {
                match key {
                    Key::Quit => return Ok(()),
                    Key::Char('r') | Key::Char('R') => {
                        game.restart(rng);
                        cursor = 0;
                    }
                    _ => {}
                }
                continue;
            }

            let position = match key {
                Key::Quit => return Ok(()),
                Key::Left => {
                    cursor = move_cursor(cursor, -1, game.cards().len());
                    None
                }
                Key::Right => {
                    cursor = move_cursor(cursor, 1, game.cards().len());
                    None
                }
                Key::Up => {
                    cursor = move_cursor(cursor, -(GRID_COLUMNS as isize), game.cards().len());
                    None
                }
                Key::Down => {
                    cursor = move_cursor(cursor, GRID_COLUMNS as isize, game.cards().len());
                    None
                }
                Key::Enter | Key::Char(' ') => Some(cursor),
                Key::Char(ch) => position_for_letter(ch),
                Key::Backspace => None,
            };

            if let Some(position) = position {
                let Some(card_id) = game.cards().get(position).map(|card| card.id) else {
                    continue;
                };
                cursor = position;
                if let FlipOutcome::Matched = game.flip_card(card_id, now) {
                    if game.is_complete() {
                        info!(attempts = game.attempts(), "memory game solved");
                    }
                }
            }
        }

        if game.is_complete() {
            draw_summary(term, &game, player)?;
        } else {
            draw_board(term, &game, cursor)?;
        }
        frame_pause();
    }
}

fn move_cursor(cursor: usize, step: isize, len: usize) -> usize
{
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + step;
    if next < 0 || next >= len as isize {
        cursor
    } else {
        next as usize
    }
}

fn position_for_letter(ch: char) -> Option<usize>
{
    let ch = ch.to_ascii_lowercase();
    if ch.is_ascii_lowercase() {
        Some((ch as u8 - b'a') as usize)
    } else {
        None
    }
}

fn card_face(card: &Card) -> String
{
    if !card.is_face_up() {
        return String::new();
    }
    match card.kind {
        CardKind::Image => icon_for(card)
            .map(|icon| icon.glyph.to_string())
            .unwrap_or_else(|| "?".to_string()),
        CardKind::Name => card.content.clone(),
    }
}

fn render_cell(card: &Card, position: usize, selected: bool) -> String
{
    let label = (b'a' + (position as u8 % 26)) as char;
    let face = card_face(card);
    let text = format!(" {label} {face:<width$}", width = CELL_WIDTH - 3);
    let bg = if selected {
        CURSOR_BG
    } else if card.solved {
        SOLVED_BG
    } else if card.flipped {
        UP_BG
    } else {
        DOWN_BG
    };
    on_background(bg, &text)
}

fn draw_board(term: &mut TerminalGuard, game: &MemoryGame, cursor: usize) -> Result<(), String>
{
    let mut lines = Vec::new();
    lines.push(bold("Braini games - Card memory game"));
    lines.push(format!("Attempts: {}", game.attempts()));
    lines.push(String::new());

    for (row_index, row) in game.cards().chunks(GRID_COLUMNS).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, card)| {
                let position = row_index * GRID_COLUMNS + col;
                render_cell(card, position, position == cursor)
            })
            .collect();
        lines.push(cells.join(" "));
        lines.push(String::new());
    }

    lines.push("Match every picture with its name.".to_string());
    lines.push("Arrows move, Enter/Space flips, a-l flips directly, Esc goes back.".to_string());
    present(term.stdout(), &lines)
}

fn draw_summary(term: &mut TerminalGuard, game: &MemoryGame, player: &str) -> Result<(), String>
{
    let mut lines = Vec::new();
    lines.push(bold("Braini games - Card memory game"));
    lines.push(String::new());
    if player.is_empty() {
        lines.push(format!(
            "Well done! You solved the game in {} attempts. 🎉",
            game.attempts()
        ));
    } else {
        lines.push(format!(
            "Well done {player}! You solved the game in {} attempts. 🎉",
            game.attempts()
        ));
    }
    lines.push(String::new());
    lines.push("Press R to restart, Esc to go back to games.".to_string());
    present(term.stdout(), &lines)
}
