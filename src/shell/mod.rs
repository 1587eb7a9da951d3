pub mod color;
pub mod config;
pub mod lobby;
pub mod logging;
pub mod memory;

use braini_games::Rgb;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

pub const FRAME_MS: u64 = 33;

pub struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    pub fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    pub fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Fires once per `interval` for as long as the owner keeps polling it.
/// Dropping or rebuilding the ticker is how a countdown gets cancelled.
pub struct Ticker
{
    interval: Duration,
    next_at: Instant,
}

impl Ticker
{
    pub fn new(interval: Duration, now: Instant) -> Self
    {
        Self {
            interval,
            next_at: now + interval,
        }
    }

    /// Number of whole intervals that elapsed since the last call.
    pub fn due(&mut self, now: Instant) -> u32
    {
        let mut fired = 0;
        while now >= self.next_at {
            self.next_at += self.interval;
            fired += 1;
        }
        fired
    }
}

/// Keys the screens care about, with Ctrl-C folded into `Quit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key
{
    Quit,
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Char(char),
}

pub fn poll_keys() -> Result<Vec<Key>, String>
{
    let mut keys = Vec::new();
    while event::poll(Duration::from_millis(0)).map_err(|err| err.to_string())? {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read().map_err(|err| err.to_string())?
        {
            if kind == KeyEventKind::Release {
                continue;
            }
            let key = match code {
                KeyCode::Esc => Key::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
                KeyCode::Enter => Key::Enter,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Char(ch) => Key::Char(ch),
                _ => continue,
            };
            keys.push(key);
        }
    }
    Ok(keys)
}

pub fn present(stdout: &mut Stdout, lines: &[String]) -> Result<(), String>
{
    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All)).map_err(|err| err.to_string())?;
    stdout.write_all(output.as_bytes()).map_err(|err| err.to_string())?;
    stdout.flush().map_err(|err| err.to_string())?;
    Ok(())
}

pub fn frame_pause()
{
    std::thread::sleep(Duration::from_millis(FRAME_MS));
}

pub fn ink(color: Rgb, text: &str) -> String
{
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, text)
}

pub fn on_background(color: Rgb, text: &str) -> String
{
    format!("\x1b[48;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, text)
}

pub fn ink_on(fg: Rgb, bg: Rgb, text: &str) -> String
{
    format!(
        "\x1b[1;38;2;{};{};{};48;2;{};{};{}m{}\x1b[0m",
        fg.r, fg.g, fg.b, bg.r, bg.g, bg.b, text
    )
}

pub fn bold(text: &str) -> String
{
    format!("\x1b[1m{}\x1b[0m", text)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn ticker_fires_once_per_interval()
    {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1), start);
        assert_eq!(ticker.due(start), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due(start + Duration::from_secs(1)), 1);
        assert_eq!(ticker.due(start + Duration::from_secs(1)), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(3500)), 2);
    }

    #[test]
    fn ink_wraps_text_in_truecolor()
    {
        let red = Rgb { r: 255, g: 0, b: 0 };
        assert_eq!(ink(red, "RED"), "\x1b[38;2;255;0;0mRED\x1b[0m");
    }
}
