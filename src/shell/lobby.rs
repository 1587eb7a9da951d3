use super::{bold, frame_pause, poll_keys, present, Key, TerminalGuard};
use braini_games::games;
use braini_games::{GameRng, Greeting, Lobby, ProfileStore, Screen};
use tracing::warn;

pub fn run(
    term: &mut TerminalGuard,
    rng: &mut GameRng,
    store: &mut dyn ProfileStore,
) -> Result<(), String>
{
    let mut lobby = Lobby::load(store);
    let mut message: Option<String> = None;

    loop {
        for key in poll_keys()? {
            match lobby.screen() {
                Screen::Profile => match key {
                    Key::Quit => return Ok(()),
                    Key::Backspace => lobby.pop_char(),
                    Key::Enter => {
                        if lobby.is_input_locked() {
                            lobby.go_to_games();
                        } else {
                            register(&mut lobby, store, &mut message);
                        }
                    }
                    Key::Char('g') | Key::Char('G') if lobby.is_input_locked() => {
                        lobby.go_to_games();
                    }
                    Key::Char('f') | Key::Char('F') if lobby.is_input_locked() => {
                        if let Err(err) = lobby.forget_name(store) {
                            warn!(error = %err, "could not forget player name");
                            message = Some(format!("Could not forget your name: {err}"));
                        }
                    }
                    Key::Char(ch) => lobby.push_char(ch),
                    _ => {}
                },
                Screen::Menu => match key {
                    Key::Quit => return Ok(()),
                    Key::Char('b') | Key::Char('B') => lobby.back_to_profile(),
                    Key::Char(ch) => {
                        if let Some(game) = menu_choice(ch) {
                            launch(term, rng, &lobby, game)?;
                        }
                    }
                    _ => {}
                },
            }
        }

        draw(term, &lobby, message.as_deref())?;
        frame_pause();
    }
}

fn register(lobby: &mut Lobby, store: &mut dyn ProfileStore, message: &mut Option<String>)
{
    match lobby.register(store) {
        Ok(true) => *message = None,
        Ok(false) => *message = Some("Please enter your user name first.".to_string()),
        Err(err) => {
            warn!(error = %err, "could not save player name");
            *message = Some(format!("Could not save your name: {err}"));
        }
    }
}

fn menu_choice(ch: char) -> Option<&'static str>
{
    let index = ch.to_digit(10)? as usize;
    let registry = games::registry();
    if index >= 1 && index <= registry.len() {
        Some(registry[index - 1].name)
    } else {
        None
    }
}

fn launch(
    term: &mut TerminalGuard,
    rng: &mut GameRng,
    lobby: &Lobby,
    game: &str,
) -> Result<(), String>
{
    if !lobby.can_start_games() {
        return Ok(());
    }
    match game {
        "memory" => super::memory::run(term, rng, lobby.player_name()),
        "color" => super::color::run(term, rng, lobby.player_name()),
        _ => Err(format!("Unknown game '{game}'. Run with --help.")),
    }
}

fn draw(term: &mut TerminalGuard, lobby: &Lobby, message: Option<&str>) -> Result<(), String>
{
    let mut lines = Vec::new();
    lines.push(bold("Welcome to mind games! ✨"));
    lines.push(String::new());

    match lobby.greeting() {
        Some(Greeting::NiceToMeetYou(name)) => lines.push(format!(
            "Braini: Hello {name}, nice to meet you, my name is Braini, now I won't forget your name"
        )),
        Some(Greeting::WelcomeBack(name)) => lines.push(format!(
            "Braini: Hello again {name}, I told you I wouldn't forget you..."
        )),
        None => {
            if let Some(name) = lobby.stored_name() {
                lines.push(format!(
                    "Braini: Hello again {name}, I told you I wouldn't forget you..."
                ));
            }
        }
    }
    lines.push(String::new());

    match lobby.screen() {
        Screen::Profile => {
            lines.push("Please enter your user name".to_string());
            let shown = lobby.stored_name().unwrap_or(lobby.draft());
            let placeholder = if shown.is_empty() { "John Doe" } else { shown };
            let lock = if lobby.is_input_locked() { " (saved)" } else { "" };
            lines.push(format!("> {placeholder}{lock}"));
            lines.push(String::new());
            if lobby.is_input_locked() {
                lines.push("Enter/G: go to games   F: forgot name   Esc: quit".to_string());
            } else if lobby.can_register() {
                lines.push("Enter: register   Esc: quit".to_string());
            } else {
                lines.push("Type your name, then Enter to register. Esc quits.".to_string());
            }
        }
        Screen::Menu => {
            lines.push(format!(
                "Ready player one! 🎮 now choose a game {}",
                lobby.player_name()
            ));
            lines.push(String::new());
            for (idx, game) in games::registry().iter().enumerate() {
                lines.push(format!("  {}. {} - {}", idx + 1, game.title, game.description));
            }
            lines.push(String::new());
            lines.push("B: back to user profile   Esc: quit".to_string());
        }
    }

    if let Some(message) = message {
        lines.push(String::new());
        lines.push(message.to_string());
    }

    present(term.stdout(), &lines)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn menu_digits_follow_the_registry()
    {
        assert_eq!(menu_choice('1'), Some("memory"));
        assert_eq!(menu_choice('2'), Some("color"));
        assert_eq!(menu_choice('0'), None);
        assert_eq!(menu_choice('9'), None);
        assert_eq!(menu_choice('x'), None);
    }
}
