//! Name entry and game selection.
//!
//! The lobby remembers the player's name across runs through a
//! [`ProfileStore`]. A name must be on record before the game menu opens.

use crate::error::ProfileError;
use crate::profile::{ProfileStore, USER_NAME_KEY};
use tracing::info;

pub const MAX_NAME_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen
{
    Profile,
    Menu,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Greeting
{
    NiceToMeetYou(String),
    WelcomeBack(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lobby
{
    screen: Screen,
    draft: String,
    stored_name: Option<String>,
    greeting: Option<Greeting>,
}

impl Lobby
{
    pub fn load(store: &dyn ProfileStore) -> Self
    {
        let stored_name = store
            .get(USER_NAME_KEY)
            .filter(|name| !name.trim().is_empty());
        Self {
            screen: Screen::Profile,
            draft: String::new(),
            stored_name,
            greeting: None,
        }
    }

    pub fn screen(&self) -> Screen
    {
        self.screen
    }

    pub fn draft(&self) -> &str
    {
        &self.draft
    }

    pub fn stored_name(&self) -> Option<&str>
    {
        self.stored_name.as_deref()
    }

    pub fn greeting(&self) -> Option<&Greeting>
    {
        self.greeting.as_ref()
    }

    /// The input box is locked while a name is on record.
    pub fn is_input_locked(&self) -> bool
    {
        self.stored_name.is_some()
    }

    pub fn can_register(&self) -> bool
    {
        !self.is_input_locked() && !self.draft.trim().is_empty()
    }

    pub fn can_start_games(&self) -> bool
    {
        self.screen == Screen::Menu
    }

    pub fn player_name(&self) -> &str
    {
        if self.draft.trim().is_empty() {
            self.stored_name.as_deref().unwrap_or("")
        } else {
            self.draft.trim()
        }
    }

    pub fn push_char(&mut self, ch: char)
    {
        if self.screen != Screen::Profile || self.is_input_locked() || ch.is_control() {
            return;
        }
        if self.draft.chars().count() < MAX_NAME_LEN {
            self.draft.push(ch);
        }
    }

    pub fn pop_char(&mut self)
    {
        if self.screen == Screen::Profile && !self.is_input_locked() {
            self.draft.pop();
        }
    }

    pub fn register(&mut self, store: &mut dyn ProfileStore) -> Result<bool, ProfileError>
    {
        if self.screen != Screen::Profile || !self.can_register() {
            return Ok(false);
        }
        let name = self.draft.trim().to_string();
        store.set(USER_NAME_KEY, &name)?;
        info!(name = %name, "player registered");
        self.stored_name = Some(name.clone());
        self.greeting = Some(Greeting::NiceToMeetYou(name));
        self.screen = Screen::Menu;
        Ok(true)
    }

    pub fn go_to_games(&mut self) -> bool
    {
        let Some(name) = self.stored_name.clone() else {
            return false;
        };
        if self.screen != Screen::Profile {
            return false;
        }
        if self.greeting.is_none() {
            self.greeting = Some(Greeting::WelcomeBack(name));
        }
        self.screen = Screen::Menu;
        true
    }

    pub fn forget_name(&mut self, store: &mut dyn ProfileStore) -> Result<bool, ProfileError>
    {
        if self.screen != Screen::Profile || self.stored_name.is_none() {
            return Ok(false);
        }
        store.remove(USER_NAME_KEY)?;
        info!("player name forgotten");
        self.stored_name = None;
        self.draft.clear();
        self.greeting = None;
        Ok(true)
    }

    pub fn back_to_profile(&mut self)
    {
        self.screen = Screen::Profile;
    }
}
