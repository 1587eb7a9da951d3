//! Profile store and lobby tests.

use braini_games::{FileStore, Greeting, Lobby, MemoryStore, ProfileError, ProfileStore, Screen, USER_NAME_KEY};
use std::fs;

fn type_name(lobby: &mut Lobby, name: &str)
{
    for ch in name.chars() {
        lobby.push_char(ch);
    }
}

// =============================================================================
// Stores
// =============================================================================

#[test]
fn memory_store_get_set_remove()
{
    let mut store = MemoryStore::new();
    assert_eq!(store.get(USER_NAME_KEY), None);
    store.set(USER_NAME_KEY, "Ana").unwrap();
    assert_eq!(store.get(USER_NAME_KEY).as_deref(), Some("Ana"));
    store.remove(USER_NAME_KEY).unwrap();
    assert_eq!(store.get(USER_NAME_KEY), None);
}

#[test]
fn file_store_missing_file_is_empty()
{
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("profile.toml")).unwrap();
    assert_eq!(store.get(USER_NAME_KEY), None);
    assert!(!store.path().exists());
}

#[test]
fn file_store_survives_reopen()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("profile.toml");

    let mut store = FileStore::open(&path).unwrap();
    store.set(USER_NAME_KEY, "Luis \"Lu\" C").unwrap();
    drop(store);

    let mut reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(USER_NAME_KEY).as_deref(), Some("Luis \"Lu\" C"));

    reopened.remove(USER_NAME_KEY).unwrap();
    let again = FileStore::open(&path).unwrap();
    assert_eq!(again.get(USER_NAME_KEY), None);
}

#[test]
fn file_store_rejects_garbage()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.toml");
    fs::write(&path, "user_name = [unterminated").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, ProfileError::Parse { .. }));
    assert!(err.to_string().contains("not valid TOML"));
}

// =============================================================================
// Lobby
// =============================================================================

#[test]
fn new_player_registers_and_reaches_the_menu()
{
    let mut store = MemoryStore::new();
    let mut lobby = Lobby::load(&store);
    assert_eq!(lobby.screen(), Screen::Profile);
    assert!(!lobby.can_start_games());

    type_name(&mut lobby, "  Ana ");
    assert!(lobby.register(&mut store).unwrap());

    assert_eq!(store.get(USER_NAME_KEY).as_deref(), Some("Ana"));
    assert_eq!(lobby.screen(), Screen::Menu);
    assert_eq!(lobby.greeting(), Some(&Greeting::NiceToMeetYou("Ana".to_string())));
    assert_eq!(lobby.player_name(), "Ana");
    assert!(lobby.can_start_games());
}

#[test]
fn empty_name_cannot_register()
{
    let mut store = MemoryStore::new();
    let mut lobby = Lobby::load(&store);
    type_name(&mut lobby, "   ");
    assert!(!lobby.register(&mut store).unwrap());
    assert_eq!(store.get(USER_NAME_KEY), None);
    assert_eq!(lobby.screen(), Screen::Profile);
}

#[test]
fn games_need_a_stored_name()
{
    let store = MemoryStore::new();
    let mut lobby = Lobby::load(&store);
    assert!(!lobby.go_to_games());
    assert_eq!(lobby.screen(), Screen::Profile);
}

#[test]
fn returning_player_is_welcomed_back()
{
    let mut store = MemoryStore::new();
    store.set(USER_NAME_KEY, "Ana").unwrap();
    let mut lobby = Lobby::load(&store);

    assert!(lobby.is_input_locked());
    type_name(&mut lobby, "Bob");
    assert_eq!(lobby.draft(), "");
    assert!(!lobby.register(&mut store).unwrap());

    assert!(lobby.go_to_games());
    assert_eq!(lobby.greeting(), Some(&Greeting::WelcomeBack("Ana".to_string())));
    assert_eq!(lobby.player_name(), "Ana");

    lobby.back_to_profile();
    assert_eq!(lobby.screen(), Screen::Profile);
    assert!(!lobby.can_start_games());
}

#[test]
fn forgetting_the_name_unlocks_the_input()
{
    let mut store = MemoryStore::new();
    store.set(USER_NAME_KEY, "Ana").unwrap();
    let mut lobby = Lobby::load(&store);

    assert!(lobby.forget_name(&mut store).unwrap());
    assert_eq!(store.get(USER_NAME_KEY), None);
    assert_eq!(lobby.stored_name(), None);
    assert!(!lobby.is_input_locked());
    assert!(!lobby.forget_name(&mut store).unwrap());

    type_name(&mut lobby, "Bea");
    assert!(lobby.register(&mut store).unwrap());
    assert_eq!(store.get(USER_NAME_KEY).as_deref(), Some("Bea"));
}

#[test]
fn name_persists_across_lobby_sessions()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.toml");

    let mut store = FileStore::open(&path).unwrap();
    let mut lobby = Lobby::load(&store);
    type_name(&mut lobby, "Ana");
    lobby.register(&mut store).unwrap();

    let store = FileStore::open(&path).unwrap();
    let lobby = Lobby::load(&store);
    assert_eq!(lobby.stored_name(), Some("Ana"));
    assert!(lobby.is_input_locked());
}
