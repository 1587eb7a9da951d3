//! Color game integration tests.

use braini_games::games::color::ROUND_TICKS;
use braini_games::{AnswerOutcome, ColorGame, PALETTE};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Redraws rounds until the ink is `hex`. The palette has ten entries, so
/// a few hundred draws is far past what any seed needs.
fn round_with_target(game: &mut ColorGame, rng: &mut ChaCha8Rng, hex: &str)
{
    for _ in 0..500 {
        if game.target().hex == hex {
            return;
        }
        game.new_round(rng);
    }
    panic!("no round with target {hex}");
}

fn finished_game(rng: &mut ChaCha8Rng) -> ColorGame
{
    let mut game = ColorGame::new_game(rng);
    for _ in 0..ROUND_TICKS {
        game.tick();
    }
    game
}

#[test]
fn correct_answer_scores_and_starts_a_new_round()
{
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut game = ColorGame::new_game(&mut rng);
    round_with_target(&mut game, &mut rng, "#2563eb");

    assert_eq!(game.answer("#2563eb", &mut rng), AnswerOutcome::Correct);
    assert_eq!(game.correct(), 1);
    assert_eq!(game.wrong(), 0);
    assert_ne!(game.target().name, game.displayed().name);
}

#[test]
fn last_tick_ends_the_session_and_freezes_scores()
{
    let mut rng = ChaCha8Rng::seed_from_u64(22);
    let mut game = ColorGame::new_game(&mut rng);
    let target = game.target().hex;
    game.answer(target, &mut rng);
    for _ in 0..ROUND_TICKS - 1 {
        game.tick();
    }
    assert_eq!(game.elapsed_ticks(), 29);
    assert!(!game.is_over());

    assert!(game.tick());
    assert_eq!(game.elapsed_ticks(), 30);
    assert!(game.is_over());

    let before = game.clone();
    assert_eq!(game.answer(before.target().hex, &mut rng), AnswerOutcome::Ignored);
    assert_eq!(game.answer("#000", &mut rng), AnswerOutcome::Ignored);
    assert_eq!(game, before);
    assert_eq!((game.correct(), game.wrong()), (1, 0));
}

#[test]
fn answers_outside_the_palette_count_as_wrong()
{
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let mut game = ColorGame::new_game(&mut rng);
    assert_eq!(game.answer("#abcdef", &mut rng), AnswerOutcome::Wrong);
    assert_eq!(game.wrong(), 1);
}

#[test]
fn restart_after_game_over_is_active_again()
{
    let mut rng = ChaCha8Rng::seed_from_u64(24);
    let mut game = finished_game(&mut rng);
    game.restart(&mut rng);
    assert!(!game.is_over());
    assert_eq!(game.elapsed_ticks(), 0);
    let target = game.target().hex;
    assert_eq!(game.answer(target, &mut rng), AnswerOutcome::Correct);
}

#[test]
fn same_seed_replays_the_same_rounds()
{
    let mut a = ChaCha8Rng::seed_from_u64(25);
    let mut b = ChaCha8Rng::seed_from_u64(25);
    let mut left = ColorGame::new_game(&mut a);
    let mut right = ColorGame::new_game(&mut b);
    for _ in 0..20 {
        assert_eq!(left, right);
        left.answer("#fff", &mut a);
        right.answer("#fff", &mut b);
    }
}

proptest! {
    /// Target and displayed colors never share a name.
    #[test]
    fn prop_round_colors_are_distinct(seed in any::<u64>(), rounds in 1usize..60)
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = ColorGame::new_game(&mut rng);
        for _ in 0..rounds {
            prop_assert_ne!(game.target().name, game.displayed().name);
            prop_assert!(PALETTE.contains(&game.target()));
            prop_assert!(PALETTE.contains(&game.displayed()));
            game.new_round(&mut rng);
        }
    }

    /// Thirty ticks end the session; extra ticks change nothing.
    #[test]
    fn prop_timer_terminates(seed in any::<u64>(), extra in 1u32..50)
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = finished_game(&mut rng);
        prop_assert!(game.is_over());
        prop_assert_eq!(game.elapsed_ticks(), ROUND_TICKS);
        for _ in 0..extra {
            prop_assert!(!game.tick());
            prop_assert_eq!(game.elapsed_ticks(), ROUND_TICKS);
        }
    }

    /// Once over, no answer moves the score.
    #[test]
    fn prop_scores_freeze_when_over(seed in any::<u64>(), picks in proptest::collection::vec(0usize..10, 1..20))
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = finished_game(&mut rng);
        let before = game.clone();
        for pick in picks {
            prop_assert_eq!(game.answer(PALETTE[pick].hex, &mut rng), AnswerOutcome::Ignored);
        }
        prop_assert_eq!(game, before);
    }

    /// While active, each answer bumps exactly one counter.
    #[test]
    fn prop_answers_score_once(seed in any::<u64>(), picks in proptest::collection::vec(0usize..2, 1..40))
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = ColorGame::new_game(&mut rng);
        for (answered, slot) in picks.into_iter().enumerate() {
            let chosen = game.buttons()[slot];
            let expected = if chosen == game.target() { AnswerOutcome::Correct } else { AnswerOutcome::Wrong };
            prop_assert_eq!(game.answer(chosen.hex, &mut rng), expected);
            prop_assert_eq!(game.correct() + game.wrong(), answered as u32 + 1);
        }
    }
}
