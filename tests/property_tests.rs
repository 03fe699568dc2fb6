//! Property tests for engine invariants over random seeds and action sequences.

use proptest::prelude::*;

use shell_roulette::core::{
    ActionKind, GameRng, ItemKind, Magazine, MatchState, Shell, ShellKnowledge, Side,
};
use shell_roulette::games::RouletteGame;
use shell_roulette::rules::RulesEngine;

fn action() -> impl Strategy<Value = ActionKind> {
    (0u8..7).prop_map(|id| ActionKind::try_from(id).unwrap())
}

/// Play `actions` from `seed`, stopping early if the match ends.
fn play(game: &RouletteGame, seed: u64, actions: &[ActionKind]) -> (MatchState, Vec<f64>) {
    let mut state = game.reset(GameRng::new(seed));
    let mut rewards = Vec::new();
    for &action in actions {
        if game.is_terminal(&state).is_some() {
            break;
        }
        rewards.push(game.step(&mut state, action).reward);
    }
    (state, rewards)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Health never leaves [0, max_hp], whatever is submitted.
    #[test]
    fn prop_health_bounded(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..200)) {
        let game = RouletteGame::default();
        let mut state = game.reset(GameRng::new(seed));

        for action in actions {
            if game.is_terminal(&state).is_some() {
                break;
            }
            game.step(&mut state, action);
            for side in Side::ALL {
                prop_assert!(state.player(side).health <= game.config().max_hp);
            }
        }
    }

    /// Item actions are only allowed while the item is held.
    #[test]
    fn prop_mask_implies_inventory(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..100)) {
        let game = RouletteGame::default();
        let (state, _) = play(&game, seed, &actions);
        let mask = game.legal_actions(&state);
        let inventory = state.player(state.turn).inventory;

        for item in ItemKind::ALL {
            if mask.allows(ActionKind::for_item(item)) {
                prop_assert!(inventory.count(item) > 0);
            }
        }
    }

    /// The observation alone yields the same mask as the engine.
    #[test]
    fn prop_observation_mask_agrees(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..100)) {
        let game = RouletteGame::default();
        let (state, _) = play(&game, seed, &actions);
        prop_assert_eq!(game.legal_actions(&state), state.observation().legal_actions());
    }

    /// Rollover keeps health and held items; only grants are added, within the cap.
    #[test]
    fn prop_rollover_preserves_players(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..60)) {
        let game = RouletteGame::default();
        let (mut state, _) = play(&game, seed, &actions);
        prop_assume!(game.is_terminal(&state).is_none());

        prop_assume!(!state.player(state.turn).restrained);
        state.magazine = Magazine::from_shells(&[Shell::Blank]);
        let before = state.players;

        let out = game.step(&mut state, ActionKind::FireSelf);
        prop_assert!(out.info.new_round);

        for side in Side::ALL {
            prop_assert_eq!(state.player(side).health, before[side].health);
            let old = before[side].inventory;
            let new = state.player(side).inventory;
            for item in ItemKind::ALL {
                prop_assert!(new.count(item) >= old.count(item));
            }
            prop_assert!(new.total() <= game.config().inventory_cap);
        }
    }

    /// A revealed blank fired at yourself keeps the turn; a revealed live
    /// costs exactly the multiplier and ends it.
    #[test]
    fn prop_fire_self_on_revealed_shell(seed in any::<u64>(), sharpened in any::<bool>()) {
        let game = RouletteGame::default();
        let mut state = game.reset(GameRng::new(seed));
        state.player_mut(Side::Blue).restrained = false;
        state.player_mut(Side::Red).restrained = false;
        state.sharpened = sharpened;

        let actor = state.turn;
        let next = state.magazine.peek().unwrap();
        state.knowledge = ShellKnowledge::Revealed(next);
        let multiplier = state.damage_multiplier();
        let health = state.player(actor).health;

        let out = game.step(&mut state, ActionKind::FireSelf);

        match next {
            Shell::Blank => {
                prop_assert_eq!(state.turn, actor);
                prop_assert!(out.info.turn_kept);
                prop_assert_eq!(state.player(actor).health, health);
            }
            Shell::Live => {
                prop_assert_eq!(state.player(actor).health, health.saturating_sub(multiplier));
                prop_assert!(!out.info.turn_kept);
            }
        }
    }

    /// Normalization is idempotent and always puts the actor in the Blue slots.
    #[test]
    fn prop_normalize_idempotent(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..80)) {
        let game = RouletteGame::default();
        let (state, _) = play(&game, seed, &actions);
        let obs = state.observation();
        let once = obs.normalize_perspective();

        prop_assert_eq!(once.normalize_perspective(), once);
        prop_assert_eq!(once.turn(), Side::Blue);
        prop_assert_eq!(once.health(Side::Blue), obs.health(state.turn));
    }

    /// The same seed and actions reproduce the same match.
    #[test]
    fn prop_seed_determinism(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..80)) {
        let game = RouletteGame::default();
        let (a, rewards_a) = play(&game, seed, &actions);
        let (b, rewards_b) = play(&game, seed, &actions);

        prop_assert_eq!(rewards_a, rewards_b);
        prop_assert_eq!(a.observation(), b.observation());
        prop_assert_eq!(a.magazine, b.magazine);
        prop_assert_eq!(a.history, b.history);
    }

    /// A snapshot resumes identically, RNG included.
    #[test]
    fn prop_snapshot_resumes(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..40)) {
        let game = RouletteGame::default();
        let (mut state, _) = play(&game, seed, &actions);
        let mut restored = MatchState::from_bytes(&state.to_bytes().unwrap()).unwrap();

        for _ in 0..30 {
            if game.is_terminal(&state).is_some() {
                break;
            }
            let a = game.step(&mut state, ActionKind::FireSelf);
            let b = game.step(&mut restored, ActionKind::FireSelf);
            prop_assert_eq!(a, b);
        }
    }
}
