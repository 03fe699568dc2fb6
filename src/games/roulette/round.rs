//! Round generation.

use log::debug;

use crate::core::{ItemKind, Magazine, MatchState, RulesConfig, Shell, ShellKnowledge, Side};

/// Load a fresh magazine and grant items to both sides.
///
/// Health, held items and restraint carry over. Grants beyond the
/// inventory cap are dropped.
pub(crate) fn load_round(config: &RulesConfig, state: &mut MatchState) {
    let live = state.rng.roll(config.live_range.clone());
    let blank = state.rng.roll(config.blank_range.clone());

    let mut shells = Vec::with_capacity(usize::from(live) + usize::from(blank));
    shells.extend(std::iter::repeat(Shell::Live).take(usize::from(live)));
    shells.extend(std::iter::repeat(Shell::Blank).take(usize::from(blank)));
    state.rng.shuffle(&mut shells);
    state.magazine = Magazine::from_shells(&shells);

    for side in Side::ALL {
        let grant = state.rng.roll(config.item_grant_range.clone());
        let mut granted = 0;
        for _ in 0..grant {
            let kind = ItemKind::ALL[state.rng.index(ItemKind::ALL.len())];
            if state.players[side].inventory.add(kind, config.inventory_cap) {
                granted += 1;
            }
        }
        debug!("round {}: {side} granted {granted}/{grant} items", state.round + 1);
    }

    state.sharpened = false;
    state.knowledge = ShellKnowledge::Unknown;
    state.round += 1;

    debug!("round {} loaded: {live} live, {blank} blank", state.round);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Inventory};

    #[test]
    fn test_round_within_ranges() {
        let config = RulesConfig::default();

        for seed in 0..50 {
            let mut state = MatchState::new(GameRng::new(seed), 4, Side::Blue);
            load_round(&config, &mut state);

            assert!((1..=4).contains(&state.magazine.live()));
            assert!((1..=4).contains(&state.magazine.blank()));
            for side in Side::ALL {
                let total = state.player(side).inventory.total();
                assert!((2..=4).contains(&total), "seed {seed}: {side} got {total}");
            }
            assert_eq!(state.round, 1);
        }
    }

    #[test]
    fn test_round_respects_cap() {
        let config = RulesConfig::default().with_inventory_cap(8);
        let mut state = MatchState::new(GameRng::new(3), 4, Side::Blue);
        state.player_mut(Side::Red).inventory = Inventory::with_items(&[(ItemKind::Heal, 7)]);

        load_round(&config, &mut state);

        assert_eq!(state.player(Side::Red).inventory.total(), 8);
        assert!(state.player(Side::Red).inventory.count(ItemKind::Heal) >= 7);
    }

    #[test]
    fn test_round_resets_gun_but_keeps_players() {
        let config = RulesConfig::default();
        let mut state = MatchState::new(GameRng::new(9), 4, Side::Blue);
        state.player_mut(Side::Blue).health = 2;
        state.player_mut(Side::Red).restrained = true;
        state.sharpened = true;
        state.knowledge = ShellKnowledge::Revealed(Shell::Live);

        load_round(&config, &mut state);

        assert_eq!(state.player(Side::Blue).health, 2);
        assert!(state.player(Side::Red).restrained);
        assert!(!state.sharpened);
        assert_eq!(state.knowledge, ShellKnowledge::Unknown);
    }

    #[test]
    fn test_round_is_seed_deterministic() {
        let config = RulesConfig::default();
        let mut a = MatchState::new(GameRng::new(42), 4, Side::Blue);
        let mut b = MatchState::new(GameRng::new(42), 4, Side::Blue);
        load_round(&config, &mut a);
        load_round(&config, &mut b);

        assert_eq!(a.magazine, b.magazine);
        assert_eq!(a.players, b.players);
    }
}
