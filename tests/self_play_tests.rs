//! Integration tests for policies and self-play.

use shell_roulette::core::{ActionKind, Side};
use shell_roulette::games::{RouletteEnv, RouletteGame};
use shell_roulette::nn::{FixedPolicy, Policy, ScriptedPolicy, UniformPolicy};
use shell_roulette::training::{MatchSummary, SelfPlayConfig, SelfPlayWorker};

// =============================================================================
// Policy Tests
// =============================================================================

#[test]
fn test_every_difficulty_picks_legal_actions() {
    for difficulty in 0..=ScriptedPolicy::MAX_DIFFICULTY {
        let mut env = RouletteEnv::default();
        let mut policy = ScriptedPolicy::new(difficulty, u64::from(difficulty));
        let mut obs = env.reset(100 + u64::from(difficulty));

        let mut steps = 0;
        while !env.is_done() && steps < 500 {
            let mask = env.legal_actions();
            let action = policy
                .choose(&obs.normalize_perspective(), &mask)
                .expect("live match has a legal action");
            assert!(mask.allows(action), "difficulty {difficulty} chose {action}");

            let out = env.step(action);
            assert!(!out.info.illegal);
            obs = out.observation;
            steps += 1;
        }
        assert!(env.is_done(), "difficulty {difficulty} never finished");
    }
}

#[test]
fn test_boxed_policies() {
    let worker = SelfPlayWorker::new(RouletteGame::default(), SelfPlayConfig::default());
    let mut red: Box<dyn Policy> = Box::new(ScriptedPolicy::new(4, 0));
    let mut blue: Box<dyn Policy> = Box::new(UniformPolicy::new(0));

    let trajectory = worker.play_match(&mut red, &mut blue, 3);
    assert!(trajectory.result.is_some());
}

// =============================================================================
// Self-Play Tests
// =============================================================================

#[test]
fn test_trajectory_alternates_sensibly() {
    let worker = SelfPlayWorker::new(RouletteGame::default(), SelfPlayConfig::default());
    let trajectory = worker.play_match(&mut UniformPolicy::new(1), &mut UniformPolicy::new(2), 17);

    assert_eq!(trajectory.steps[0].side, Side::Blue);
    for (i, step) in trajectory.steps.iter().enumerate() {
        assert_eq!(step.move_number, i);
    }

    let winner = trajectory.winner().expect("uniform play finishes");
    let last = trajectory.steps.last().unwrap();
    // the last step either won for its actor or was a self-inflicted loss
    assert_eq!(last.reward > 0.0, last.side == winner);
}

#[test]
fn test_illegal_submissions_are_penalized() {
    let worker = SelfPlayWorker::new(RouletteGame::default(), SelfPlayConfig::default().with_max_steps(50));
    // Restrain as often as possible: after the first use it is illegal or wasted
    let trajectory = worker.play_match(
        &mut FixedPolicy(ActionKind::Restrain),
        &mut FixedPolicy(ActionKind::FireOpponent),
        4,
    );

    let penalized = trajectory
        .side_steps(Side::Red)
        .filter(|s| !s.mask.allows(s.action))
        .count();
    assert!(penalized > 0);
    assert!(trajectory.score(Side::Red) < 0.0);
}

#[test]
fn test_strong_script_beats_random() {
    let worker = SelfPlayWorker::new(
        RouletteGame::default(),
        SelfPlayConfig::default().with_seed_offset(500),
    );
    let summary = worker.evaluate(&mut ScriptedPolicy::new(4, 1), &mut UniformPolicy::new(2), 200);

    assert_eq!(summary.matches, 200);
    assert_eq!(summary.truncated, 0);
    assert!(summary.mean_score(Side::Red) > summary.mean_score(Side::Blue));
}

#[test]
fn test_summary_from_trajectories() {
    let worker = SelfPlayWorker::new(RouletteGame::default(), SelfPlayConfig::default());
    let trajectories = worker.play_matches(&mut ScriptedPolicy::new(1, 0), &mut ScriptedPolicy::new(1, 1), 20);
    let summary: MatchSummary = trajectories.iter().collect();

    let actions: usize = ActionKind::ALL.iter().map(|&a| summary.action_count(a)).sum();
    let steps: usize = trajectories.iter().map(|t| t.len()).sum();
    assert_eq!(actions, steps);
    // level 1 never uses items
    assert_eq!(summary.action_count(ActionKind::Heal), 0);
    assert_eq!(summary.wins[Side::Red] + summary.wins[Side::Blue], 20);
}
