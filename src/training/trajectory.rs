//! Trajectories and match summaries.
//!
//! A trajectory records one complete match from self-play:
//! - The observation each policy saw at each decision point
//! - The mask it chose under and the action it took
//! - The reward that action earned
//! - Per-side score totals and the final result

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, ActionMask, Side, SideMap};
use crate::nn::Observation;
use crate::rules::GameResult;

/// A single decision in a trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// The side that acted.
    pub side: Side,

    /// Observation as seen by the policy (normalized if configured).
    pub observation: Observation,

    /// Legal actions at this point.
    pub mask: ActionMask,

    /// The action submitted.
    pub action: ActionKind,

    /// Reward earned by `side` for this action.
    pub reward: f64,

    /// Move number in the match (0-indexed).
    pub move_number: usize,
}

/// A complete match from self-play.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trajectory {
    /// All decisions in order.
    pub steps: Vec<Step>,

    /// Summed reward per side.
    pub scores: SideMap<f64>,

    /// Final result, `None` if the match was cut off.
    pub result: Option<GameResult>,

    /// The match hit the step ceiling before ending.
    pub truncated: bool,

    /// Seed the match was reset with.
    pub seed: u64,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new(seed: u64) -> Self {
        Self {
            steps: Vec::new(),
            scores: SideMap::with_value(0.0),
            result: None,
            truncated: false,
            seed,
        }
    }

    /// Add a step and credit its reward to the acting side.
    pub fn push(&mut self, step: Step) {
        self.scores[step.side] += step.reward;
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get steps taken by one side.
    pub fn side_steps(&self, side: Side) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.side == side)
    }

    /// Total reward earned by one side.
    pub fn score(&self, side: Side) -> f64 {
        self.scores[side]
    }

    pub fn winner(&self) -> Option<Side> {
        self.result.and_then(|r| r.winner())
    }
}

/// Aggregate statistics over many trajectories.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Number of trajectories summarized.
    pub matches: usize,

    /// Matches won per side.
    pub wins: SideMap<usize>,

    /// Matches that ended with both sides dead.
    pub draws: usize,

    /// Matches cut off by the step ceiling.
    pub truncated: usize,

    /// Sum of per-side scores.
    pub total_scores: SideMap<f64>,

    /// Sum of match lengths in steps.
    pub total_steps: usize,

    /// How often each action was submitted.
    pub action_counts: FxHashMap<ActionKind, usize>,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trajectory into the summary.
    pub fn record(&mut self, trajectory: &Trajectory) {
        self.matches += 1;
        match trajectory.result {
            Some(GameResult::Winner(side)) => self.wins[side] += 1,
            Some(GameResult::Draw) => self.draws += 1,
            None => {}
        }
        if trajectory.truncated {
            self.truncated += 1;
        }
        for side in Side::ALL {
            self.total_scores[side] += trajectory.scores[side];
        }
        self.total_steps += trajectory.len();
        for step in &trajectory.steps {
            *self.action_counts.entry(step.action).or_insert(0) += 1;
        }
    }

    /// Fraction of matches won by `side`.
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.wins[side] as f64 / self.matches as f64
    }

    /// Mean score per match for `side`.
    pub fn mean_score(&self, side: Side) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.total_scores[side] / self.matches as f64
    }

    /// Mean match length in steps.
    pub fn mean_length(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.total_steps as f64 / self.matches as f64
    }

    /// Number of times `action` was submitted.
    pub fn action_count(&self, action: ActionKind) -> usize {
        self.action_counts.get(&action).copied().unwrap_or(0)
    }
}

impl<'a> FromIterator<&'a Trajectory> for MatchSummary {
    fn from_iter<I: IntoIterator<Item = &'a Trajectory>>(iter: I) -> Self {
        let mut summary = MatchSummary::new();
        for trajectory in iter {
            summary.record(trajectory);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_step(side: Side, action: ActionKind, reward: f64, move_number: usize) -> Step {
        Step {
            side,
            observation: Observation::default(),
            mask: ActionMask::none(),
            action,
            reward,
            move_number,
        }
    }

    fn finished(winner: Side) -> Trajectory {
        let mut traj = Trajectory::new(1);
        traj.push(make_test_step(Side::Blue, ActionKind::FireOpponent, 10.0, 0));
        traj.push(make_test_step(Side::Red, ActionKind::FireSelf, -15.0, 1));
        traj.result = Some(GameResult::Winner(winner));
        traj
    }

    #[test]
    fn test_trajectory_scores() {
        let mut traj = Trajectory::new(42);
        assert!(traj.is_empty());

        traj.push(make_test_step(Side::Blue, ActionKind::FireSelf, 15.0, 0));
        traj.push(make_test_step(Side::Blue, ActionKind::FireOpponent, 10.0, 1));
        traj.push(make_test_step(Side::Red, ActionKind::Heal, -2.0, 2));

        assert_eq!(traj.len(), 3);
        assert_eq!(traj.score(Side::Blue), 25.0);
        assert_eq!(traj.score(Side::Red), -2.0);
        assert_eq!(traj.side_steps(Side::Blue).count(), 2);
        assert_eq!(traj.winner(), None);
    }

    #[test]
    fn test_summary() {
        let mut cut = Trajectory::new(3);
        cut.truncated = true;
        cut.push(make_test_step(Side::Blue, ActionKind::Inspect, 3.0, 0));

        let trajectories = [finished(Side::Blue), finished(Side::Blue), finished(Side::Red), cut];
        let summary: MatchSummary = trajectories.iter().collect();

        assert_eq!(summary.matches, 4);
        assert_eq!(summary.wins[Side::Blue], 2);
        assert_eq!(summary.wins[Side::Red], 1);
        assert_eq!(summary.truncated, 1);
        assert_eq!(summary.win_rate(Side::Blue), 0.5);
        assert_eq!(summary.mean_score(Side::Blue), (30.0 + 3.0) / 4.0);
        assert_eq!(summary.mean_length(), 7.0 / 4.0);
        assert_eq!(summary.action_count(ActionKind::FireOpponent), 3);
        assert_eq!(summary.action_count(ActionKind::Restrain), 0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = MatchSummary::new();
        assert_eq!(summary.win_rate(Side::Red), 0.0);
        assert_eq!(summary.mean_length(), 0.0);
    }

    #[test]
    fn test_trajectory_serde() {
        let traj = finished(Side::Red);
        let json = serde_json::to_string(&traj).unwrap();
        let back: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.steps, traj.steps);
        assert_eq!(back.winner(), Some(Side::Red));
    }
}
