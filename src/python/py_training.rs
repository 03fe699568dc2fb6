//! Evaluation bindings for Python.

use pyo3::prelude::*;

use crate::games::RouletteGame;
use crate::nn::ScriptedPolicy;
use crate::training::{MatchSummary, SelfPlayConfig, SelfPlayWorker};

use super::py_env::parse_side;

/// Python wrapper for MatchSummary.
#[pyclass(name = "MatchSummary")]
pub struct PyMatchSummary(pub MatchSummary);

#[pymethods]
impl PyMatchSummary {
    #[getter]
    fn matches(&self) -> usize {
        self.0.matches
    }

    #[getter]
    fn truncated(&self) -> usize {
        self.0.truncated
    }

    #[getter]
    fn mean_length(&self) -> f64 {
        self.0.mean_length()
    }

    fn wins(&self, side: &str) -> PyResult<usize> {
        Ok(self.0.wins[parse_side(side)?])
    }

    fn win_rate(&self, side: &str) -> PyResult<f64> {
        Ok(self.0.win_rate(parse_side(side)?))
    }

    fn mean_score(&self, side: &str) -> PyResult<f64> {
        Ok(self.0.mean_score(parse_side(side)?))
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchSummary(matches={}, red_rate={:.3}, blue_rate={:.3}, mean_length={:.1})",
            self.0.matches,
            self.0.win_rate(crate::core::Side::Red),
            self.0.win_rate(crate::core::Side::Blue),
            self.0.mean_length()
        )
    }
}

/// Play scripted opponents against each other and summarize the results.
///
/// # Arguments
/// - red_difficulty, blue_difficulty: ScriptedPolicy levels (0-4)
/// - count: Number of matches
/// - seed_offset: Seed of the first match
/// - max_steps: Step ceiling per match
#[pyfunction]
#[pyo3(signature = (red_difficulty, blue_difficulty, count, seed_offset = 0, max_steps = 1000))]
pub fn evaluate_scripted(
    red_difficulty: u8,
    blue_difficulty: u8,
    count: usize,
    seed_offset: u64,
    max_steps: usize,
) -> PyMatchSummary {
    let config = SelfPlayConfig::default()
        .with_seed_offset(seed_offset)
        .with_max_steps(max_steps);
    let worker = SelfPlayWorker::new(RouletteGame::default(), config);

    let mut red = ScriptedPolicy::new(red_difficulty, seed_offset);
    let mut blue = ScriptedPolicy::new(blue_difficulty, seed_offset.wrapping_add(1));
    PyMatchSummary(worker.evaluate(&mut red, &mut blue, count))
}
