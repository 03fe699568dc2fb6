//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use crate::core::{ActionKind, RulesConfig, Side};
use crate::games::RouletteEnv;
use crate::nn::Observation;
use crate::rules::GameResult;

/// Parse "red"/"blue" (any case).
pub(crate) fn parse_side(name: &str) -> PyResult<Side> {
    match name.to_ascii_lowercase().as_str() {
        "blue" => Ok(Side::Blue),
        "red" => Ok(Side::Red),
        other => Err(PyValueError::new_err(format!("unknown side {other:?}"))),
    }
}

pub(crate) fn side_name(side: Side) -> &'static str {
    match side {
        Side::Blue => "blue",
        Side::Red => "red",
    }
}

pub(crate) fn observation_from(values: &[f32]) -> PyResult<Observation> {
    Observation::from_slice(values).ok_or_else(|| {
        PyValueError::new_err(format!("observation must have 20 values, got {}", values.len()))
    })
}

/// Python wrapper for RouletteEnv.
///
/// One match at a time; `reset` starts the next one.
#[pyclass(name = "RouletteEnv")]
pub struct PyRouletteEnv {
    env: RouletteEnv,
    next_seed: u64,
}

#[pymethods]
impl PyRouletteEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - max_hp: Starting and maximum health (default: 4)
    /// - inventory_cap: Maximum items held per side (default: 8)
    /// - starting_side: "blue" or "red" (default: "blue")
    /// - seed: Seed for the first match; later resets without a seed count up from it
    #[new]
    #[pyo3(signature = (max_hp = 4, inventory_cap = 8, starting_side = "blue", seed = 0))]
    fn new(max_hp: u8, inventory_cap: usize, starting_side: &str, seed: u64) -> PyResult<Self> {
        let config = RulesConfig::default()
            .with_max_hp(max_hp)
            .with_inventory_cap(inventory_cap)
            .with_starting_side(parse_side(starting_side)?);
        let mut env = RouletteEnv::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        env.reset(seed);
        Ok(Self {
            env,
            next_seed: seed.wrapping_add(1),
        })
    }

    /// Start a new match and return its first observation.
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(&mut self, py: Python<'py>, seed: Option<u64>) -> Bound<'py, PyArray1<f32>> {
        let seed = seed.unwrap_or(self.next_seed);
        self.next_seed = seed.wrapping_add(1);
        let obs = self.env.reset(seed);
        PyArray1::from_slice_bound(py, obs.as_slice())
    }

    /// Resolve an action id (0-6) for the side to act.
    ///
    /// Returns (observation, reward, done, info).
    #[allow(clippy::type_complexity)]
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: i64,
    ) -> PyResult<(Bound<'py, PyArray1<f32>>, f64, bool, Bound<'py, PyDict>)> {
        let action = ActionKind::try_from(action).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let outcome = self.env.step(action);

        let info = PyDict::new_bound(py);
        info.set_item("skipped", outcome.info.skipped)?;
        info.set_item("illegal", outcome.info.illegal)?;
        info.set_item("drawn", outcome.info.drawn.map(|s| if s.is_live() { "live" } else { "blank" }))?;
        info.set_item("new_round", outcome.info.new_round)?;
        info.set_item("turn_kept", outcome.info.turn_kept)?;

        Ok((
            PyArray1::from_slice_bound(py, outcome.observation.as_slice()),
            outcome.reward,
            outcome.done,
            info,
        ))
    }

    /// Current observation.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, self.env.observation().as_slice())
    }

    /// Ids of the legal actions for the side to act.
    fn legal_actions(&self) -> Vec<u8> {
        self.env.legal_actions().legal().map(ActionKind::id).collect()
    }

    /// Boolean mask over all 7 action ids.
    fn action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_slice_bound(py, &self.env.legal_actions().as_array())
    }

    /// View an observation from the acting side.
    #[staticmethod]
    fn normalize_perspective<'py>(py: Python<'py>, obs: Vec<f32>) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let normalized = observation_from(&obs)?.normalize_perspective();
        Ok(PyArray1::from_slice_bound(py, normalized.as_slice()))
    }

    #[getter]
    fn done(&self) -> bool {
        self.env.is_done()
    }

    /// "red", "blue", "draw" or None while the match continues.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.env.result().map(|result| match result {
            GameResult::Winner(side) => side_name(side),
            GameResult::Draw => "draw",
        })
    }

    /// Side to act.
    #[getter]
    fn turn(&self) -> &'static str {
        side_name(self.env.state().turn)
    }

    #[getter]
    fn round(&self) -> u32 {
        self.env.state().round
    }

    /// Serialize the current match.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.env.snapshot().map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Resume a match produced by `snapshot`.
    fn restore(&mut self, data: &[u8]) -> PyResult<()> {
        self.env.restore(data).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let state = self.env.state();
        format!(
            "RouletteEnv(round={}, turn={}, status={})",
            state.round,
            side_name(state.turn),
            if self.env.is_done() { "terminal" } else { "ongoing" }
        )
    }
}
