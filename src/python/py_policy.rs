//! Policy bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ActionMask, ACTION_COUNT};
use crate::nn::{Policy, ScriptedPolicy};

use super::py_env::observation_from;

/// Python wrapper for ScriptedPolicy.
///
/// Rule-based opponent, difficulty 0 (near random) to 4 (uses every item).
#[pyclass(name = "ScriptedPolicy")]
pub struct PyScriptedPolicy(ScriptedPolicy);

#[pymethods]
impl PyScriptedPolicy {
    #[new]
    #[pyo3(signature = (difficulty = 4, seed = 0, max_hp = 4))]
    fn new(difficulty: u8, seed: u64, max_hp: u8) -> Self {
        Self(ScriptedPolicy::new(difficulty, seed).with_max_hp(max_hp))
    }

    /// Choose an action id for an observation.
    ///
    /// Without a mask, legality is derived from the observation.
    /// Returns None when no action is legal.
    #[pyo3(signature = (obs, mask = None))]
    fn choose(&mut self, obs: Vec<f32>, mask: Option<Vec<bool>>) -> PyResult<Option<u8>> {
        let observation = observation_from(&obs)?;
        let mask = match mask {
            Some(values) => {
                let allowed: [bool; ACTION_COUNT] = values.as_slice().try_into().map_err(|_| {
                    PyValueError::new_err(format!("mask must have {ACTION_COUNT} values"))
                })?;
                ActionMask::from_array(allowed)
            }
            None => observation.legal_actions(),
        };
        Ok(self.0.choose(&observation, &mask).map(|a| a.id()))
    }

    #[getter]
    fn difficulty(&self) -> u8 {
        self.0.difficulty()
    }

    fn __repr__(&self) -> String {
        format!("ScriptedPolicy(difficulty={})", self.0.difficulty())
    }
}
