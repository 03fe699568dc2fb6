//! Python bindings for the shell roulette engine.
//!
//! # Quick Start
//!
//! ```python
//! import shell_roulette as sr
//!
//! env = sr.RouletteEnv(seed=42)
//! opponent = sr.ScriptedPolicy(difficulty=3)
//!
//! obs = env.reset()
//! while not env.done:
//!     view = sr.RouletteEnv.normalize_perspective(obs)
//!     action = opponent.choose(view, env.action_mask().tolist())
//!     obs, reward, done, info = env.step(action)
//! ```

use pyo3::prelude::*;

mod py_env;
mod py_policy;
mod py_training;

pub use py_env::*;
pub use py_policy::*;
pub use py_training::*;

/// shell_roulette: a two-side duel rules engine for reinforcement learning.
///
/// This module provides:
/// - The reset/step environment with action masks
/// - Perspective normalization of observations
/// - Scripted opponents and batch evaluation
#[pymodule]
fn shell_roulette(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRouletteEnv>()?;
    m.add_class::<PyScriptedPolicy>()?;
    m.add_class::<PyMatchSummary>()?;
    m.add_function(wrap_pyfunction!(evaluate_scripted, m)?)?;
    Ok(())
}
