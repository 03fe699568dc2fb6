//! Policy-facing view of a match.
//!
//! ## Overview
//!
//! - **Observation**: the fixed 20-value encoding a policy sees, its
//!   observation-only legality mask and perspective normalization
//! - **Policy**: the seam learned agents plug into
//! - **Baselines**: `UniformPolicy`, `FixedPolicy` and the five-level
//!   `ScriptedPolicy` opponent
//!
//! ## Usage
//!
//! ```rust
//! use shell_roulette::games::RouletteEnv;
//! use shell_roulette::nn::{Policy, ScriptedPolicy};
//!
//! let mut env = RouletteEnv::default();
//! let obs = env.reset(7);
//! let mut policy = ScriptedPolicy::new(3, 7);
//!
//! let action = policy.choose(&obs.normalize_perspective(), &env.legal_actions());
//! assert!(action.is_some());
//! ```

pub mod observation;
pub mod policy;

// Re-export main types
pub use observation::{Observation, OBS_LEN};
pub use policy::{FixedPolicy, Policy, ScriptedPolicy, UniformPolicy};
