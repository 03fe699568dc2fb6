//! Text bridge for driving an environment from another process.
//!
//! The line protocol lets an external client (a training script, a game
//! front end) reset and step a match over any byte stream. The engine
//! never sees raw input: every line is parsed and validated here first.
//!
//! ## Usage
//!
//! ```rust
//! use shell_roulette::bridge::{serve, BridgeSession};
//! use shell_roulette::games::RouletteEnv;
//!
//! let mut session = BridgeSession::new(RouletteEnv::default(), 0);
//! let mut out = Vec::new();
//! serve(&mut session, "get_state\nplay_step:1\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
//! ```

pub mod protocol;
pub mod session;

pub use protocol::{decode_observation, encode_observation, Request, StepResponse};
pub use session::{serve, BridgeSession};
