//! Bridge session and line loop.

use std::io::{BufRead, Write};

use log::{debug, warn};

use super::protocol::{encode_observation, Request, StepResponse};
use crate::error::BridgeError;
use crate::games::RouletteEnv;

/// One client connection driving one environment.
///
/// Malformed input invalidates the session; the caller must open a new
/// one. Nothing malformed ever reaches the environment.
#[derive(Debug)]
pub struct BridgeSession {
    env: RouletteEnv,
    next_seed: u64,
    valid: bool,
}

impl BridgeSession {
    /// Create a session. Each `reset` request uses the next seed counting
    /// up from `seed`.
    pub fn new(mut env: RouletteEnv, seed: u64) -> Self {
        env.reset(seed);
        Self {
            env,
            next_seed: seed.wrapping_add(1),
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn env(&self) -> &RouletteEnv {
        &self.env
    }

    /// Handle one request line.
    ///
    /// Returns the response line (without newline), or `None` for requests
    /// that get no response.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>, BridgeError> {
        if !self.valid {
            return Err(BridgeError::SessionInvalid);
        }

        let request = match Request::parse(line) {
            Ok(request) => request,
            Err(err) => {
                warn!("invalidating bridge session: {err}");
                self.valid = false;
                return Err(err);
            }
        };
        debug!("bridge request: {request}");

        match request {
            Request::GetState => Ok(Some(encode_observation(&self.env.observation()))),
            Request::Reset => {
                let seed = self.next_seed;
                self.next_seed = seed.wrapping_add(1);
                self.env.reset(seed);
                Ok(None)
            }
            Request::PlayStep(action) => {
                let outcome = self.env.step(action);
                Ok(Some(StepResponse::from(&outcome).encode()))
            }
        }
    }
}

/// Serve requests from `reader` until EOF, writing responses to `writer`.
///
/// Blank lines are ignored. Returns the first malformed-input or I/O error.
pub fn serve<R: BufRead, W: Write>(
    session: &mut BridgeSession,
    reader: R,
    mut writer: W,
) -> Result<(), BridgeError> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(response) = session.handle_line(&line)? {
            writeln!(writer, "{response}")?;
            writer.flush()?;
        }
    }
    Ok(())
}
