//! Line codec for the transport bridge.
//!
//! Requests, one per line:
//! - `get_state`
//! - `reset`
//! - `play_step:<id>` with a 0-based action id
//!
//! Responses:
//! - observation: comma-separated integers, e.g. `0,5,2,3,4,4,...`
//! - step: `<observation>:<reward>:<True|False>`

use std::fmt;
use std::str::FromStr;

use crate::core::ActionKind;
use crate::error::BridgeError;
use crate::nn::{Observation, OBS_LEN};
use crate::rules::StepOutcome;

/// One request from the remote client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    GetState,
    Reset,
    PlayStep(ActionKind),
}

impl Request {
    /// Parse a request line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, BridgeError> {
        line.parse()
    }
}

impl FromStr for Request {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line {
            "get_state" => return Ok(Request::GetState),
            "reset" => return Ok(Request::Reset),
            _ => {}
        }

        let id = line
            .strip_prefix("play_step:")
            .ok_or_else(|| BridgeError::Malformed(line.to_string()))?;
        let id: i64 = id
            .trim()
            .parse()
            .map_err(|_| BridgeError::Malformed(line.to_string()))?;
        Ok(Request::PlayStep(ActionKind::try_from(id)?))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::GetState => write!(f, "get_state"),
            Request::Reset => write!(f, "reset"),
            Request::PlayStep(action) => write!(f, "play_step:{}", action.id()),
        }
    }
}

/// Encode an observation as comma-separated integers.
///
/// Every observation value is integral, so nothing is lost.
pub fn encode_observation(observation: &Observation) -> String {
    observation
        .as_slice()
        .iter()
        .map(|v| (v.round() as i64).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode an observation produced by `encode_observation`.
///
/// Empty fields (e.g. a trailing comma) are skipped. Fails unless exactly
/// `OBS_LEN` numeric fields remain.
pub fn decode_observation(text: &str) -> Result<Observation, BridgeError> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<f32>()
                .map_err(|_| BridgeError::BadObservation(format!("not a number: {field:?}")))
        })
        .collect::<Result<Vec<f32>, _>>()?;

    Observation::from_slice(&values).ok_or_else(|| {
        BridgeError::BadObservation(format!("expected {OBS_LEN} values, got {}", values.len()))
    })
}

/// Response to `play_step`.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResponse {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
}

impl StepResponse {
    /// Encode as `<observation>:<reward>:<True|False>`.
    pub fn encode(&self) -> String {
        let done = if self.done { "True" } else { "False" };
        format!("{}:{}:{}", encode_observation(&self.observation), self.reward, done)
    }

    /// Parse an encoded response. `done` accepts any letter case.
    pub fn parse(text: &str) -> Result<Self, BridgeError> {
        let text = text.trim();
        let mut parts = text.split(':');
        let (Some(observation), Some(reward), Some(done), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(BridgeError::Malformed(text.to_string()));
        };

        let observation = decode_observation(observation)?;
        let reward = reward
            .trim()
            .parse::<f64>()
            .map_err(|_| BridgeError::Malformed(text.to_string()))?;
        let done = match done.trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => return Err(BridgeError::Malformed(text.to_string())),
        };

        Ok(Self {
            observation,
            reward,
            done,
        })
    }
}

impl From<&StepOutcome> for StepResponse {
    fn from(outcome: &StepOutcome) -> Self {
        Self {
            observation: outcome.observation,
            reward: outcome.reward,
            done: outcome.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, MatchState, Shell, ShellKnowledge, Side, Magazine};

    fn sample_observation() -> Observation {
        let mut state = MatchState::new(GameRng::new(0), 4, Side::Red);
        state.magazine = Magazine::from_shells(&[Shell::Live, Shell::Blank]);
        state.knowledge = ShellKnowledge::Unknown;
        state.player_mut(Side::Blue).health = 2;
        state.observation()
    }

    #[test]
    fn test_parse_requests() {
        assert_eq!(Request::parse("get_state").unwrap(), Request::GetState);
        assert_eq!(Request::parse("  reset\n").unwrap(), Request::Reset);
        assert_eq!(
            Request::parse("play_step:4").unwrap(),
            Request::PlayStep(ActionKind::Heal)
        );
        assert_eq!(
            Request::parse("play_step: 0 ").unwrap(),
            Request::PlayStep(ActionKind::FireSelf)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(Request::parse("jump"), Err(BridgeError::Malformed(_))));
        assert!(matches!(Request::parse("play_step:"), Err(BridgeError::Malformed(_))));
        assert!(matches!(Request::parse("play_step:x"), Err(BridgeError::Malformed(_))));
        assert!(matches!(Request::parse("play_step:7"), Err(BridgeError::Action(_))));
        assert!(matches!(Request::parse("play_step:-1"), Err(BridgeError::Action(_))));
    }

    #[test]
    fn test_request_display_parses_back() {
        for request in [Request::GetState, Request::Reset, Request::PlayStep(ActionKind::Restrain)] {
            assert_eq!(Request::parse(&request.to_string()).unwrap(), request);
        }
    }

    #[test]
    fn test_encode_observation() {
        let text = encode_observation(&sample_observation());
        assert_eq!(text, "1,2,1,1,4,2,0,0,0,0,0,0,0,0,0,0,1,-1,0,0");
    }

    #[test]
    fn test_decode_observation() {
        let obs = sample_observation();
        assert_eq!(decode_observation(&encode_observation(&obs)).unwrap(), obs);
        assert_eq!(decode_observation(&format!("{},", encode_observation(&obs))).unwrap(), obs);

        assert!(matches!(decode_observation("1,2,3"), Err(BridgeError::BadObservation(_))));
        assert!(matches!(decode_observation("a,b"), Err(BridgeError::BadObservation(_))));
    }

    #[test]
    fn test_step_response() {
        let response = StepResponse {
            observation: sample_observation(),
            reward: -15.0,
            done: false,
        };
        let text = response.encode();
        assert!(text.ends_with(":-15:False"));
        assert_eq!(StepResponse::parse(&text).unwrap(), response);

        let done = StepResponse::parse(&text.replace("False", "true")).unwrap();
        assert!(done.done);

        assert!(StepResponse::parse("1,2:3").is_err());
        assert!(StepResponse::parse(&text.replace("False", "maybe")).is_err());
    }
}
