//! Request/response contract for transports.
//!
//! A transport (HTTP handler, CLI, test harness) hands over the JSON body it
//! received and gets back the JSON body to send. Nothing here knows about
//! status codes; [`Error::is_input_error`] is enough to pick one.
//!
//! # Request
//! ```text
//! { "reference": [7, 0, 1, 2], "frames": 3, "algorithm": "FIFO" }
//! ```
//! - `reference` - non-empty array of integers or strings
//! - `frames` - positive integer, numeric string or float (truncated);
//!   defaults to [`DEFAULT_FRAMES`]
//! - `algorithm` - `"FIFO"`, `"LIFO"`, `"Optimal"` or `"AI-Based"`;
//!   defaults to [`DEFAULT_ALGORITHM`]
//!
//! # Response
//! Either the serialized [`Summary`] or `{ "error": "<message>" }`.
//!
//! # Example
//! ```
//! use pagesim::api::{render, simulate_json};
//!
//! let outcome = simulate_json(r#"{"reference": [1, 2, 1], "frames": 2}"#);
//! let body = render(&outcome).unwrap();
//! assert!(body.starts_with(r#"{"hits":1,"faults":2"#));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::config::{DEFAULT_ALGORITHM, DEFAULT_FRAMES};
use crate::common::{Error, Page, Result};
use crate::memory::replacer::PolicyKind;
use crate::memory::{run_simulation, Summary};

/// A decoded but not yet validated simulation request.
///
/// Fields stay raw JSON so that coercion rules live in one place and a bad
/// field yields an input error rather than a decoding failure. A field set
/// to `null` is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationRequest {
    #[serde(default)]
    pub reference: Option<Value>,
    #[serde(default)]
    pub frames: Option<Value>,
    #[serde(default)]
    pub algorithm: Option<Value>,
}

/// Body returned in place of a summary when a request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl SimulationRequest {
    /// The reference sequence.
    ///
    /// A missing, empty or non-array `reference` is an input error. Elements
    /// that are neither integers nor strings fail decoding with the serde
    /// message intact.
    pub fn pages(&self) -> Result<Vec<Page>> {
        match &self.reference {
            Some(Value::Array(items)) if !items.is_empty() => items
                .iter()
                .map(|item| Page::deserialize(item).map_err(Error::from))
                .collect(),
            _ => Err(Error::InvalidInput("Invalid reference string".to_string())),
        }
    }

    /// The frame count, coerced to a positive integer.
    pub fn frame_count(&self) -> Result<usize> {
        let Some(raw) = &self.frames else {
            return Ok(DEFAULT_FRAMES);
        };

        let count = match raw {
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Some(i),
                (None, Some(f)) if f.is_finite() => Some(f.trunc() as i64),
                _ => None,
            },
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        count
            .filter(|&n| n >= 1)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| Error::InvalidInput(format!("Invalid frame count: {}", raw)))
    }

    /// The policy selector.
    pub fn policy(&self) -> Result<PolicyKind> {
        match &self.algorithm {
            None => DEFAULT_ALGORITHM.parse(),
            Some(Value::String(name)) => name.parse(),
            Some(other) => Err(Error::UnknownPolicy(other.to_string())),
        }
    }

    /// Validate every field, then simulate.
    ///
    /// Fields are checked in order reference, frames, algorithm; the first
    /// failure is returned and no simulation state is built.
    pub fn run(&self) -> Result<Summary> {
        let reference = self.pages()?;
        let frames = self.frame_count()?;
        let kind = self.policy()?;
        run_simulation(&reference, frames, kind.as_str())
    }
}

/// Decode a JSON request body and run it.
pub fn simulate_json(body: &str) -> Result<Summary> {
    let request: SimulationRequest = serde_json::from_str(body)?;
    log::debug!("decoded request: {:?}", request);
    request.run()
}

/// Render the outcome of a run as a JSON response body.
pub fn render(outcome: &Result<Summary>) -> Result<String> {
    let body = match outcome {
        Ok(summary) => serde_json::to_string(summary)?,
        Err(err) => {
            log::debug!("request failed: {}", err);
            serde_json::to_string(&ErrorBody {
                error: err.to_string(),
            })?
        }
    };
    Ok(body)
}

/// Parse a comma-separated list of integers such as `"7, 0, 1, 2"`.
///
/// Whitespace around each item is ignored. Any item that is not an integer,
/// including an empty one, rejects the whole string.
pub fn parse_reference_string(input: &str) -> Result<Vec<Page>> {
    input
        .split(',')
        .map(|item| {
            item.trim().parse::<i64>().map(Page::Number).map_err(|_| {
                Error::InvalidInput(
                    "Reference string must only contain comma-separated numbers".to_string(),
                )
            })
        })
        .collect()
}
