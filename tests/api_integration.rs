//! Integration tests for the JSON request/response contract.
//!
//! These tests go through the same path a transport would: raw body in,
//! rendered body out.

use pagesim::api::{parse_reference_string, render, simulate_json, ErrorBody};
use pagesim::{pages, run_simulation, Error};
use serde_json::{json, Value};
use std::sync::Arc;
use std::thread;

fn respond(body: &str) -> Value {
    let rendered = render(&simulate_json(body)).unwrap();
    serde_json::from_str(&rendered).unwrap()
}

/// Test the full response shape for a small run.
#[test]
fn test_response_shape() {
    let response = respond(r#"{"reference": [1, 2, 1, 3], "frames": 2, "algorithm": "FIFO"}"#);

    assert_eq!(
        response,
        json!({
            "hits": 1,
            "faults": 3,
            "hit_ratio": 0.25,
            "fault_ratio": 0.75,
            "steps": [
                { "step": 1, "page": 1, "status": "MISS", "memory": [1],    "replaced": null },
                { "step": 2, "page": 2, "status": "MISS", "memory": [1, 2], "replaced": null },
                { "step": 3, "page": 1, "status": "HIT",  "memory": [1, 2], "replaced": null },
                { "step": 4, "page": 3, "status": "MISS", "memory": [3, 2], "replaced": 1 }
            ]
        })
    );
}

/// String pages come back as strings.
#[test]
fn test_string_pages_round_trip() {
    let response = respond(r#"{"reference": ["a", "b", "c"], "frames": 2, "algorithm": "LIFO"}"#);

    assert_eq!(response["steps"][2]["memory"], json!(["a", "c"]));
    assert_eq!(response["steps"][2]["replaced"], json!("b"));
}

/// Frames given as a string are coerced.
#[test]
fn test_frames_as_string() {
    let response = respond(r#"{"reference": [1, 2, 3, 4], "frames": "4", "algorithm": "Optimal"}"#);
    assert_eq!(response["faults"], json!(4));
    assert_eq!(response["hits"], json!(0));
}

/// Missing frames and algorithm fall back to 3 and FIFO.
#[test]
fn test_defaults_applied() {
    let body = r#"{"reference": [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]}"#;
    let response = respond(body);
    assert_eq!(response["faults"], json!(9));
}

/// Every failure renders as a single `error` field.
#[test]
fn test_error_bodies() {
    let cases = [
        (r#"{"reference": []}"#, "Invalid reference string", true),
        (r#"{"frames": 3}"#, "Invalid reference string", true),
        (r#"{"reference": [1], "algorithm": "LRU"}"#, "Unknown algorithm: LRU", true),
        (r#"{"reference": [1], "frames": 0}"#, "Invalid frame count: 0", true),
    ];

    for (body, message, input_error) in cases {
        let outcome = simulate_json(body);
        let err = outcome.as_ref().unwrap_err();
        assert_eq!(err.is_input_error(), input_error, "{}", body);

        let rendered: ErrorBody = serde_json::from_str(&render(&outcome).unwrap()).unwrap();
        assert_eq!(rendered, ErrorBody { error: message.to_string() });
    }
}

/// Undecodable pages are an internal failure, not an input error.
#[test]
fn test_non_comparable_page_is_internal_failure() {
    let outcome = simulate_json(r#"{"reference": [1, [2]], "frames": 2}"#);
    let err = outcome.as_ref().unwrap_err();

    assert!(matches!(err, Error::Malformed(_)));
    assert!(!err.is_input_error());

    let response: Value = serde_json::from_str(&render(&outcome).unwrap()).unwrap();
    assert!(response["error"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(response.get("steps").is_none());
}

/// Reference strings typed by a user feed straight into a run.
#[test]
fn test_reference_string_to_summary() {
    let reference = parse_reference_string("7,0,1,2,0,3,0,4,2,3,0,3").unwrap();
    let summary = run_simulation(&reference, 3, "Optimal").unwrap();

    assert_eq!(reference.len(), 12);
    assert_eq!(summary.hits + summary.faults, 12);
    assert_eq!(summary.faults, 7);
}

/// Independent runs on different threads do not interfere.
#[test]
fn test_concurrent_runs() {
    let reference = Arc::new(pages([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]));
    let expected = run_simulation(&reference, 3, "AI-Based").unwrap();

    let mut handles = vec![];
    for _ in 0..8 {
        let reference = Arc::clone(&reference);
        handles.push(thread::spawn(move || {
            run_simulation(&reference, 3, "AI-Based").unwrap()
        }));
    }

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
