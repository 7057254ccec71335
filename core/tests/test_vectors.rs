//! Verify request building and body decoding against JSON vectors stored in
//! `test-vectors/`.
//!
//! Decode vectors run through a transport double that hands back the
//! vector's bytes, so only the client's own behavior is under test.

use std::cell::Cell;
use std::rc::Rc;

use grid_http::{
    HttpClient, HttpError, HttpParameters, Request, Transport, TransportError,
};

struct CannedRequest {
    bytes: Vec<u8>,
    releases: Rc<Cell<u32>>,
}

impl Request for CannedRequest {
    fn target_url(&self) -> &str {
        "http://localhost:4444/"
    }

    fn response_body(&mut self) -> Result<Vec<u8>, TransportError> {
        Ok(self.bytes.clone())
    }

    fn release_connection(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

struct CannedTransport;

impl Transport for CannedTransport {
    type Request = CannedRequest;

    fn execute(&self, _request: &mut CannedRequest) -> Result<u16, TransportError> {
        Ok(200)
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

#[test]
fn decode_test_vectors() {
    let raw = include_str!("../../test-vectors/decode.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let client = HttpClient::with_transport(CannedTransport);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let bytes: Vec<u8> = serde_json::from_value(case["bytes"].clone()).unwrap();
        let releases = Rc::new(Cell::new(0));

        let result = client.request(CannedRequest {
            bytes,
            releases: releases.clone(),
        });
        assert_eq!(releases.get(), 1, "{name}: release count");

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Decode" => assert!(matches!(err, HttpError::Decode(_)), "{name}: expected Decode"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let response = result.unwrap();
            assert_eq!(
                response.body(),
                case["expected_body"].as_str().unwrap(),
                "{name}: body"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Build POST
// ---------------------------------------------------------------------------

#[test]
fn build_post_test_vectors() {
    let raw = include_str!("../../test-vectors/build_post.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let client = HttpClient::new();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let url = case["url"].as_str().unwrap();
        let pairs: Vec<(String, String)> = serde_json::from_value(case["params"].clone()).unwrap();
        let params: HttpParameters = pairs.iter().cloned().collect();

        let req = client.build_post_method(url, params);
        assert_eq!(req.target_url(), url, "{name}: url");
        for (key, _) in &pairs {
            // Later puts win, so look up the final value for each key.
            let last = pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
            assert_eq!(req.parameter(key), last, "{name}: param {key}");
        }
        assert_eq!(
            req.params.to_form_urlencoded(),
            case["expected_form"].as_str().unwrap(),
            "{name}: form body"
        );
    }
}
