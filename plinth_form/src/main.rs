//! # Plinth Form Adapter
//!
//! Form-based request/response front end: reads a JSON `FootingInput`
//! document from stdin (or from a file given as the first argument), runs
//! the shared calculation engine, and writes a JSON response envelope to
//! stdout. The exit code mirrors the envelope: 0 on success, 1 on any
//! validation or calculation error.
//!
//! ## Example
//!
//! ```text
//! $ plinth_form < request.json
//! {"ok":true,"result":{...}}
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use serde::Serialize;

use plinth_core::{calculate, CalcError, FootingInput, FootingResult};

/// Response envelope written to stdout
#[derive(Serialize)]
struct Response {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<FootingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CalcError>,
}

fn read_request() -> Result<String, CalcError> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).map_err(|e| {
            CalcError::serialization_error(format!("Could not read '{}': {}", path, e))
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CalcError::serialization_error(format!("Could not read stdin: {}", e)))?;
            Ok(buffer)
        }
    }
}

fn run() -> Result<FootingResult, CalcError> {
    let request = read_request()?;
    let input: FootingInput = serde_json::from_str(&request)
        .map_err(|e| CalcError::serialization_error(e.to_string()))?;
    calculate(&input)
}

fn main() -> ExitCode {
    let (response, code) = match run() {
        Ok(result) => (
            Response {
                ok: true,
                result: Some(result),
                error: None,
            },
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            Response {
                ok: false,
                result: None,
                error: Some(e),
            },
            ExitCode::FAILURE,
        ),
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Could not serialize response: {}", e);
            return ExitCode::FAILURE;
        }
    }
    code
}
