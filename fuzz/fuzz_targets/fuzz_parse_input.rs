//! Fuzz target for the input classifier entry point
//!
//! This target feeds arbitrary byte strings to the classifier to find crashes
//! or panics.

#![no_main]

use ferro_input::{InputFormat, InputProcessor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Don't fuzz extremely long inputs - diminishing returns
        if input.len() > 1000 {
            return;
        }

        let processor = InputProcessor::new();
        if let Some(record) = processor.parse_one(input) {
            assert_eq!(record.input_str(), input);
            assert_eq!(record.format().input_type(), record.input_type());
        }

        // Every grammar must accept any line without panicking
        for format in InputFormat::all() {
            let _ = processor.parse_as(*format, input);
        }
    }
});
