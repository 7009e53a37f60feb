//! Fuzz target for the processor config parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use aql_filter_query::{FilterProcessor, ProcessorConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        if let Ok(config) = toml::from_str::<ProcessorConfig>(input) {
            let _ = FilterProcessor::from_config(config);
        }
    }
});
