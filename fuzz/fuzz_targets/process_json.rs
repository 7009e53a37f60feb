//! Fuzz target for decoding and processing raw filter specs.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_process_json
//! ```

#![no_main]

use aql_filter_query::FilterProcessor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Errors are fine, panics are not.
    let processor = FilterProcessor::new();
    if let Ok(filter) = processor.process_json(input) {
        // Sort fragments only ever hold validated identifiers.
        assert!(!filter.sort.contains('\''));
        let _ = filter.to_clauses();
    }
});
