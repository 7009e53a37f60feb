//! Fuzz target for sort entry parsing.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_sort_entries
//! ```

#![no_main]

use aql_filter_query::format_sort;
use aql_filter_query::identifier::is_valid_identifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|entries: Vec<String>| {
    if let Ok(sort) = format_sort(entries.as_slice(), "var") {
        for part in sort.split(", ").filter(|p| !p.is_empty()) {
            let (field, direction) = part
                .rsplit_once(' ')
                .expect("every sort part has a direction");
            assert!(matches!(direction, "ASC" | "DESC"));
            let field = field.strip_prefix("var.").expect("field is prefixed");
            assert!(is_valid_identifier(field));
        }
    }
});
