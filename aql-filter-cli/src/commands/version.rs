//! `aqlf version` command - Display version information.

use aql_filter_query::identifier::RESERVED_KEYWORDS;
use aql_filter_query::{DEFAULT_MAX_DEPTH, DEFAULT_VARIABLE};

use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() {
    output::header("aqlf");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();

    output::section("Defaults");
    kv("Variable", DEFAULT_VARIABLE);
    kv("Max depth", &DEFAULT_MAX_DEPTH.to_string());
    kv("Reserved keywords", &RESERVED_KEYWORDS.len().to_string());

    output::newline();
    output::code(r#"echo '{"limit": 10}' | aqlf process"#);
}
