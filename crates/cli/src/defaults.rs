//! Shared default values for the command-line front end.
//! Numeric run parameters default through `MutationConfig` / `ReadSimConfig`;
//! these are the CLI-only defaults.

/// Directory receiving the mutated sequence and report
pub const OUTDIR: &str = ".";

/// Default file written by `varspike config`
pub const CONFIG_FILE: &str = "varspike.json";

/// Default output of `varspike compare`
pub const COMPARISON_FILE: &str = "comparison_results.csv";

/// Default output of `varspike confidence`
pub const CONFIDENCE_FILE: &str = "not_confident_calls.csv";

/// Log filter used when `RUST_LOG` is unset and no `-v` is given
pub const LOG_FILTER: &str = "info";
