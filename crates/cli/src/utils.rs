use env_logger::Env;

use crate::defaults;

/// Initialise logging. `RUST_LOG` wins; otherwise `-v` raises the level from
/// the default `info` to `debug`, and `-vv` to `trace`.
pub fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => defaults::LOG_FILTER,
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}
