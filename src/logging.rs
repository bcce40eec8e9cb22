// Logging setup shared by both binaries
//
// RUST_LOG wins when set; otherwise this crate logs at info (debug with
// --verbose) and tower_http request traces at info.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_filter(verbose: bool) -> String {
    if verbose {
        "employee_service=debug,employee_server=debug,tower_http=debug,info".to_string()
    } else {
        "employee_service=info,employee_server=info,tower_http=info,warn".to_string()
    }
}

pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // try_init: tests and embedders may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        for verbose in [false, true] {
            let filter = default_filter(verbose);
            assert!(EnvFilter::try_new(&filter).is_ok(), "bad filter: {}", filter);
        }
        assert!(default_filter(true).contains("employee_service=debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false);
        init_logger(true);
    }
}
