use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Install a `tracing_subscriber` fmt subscriber writing to stderr.
///
/// The library logs through `log`; the subscriber's `tracing-log` bridge picks
/// those records up. `RUST_LOG` directives are honoured on top of the level
/// given by `-v`. Calling it again is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `-v` count to level: warnings by default, then info, debug, trace.
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::WARN)]
    #[case(1, LevelFilter::INFO)]
    #[case(2, LevelFilter::DEBUG)]
    #[case(7, LevelFilter::TRACE)]
    fn verbosity(#[case] count: u8, #[case] level: LevelFilter) {
        assert_eq!(level_from_verbosity(count), level);
    }

    #[test]
    fn init_twice() {
        init(1);
        init(3);
        log::info!("still logging");
    }
}
