use {
    crate::config::Config,
    std::{io::IsTerminal, panic::PanicHookInfo, sync::Once},
    time::macros::format_description,
    tracing::Level,
    tracing_subscriber::{
        EnvFilter,
        Layer,
        fmt::{time::UtcTime, writer::MakeWriterExt as _},
        prelude::*,
        util::SubscriberInitExt,
    },
};

/// Initializes tracing setup that is shared between the binaries.
/// `env_filter` has similar syntax to env_logger. It is documented at
/// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
pub fn initialize(config: &Config) {
    set_tracing_subscriber(config);
    std::panic::set_hook(Box::new(tracing_panic_hook));
}

/// Like [`initialize`], but can be called multiple times in a row. Later calls
/// are ignored.
///
/// Useful for tests.
pub fn initialize_reentrant(config: &Config) {
    // The tracing subscriber below is global object so initializing it again in the
    // same process by a different thread would fail.
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        set_tracing_subscriber(config);
        std::panic::set_hook(Box::new(tracing_panic_hook));
    });
}

fn set_tracing_subscriber(config: &Config) {
    // `with_max_level` keeps the given level and everything more severe.
    let stderr_threshold = config.stderr_threshold.into_level().unwrap_or(Level::ERROR);
    let writer = std::io::stderr
        .with_max_level(stderr_threshold)
        .or_else(std::io::stdout);
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let env_filter = EnvFilter::new(&config.env_filter);

    // The json and the plain formatter are different types, so each branch
    // builds its own registry.
    if config.use_json_format {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_timer(timer)
                    .with_filter(env_filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_timer(timer)
                    .with_ansi(std::io::stdout().is_terminal())
                    .with_filter(env_filter),
            )
            .init();
    }
    tracing::debug!(filter = %config.env_filter, "initialized tracing");
}

/// Panic hook that prints roughly the same message as the default panic hook
/// but uses tracing:error instead of stderr.
///
/// Useful when we want panic messages to have the proper log format for Kibana.
fn tracing_panic_hook(panic: &PanicHookInfo) {
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");
    let backtrace = std::backtrace::Backtrace::force_capture();
    tracing::error!("thread '{name}' {panic}\nstack backtrace:\n{backtrace}");
}
