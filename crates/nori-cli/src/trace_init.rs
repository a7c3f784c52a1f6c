use std::sync::Once;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose {
            "nori_core=debug,nori_cli=debug"
        } else {
            "nori_core=info"
        };
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(if verbose { FmtSpan::CLOSE } else { FmtSpan::NONE })
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
            )
            .init();
    });
}
