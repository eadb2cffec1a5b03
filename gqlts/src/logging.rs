use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `--verbose` nor `RUST_LOG` is given.
const DEFAULT_FILTER: &str = "gqlts=warn";

/// Filter used with `--verbose`. Matches every `gqlts*` crate.
const VERBOSE_FILTER: &str = "gqlts=debug";

/// Install the stderr log subscriber.
///
/// `--verbose` wins over `RUST_LOG`, which wins over the default filter.
pub(crate) fn init(verbose: bool) {
    let filter = filter_spec(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn filter_spec(verbose: bool, env: Option<String>) -> String {
    match env {
        _ if verbose => VERBOSE_FILTER.to_string(),
        Some(spec) if !spec.trim().is_empty() => spec,
        _ => DEFAULT_FILTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_spec(false, None), "gqlts=warn");
        assert_eq!(filter_spec(false, Some(" ".into())), "gqlts=warn");
        assert_eq!(filter_spec(false, Some("gqlts=trace".into())), "gqlts=trace");
        assert_eq!(filter_spec(true, Some("gqlts=trace".into())), "gqlts=debug");
    }
}
