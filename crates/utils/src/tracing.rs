// Copyright 2024 Arrange Developers

use tracing_subscriber::{
	filter::LevelFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
	EnvFilter,
};

use crate::env::{boolean_env_flag_set, TRACE_SPANS_FLAG};

/// Installs the global subscriber: an `EnvFilter` driven by `RUST_LOG` (defaulting to `info`)
/// and a fmt layer on stderr.
///
/// Calling this more than once is harmless; only the first call installs a subscriber.
pub fn init_tracing() {
	let env_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();

	let span_events = if boolean_env_flag_set(TRACE_SPANS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(env_filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_span_events(span_events),
		)
		.try_init();
}
