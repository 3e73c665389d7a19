//! Policy-gated call-site diagnostics.
//!
//! Both policy axes are process-wide compile-time constants selected by
//! cargo features; nothing transitions at runtime. Disabled source tracking
//! means the location is never captured, not merely never printed. Traces go
//! to stderr unserialized; interleaving under concurrency is accepted.

use std::panic::Location;

#[cfg(all(feature = "log-always", feature = "log-never"))]
compile_error!("features `log-always` and `log-never` are mutually exclusive");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingPolicy {
    Never,
    OnError,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTrackingPolicy {
    Never,
    Always,
}

/// When wrapper calls are traced. Default: on failure only.
pub const LOGGING: LoggingPolicy = if cfg!(feature = "log-never") {
    LoggingPolicy::Never
} else if cfg!(feature = "log-always") {
    LoggingPolicy::Always
} else {
    LoggingPolicy::OnError
};

/// Whether traces carry the file:line of the call expression.
pub const SOURCE_TRACKING: SourceTrackingPolicy = if cfg!(feature = "no-source-tracking") {
    SourceTrackingPolicy::Never
} else {
    SourceTrackingPolicy::Always
};

/// One wrapper invocation: the native function's name and, when tracking is
/// on, where it was called from. The name comes from the function identity
/// at wrapper-synthesis time, never from user text.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    api: &'static str,
    location: Option<&'static Location<'static>>,
}

impl CallSite {
    #[track_caller]
    pub fn here(api: &'static str) -> Self {
        // Const-folds to `None` under `no-source-tracking`; the location is
        // not computed at all in that configuration.
        let location = match SOURCE_TRACKING {
            SourceTrackingPolicy::Always => Some(Location::caller()),
            SourceTrackingPolicy::Never => None,
        };

        CallSite { api, location }
    }

    pub fn api(&self) -> &'static str {
        self.api
    }
}

/// Writes one trace line. Non-fatal; never affects the call's Result.
pub(crate) fn emit_trace(site: &CallSite) {
    let line = match site.location {
        Some(loc) => format!(
            "*** called {:<30} at {}:{}",
            site.api,
            loc.file(),
            loc.line()
        ),
        None => format!("*** called {}", site.api),
    };

    #[cfg(test)]
    capture::record(&line);

    eprintln!("{line}");
}
