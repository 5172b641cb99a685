//! Logging facilities for the inline toolbar crates.
//!
//! Both crates instrument themselves with the `tracing` crate and never install
//! a subscriber. To see logs, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("inline_toolbar=debug,inline_toolbar_core=trace")
//!     .init();
//! ```

/// Span names used for tracing.
///
/// These match the `name` of the instrumented spans and can be used to filter
/// traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "inline_toolbar::signal";
    /// Deferred tick processing span.
    pub const TICK: &str = "inline_toolbar::tick";
    /// Toolbar position recomputation span.
    pub const RECOMPUTE: &str = "inline_toolbar::recompute";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "inline_toolbar_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "inline_toolbar_core::signal";
    /// Editor store target.
    pub const STORE: &str = "inline_toolbar_core::store";
    /// Deferred task queue target.
    pub const TASK: &str = "inline_toolbar_core::task";
    /// Toolbar controller target.
    pub const TOOLBAR: &str = "inline_toolbar::toolbar";
    /// Placement math target.
    pub const POSITIONING: &str = "inline_toolbar::positioning";
}
