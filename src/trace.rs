//! Tracing hooks for the pipeline stages.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it
//! they expand to nothing, so stage code can carry spans unconditionally.

/// Opens an info-level span around a pipeline stage (`thin`, `extract`,
/// `match_search`).
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::StageSpan
    };
}

/// Records a stage outcome such as an iteration count or a verdict.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

/// Per-iteration detail, emitted at debug level.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_debug;
pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in for `tracing::Span` when the feature is off.
#[cfg(not(feature = "tracing"))]
pub struct StageSpan;

#[cfg(not(feature = "tracing"))]
impl StageSpan {
    /// Mirrors `Span::entered` so call sites read the same in both builds.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
