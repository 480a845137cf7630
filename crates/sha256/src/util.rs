//! Lifecycle logging that compiles to nothing without the `log` feature.

macro_rules! trace_event {
  ($($arg:tt)+) => {
    #[cfg(feature = "log")]
    ::log::trace!(target: "sha256", $($arg)+);
  };
}

macro_rules! debug_event {
  ($($arg:tt)+) => {
    #[cfg(feature = "log")]
    ::log::debug!(target: "sha256", $($arg)+);
  };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
