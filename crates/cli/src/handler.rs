//! User-facing error reporting via [`eyre`].

use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt};

/// An error report handler that renders the error chain on a single line.
pub struct Handler {
    debug_handler: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    /// Create a new instance of the `Handler`.
    pub fn new() -> Self {
        Self { debug_handler: None }
    }

    /// Override the debug handler with a custom one.
    pub fn debug_handler(mut self, debug_handler: Option<Box<dyn EyreHandler>>) -> Self {
        self.debug_handler = debug_handler;
        self
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Display;
        abikit_common::errors::dedup_chain(error).into_iter().format("; ").fmt(f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(debug_handler) = &self.debug_handler {
            return debug_handler.debug(error, f);
        }

        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }
        let errors = abikit_common::errors::dedup_chain(error);
        let (error, sources) = errors.split_first().unwrap();
        write!(f, "{error}")?;

        if !sources.is_empty() {
            write!(f, "\n\nContext:")?;
            for source in sources {
                write!(f, "\n- {source}")?;
            }
        }

        Ok(())
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(debug_handler) = &mut self.debug_handler {
            debug_handler.track_caller(location);
        }
    }
}

/// Installs the abikit [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// A terse user-centric handler is installed unless `ABIKIT_DEBUG` is set in
/// the environment, in which case a more verbose debug-centric handler takes
/// over. Panics always go through the debug-centric hook.
pub fn install() {
    if std::env::var_os("RUST_BACKTRACE").is_none() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let (panic_hook, debug_hook) =
        color_eyre::config::HookBuilder::default().panic_section("This is a bug.").into_hooks();
    panic_hook.install();
    let debug_hook = debug_hook.into_eyre_hook();
    let debug = std::env::var_os("ABIKIT_DEBUG").is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler::new().debug_handler(debug.then(|| debug_hook(e))))
    })) {
        debug!("failed to install eyre error hook: {err}");
    }
}
