//! The hook set a caller supplies to drive a run.
//!
//! Every hook has a default, so a program only overrides what it needs:
//!
//! ```
//! use recawk::{Context, Engine, Program};
//!
//! struct FirstField;
//!
//! impl Program for FirstField {
//!     fn action(&mut self, ctx: &mut Context) -> Option<String> {
//!         Some(ctx.field(1).to_string())
//!     }
//! }
//!
//! let mut engine = Engine::new(FirstField);
//! let mut output = Vec::new();
//! engine.run(&b"one two\nthree four\n"[..], &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "one\nthree\n");
//! ```

use crate::context::Context;
use crate::error::HookError;

/// An awk-style program: one-time setup, a per-record filter and action, and
/// one-time teardown.
pub trait Program {
    /// Called once before the first record. An error aborts the run before
    /// any input is read.
    fn setup(&mut self, _ctx: &mut Context) -> Result<(), HookError> {
        Ok(())
    }

    /// Called for every record after it has been split. Returning `false`
    /// skips `action` for that record.
    fn filter(&mut self, _ctx: &mut Context) -> bool {
        true
    }

    /// Called for every record that passed `filter`. `Some(line)` writes one
    /// output line; the engine appends the newline.
    fn action(&mut self, ctx: &mut Context) -> Option<String> {
        Some(ctx.field(0).to_string())
    }

    /// Called once after the input is exhausted. Non-empty output is written
    /// as one final line.
    fn teardown(&mut self, _ctx: &mut Context) -> Result<String, HookError> {
        Ok(String::new())
    }
}

impl<P: Program + ?Sized> Program for &mut P {
    fn setup(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        (**self).setup(ctx)
    }

    fn filter(&mut self, ctx: &mut Context) -> bool {
        (**self).filter(ctx)
    }

    fn action(&mut self, ctx: &mut Context) -> Option<String> {
        (**self).action(ctx)
    }

    fn teardown(&mut self, ctx: &mut Context) -> Result<String, HookError> {
        (**self).teardown(ctx)
    }
}

impl<P: Program + ?Sized> Program for Box<P> {
    fn setup(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        (**self).setup(ctx)
    }

    fn filter(&mut self, ctx: &mut Context) -> bool {
        (**self).filter(ctx)
    }

    fn action(&mut self, ctx: &mut Context) -> Option<String> {
        (**self).action(ctx)
    }

    fn teardown(&mut self, ctx: &mut Context) -> Result<String, HookError> {
        (**self).teardown(ctx)
    }
}

/// Program that uses every default: prints each record unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Program for PassThrough {}

type SetupFn<'a> = Box<dyn FnMut(&mut Context) -> Result<(), HookError> + 'a>;
type FilterFn<'a> = Box<dyn FnMut(&mut Context) -> bool + 'a>;
type ActionFn<'a> = Box<dyn FnMut(&mut Context) -> Option<String> + 'a>;
type TeardownFn<'a> = Box<dyn FnMut(&mut Context) -> Result<String, HookError> + 'a>;

/// Program assembled from closures. Hooks left unset fall back to the
/// `Program` defaults.
///
/// ```
/// use recawk::{Engine, Hooks};
///
/// let program = Hooks::new()
///     .on_filter(|ctx| ctx.nf() > 1)
///     .on_action(|ctx| Some(ctx.field(2).to_string()));
///
/// let mut output = Vec::new();
/// Engine::new(program).run(&b"a b\nsolo\nc d\n"[..], &mut output).unwrap();
/// assert_eq!(output, b"b\nd\n");
/// ```
#[derive(Default)]
pub struct Hooks<'a> {
    setup: Option<SetupFn<'a>>,
    filter: Option<FilterFn<'a>>,
    action: Option<ActionFn<'a>>,
    teardown: Option<TeardownFn<'a>>,
}

impl<'a> Hooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_setup<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Context) -> Result<(), HookError> + 'a,
    {
        self.setup = Some(Box::new(f));
        self
    }

    pub fn on_filter<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Context) -> bool + 'a,
    {
        self.filter = Some(Box::new(f));
        self
    }

    pub fn on_action<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Context) -> Option<String> + 'a,
    {
        self.action = Some(Box::new(f));
        self
    }

    pub fn on_teardown<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Context) -> Result<String, HookError> + 'a,
    {
        self.teardown = Some(Box::new(f));
        self
    }
}

impl Program for Hooks<'_> {
    fn setup(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        match &mut self.setup {
            Some(f) => f(ctx),
            None => Ok(()),
        }
    }

    fn filter(&mut self, ctx: &mut Context) -> bool {
        match &mut self.filter {
            Some(f) => f(ctx),
            None => true,
        }
    }

    fn action(&mut self, ctx: &mut Context) -> Option<String> {
        match &mut self.action {
            Some(f) => f(ctx),
            None => Some(ctx.field(0).to_string()),
        }
    }

    fn teardown(&mut self, ctx: &mut Context) -> Result<String, HookError> {
        match &mut self.teardown {
            Some(f) => f(ctx),
            None => Ok(String::new()),
        }
    }
}
