use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::program::Program;
use crate::value::Value;

/// Counts reported by a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read from the input
    pub records: u64,
    /// Lines written by `action` (teardown output is not counted)
    pub emitted: u64,
}

/// Drives a [`Program`] over newline-delimited input.
///
/// Each call to [`Engine::run`] builds a fresh [`Context`] from the current
/// configuration, so an engine can be reused for several inputs.
pub struct Engine<P> {
    program: P,
    config: Config,
    cancel: Option<Arc<AtomicBool>>,
}

impl<P: Program> Engine<P> {
    pub fn new(program: P) -> Self {
        Self::with_config(program, Config::default())
    }

    pub fn with_config(program: P, config: Config) -> Self {
        Self {
            program,
            config,
            cancel: None,
        }
    }

    /// Set the input field separator (FS)
    pub fn set_fs(&mut self, fs: &str) {
        self.config.field_separator = fs.to_string();
    }

    /// Set the output field separator (OFS)
    pub fn set_ofs(&mut self, ofs: &str) {
        self.config.output_separator = ofs.to_string();
    }

    /// Seed a variable for the next run
    pub fn set_variable(&mut self, name: &str, value: impl Into<Value>) {
        self.config.variables.insert(name.to_string(), value.into());
    }

    /// Install a flag checked between records; once set, the run stops with
    /// [`Error::Cancelled`] before reading the next record.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut P {
        &mut self.program
    }

    pub fn into_program(self) -> P {
        self.program
    }

    /// Run the program over `input`, writing emitted lines to `output`.
    ///
    /// Setup failures, input failures and cancellation end the run without
    /// calling teardown. A failed write of an action's line also ends the run
    /// with [`Error::Output`] and skips teardown. Lines already written stay
    /// written whatever happens afterwards.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<RunSummary> {
        let mut ctx = self.new_context();
        debug!(
            fs = ctx.fs(),
            whitespace = ctx.splitter().is_whitespace(),
            variables = ctx.variables().len(),
            "starting run"
        );

        self.program.setup(&mut ctx).map_err(Error::Setup)?;
        debug!("setup complete");

        let mut summary = RunSummary::default();
        let mut line = String::new();

        loop {
            if self.is_cancelled() {
                warn!(record = ctx.nr, "run cancelled");
                return Err(Error::Cancelled { record: ctx.nr });
            }

            line.clear();
            let bytes_read = input.read_line(&mut line).map_err(Error::Input)?;
            if bytes_read == 0 {
                break; // EOF
            }

            // Remove record separator; a final unterminated line may still
            // carry a carriage return
            if line.ends_with('\n') {
                line.pop();
            }
            if line.ends_with('\r') {
                line.pop();
            }

            ctx.nr += 1;
            ctx.set_record(&line);

            let selected = self.program.filter(&mut ctx);
            trace!(nr = ctx.nr, nf = ctx.nf, selected, "record");
            if !selected {
                continue;
            }

            if let Some(out) = self.program.action(&mut ctx) {
                writeln!(output, "{}", out).map_err(Error::Output)?;
                summary.emitted += 1;
            }
        }

        summary.records = ctx.nr;
        debug!(records = summary.records, "end of input");

        let final_output = self.program.teardown(&mut ctx).map_err(Error::Teardown)?;
        if !final_output.is_empty() {
            writeln!(output, "{}", final_output).map_err(Error::Output)?;
        }
        output.flush().map_err(Error::Output)?;

        debug!(records = summary.records, emitted = summary.emitted, "run complete");
        Ok(summary)
    }

    fn new_context(&self) -> Context {
        let mut ctx = Context::new(self.config.effective_fs(), self.config.effective_ofs());
        for (name, value) in &self.config.variables {
            ctx.set_var(name.as_str(), value.clone());
        }
        ctx
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
