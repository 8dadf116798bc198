//! recawk - an awk-style record processing engine
//!
//! Input is read line by line. Each line becomes the current record, is split
//! into fields, and is handed to a caller-supplied [`Program`] whose hooks
//! mirror the shape of an awk script: `setup` (BEGIN), `filter` (pattern),
//! `action` (the braces) and `teardown` (END).
//!
//! # Example
//!
//! ```
//! use recawk::{Context, Engine, HookError, Program};
//!
//! /// Sum the second column and print the total at the end
//! struct SumColumn;
//!
//! impl Program for SumColumn {
//!     fn setup(&mut self, ctx: &mut Context) -> Result<(), HookError> {
//!         ctx.set_var("sum", 0);
//!         Ok(())
//!     }
//!
//!     fn action(&mut self, ctx: &mut Context) -> Option<String> {
//!         let n: i64 = ctx.field(2).parse().unwrap_or(0);
//!         let sum = ctx.var("sum").and_then(|v| v.as_integer()).unwrap_or(0);
//!         ctx.set_var("sum", sum + n);
//!         None
//!     }
//!
//!     fn teardown(&mut self, ctx: &mut Context) -> Result<String, HookError> {
//!         Ok(format!("sum: {}", ctx.var("sum").map(|v| v.to_string()).unwrap_or_default()))
//!     }
//! }
//!
//! let mut engine = Engine::new(SumColumn);
//! let mut output = Vec::new();
//! engine.run(&b"apples 3\npears 4\n"[..], &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "sum: 7\n");
//! ```
//!
//! # Field Separator Example
//!
//! ```
//! use recawk::{Engine, Hooks};
//!
//! let program = Hooks::new().on_action(|ctx| Some(ctx.format([ctx.field(1), ctx.field(3)])));
//! let mut engine = Engine::new(program);
//! engine.set_fs(",");
//! engine.set_ofs(" | ");
//!
//! let mut output = Vec::new();
//! engine.run(&b"a,b,c\nd,,f\n"[..], &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "a | c\nd | f\n");
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod program;
pub mod split;
pub mod value;

pub use config::{Config, parse_assignment};
pub use context::Context;
pub use engine::{Engine, RunSummary};
pub use error::{Error, HookError, Phase, Result};
pub use program::{Hooks, PassThrough, Program};
pub use split::FieldSplitter;
pub use value::Value;
