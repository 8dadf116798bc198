use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};
use recawk::{Config, Context, Engine, HookError, Program, parse_assignment};

/// Split input records into fields and print selected parts of them.
#[derive(Parser, Debug)]
#[command(name = "recawk", version, about)]
#[command(group(ArgGroup::new("mode").args(["fields", "nf", "nr", "count"])))]
struct Cli {
    /// Input field separator (default: runs of whitespace)
    #[arg(short = 'F', long = "field-separator", value_name = "FS", allow_hyphen_values = true)]
    field_separator: Option<String>,

    /// Output field separator used between printed fields
    #[arg(short = 'O', long = "output-separator", value_name = "OFS", allow_hyphen_values = true)]
    output_separator: Option<String>,

    /// Assign a variable before processing (name=value)
    #[arg(short = 'v', long = "assign", value_name = "NAME=VALUE")]
    assignments: Vec<String>,

    /// Print these 1-based fields, joined by OFS
    #[arg(long, value_name = "LIST", value_delimiter = ',', allow_negative_numbers = true)]
    fields: Option<Vec<isize>>,

    /// Print the number of fields of each record
    #[arg(long)]
    nf: bool,

    /// Print each record prefixed with its record number
    #[arg(long)]
    nr: bool,

    /// Print only the number of selected records
    #[arg(long)]
    count: bool,

    /// Skip records that have no fields
    #[arg(long)]
    skip_empty: bool,

    /// Report record counts on stderr
    #[arg(long)]
    verbose: bool,

    /// Input file (default: stdin; "-" also reads stdin)
    file: Option<PathBuf>,
}

#[derive(Debug)]
enum Mode {
    Records,
    Fields(Vec<isize>),
    FieldCount,
    RecordNumber,
    Count,
}

/// The handful of fixed programs the command line can select
struct CliProgram {
    mode: Mode,
    skip_empty: bool,
    selected: u64,
}

impl Program for CliProgram {
    fn filter(&mut self, ctx: &mut Context) -> bool {
        !self.skip_empty || ctx.nf() > 0
    }

    fn action(&mut self, ctx: &mut Context) -> Option<String> {
        self.selected += 1;
        match &self.mode {
            Mode::Records => Some(ctx.field(0).to_string()),
            Mode::Fields(indices) => Some(ctx.format(indices.iter().map(|&i| ctx.field(i)))),
            Mode::FieldCount => Some(ctx.nf().to_string()),
            Mode::RecordNumber => Some(ctx.format([ctx.nr().to_string().as_str(), ctx.field(0)])),
            Mode::Count => None,
        }
    }

    fn teardown(&mut self, _ctx: &mut Context) -> Result<String, HookError> {
        match self.mode {
            Mode::Count => Ok(self.selected.to_string()),
            _ => Ok(String::new()),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("recawk: {}", e);
        process::exit(2);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::new();
    if let Some(fs) = cli.field_separator {
        config = config.field_separator(fs);
    }
    if let Some(ofs) = cli.output_separator {
        config = config.output_separator(ofs);
    }
    for assignment in &cli.assignments {
        let (name, value) = parse_assignment(assignment)?;
        config = config.variable(name, value);
    }

    let mode = if let Some(fields) = cli.fields {
        Mode::Fields(fields)
    } else if cli.nf {
        Mode::FieldCount
    } else if cli.nr {
        Mode::RecordNumber
    } else if cli.count {
        Mode::Count
    } else {
        Mode::Records
    };

    let program = CliProgram {
        mode,
        skip_empty: cli.skip_empty,
        selected: 0,
    };
    let mut engine = Engine::with_config(program, config);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let summary = match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
            engine.run(BufReader::new(file), &mut output)?
        }
        _ => {
            let stdin = io::stdin();
            engine.run(stdin.lock(), &mut output)?
        }
    };

    if cli.verbose {
        eprintln!(
            "recawk: {} records read, {} lines emitted",
            summary.records, summary.emitted
        );
    }

    Ok(())
}
