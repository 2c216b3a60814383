//! Command-line front end for the ALU golden model.
//!
//! This binary is a thin shell over `alu8_core`. It provides:
//! 1. **Exec:** Run one operation and print the result and flags.
//! 2. **List:** Show the 19 operations grouped by category.
//! 3. **Run:** Evaluate a directory of vector files, print per-file and per-operation
//!    summaries, export results, and exit non-zero unless every vector passed.
//! 4. **Validate / Schema:** Check vector files against the schema, or print it.
//! 5. **Generate:** Write boundary or exhaustive vectors computed by the model.

mod format;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use alu8_core::common::DEFAULT_WIDTH;
use alu8_core::export;
use alu8_core::generate;
use alu8_core::harness::TestResult;
use alu8_core::oracle::check_operand;
use alu8_core::vector::loader;
use alu8_core::vector::schema::{self, TEST_VECTOR_SCHEMA};
use alu8_core::vector::VectorDocument;
use alu8_core::{Alu, HarnessConfig, Operation, VectorRunner, Width};
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::format::{InputRadix, ValueFormat};

#[derive(Parser, Debug)]
#[command(
    name = "alu",
    author,
    version,
    about = "8-bit ALU golden model and test-vector harness",
    long_about = "Execute ALU operations on the golden model, or validate hardware test vectors against it.\n\nExamples:\n  alu exec ADD 42 23\n  alu exec --hex XOR 0xAA 0x55\n  alu run --vectors-dir test/vectors\n  alu generate --op ADD --exhaustive -o test/vectors/add_exhaustive.json"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Errors only; `exec` prints just the result word.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute one operation on the golden model.
    Exec(ExecArgs),

    /// List the available operations.
    List,

    /// Run every vector file in a directory against the golden model.
    Run(RunArgs),

    /// Check vector files against the schema without evaluating them.
    ///
    /// Identifiers that name no operation and operands wider than the datapath
    /// are reported as warnings; the runner fails those vectors individually.
    Validate {
        /// Vector files to check (defaults to every file in --vectors-dir).
        paths: Vec<PathBuf>,

        /// Directory scanned when no paths are given.
        #[arg(long, default_value = "test/vectors")]
        vectors_dir: PathBuf,

        /// Width for vectors that omit `width`.
        #[arg(long, value_parser = parse_width, default_value = "8")]
        width: Width,
    },

    /// Generate vectors whose expectations come from the golden model.
    Generate {
        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sweep every operand pair instead of the boundary set.
        #[arg(long)]
        exhaustive: bool,

        /// Restrict to these operations (name or opcode; repeatable).
        #[arg(long = "op", value_parser = parse_operation)]
        ops: Vec<Operation>,

        /// Datapath width.
        #[arg(long, value_parser = parse_width, default_value = "8")]
        width: Width,
    },

    /// Print the published test-vector JSON Schema.
    Schema,
}

#[derive(Args, Debug)]
struct ExecArgs {
    /// Operation name, alias, or 5-bit opcode (e.g. ADD, inc, 00010).
    #[arg(value_parser = parse_operation)]
    operation: Operation,

    /// Operand A.
    a: String,

    /// Operand B (ignored by single-operand operations).
    #[arg(default_value = "0")]
    b: String,

    /// Operands are hexadecimal.
    #[arg(long, conflicts_with = "binary")]
    hex: bool,

    /// Operands are binary.
    #[arg(long)]
    binary: bool,

    /// Output format for values.
    #[arg(long, value_enum, default_value_t = ValueFormat::Decimal)]
    format: ValueFormat,

    /// Datapath width.
    #[arg(long, value_parser = parse_width, default_value = "8")]
    width: Width,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Harness configuration file (JSON). Flags override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing JSON vector files.
    #[arg(long)]
    vectors_dir: Option<PathBuf>,

    /// Directory for the JSON/CSV result files.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Descend into sub-directories.
    #[arg(long)]
    recursive: bool,

    /// Skip schema validation.
    #[arg(long)]
    no_schema: bool,

    /// Do not write result files.
    #[arg(long)]
    no_export: bool,

    /// Evaluate vectors in file order instead of opcode order.
    #[arg(long)]
    file_order: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match dispatch(cli.command, cli.quiet) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over the -v/-q flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let fallback = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch(command: Commands, quiet: bool) -> Result<ExitCode> {
    match command {
        Commands::Exec(args) => cmd_exec(&args, quiet),
        Commands::List => {
            println!("{}", format::format_operation_list());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run(args) => cmd_run(&args),
        Commands::Validate {
            paths,
            vectors_dir,
            width,
        } => cmd_validate(paths, &vectors_dir, width),
        Commands::Generate {
            output,
            exhaustive,
            ops,
            width,
        } => cmd_generate(output.as_deref(), exhaustive, &ops, width),
        Commands::Schema => {
            print!("{TEST_VECTOR_SCHEMA}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_exec(args: &ExecArgs, quiet: bool) -> Result<ExitCode> {
    let radix = if args.hex {
        InputRadix::Hex
    } else if args.binary {
        InputRadix::Binary
    } else {
        InputRadix::Auto
    };
    let a = check_operand("A", format::parse_operand(&args.a, radix)?, args.width)?;
    let b = check_operand("B", format::parse_operand(&args.b, radix)?, args.width)?;

    let op = args.operation;
    let out = Alu::new(args.width).execute(op, a, b);

    if args.json {
        let value = serde_json::json!({
            "operation": op.name(),
            "opcode": op.opcode_str(),
            "width": args.width.bits(),
            "A": a,
            "B": b,
            "result": out.result,
            "flags": out.flags,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if quiet {
        println!("{}", out.result);
    } else {
        println!(
            "{}",
            format::format_execution(op, a, b, &out, args.width, args.format)
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_run(args: &RunArgs) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::from_file(path)
            .with_context(|| format!("loading harness config {}", path.display()))?,
        None => HarnessConfig::default(),
    };
    if let Some(dir) = &args.vectors_dir {
        config.vectors_dir.clone_from(dir);
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir.clone_from(dir);
    }
    config.recursive |= args.recursive;
    config.validate_schema &= !args.no_schema;
    config.sort_by_opcode &= !args.file_order;

    info!(?config, "harness configuration");
    let mut runner = VectorRunner::golden(&config);
    let report = runner.run_directory(&config.vectors_dir, config.recursive)?;

    if report.files.is_empty() {
        println!("No JSON vector files found in {}", config.vectors_dir.display());
        return Ok(ExitCode::FAILURE);
    }

    for file in &report.files {
        println!("{file}");
    }
    report.summary().print();
    println!(
        "Summary: {} passed, {} failed, {} file(s) skipped",
        report.passed(),
        report.failed(),
        report.skipped_files()
    );

    if !args.no_export && config.exports() {
        let results: Vec<&TestResult> = report.results().collect();
        let written = export::write_results(&results, &config)?;
        let names: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        println!("Wrote results to {}", names.join(" and "));
    }

    Ok(if report.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_validate(paths: Vec<PathBuf>, vectors_dir: &Path, width: Width) -> Result<ExitCode> {
    let paths = if paths.is_empty() {
        loader::discover_vector_files(vectors_dir, false)?
    } else {
        paths
    };
    if paths.is_empty() {
        println!("No JSON vector files found in {}", vectors_dir.display());
        return Ok(ExitCode::FAILURE);
    }

    let mut invalid = 0_usize;
    let mut warned = 0_usize;
    for path in &paths {
        let document = match loader::read_document(path) {
            Ok(document) => document,
            Err(err) => {
                invalid += 1;
                println!("FAIL {err}");
                continue;
            }
        };
        let violations = schema::validate_document(&document);
        if !violations.is_empty() {
            invalid += 1;
            println!("FAIL {} ({} violations)", path.display(), violations.len());
            for violation in &violations {
                println!("       {violation}");
            }
            continue;
        }
        let warnings = schema::semantic_warnings(&document, width);
        match loader::parse_vectors(document, path) {
            Ok(vectors) => println!("OK   {} ({} vectors)", path.display(), vectors.len()),
            Err(err) => {
                invalid += 1;
                println!("FAIL {err}");
                continue;
            }
        }
        if !warnings.is_empty() {
            warned += 1;
        }
        for warning in &warnings {
            println!("WARN   {warning}");
        }
    }
    println!(
        "Validated {} file(s), {invalid} invalid, {warned} with warnings",
        paths.len()
    );
    Ok(if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_generate(output: Option<&Path>, exhaustive: bool, ops: &[Operation], width: Width) -> Result<ExitCode> {
    let document = VectorDocument {
        tests: generate::generate(ops, width, exhaustive)?,
    };
    match output {
        Some(path) => {
            generate::write_document(&document, path)?;
            println!("Wrote {} vectors to {}", document.tests.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&document)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_operation(raw: &str) -> Result<Operation, String> {
    raw.parse::<Operation>().map_err(|err| err.to_string())
}

fn parse_width(raw: &str) -> Result<Width, String> {
    let bits: u32 = raw
        .parse()
        .map_err(|_| format!("width must be an integer (default {DEFAULT_WIDTH})"))?;
    Width::new(bits).map_err(|err| err.to_string())
}
