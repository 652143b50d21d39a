//! goheader - Main Entry Point
//!
//! ```text
//! foo.h ─► LineSource ─► classify ─► translate/* ─► OutputBuffer
//!                                                        │
//!        h-foo_<system>.go / stdout ◄─ Formatter ◄───────┘
//! ```
//!
//! Usage: `goheader -s <system> -p <package> [-w] [-d] [paths...]`
//!
//! Exit status is 0 when every header was translated, 2 otherwise.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use goheader::{run_batch, FileOutput, FirstEnumerator, FormatterKind, ProcessOptions, System, TranslateOptions};

#[derive(Debug, Parser)]
#[command(name = "goheader", version, about = "Translate C headers into Go declarations")]
struct Cli {
    /// The operating system
    #[arg(short = 's', long, value_enum, required_unless_present = "list")]
    system: Option<System>,

    /// The name of the Go package
    #[arg(short = 'p', long, required_unless_present = "list")]
    package: Option<String>,

    /// List the valid systems
    #[arg(short = 'l', long)]
    list: bool,

    /// Write each translation to h-<base>_<system>.go instead of standard output
    #[arg(short = 'w', long)]
    write: bool,

    /// Debug mode: emit the raw translation without formatting
    #[arg(short = 'd', long)]
    debug: bool,

    /// Directory for written files
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatterKind::Gofmt)]
    formatter: FormatterKind,

    /// Value of an enum's first enumerator when it has none
    #[arg(long = "enum-start", value_enum, default_value_t = FirstEnumerator::Zero)]
    enum_start: FirstEnumerator,

    /// Header files or directories to translate
    #[arg(required_unless_present = "list")]
    paths: Vec<PathBuf>,
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.list {
        println!("  = Systems\n");
        for system in System::ALL {
            println!("  {}", system);
        }
        return;
    }

    let (Some(system), Some(package)) = (cli.system, cli.package) else {
        eprintln!("goheader: -s <system> and -p <package> are required");
        exit(2);
    };

    let command_line = env::args().collect::<Vec<_>>().join(" ");
    let translate = TranslateOptions::new(package)
        .with_command_line(command_line)
        .with_first_enumerator(cli.enum_start);
    let options = ProcessOptions {
        translate,
        system,
        write: cli.write,
        out_dir: cli.out_dir,
        debug: cli.debug,
    };

    let formatter = cli.formatter.build();
    let report = run_batch(&cli.paths, &options, &*formatter);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for processed in report.succeeded() {
        if let FileOutput::Text(text) = &processed.output {
            if let Err(e) = stdout.write_all(text.as_bytes()) {
                eprintln!("goheader: cannot write to standard output: {}", e);
                exit(2);
            }
        }
    }

    exit(report.exit_code());
}
