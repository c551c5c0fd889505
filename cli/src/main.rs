//! stackrdf CLI: converts forum dumps to Turtle from the command line

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use stackrdf::{
    check_turtle, read_records, ConversionReport, Converter, ConverterConfig, IoSink,
    SourceFormat, TextSink,
};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "stackrdf", version, about = "Stack Exchange dump to RDF Turtle converter")]
struct Cli {
    /// Log debug events
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum InputFormat {
    Xml,
    Json,
}

impl From<InputFormat> for SourceFormat {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Xml => SourceFormat::Xml,
            InputFormat::Json => SourceFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a dump to Turtle
    Convert {
        /// Dump file (Posts.xml or a JSON array)
        input: PathBuf,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input format; guessed from the extension when omitted
        #[arg(long)]
        input_format: Option<InputFormat>,

        /// YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Render at most N questions and N answers
        #[arg(long)]
        limit: Option<usize>,

        /// Project and render on all cores
        #[arg(long)]
        parallel: bool,

        /// Fail on the first malformed record
        #[arg(long)]
        strict: bool,

        /// Parse the result back and fail if it is not valid Turtle
        #[arg(long)]
        check: bool,
    },
    /// Check that a file is valid Turtle
    Check {
        /// Turtle file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            input_format,
            config,
            limit,
            parallel,
            strict,
            check,
        } => {
            let options = ConvertOptions {
                input_format,
                config,
                limit,
                parallel,
                strict,
                check,
            };
            run_convert(&input, output.as_deref(), &options)
        }
        Commands::Check { file } => run_check(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

struct ConvertOptions {
    input_format: Option<InputFormat>,
    config: Option<PathBuf>,
    limit: Option<usize>,
    parallel: bool,
    strict: bool,
    check: bool,
}

fn run_convert(input: &Path, output: Option<&Path>, options: &ConvertOptions) -> Result<()> {
    let mut config = match &options.config {
        Some(path) => ConverterConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConverterConfig::default(),
    };
    if options.limit.is_some() {
        config.limit_per_kind = options.limit;
    }
    config.parallel |= options.parallel;
    config.strict |= options.strict;

    let format = match options.input_format {
        Some(f) => f.into(),
        None => match SourceFormat::from_path(input) {
            Some(f) => f,
            None => bail!("cannot tell the format of {}, pass --input-format", input.display()),
        },
    };

    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let records = read_records(format, BufReader::new(file))
        .with_context(|| format!("reading {}", input.display()))?;
    info!("Read {} records from {}", records.len(), input.display());

    let converter = Converter::new(config)?;

    let report = if options.check {
        let mut turtle = String::new();
        let report = converter.convert(records, &mut turtle)?;
        let triples = check_turtle(&turtle).context("output is not valid Turtle")?;
        info!("Output parsed back as {} triples", triples);
        write_output(output, |sink| sink.write_chunk(&turtle))?;
        report
    } else {
        let mut report = None;
        write_output(output, |sink| {
            report = Some(converter.convert(records, sink).map_err(io::Error::other)?);
            Ok(())
        })?;
        match report {
            Some(r) => r,
            None => bail!("conversion produced no report"),
        }
    };

    print_report(&report);
    Ok(())
}

/// Write to stdout, or to `path` through a temporary file renamed on success
fn write_output<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn TextSink) -> io::Result<()>,
{
    match path {
        None => {
            let stdout = io::stdout();
            let mut sink = IoSink::new(BufWriter::new(stdout.lock()));
            write(&mut sink)?;
            sink.flush()?;
        }
        Some(path) => {
            let mut tmp: OsString = path.as_os_str().to_owned();
            tmp.push(".tmp");
            let tmp = PathBuf::from(tmp);

            let file = File::create(&tmp).with_context(|| format!("creating {}", tmp.display()))?;
            let mut sink = IoSink::new(BufWriter::new(file));
            let written = write(&mut sink).and_then(|_| sink.flush());
            if let Err(e) = written {
                let _ = std::fs::remove_file(&tmp);
                return Err(e).with_context(|| format!("writing {}", tmp.display()));
            }
            drop(sink);
            std::fs::rename(&tmp, path)
                .with_context(|| format!("moving output into {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn run_check(file: &Path) -> Result<()> {
    let turtle =
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let triples = check_turtle(&turtle).with_context(|| format!("parsing {}", file.display()))?;
    println!("{}: {} triples", file.display(), triples);
    Ok(())
}

fn print_report(report: &ConversionReport) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "count"]);
    table.add_row(vec!["questions".to_string(), report.questions.to_string()]);
    table.add_row(vec!["answers".to_string(), report.answers.to_string()]);
    table.add_row(vec!["discarded".to_string(), report.discarded.to_string()]);
    table.add_row(vec!["malformed".to_string(), report.malformed.len().to_string()]);
    table.add_row(vec!["replies linked".to_string(), report.links.replies.to_string()]);
    table.add_row(vec!["orphan answers".to_string(), report.links.orphans.to_string()]);
    table.add_row(vec!["accepted answers".to_string(), report.links.best_answers.to_string()]);
    table.add_row(vec!["posts written".to_string(), report.posts_written.to_string()]);
    eprintln!("{}", table);

    for skipped in &report.malformed {
        eprintln!("  skipped record #{}: {}", skipped.index, skipped.error);
    }
}
