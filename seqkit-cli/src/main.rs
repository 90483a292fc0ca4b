//! seqkit CLI - Command-line front end for the seqkit algorithms
//!
//! This binary provides command-line interfaces for:
//! - combine / filter / repeat / split / get: integer lists or text (`--text`)
//! - wrap / trim: text layout helpers
//! - chunk write / read: integer values in the binary chunk format

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use seqkit_core::{repeat_len, BoundedRead, BoundedString, BoundedVec, SequenceExt};
use seqkit_io::{ChunkLimits, ChunkReader, ChunkWriter};
use seqkit_text::{FormatOptions, FormatSpec, StrOps, Style, WrapOptions, DEFAULT_DELIMITERS};
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Largest output `repeat` will build
const MAX_REPEAT_LEN: usize = 1 << 24;

#[derive(Parser)]
#[command(name = "seqkit")]
#[command(about = "Sequence algorithms on the command line")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append one sequence to another
    ///
    /// Examples:
    ///   seqkit combine 1,2,3 4,5
    ///   seqkit combine --text "Hello, " "World!"
    Combine {
        #[command(flatten)]
        input: InputArgs,
        /// Sequence appended to the input
        other: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Remove a pattern, a set of values or several patterns
    ///
    /// Examples:
    ///   seqkit filter 1,2,3,3,4 --values 3
    ///   seqkit filter --text "the text" --pattern "the "
    ///   seqkit filter 1,2,3,4,5 --patterns "1,2;4"
    Filter {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selector: Selector,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Repeat a sequence; a fractional count appends a leading part
    Repeat {
        #[command(flatten)]
        input: InputArgs,
        /// Repeat count (negative counts give an empty result)
        #[arg(long, allow_negative_numbers = true)]
        times: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Split a sequence around a pattern, a set of values or several patterns
    Split {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selector: Selector,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Read one element; indices past the end give the default value
    Get {
        #[command(flatten)]
        input: InputArgs,
        /// Element index
        #[arg(long)]
        index: usize,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Word-wrap text, one line per output line
    Wrap {
        /// Text to wrap
        text: String,
        /// Target line width in characters
        #[arg(long, default_value_t = 80)]
        width: usize,
        /// Cut words longer than the width
        #[arg(long)]
        force: bool,
        /// Characters lines may break at
        #[arg(long)]
        delimiters: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Trim delimiters from text
    Trim {
        /// Text to trim
        text: String,
        /// Characters to strip (blank, tab and line breaks by default)
        #[arg(long)]
        delimiters: Option<String>,
        /// Which end(s) to trim
        #[arg(long, value_enum, default_value_t = Side::Both)]
        side: Side,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write or read integer chunk files
    Chunk {
        #[command(subcommand)]
        action: ChunkCommand,
    },
}

#[derive(Subcommand)]
enum ChunkCommand {
    /// Write comma-separated integers, one chunk per value
    Write {
        /// Output file
        path: PathBuf,
        /// Comma-separated integers
        values: String,
    },
    /// Read integers written by `chunk write`
    Read {
        /// Input file
        path: PathBuf,
        /// Largest accepted chunk in bytes
        #[arg(long)]
        max_chunk_len: Option<u64>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Comma-separated integers, or raw text with --text
    input: String,
    /// Treat inputs as text instead of integer lists
    #[arg(long)]
    text: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Selector {
    /// One pattern (an integer list, or text with --text)
    #[arg(long)]
    pattern: Option<String>,
    /// Individual values (an integer list, or characters with --text)
    #[arg(long)]
    values: Option<String>,
    /// Several patterns separated by ';'
    #[arg(long)]
    patterns: Option<String>,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format (text, json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Separator between elements in text output
    #[arg(long, default_value = ", ")]
    separator: String,
    /// Written before each element in text output
    #[arg(long, default_value = "")]
    prefix: String,
    /// Written after each element in text output
    #[arg(long, default_value = "")]
    suffix: String,
    /// Compact format spec such as "e'|' p'<' s'>' f'>3'"; overrides
    /// --separator, --prefix and --suffix
    #[arg(long)]
    spec: Option<String>,
    /// ANSI style for text output, e.g. "bold,red" or "underline,blue-bg"
    #[arg(long)]
    style: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Side {
    Left,
    Right,
    Both,
}

/// Rejected command-line input
#[derive(Debug, thiserror::Error)]
enum InputError {
    #[error("invalid integer {value:?}: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("repeating {len} elements {times} times exceeds {max} elements")]
    RepeatTooLarge { times: f64, len: usize, max: usize },
}

enum Input {
    Numbers(BoundedVec<i64>),
    Text(String),
}

enum Selection<P> {
    Pattern(P),
    Values(P),
    Patterns(Vec<P>),
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Output {
    Numbers(Vec<i64>),
    Text(String),
    NumberSegments(Vec<Vec<i64>>),
    TextSegments(Vec<String>),
    Lines(Vec<String>),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Combine {
            input,
            other,
            output,
        } => emit(&handle_combine(&input, &other)?, &output),
        Commands::Filter {
            input,
            selector,
            output,
        } => emit(&handle_filter(&input, &selector)?, &output),
        Commands::Repeat {
            input,
            times,
            output,
        } => emit(&handle_repeat(&input, times)?, &output),
        Commands::Split {
            input,
            selector,
            output,
        } => emit(&handle_split(&input, &selector)?, &output),
        Commands::Get {
            input,
            index,
            output,
        } => emit(&handle_get(&input, index)?, &output),
        Commands::Wrap {
            text,
            width,
            force,
            delimiters,
            output,
        } => {
            let options = WrapOptions {
                width,
                force,
                delimiters: delimiters.unwrap_or_else(|| DEFAULT_DELIMITERS.to_string()),
            };
            emit(&Output::Lines(text.word_wrap(&options)), &output)
        }
        Commands::Trim {
            text,
            delimiters,
            side,
            output,
        } => {
            let delimiters = delimiters.as_deref().unwrap_or(DEFAULT_DELIMITERS);
            emit(&Output::Text(handle_trim(&text, delimiters, side)), &output)
        }
        Commands::Chunk { action } => handle_chunk(action),
    }
}

fn init_tracing(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// `-v` wins over `RUST_LOG`; an unset or malformed `RUST_LOG` means warn.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if verbose == 0 {
        let from_env = rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok());
        if let Some(filter) = from_env {
            return filter;
        }
    }
    EnvFilter::default().add_directive(level.into())
}

fn parse_numbers(list: &str) -> Result<Vec<i64>, InputError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse().map_err(|source| {
                warn!(value = item, "rejected input value");
                InputError::InvalidInteger {
                    value: item.to_string(),
                    source,
                }
            })
        })
        .collect()
}

fn parse_text(text: &str) -> Result<String, InputError> {
    Ok(text.to_string())
}

impl InputArgs {
    fn load(&self) -> Result<Input, InputError> {
        if self.text {
            Ok(Input::Text(self.input.clone()))
        } else {
            Ok(Input::Numbers(BoundedVec::from(parse_numbers(&self.input)?)))
        }
    }
}

impl Selector {
    fn select<P, F>(&self, parse: F) -> Result<Selection<P>, InputError>
    where
        F: Fn(&str) -> Result<P, InputError>,
    {
        if let Some(pattern) = &self.pattern {
            return Ok(Selection::Pattern(parse(pattern)?));
        }
        if let Some(values) = &self.values {
            return Ok(Selection::Values(parse(values)?));
        }
        let patterns = self.patterns.as_deref().unwrap_or_default();
        Ok(Selection::Patterns(
            patterns.split(';').map(&parse).collect::<Result<_, _>>()?,
        ))
    }
}

impl OutputArgs {
    fn format_options(&self) -> Result<FormatOptions, Box<dyn Error>> {
        let options = match &self.spec {
            Some(spec) => FormatSpec::parse(spec)?,
            None => FormatOptions::default()
                .separator(self.separator.as_str())
                .wrap_with(self.prefix.as_str(), self.suffix.as_str()),
        };
        Ok(options.styled(&self.style()?))
    }

    fn style(&self) -> Result<Style, Box<dyn Error>> {
        Ok(match &self.style {
            Some(names) => Style::parse(names)?,
            None => Style::default(),
        })
    }
}

fn handle_combine(input: &InputArgs, other: &str) -> Result<Output, Box<dyn Error>> {
    Ok(match input.load()? {
        Input::Numbers(values) => {
            let other = parse_numbers(other)?;
            Output::Numbers((&values + &other).into_vec())
        }
        Input::Text(text) => Output::Text([text.as_str(), other].concat()),
    })
}

fn handle_filter(input: &InputArgs, selector: &Selector) -> Result<Output, Box<dyn Error>> {
    Ok(match input.load()? {
        Input::Numbers(values) => Output::Numbers(match selector.select(parse_numbers)? {
            Selection::Pattern(pattern) => values.filter_out_seq(&pattern),
            Selection::Values(set) => values.filter_out_occ(&set),
            Selection::Patterns(patterns) => values.filter_out_occ_seq(&patterns),
        }),
        Input::Text(text) => Output::Text(match selector.select(parse_text)? {
            Selection::Pattern(pattern) => seqkit_text::filter_out_seq(&text, &pattern),
            Selection::Values(set) => seqkit_text::filter_out_occ(&text, &set),
            Selection::Patterns(patterns) => seqkit_text::filter_out_occ_seq(&text, &patterns),
        }),
    })
}

fn handle_repeat(input: &InputArgs, times: f64) -> Result<Output, Box<dyn Error>> {
    debug!(times, "repeating input");
    Ok(match input.load()? {
        Input::Numbers(values) => {
            check_repeat::<i64>(values.len(), times)?;
            Output::Numbers((&values * times).into_vec())
        }
        Input::Text(text) => {
            check_repeat::<char>(text.chars().count(), times)?;
            Output::Text(seqkit_text::repeat(&text, times))
        }
    })
}

fn check_repeat<T>(len: usize, times: f64) -> Result<(), InputError> {
    match repeat_len::<T, f64>(len, times) {
        Some(total) if total <= MAX_REPEAT_LEN => Ok(()),
        _ => {
            warn!(times, len, "rejected repeat count");
            Err(InputError::RepeatTooLarge {
                times,
                len,
                max: MAX_REPEAT_LEN,
            })
        }
    }
}

fn handle_split(input: &InputArgs, selector: &Selector) -> Result<Output, Box<dyn Error>> {
    Ok(match input.load()? {
        Input::Numbers(values) => Output::NumberSegments(match selector.select(parse_numbers)? {
            Selection::Pattern(pattern) => values.split_seq(&pattern),
            Selection::Values(set) => values.split_occ(&set),
            Selection::Patterns(patterns) => values.split_occ_seq(&patterns),
        }),
        Input::Text(text) => Output::TextSegments(match selector.select(parse_text)? {
            Selection::Pattern(pattern) => seqkit_text::split_seq(&text, &pattern),
            Selection::Values(set) => seqkit_text::split_occ(&text, &set),
            Selection::Patterns(patterns) => seqkit_text::split_occ_seq(&text, &patterns),
        }),
    })
}

fn handle_get(input: &InputArgs, index: usize) -> Result<Output, Box<dyn Error>> {
    Ok(match input.load()? {
        Input::Numbers(values) => Output::Numbers(vec![*values.at(index)]),
        Input::Text(text) => {
            let c = BoundedString::from(text).char_at(index);
            Output::Text(seqkit_text::char_to_string(c))
        }
    })
}

fn handle_trim(text: &str, delimiters: &str, side: Side) -> String {
    let trimmed = match side {
        Side::Left => seqkit_text::trim_left(text, delimiters),
        Side::Right => seqkit_text::trim_right(text, delimiters),
        Side::Both => seqkit_text::trim(text, delimiters),
    };
    trimmed.to_string()
}

fn handle_chunk(action: ChunkCommand) -> Result<(), Box<dyn Error>> {
    match action {
        ChunkCommand::Write { path, values } => {
            let values = parse_numbers(&values)?;
            let mut writer = ChunkWriter::new(BufWriter::new(File::create(&path)?));
            for value in &values {
                writer.write_data(value)?;
            }
            let (chunks, bytes) = (writer.chunks_written(), writer.bytes_written());
            writer.finish()?;
            info!(chunks, bytes, path = %path.display(), "wrote chunk file");
            println!("Wrote {} chunks ({} bytes) to {}", chunks, bytes, path.display());
            Ok(())
        }
        ChunkCommand::Read {
            path,
            max_chunk_len,
            output,
        } => {
            let limits = max_chunk_len
                .map(|max_chunk_len| ChunkLimits { max_chunk_len })
                .unwrap_or_default();
            let mut reader = ChunkReader::with_limits(BufReader::new(File::open(&path)?), limits);
            let mut values = Vec::new();
            while let Some(value) = reader.read_data::<i64>()? {
                values.push(value);
            }
            info!(chunks = reader.chunks_read(), path = %path.display(), "read chunk file");
            emit(&Output::Numbers(values), &output)
        }
    }
}

fn render(output: &Output, args: &OutputArgs) -> Result<String, Box<dyn Error>> {
    if args.format == OutputFormat::Json {
        return Ok(serde_json::to_string(output)?);
    }
    let options = args.format_options()?;
    let style = args.style()?;
    Ok(match output {
        Output::Numbers(values) => seqkit_text::to_string(values, &options),
        Output::Text(text) => style.paint(text),
        Output::NumberSegments(segments) => segments
            .iter()
            .map(|segment| seqkit_text::to_string(segment, &options))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::TextSegments(segments) => seqkit_text::to_string(segments, &options),
        Output::Lines(lines) => lines
            .iter()
            .map(|line| style.paint(line))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

fn emit(output: &Output, args: &OutputArgs) -> Result<(), Box<dyn Error>> {
    let rendered = render(output, args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", rendered)?;
    Ok(())
}
