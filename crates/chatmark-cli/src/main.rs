use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use chatmark_core::{RenderOptions, format_inline, render_with_options};
use chatmark_renderer::{Renderer, Theme};
use clap::{ArgAction, Parser, ValueEnum};

const AFTER_HELP: &str = "\
EXAMPLES:
  chatmark-cli message.txt             Render a message into a preview page
  echo '*hi*' | chatmark-cli --raw     Print only the HTML fragment
  chatmark-cli --inline lines.txt      Format every line on its own, without blocks

ENVIRONMENT:
  CHATMARK_MAX_INPUT_LEN   byte limit for rendered input (`none` disables it)
  CHATMARK_SANITIZE        run output through the allow-list sanitizer (true/false)
  RUST_LOG                 log filter, overrides -v/-q
";

/// Renders chat message markup into HTML.
#[derive(Parser)]
#[command(version, after_help = AFTER_HELP)]
struct Args {
    /// Message file to render; reads stdin when omitted
    input: Option<PathBuf>,

    /// Print only the HTML fragment instead of a full page
    #[arg(long)]
    raw: bool,

    /// Pass the output through the allow-list sanitizer
    #[arg(long)]
    sanitized: bool,

    /// Colour theme for the preview page
    #[arg(long, value_enum, default_value_t = ThemeArg::Auto)]
    theme: ThemeArg,

    /// Format each input line independently with the inline formatter
    #[arg(long, conflicts_with_all = ["sanitized", "theme"])]
    inline: bool,

    /// Maximum input length in bytes (0 disables the limit)
    #[arg(long, value_name = "BYTES")]
    max_len: Option<usize>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::from_env();
        if let Some(limit) = self.max_len {
            options.max_input_len = (limit > 0).then_some(limit);
        }
        if self.sanitized {
            options.sanitize = true;
        }
        options
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Auto,
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Auto => Theme::Auto,
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .try_init()
        .ok();

    if let Err(err) = run(&args) {
        log::debug!("{:?}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let source = read_source(args.input.as_ref())?;
    let options = args.render_options();
    log::info!(
        "rendering {} bytes (limit: {:?}, sanitize: {})",
        source.len(),
        options.max_input_len,
        options.sanitize
    );

    if args.inline {
        let (input, truncated) = options.clamp(&source);
        warn_truncated(truncated, &options);
        for line in input.lines() {
            println!("{}", format_inline(line));
        }
        return Ok(());
    }

    if args.raw {
        let output = render_with_options(&source, &options);
        warn_truncated(output.truncated, &options);
        print!("{}", output.html);
        return Ok(());
    }

    let renderer = Renderer::new(args.theme.into());
    let page = renderer.render_page(&source, &options);
    warn_truncated(page.truncated, &options);
    print!("{}", page.html);
    Ok(())
}

fn read_source(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Stdin)?;
            Ok(buffer)
        }
    }
}

fn warn_truncated(truncated: bool, options: &RenderOptions) {
    if truncated {
        log::warn!(
            "input exceeds {} bytes; rendered output is truncated",
            options.max_input_len.unwrap_or_default()
        );
    }
}
