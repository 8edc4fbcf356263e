use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io::Write;
use tdiff::ColorWhen;
use tdiff::areas::session::Session;
use tdiff::artifacts::core::PagerWriter;
use tdiff::artifacts::diff::config::{
    DEFAULT_COMPLEXITY_GUARD_THRESHOLD, DEFAULT_CONTEXT_RADIUS, DiffConfig, Granularity,
    Normalization,
};
use tdiff::commands::porcelain::diff::PatchOptions;
use tdiff::commands::porcelain::split::{DEFAULT_COLUMN_WIDTH, SplitOptions};

#[derive(Parser)]
#[command(
    name = "tdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two texts by line, word or character",
    long_about = "Aligns two texts with a longest-common-subsequence diff and shows the result \
    as a unified patch, a side-by-side view or change statistics. \
    Either input may be `-` to read it from stdin.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = ColorWhen::Auto,
        help = "When to colour the output"
    )]
    color: ColorWhen,
    #[arg(long, global = true, help = "Write to stdout even when it is a terminal")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct EngineArgs {
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = Granularity::Line,
        help = "Unit of comparison"
    )]
    granularity: Granularity,
    #[arg(short = 'i', long, help = "Fold case before comparing")]
    ignore_case: bool,
    #[arg(
        short = 'w',
        long,
        help = "Collapse runs of spaces/tabs and trim before comparing"
    )]
    ignore_whitespace: bool,
    #[arg(
        short = 'U',
        long = "context",
        default_value_t = DEFAULT_CONTEXT_RADIUS as i64,
        allow_negative_numbers = true,
        help = "Unchanged lines kept around each change (negative means 0)"
    )]
    context: i64,
    #[arg(
        long,
        default_value_t = DEFAULT_COMPLEXITY_GUARD_THRESHOLD as i64,
        allow_negative_numbers = true,
        help = "Largest token-pair count aligned before falling back to a full replacement"
    )]
    threshold: i64,
}

impl EngineArgs {
    fn config(&self) -> DiffConfig {
        DiffConfig::default()
            .with_granularity(self.granularity)
            .with_normalization(Normalization::from_switches(
                self.ignore_case,
                self.ignore_whitespace,
            ))
            .with_context_radius(self.context)
            .with_complexity_guard_threshold(self.threshold)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show a unified patch",
        long_about = "This command prints the hunks turning the first text into the second. \
        No file headers are printed unless --headers is given."
    )]
    Diff {
        #[arg(index = 1, help = "The old text")]
        a: String,
        #[arg(index = 2, help = "The new text")]
        b: String,
        #[command(flatten)]
        engine: EngineArgs,
        #[arg(long, help = "Print ---/+++ header lines")]
        headers: bool,
        #[arg(long, help = "Append a change summary")]
        stat: bool,
        #[arg(long, help = "Exit with status 1 when the texts differ")]
        exit_code: bool,
    },
    #[command(
        name = "split",
        about = "Show both texts side by side",
        long_about = "This command prints one row per line with the old text on the left and \
        the new text on the right. Long unchanged runs are folded unless --no-collapse is given."
    )]
    Split {
        #[arg(index = 1, help = "The old text")]
        a: String,
        #[arg(index = 2, help = "The new text")]
        b: String,
        #[command(flatten)]
        engine: EngineArgs,
        #[arg(long, help = "Show every unchanged line")]
        no_collapse: bool,
        #[arg(long, default_value_t = DEFAULT_COLUMN_WIDTH, help = "Width of the left column")]
        width: usize,
        #[arg(long, help = "Exit with status 1 when the texts differ")]
        exit_code: bool,
    },
    #[command(
        name = "stat",
        about = "Show change statistics",
        long_about = "This command prints how many tokens were added, removed and left unchanged."
    )]
    Stat {
        #[arg(index = 1, help = "The old text")]
        a: String,
        #[arg(index = 2, help = "The new text")]
        b: String,
        #[command(flatten)]
        engine: EngineArgs,
        #[arg(long, help = "Exit with status 1 when the texts differ")]
        exit_code: bool,
    },
    #[command(
        name = "tokenize",
        about = "Print the token stream of a text",
        long_about = "This command prints the normalized tokens the aligner compares, \
        one quoted token per line."
    )]
    Tokenize {
        #[arg(index = 1, help = "The text to split")]
        file: String,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

impl Commands {
    fn config(&self) -> DiffConfig {
        match self {
            Commands::Split {
                engine,
                no_collapse,
                ..
            } => engine.config().with_collapse_unchanged(!no_collapse),
            Commands::Diff { engine, .. }
            | Commands::Stat { engine, .. }
            | Commands::Tokenize { engine, .. } => engine.config(),
        }
    }

    fn exit_code(&self) -> bool {
        match self {
            Commands::Diff { exit_code, .. }
            | Commands::Split { exit_code, .. }
            | Commands::Stat { exit_code, .. } => *exit_code,
            Commands::Tokenize { .. } => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    let mut pager = None;
    let writer: Box<dyn Write> = if !cli.no_pager && std::io::stdout().is_terminal() {
        let writer = PagerWriter::with_prompt("tdiff")?;
        pager = Some(writer.pager().clone());
        Box::new(writer)
    } else {
        Box::new(std::io::stdout())
    };

    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd.to_string_lossy(), writer, cli.command.config())?;

    let differs = match &cli.command {
        Commands::Diff {
            a,
            b,
            headers,
            stat,
            ..
        } => session.diff(
            a,
            b,
            &PatchOptions {
                headers: *headers,
                stat: *stat,
            },
        )?,
        Commands::Split { a, b, width, .. } => {
            session.split(a, b, &SplitOptions { width: *width })?
        }
        Commands::Stat { a, b, .. } => session.stat(a, b)?,
        Commands::Tokenize { file, .. } => {
            session.tokenize(file)?;
            false
        }
    };

    session.writer().flush()?;
    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    if cli.command.exit_code() && differs {
        std::process::exit(1);
    }

    Ok(())
}
