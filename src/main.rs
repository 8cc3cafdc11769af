use anyhow::Result;
use clap::{Parser, Subcommand};
use diffmatch::DiffOptions;
use diffmatch::areas::options::DEFAULT_EDIT_COST;
use diffmatch::areas::workbench::Workbench;
use diffmatch::commands::porcelain::diff::Cleanup;
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "diffmatch",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Character-level diffs and deltas for plain text",
    long_about = "This tool computes character-level edit scripts between two text files, \
    cleans them up for readability or compactness, \
    and encodes them as deltas that can be applied back to the original file.",
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
        global = true,
        default_value_t = 1.0,
        help = "Seconds a diff may search before settling for a coarser result (0 = no limit)"
    )]
    timeout: f32,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_EDIT_COST,
        help = "Cost of an extra edit, in characters, used by efficiency cleanup"
    )]
    edit_cost: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the changes between two files",
        long_about = "This command prints the edit script turning OLD into NEW, \
        one line per changed or unchanged run of text."
    )]
    Diff {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The changed file")]
        new: PathBuf,
        #[arg(long, value_enum, default_value_t = Cleanup::Semantic, help = "Cleanup applied to the edit script")]
        cleanup: Cleanup,
        #[arg(long, required = false, help = "Diff character by character even for large files")]
        no_line_mode: bool,
        #[arg(long, required = false, help = "Print edit statistics after the script")]
        stats: bool,
    },
    #[command(
        name = "delta",
        about = "Print the delta between two files",
        long_about = "This command prints a tab-separated delta that rebuilds NEW when applied to OLD."
    )]
    Delta {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The changed file")]
        new: PathBuf,
    },
    #[command(
        name = "apply-delta",
        about = "Rebuild a file from its original and a delta",
        long_about = "This command applies a delta produced by `delta` to OLD and prints the result. \
        It fails if the delta does not fit OLD."
    )]
    ApplyDelta {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The file holding the delta")]
        delta: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let options = DiffOptions::default()
        .with_timeout_secs(cli.timeout)
        .with_edit_cost(cli.edit_cost);
    let workbench = Workbench::new(options, Box::new(std::io::stdout()));

    match &cli.command {
        Commands::Diff {
            old,
            new,
            cleanup,
            no_line_mode,
            stats,
        } => workbench.diff(old, new, *cleanup, !*no_line_mode, *stats)?,
        Commands::Delta { old, new } => workbench.delta(old, new)?,
        Commands::ApplyDelta { old, delta } => workbench.apply_delta(old, delta)?,
    }

    Ok(())
}
