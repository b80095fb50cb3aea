use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use emprende_scores::comments::{AdvisorNotes, Comment, FileStore, StoreError};
use emprende_scores::config::load_settings;
use emprende_scores::error::{Error, Result};
use emprende_scores::input::{load_ice_summary, load_iepm};
use emprende_scores::logging;
use emprende_scores::pipeline::{ReportFormat, ReportInput, build_bundle, write_reports};

#[derive(Debug, Parser)]
#[command(name = "emprende-scores", version, about = "Normalize ICE/IEPM survey scores")]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize backend payloads and write reports.
    Run(RunArgs),
    /// Manage advisor comments for a subject.
    #[command(subcommand)]
    Comments(CommentsCommand),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// ICE summary payload (`{resultados, resumen}` or a bare result array).
    #[arg(long)]
    ice: Option<PathBuf>,
    /// IEPM payload (`{iepm, dimensiones, indicadores, accionMejora}`).
    #[arg(long)]
    iepm: Option<PathBuf>,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = ReportFormat::All)]
    format: ReportFormat,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SubjectArgs {
    #[arg(long)]
    store: PathBuf,
    #[arg(long)]
    subject: String,
}

#[derive(Debug, Subcommand)]
enum CommentsCommand {
    List(SubjectArgs),
    Add {
        #[command(flatten)]
        target: SubjectArgs,
        #[arg(long, conflicts_with = "preset", required_unless_present = "preset")]
        text: Option<String>,
        #[arg(long)]
        preset: Option<usize>,
    },
    Remove {
        #[command(flatten)]
        target: SubjectArgs,
        #[arg(long)]
        comment: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run(args) => run_reports(&args),
        Command::Comments(cmd) => run_comments(cmd),
    }
}

fn run_reports(args: &RunArgs) -> Result<()> {
    if args.ice.is_none() && args.iepm.is_none() {
        return Err(Error::EmptyResults(
            "pass at least one of --ice or --iepm".to_string(),
        ));
    }
    let settings = load_settings(args.config.as_deref())?;
    let dimension_map = settings.dimension_map();

    let ice = args.ice.as_deref().map(load_ice_summary).transpose()?;
    let iepm = args.iepm.as_deref().map(load_iepm).transpose()?;

    let bundle = build_bundle(&ReportInput {
        ice: ice.as_ref(),
        iepm: iepm.as_ref(),
        tables: &settings.reference,
        dimension_map: &dimension_map,
        profile: &settings.profile,
    });
    if bundle.is_empty() {
        return Err(Error::EmptyResults(describe_inputs(args)));
    }

    let written = write_reports(&bundle, &settings.reference, &args.out, args.format)?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn describe_inputs(args: &RunArgs) -> String {
    [args.ice.as_deref(), args.iepm.as_deref()]
        .into_iter()
        .flatten()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_comments(cmd: CommentsCommand) -> Result<()> {
    match cmd {
        CommentsCommand::List(target) => {
            let notes = open_notes(&target);
            for comment in notes.load(&target.subject)? {
                print_comment(&comment);
            }
        }
        CommentsCommand::Add {
            target,
            text,
            preset,
        } => {
            let mut notes = open_notes(&target);
            let comment = match (text, preset) {
                (Some(text), _) => notes.add_custom(&target.subject, &text)?,
                (None, Some(index)) => notes.add_predefined(&target.subject, index)?,
                (None, None) => return Err(StoreError::EmptyComment.into()),
            };
            print_comment(&comment);
        }
        CommentsCommand::Remove { target, comment } => {
            let mut notes = open_notes(&target);
            if notes.remove(&target.subject, &comment)? {
                tracing::info!("removed comment {comment} for {}", target.subject);
            } else {
                tracing::warn!("no comment {comment} for {}", target.subject);
            }
        }
    }
    Ok(())
}

fn open_notes(target: &SubjectArgs) -> AdvisorNotes<FileStore> {
    AdvisorNotes::new(FileStore::new(&target.store))
}

fn print_comment(comment: &Comment) {
    println!(
        "{}\t{}\t{}\t{:?}\t{}",
        comment.id,
        comment.fecha.to_rfc3339(),
        comment.asesor,
        comment.tipo,
        comment.texto
    );
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
