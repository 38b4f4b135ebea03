use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use resume_helper::form::FixedAnswer;
use resume_helper::io::store::FileStore;
use resume_helper::session::Session;
use resume_helper::{Result, ResumeError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;
    match cli.command {
        Command::Show(args) => execute_show(args),
        Command::Import(args) => execute_import(args),
        Command::Export(args) => execute_export(args),
        Command::Clear(args) => execute_clear(args),
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ResumeError::Logging(error.to_string()))
}

fn execute_show(args: StoreArgs) -> Result<()> {
    let mut session = open_session(&args)?;
    session.load()?;
    println!("{}", serde_json::to_string_pretty(session.resume())?);
    Ok(())
}

fn execute_import(args: ImportArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ResumeError::MissingInput(args.input));
    }
    let bytes = fs::read(&args.input)?;

    let mut session = open_session(&args.store)?;
    session.load()?;
    let kind = session.import(&bytes)?;
    println!("imported {} (classified as {kind:?})", args.input.display());
    Ok(())
}

fn execute_export(args: ExportArgs) -> Result<()> {
    let mut session = open_session(&args.store)?;
    session.load()?;
    let payload = session.export(Local::now().date_naive())?;

    let target = args.output.join(&payload.file_name);
    fs::write(&target, &payload.bytes)?;
    println!("exported {}", target.display());
    Ok(())
}

fn execute_clear(args: ClearArgs) -> Result<()> {
    let mut session = open_session(&args.store)?;
    session.load()?;
    if session.clear(&FixedAnswer(args.yes))? {
        println!("all data erased");
    } else {
        println!("not erased; pass --yes to confirm");
    }
    Ok(())
}

fn open_session(args: &StoreArgs) -> Result<Session<FileStore>> {
    Ok(Session::new(FileStore::new(&args.store)))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Edit, import, and export résumé data against a local store."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stored résumé as canonical JSON.
    Show(StoreArgs),
    /// Absorb a résumé document (canonical or foreign) into the store.
    Import(ImportArgs),
    /// Write a dated export file with the store's exact contents.
    Export(ExportArgs),
    /// Erase the store entirely.
    Clear(ClearArgs),
}

#[derive(clap::Args)]
struct StoreArgs {
    /// Path of the persistence slot file.
    #[arg(long)]
    store: PathBuf,
}

#[derive(clap::Args)]
struct ImportArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Document to import.
    #[arg(long)]
    input: PathBuf,
}

#[derive(clap::Args)]
struct ExportArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Directory the export file is written into.
    #[arg(long, default_value = ".")]
    output: PathBuf,
}

#[derive(clap::Args)]
struct ClearArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Answer the confirmation prompt affirmatively.
    #[arg(long)]
    yes: bool,
}
