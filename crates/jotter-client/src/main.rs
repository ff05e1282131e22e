//! `jotter` - command-line access to a running Jotter server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jotter_client::{NotesClient, DEFAULT_BASE_URL};
use jotter_common::{NewNote, NoteId, NoteUpdate};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage notes on a Jotter server", long_about = None)]
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
struct Args {
    /// Server base URL
    #[arg(long, env = "JOTTER_URL", default_value = DEFAULT_BASE_URL, global = true)]
    url: String,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List all notes
    List,

    /// Show one note
    Get {
        #[arg(value_name = "NOTE_ID")]
        id: NoteId,
    },

    /// Create a note
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        content: String,
    },

    /// Update the given fields of a note
    Update {
        #[arg(value_name = "NOTE_ID")]
        id: NoteId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        id: NoteId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("jotter_client={}", level).parse()?),
        )
        .init();

    let client = NotesClient::new(args.url);

    match args.command {
        Command::List => print(&client.list_notes().await?),
        Command::Get { id } => print(&client.get_note(id).await?),
        Command::Create { title, content } => {
            print(&client.create_note(&NewNote::new(title, content)).await?)
        }
        Command::Update { id, title, content } => {
            print(&client.update_note(id, &NoteUpdate { title, content }).await?)
        }
        Command::Delete { id } => print(&client.delete_note(id).await?),
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
