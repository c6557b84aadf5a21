use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, bail};
use std::path::PathBuf;
use tasklist::{Filter, Task, TaskStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "tasklist - persistent to-do list manager with filtered views")]
#[command(version)]
struct Cli {
    /// Path to the store directory (default: platform data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// List tasks
    List {
        /// Which tasks to show: all, active or completed
        #[arg(short, long, default_value_t = Filter::All)]
        filter: Filter,
    },

    /// Toggle a task's completion state
    Toggle {
        /// Task id (a unique prefix is enough)
        id: String,
    },

    /// Replace a task's description
    Edit {
        /// Task id (a unique prefix is enough)
        id: String,
        /// New description (must not be empty)
        description: String,
    },

    /// Delete a task
    Rm {
        /// Task id (a unique prefix is enough)
        id: String,
    },

    /// Delete every completed task
    Clear,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store_path = cli.store_path.unwrap_or_else(default_store_path);

    let mut store = TaskStore::open(&store_path)?;

    match cli.command {
        Commands::Add { description } => {
            let task = store.add(description);
            println!("Added {} {}", short_id(&task.id).bold(), task.description);
        }
        Commands::List { filter } => {
            store.set_filter(filter);
            render(&store);
        }
        Commands::Toggle { id } => {
            let id = resolve_id(&store, &id)?;
            store.toggle(&id);
            render(&store);
        }
        Commands::Edit { id, description } => {
            // The store accepts any text; rejecting empty edits is this
            // layer's job.
            let description = description.trim();
            if description.is_empty() {
                bail!("New description cannot be empty");
            }

            let id = resolve_id(&store, &id)?;
            store.edit(&id, description);
            println!("Edited {} {}", short_id(&id).bold(), description);
        }
        Commands::Rm { id } => {
            let id = resolve_id(&store, &id)?;
            store.remove(&id);
            println!("Deleted {}", short_id(&id).bold());
        }
        Commands::Clear => {
            let removed = store.clear_completed();
            println!(
                "Cleared {} completed {}",
                removed,
                if removed == 1 { "task" } else { "tasks" }
            );
        }
    }

    Ok(())
}

fn render(store: &TaskStore) {
    let visible = store.visible();

    if visible.is_empty() {
        let message = match store.filter() {
            Filter::All => "No tasks yet. Add one to get started!",
            Filter::Active => "No active tasks.",
            Filter::Completed => "No completed tasks yet.",
        };
        println!("{}", message.dimmed());
    } else {
        for task in &visible {
            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            let description = if task.completed {
                task.description.strikethrough().dimmed()
            } else {
                task.description.normal()
            };
            println!("{} {} {}", checkbox, short_id(&task.id).dimmed(), description);
        }
    }

    let remaining = store.active_count();
    println!(
        "{}",
        format!(
            "{} {} remaining",
            remaining,
            if remaining == 1 { "task" } else { "tasks" }
        )
        .dimmed()
    );
}

/// Resolve a (possibly shortened) id to a full task id.
fn resolve_id(store: &TaskStore, prefix: &str) -> Result<String> {
    let matches: Vec<&Task> = store
        .tasks()
        .iter()
        .filter(|t| t.id.starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [task] => Ok(task.id.clone()),
        [] => bail!("No task matches id {}", prefix),
        _ => bail!("Id {} is ambiguous ({} matches)", prefix, matches.len()),
    }
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("tasklist"))
        .unwrap_or_else(|| PathBuf::from("."))
}
