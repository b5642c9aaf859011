use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;

use carted::{format, Config, Filter, JsonFileStore, ListManager};

#[derive(Parser)]
#[command(name = "carted")]
#[command(version, about = "Terminal grocery list manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the list
    Add {
        /// Item text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show the list, optionally filtered by status
    List {
        /// Which items to show
        #[arg(short, long, value_enum, default_value_t = Filter::All)]
        status: Filter,
    },
    /// Replace the text of an item
    Edit {
        /// Item id (shown by `list`)
        id: String,
        /// New text, stored verbatim
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Toggle an item in or out of the cart
    Toggle {
        /// Item id
        id: String,
    },
    /// Delete an item
    Delete {
        /// Item id
        id: String,
    },
    /// Delete all items
    Clear,
    /// Launch the interactive TUI
    Tui,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Config::load();

    // Commands that never touch the store
    let command = match cli.command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "carted", &mut io::stdout());
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Tui => {
            carted::tui::run(&config)?;
            return Ok(ExitCode::SUCCESS);
        }
        command => command,
    };

    let store = JsonFileStore::new(config.store_path());
    let mut list = ListManager::open(store)?;

    match command {
        Commands::Add { text } => {
            let text = text.join(" ");
            let text = text.trim();
            if text.is_empty() {
                eprintln!("{}", "Please enter an item".red());
                return Ok(ExitCode::FAILURE);
            }
            let item = list.add_item(text)?;
            println!("{} ({})", "Item added successfully".green(), item.id);
        }
        Commands::List { status } => {
            print_table(&list.filter_items(status));
        }
        Commands::Edit { id, text } => {
            let text = text.join(" ");
            // Not-found is absorbed silently - no message, no state change
            if list.edit_item(&id, &text)?.is_some() {
                println!("{}", "Item updated successfully".green());
            }
        }
        Commands::Toggle { id } => {
            list.toggle_item_status(&id)?;
        }
        Commands::Delete { id } => {
            list.delete_item(&id)?;
            println!("{}", "Item deleted successfully".green());
        }
        Commands::Clear => {
            list.clear_all_items()?;
            println!("{}", "All items cleared successfully".green());
        }
        Commands::Tui | Commands::Completion { .. } => unreachable!(),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_table(items: &[carted::Item]) {
    if items.is_empty() {
        println!("No task found");
        return;
    }

    let text_width = format::MAX_ITEM_LEN + format::ELLIPSIS.len();
    let status_width = format::NOT_ADDED_LABEL.len();

    // Pad before coloring - ANSI escapes would throw off width specifiers
    println!(
        "{}  {}  {}",
        format!("{:<text_width$}", "Item").bold(),
        format!("{:<status_width$}", "Status").bold(),
        "Id".bold(),
    );
    for item in items {
        let status = format!("{:<status_width$}", item.status_label());
        let status = if item.completed {
            status.green()
        } else {
            status.yellow()
        };
        println!(
            "{:<text_width$}  {}  {}",
            format::format_item(&item.text),
            status,
            item.id.dimmed(),
        );
    }
}
