mod config;
mod transport;
mod view;

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use config::Config;
use todolist_core::TodoListController;
use transport::UreqTransport;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = parse_cli_args(env::args().skip(1))?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    let config = match options.base_url {
        Some(url) => Config::with_base_url(&url),
        None => Config::from_env(),
    };

    let mut controller = TodoListController::new(config.base_url(), UreqTransport::new());
    controller.mount();
    print!("{}", view::render(controller.items(), controller.error()));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => print_commands(),
            Ok(Some(command)) => {
                apply(&mut controller, command);
                print!("{}", view::render(controller.items(), controller.error()));
            }
            Err(message) => println!("{message}"),
        }
    }
    Ok(())
}

fn apply(controller: &mut TodoListController<UreqTransport>, command: Command) {
    match command {
        Command::List => controller.refresh(),
        Command::Add(text) => controller.create(&text),
        Command::Toggle(n) => match controller.items().get(n.wrapping_sub(1)) {
            Some(todo) => {
                let id = todo.id;
                controller.toggle(id);
            }
            None => println!("no item {n}"),
        },
        Command::Remove(n) => match controller.items().get(n.wrapping_sub(1)) {
            Some(todo) => {
                let id = todo.id;
                controller.remove(id);
            }
            None => println!("no item {n}"),
        },
        Command::Help | Command::Quit => unreachable!("handled by the caller"),
    }
}

/// One REPL command. Items are addressed by their 1-based list position so
/// the user never types a UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Add(String),
    Toggle(usize),
    Remove(usize),
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` means a blank line — nothing to do.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word {
        "list" | "ls" => Command::List,
        "add" => Command::Add(rest.to_string()),
        "toggle" => Command::Toggle(parse_index(word, rest)?),
        "rm" | "remove" => Command::Remove(parse_index(word, rest)?),
        "help" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        unknown => return Err(format!("unknown command {unknown:?}; type `help`")),
    };
    Ok(Some(command))
}

fn parse_index(word: &str, rest: &str) -> Result<usize, String> {
    rest.parse()
        .map_err(|_| format!("{word} takes an item number, e.g. `{word} 1`"))
}

fn print_help() {
    println!("todolist — a todo list synced against a remote API");
    println!("  --base-url <url>   Address of the todo API (default: TODOLIST_BASE_URL");
    println!("                     or http://localhost:3000)");
    println!("  --help             Show this help");
    println!();
    print_commands();
}

fn print_commands() {
    println!("commands:");
    println!("  list               Re-fetch and show the list");
    println!("  add <text>         Create a new todo");
    println!("  toggle <n>         Flip completion of item n");
    println!("  rm <n>             Delete item n");
    println!("  help               Show this list");
    println!("  quit               Leave");
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    base_url: Option<String>,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        base_url: None,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--base-url" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--base-url requires a URL"))?;
                options.base_url = Some(value.as_ref().to_string());
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}
