use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use craftflow_cli::commands::{create, help, init};
use craftflow_cli::settings::Settings;
use craftflow_cli::{logging, CraftError};

#[derive(Parser)]
#[command(
    name = "craftflow",
    version,
    about = "craftflow — scaffold Express/TypeScript backends and feature modules",
    disable_help_subcommand = true
)]
struct Cli {
    /// Directory holding the boilerplate templates (defaults to the bundled set)
    #[arg(long, global = true, env = "CRAFTFLOW_TEMPLATES_DIR", value_name = "DIR")]
    templates_dir: Option<PathBuf>,

    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project
    Init {
        /// Do not run the dependency installer
        #[arg(long)]
        skip_install: bool,
    },
    /// Create a new module in src/packages/<module-name>
    Create {
        /// Module name (e.g. task, order-item)
        #[arg(allow_hyphen_values = true)]
        module_name: Option<String>,

        /// Ignored; only the first name is used
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },
    /// Display help information
    Help {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },
}

fn main() {
    let cli = parse_args();
    logging::init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        exit_with(CraftError::MissingArgument("command"));
    };

    let result = Settings::load(cli.templates_dir).and_then(|settings| match command {
        Commands::Init { skip_install } => init::run(&settings.with_skip_install(skip_install)),
        Commands::Create { module_name, .. } => match module_name {
            Some(name) => create::run(&name, &settings),
            None => Err(CraftError::MissingArgument("module name")),
        },
        Commands::Help { .. } => {
            help::run();
            Ok(())
        }
    });

    if let Err(e) = result {
        exit_with(e);
    }
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            let token = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(token)) => token.clone(),
                _ => std::env::args().nth(1).unwrap_or_default(),
            };
            eprintln!(
                "{}",
                format!("Error: {}", CraftError::UnknownCommand(token)).red()
            );
            help::run();
            std::process::exit(1);
        }
        Err(err) => {
            // --help and --version land here too and must exit cleanly.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

fn exit_with(e: CraftError) -> ! {
    tracing::debug!(error = ?e, "command failed");
    eprintln!("{}", format!("Error: {e}").red());
    std::process::exit(1);
}
