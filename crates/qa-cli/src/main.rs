mod cmd;
mod output;
mod root;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

const BIN_NAME: &str = "qa-artifacts";

const CREATE_HELP: &str = "\
Create options:
  --out DIR           Directory to write into (default: current directory)
  --force             Overwrite an existing file
  --project NAME      Project name            (default: Project)
  --release ID        Release identifier      (default: Release)
  --feature NAME      Feature under test      (default: Feature)
  --title TEXT        Bug title               (default: Bug title)
  --owner NAME        Artifact owner
  --approvers TEXT    Sign-off approvers
  --reported_by NAME  Bug reporter
  --env TEXT          Target environment
  --templates DIR     Template directory (default: assets/templates next to the binary)

Any other --key value pair fills {{key}} in the template.

Examples:
  qa-artifacts list
  qa-artifacts create test-plan --project Shop --release 2025.01
  qa-artifacts create bug-report --title \"Login fails on Safari\" --out ./bugs";

#[derive(Parser)]
#[command(
    name = BIN_NAME,
    about = "Render QA artifacts (test plans, bug reports, Playwright specs) from templates",
    version,
    after_help = CREATE_HELP,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known artifact kinds
    List {
        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Render an artifact from its template
    #[command(after_help = CREATE_HELP)]
    Create {
        /// Artifact kind followed by --key value options
        #[arg(
            value_name = "KIND [OPTIONS]",
            trailing_var_arg = true,
            allow_hyphen_values = true,
            num_args = 0..
        )]
        args: Vec<String>,
    },
}

/// Help exits 2 and version 0. Any other parse failure is a usage error (1).
fn exit_code_for(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 2,
        ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.is_empty() {
        let _ = Cli::command().print_help();
        std::process::exit(2);
    }

    let cli = match Cli::try_parse_from(std::iter::once(BIN_NAME.to_string()).chain(argv)) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code_for(e.kind()));
        }
    };

    let result = match cli.command {
        Commands::List { json } => cmd::list::run(json),
        Commands::Create { args } => cmd::create::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
