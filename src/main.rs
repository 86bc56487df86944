// Copyright 2026 Callbridge Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use callbridge::actions;
use callbridge::cli::{self, output, DEFAULT_ENDPOINT};
use callbridge::loader::DEFAULT_TIMEOUT_MS;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "callbridge",
    about = "Callbridge: callback-bridge and opaque-POST client",
    version,
    after_help = "Run 'callbridge <command> --help' for details on each command."
)]
struct Cli {
    /// Endpoint URL (the deployed web app)
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Transport timeout in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout: u64,

    /// Suppress display output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read from the endpoint through the callback bridge
    Get,
    /// Send the opaque POST beacon to the endpoint
    Post,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Export global flags via environment so all modules can check them
    if cli.quiet {
        std::env::set_var("CALLBRIDGE_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("CALLBRIDGE_VERBOSE", "1");
    }

    output::init_tracing();
    actions::init();

    let result = match cli.command {
        Commands::Get => cli::get_cmd::run(&cli.endpoint, cli.timeout).await,
        Commands::Post => cli::post_cmd::run(&cli.endpoint, cli.timeout).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "callbridge", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error. Trigger failures are
    // rendered through the sink and do not reach here.
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}
