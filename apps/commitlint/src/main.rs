//! commitlint CLI binary entry point.
//! Resolves configuration, lints messages and prints results.

use clap::Parser;
use commitlint::cli::{Cli, Commands};
use commitlint::config::{self, ConfigSource, Effective};
use commitlint::registry::{ResolvedConfig, RuleSetRegistry};
use commitlint::{input, lint, output, utils};

/// Print `err` with its source chain and exit with code 2.
fn fail(err: &dyn std::error::Error) -> ! {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(s) = source {
        message.push_str(&format!(": {}", s));
        source = s.source();
    }
    eprintln!("{} {}", utils::error_prefix(), message);
    std::process::exit(2);
}

/// Resolve settings and the rule table, exiting with code 2 on any config error.
fn load(
    repo_root: Option<&str>,
    config_path: Option<&str>,
    output: Option<&str>,
) -> (Effective, ResolvedConfig) {
    let eff = config::resolve_effective(repo_root, config_path, output).unwrap_or_else(|e| fail(&e));
    if eff.output != "json" {
        match &eff.source {
            ConfigSource::BuiltIn => eprintln!(
                "{} No .commitlintrc found; using built-in rules.",
                utils::note_prefix()
            ),
            ConfigSource::File(p) => eprintln!(
                "{} Using config {}",
                utils::info_prefix(),
                input::display_path(&eff.repo_root, p)
            ),
        }
    }
    let resolved = RuleSetRegistry::builtin()
        .resolve(&eff.rules)
        .unwrap_or_else(|e| fail(&e));
    (eff, resolved)
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            repo_root,
            config,
            output,
            edit,
            files,
        } => {
            let (eff, resolved) = load(repo_root.as_deref(), config.as_deref(), output.as_deref());
            let paths = input::message_paths(&eff.repo_root, &files, edit.as_ref().map(|e| e.as_deref()));
            let read = if paths.is_empty() {
                input::read_stdin().map(|m| vec![m])
            } else {
                input::read_files(&eff.repo_root, &paths)
            };
            let inputs = read.unwrap_or_else(|e| fail(&e));

            let report = lint::run_lint(&inputs, &resolved);
            output::print_lint(&report, &eff.output, resolved.help_url.as_deref());
            if report.results.iter().any(|r| !r.valid) {
                std::process::exit(1);
            }
        }
        Commands::PrintConfig {
            repo_root,
            config,
            output,
        } => {
            let (eff, resolved) = load(repo_root.as_deref(), config.as_deref(), output.as_deref());
            output::print_config(&resolved, &eff.output).unwrap_or_else(|e| fail(&e));
        }
    }
}
