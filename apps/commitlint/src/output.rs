//! Output rendering for lint and print-config commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-input results and a top-level summary.

use crate::models::{LintOutcome, LintReport, Problem};
use crate::registry::ResolvedConfig;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

/// Print lint results in the requested format.
pub fn print_lint(report: &LintReport, output: &str, help_url: Option<&str>) {
    match output {
        "json" => println!("{:#}", compose_lint_json(report)),
        _ => print!("{}", render_lint_human(report, use_colors(output), help_url)),
    }
}

/// Render lint results the way a commit hook shows them.
pub fn render_lint_human(report: &LintReport, color: bool, help_url: Option<&str>) -> String {
    let mut out = String::new();
    for res in &report.results {
        render_outcome(&mut out, res, color, help_url);
    }
    out
}

fn render_outcome(out: &mut String, res: &LintOutcome, color: bool, help_url: Option<&str>) {
    if res.ignored {
        return;
    }
    let header = res.input.lines().next().unwrap_or_default();
    let label = if res.source.is_empty() {
        String::new()
    } else {
        format!(" ({})", res.source)
    };
    let input_tag = if color {
        "⧗   input:".bold().to_string()
    } else {
        "⧗   input:".to_string()
    };
    out.push_str(&format!("{} {}{}\n", input_tag, header, label));

    let problem_line = |p: &Problem, icon: String| {
        let name = if color {
            format!("[{}]", p.name).bright_black().to_string()
        } else {
            format!("[{}]", p.name)
        };
        format!("{}   {} {}\n", icon, p.message, name)
    };
    for p in &res.errors {
        let icon = if color { "✖".red().to_string() } else { "✖".to_string() };
        out.push_str(&problem_line(p, icon));
    }
    for p in &res.warnings {
        let icon = if color { "⚠".yellow().to_string() } else { "⚠".to_string() };
        out.push_str(&problem_line(p, icon));
    }

    let summary = format!(
        "found {} problems, {} warnings",
        res.errors.len(),
        res.warnings.len()
    );
    let (icon, summary) = match (res.errors.is_empty(), res.warnings.is_empty(), color) {
        (true, true, true) => ("✔".green().to_string(), summary.bold().to_string()),
        (true, true, false) => ("✔".to_string(), summary),
        (true, false, true) => ("⚠".yellow().to_string(), summary.bold().to_string()),
        (true, false, false) => ("⚠".to_string(), summary),
        (false, _, true) => ("✖".red().to_string(), summary.bold().to_string()),
        (false, _, false) => ("✖".to_string(), summary),
    };
    out.push('\n');
    out.push_str(&format!("{}   {}\n", icon, summary));
    if !res.errors.is_empty() || !res.warnings.is_empty() {
        if let Some(url) = help_url {
            out.push_str(&format!("ⓘ   Get help: {}\n", url));
        }
    }
    out.push('\n');
}

/// Print the effective rule table.
///
/// Human output is TOML so it can be pasted into `.commitlintrc.toml`.
pub fn print_config(cfg: &ResolvedConfig, output: &str) -> Result<(), toml::ser::Error> {
    match output {
        "json" => println!("{:#}", compose_config_json(cfg)),
        _ => print!("{}", render_config_toml(cfg)?),
    }
    Ok(())
}

/// Render the effective rule table as a `[rules]` TOML table.
pub fn render_config_toml(cfg: &ResolvedConfig) -> Result<String, toml::ser::Error> {
    toml::to_string(&json!({ "rules": cfg.table }))
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(report: &LintReport) -> JsonVal {
    json!({
        "results": report.results,
        "summary": report.summary,
    })
}

/// Compose the effective config as JSON (pure).
pub fn compose_config_json(cfg: &ResolvedConfig) -> JsonVal {
    let ignores: Vec<&str> = cfg.ignores.iter().map(|r| r.as_str()).collect();
    json!({
        "rules": cfg.table,
        "ignores": ignores,
        "helpUrl": cfg.help_url,
    })
}
