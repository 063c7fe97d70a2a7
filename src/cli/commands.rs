use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use crate::router::{PathValues, Router};
use crate::routes_config::load_router;

/// Command-line interface for trackroute
#[derive(Parser)]
#[command(name = "trackroute")]
#[command(version = crate::VERSION)]
#[command(about = "Inspect and exercise a route table", long_about = None)]
pub struct Cli {
    /// Path to the YAML route table
    #[arg(
        short,
        long,
        global = true,
        env = "TRACKROUTE_ROUTES",
        default_value = "config/routes.yaml"
    )]
    pub routes: PathBuf,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List every registered route
    Routes,
    /// Match a request against the route table and print the result as JSON
    Match {
        /// HTTP method, e.g. GET
        method: String,
        /// Request path, e.g. /posts/42
        path: String,
    },
    /// Generate a path from a route name
    Path {
        /// Route name, e.g. posts.show
        name: String,
        /// Parameter values as key=value pairs
        #[arg(value_parser = parse_key_value)]
        values: Vec<(String, String)>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("invalid key=value pair: no '=' found in '{s}'"));
    };
    if key.is_empty() {
        return Err(format!("invalid key=value pair: empty key in '{s}'"));
    }
    Ok((key.to_owned(), value.to_owned()))
}

/// One line per route: method, pattern, name and target, columns aligned
#[must_use]
pub fn render_routes(router: &Router) -> String {
    let mut pattern_width = 0;
    let mut name_width = 0;
    for route in router.routes() {
        pattern_width = pattern_width.max(route.pattern().len());
        name_width = name_width.max(route.name().len());
    }

    let mut out = String::new();
    for route in router.routes() {
        out.push_str(&format!(
            "{:<6} {:<pattern_width$}  {:<name_width$}  {}\n",
            route.method().as_str(),
            route.pattern(),
            route.name(),
            route.target(),
        ));
    }
    out
}

/// The match for `method path` as pretty JSON
///
/// # Errors
///
/// Returns an error when no route matches.
pub fn render_match(router: &Router, method: &str, path: &str) -> Result<String> {
    let matched = router
        .match_method_str(method, path)
        .ok_or_else(|| anyhow!("No route matches {method} {path}"))?;

    let report = json!({
        "method": matched.route.method().as_str(),
        "pattern": matched.route.pattern(),
        "name": matched.route.name(),
        "controller": matched.controller(),
        "action": matched.action(),
        "params": matched.path_params_map(),
    });
    serde_json::to_string_pretty(&report).context("Failed to serialize match")
}

/// The generated path for `name`
///
/// # Errors
///
/// Returns the router's reverse-routing error.
pub fn render_path(router: &Router, name: &str, values: &[(String, String)]) -> Result<String> {
    let values: PathValues = values.iter().map(|(k, v)| (k.as_str(), v)).collect();
    router
        .path(name, &values)
        .with_context(|| format!("Failed to generate path for route '{name}'"))
}

/// Run a parsed command line, printing results to stdout.
///
/// # Errors
///
/// Returns an error if the route table cannot be loaded or the command fails.
pub fn run_cli(cli: Cli) -> Result<()> {
    let router = load_router(&cli.routes)?;

    match &cli.command {
        Commands::Routes => print!("{}", render_routes(&router)),
        Commands::Match { method, path } => println!("{}", render_match(&router, method, path)?),
        Commands::Path { name, values } => println!("{}", render_path(&router, name, values)?),
    }
    Ok(())
}
