//! Wharf CLI - deploy build output to a git publishing branch
//!
//! Usage: wharf <COMMAND>
//!
//! Commands:
//!   deploy  Publish a build output folder to the publishing branch

use std::env;

use clap::Parser;

use wharf::application::pipeline;
use wharf::cli::{Cli, Commands, DeployArgs};
use wharf::config::{self, DeployConfig};
use wharf::domain::ports::DeployEventSink;
use wharf::infrastructure::{ConsoleEventSink, JsonEventSink, ShellRunner};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Deploy(args) => cmd_deploy(args, cli.json),
    };
    std::process::exit(exit_code);
}

fn cmd_deploy(args: DeployArgs, json: bool) -> i32 {
    // Environment fallbacks live here; the core only sees explicit values.
    let token = args.token.or_else(|| non_empty_env("GITHUB_TOKEN"));
    let repository = args
        .repository
        .or_else(|| non_empty_env("GITHUB_REPOSITORY"))
        .unwrap_or_default();
    let commit_sha = non_empty_env("GITHUB_SHA");

    let repository_path = config::resolve_repository_path(
        &repository,
        token.as_deref(),
        args.personal_token.as_deref(),
        args.ssh,
    )
    .unwrap_or_default();

    let mut config = DeployConfig::new(args.folder, args.branch)
        .with_default_branch(args.default_branch)
        .with_repository_path(repository_path)
        .with_clean(args.clean)
        .with_workspace(args.workspace)
        .with_debug(args.debug)
        .with_ssh(args.ssh);
    if let Some(base_branch) = args.base_branch {
        config = config.with_base_branch(base_branch);
    }
    if let Some(message) = args.commit_message {
        config = config.with_commit_message(message);
    }
    if !args.clean_exclude.is_empty() {
        config = config.with_clean_exclude(clean_exclude_input(args.clean_exclude));
    }
    if let Some(target_folder) = args.target_folder {
        config = config.with_target_folder(target_folder);
    }
    if let Some(token) = token {
        config = config.with_token(token);
    }
    if let Some(personal_token) = args.personal_token {
        config = config.with_personal_token(personal_token);
    }
    if let Some(sha) = commit_sha {
        config = config.with_commit_sha(sha);
    }
    let name = args.name.unwrap_or_else(|| config.name.clone());
    let email = args.email.unwrap_or_else(|| config.email.clone());
    config = config.with_author(name, email);

    let sink: Box<dyn DeployEventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink)
    };

    let result = pipeline::run(&config, &ShellRunner, sink.as_ref());
    if result.is_success() {
        0
    } else {
        1
    }
}

/// A single `--clean-exclude` value that looks like a JSON array is treated
/// as one, matching how hosting pipelines pass list-valued inputs.
fn clean_exclude_input(values: Vec<String>) -> wharf::domain::value_objects::CleanExclude {
    use wharf::domain::value_objects::CleanExclude;

    if values.len() == 1 && values[0].trim_start().starts_with('[') {
        CleanExclude::Json(values.into_iter().next().unwrap_or_default())
    } else {
        CleanExclude::List(values)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
