use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Wharf - publish build output to a git publishing branch
#[derive(Parser, Debug)]
#[command(name = "wharf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a build output folder to the publishing branch
    Deploy(DeployArgs),
}

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Build output folder, relative to the workspace root (bare path, no './')
    #[arg(short, long)]
    pub folder: String,

    /// Publishing branch to deploy to
    #[arg(short, long, default_value = "gh-pages")]
    pub branch: String,

    /// Branch the deployment is based on (defaults to the default branch)
    #[arg(long)]
    pub base_branch: Option<String>,

    /// Branch the working tree is restored to after deployment
    #[arg(long, default_value = "main")]
    pub default_branch: String,

    /// Repository to push to, as owner/name or a full URL
    /// (falls back to $GITHUB_REPOSITORY)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Platform-provided deployment token (falls back to $GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Personal access token (takes precedence over --token)
    #[arg(long)]
    pub personal_token: Option<String>,

    /// Push over SSH instead of a token-embedded HTTPS remote
    #[arg(long)]
    pub ssh: bool,

    /// Commit message override
    #[arg(long)]
    pub commit_message: Option<String>,

    /// Delete staged files that are missing from the build output
    #[arg(long)]
    pub clean: bool,

    /// Pattern to preserve during a clean (repeatable, or one JSON array string)
    #[arg(long)]
    pub clean_exclude: Vec<String>,

    /// Sub-folder of the publishing branch to deploy into
    #[arg(long)]
    pub target_folder: Option<String>,

    /// Workspace root holding the local repository
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Commit author name
    #[arg(long)]
    pub name: Option<String>,

    /// Commit author email
    #[arg(long)]
    pub email: Option<String>,

    /// Extra command narration in the log
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_deploy() {
        let cli = Cli::try_parse_from(["wharf", "deploy", "--folder", "build"]).unwrap();
        let Commands::Deploy(args) = cli.command;
        assert_eq!(args.folder, "build");
        assert_eq!(args.branch, "gh-pages");
        assert_eq!(args.default_branch, "main");
        assert!(!args.clean);
        assert!(!args.ssh);
    }

    #[test]
    fn test_cli_requires_folder() {
        assert!(Cli::try_parse_from(["wharf", "deploy"]).is_err());
    }

    #[test]
    fn test_cli_parse_deploy_with_args() {
        let cli = Cli::try_parse_from([
            "wharf",
            "deploy",
            "--folder",
            "dist",
            "--branch",
            "pages",
            "--base-branch",
            "develop",
            "--repository",
            "octo/site",
            "--token",
            "tok",
            "--clean",
            "--target-folder",
            "docs",
        ])
        .unwrap();

        let Commands::Deploy(args) = cli.command;
        assert_eq!(args.folder, "dist");
        assert_eq!(args.branch, "pages");
        assert_eq!(args.base_branch.as_deref(), Some("develop"));
        assert_eq!(args.repository.as_deref(), Some("octo/site"));
        assert_eq!(args.token.as_deref(), Some("tok"));
        assert!(args.clean);
        assert_eq!(args.target_folder.as_deref(), Some("docs"));
    }

    #[test]
    fn test_cli_clean_exclude_repeats() {
        let cli = Cli::try_parse_from([
            "wharf",
            "deploy",
            "--folder",
            "build",
            "--clean",
            "--clean-exclude",
            "keepme.txt",
            "--clean-exclude",
            "robots.txt",
        ])
        .unwrap();

        let Commands::Deploy(args) = cli.command;
        assert_eq!(args.clean_exclude, ["keepme.txt", "robots.txt"]);
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["wharf", "--json", "deploy", "--folder", "build"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["wharf", "deploy", "--folder", "build", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_parse_ssh() {
        let cli =
            Cli::try_parse_from(["wharf", "deploy", "--folder", "build", "--ssh"]).unwrap();
        let Commands::Deploy(args) = cli.command;
        assert!(args.ssh);
    }
}
