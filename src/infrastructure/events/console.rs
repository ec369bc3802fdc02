//! Console event sink
//!
//! Human-readable progress narration for the job log. Failures are printed
//! as CI error annotations (`::error::`) so the hosting pipeline marks the
//! step failed with the original error text attached.

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that narrates progress on stdout/stderr
pub struct ConsoleEventSink;

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started { branch, folder } => {
                println!("🚢 Wharf Deploy");
                println!("Folder: {}", folder);
                println!("Branch: {}", branch);
            }
            DeployEvent::Info { message } => println!("{}", message),
            DeployEvent::BranchBootstrapped { branch } => {
                println!("✓ Created the {} branch on the remote", branch);
            }
            DeployEvent::WorktreeStaged { directory } => {
                println!("✓ Staged the publishing branch in {}", directory);
            }
            DeployEvent::Synchronized { folder } => {
                println!("✓ Synchronized {} into the staging worktree", folder);
            }
            DeployEvent::NothingToCommit => {
                println!("There is nothing to commit - exiting early");
            }
            DeployEvent::Pushed { branch } => {
                println!("✓ Force-pushed the deployment to {}", branch);
            }
            DeployEvent::TornDown => {
                println!("✓ Removed the staging worktree");
            }
            DeployEvent::Warning { message } => eprintln!("⚠ {}", message),
            DeployEvent::Failed { message } => eprintln!("::error::{}", message),
            DeployEvent::Completed { message, .. } => {
                println!();
                println!("{}", message);
            }
        }
    }
}
