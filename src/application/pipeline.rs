//! Deployment pipeline
//!
//! Top-level entry point: initialization, then orchestration, with a single
//! reporting boundary. Failures become event-sink reports plus a `Failed`
//! status - the caller receives a completion signal, never a propagated
//! error. Exit codes belong to the CLI layer.

use crate::application::deploy::{DeployResult, DeployStatus, DeployUseCase};
use crate::application::init::init;
use crate::config::DeployConfig;
use crate::domain::ports::{CommandRunner, DeployEvent, DeployEventSink};

/// Run one full deployment: init, orchestrate, report.
pub fn run<R: CommandRunner + ?Sized>(
    config: &DeployConfig,
    runner: &R,
    sink: &dyn DeployEventSink,
) -> DeployResult {
    sink.on_event(DeployEvent::Started {
        branch: config.branch.clone(),
        folder: config.folder.clone(),
    });

    if let Err(e) = init(config, runner, sink) {
        sink.report_failure(&format!(
            "The deploy step failed while setting up the repository: {}",
            e
        ));
        return completed(sink, DeployStatus::Failed);
    }

    let status = match DeployUseCase::new(config, runner, sink).execute() {
        Ok(status) => status,
        Err(e) => {
            sink.report_failure(&format!("The deploy step encountered an error: {}", e));
            DeployStatus::Failed
        }
    };
    completed(sink, status)
}

fn completed(sink: &dyn DeployEventSink, status: DeployStatus) -> DeployResult {
    let result = DeployResult::new(status);
    sink.on_event(DeployEvent::Completed {
        status: status.as_str().to_string(),
        message: result.message().to_string(),
    });
    result
}
