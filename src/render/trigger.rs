use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crate::cache::ArtifactKey;
use crate::error::PanelError;

use super::command::RenderPlan;

/// Completion report for one render attempt, tagged with the key it was
/// started for so the resolver can drop superseded results.
#[derive(Debug)]
pub struct RenderOutcome {
    pub key: ArtifactKey,
    pub result: Result<(), PanelError>,
}

/// Run the renderer for `plan` on a background thread.
///
/// The calling (UI-affinity) thread never blocks: waiting for process
/// exit and draining its error stream happen on the worker, and the
/// outcome is marshaled back over `outcome_tx`. The artifact at
/// `plan.output` must not be read until the outcome arrives — the file
/// is only complete once the process has exited.
pub fn spawn_render(plan: RenderPlan, outcome_tx: Sender<RenderOutcome>) -> JoinHandle<()> {
    thread::spawn(move || {
        log::debug!("renderer arguments: {}", plan.command_line());
        let result = run_renderer(&plan);
        let _ = outcome_tx.send(RenderOutcome {
            key: plan.key.clone(),
            result,
        });
    })
}

fn run_renderer(plan: &RenderPlan) -> Result<(), PanelError> {
    let mut child = Command::new(&plan.renderer)
        .args(plan.args())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| PanelError::Render(format!("renderer did not start: {e}")))?;

    // The renderer reports progress on its error stream; drain it line by
    // line into the log so a wedged render leaves a trace.
    if let Some(stderr) = child.stderr.take() {
        for line in BufReader::new(stderr).lines() {
            match line {
                Ok(line) => log::debug!("renderer: {line}"),
                Err(_) => break,
            }
        }
    }

    let status = child
        .wait()
        .map_err(|e| PanelError::Render(format!("renderer did not exit cleanly: {e}")))?;

    if status.success() {
        log::debug!("image generated");
        Ok(())
    } else {
        Err(PanelError::Render(format!("renderer exited with {status}")))
    }
}
