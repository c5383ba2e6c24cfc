use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::generation::{self, GenerationBackend, Humanizer};
use crate::types::HumanizedResult;
use crate::ui::state::SubmitTicket;

/// Result of one ticket, sent back to the UI thread.
#[derive(Debug)]
pub struct Outcome {
    pub id: u64,
    pub result: generation::Result<HumanizedResult>,
}

enum RuntimeCommand {
    Humanize(SubmitTicket),
    Shutdown,
}

/// Runs generation calls on a worker thread so the UI never blocks.
pub struct GenerationRuntime {
    commands: Sender<RuntimeCommand>,
    outcomes: Receiver<Outcome>,
    join: Option<JoinHandle<()>>,
}

impl GenerationRuntime {
    pub fn spawn<B>(humanizer: Humanizer<B>) -> Result<Self>
    where
        B: GenerationBackend + 'static,
    {
        let (command_tx, command_rx) = channel();
        let (outcome_tx, outcome_rx) = channel();
        let model = humanizer.model().to_string();
        let join = thread::Builder::new()
            .name("humanizer-runtime".to_string())
            .spawn(move || run(humanizer, command_rx, outcome_tx))
            .context("failed to spawn humanizer runtime thread")?;
        info!(model = %model, "humanizer runtime thread spawned");
        Ok(Self {
            commands: command_tx,
            outcomes: outcome_rx,
            join: Some(join),
        })
    }

    pub fn submit(&self, ticket: SubmitTicket) -> Result<()> {
        self.commands
            .send(RuntimeCommand::Humanize(ticket))
            .map_err(|_| anyhow!("humanizer runtime is no longer running"))
    }

    pub fn try_recv(&self) -> Option<Outcome> {
        self.outcomes.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<Outcome> {
        match self.outcomes.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Drop for GenerationRuntime {
    /// Never waits on a request still in flight: the worker is detached and
    /// its outcome dropped once the call returns.
    fn drop(&mut self) {
        let _ = self.commands.send(RuntimeCommand::Shutdown);
        if let Some(join) = self.join.take() {
            if join.is_finished() {
                let _ = join.join();
            } else {
                debug!("detaching humanizer runtime with a request in flight");
            }
        }
    }
}

fn run<B: GenerationBackend>(
    humanizer: Humanizer<B>,
    commands: Receiver<RuntimeCommand>,
    outcomes: Sender<Outcome>,
) {
    while let Ok(command) = commands.recv() {
        match command {
            RuntimeCommand::Humanize(ticket) => {
                debug!(ticket = ticket.id, "processing submission");
                let result = humanizer.humanize(&ticket.text, &ticket.options);
                if outcomes.send(Outcome { id: ticket.id, result }).is_err() {
                    break;
                }
            }
            RuntimeCommand::Shutdown => {
                info!("received shutdown command");
                break;
            }
        }
    }
    info!("humanizer runtime thread exiting");
}
