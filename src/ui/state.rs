//! View state of the humanizer screen, kept apart from rendering

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::generation::GenerationError;
use crate::types::{HumanizeOptions, HumanizedResult};

pub const FAILURE_MESSAGE: &str =
    "Échec du traitement du texte. Veuillez vérifier votre connexion et réessayer.";
pub const COPIED_NOTICE: &str = "Texte copié !";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    App,
    Docs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Snapshot of one submission handed to the request runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub id: u64,
    pub text: String,
    pub options: HumanizeOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub view: View,
    pub input_text: String,
    pub options: HumanizeOptions,
    result: Option<HumanizedResult>,
    error: Option<String>,
    notice: Option<String>,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.input_text = text.into();
        self
    }

    pub fn with_options(mut self, options: HumanizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn result(&self) -> Option<&HumanizedResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn char_count(&self) -> usize {
        self.input_text.chars().count()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input_text.trim().is_empty()
    }

    /// Enters `Loading` and returns the submission to run, or `None` when the
    /// input is blank or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.is_loading() {
            debug!("submit ignored: request already in flight");
            return None;
        }
        if self.input_text.trim().is_empty() {
            debug!("submit ignored: input is blank");
            return None;
        }
        self.next_ticket += 1;
        let id = self.next_ticket;
        self.in_flight = Some(id);
        self.error = None;
        self.notice = None;
        Some(SubmitTicket {
            id,
            text: self.input_text.clone(),
            options: self.options.clone(),
        })
    }

    /// Applies the outcome of ticket `id`. Returns `false` for stale tickets.
    pub fn finish_submit(
        &mut self,
        id: u64,
        outcome: Result<HumanizedResult, GenerationError>,
    ) -> bool {
        if self.in_flight != Some(id) {
            warn!(ticket = id, in_flight = ?self.in_flight, "discarding stale outcome");
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                debug!(error = %err, "submission failed");
                self.error = Some(FAILURE_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn clear_input(&mut self) {
        self.input_text.clear();
    }

    /// Text to place on the clipboard; also raises the copy notice.
    pub fn copy_result(&mut self) -> Option<String> {
        let text = self.result.as_ref()?.humanized_text.clone();
        self.notice = Some(COPIED_NOTICE.to_string());
        Some(text)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn show(&mut self, view: View) {
        self.view = view;
    }
}
