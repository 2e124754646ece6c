//! Headless state machine behind the ticket-node dialog.
//!
//! `Closed → Loading → Ready → Saving → Closed`. Every `open` starts a new
//! cycle and hands out a [`LoadTicket`]; fetch results are applied only if
//! their ticket belongs to the current cycle and the dialog is still
//! loading.

use shared_types::{find_queue, find_user, EditPayload, Queue, TicketAttachment, User};
use std::fmt;

use crate::services::ReferenceData;
use shared_types::AppError;

/// What the parent asked the dialog to do.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit(EditPayload),
}

impl DialogMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, DialogMode::Edit(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Loading,
    Ready,
    Saving,
}

/// Current dropdown values. `None` means the selector is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub queue_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Proof that a fetch was started by a particular open cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Result of feeding a fetch result back into the dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Lists stored; the dialog is now visible.
    Ready,
    /// The fetch failed; the dialog stays hidden.
    Failed(AppError),
    /// The result belonged to an earlier cycle and was dropped.
    Stale,
}

/// What the parent should receive after a successful save.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created { queue: Queue, user: Option<User> },
    Updated(EditPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// Save attempted with no queue selected.
    MissingQueue,
    /// Save attempted while the dialog was not ready.
    NotReady,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::MissingQueue => write!(f, "a queue must be selected"),
            SelectionError::NotReady => write!(f, "dialog is not ready"),
        }
    }
}

impl std::error::Error for SelectionError {}

#[derive(Debug, Clone, Default)]
pub struct SelectionDialog {
    mode: DialogMode,
    phase: DialogPhase,
    generation: u64,
    queues: Vec<Queue>,
    users: Vec<User>,
    selection: Selection,
}

impl SelectionDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Shown only once both lists are in.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, DialogPhase::Ready | DialogPhase::Saving)
    }

    pub fn selected_queue(&self) -> Option<&Queue> {
        self.selection
            .queue_id
            .and_then(|id| find_queue(&self.queues, id))
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.selection
            .user_id
            .and_then(|id| find_user(&self.users, id))
    }

    /// Start a new open cycle. Returns a ticket when reference data must be
    /// fetched, `None` when `mode` is `Closed`.
    pub fn open(&mut self, mode: DialogMode) -> Option<LoadTicket> {
        self.reset();
        if mode == DialogMode::Closed {
            return None;
        }
        self.mode = mode;
        self.phase = DialogPhase::Loading;
        Some(LoadTicket(self.generation))
    }

    /// Apply the outcome of the fetch started by `ticket`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ReferenceData, AppError>,
    ) -> LoadOutcome {
        if ticket.0 != self.generation || self.phase != DialogPhase::Loading {
            return LoadOutcome::Stale;
        }

        match result {
            Ok(data) => {
                self.queues = data.queues;
                self.users = data.users;
                if let DialogMode::Edit(payload) = &self.mode {
                    self.selection = Selection {
                        queue_id: payload
                            .queue_id()
                            .filter(|id| find_queue(&self.queues, *id).is_some()),
                        user_id: payload
                            .user_id()
                            .filter(|id| find_user(&self.users, *id).is_some()),
                    };
                }
                self.phase = DialogPhase::Ready;
                LoadOutcome::Ready
            }
            Err(e) => {
                self.reset();
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Set or clear the queue. Ids missing from the list are rejected.
    pub fn select_queue(&mut self, id: Option<i64>) -> bool {
        if self.phase != DialogPhase::Ready {
            return false;
        }
        match id {
            Some(id) if find_queue(&self.queues, id).is_none() => false,
            _ => {
                self.selection.queue_id = id;
                true
            }
        }
    }

    /// Set or clear the user. Ids missing from the list are rejected.
    pub fn select_user(&mut self, id: Option<i64>) -> bool {
        if self.phase != DialogPhase::Ready {
            return false;
        }
        match id {
            Some(id) if find_user(&self.users, id).is_none() => false,
            _ => {
                self.selection.user_id = id;
                true
            }
        }
    }

    /// Validate and resolve the selection. On success the dialog moves to
    /// `Saving`; the caller delivers the outcome and then calls [`close`].
    ///
    /// [`close`]: SelectionDialog::close
    pub fn save(&mut self) -> Result<SaveOutcome, SelectionError> {
        if self.phase != DialogPhase::Ready {
            return Err(SelectionError::NotReady);
        }
        let queue = self
            .selected_queue()
            .cloned()
            .ok_or(SelectionError::MissingQueue)?;
        let user = self.selected_user().cloned();

        let outcome = match &self.mode {
            DialogMode::Edit(payload) => SaveOutcome::Updated(payload.with_attachment(
                TicketAttachment {
                    queue: Some(queue),
                    user,
                },
            )),
            DialogMode::Create => SaveOutcome::Created { queue, user },
            DialogMode::Closed => return Err(SelectionError::NotReady),
        };
        self.phase = DialogPhase::Saving;
        Ok(outcome)
    }

    /// Discard everything and hide. Outstanding tickets become stale.
    pub fn close(&mut self) {
        self.reset();
    }

    /// Same as [`close`](SelectionDialog::close); named for the cancel button.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.mode = DialogMode::Closed;
        self.phase = DialogPhase::Closed;
        self.queues.clear();
        self.users.clear();
        self.selection = Selection::default();
    }
}
