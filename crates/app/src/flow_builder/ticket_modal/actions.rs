use shared_types::AppError;

use super::state::{LoadOutcome, LoadTicket, SaveOutcome, SelectionDialog, SelectionError};
use crate::services::notify::report_error;
use crate::services::{NotificationSink, ReferenceData, Translator};

pub const QUEUE_REQUIRED_KEY: &str = "flowBuilder.ticketModal.errors.queueRequired";

/// Feed a fetch result into the dialog, surfacing failures.
///
/// Stale results are dropped without notifying anyone.
pub fn apply_load(
    dialog: &mut SelectionDialog,
    ticket: LoadTicket,
    result: Result<ReferenceData, AppError>,
    sink: &dyn NotificationSink,
    translator: &dyn Translator,
) -> LoadOutcome {
    let outcome = dialog.finish_load(ticket, result);
    match &outcome {
        LoadOutcome::Ready => {}
        LoadOutcome::Failed(err) => report_error(err, sink, translator),
        LoadOutcome::Stale => tracing::debug!("Dropping reference data from a closed dialog"),
    }
    outcome
}

/// Attempt a save. A missing queue shows the validation toast and leaves
/// the dialog open; on success the outcome is returned for delivery.
pub fn attempt_save(
    dialog: &mut SelectionDialog,
    sink: &dyn NotificationSink,
    translator: &dyn Translator,
) -> Option<SaveOutcome> {
    match dialog.save() {
        Ok(outcome) => {
            tracing::info!(outcome = ?outcome, "Ticket node selection saved");
            Some(outcome)
        }
        Err(SelectionError::MissingQueue) => {
            sink.error(translator.t(QUEUE_REQUIRED_KEY));
            None
        }
        Err(SelectionError::NotReady) => {
            tracing::debug!("Save ignored while the dialog is not ready");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow_builder::ticket_modal::state::{DialogMode, DialogPhase};
    use crate::services::testing::{RecordingSink, StubClient};
    use crate::services::{fetch_reference_data, Catalog};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use shared_types::{EditPayload, Queue, TicketAttachment, User};

    fn open_with(
        dialog: &mut SelectionDialog,
        mode: DialogMode,
        client: &StubClient,
        sink: &RecordingSink,
    ) -> LoadOutcome {
        let ticket = dialog.open(mode).unwrap();
        let result = block_on(fetch_reference_data(client));
        apply_load(dialog, ticket, result, sink, &Catalog::default())
    }

    #[test]
    fn create_flow_delivers_selected_pair() {
        let client = StubClient::ok(vec![Queue::new(1, "Sales")], vec![User::new(9, "Alice")]);
        let sink = RecordingSink::default();
        let mut dialog = SelectionDialog::new();

        assert_eq!(open_with(&mut dialog, DialogMode::Create, &client, &sink), LoadOutcome::Ready);
        dialog.select_queue(Some(1));
        dialog.select_user(Some(9));

        let outcome = attempt_save(&mut dialog, &sink, &Catalog::default());
        assert_eq!(
            outcome,
            Some(SaveOutcome::Created {
                queue: Queue::new(1, "Sales"),
                user: Some(User::new(9, "Alice")),
            })
        );
        assert!(sink.errors.borrow().is_empty());
    }

    #[test]
    fn save_without_queue_shows_required_message() {
        let client = StubClient::ok(vec![Queue::new(1, "Sales")], vec![]);
        let sink = RecordingSink::default();
        let mut dialog = SelectionDialog::new();
        open_with(&mut dialog, DialogMode::Create, &client, &sink);

        assert_eq!(attempt_save(&mut dialog, &sink, &Catalog::default()), None);
        assert_eq!(*sink.errors.borrow(), vec!["Adicione uma fila".to_string()]);
        assert_eq!(dialog.phase(), DialogPhase::Ready);
    }

    #[test]
    fn failed_load_notifies_and_stays_hidden() {
        let client = StubClient {
            queues: None,
            users: Some(vec![]),
            ..Default::default()
        };
        let sink = RecordingSink::default();
        let mut dialog = SelectionDialog::new();

        let outcome = open_with(&mut dialog, DialogMode::Create, &client, &sink);
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert!(!dialog.is_visible());
        assert_eq!(
            *sink.errors.borrow(),
            vec!["Ocorreu um erro, tente novamente.".to_string()]
        );
    }

    #[test]
    fn cancel_after_ready_delivers_nothing() {
        let client = StubClient::ok(vec![Queue::new(1, "Sales")], vec![User::new(9, "Alice")]);
        let sink = RecordingSink::default();
        let mut dialog = SelectionDialog::new();
        open_with(&mut dialog, DialogMode::Create, &client, &sink);
        assert!(dialog.select_queue(Some(1)));

        dialog.cancel();

        assert_eq!(attempt_save(&mut dialog, &sink, &Catalog::default()), None);
        assert!(!dialog.is_visible());
        assert_eq!(dialog.phase(), DialogPhase::Closed);
        assert!(sink.errors.borrow().is_empty());
        assert!(sink.successes.borrow().is_empty());
    }

    #[test]
    fn stale_failure_is_silent() {
        let sink = RecordingSink::default();
        let mut dialog = SelectionDialog::new();
        let ticket = dialog.open(DialogMode::Create).unwrap();
        dialog.cancel();

        let outcome = apply_load(
            &mut dialog,
            ticket,
            Err(AppError::unavailable("late")),
            &sink,
            &Catalog::default(),
        );
        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(sink.errors.borrow().is_empty());
    }

    #[test]
    fn edit_flow_preselects_and_updates() {
        let client = StubClient::ok(
            vec![Queue::new(1, "Sales"), Queue::new(2, "Support")],
            vec![User::new(9, "Alice")],
        );
        let sink = RecordingSink::default();
        let mut dialog = SelectionDialog::new();
        let payload = EditPayload::ticket(
            "node-3",
            TicketAttachment {
                queue: Some(Queue::new(1, "Sales")),
                user: Some(User::new(9, "Alice")),
            },
        );

        open_with(&mut dialog, DialogMode::Edit(payload.clone()), &client, &sink);
        assert_eq!(dialog.selection().queue_id, Some(1));
        assert_eq!(dialog.selection().user_id, Some(9));

        dialog.select_queue(Some(2));
        let Some(SaveOutcome::Updated(updated)) =
            attempt_save(&mut dialog, &sink, &Catalog::default())
        else {
            panic!("expected an update");
        };
        assert_eq!(updated.id, "node-3");
        assert_eq!(updated.data.queue, Some(Queue::new(2, "Support")));
        assert_eq!(updated.data.user, Some(User::new(9, "Alice")));
    }
}
