//! Dialog that attaches a queue (and optionally an agent) to a ticket node.

pub mod actions;
pub mod state;

use dioxus::prelude::*;
use shared_types::{EditPayload, Queue, User};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogActions, DialogBody, DialogContent, DialogRoot,
    DialogTitle, FormSelect,
};

use crate::services::{fetch_reference_data, use_services, ToastNotifier};
use actions::{apply_load, attempt_save};
pub use state::{DialogMode, LoadOutcome, SaveOutcome, SelectionDialog};

/// Parse a `<select>` value into an entity id. The empty placeholder
/// option maps to `None`.
fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

fn id_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Cancel path: drop everything and tell the parent, with no result.
fn dismiss(mut dialog: Signal<SelectionDialog>, on_close: EventHandler<()>) {
    dialog.write().cancel();
    on_close.call(());
}

/// Queue/agent picker for ticket nodes.
///
/// Reference data is fetched each time `mode` switches to `Create` or
/// `Edit`; the dialog shows up once both lists have arrived.
#[component]
pub fn TicketModal(
    mode: DialogMode,
    on_create: EventHandler<(Queue, Option<User>)>,
    on_update: EventHandler<EditPayload>,
    on_close: EventHandler<()>,
) -> Element {
    let services = use_services();
    let toast = use_toast();
    let mut dialog = use_signal(SelectionDialog::new);

    let loader = services.clone();
    use_effect(use_reactive!(|(mode,)| {
        let Some(ticket) = dialog.write().open(mode) else {
            return;
        };
        let services = loader.clone();
        spawn(async move {
            let result = fetch_reference_data(services.reference_data.as_ref()).await;
            let outcome = apply_load(
                &mut dialog.write(),
                ticket,
                result,
                &ToastNotifier::new(toast),
                services.translator.as_ref(),
            );
            // Hand the mode back so the same mode can be requested again.
            if matches!(outcome, LoadOutcome::Failed(_)) {
                on_close.call(());
            }
        });
    }));

    let translator = services.translator.clone();
    let handle_save = move |_: MouseEvent| {
        let outcome = attempt_save(
            &mut dialog.write(),
            &ToastNotifier::new(toast),
            translator.as_ref(),
        );
        let Some(outcome) = outcome else {
            return;
        };
        match outcome {
            SaveOutcome::Created { queue, user } => on_create.call((queue, user)),
            SaveOutcome::Updated(payload) => on_update.call(payload),
        }
        dialog.write().close();
        on_close.call(());
    };

    let t = services.translator.as_ref();
    let (visible, editing, saving, selection, queues, users) = {
        let state = dialog.read();
        (
            state.is_visible(),
            state.mode().is_edit(),
            state.phase() == state::DialogPhase::Saving,
            state.selection(),
            state.queues().to_vec(),
            state.users().to_vec(),
        )
    };

    let title = if editing {
        t.t("flowBuilder.ticketModal.title.edit")
    } else {
        t.t("flowBuilder.ticketModal.title.create")
    };
    let confirm_label = if editing {
        t.t("flowBuilder.ticketModal.buttons.edit")
    } else {
        t.t("flowBuilder.ticketModal.buttons.add")
    };
    let cancel_label = t.t("contactModal.buttons.cancel");

    rsx! {
        DialogRoot {
            open: visible,
            on_open_change: move |open: bool| {
                if !open {
                    dismiss(dialog, on_close);
                }
            },
            DialogContent {
                DialogTitle { "{title}" }
                DialogBody {
                    div { class: "ticket-modal-field",
                        FormSelect {
                            id: "queue-select",
                            label: t.t("flowBuilder.ticketModal.queuePrompt"),
                            placeholder: t.t("flowBuilder.ticketModal.queuePlaceholder"),
                            value: id_value(selection.queue_id),
                            onchange: move |e: Event<FormData>| {
                                dialog.write().select_queue(parse_id(&e.value()));
                            },
                            for queue in queues.iter() {
                                option {
                                    key: "{queue.id}",
                                    value: "{queue.id}",
                                    selected: selection.queue_id == Some(queue.id),
                                    "{queue.name}"
                                }
                            }
                        }
                    }
                    div { class: "ticket-modal-field",
                        FormSelect {
                            id: "user-select",
                            label: t.t("flowBuilder.ticketModal.userPrompt"),
                            placeholder: t.t("flowBuilder.ticketModal.userPlaceholder"),
                            value: id_value(selection.user_id),
                            onchange: move |e: Event<FormData>| {
                                dialog.write().select_user(parse_id(&e.value()));
                            },
                            for user in users.iter() {
                                option {
                                    key: "{user.id}",
                                    value: "{user.id}",
                                    selected: selection.user_id == Some(user.id),
                                    "{user.name}"
                                }
                            }
                        }
                    }
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| dismiss(dialog, on_close),
                        "{cancel_label}"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        loading: saving,
                        onclick: handle_save,
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_handles_placeholder_and_numbers() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn id_value_is_empty_when_unset() {
        assert_eq!(id_value(None), "");
        assert_eq!(id_value(Some(3)), "3");
    }
}
