use dioxus::prelude::*;
use shared_types::{EditPayload, NodePosition, Queue, TicketAttachment, User};
use shared_ui::{use_toast, Button, ButtonVariant};

use super::ticket_modal::{DialogMode, TicketModal};
use crate::services::{use_services, NotificationSink, ToastNotifier};

const NODE_SPACING: f64 = 140.0;

/// Build the node for a freshly created ticket step, placed below the
/// existing ones.
fn new_ticket_node(
    existing: &[EditPayload],
    seq: u64,
    queue: Queue,
    user: Option<User>,
) -> EditPayload {
    let mut node = EditPayload::ticket(
        format!("ticket-{seq}"),
        TicketAttachment {
            queue: Some(queue),
            user,
        },
    );
    node.position = Some(NodePosition {
        x: 0.0,
        y: existing.len() as f64 * NODE_SPACING,
    });
    node
}

/// Replace the node with the same id. Returns `false` if it is gone.
fn replace_node(nodes: &mut [EditPayload], updated: EditPayload) -> bool {
    match nodes.iter_mut().find(|n| n.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Minimal flow editor: a list of ticket nodes, each opening the ticket
/// dialog for editing.
#[component]
pub fn FlowBuilder() -> Element {
    let services = use_services();
    let toast = use_toast();
    let mut nodes: Signal<Vec<EditPayload>> = use_signal(Vec::new);
    let mut mode = use_signal(|| DialogMode::Closed);
    let mut seq = use_signal(|| 1u64);

    let translator = services.translator.clone();
    let saved_message = translator.t("flowBuilder.page.saved");
    let created_message = saved_message.clone();

    let handle_create = move |(queue, user): (Queue, Option<User>)| {
        let id = *seq.read();
        seq.set(id + 1);
        let node = new_ticket_node(&nodes.read(), id, queue, user);
        tracing::info!(node = %node.id, "Ticket node added");
        nodes.write().push(node);
        ToastNotifier::new(toast).success(created_message.clone());
    };

    let handle_update = move |updated: EditPayload| {
        let id = updated.id.clone();
        if replace_node(&mut nodes.write(), updated) {
            ToastNotifier::new(toast).success(saved_message.clone());
        } else {
            tracing::warn!(node = %id, "Edited node no longer exists");
        }
    };

    let t = translator.as_ref();
    let title = t.t("flowBuilder.page.title");
    let add_label = t.t("flowBuilder.page.addTicket");
    let empty_label = t.t("flowBuilder.page.empty");
    let no_user = t.t("flowBuilder.page.noUser");
    let edit_label = t.t("flowBuilder.page.edit");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./page.css") }
        div { class: "flow-builder-page",
            header { class: "flow-builder-header",
                h1 { "{title}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| mode.set(DialogMode::Create),
                    "{add_label}"
                }
            }

            if nodes.read().is_empty() {
                p { class: "flow-builder-empty", "{empty_label}" }
            } else {
                ul { class: "flow-builder-nodes",
                    for node in nodes.read().iter().cloned() {
                        li { key: "{node.id}", class: "flow-builder-node",
                            div { class: "flow-builder-node-info",
                                span { class: "flow-builder-node-queue",
                                    {node.data.queue.as_ref().map(|q| q.name.clone()).unwrap_or_default()}
                                }
                                span { class: "flow-builder-node-user",
                                    {node.data.user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| no_user.clone())}
                                }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: {
                                    let node = node.clone();
                                    move |_| mode.set(DialogMode::Edit(node.clone()))
                                },
                                "{edit_label}"
                            }
                        }
                    }
                }
            }
        }

        TicketModal {
            mode: mode.read().clone(),
            on_create: handle_create,
            on_update: handle_update,
            on_close: move |_| mode.set(DialogMode::Closed),
        }
    }
}
