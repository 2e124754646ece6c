use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

/// A routing queue conversations can be transferred to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Queue {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An operator that can be assigned to a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub users: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

impl Queue {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
        }
    }
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
        }
    }
}

/// Look up a queue by id.
pub fn find_queue(queues: &[Queue], id: i64) -> Option<&Queue> {
    queues.iter().find(|q| q.id == id)
}

/// Look up a user by id.
pub fn find_user(users: &[User], id: i64) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

// ---------------------------------------------------------------------------
// Flow nodes
// ---------------------------------------------------------------------------

pub const TICKET_NODE_TYPE: &str = "ticket";

/// The queue/user pair stored in a ticket node's `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TicketAttachment {
    #[serde(default)]
    pub queue: Option<Queue>,
    #[serde(default)]
    pub user: Option<User>,
}

/// A ticket node as handed to the selection dialog for editing.
///
/// Fields the dialog does not know about are kept in `extra` and
/// written back untouched; only `data` is ever replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditPayload {
    pub id: String,
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<NodePosition>,
    #[serde(default)]
    pub data: TicketAttachment,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

fn default_node_type() -> String {
    TICKET_NODE_TYPE.to_string()
}

impl EditPayload {
    /// A fresh ticket node carrying `data`.
    pub fn ticket(id: impl Into<String>, data: TicketAttachment) -> Self {
        Self {
            id: id.into(),
            node_type: default_node_type(),
            position: None,
            data,
            extra: serde_json::Map::new(),
        }
    }

    /// Id of the queue currently attached to the node.
    pub fn queue_id(&self) -> Option<i64> {
        self.data.queue.as_ref().map(|q| q.id)
    }

    /// Id of the user currently attached to the node.
    pub fn user_id(&self) -> Option<i64> {
        self.data.user.as_ref().map(|u| u.id)
    }

    /// Copy of this payload with `data` replaced.
    pub fn with_attachment(&self, data: TicketAttachment) -> Self {
        Self {
            data,
            ..self.clone()
        }
    }
}
