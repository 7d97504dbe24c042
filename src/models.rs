//! Domain Models
//! Mission: Define the product and task records and their request payloads

use crate::store::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stocked product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
}

/// Caller-supplied product fields (everything but the id).
///
/// Absent fields default rather than reject; the dashboard sends whatever the
/// form holds, empty inputs included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    pub fn new(id: u64, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            quantity: fields.quantity,
            price: fields.price,
        }
    }

    /// Full replace of every mutable field; the id stays put.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.quantity = fields.quantity;
        self.price = fields.price;
    }
}

impl Record for Product {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Task workflow state, as the dashboard spells it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Task priority levels
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskPriority {
    #[default]
    Low,
    Medium,
    High,
    Urgent,
}

/// A tracked task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Caller-supplied task fields (everything but id and timestamps).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to: String,
}

impl Task {
    /// Build a task, stamping both timestamps from a single clock reading.
    pub fn new(id: u64, fields: TaskFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            due_date: fields.due_date,
            assigned_to: fields.assigned_to,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of every mutable field; `id` and `created_at` are
    /// immutable, `updated_at` is refreshed.
    pub fn apply(&mut self, fields: TaskFields, now: DateTime<Utc>) {
        self.title = fields.title;
        self.description = fields.description;
        self.status = fields.status;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
        self.assigned_to = fields.assigned_to;
        self.updated_at = now;
    }
}
