// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;
use time::Date;
use tracing::{debug, info};

use crate::presentation::{
    EmptyStateMessages, PickerView, RecordListView, project_notifications, project_picker,
    project_records,
};
use crate::{
    CatalogError, Item, ItemId, Notification, PickerChoice, PickerKind, Record, RecordCollection,
    RecordId, SelectionSet, ValidationError, catalog,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    pub clear_query_on_select: bool,
    pub messages: EmptyStateMessages,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            clear_query_on_select: true,
            messages: EmptyStateMessages::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScreenStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCommand {
    SetQuery(String),
    Activate(ItemId),
    Deselect(ItemId),
    ClearSelection,
    Save,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PickerEvent {
    QueryChanged(String),
    Selected(ItemId),
    Deselected(ItemId),
    SelectionCleared,
    /// Single-choice pickers close with the tapped item.
    Picked(Item),
    Committed(Vec<ItemId>),
    ValidationFailed(ValidationError),
    Dismissed,
}

/// Controller for the skill, company, language and school pickers.
#[derive(Debug, Clone)]
pub struct PickerScreen {
    kind: PickerKind,
    source: Vec<Item>,
    query: String,
    selection: SelectionSet,
    options: ScreenOptions,
    status: ScreenStatus,
}

impl PickerScreen {
    pub fn new(
        kind: PickerKind,
        source: Vec<Item>,
        options: ScreenOptions,
    ) -> Result<Self, CatalogError> {
        catalog::ensure_unique(&source)?;
        Ok(Self {
            kind,
            source,
            query: String::new(),
            selection: SelectionSet::new(),
            options,
            status: ScreenStatus::Open,
        })
    }

    /// Mounts the picker with its static catalog.
    pub fn mount(kind: PickerKind, options: ScreenOptions) -> Result<Self, CatalogError> {
        Self::new(kind, catalog::picker_items(kind)?, options)
    }

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn status(&self) -> ScreenStatus {
        self.status
    }

    pub fn view(&self) -> PickerView {
        project_picker(
            self.kind,
            &self.source,
            &self.query,
            &self.selection,
            &self.options.messages,
        )
    }

    pub fn dispatch(&mut self, command: PickerCommand) -> Vec<PickerEvent> {
        if self.status == ScreenStatus::Closed {
            return Vec::new();
        }

        match command {
            PickerCommand::SetQuery(query) => {
                if query == self.query {
                    return Vec::new();
                }
                self.query = query;
                vec![PickerEvent::QueryChanged(self.query.clone())]
            }
            PickerCommand::Activate(id) => self.activate(id),
            PickerCommand::Deselect(id) => {
                if self.selection.remove(id.as_str()) {
                    vec![PickerEvent::Deselected(id)]
                } else {
                    Vec::new()
                }
            }
            PickerCommand::ClearSelection => {
                if self.selection.is_empty() {
                    return Vec::new();
                }
                self.selection.clear();
                vec![PickerEvent::SelectionCleared]
            }
            PickerCommand::Save => self.save(),
            PickerCommand::Cancel => {
                self.selection.clear();
                self.status = ScreenStatus::Closed;
                vec![PickerEvent::Dismissed]
            }
        }
    }

    fn activate(&mut self, id: ItemId) -> Vec<PickerEvent> {
        let Some(item) = self.source.iter().find(|item| item.id == id) else {
            debug!(%id, picker = self.kind.as_str(), "ignoring tap on unknown item");
            return Vec::new();
        };

        match self.kind.choice() {
            PickerChoice::Single => {
                let item = item.clone();
                self.status = ScreenStatus::Closed;
                info!(id = %item.id, picker = self.kind.as_str(), "item picked");
                vec![PickerEvent::Picked(item)]
            }
            PickerChoice::Multiple => {
                if !self.selection.add(id.clone()) {
                    return Vec::new();
                }
                let mut events = vec![PickerEvent::Selected(id)];
                if self.options.clear_query_on_select && !self.query.is_empty() {
                    self.query.clear();
                    events.push(PickerEvent::QueryChanged(String::new()));
                }
                events
            }
        }
    }

    fn save(&mut self) -> Vec<PickerEvent> {
        if self.kind.choice() == PickerChoice::Single {
            return Vec::new();
        }
        if self.selection.is_empty() {
            return vec![PickerEvent::ValidationFailed(
                ValidationError::NothingSelected {
                    what: self.kind.noun(),
                },
            )];
        }

        let committed = std::mem::take(&mut self.selection).to_ordered_list();
        self.status = ScreenStatus::Closed;
        info!(
            count = committed.len(),
            picker = self.kind.as_str(),
            "selection committed"
        );
        vec![PickerEvent::Committed(committed)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PendingConfirmation {
    Delete(RecordId),
    DeleteAll,
}

/// What the UI layer shows in its alert before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCommand<R> {
    Open(RecordId),
    Add(R),
    RequestDelete(RecordId),
    RequestDeleteAll,
    Confirm,
    Cancel,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordEvent<R> {
    Opened(RecordId),
    Added(RecordId),
    ConfirmationRequested(ConfirmationPrompt),
    ConfirmationDismissed,
    Removed(R),
    Cleared(usize),
    Committed(Vec<R>),
}

/// Controller for saved jobs, notifications and the profile language list.
#[derive(Debug, Clone)]
pub struct RecordScreen<R> {
    title: String,
    noun: &'static str,
    records: RecordCollection<R>,
    pending: Option<PendingConfirmation>,
    messages: EmptyStateMessages,
}

impl<R: Record + Clone> RecordScreen<R> {
    pub fn new(
        title: impl Into<String>,
        noun: &'static str,
        records: RecordCollection<R>,
        messages: EmptyStateMessages,
    ) -> Self {
        Self {
            title: title.into(),
            noun,
            records,
            pending: None,
            messages,
        }
    }

    pub fn records(&self) -> &RecordCollection<R> {
        &self.records
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn view(&self) -> RecordListView {
        project_records(&self.title, &self.records, &self.messages)
    }

    pub fn dispatch(&mut self, command: RecordCommand<R>) -> Vec<RecordEvent<R>> {
        match command {
            RecordCommand::Open(id) => {
                if self.records.contains(id.as_str()) {
                    vec![RecordEvent::Opened(id)]
                } else {
                    Vec::new()
                }
            }
            RecordCommand::Add(record) => {
                let id = record.record_id().clone();
                if self.records.insert(record) {
                    vec![RecordEvent::Added(id)]
                } else {
                    Vec::new()
                }
            }
            RecordCommand::RequestDelete(id) => {
                let Some(record) = self.records.get(id.as_str()) else {
                    return Vec::new();
                };
                let prompt = ConfirmationPrompt {
                    title: format!("Remove {}", self.noun),
                    message: format!(
                        "Are you sure you want to remove \"{}\"?",
                        record.title()
                    ),
                    confirm_label: "Remove",
                    cancel_label: "Cancel",
                };
                self.pending = Some(PendingConfirmation::Delete(id));
                vec![RecordEvent::ConfirmationRequested(prompt)]
            }
            RecordCommand::RequestDeleteAll => {
                if self.records.is_empty() {
                    return Vec::new();
                }
                let prompt = ConfirmationPrompt {
                    title: "Delete all".to_owned(),
                    message: format!(
                        "Are you sure you want to delete all {} {}s? This cannot be undone.",
                        self.records.len(),
                        self.noun
                    ),
                    confirm_label: "Delete all",
                    cancel_label: "Cancel",
                };
                self.pending = Some(PendingConfirmation::DeleteAll);
                vec![RecordEvent::ConfirmationRequested(prompt)]
            }
            RecordCommand::Confirm => self.confirm(),
            RecordCommand::Cancel => {
                if self.pending.take().is_some() {
                    vec![RecordEvent::ConfirmationDismissed]
                } else {
                    Vec::new()
                }
            }
            RecordCommand::Save => {
                let committed = self.records.to_ordered_list();
                info!(count = committed.len(), screen = %self.title, "records committed");
                vec![RecordEvent::Committed(committed)]
            }
        }
    }

    fn confirm(&mut self) -> Vec<RecordEvent<R>> {
        match self.pending.take() {
            Some(PendingConfirmation::Delete(id)) => self
                .records
                .remove_by_id(id.as_str())
                .map(RecordEvent::Removed)
                .into_iter()
                .collect(),
            Some(PendingConfirmation::DeleteAll) => {
                vec![RecordEvent::Cleared(self.records.remove_all())]
            }
            None => Vec::new(),
        }
    }
}

impl RecordScreen<Notification> {
    pub fn grouped_view(&self, today: Date) -> RecordListView {
        project_notifications(&self.records, today, &self.messages)
    }
}
