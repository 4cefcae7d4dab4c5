// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Stateless projection from screen state to rows the renderer draws.
//!
//! Nothing here owns state or touches the renderer. Row handlers are named
//! [`ListAction`] values the renderer hands back on tap, so equal inputs always
//! project to equal views.

use serde::Serialize;
use time::Date;

use crate::filter::filter;
use crate::{
    Item, ItemId, Notification, PickerChoice, PickerKind, Record, RecordCollection, RecordId,
    SelectionSet,
};

const DEFAULT_NO_RESULTS: &str = "No results found";
const DEFAULT_NO_RECORDS: &str = "Nothing here yet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ListAction<Id> {
    Activate(Id),
    Deselect(Id),
    Delete(Id),
    DeleteAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow<Id> {
    pub id: Id,
    pub label: String,
    pub detail: Option<String>,
    /// `None` on lists where selection has no meaning.
    pub selected: Option<bool>,
    pub on_activate: ListAction<Id>,
    pub on_delete: Option<ListAction<Id>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub id: ItemId,
    pub label: String,
    pub on_remove: ListAction<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub title: &'static str,
    pub query: String,
    pub rows: Vec<ListRow<ItemId>>,
    pub chips: Vec<Chip>,
    pub empty_state: Option<String>,
    pub can_save: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSection {
    pub heading: Option<String>,
    pub rows: Vec<ListRow<RecordId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordListView {
    pub title: String,
    pub sections: Vec<RecordSection>,
    pub empty_state: Option<String>,
    pub on_delete_all: Option<ListAction<RecordId>>,
}

impl RecordListView {
    pub fn rows(&self) -> impl Iterator<Item = &ListRow<RecordId>> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateMessages {
    pub no_results: String,
    pub no_records: String,
}

impl Default for EmptyStateMessages {
    fn default() -> Self {
        Self {
            no_results: DEFAULT_NO_RESULTS.to_owned(),
            no_records: DEFAULT_NO_RECORDS.to_owned(),
        }
    }
}

pub fn project_picker(
    kind: PickerKind,
    source: &[Item],
    query: &str,
    selection: &SelectionSet,
    messages: &EmptyStateMessages,
) -> PickerView {
    let multiple = kind.choice() == PickerChoice::Multiple;
    let rows: Vec<ListRow<ItemId>> = filter(source, query)
        .into_iter()
        .map(|item| {
            let detail = item.detail();
            let selected = multiple.then(|| selection.contains(item.id.as_str()));
            let on_activate = if selected == Some(true) {
                ListAction::Deselect(item.id.clone())
            } else {
                ListAction::Activate(item.id.clone())
            };
            ListRow {
                id: item.id,
                label: item.label,
                detail,
                selected,
                on_activate,
                on_delete: None,
            }
        })
        .collect();

    let chips = if multiple {
        selection
            .iter()
            .map(|id| Chip {
                id: id.clone(),
                label: chip_label(source, id),
                on_remove: ListAction::Deselect(id.clone()),
            })
            .collect()
    } else {
        Vec::new()
    };

    let empty_state = rows.is_empty().then(|| messages.no_results.clone());
    PickerView {
        title: kind.title(),
        query: query.to_owned(),
        rows,
        chips,
        empty_state,
        can_save: multiple && !selection.is_empty(),
    }
}

// A selected id can outlive its item in the source; show the raw id then.
fn chip_label(source: &[Item], id: &ItemId) -> String {
    source
        .iter()
        .find(|item| &item.id == id)
        .map_or_else(|| id.to_string(), |item| item.label.clone())
}

pub fn project_records<R: Record + Clone>(
    title: &str,
    records: &RecordCollection<R>,
    messages: &EmptyStateMessages,
) -> RecordListView {
    let rows: Vec<_> = records.iter().map(record_row).collect();
    finish_record_view(
        title,
        vec![RecordSection {
            heading: None,
            rows,
        }],
        messages,
    )
}

/// Splits notifications into "Today" and "Earlier" relative to `today`.
pub fn project_notifications(
    records: &RecordCollection<Notification>,
    today: Date,
    messages: &EmptyStateMessages,
) -> RecordListView {
    let (recent, earlier): (Vec<&Notification>, Vec<&Notification>) = records
        .iter()
        .partition(|notification| notification.received_at.date() >= today);

    let sections = [("Today", recent), ("Earlier", earlier)]
        .into_iter()
        .filter(|(_, group)| !group.is_empty())
        .map(|(heading, group)| RecordSection {
            heading: Some(heading.to_owned()),
            rows: group.into_iter().map(record_row).collect(),
        })
        .collect();

    finish_record_view("Notifications", sections, messages)
}

fn record_row<R: Record>(record: &R) -> ListRow<RecordId> {
    let id = record.record_id().clone();
    ListRow {
        label: record.title().to_owned(),
        detail: Some(record.subtitle()),
        selected: None,
        on_activate: ListAction::Activate(id.clone()),
        on_delete: Some(ListAction::Delete(id.clone())),
        id,
    }
}

fn finish_record_view(
    title: &str,
    mut sections: Vec<RecordSection>,
    messages: &EmptyStateMessages,
) -> RecordListView {
    sections.retain(|section| !section.rows.is_empty());
    let empty = sections.is_empty();
    RecordListView {
        title: title.to_owned(),
        sections,
        empty_state: empty.then(|| messages.no_records.clone()),
        on_delete_all: (!empty).then_some(ListAction::DeleteAll),
    }
}
