// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::CatalogError;
use crate::ids::*;

/// Something the filter engine can match a query against.
pub trait Searchable {
    fn label(&self) -> &str;

    /// Extra field a screen also matches on, such as a company's industry.
    fn secondary_label(&self) -> Option<&str> {
        None
    }
}

/// A keyed entry of a [`crate::RecordCollection`].
pub trait Record {
    fn record_id(&self) -> &RecordId;
    fn title(&self) -> &str;
    fn subtitle(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerKind {
    Skills,
    Companies,
    Languages,
    Schools,
}

impl PickerKind {
    pub const ALL: [Self; 4] = [Self::Skills, Self::Companies, Self::Languages, Self::Schools];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Companies => "companies",
            Self::Languages => "languages",
            Self::Schools => "schools",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "skills" => Some(Self::Skills),
            "companies" => Some(Self::Companies),
            "languages" => Some(Self::Languages),
            "schools" => Some(Self::Schools),
            _ => None,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Skills => "Add Skill",
            Self::Companies => "Company",
            Self::Languages => "Add Language",
            Self::Schools => "Level of Education",
        }
    }

    pub const fn noun(self) -> &'static str {
        match self {
            Self::Skills => "skill",
            Self::Companies => "company",
            Self::Languages => "language",
            Self::Schools => "school",
        }
    }

    /// Multi-choice pickers accumulate a selection; the rest hand back one item.
    pub const fn choice(self) -> PickerChoice {
        match self {
            Self::Skills => PickerChoice::Multiple,
            Self::Companies | Self::Languages | Self::Schools => PickerChoice::Single,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerChoice {
    Single,
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemMeta {
    Skill { category: String },
    Company { industry: String, location: String },
    Language { native_name: String },
    School { city: String },
}

impl ItemMeta {
    pub const fn picker_kind(&self) -> PickerKind {
        match self {
            Self::Skill { .. } => PickerKind::Skills,
            Self::Company { .. } => PickerKind::Companies,
            Self::Language { .. } => PickerKind::Languages,
            Self::School { .. } => PickerKind::Schools,
        }
    }

    fn secondary(&self) -> Option<&str> {
        match self {
            Self::Skill { .. } => None,
            Self::Company { industry, .. } => Some(industry.as_str()),
            Self::Language { .. } => None,
            Self::School { .. } => None,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Skill { category } if !category.is_empty() => Some(category.clone()),
            Self::Company { industry, location } => Some(if location.is_empty() {
                industry.clone()
            } else {
                format!("{industry} · {location}")
            }),
            Self::Language { native_name } if !native_name.is_empty() => {
                Some(native_name.clone())
            }
            Self::School { city } if !city.is_empty() => Some(city.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub meta: ItemMeta,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        label: impl Into<String>,
        meta: ItemMeta,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        let label = label.into();
        if id.as_str().trim().is_empty() {
            return Err(CatalogError::BlankId);
        }
        if label.trim().is_empty() {
            return Err(CatalogError::BlankLabel { id });
        }
        Ok(Self { id, label, meta })
    }

    pub fn skill(id: &str, label: &str, category: &str) -> Result<Self, CatalogError> {
        Self::new(
            id,
            label,
            ItemMeta::Skill {
                category: category.to_owned(),
            },
        )
    }

    pub fn company(
        id: &str,
        label: &str,
        industry: &str,
        location: &str,
    ) -> Result<Self, CatalogError> {
        Self::new(
            id,
            label,
            ItemMeta::Company {
                industry: industry.to_owned(),
                location: location.to_owned(),
            },
        )
    }

    pub fn language(id: &str, label: &str, native_name: &str) -> Result<Self, CatalogError> {
        Self::new(
            id,
            label,
            ItemMeta::Language {
                native_name: native_name.to_owned(),
            },
        )
    }

    pub fn school(id: &str, label: &str, city: &str) -> Result<Self, CatalogError> {
        Self::new(
            id,
            label,
            ItemMeta::School {
                city: city.to_owned(),
            },
        )
    }

    pub fn detail(&self) -> Option<String> {
        self.meta.detail()
    }
}

impl Searchable for Item {
    fn label(&self) -> &str {
        &self.label
    }

    fn secondary_label(&self) -> Option<&str> {
        self.meta.secondary()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Native,
}

impl Proficiency {
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Native,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Native => "native",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "native" => Some(Self::Native),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedJob {
    pub id: RecordId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_per_month: Option<u32>,
    pub employment_type: String,
    pub posted_on: Date,
}

impl Record for SavedJob {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> String {
        match self.salary_per_month {
            Some(salary) => format!("{} · {} · ${salary}/Mo", self.company, self.location),
            None => format!("{} · {}", self.company, self.location),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub id: RecordId,
    pub language: String,
    pub oral: Proficiency,
    pub written: Proficiency,
    pub first_language: bool,
}

impl Record for LanguageRecord {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.language
    }

    fn subtitle(&self) -> String {
        if self.first_language {
            return "First language".to_owned();
        }
        format!(
            "Oral: {} · Written: {}",
            self.oral.as_str(),
            self.written.as_str()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    ApplicationUpdate,
    ProfileView,
    JobAlert,
    Message,
}

impl NotificationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApplicationUpdate => "application_update",
            Self::ProfileView => "profile_view",
            Self::JobAlert => "job_alert",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub received_at: OffsetDateTime,
}

impl Record for Notification {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> String {
        self.body.clone()
    }
}
