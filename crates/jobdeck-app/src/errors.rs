// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;
use thiserror::Error;

use crate::{ItemId, RecordId};

/// Rejected seed data. Seeds come from static catalogs, so this points at a
/// broken catalog rather than at user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog item has a blank id")]
    BlankId,
    #[error("catalog item {id} has a blank label")]
    BlankLabel { id: ItemId },
    #[error("catalog item id {id} appears more than once")]
    DuplicateItem { id: ItemId },
    #[error("record id {id} appears more than once")]
    DuplicateRecord { id: RecordId },
}

/// Save-time problems shown to the user as an advisory dialog. The save is
/// blocked and screen state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    #[error("no {what} selected -- pick at least one and save again")]
    NothingSelected { what: &'static str },
    #[error("{field} is required -- fill it in and save again")]
    Required { field: &'static str },
    #[error("no resume uploaded -- upload a resume and submit again")]
    ResumeMissing,
    #[error("resume {file_name} is {size_bytes} bytes; the limit is {limit_bytes} bytes")]
    ResumeTooLarge {
        file_name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },
    #[error("{what} end date must be on/after the start date")]
    DateRange { what: &'static str },
}

impl ValidationError {
    /// Dialog title the UI layer shows above the message.
    pub const fn dialog_title(&self) -> &'static str {
        match self {
            Self::NothingSelected { .. } | Self::Required { .. } => "Missing information",
            Self::ResumeMissing | Self::ResumeTooLarge { .. } => "Resume",
            Self::DateRange { .. } => "Check the dates",
        }
    }
}
