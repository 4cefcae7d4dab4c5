// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

/// A document handed back by the device file picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileRef {
    pub fn size_label(&self) -> String {
        const KIB: u64 = 1024;
        const MIB: u64 = KIB * 1024;
        match self.size_bytes {
            bytes if bytes >= MIB => format!("{:.1} MB", bytes as f64 / MIB as f64),
            bytes if bytes >= KIB => format!("{} KB", bytes / KIB),
            bytes => format!("{bytes} B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("document picking was cancelled")]
pub struct Cancelled;

pub trait DocumentPicker {
    fn pick_document(&mut self) -> Result<FileRef, Cancelled>;
}

pub trait DatePicker {
    fn pick_date(&mut self, initial: Date) -> Date;
}
