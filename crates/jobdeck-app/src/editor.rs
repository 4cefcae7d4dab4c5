// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::{
    ApplicationFormInput, Cancelled, DateField, DatePicker, DocumentPicker, FileRef, FormKind,
    FormPayload, Item, ItemMeta, Record, SavedJob, ValidationError,
};

pub const DEFAULT_MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Education, work experience and language editors on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    payload: FormPayload,
}

impl ProfileEditor {
    pub fn open(kind: FormKind) -> Option<Self> {
        FormPayload::blank_for(kind).map(|payload| Self { payload })
    }

    pub fn edit(payload: FormPayload) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &FormPayload {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut FormPayload {
        &mut self.payload
    }

    /// Opens the date picker on `field`, starting from its current value or
    /// `fallback`, and stores the result.
    pub fn pick_date<P: DatePicker>(
        &mut self,
        field: DateField,
        picker: &mut P,
        fallback: Date,
    ) -> Option<Date> {
        let initial = self.payload.date(field).unwrap_or(fallback);
        let picked = picker.pick_date(initial);
        if self.payload.set_date(field, picked) {
            Some(picked)
        } else {
            None
        }
    }

    pub fn set_currently_working(&mut self, working: bool) {
        if let FormPayload::WorkExperience(work) = &mut self.payload {
            work.currently_working = working;
            if working {
                work.end_date = None;
            }
        }
    }

    /// Copies an item chosen in a single-choice picker into the form. Items
    /// from a picker that does not feed this form are ignored.
    pub fn apply_pick(&mut self, item: &Item) -> bool {
        match (&mut self.payload, &item.meta) {
            (FormPayload::Education(education), ItemMeta::School { .. }) => {
                education.school = Some(item.id.clone());
                education.school_name = item.label.clone();
            }
            (FormPayload::WorkExperience(work), ItemMeta::Company { .. }) => {
                work.company = Some(item.id.clone());
                work.company_name = item.label.clone();
            }
            (FormPayload::Language(language), ItemMeta::Language { .. }) => {
                language.language = Some(item.id.clone());
                language.language_name = item.label.clone();
            }
            _ => return false,
        }
        debug!(id = %item.id, "picker result applied to form");
        true
    }

    pub fn save(&self) -> Result<FormPayload, ValidationError> {
        self.payload.validate()?;
        info!(kind = ?self.payload.kind(), "profile form saved");
        Ok(self.payload.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ApplicationEvent {
    ResumeAttached(FileRef),
    ResumeRemoved,
    UploadCancelled,
    UploadRejected(ValidationError),
    Submitted(ApplicationFormInput),
    ValidationFailed(ValidationError),
    AlreadySubmitted(OffsetDateTime),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeView {
    pub file_name: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationView {
    pub job_title: String,
    pub job_summary: String,
    pub resume: Option<ResumeView>,
    pub cover_letter: String,
    pub can_submit: bool,
    pub submitted: bool,
}

/// Review screen shown before applying to a saved job.
#[derive(Debug, Clone)]
pub struct ApplicationScreen {
    job: SavedJob,
    form: ApplicationFormInput,
    max_resume_bytes: u64,
    submitted_at: Option<OffsetDateTime>,
}

impl ApplicationScreen {
    pub fn new(job: SavedJob, max_resume_bytes: u64) -> Self {
        let form = ApplicationFormInput {
            job_id: job.id.clone(),
            resume: None,
            cover_letter: String::new(),
        };
        Self {
            job,
            form,
            max_resume_bytes,
            submitted_at: None,
        }
    }

    pub fn form(&self) -> &ApplicationFormInput {
        &self.form
    }

    pub fn submitted_at(&self) -> Option<OffsetDateTime> {
        self.submitted_at
    }

    /// Once submitted, the form is frozen. The picker is not opened.
    pub fn upload_resume<P: DocumentPicker>(&mut self, picker: &mut P) -> ApplicationEvent {
        if let Some(at) = self.submitted_at {
            return ApplicationEvent::AlreadySubmitted(at);
        }
        let file = match picker.pick_document() {
            Ok(file) => file,
            Err(Cancelled) => {
                debug!("resume upload cancelled");
                return ApplicationEvent::UploadCancelled;
            }
        };
        if file.size_bytes > self.max_resume_bytes {
            return ApplicationEvent::UploadRejected(ValidationError::ResumeTooLarge {
                file_name: file.file_name,
                size_bytes: file.size_bytes,
                limit_bytes: self.max_resume_bytes,
            });
        }
        debug!(file = %file.file_name, size = file.size_bytes, "resume attached");
        self.form.resume = Some(file.clone());
        ApplicationEvent::ResumeAttached(file)
    }

    pub fn remove_resume(&mut self) -> Option<ApplicationEvent> {
        if let Some(at) = self.submitted_at {
            return Some(ApplicationEvent::AlreadySubmitted(at));
        }
        self.form.resume.take().map(|_| ApplicationEvent::ResumeRemoved)
    }

    /// Returns false when the application was already sent.
    pub fn set_cover_letter(&mut self, text: impl Into<String>) -> bool {
        if self.submitted_at.is_some() {
            return false;
        }
        self.form.cover_letter = text.into();
        true
    }

    pub fn submit(&mut self, now: OffsetDateTime) -> ApplicationEvent {
        if let Some(at) = self.submitted_at {
            debug!(job = %self.job.id, "application already submitted");
            return ApplicationEvent::AlreadySubmitted(at);
        }
        if let Err(error) = self.form.validate() {
            return ApplicationEvent::ValidationFailed(error);
        }
        self.submitted_at = Some(now);
        info!(job = %self.job.id, "application submitted");
        ApplicationEvent::Submitted(self.form.clone())
    }

    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            job_title: self.job.title().to_owned(),
            job_summary: self.job.subtitle(),
            resume: self.form.resume.as_ref().map(|file| ResumeView {
                file_name: file.file_name.clone(),
                size: file.size_label(),
            }),
            cover_letter: self.form.cover_letter.clone(),
            can_submit: self.form.resume.is_some() && self.submitted_at.is_none(),
            submitted: self.submitted_at.is_some(),
        }
    }
}
