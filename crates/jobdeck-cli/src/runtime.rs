// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobdeck_app::{
    ApplicationEvent, ApplicationScreen, ApplicationView, Cancelled, DocumentPicker, FileRef,
    ItemId, LanguageRecord, Notification, PickerCommand, PickerEvent, PickerKind, PickerScreen,
    PickerView, Record, RecordCommand, RecordEvent, RecordId, RecordListView, RecordScreen,
    SavedJob, ScreenStatus, catalog,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::io::{BufRead, Write};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Picker(PickerKind),
    SavedJobs,
    Notifications,
    LanguageRecords,
    Application,
}

impl ScreenKind {
    pub const NAMES: &'static str =
        "skills|companies|languages|schools|saved-jobs|notifications|language-records|application";

    pub fn parse(value: &str) -> Option<Self> {
        if let Some(kind) = PickerKind::parse(value) {
            return Some(Self::Picker(kind));
        }
        match value {
            "saved-jobs" => Some(Self::SavedJobs),
            "notifications" => Some(Self::Notifications),
            "language-records" => Some(Self::LanguageRecords),
            "application" => Some(Self::Application),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Picker(kind) => kind.as_str(),
            Self::SavedJobs => "saved-jobs",
            Self::Notifications => "notifications",
            Self::LanguageRecords => "language-records",
            Self::Application => "application",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One line of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Query(String),
    Pick(String),
    Unpick(String),
    Clear,
    Delete(String),
    DeleteAll,
    Confirm,
    Cancel,
    Upload,
    Letter(String),
    Save,
    Show,
}

impl SessionCommand {
    /// Blank lines and `#` comments parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name {
            "query" => Self::Query(rest.to_owned()),
            "pick" => Self::Pick(required_id(name, rest)?),
            "unpick" => Self::Unpick(required_id(name, rest)?),
            "clear" => Self::Clear,
            "delete" => Self::Delete(required_id(name, rest)?),
            "delete-all" => Self::DeleteAll,
            "confirm" => Self::Confirm,
            "cancel" => Self::Cancel,
            "upload" => Self::Upload,
            "letter" => Self::Letter(rest.to_owned()),
            "save" => Self::Save,
            "show" => Self::Show,
            unknown => bail!(
                "unknown command {unknown:?}; expected one of query, pick, unpick, clear, delete, delete-all, confirm, cancel, upload, letter, save, show"
            ),
        };
        Ok(Some(command))
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
            Self::Pick(_) => "pick",
            Self::Unpick(_) => "unpick",
            Self::Clear => "clear",
            Self::Delete(_) => "delete",
            Self::DeleteAll => "delete-all",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
            Self::Upload => "upload",
            Self::Letter(_) => "letter",
            Self::Save => "save",
            Self::Show => "show",
        }
    }
}

fn required_id(name: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("`{name}` needs an id, e.g. `{name} 2`");
    }
    Ok(rest.to_owned())
}

#[derive(Debug, Clone)]
pub enum Screen {
    Picker(PickerScreen),
    SavedJobs(RecordScreen<SavedJob>),
    Notifications(RecordScreen<Notification>),
    LanguageRecords(RecordScreen<LanguageRecord>),
    Application(ApplicationScreen),
}

impl Screen {
    /// Mounts `kind` with its catalog seed. `job_id` picks the saved job the
    /// application screen reviews; the first saved job is used otherwise.
    pub fn mount(
        kind: ScreenKind,
        config: &Config,
        now: OffsetDateTime,
        job_id: Option<&str>,
    ) -> Result<Self> {
        let messages = config.empty_state_messages();
        let screen = match kind {
            ScreenKind::Picker(kind) => {
                Self::Picker(PickerScreen::mount(kind, config.screen_options())?)
            }
            ScreenKind::SavedJobs => Self::SavedJobs(RecordScreen::new(
                "Save Job",
                "job",
                catalog::saved_jobs()?,
                messages,
            )),
            ScreenKind::Notifications => Self::Notifications(RecordScreen::new(
                "Notifications",
                "notification",
                catalog::notifications(now)?,
                messages,
            )),
            ScreenKind::LanguageRecords => Self::LanguageRecords(RecordScreen::new(
                "Language",
                "language",
                catalog::profile_languages()?,
                messages,
            )),
            ScreenKind::Application => {
                let jobs = catalog::saved_jobs()?;
                let job = match job_id {
                    Some(id) => jobs.get(id).cloned().ok_or_else(|| {
                        anyhow!(
                            "no saved job with id {id:?}; known ids are {}",
                            jobs.ids()
                                .iter()
                                .map(RecordId::as_str)
                                .collect::<Vec<_>>()
                                .join(", ")
                        )
                    })?,
                    None => jobs
                        .to_ordered_list()
                        .into_iter()
                        .next()
                        .ok_or_else(|| anyhow!("the saved job catalog is empty"))?,
                };
                Self::Application(ApplicationScreen::new(job, config.max_resume_bytes()))
            }
        };
        debug!(screen = kind.as_str(), "screen mounted");
        Ok(screen)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Picker(screen) => screen.kind().as_str(),
            Self::SavedJobs(_) => "saved-jobs",
            Self::Notifications(_) => "notifications",
            Self::LanguageRecords(_) => "language-records",
            Self::Application(_) => "application",
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            Self::Picker(screen) => screen.status() == ScreenStatus::Open,
            _ => true,
        }
    }
}

/// Document picker backed by `[resume]` config. A missing file name plays
/// the part of the user backing out of the system picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDocumentPicker {
    file_name: Option<String>,
    size_bytes: u64,
}

impl SampleDocumentPicker {
    pub fn from_config(config: &Config) -> Self {
        Self {
            file_name: config.sample_resume().map(str::to_owned),
            size_bytes: config.sample_resume_bytes(),
        }
    }
}

impl DocumentPicker for SampleDocumentPicker {
    fn pick_document(&mut self) -> Result<FileRef, Cancelled> {
        let file_name = self.file_name.clone().ok_or(Cancelled)?;
        Ok(FileRef {
            mime_type: mime_type_for(&file_name).to_owned(),
            file_name,
            size_bytes: self.size_bytes,
        })
    }
}

fn mime_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// What one command produced: a line per event for text output and the same
/// events encoded for JSON output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub events: Vec<Value>,
}

impl Outcome {
    fn from_events<E: Serialize>(events: &[E], describe: impl Fn(&E) -> String) -> Result<Self> {
        let mut outcome = Self::default();
        for event in events {
            outcome.lines.push(describe(event));
            outcome
                .events
                .push(serde_json::to_value(event).context("encode screen event")?);
        }
        Ok(outcome)
    }

    fn unsupported(command: &SessionCommand, screen: &str) -> Self {
        warn!(command = command.name(), screen, "command not available");
        Self {
            lines: vec![format!(
                "`{}` is not available on the {screen} screen",
                command.name()
            )],
            events: Vec::new(),
        }
    }
}

/// Drives one mounted screen from a line-oriented script, printing the
/// re-derived view after every command.
pub struct Session<P> {
    screen: Screen,
    documents: P,
    now: OffsetDateTime,
    format: OutputFormat,
}

impl<P: DocumentPicker> Session<P> {
    pub fn new(screen: Screen, documents: P, now: OffsetDateTime, format: OutputFormat) -> Self {
        Self {
            screen,
            documents,
            now,
            format,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Runs every command in `input` and returns how many were executed.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<usize> {
        let mut executed = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line.context("read session script")?;
            let Some(command) =
                SessionCommand::parse(&line).with_context(|| format!("line {}", index + 1))?
            else {
                continue;
            };
            let outcome = self.apply(&command)?;
            self.write_outcome(out, line.trim(), &outcome)?;
            executed += 1;
        }
        debug!(executed, "session script finished");
        Ok(executed)
    }

    pub fn apply(&mut self, command: &SessionCommand) -> Result<Outcome> {
        match &mut self.screen {
            Screen::Picker(screen) => {
                let command = match command {
                    SessionCommand::Query(text) => PickerCommand::SetQuery(text.clone()),
                    SessionCommand::Pick(id) => PickerCommand::Activate(ItemId::from(id.as_str())),
                    SessionCommand::Unpick(id) => {
                        PickerCommand::Deselect(ItemId::from(id.as_str()))
                    }
                    SessionCommand::Clear => PickerCommand::ClearSelection,
                    SessionCommand::Save => PickerCommand::Save,
                    SessionCommand::Cancel => PickerCommand::Cancel,
                    SessionCommand::Show => return Ok(Outcome::default()),
                    other => return Ok(Outcome::unsupported(other, screen.kind().as_str())),
                };
                Outcome::from_events(&screen.dispatch(command), describe_picker_event)
            }
            Screen::SavedJobs(screen) => apply_records(screen, command, "saved-jobs"),
            Screen::Notifications(screen) => apply_records(screen, command, "notifications"),
            Screen::LanguageRecords(screen) => {
                apply_records(screen, command, "language-records")
            }
            Screen::Application(screen) => {
                let event = match command {
                    SessionCommand::Upload => Some(screen.upload_resume(&mut self.documents)),
                    SessionCommand::Clear => screen.remove_resume(),
                    SessionCommand::Letter(text) => {
                        if screen.set_cover_letter(text.clone()) {
                            None
                        } else {
                            screen.submitted_at().map(ApplicationEvent::AlreadySubmitted)
                        }
                    }
                    SessionCommand::Save => Some(screen.submit(self.now)),
                    SessionCommand::Show => None,
                    other => return Ok(Outcome::unsupported(other, "application")),
                };
                let events: Vec<_> = event.into_iter().collect();
                Outcome::from_events(&events, describe_application_event)
            }
        }
    }

    fn write_outcome<W: Write>(&self, out: &mut W, input: &str, outcome: &Outcome) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "> {input}")?;
                for line in &outcome.lines {
                    writeln!(out, "  {line}")?;
                }
                for line in self.render_text() {
                    writeln!(out, "{line}")?;
                }
            }
            OutputFormat::Json => {
                let step = json!({
                    "command": input,
                    "screen": self.screen.name(),
                    "open": self.screen.is_open(),
                    "events": outcome.events,
                    "view": self.view_json()?,
                });
                writeln!(out, "{}", serde_json::to_string(&step)?)?;
            }
        }
        Ok(())
    }

    pub fn view_json(&self) -> Result<Value> {
        let value = match &self.screen {
            Screen::Picker(screen) => serde_json::to_value(screen.view()),
            Screen::SavedJobs(screen) => serde_json::to_value(screen.view()),
            Screen::Notifications(screen) => {
                serde_json::to_value(screen.grouped_view(self.now.date()))
            }
            Screen::LanguageRecords(screen) => serde_json::to_value(screen.view()),
            Screen::Application(screen) => serde_json::to_value(screen.view()),
        };
        value.context("encode screen view")
    }

    pub fn render_text(&self) -> Vec<String> {
        match &self.screen {
            Screen::Picker(screen) => {
                let mut lines = render_picker(&screen.view());
                if screen.status() == ScreenStatus::Closed {
                    lines.push("  (closed)".to_owned());
                }
                lines
            }
            Screen::SavedJobs(screen) => render_records(&screen.view()),
            Screen::Notifications(screen) => render_records(&screen.grouped_view(self.now.date())),
            Screen::LanguageRecords(screen) => render_records(&screen.view()),
            Screen::Application(screen) => render_application(&screen.view()),
        }
    }
}

fn apply_records<R>(
    screen: &mut RecordScreen<R>,
    command: &SessionCommand,
    name: &str,
) -> Result<Outcome>
where
    R: Record + Clone + Serialize,
{
    let command = match command {
        SessionCommand::Pick(id) => RecordCommand::Open(RecordId::from(id.as_str())),
        SessionCommand::Delete(id) => RecordCommand::RequestDelete(RecordId::from(id.as_str())),
        SessionCommand::DeleteAll => RecordCommand::RequestDeleteAll,
        SessionCommand::Confirm => RecordCommand::Confirm,
        SessionCommand::Cancel => RecordCommand::Cancel,
        SessionCommand::Save => RecordCommand::Save,
        SessionCommand::Show => return Ok(Outcome::default()),
        other => return Ok(Outcome::unsupported(other, name)),
    };
    Outcome::from_events(&screen.dispatch(command), |event| {
        describe_record_event(event)
    })
}

fn describe_picker_event(event: &PickerEvent) -> String {
    match event {
        PickerEvent::QueryChanged(query) => format!("query set to {query:?}"),
        PickerEvent::Selected(id) => format!("selected {id}"),
        PickerEvent::Deselected(id) => format!("deselected {id}"),
        PickerEvent::SelectionCleared => "selection cleared".to_owned(),
        PickerEvent::Picked(item) => format!("picked {} ({})", item.label, item.id),
        PickerEvent::Committed(ids) => {
            let ids: Vec<&str> = ids.iter().map(ItemId::as_str).collect();
            format!("committed {}", ids.join(", "))
        }
        PickerEvent::ValidationFailed(error) => format!("{}: {error}", error.dialog_title()),
        PickerEvent::Dismissed => "dismissed".to_owned(),
    }
}

fn describe_record_event<R: Record>(event: &RecordEvent<R>) -> String {
    match event {
        RecordEvent::Opened(id) => format!("opened {id}"),
        RecordEvent::Added(id) => format!("added {id}"),
        RecordEvent::ConfirmationRequested(prompt) => format!(
            "{}: {} [{} / {}]",
            prompt.title, prompt.message, prompt.confirm_label, prompt.cancel_label
        ),
        RecordEvent::ConfirmationDismissed => "confirmation dismissed".to_owned(),
        RecordEvent::Removed(record) => {
            format!("removed {} ({})", record.title(), record.record_id())
        }
        RecordEvent::Cleared(count) => format!("cleared {count} records"),
        RecordEvent::Committed(records) => format!("committed {} records", records.len()),
    }
}

fn describe_application_event(event: &ApplicationEvent) -> String {
    match event {
        ApplicationEvent::ResumeAttached(file) => {
            format!("attached {} ({})", file.file_name, file.size_label())
        }
        ApplicationEvent::ResumeRemoved => "resume removed".to_owned(),
        ApplicationEvent::UploadCancelled => "upload cancelled".to_owned(),
        ApplicationEvent::UploadRejected(error) | ApplicationEvent::ValidationFailed(error) => {
            format!("{}: {error}", error.dialog_title())
        }
        ApplicationEvent::Submitted(form) => format!("application for job {} sent", form.job_id),
        ApplicationEvent::AlreadySubmitted(at) => {
            format!("application already sent on {}", at.date())
        }
    }
}

fn render_picker(view: &PickerView) -> Vec<String> {
    let mut lines = vec![format!("{} [query: {:?}]", view.title, view.query)];
    if !view.chips.is_empty() {
        let labels: Vec<&str> = view.chips.iter().map(|chip| chip.label.as_str()).collect();
        lines.push(format!("  chosen: {}", labels.join(", ")));
    }
    for row in &view.rows {
        let mark = match row.selected {
            Some(true) => "[x] ",
            Some(false) => "[ ] ",
            None => "",
        };
        let detail = row
            .detail
            .as_deref()
            .map(|detail| format!(" -- {detail}"))
            .unwrap_or_default();
        lines.push(format!("  {mark}{} ({}){detail}", row.label, row.id));
    }
    if let Some(message) = &view.empty_state {
        lines.push(format!("  {message}"));
    }
    if view.can_save {
        lines.push("  [Save]".to_owned());
    }
    lines
}

fn render_records(view: &RecordListView) -> Vec<String> {
    let mut lines = vec![view.title.clone()];
    for section in &view.sections {
        let indent = if let Some(heading) = &section.heading {
            lines.push(format!("  {heading}"));
            "    "
        } else {
            "  "
        };
        for row in &section.rows {
            let detail = row.detail.as_deref().unwrap_or_default();
            lines.push(format!("{indent}{}  {} -- {detail}", row.id, row.label));
        }
    }
    if let Some(message) = &view.empty_state {
        lines.push(format!("  {message}"));
    }
    if view.on_delete_all.is_some() {
        lines.push("  [Delete all]".to_owned());
    }
    lines
}

fn render_application(view: &ApplicationView) -> Vec<String> {
    let mut lines = vec![
        format!("Apply: {}", view.job_title),
        format!("  {}", view.job_summary),
    ];
    match &view.resume {
        Some(resume) => lines.push(format!("  resume: {} ({})", resume.file_name, resume.size)),
        None => lines.push("  resume: none".to_owned()),
    }
    if !view.cover_letter.is_empty() {
        lines.push(format!("  cover letter: {}", view.cover_letter));
    }
    if view.submitted {
        lines.push("  submitted".to_owned());
    } else if view.can_submit {
        lines.push("  [Apply Now]".to_owned());
    }
    lines
}
