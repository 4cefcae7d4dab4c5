// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::VecDeque;

use jobdeck_app::{
    Cancelled, DatePicker, DocumentPicker, FileRef, Item, Notification, NotificationKind,
    RecordId, SavedJob,
};
use time::{Date, Duration, Month, OffsetDateTime, Time};

const JOB_TITLES: [&str; 12] = [
    "UI/UX Designer",
    "Lead Designer",
    "UX Researcher",
    "Product Designer",
    "Graphic Designer",
    "Motion Designer",
    "Design Manager",
    "Interaction Designer",
    "Visual Designer",
    "Content Designer",
    "Frontend Engineer",
    "Design Systems Engineer",
];

const COMPANIES: [&str; 10] = [
    "Google inc",
    "Dribbble inc",
    "Twitter inc",
    "Apple inc",
    "Allianz",
    "Facebook inc",
    "Amazon inc",
    "Microsoft corp",
    "Adobe inc",
    "Airbnb",
];

const LOCATIONS: [&str; 8] = [
    "California, USA",
    "Seattle, USA",
    "Boston, USA",
    "Munich, Germany",
    "Jakarta, Indonesia",
    "London, UK",
    "Singapore",
    "Remote",
];

const EMPLOYMENT_TYPES: [&str; 4] = ["Full time", "Part time", "Contract", "Remote"];

const NOTIFICATION_TITLES: [(NotificationKind, &str); 4] = [
    (NotificationKind::ApplicationUpdate, "Application sent"),
    (NotificationKind::ProfileView, "Your profile was viewed"),
    (NotificationKind::JobAlert, "Jobs you may like"),
    (NotificationKind::Message, "New message"),
];

const SKILL_WORDS: [&str; 10] = [
    "Figma",
    "Sketch",
    "Prototyping",
    "Wireframing",
    "Research",
    "Typography",
    "Illustration",
    "Animation",
    "Accessibility",
    "Copywriting",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator for record lists larger than the static catalog.
#[derive(Debug, Clone)]
pub struct JobFaker {
    rng: DeterministicRng,
    next_id: u64,
}

impl JobFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn saved_job(&mut self) -> SavedJob {
        let id = self.record_id();
        let salary_per_month = if self.rng.bool() {
            Some(5_000 + 500 * self.rng.int_n(40) as u32)
        } else {
            None
        };
        SavedJob {
            id,
            title: self.pick(&JOB_TITLES).to_owned(),
            company: self.pick(&COMPANIES).to_owned(),
            location: self.pick(&LOCATIONS).to_owned(),
            salary_per_month,
            employment_type: self.pick(&EMPLOYMENT_TYPES).to_owned(),
            posted_on: reference_date() - Duration::days(self.rng.int_n(60) as i64),
        }
    }

    pub fn saved_jobs(&mut self, count: usize) -> Vec<SavedJob> {
        (0..count).map(|_| self.saved_job()).collect()
    }

    pub fn notification(&mut self, now: OffsetDateTime) -> Notification {
        let id = self.record_id();
        let (kind, title) = NOTIFICATION_TITLES[self.rng.int_n(NOTIFICATION_TITLES.len())];
        let company = self.pick(&COMPANIES);
        Notification {
            id,
            kind,
            title: title.to_owned(),
            body: format!("{company} has an update for you"),
            received_at: now - Duration::minutes(self.rng.int_n(7 * 24 * 60) as i64),
        }
    }

    pub fn notifications(&mut self, now: OffsetDateTime, count: usize) -> Vec<Notification> {
        (0..count).map(|_| self.notification(now)).collect()
    }

    /// Skills with unique ids; labels may repeat words but never ids.
    pub fn skills(&mut self, count: usize) -> Vec<Item> {
        (0..count)
            .map(|index| {
                let word = self.pick(&SKILL_WORDS);
                Item::skill(&format!("skill-{index}"), &format!("{word} {index}"), "Generated")
                    .expect("generated skills have non-blank fields")
            })
            .collect()
    }

    fn record_id(&mut self) -> RecordId {
        let id = RecordId::new(self.next_id.to_string());
        self.next_id += 1;
        id
    }

    fn pick<'a>(&mut self, values: &'a [&'a str]) -> &'a str {
        values[self.rng.int_n(values.len())]
    }
}

/// File picker that replays a fixed script of outcomes, then cancels.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDocumentPicker {
    outcomes: VecDeque<Result<FileRef, Cancelled>>,
    calls: usize,
}

impl ScriptedDocumentPicker {
    pub fn new<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Result<FileRef, Cancelled>>,
    {
        Self {
            outcomes: outcomes.into_iter().collect(),
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DocumentPicker for ScriptedDocumentPicker {
    fn pick_document(&mut self) -> Result<FileRef, Cancelled> {
        self.calls += 1;
        self.outcomes.pop_front().unwrap_or(Err(Cancelled))
    }
}

/// Date picker that always lands on the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedDatePicker(pub Date);

impl DatePicker for FixedDatePicker {
    fn pick_date(&mut self, _initial: Date) -> Date {
        self.0
    }
}

pub fn sample_resume(size_bytes: u64) -> FileRef {
    FileRef {
        file_name: "Jamet kudasi - CV - UI/UX Designer.pdf".to_owned(),
        mime_type: "application/pdf".to_owned(),
        size_bytes,
    }
}

pub fn reference_now() -> OffsetDateTime {
    reference_date().with_time(Time::from_hms(12, 0, 0).expect("valid noon")).assume_utc()
}

pub fn reference_date() -> Date {
    Date::from_calendar_date(2026, Month::October, 18).expect("valid reference date")
}

#[cfg(test)]
mod tests {
    use super::{FixedDatePicker, JobFaker, ScriptedDocumentPicker, reference_now, sample_resume};
    use jobdeck_app::{Cancelled, DatePicker, DocumentPicker, catalog};
    use std::collections::BTreeSet;
    use time::macros::date;

    #[test]
    fn new_deterministic_seed() {
        let mut left = JobFaker::new(42);
        let mut right = JobFaker::new(42);
        assert_eq!(left.saved_jobs(5), right.saved_jobs(5));
    }

    #[test]
    fn saved_job_ids_are_unique() {
        let mut faker = JobFaker::new(7);
        let ids: BTreeSet<_> = faker
            .saved_jobs(50)
            .into_iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn notifications_fall_within_the_last_week() {
        let now = reference_now();
        let mut faker = JobFaker::new(3);
        for notification in faker.notifications(now, 30) {
            assert!(notification.received_at <= now);
            assert!(now - notification.received_at <= time::Duration::days(7));
        }
    }

    #[test]
    fn generated_skills_pass_the_catalog_check() {
        let mut faker = JobFaker::new(9);
        assert!(catalog::ensure_unique(&faker.skills(40)).is_ok());
    }

    #[test]
    fn scripted_picker_cancels_when_exhausted() {
        let mut picker = ScriptedDocumentPicker::new([Ok(sample_resume(10))]);
        assert!(picker.pick_document().is_ok());
        assert_eq!(picker.pick_document(), Err(Cancelled));
        assert_eq!(picker.calls(), 2);
    }

    #[test]
    fn fixed_date_picker_ignores_the_initial_date() {
        let mut picker = FixedDatePicker(date!(2024 - 02 - 29));
        assert_eq!(picker.pick_date(date!(2000 - 01 - 01)), date!(2024 - 02 - 29));
    }
}
