// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Static seed data the screens mount with until a job-board API exists.

use std::collections::HashSet;

use time::macros::date;
use time::{Date, Duration, OffsetDateTime};

use crate::{
    CatalogError, Item, ItemId, LanguageRecord, Notification, NotificationKind, PickerKind,
    Proficiency, RecordCollection, RecordId, SavedJob,
};

const SKILLS: [(&str, &str, &str); 16] = [
    ("figma", "Figma", "Design tools"),
    ("sketch", "Sketch", "Design tools"),
    ("adobe-xd", "Adobe XD", "Design tools"),
    ("prototyping", "Prototyping", "Process"),
    ("wireframing", "Wireframing", "Process"),
    ("user-research", "User Research", "Process"),
    ("ui-design", "UI Design", "Craft"),
    ("ux-writing", "UX Writing", "Craft"),
    ("graphic-design", "Graphic Design", "Craft"),
    ("leadership", "Leadership", "Soft skills"),
    ("teamwork", "Teamwork", "Soft skills"),
    ("visioner", "Visioner", "Soft skills"),
    ("target-oriented", "Target oriented", "Soft skills"),
    ("consistent", "Consistent", "Soft skills"),
    ("communication", "Good communication skills", "Soft skills"),
    ("english", "English", "Languages"),
];

const COMPANIES: [(&str, &str, &str, &str); 10] = [
    ("google", "Google Inc", "Internet", "California, USA"),
    ("apple", "Apple Inc", "Electronic goods", "Cupertino, USA"),
    ("amazon", "Amazon Inc", "Internet", "Seattle, USA"),
    ("dribbble", "Dribbble Inc", "Design", "Boston, USA"),
    ("twitter", "Twitter Inc", "Internet", "San Francisco, USA"),
    ("facebook", "Facebook Inc", "Social network", "Menlo Park, USA"),
    ("microsoft", "Microsoft Corp", "Software", "Redmond, USA"),
    ("allianz", "Allianz", "Financial services", "Munich, Germany"),
    ("adobe", "Adobe Inc", "Multimedia", "San Jose, USA"),
    ("airbnb", "Airbnb", "Hospitality", "San Francisco, USA"),
];

const LANGUAGES: [(&str, &str, &str); 12] = [
    ("arabic", "Arabic", "العربية"),
    ("chinese", "Chinese", "中文"),
    ("english", "English", "English"),
    ("french", "French", "Français"),
    ("german", "German", "Deutsch"),
    ("hindi", "Hindi", "हिन्दी"),
    ("indonesian", "Indonesian", "Bahasa Indonesia"),
    ("italian", "Italian", "Italiano"),
    ("japanese", "Japanese", "日本語"),
    ("korean", "Korean", "한국어"),
    ("portuguese", "Portuguese", "Português"),
    ("spanish", "Spanish", "Español"),
];

const SCHOOLS: [(&str, &str, &str); 6] = [
    ("harvard", "Harvard University", "Cambridge"),
    ("stanford", "Stanford University", "Stanford"),
    ("mit", "Massachusetts Institute of Technology", "Cambridge"),
    ("oxford", "University of Oxford", "Oxford"),
    ("ui", "University of Indonesia", "Depok"),
    ("nus", "National University of Singapore", "Singapore"),
];

struct JobSeed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary_per_month: Option<u32>,
    employment_type: &'static str,
    posted_on: Date,
}

const SAVED_JOBS: [JobSeed; 5] = [
    JobSeed {
        id: "1",
        title: "UI/UX Designer",
        company: "Google inc",
        location: "California, USA",
        salary_per_month: Some(15_000),
        employment_type: "Full time",
        posted_on: date!(2026 - 10 - 01),
    },
    JobSeed {
        id: "2",
        title: "Lead Designer",
        company: "Dribbble inc",
        location: "California, USA",
        salary_per_month: Some(20_000),
        employment_type: "Full time",
        posted_on: date!(2026 - 09 - 27),
    },
    JobSeed {
        id: "3",
        title: "UX Researcher",
        company: "Twitter inc",
        location: "California, USA",
        salary_per_month: Some(12_000),
        employment_type: "Part time",
        posted_on: date!(2026 - 09 - 20),
    },
    JobSeed {
        id: "4",
        title: "Product Designer",
        company: "Apple inc",
        location: "Cupertino, USA",
        salary_per_month: None,
        employment_type: "Remote",
        posted_on: date!(2026 - 09 - 12),
    },
    JobSeed {
        id: "5",
        title: "Graphic Designer",
        company: "Allianz",
        location: "Munich, Germany",
        salary_per_month: Some(8_500),
        employment_type: "Contract",
        posted_on: date!(2026 - 08 - 30),
    },
];

pub fn picker_items(kind: PickerKind) -> Result<Vec<Item>, CatalogError> {
    let items = match kind {
        PickerKind::Skills => SKILLS
            .iter()
            .map(|(id, label, category)| Item::skill(id, label, category))
            .collect::<Result<Vec<_>, _>>()?,
        PickerKind::Companies => COMPANIES
            .iter()
            .map(|(id, label, industry, location)| Item::company(id, label, industry, location))
            .collect::<Result<Vec<_>, _>>()?,
        PickerKind::Languages => LANGUAGES
            .iter()
            .map(|(id, label, native)| Item::language(id, label, native))
            .collect::<Result<Vec<_>, _>>()?,
        PickerKind::Schools => SCHOOLS
            .iter()
            .map(|(id, label, city)| Item::school(id, label, city))
            .collect::<Result<Vec<_>, _>>()?,
    };
    ensure_unique(&items)?;
    Ok(items)
}

/// Rejects a source collection that repeats an item id.
pub fn ensure_unique(items: &[Item]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&ItemId> = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(&item.id) {
            return Err(CatalogError::DuplicateItem {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}

pub fn saved_jobs() -> Result<RecordCollection<SavedJob>, CatalogError> {
    RecordCollection::from_records(SAVED_JOBS.iter().map(|seed| SavedJob {
        id: RecordId::from(seed.id),
        title: seed.title.to_owned(),
        company: seed.company.to_owned(),
        location: seed.location.to_owned(),
        salary_per_month: seed.salary_per_month,
        employment_type: seed.employment_type.to_owned(),
        posted_on: seed.posted_on,
    }))
}

pub fn profile_languages() -> Result<RecordCollection<LanguageRecord>, CatalogError> {
    RecordCollection::from_records([
        LanguageRecord {
            id: RecordId::from("1"),
            language: "Indonesian".to_owned(),
            oral: Proficiency::Native,
            written: Proficiency::Native,
            first_language: true,
        },
        LanguageRecord {
            id: RecordId::from("2"),
            language: "English".to_owned(),
            oral: Proficiency::Advanced,
            written: Proficiency::Advanced,
            first_language: false,
        },
        LanguageRecord {
            id: RecordId::from("3"),
            language: "German".to_owned(),
            oral: Proficiency::Beginner,
            written: Proficiency::Intermediate,
            first_language: false,
        },
    ])
}

/// Notifications timestamped relative to `now` so the "Today" group is never
/// empty on a fresh screen.
pub fn notifications(now: OffsetDateTime) -> Result<RecordCollection<Notification>, CatalogError> {
    let seeds = [
        (
            "1",
            NotificationKind::ApplicationUpdate,
            "Application sent",
            "Applications for Google companies have entered for company review",
            Duration::minutes(25),
        ),
        (
            "2",
            NotificationKind::ProfileView,
            "Your profile was viewed",
            "A recruiter at Dribbble looked at your profile",
            Duration::hours(3),
        ),
        (
            "3",
            NotificationKind::Message,
            "New message",
            "Twitter inc replied to your application",
            Duration::days(1),
        ),
        (
            "4",
            NotificationKind::JobAlert,
            "Jobs you may like",
            "4 new UI/UX Designer roles match your search",
            Duration::days(2),
        ),
        (
            "5",
            NotificationKind::ApplicationUpdate,
            "Application accepted",
            "Apple inc moved your application to the interview stage",
            Duration::days(6),
        ),
    ];
    RecordCollection::from_records(seeds.into_iter().map(|(id, kind, title, body, ago)| {
        Notification {
            id: RecordId::from(id),
            kind,
            title: title.to_owned(),
            body: body.to_owned(),
            received_at: now - ago,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::{ensure_unique, notifications, picker_items, profile_languages, saved_jobs};
    use crate::{CatalogError, Item, ItemId, PickerKind};
    use time::macros::datetime;

    #[test]
    fn every_picker_catalog_loads() {
        for kind in PickerKind::ALL {
            let items = picker_items(kind).expect("catalog loads");
            assert!(!items.is_empty(), "{} catalog empty", kind.as_str());
            assert!(
                items.iter().all(|item| item.meta.picker_kind() == kind),
                "{} catalog mixes item kinds",
                kind.as_str()
            );
        }
    }

    #[test]
    fn record_catalogs_load() {
        assert_eq!(saved_jobs().expect("jobs").len(), 5);
        assert_eq!(profile_languages().expect("languages").len(), 3);
        assert_eq!(
            notifications(datetime!(2026-10-18 12:00 UTC))
                .expect("notifications")
                .len(),
            5
        );
    }

    #[test]
    fn duplicate_item_ids_are_rejected() {
        let items = vec![
            Item::skill("figma", "Figma", "").expect("valid"),
            Item::skill("figma", "Figma 2", "").expect("valid"),
        ];
        assert_eq!(
            ensure_unique(&items),
            Err(CatalogError::DuplicateItem {
                id: ItemId::from("figma")
            })
        );
    }
}
