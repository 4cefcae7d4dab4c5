// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use jobdeck_app::{
    ApplicationEvent, ApplicationScreen, DateField, EmptyStateMessages, FormKind, FormPayload,
    ItemId, ListAction, PickerCommand, PickerEvent, PickerKind, PickerScreen, ProfileEditor,
    Proficiency, RecordCollection, RecordCommand, RecordEvent, RecordId, RecordScreen,
    ScreenOptions, ValidationError, catalog, filter, normalize,
};
use jobdeck_testkit::{
    FixedDatePicker, JobFaker, ScriptedDocumentPicker, reference_date, reference_now,
    sample_resume,
};
use time::macros::date;

#[test]
fn skill_picker_round_trip_through_the_view() -> Result<()> {
    let mut screen = PickerScreen::mount(PickerKind::Skills, ScreenOptions::default())?;

    screen.dispatch(PickerCommand::SetQuery("FI".to_owned()));
    let view = screen.view();
    let labels: Vec<_> = view.rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["Figma"]);

    // The renderer hands back whatever action the row carried.
    let id = match &view.rows[0].on_activate {
        ListAction::Activate(id) => id.clone(),
        other => panic!("unselected row should activate, got {other:?}"),
    };
    screen.dispatch(PickerCommand::Activate(id));

    let view = screen.view();
    assert_eq!(view.query, "");
    assert_eq!(view.chips.len(), 1);
    assert_eq!(view.chips[0].label, "Figma");
    assert!(view.can_save);

    screen.dispatch(PickerCommand::Activate(ItemId::from("sketch")));
    screen.dispatch(PickerCommand::Activate(ItemId::from("figma")));
    let events = screen.dispatch(PickerCommand::Save);
    assert_eq!(
        events,
        vec![PickerEvent::Committed(vec![
            ItemId::from("figma"),
            ItemId::from("sketch"),
        ])]
    );
    Ok(())
}

#[test]
fn filter_properties_hold_on_generated_catalogs() {
    let mut faker = JobFaker::new(11);
    let source = faker.skills(60);
    for query in ["", "  ", "fig", "A", "ing 1", "zz", "9"] {
        let once = filter(&source, query);
        let needle = normalize(query);
        if needle.is_empty() {
            assert_eq!(once, source, "query {query:?}");
        }
        assert!(
            once.iter()
                .all(|item| item.label.to_lowercase().contains(&needle)),
            "query {query:?}"
        );
        assert_eq!(filter(&once, query), once, "query {query:?}");

        let mut cursor = source.iter();
        assert!(
            once.iter()
                .all(|item| cursor.any(|candidate| candidate == item)),
            "query {query:?} reordered results"
        );
    }
}

#[test]
fn company_picker_feeds_the_work_experience_editor() -> Result<()> {
    let mut picker = PickerScreen::mount(PickerKind::Companies, ScreenOptions::default())?;
    picker.dispatch(PickerCommand::SetQuery("seattle".to_owned()));
    assert!(picker.view().rows.is_empty());
    assert_eq!(
        picker.view().empty_state.as_deref(),
        Some("No results found")
    );

    picker.dispatch(PickerCommand::SetQuery("internet".to_owned()));
    let events = picker.dispatch(PickerCommand::Activate(ItemId::from("google")));
    let [PickerEvent::Picked(company)] = events.as_slice() else {
        panic!("expected a picked company, got {events:?}");
    };

    let mut editor = ProfileEditor::open(FormKind::WorkExperience).expect("work editor");
    assert!(editor.apply_pick(company));
    if let FormPayload::WorkExperience(work) = editor.payload_mut() {
        work.job_title = "Manager".to_owned();
    }
    editor.pick_date(
        DateField::Start,
        &mut FixedDatePicker(date!(2019 - 03 - 01)),
        reference_date(),
    );
    editor.pick_date(
        DateField::End,
        &mut FixedDatePicker(date!(2018 - 03 - 01)),
        reference_date(),
    );
    assert_eq!(
        editor.save(),
        Err(ValidationError::DateRange {
            what: "work experience"
        })
    );

    editor.set_currently_working(true);
    let saved = editor.save()?;
    match saved {
        FormPayload::WorkExperience(work) => {
            assert_eq!(work.company_name, "Google Inc");
            assert_eq!(work.end_date, None);
        }
        other => panic!("expected work experience, got {other:?}"),
    }
    Ok(())
}

#[test]
fn language_editor_adds_to_the_profile_list() -> Result<()> {
    let mut languages = RecordScreen::new(
        "Language",
        "language",
        catalog::profile_languages()?,
        EmptyStateMessages::default(),
    );

    let mut picker = PickerScreen::mount(PickerKind::Languages, ScreenOptions::default())?;
    let events = picker.dispatch(PickerCommand::Activate(ItemId::from("french")));
    let [PickerEvent::Picked(french)] = events.as_slice() else {
        panic!("expected a picked language, got {events:?}");
    };

    let mut editor = ProfileEditor::open(FormKind::Language).expect("language editor");
    editor.apply_pick(french);
    if let FormPayload::Language(language) = editor.payload_mut() {
        language.oral = Some(Proficiency::Intermediate);
        language.written = Some(Proficiency::Beginner);
    }
    let FormPayload::Language(input) = editor.save()? else {
        panic!("language editor saved a different form");
    };
    let record = input.to_record(RecordId::from("4"))?;

    let events = languages.dispatch(RecordCommand::Add(record));
    assert_eq!(events, vec![RecordEvent::Added(RecordId::from("4"))]);
    let titles: Vec<_> = languages
        .view()
        .rows()
        .map(|row| row.label.clone())
        .collect();
    assert_eq!(titles, vec!["Indonesian", "English", "German", "French"]);
    Ok(())
}

#[test]
fn saved_jobs_delete_flow_on_a_generated_list() -> Result<()> {
    let mut faker = JobFaker::new(5);
    let jobs = RecordCollection::from_records(faker.saved_jobs(20))?;
    let mut screen = RecordScreen::new("Save Job", "job", jobs, EmptyStateMessages::default());

    let target = screen.view().rows().nth(7).map(|row| row.id.clone()).expect("row 8");
    let before = screen.records().ids();

    screen.dispatch(RecordCommand::RequestDelete(target.clone()));
    screen.dispatch(RecordCommand::Confirm);

    let expected: Vec<RecordId> = before.into_iter().filter(|id| *id != target).collect();
    assert_eq!(screen.records().ids(), expected);

    screen.dispatch(RecordCommand::RequestDelete(target));
    assert_eq!(screen.pending(), None);
    Ok(())
}

#[test]
fn notifications_screen_groups_and_clears() -> Result<()> {
    let mut screen = RecordScreen::new(
        "Notifications",
        "notification",
        catalog::notifications(reference_now())?,
        EmptyStateMessages::default(),
    );

    let view = screen.grouped_view(reference_date());
    assert_eq!(view.sections.len(), 2);
    assert_eq!(view.rows().count(), 5);

    screen.dispatch(RecordCommand::RequestDeleteAll);
    assert_eq!(screen.dispatch(RecordCommand::Confirm), vec![RecordEvent::Cleared(5)]);
    let view = screen.grouped_view(reference_date());
    assert!(view.sections.is_empty());
    assert_eq!(view.on_delete_all, None);
    Ok(())
}

#[test]
fn application_review_needs_a_resume_before_submit() -> Result<()> {
    let job = catalog::saved_jobs()?
        .get("2")
        .cloned()
        .expect("catalog job 2");
    let mut screen = ApplicationScreen::new(job, jobdeck_app::DEFAULT_MAX_RESUME_BYTES);
    let mut picker = ScriptedDocumentPicker::new([
        Err(jobdeck_app::Cancelled),
        Ok(sample_resume(867 * 1024)),
    ]);

    assert_eq!(
        screen.submit(reference_now()),
        ApplicationEvent::ValidationFailed(ValidationError::ResumeMissing)
    );
    assert_eq!(
        screen.upload_resume(&mut picker),
        ApplicationEvent::UploadCancelled
    );
    assert!(matches!(
        screen.upload_resume(&mut picker),
        ApplicationEvent::ResumeAttached(_)
    ));
    assert_eq!(picker.calls(), 2);

    let view = screen.view();
    assert_eq!(view.job_title, "Lead Designer");
    assert!(view.can_submit);
    assert!(matches!(
        screen.submit(reference_now()),
        ApplicationEvent::Submitted(_)
    ));
    assert_eq!(screen.submitted_at(), Some(reference_now()));
    Ok(())
}
