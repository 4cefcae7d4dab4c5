// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{FileRef, ItemId, LanguageRecord, Proficiency, RecordId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    Education,
    WorkExperience,
    Language,
    Application,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateField {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationFormInput {
    pub school: Option<ItemId>,
    pub school_name: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceFormInput {
    pub job_title: String,
    pub company: Option<ItemId>,
    pub company_name: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub currently_working: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFormInput {
    pub language: Option<ItemId>,
    pub language_name: String,
    pub first_language: bool,
    pub oral: Option<Proficiency>,
    pub written: Option<Proficiency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFormInput {
    pub job_id: RecordId,
    pub resume: Option<FileRef>,
    pub cover_letter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPayload {
    Education(EducationFormInput),
    WorkExperience(WorkExperienceFormInput),
    Language(LanguageFormInput),
    Application(ApplicationFormInput),
}

impl FormPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Education(_) => FormKind::Education,
            Self::WorkExperience(_) => FormKind::WorkExperience,
            Self::Language(_) => FormKind::Language,
            Self::Application(_) => FormKind::Application,
        }
    }

    /// Blank inputs for the profile editors. Applications need a job, so they
    /// have no blank form.
    pub fn blank_for(kind: FormKind) -> Option<Self> {
        match kind {
            FormKind::Education => Some(Self::Education(EducationFormInput {
                school: None,
                school_name: String::new(),
                degree: String::new(),
                field_of_study: String::new(),
                start_date: None,
                end_date: None,
                description: String::new(),
            })),
            FormKind::WorkExperience => Some(Self::WorkExperience(WorkExperienceFormInput {
                job_title: String::new(),
                company: None,
                company_name: String::new(),
                start_date: None,
                end_date: None,
                currently_working: false,
                description: String::new(),
            })),
            FormKind::Language => Some(Self::Language(LanguageFormInput {
                language: None,
                language_name: String::new(),
                first_language: false,
                oral: None,
                written: None,
            })),
            FormKind::Application => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Education(education) => education.validate(),
            Self::WorkExperience(work) => work.validate(),
            Self::Language(language) => language.validate(),
            Self::Application(application) => application.validate(),
        }
    }

    pub fn set_date(&mut self, field: DateField, date: Date) -> bool {
        let (start, end) = match self {
            Self::Education(education) => (&mut education.start_date, &mut education.end_date),
            Self::WorkExperience(work) => {
                if field == DateField::End && work.currently_working {
                    return false;
                }
                (&mut work.start_date, &mut work.end_date)
            }
            Self::Language(_) | Self::Application(_) => return false,
        };
        match field {
            DateField::Start => *start = Some(date),
            DateField::End => *end = Some(date),
        }
        true
    }

    pub fn date(&self, field: DateField) -> Option<Date> {
        let (start, end) = match self {
            Self::Education(education) => (education.start_date, education.end_date),
            Self::WorkExperience(work) => (work.start_date, work.end_date),
            Self::Language(_) | Self::Application(_) => return None,
        };
        match field {
            DateField::Start => start,
            DateField::End => end,
        }
    }
}

fn check_range(
    what: &'static str,
    start: Option<Date>,
    end: Option<Date>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(ValidationError::DateRange { what });
    }
    Ok(())
}

impl EducationFormInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.school_name.trim().is_empty() {
            return Err(ValidationError::Required { field: "school" });
        }
        if self.degree.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "level of education",
            });
        }
        if self.start_date.is_none() {
            return Err(ValidationError::Required {
                field: "start date",
            });
        }
        check_range("education", self.start_date, self.end_date)
    }
}

impl WorkExperienceFormInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.job_title.trim().is_empty() {
            return Err(ValidationError::Required { field: "job title" });
        }
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::Required { field: "company" });
        }
        if self.start_date.is_none() {
            return Err(ValidationError::Required {
                field: "start date",
            });
        }
        if self.currently_working {
            return Ok(());
        }
        if self.end_date.is_none() {
            return Err(ValidationError::Required { field: "end date" });
        }
        check_range("work experience", self.start_date, self.end_date)
    }
}

impl LanguageFormInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.language.is_none() || self.language_name.trim().is_empty() {
            return Err(ValidationError::Required { field: "language" });
        }
        if self.first_language {
            return Ok(());
        }
        if self.oral.is_none() {
            return Err(ValidationError::Required {
                field: "oral level",
            });
        }
        if self.written.is_none() {
            return Err(ValidationError::Required {
                field: "written level",
            });
        }
        Ok(())
    }

    /// Builds the record saved into the profile's language list.
    pub fn to_record(&self, id: RecordId) -> Result<LanguageRecord, ValidationError> {
        self.validate()?;
        let level = |value: Option<Proficiency>| {
            if self.first_language {
                Proficiency::Native
            } else {
                value.unwrap_or(Proficiency::Beginner)
            }
        };
        Ok(LanguageRecord {
            id,
            language: self.language_name.trim().to_owned(),
            oral: level(self.oral),
            written: level(self.written),
            first_language: self.first_language,
        })
    }
}

impl ApplicationFormInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resume.is_none() {
            return Err(ValidationError::ResumeMissing);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ApplicationFormInput, DateField, EducationFormInput, FormKind, FormPayload,
        LanguageFormInput, WorkExperienceFormInput,
    };
    use crate::{FileRef, ItemId, Proficiency, RecordId, ValidationError};
    use time::macros::date;

    fn education() -> EducationFormInput {
        EducationFormInput {
            school: Some(ItemId::from("harvard")),
            school_name: "Harvard University".to_owned(),
            degree: "Bachelor of Information Technology".to_owned(),
            field_of_study: "Information Technology".to_owned(),
            start_date: Some(date!(2010 - 09 - 01)),
            end_date: Some(date!(2014 - 06 - 30)),
            description: String::new(),
        }
    }

    fn work() -> WorkExperienceFormInput {
        WorkExperienceFormInput {
            job_title: "Manager".to_owned(),
            company: Some(ItemId::from("amazon")),
            company_name: "Amazon Inc".to_owned(),
            start_date: Some(date!(2015 - 01 - 05)),
            end_date: None,
            currently_working: true,
            description: String::new(),
        }
    }

    #[test]
    fn blank_payload_is_available_for_profile_editors() {
        assert!(FormPayload::blank_for(FormKind::Education).is_some());
        assert!(FormPayload::blank_for(FormKind::Language).is_some());
        assert!(FormPayload::blank_for(FormKind::Application).is_none());
    }

    #[test]
    fn blank_education_requires_a_school() {
        let payload = FormPayload::blank_for(FormKind::Education).expect("blank education");
        assert_eq!(
            payload.validate(),
            Err(ValidationError::Required { field: "school" })
        );
    }

    #[test]
    fn education_rejects_end_before_start() {
        let mut input = education();
        input.end_date = Some(date!(2009 - 01 - 01));
        assert_eq!(
            input.validate(),
            Err(ValidationError::DateRange { what: "education" })
        );
        assert!(education().validate().is_ok());
    }

    #[test]
    fn current_job_needs_no_end_date() {
        assert!(work().validate().is_ok());

        let mut finished = work();
        finished.currently_working = false;
        assert_eq!(
            finished.validate(),
            Err(ValidationError::Required { field: "end date" })
        );
    }

    #[test]
    fn end_date_is_locked_while_currently_working() {
        let mut payload = FormPayload::WorkExperience(work());
        assert!(!payload.set_date(DateField::End, date!(2020 - 01 - 01)));
        assert_eq!(payload.date(DateField::End), None);
        assert!(payload.set_date(DateField::Start, date!(2016 - 02 - 01)));
        assert_eq!(payload.date(DateField::Start), Some(date!(2016 - 02 - 01)));
    }

    #[test]
    fn language_needs_levels_unless_first_language() {
        let mut input = LanguageFormInput {
            language: Some(ItemId::from("english")),
            language_name: "English".to_owned(),
            first_language: false,
            oral: Some(Proficiency::Advanced),
            written: None,
        };
        assert_eq!(
            input.validate(),
            Err(ValidationError::Required {
                field: "written level"
            })
        );

        input.first_language = true;
        let record = input.to_record(RecordId::from("7")).expect("valid language");
        assert_eq!(record.oral, Proficiency::Native);
        assert_eq!(record.written, Proficiency::Native);
        assert!(record.first_language);
    }

    #[test]
    fn application_requires_a_resume() {
        let mut input = ApplicationFormInput {
            job_id: RecordId::from("1"),
            resume: None,
            cover_letter: String::new(),
        };
        assert_eq!(input.validate(), Err(ValidationError::ResumeMissing));

        input.resume = Some(FileRef {
            file_name: "Jamet kudasi - CV - UI/UX Designer.pdf".to_owned(),
            mime_type: "application/pdf".to_owned(),
            size_bytes: 867 * 1024,
        });
        assert!(FormPayload::Application(input).validate().is_ok());
    }
}
