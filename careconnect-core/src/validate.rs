//! Declarative per-field validation for the two creation forms.
//!
//! Validation runs on every change, so each rule is addressable on its own
//! (`validate_field`) as well as for the whole form (`validate`). An invalid
//! form never reaches the dispatcher; the caller renders the returned
//! messages next to their fields.

use std::collections::BTreeMap;

use crate::models::{Ambulation, Dimension, LevelOfCare, Recurrence, ResidentStatus};
use crate::tags::TagList;

/// Field-level error messages keyed by the UI/wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.insert(field, message);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramField {
    Name,
    Location,
    AllDay,
    Start,
    StartTime,
    End,
    EndTime,
    Tags,
    Dimension,
    Facilitators,
    LevelOfCare,
    Hobbies,
    Recurrence,
    IsRepeated,
}

impl ProgramField {
    pub const ALL: [Self; 14] = [
        Self::Name,
        Self::Location,
        Self::AllDay,
        Self::Start,
        Self::StartTime,
        Self::End,
        Self::EndTime,
        Self::Tags,
        Self::Dimension,
        Self::Facilitators,
        Self::LevelOfCare,
        Self::Hobbies,
        Self::Recurrence,
        Self::IsRepeated,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::AllDay => "allDay",
            Self::Start => "start",
            Self::StartTime => "startTime",
            Self::End => "end",
            Self::EndTime => "endTime",
            Self::Tags => "tags",
            Self::Dimension => "dimension",
            Self::Facilitators => "facilitators",
            Self::LevelOfCare => "levelOfCare",
            Self::Hobbies => "hobbies",
            Self::Recurrence => "recurrence",
            Self::IsRepeated => "isRepeated",
        }
    }
}

/// Raw state of the "create program" form. Selects hold their wire value;
/// empty strings mean "not provided".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramForm {
    pub name: String,
    pub location: String,
    pub all_day: bool,
    pub start: String,
    /// `HH:MM`; ignored (and disabled in the UI) while `all_day` is set.
    pub start_time: String,
    pub end: String,
    pub end_time: String,
    pub tags: TagList,
    pub dimension: String,
    pub facilitators: String,
    pub level_of_care: String,
    pub hobbies: String,
    pub recurrence: String,
    pub is_repeated: bool,
}

impl Default for ProgramForm {
    /// The defaults the form opens with.
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            all_day: false,
            start: String::new(),
            start_time: String::new(),
            end: String::new(),
            end_time: String::new(),
            tags: TagList::new(),
            dimension: "Physical".to_owned(),
            facilitators: "Resident".to_owned(),
            level_of_care: "INDEPENDENT".to_owned(),
            hobbies: "Dance".to_owned(),
            recurrence: "Weekly".to_owned(),
            is_repeated: false,
        }
    }
}

impl ProgramForm {
    pub fn validate_field(&self, field: ProgramField) -> Result<(), String> {
        match field {
            ProgramField::Name => bounded_text("name", &self.name, 5, 64),
            ProgramField::Location => bounded_text("location", &self.location, 5, 64),
            // checkboxes always carry a value
            ProgramField::AllDay | ProgramField::IsRepeated => Ok(()),
            ProgramField::Start => required("start", &self.start),
            ProgramField::End => required("end", &self.end),
            ProgramField::StartTime => optional_clock("startTime", &self.start_time),
            ProgramField::EndTime => optional_clock("endTime", &self.end_time),
            ProgramField::Tags => {
                if self.tags.is_empty() {
                    Err("tags field must have at least 1 items".to_owned())
                } else {
                    Ok(())
                }
            }
            ProgramField::Dimension => one_of::<Dimension>(&self.dimension),
            ProgramField::Facilitators => required("facilitators", &self.facilitators),
            ProgramField::LevelOfCare => one_of::<LevelOfCare>(&self.level_of_care),
            ProgramField::Hobbies => required("hobbies", &self.hobbies),
            ProgramField::Recurrence => one_of::<Recurrence>(&self.recurrence),
        }
    }

    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in ProgramField::ALL {
            errors.check(field.name(), self.validate_field(field));
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidentField {
    FirstName,
    LastName,
    PreferredName,
    Status,
    Room,
    LevelOfCare,
    Ambulation,
    BirthDate,
    MoveInDate,
}

impl ResidentField {
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::PreferredName,
        Self::Status,
        Self::Room,
        Self::LevelOfCare,
        Self::Ambulation,
        Self::BirthDate,
        Self::MoveInDate,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PreferredName => "preferredName",
            Self::Status => "status",
            Self::Room => "room",
            Self::LevelOfCare => "levelOfCare",
            Self::Ambulation => "ambulation",
            Self::BirthDate => "birthDate",
            Self::MoveInDate => "moveInDate",
        }
    }
}

/// Raw state of the "create resident" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentForm {
    pub first_name: String,
    pub last_name: String,
    pub preferred_name: Option<String>,
    pub status: String,
    pub room: String,
    pub level_of_care: String,
    pub ambulation: String,
    pub birth_date: String,
    pub move_in_date: String,
}

impl Default for ResidentForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            preferred_name: None,
            status: "HERE".to_owned(),
            room: String::new(),
            level_of_care: "INDEPENDENT".to_owned(),
            ambulation: "NOLIMITATIONS".to_owned(),
            birth_date: String::new(),
            move_in_date: String::new(),
        }
    }
}

impl ResidentForm {
    pub fn validate_field(&self, field: ResidentField) -> Result<(), String> {
        match field {
            ResidentField::FirstName => bounded_text("firstName", &self.first_name, 2, 64),
            ResidentField::LastName => bounded_text("lastName", &self.last_name, 2, 64),
            ResidentField::PreferredName => Ok(()),
            ResidentField::Status => one_of::<ResidentStatus>(&self.status),
            ResidentField::Room => bounded_text("room", &self.room, 1, 10),
            ResidentField::LevelOfCare => one_of::<LevelOfCare>(&self.level_of_care),
            ResidentField::Ambulation => one_of::<Ambulation>(&self.ambulation),
            ResidentField::BirthDate => required("birthDate", &self.birth_date),
            ResidentField::MoveInDate => required("moveInDate", &self.move_in_date),
        }
    }

    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in ResidentField::ALL {
            errors.check(field.name(), self.validate_field(field));
        }
        errors
    }
}

fn required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is a required field"))
    } else {
        Ok(())
    }
}

fn bounded_text(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    required(field, value)?;
    let length = value.trim().chars().count();
    if length < min {
        Err(format!("{field} must be at least {min} characters"))
    } else if length > max {
        Err(format!("{field} must be at most {max} characters"))
    } else {
        Ok(())
    }
}

/// Time fields are optional (the normalizer substitutes defaults), but when
/// the UI does contribute one it must be a wall-clock `HH:MM` value.
fn optional_clock(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    let well_formed = value.split_once(':').is_some_and(|(hour, minute)| {
        matches!(hour.parse::<u32>(), Ok(hour) if hour < 24)
            && matches!(minute.parse::<u32>(), Ok(minute) if minute < 60)
    });
    if well_formed {
        Ok(())
    } else {
        Err(format!("{field} must be a HH:MM time"))
    }
}

fn one_of<T>(value: &str) -> Result<(), String>
where
    T: std::str::FromStr<Err = crate::models::UnknownVariant>,
{
    value.parse::<T>().map(|_| ()).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_program_form() -> ProgramForm {
        let mut tags = TagList::new();
        tags.add("Dance");
        ProgramForm {
            name: "Morning Stretch".to_owned(),
            location: "Activity Room".to_owned(),
            start: "2024-03-05".to_owned(),
            end: "2024-03-05".to_owned(),
            tags,
            ..ProgramForm::default()
        }
    }

    fn valid_resident_form() -> ResidentForm {
        ResidentForm {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            room: "12B".to_owned(),
            birth_date: "1932-12-10".to_owned(),
            move_in_date: "2021-05-01".to_owned(),
            ..ResidentForm::default()
        }
    }

    #[test]
    fn valid_program_form_has_no_errors() {
        assert!(valid_program_form().validate().is_empty());
    }

    #[test]
    fn each_missing_program_field_is_reported_on_that_field() {
        let mut form = valid_program_form();
        form.name = String::new();
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("name"), Some("name is a required field"));

        let mut form = valid_program_form();
        form.tags = TagList::new();
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.message("tags").is_some());
    }

    #[test]
    fn short_and_long_names_are_rejected() {
        let mut form = valid_program_form();
        form.name = "Yoga".to_owned();
        assert_eq!(
            form.validate().message("name"),
            Some("name must be at least 5 characters")
        );
        form.name = "x".repeat(65);
        assert_eq!(
            form.validate().message("name"),
            Some("name must be at most 64 characters")
        );
        // length is measured after trimming
        form.name = format!("  {}  ", "x".repeat(64));
        assert!(form.validate().is_empty());
    }

    #[test]
    fn empty_time_is_accepted_and_garbage_is_not() {
        let mut form = valid_program_form();
        form.start_time = String::new();
        assert!(form.validate_field(ProgramField::StartTime).is_ok());
        form.start_time = "14:30".to_owned();
        assert!(form.validate_field(ProgramField::StartTime).is_ok());
        form.start_time = "25:00".to_owned();
        assert!(form.validate_field(ProgramField::StartTime).is_err());
        form.start_time = "2pm".to_owned();
        assert!(form.validate_field(ProgramField::StartTime).is_err());
    }

    #[test]
    fn unknown_select_values_are_reported() {
        let mut form = valid_program_form();
        form.level_of_care = "SUPERVISED".to_owned();
        assert_eq!(
            form.validate().message("levelOfCare"),
            Some("\"SUPERVISED\" is not a known level of care")
        );
        let mut form = valid_program_form();
        form.recurrence = "Daily".to_owned();
        assert!(form.validate().message("recurrence").is_some());
    }

    #[test]
    fn valid_resident_form_has_no_errors() {
        assert!(valid_resident_form().validate().is_empty());
    }

    #[test]
    fn resident_rules() {
        let mut form = valid_resident_form();
        form.first_name = "A".to_owned();
        assert_eq!(
            form.validate().message("firstName"),
            Some("firstName must be at least 2 characters")
        );

        let mut form = valid_resident_form();
        form.room = "101-West-Wing".to_owned();
        assert_eq!(
            form.validate().message("room"),
            Some("room must be at most 10 characters")
        );

        let mut form = valid_resident_form();
        form.preferred_name = None;
        assert!(form.validate().is_empty(), "preferredName is optional");

        let mut form = valid_resident_form();
        form.ambulation = "SCOOTER".to_owned();
        assert!(form.validate().message("ambulation").is_some());

        let mut form = valid_resident_form();
        form.move_in_date = String::new();
        assert_eq!(
            form.validate().message("moveInDate"),
            Some("moveInDate is a required field")
        );
    }

    #[test]
    fn per_field_validation_matches_whole_form() {
        let mut form = valid_program_form();
        form.location = "gym".to_owned();
        let errors = form.validate();
        for field in ProgramField::ALL {
            assert_eq!(
                form.validate_field(field).err(),
                errors.message(field.name()).map(str::to_owned)
            );
        }
    }
}
