//! Records and enumerations as served by the facility API (camelCase JSON).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tags::TagList;

/// A raw select value that does not belong to its enumeration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{value:?} is not a known {kind}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Wellness dimension a program addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Physical,
    Intellectual,
    Mental,
    Socialization,
    Social,
    Community,
}

impl FromStr for Dimension {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Physical" => Ok(Self::Physical),
            "Intellectual" => Ok(Self::Intellectual),
            "Mental" => Ok(Self::Mental),
            "Socialization" => Ok(Self::Socialization),
            "Social" => Ok(Self::Social),
            "Community" => Ok(Self::Community),
            _ => Err(UnknownVariant::new("dimension", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for Recurrence {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weekly" => Ok(Self::Weekly),
            "Monthly" => Ok(Self::Monthly),
            "Yearly" => Ok(Self::Yearly),
            _ => Err(UnknownVariant::new("recurrence", s)),
        }
    }
}

/// The API stores recurrence as a nested object, nullable on old records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSpec {
    #[serde(rename = "type")]
    pub kind: Option<Recurrence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LevelOfCare {
    Independent,
    Memory,
    Assisted,
    Longterm,
}

impl FromStr for LevelOfCare {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDEPENDENT" => Ok(Self::Independent),
            "MEMORY" => Ok(Self::Memory),
            "ASSISTED" => Ok(Self::Assisted),
            "LONGTERM" => Ok(Self::Longterm),
            _ => Err(UnknownVariant::new("level of care", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResidentStatus {
    Here,
    Hospital,
    Isolation,
    Loa,
}

impl FromStr for ResidentStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HERE" => Ok(Self::Here),
            "HOSPITAL" => Ok(Self::Hospital),
            "ISOLATION" => Ok(Self::Isolation),
            "LOA" => Ok(Self::Loa),
            _ => Err(UnknownVariant::new("resident status", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ambulation {
    NoLimitations,
    Cane,
    Walker,
    WheelChair,
}

impl FromStr for Ambulation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOLIMITATIONS" => Ok(Self::NoLimitations),
            "CANE" => Ok(Self::Cane),
            "WALKER" => Ok(Self::Walker),
            "WHEELCHAIR" => Ok(Self::WheelChair),
            _ => Err(UnknownVariant::new("ambulation", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Active,
    Inactive,
}

impl FromStr for AttendanceStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(UnknownVariant::new("attendance status", s)),
        }
    }
}

/// Join record between a program and a resident. The server is responsible
/// for keeping the (program, resident) pair unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub program_id: i64,
    pub resident_id: i64,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: i64,
    /// Self-reference for recurring series; a child belongs to its parent
    /// but is stored independently.
    pub parent_id: Option<i64>,
    pub name: String,
    pub location: String,
    pub all_day: bool,
    pub start: String,
    pub end: String,
    pub tags: TagList,
    pub created_at: String,
    pub updated_at: String,
    pub dimension: Dimension,
    pub facilitators: Vec<String>,
    pub level_of_care: Vec<LevelOfCare>,
    pub hobbies: Vec<String>,
    pub recurrence: Option<RecurrenceSpec>,
    pub is_repeated: bool,
    pub applicant_id: Option<i64>,
    #[serde(default)]
    pub attendance: Vec<Attendance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    /// The API serves resident ids as strings; the attendance linker
    /// coerces them to integers on the way out.
    pub id: String,
    /// Derived display name, `"{firstName} {lastName}"`.
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub preferred_name: Option<String>,
    pub status: ResidentStatus,
    pub room: String,
    pub level_of_care: LevelOfCare,
    pub ambulation: Ambulation,
    pub birth_date: String,
    pub move_in_date: String,
    pub created_at: String,
    pub updated_at: String,
    pub applicant_id: Option<i64>,
    #[serde(default)]
    pub attendance: Vec<Attendance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_values_round_trip() {
        assert_eq!(
            serde_json::to_string(&LevelOfCare::Independent).unwrap(),
            "\"INDEPENDENT\""
        );
        assert_eq!(
            serde_json::to_string(&Ambulation::NoLimitations).unwrap(),
            "\"NOLIMITATIONS\""
        );
        assert_eq!(
            serde_json::to_string(&Ambulation::WheelChair).unwrap(),
            "\"WHEELCHAIR\""
        );
        assert_eq!(serde_json::to_string(&ResidentStatus::Loa).unwrap(), "\"LOA\"");
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Active).unwrap(),
            "\"Active\""
        );
        assert_eq!("MEMORY".parse::<LevelOfCare>().unwrap(), LevelOfCare::Memory);
        assert_eq!("Weekly".parse::<Recurrence>().unwrap(), Recurrence::Weekly);
    }

    #[test]
    fn unknown_select_value_is_rejected() {
        let err = "weekly".parse::<Recurrence>().unwrap_err();
        assert_eq!(err.to_string(), "\"weekly\" is not a known recurrence");
    }

    #[test]
    fn resident_record_deserializes() {
        let resident: Resident = serde_json::from_str(
            r#"{
                "id": "7",
                "name": "Ada Lovelace",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "preferredName": null,
                "status": "HERE",
                "room": "12B",
                "levelOfCare": "INDEPENDENT",
                "ambulation": "CANE",
                "birthDate": "1932-12-10T00:00:00.000Z",
                "moveInDate": "2021-05-01T00:00:00.000Z",
                "createdAt": "2021-05-01T09:00:00.000Z",
                "updatedAt": "2021-05-01T09:00:00.000Z",
                "applicantId": null,
                "attendance": [{"programId": 5, "residentId": 7, "status": "Active"}]
            }"#,
        )
        .unwrap();
        assert_eq!(resident.id, "7");
        assert_eq!(resident.status, ResidentStatus::Here);
        assert_eq!(resident.attendance[0].status, AttendanceStatus::Active);
    }
}
