//! JSON models for patient records.
//!
//! These are the shapes persisted in the dataset file and accepted at the HTTP
//! boundary. Enum and date encodings are fixed here so that round-tripping a
//! record through storage is lossless.

use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

use crate::enum_display_serde;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Administrative gender of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
    Other,
}
enum_display_serde!(Gender);

/// Blood group, restricted to the eight `(A|B|AB|O)[+-]` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}
enum_display_serde!(BloodGroup);

/// Where the patient currently is in the admission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PatientStatus {
    Admitted,
    Discharged,
    #[serde(rename = "Under Observation")]
    UnderObservation,
}
enum_display_serde!(PatientStatus);

/// A single patient record, as persisted in the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    /// Unique ID of the patient.
    #[schema(example = 1)]
    pub id: u32,

    /// Full name of the patient.
    pub name: String,

    /// Age in years, strictly between 0 and 130.
    pub age: u8,

    pub gender: Gender,

    /// Contact number.
    pub contact: String,

    /// Email address of the patient.
    pub email: String,

    /// Residential address.
    pub address: String,

    /// Blood group like `A+`, `O-`, `AB+`.
    pub blood_group: BloodGroup,

    /// Past medical issues, in the order they were recorded.
    pub medical_history: Vec<String>,

    /// Date of hospital admission.
    #[serde(with = "iso_date")]
    pub admission_date: Date,

    /// Date of discharge, if any.
    #[serde(default, with = "iso_date::option")]
    pub discharge_date: Option<Date>,

    /// Name of the doctor assigned.
    pub doctor_assigned: String,

    pub current_status: PatientStatus,
}

impl Patient {
    /// Checks the record against the field constraints.
    ///
    /// Every violated constraint produces one [`FieldError`], so a caller gets
    /// the full picture in a single pass instead of failing on the first bad
    /// field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.id == 0 {
            errors.push(FieldError::new("id", "must be a positive integer"));
        }
        if self.name.is_empty() {
            errors.push(FieldError::new("name", "must not be empty"));
        }
        if !(1..=129).contains(&self.age) {
            errors.push(FieldError::new("age", "must be between 1 and 129"));
        }
        if !(9..=15).contains(&self.contact.chars().count()) {
            errors.push(FieldError::new(
                "contact",
                "must be 9 to 15 characters long",
            ));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "is not a valid email address"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

/// Partial patch over a [`Patient`].
///
/// Every field is optional; absent fields leave the stored value untouched.
/// The identifier is not patchable, it names the record being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub blood_group: Option<BloodGroup>,
    pub medical_history: Option<Vec<String>>,
    #[serde(default, with = "iso_date::option")]
    pub admission_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub discharge_date: Option<Date>,
    pub doctor_assigned: Option<String>,
    pub current_status: Option<PatientStatus>,
}

impl PatientUpdate {
    /// Overlays every present field onto `patient`.
    ///
    /// The merged record is not validated here; callers re-validate the full
    /// record afterwards.
    pub fn apply_to(self, patient: &mut Patient) {
        if let Some(name) = self.name {
            patient.name = name;
        }
        if let Some(age) = self.age {
            patient.age = age;
        }
        if let Some(gender) = self.gender {
            patient.gender = gender;
        }
        if let Some(contact) = self.contact {
            patient.contact = contact;
        }
        if let Some(email) = self.email {
            patient.email = email;
        }
        if let Some(address) = self.address {
            patient.address = address;
        }
        if let Some(blood_group) = self.blood_group {
            patient.blood_group = blood_group;
        }
        if let Some(medical_history) = self.medical_history {
            patient.medical_history = medical_history;
        }
        if let Some(admission_date) = self.admission_date {
            patient.admission_date = admission_date;
        }
        if let Some(discharge_date) = self.discharge_date {
            patient.discharge_date = Some(discharge_date);
        }
        if let Some(doctor_assigned) = self.doctor_assigned {
            patient.doctor_assigned = doctor_assigned;
        }
        if let Some(current_status) = self.current_status {
            patient.current_status = current_status;
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// A record violated one or more field constraints.
#[derive(Debug, Clone, thiserror::Error)]
#[error("patient record failed validation")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// Field a collection view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Age,
    Name,
}
enum_display_serde!(SortField);

impl SortField {
    /// Parses the query-string form, `age` or `name`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "age" => Some(Self::Age),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Direction of a sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}
enum_display_serde!(SortOrder);

impl SortOrder {
    /// Parses the query-string form, `asc` or `desc`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Minimal structural check, one `@` with a non-empty local part and a dotted
/// domain. Full RFC address grammar is out of scope here.
fn is_valid_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn patient() -> Patient {
        Patient {
            id: 1,
            name: "Ann Clarke".to_string(),
            age: 30,
            gender: Gender::Female,
            contact: "0123456789".to_string(),
            email: "ann.clarke@example.com".to_string(),
            address: "12 Harbour Road".to_string(),
            blood_group: BloodGroup::OPositive,
            medical_history: vec!["asthma".to_string()],
            admission_date: date!(2024 - 03 - 05),
            discharge_date: None,
            doctor_assigned: "Dr. Mensah".to_string(),
            current_status: PatientStatus::Admitted,
        }
    }

    #[test]
    fn valid_patient_passes() {
        assert!(patient().validate().is_ok());
    }

    #[test]
    fn out_of_range_fields_are_all_reported() {
        let mut p = patient();
        p.id = 0;
        p.age = 200;
        p.contact = "12345".to_string();

        let err = p.validate().unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["id", "age", "contact"]);
    }

    #[test]
    fn empty_name_rejected() {
        let mut p = patient();
        p.name = String::new();
        let err = p.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "name");
    }

    #[test]
    fn email_shape() {
        for good in ["a@b.co", "first.last@clinic.example.org"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["", "no-at-sign", "@example.com", "a@b", "a@b..c", "a b@c.de"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn record_round_trips_through_json() {
        let p = patient();
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["gender"], "Female");
        assert_eq!(json["blood_group"], "O+");
        assert_eq!(json["current_status"], "Admitted");
        assert_eq!(json["admission_date"], "2024-03-05");
        assert_eq!(json["discharge_date"], serde_json::Value::Null);

        let back: Patient = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn status_uses_spaced_wire_form() {
        let p = Patient {
            current_status: PatientStatus::UnderObservation,
            ..patient()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["current_status"], "Under Observation");
        assert_eq!(PatientStatus::UnderObservation.to_string(), "Under Observation");
    }

    #[test]
    fn patch_overlays_only_present_fields() {
        let mut p = patient();
        let before = p.clone();

        let patch: PatientUpdate = serde_json::from_str(r#"{"age": 40}"#).unwrap();
        patch.apply_to(&mut p);

        assert_eq!(p.age, 40);
        assert_eq!(
            Patient {
                age: before.age,
                ..p.clone()
            },
            before
        );
    }

    #[test]
    fn patch_treats_null_as_absent() {
        let patch: PatientUpdate =
            serde_json::from_str(r#"{"name": null, "discharge_date": null}"#).unwrap();
        assert_eq!(patch, PatientUpdate::default());
    }

    #[test]
    fn patch_sets_discharge_date() {
        let mut p = patient();
        let patch: PatientUpdate =
            serde_json::from_str(r#"{"discharge_date": "2024-03-09", "current_status": "Discharged"}"#)
                .unwrap();
        patch.apply_to(&mut p);

        assert_eq!(p.discharge_date, Some(date!(2024 - 03 - 09)));
        assert_eq!(p.current_status, PatientStatus::Discharged);
    }

    #[test]
    fn sort_params_parse_only_their_sets() {
        assert_eq!(SortField::parse("age"), Some(SortField::Age));
        assert_eq!(SortField::parse("name"), Some(SortField::Name));
        assert_eq!(SortField::parse("height"), None);

        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("up"), None);
    }
}
