//! Employee Model

use serde::{Deserialize, Deserializer, Serialize};

/// A single person as returned by the directory and detail endpoints
///
/// Keys use the field tokens (`"WorkEmail"`); the camelCase keys the live
/// service sends (`"workEmail"`) are accepted as well. Any attribute that was
/// not requested or not returned stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by the remote service
    #[serde(rename = "ID", alias = "id", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(
        rename = "DisplayName",
        alias = "displayName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,
    #[serde(
        rename = "FirstName",
        alias = "firstName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename = "LastName",
        alias = "lastName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(
        rename = "PreferredName",
        alias = "preferredName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_name: Option<String>,
    #[serde(rename = "Gender", alias = "gender", default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(
        rename = "JobTitle",
        alias = "jobTitle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub job_title: Option<String>,
    #[serde(
        rename = "WorkPhone",
        alias = "workPhone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub work_phone: Option<String>,
    #[serde(
        rename = "MobilePhone",
        alias = "mobilePhone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_phone: Option<String>,
    #[serde(
        rename = "WorkEmail",
        alias = "workEmail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub work_email: Option<String>,
    #[serde(
        rename = "Department",
        alias = "department",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<String>,
    #[serde(
        rename = "Location",
        alias = "location",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        rename = "Division",
        alias = "division",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub division: Option<String>,
    #[serde(
        rename = "LinkedIn",
        alias = "linkedIn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_in: Option<String>,
    #[serde(
        rename = "WorkPhoneExtension",
        alias = "workPhoneExtension",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub work_phone_extension: Option<String>,
    /// `None` when not returned, never coerced to `false`
    #[serde(
        rename = "PhotoUploaded",
        alias = "photoUploaded",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_uploaded: Option<bool>,
    #[serde(
        rename = "PhotoURL",
        alias = "photoUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
    /// `None` when not returned, never coerced to `0`
    #[serde(
        rename = "CanUploadPhoto",
        alias = "canUploadPhoto",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub can_upload_photo: Option<i32>,
    #[serde(
        rename = "HireDate",
        alias = "hireDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hire_date: Option<String>,
    #[serde(
        rename = "Reporting to",
        alias = "ReportingTo",
        alias = "supervisor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reporting_to: Option<String>,
}

/// `null` decodes like a missing key
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Employee {
    /// Case-sensitive match on the work email
    pub fn has_work_email(&self, email: &str) -> bool {
        self.work_email.as_deref() == Some(email)
    }
}

/// Envelope of `GET /employees/directory`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    #[serde(rename = "Employees", alias = "employees", default)]
    pub employees: Vec<Employee>,
}
