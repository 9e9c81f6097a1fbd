//! Employee Field Model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requestable employee attribute
///
/// The wire string doubles as the `fields` query value and the JSON key of
/// the returned attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeField {
    DisplayName,
    FirstName,
    LastName,
    PreferredName,
    Gender,
    JobTitle,
    WorkPhone,
    MobilePhone,
    WorkEmail,
    Department,
    Location,
    Division,
    LinkedIn,
    WorkPhoneExtension,
    PhotoUploaded,
    #[serde(rename = "PhotoURL")]
    PhotoUrl,
    CanUploadPhoto,
    HireDate,
    #[serde(rename = "Reporting to")]
    ReportingTo,
}

impl EmployeeField {
    /// Every known token, in declaration order
    pub const ALL: [EmployeeField; 19] = [
        EmployeeField::DisplayName,
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::PreferredName,
        EmployeeField::Gender,
        EmployeeField::JobTitle,
        EmployeeField::WorkPhone,
        EmployeeField::MobilePhone,
        EmployeeField::WorkEmail,
        EmployeeField::Department,
        EmployeeField::Location,
        EmployeeField::Division,
        EmployeeField::LinkedIn,
        EmployeeField::WorkPhoneExtension,
        EmployeeField::PhotoUploaded,
        EmployeeField::PhotoUrl,
        EmployeeField::CanUploadPhoto,
        EmployeeField::HireDate,
        EmployeeField::ReportingTo,
    ];

    /// Fields requested when the caller names none. `ReportingTo` is not part of it.
    pub const DEFAULTS: [EmployeeField; 18] = [
        EmployeeField::DisplayName,
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::PreferredName,
        EmployeeField::Gender,
        EmployeeField::JobTitle,
        EmployeeField::WorkPhone,
        EmployeeField::MobilePhone,
        EmployeeField::WorkEmail,
        EmployeeField::Department,
        EmployeeField::Location,
        EmployeeField::Division,
        EmployeeField::LinkedIn,
        EmployeeField::WorkPhoneExtension,
        EmployeeField::PhotoUploaded,
        EmployeeField::PhotoUrl,
        EmployeeField::CanUploadPhoto,
        EmployeeField::HireDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::DisplayName => "DisplayName",
            EmployeeField::FirstName => "FirstName",
            EmployeeField::LastName => "LastName",
            EmployeeField::PreferredName => "PreferredName",
            EmployeeField::Gender => "Gender",
            EmployeeField::JobTitle => "JobTitle",
            EmployeeField::WorkPhone => "WorkPhone",
            EmployeeField::MobilePhone => "MobilePhone",
            EmployeeField::WorkEmail => "WorkEmail",
            EmployeeField::Department => "Department",
            EmployeeField::Location => "Location",
            EmployeeField::Division => "Division",
            EmployeeField::LinkedIn => "LinkedIn",
            EmployeeField::WorkPhoneExtension => "WorkPhoneExtension",
            EmployeeField::PhotoUploaded => "PhotoUploaded",
            EmployeeField::PhotoUrl => "PhotoURL",
            EmployeeField::CanUploadPhoto => "CanUploadPhoto",
            EmployeeField::HireDate => "HireDate",
            EmployeeField::ReportingTo => "Reporting to",
        }
    }
}

impl std::fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token that is not one of the known employee fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown employee field: {0}")]
pub struct UnknownField(pub String);

impl std::str::FromStr for EmployeeField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmployeeField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Ordered list of fields to request
///
/// Order only affects the serialized `fields` query value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeFields(Vec<EmployeeField>);

impl EmployeeFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full default set, in wire order
    pub fn default_set() -> Self {
        Self(EmployeeField::DEFAULTS.to_vec())
    }

    pub fn push(&mut self, field: EmployeeField) {
        self.0.push(field);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeField> {
        self.0.iter()
    }

    /// Concatenates the tokens with `sep` between consecutive entries.
    ///
    /// Returns an empty string for no tokens and the bare token for one.
    /// The output is allocated once at its final length.
    pub fn join(&self, sep: &str) -> String {
        match self.0.as_slice() {
            [] => String::new(),
            [only] => only.as_str().to_string(),
            [first, rest @ ..] => {
                let len = sep.len() * rest.len()
                    + self.0.iter().map(|f| f.as_str().len()).sum::<usize>();

                let mut out = String::with_capacity(len);
                out.push_str(first.as_str());
                for field in rest {
                    out.push_str(sep);
                    out.push_str(field.as_str());
                }
                out
            }
        }
    }
}

impl From<Vec<EmployeeField>> for EmployeeFields {
    fn from(fields: Vec<EmployeeField>) -> Self {
        Self(fields)
    }
}

impl From<&[EmployeeField]> for EmployeeFields {
    fn from(fields: &[EmployeeField]) -> Self {
        Self(fields.to_vec())
    }
}

impl<const N: usize> From<[EmployeeField; N]> for EmployeeFields {
    fn from(fields: [EmployeeField; N]) -> Self {
        Self(fields.to_vec())
    }
}

impl From<&EmployeeFields> for EmployeeFields {
    fn from(fields: &EmployeeFields) -> Self {
        fields.clone()
    }
}

impl FromIterator<EmployeeField> for EmployeeFields {
    fn from_iter<I: IntoIterator<Item = EmployeeField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EmployeeFields {
    type Item = &'a EmployeeField;
    type IntoIter = std::slice::Iter<'a, EmployeeField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
