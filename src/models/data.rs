use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractorType {
    #[default]
    Person,
    Business,
}

impl ContractorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractorType::Person => "person",
            ContractorType::Business => "business",
        }
    }

    /// The identifier field that is shown (and validated) for this type.
    pub fn active_identifier(&self) -> FormField {
        match self {
            ContractorType::Person => FormField::Id,
            ContractorType::Business => FormField::Nip,
        }
    }
}

impl fmt::Display for ContractorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values as entered by the user.
///
/// Field names on the wire are the ones the save endpoint binds to
/// (`firstName`, `lastName`, `type`, `id`, `nip`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractorForm {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub contractor_type: ContractorType,
    pub id: String,
    pub nip: String,
}

impl ContractorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Type => self.contractor_type.as_str(),
            FormField::Id => &self.id,
            FormField::Nip => &self.nip,
        }
    }

    /// Empty the identifier that does not belong to the selected type.
    pub fn clear_inactive_identifier(&mut self) {
        match self.contractor_type {
            ContractorType::Person => self.nip.clear(),
            ContractorType::Business => self.id.clear(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Type,
    Id,
    Nip,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Type => "type",
            FormField::Id => "id",
            FormField::Nip => "nip",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Required,
    Length,
    Checksum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: FormField,
    pub kind: IssueKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValidationResult {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl FormValidationResult {
    /// The inline message shown next to `field`, if any.
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

/// JSON body posted to the save endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorPayload {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub contractor_type: ContractorType,
    pub id: String,
    pub nip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ContractorPayload {
    pub fn from_form(form: &ContractorForm, image: Option<String>) -> Self {
        ContractorPayload {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            contractor_type: form.contractor_type,
            id: form.id.clone(),
            nip: form.nip.clone(),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_names() {
        let form = ContractorForm {
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            contractor_type: ContractorType::Business,
            id: String::new(),
            nip: "1234563218".to_string(),
        };
        let json = serde_json::to_value(ContractorPayload::from_form(&form, None)).unwrap();

        assert_eq!(json["firstName"], "Jan");
        assert_eq!(json["lastName"], "Kowalski");
        assert_eq!(json["type"], "business");
        assert_eq!(json["nip"], "1234563218");
        assert_eq!(json["id"], "");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_form_defaults_to_person() {
        let form: ContractorForm = serde_json::from_str(r#"{"firstName": "Anna"}"#).unwrap();
        assert_eq!(form.contractor_type, ContractorType::Person);
        assert_eq!(form.first_name, "Anna");
        assert!(form.id.is_empty());
    }

    #[test]
    fn test_clear_inactive_identifier() {
        let mut form = ContractorForm {
            contractor_type: ContractorType::Person,
            id: "44051401359".to_string(),
            nip: "1234563218".to_string(),
            ..ContractorForm::default()
        };
        form.clear_inactive_identifier();
        assert_eq!(form.nip, "");
        assert_eq!(form.id, "44051401359");

        form.contractor_type = ContractorType::Business;
        form.nip = "1234563218".to_string();
        form.clear_inactive_identifier();
        assert_eq!(form.id, "");
        assert_eq!(form.nip, "1234563218");
    }
}
