use crate::models::{
    ContractorForm, ContractorType, FormField, FormRules, FormValidationResult, IssueKind,
    ValidationIssue,
};
use crate::validation::format::FormatValidator;
use crate::validation::nip::is_valid_nip;
use crate::validation::pesel::is_valid_pesel;

/// The gate in front of submission.
pub struct FormValidator {
    rules: FormRules,
}

impl FormValidator {
    pub fn new() -> Self {
        FormValidator {
            rules: FormRules::new(),
        }
    }

    pub fn with_rules(rules: FormRules) -> Self {
        FormValidator { rules }
    }

    /// Clears the inactive identifier, then checks the field rules and the
    /// active identifier's checksum. A checksum failure replaces any rule
    /// message on the same field.
    pub fn validate(&self, form: &mut ContractorForm) -> FormValidationResult {
        form.clear_inactive_identifier();

        let mut issues = FormatValidator::validate(form, &self.rules);

        if let Some(issue) = Self::check_identifier(form) {
            let field = issue.field;
            match issues.iter_mut().find(|existing| existing.field == field) {
                Some(existing) => *existing = issue,
                None => issues.push(issue),
            }
        }

        log::debug!(
            "Validated {} form: {} issue(s)",
            form.contractor_type,
            issues.len()
        );

        FormValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    fn check_identifier(form: &ContractorForm) -> Option<ValidationIssue> {
        match form.contractor_type {
            ContractorType::Person if !is_valid_pesel(&form.id) => Some(ValidationIssue {
                field: FormField::Id,
                kind: IssueKind::Checksum,
                message: "invalid id number".to_string(),
            }),
            ContractorType::Business if !is_valid_nip(&form.nip) => Some(ValidationIssue {
                field: FormField::Nip,
                kind: IssueKind::Checksum,
                message: "invalid nip number".to_string(),
            }),
            _ => None,
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str) -> ContractorForm {
        ContractorForm {
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            contractor_type: ContractorType::Person,
            id: id.to_string(),
            nip: "1234563218".to_string(),
        }
    }

    fn business(nip: &str) -> ContractorForm {
        ContractorForm {
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            contractor_type: ContractorType::Business,
            id: "44051401359".to_string(),
            nip: nip.to_string(),
        }
    }

    #[test]
    fn test_valid_person_clears_nip() {
        let mut form = person("44051401359");
        let result = FormValidator::new().validate(&mut form);
        assert!(result.is_valid);
        assert!(result.issues.is_empty());
        assert_eq!(form.nip, "");
    }

    #[test]
    fn test_valid_business_clears_id() {
        let mut form = business("123-456-32-18");
        let result = FormValidator::new().validate(&mut form);
        assert!(result.is_valid);
        assert_eq!(form.id, "");
    }

    #[test]
    fn test_invalid_business_still_clears_id() {
        let mut form = business("1234563219");
        let result = FormValidator::new().validate(&mut form);
        assert!(!result.is_valid);
        assert_eq!(form.id, "");
        assert_eq!(result.error_for(FormField::Nip), Some("invalid nip number"));
        assert_eq!(result.error_for(FormField::Id), None);
    }

    #[test]
    fn test_bad_pesel_checksum() {
        let mut form = person("44051401358");
        let result = FormValidator::new().validate(&mut form);
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Checksum);
        assert_eq!(result.error_for(FormField::Id), Some("invalid id number"));
    }

    #[test]
    fn test_checksum_message_replaces_length_message() {
        let mut form = person("4405140135");
        let result = FormValidator::new().validate(&mut form);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Checksum);
        assert_eq!(result.error_for(FormField::Id), Some("invalid id number"));

        let mut form = business("123-456-32-189");
        let result = FormValidator::new().validate(&mut form);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.error_for(FormField::Nip), Some("invalid nip number"));
    }

    #[test]
    fn test_whitespace_first_name_passes_gate() {
        let mut form = person("44051401359");
        form.first_name = " ".to_string();
        assert!(FormValidator::new().validate(&mut form).is_valid);
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let mut form = person("");
        let result = FormValidator::new().validate(&mut form);
        assert!(!result.is_valid);
        assert_eq!(result.error_for(FormField::Id), Some("invalid id number"));
    }

    #[test]
    fn test_missing_names_block_submission() {
        let mut form = person("44051401359");
        form.first_name.clear();
        let result = FormValidator::new().validate(&mut form);
        assert!(!result.is_valid);
        assert_eq!(
            result.error_for(FormField::FirstName),
            Some("firstName is a required field")
        );
    }

    #[test]
    fn test_checksum_runs_without_field_rules() {
        let validator = FormValidator::with_rules(FormRules { fields: Vec::new() });

        let mut form = person("44051401359");
        form.first_name.clear();
        assert!(validator.validate(&mut form).is_valid);

        let mut form = person("4405140135");
        let result = validator.validate(&mut form);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Checksum);
    }
}
