use crate::models::{
    ContractorForm, FormField, FormRules, IssueKind, ValidationIssue, ValidationRule,
};
use crate::validation::nip::normalize_nip;

pub struct FormatValidator;

impl FormatValidator {
    /// Apply the declarative rules; at most one issue per field.
    pub fn validate(form: &ContractorForm, rules: &FormRules) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for field_rule in &rules.fields {
            let value = Self::measured_value(form, field_rule.field);
            let issue = field_rule
                .validation_rules
                .iter()
                .find_map(|rule| Self::check(field_rule.field, &value, rule));
            if let Some(issue) = issue {
                issues.push(issue);
            }
        }

        issues
    }

    // NIP length counts digits only, so grouped input is not rejected here
    fn measured_value(form: &ContractorForm, field: FormField) -> String {
        match field {
            FormField::Nip => normalize_nip(&form.nip).into_owned(),
            _ => form.value(field).to_string(),
        }
    }

    fn check(field: FormField, value: &str, rule: &ValidationRule) -> Option<ValidationIssue> {
        match rule {
            ValidationRule::Required => {
                if value.is_empty() {
                    return Some(ValidationIssue {
                        field,
                        kind: IssueKind::Required,
                        message: format!("{} is a required field", field),
                    });
                }
            }
            ValidationRule::FieldLength(expected) => {
                let actual = value.chars().count();
                if actual == 0 || actual == *expected {
                    return None;
                }
                let bound = if actual < *expected { "at least" } else { "at most" };
                return Some(ValidationIssue {
                    field,
                    kind: IssueKind::Length,
                    message: format!("{} must be {} {} characters", field, bound, expected),
                });
            }
        }
        None
    }
}
