use crate::models::FormField;

/// Declarative field rules checked before the identifier checksums.
pub struct FormRules {
    pub fields: Vec<FieldRule>,
}

pub struct FieldRule {
    pub field: FormField,
    pub validation_rules: Vec<ValidationRule>,
}

pub enum ValidationRule {
    Required,
    /// Exact length, only checked when the value is non-empty.
    FieldLength(usize),
}

impl FormRules {
    pub fn new() -> Self {
        let fields = vec![
            FieldRule {
                field: FormField::FirstName,
                validation_rules: vec![ValidationRule::Required],
            },
            FieldRule {
                field: FormField::LastName,
                validation_rules: vec![ValidationRule::Required],
            },
            FieldRule {
                field: FormField::Id,
                validation_rules: vec![ValidationRule::FieldLength(11)],
            },
            FieldRule {
                field: FormField::Nip,
                validation_rules: vec![ValidationRule::FieldLength(10)],
            },
        ];

        FormRules { fields }
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self::new()
    }
}
