//! Save-time validation for the edit form.

use crate::api::RecordPatch;
use crate::ui::editor::state::{EditField, FieldId};

/// Check all fields and either produce the patch to commit or the inline
/// messages to show. Name is required; email is required and must look
/// like an email; phone and website are unconstrained.
pub fn validate_fields(fields: &[EditField]) -> Result<RecordPatch, Vec<(FieldId, String)>> {
    let mut errors = Vec::new();

    for field in fields {
        match field.id {
            FieldId::Name => {
                if field.value.trim().is_empty() {
                    errors.push((FieldId::Name, "Please enter a name".to_string()));
                }
            }
            FieldId::Email => {
                if !is_valid_email(field.value.trim()) {
                    errors.push((FieldId::Email, "Enter valid email".to_string()));
                }
            }
            FieldId::Phone | FieldId::Website => {}
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut patch = RecordPatch::default();
    for field in fields {
        let value = Some(field.value.clone());
        match field.id {
            FieldId::Name => patch.name = value,
            FieldId::Email => patch.email = value,
            FieldId::Phone => patch.phone = value,
            FieldId::Website => patch.website = value,
        }
    }
    Ok(patch)
}

/// Syntactic email check: one `@` with a non-empty local part and a domain
/// containing an interior dot.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}
