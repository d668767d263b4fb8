//! Webhook submission payload

use crate::state::InsightsForm;
use serde::Serialize;

/// The JSON body POSTed to the webhook. Built fresh per submit attempt,
/// after validation has already passed; no re-validation happens here.
///
/// Optional fields are omitted from the JSON entirely (not sent as empty
/// strings) when their trimmed source value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub full_name: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_birth: Option<String>,
    pub place_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub area_of_focus: String,
    pub email: String,
}

impl SubmissionPayload {
    /// Read the current field values: trim strings, lowercase the email,
    /// and drop trimmed-empty optionals.
    pub fn from_form(form: &InsightsForm) -> Self {
        Self {
            full_name: form.full_name.as_text().trim().to_string(),
            date_of_birth: form.date_of_birth.as_text().trim().to_string(),
            time_of_birth: non_empty(form.time_of_birth.as_text()),
            place_of_birth: form.place_of_birth.as_text().trim().to_string(),
            gender: non_empty(form.gender.as_text()),
            area_of_focus: form.area_of_focus.as_text().to_string(),
            email: form.email.as_text().trim().to_lowercase(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> InsightsForm {
        let mut form = InsightsForm::new();
        form.full_name.set_text("  Jane Doe  ");
        form.date_of_birth.set_text("1990-04-12");
        form.place_of_birth.set_text(" Lisbon ");
        form.area_of_focus.select(1);
        form.email.set_text("  Jane@Example.COM ");
        form
    }

    #[test]
    fn trims_strings_and_lowercases_email() {
        let payload = SubmissionPayload::from_form(&filled_form());
        assert_eq!(payload.full_name, "Jane Doe");
        assert_eq!(payload.place_of_birth, "Lisbon");
        assert_eq!(payload.email, "jane@example.com");
        assert_eq!(payload.area_of_focus, "Career & Work");
    }

    #[test]
    fn omits_empty_optionals_from_json() {
        let payload = SubmissionPayload::from_form(&filled_form());
        assert_eq!(payload.time_of_birth, None);
        assert_eq!(payload.gender, None);

        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("timeOfBirth"));
        assert!(!object.contains_key("gender"));
    }

    #[test]
    fn whitespace_only_optionals_are_omitted() {
        let mut form = filled_form();
        form.time_of_birth.set_text("   ");
        let payload = SubmissionPayload::from_form(&form);
        assert_eq!(payload.time_of_birth, None);
    }

    #[test]
    fn present_optionals_are_included() {
        let mut form = filled_form();
        form.time_of_birth.set_text(" 14:30 ");
        form.gender.select(0);
        let payload = SubmissionPayload::from_form(&form);
        assert_eq!(payload.time_of_birth.as_deref(), Some("14:30"));
        assert_eq!(payload.gender.as_deref(), Some("Female"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["timeOfBirth"], "14:30");
        assert_eq!(json["gender"], "Female");
    }

    #[test]
    fn json_keys_are_camel_case() {
        let json = serde_json::to_value(SubmissionPayload::from_form(&filled_form())).unwrap();
        let object = json.as_object().unwrap();
        for key in ["fullName", "dateOfBirth", "placeOfBirth", "areaOfFocus", "email"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
