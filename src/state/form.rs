//! Form field state and focus traversal for the insights request form

use crate::validate;

/// Options for the gender choice field.
pub const GENDER_OPTIONS: &[&str] = &["Female", "Male", "Non-binary", "Prefer not to say"];

/// Options for the area-of-focus choice field.
pub const AREA_OF_FOCUS_OPTIONS: &[&str] = &[
    "Love & Relationships",
    "Career & Work",
    "Health & Wellness",
    "Finances",
    "General Guidance",
];

// Focus slot indices. The submit button occupies the slot after the last
// field so Tab traversal reaches it.
pub const FIELD_FULL_NAME: usize = 0;
pub const FIELD_DATE_OF_BIRTH: usize = 1;
pub const FIELD_TIME_OF_BIRTH: usize = 2;
pub const FIELD_PLACE_OF_BIRTH: usize = 3;
pub const FIELD_GENDER: usize = 4;
pub const FIELD_AREA_OF_FOCUS: usize = 5;
pub const FIELD_EMAIL: usize = 6;
pub const SUBMIT_ROW: usize = 7;
pub const SLOT_COUNT: usize = 8;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

/// A single form field with its configuration, current value, and inline
/// error state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub required: bool,
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            required,
            error: None,
        }
    }

    /// Create a new choice field
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        required: bool,
    ) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            required,
            error: None,
        }
    }

    /// Get the current value as text (selected option for choice fields,
    /// empty string if nothing is selected)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                selected.and_then(|i| options.get(i)).copied().unwrap_or("")
            }
        }
    }

    /// Replace the text value (no-op for choice fields)
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Select an option by index (no-op for text fields)
    #[allow(dead_code)]
    pub fn select(&mut self, index: usize) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if index < options.len() {
                *selected = Some(index);
            }
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Cycle a choice field forward through its options
    pub fn cycle_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = Some(match *selected {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Cycle a choice field backward through its options
    pub fn cycle_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = Some(match *selected {
                Some(0) | None => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        self.as_text()
    }
}

/// The insights request form: seven fields plus the submit slot
#[derive(Debug, Clone)]
pub struct InsightsForm {
    pub full_name: FormField,
    pub date_of_birth: FormField,
    pub time_of_birth: FormField,
    pub place_of_birth: FormField,
    pub gender: FormField,
    pub area_of_focus: FormField,
    pub email: FormField,
    pub active_field_index: usize,
}

impl InsightsForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full name", true),
            date_of_birth: FormField::text("dateOfBirth", "Date of birth (YYYY-MM-DD)", true),
            time_of_birth: FormField::text("timeOfBirth", "Time of birth (HH:MM)", false),
            place_of_birth: FormField::text("placeOfBirth", "Place of birth", true),
            gender: FormField::choice("gender", "Gender", GENDER_OPTIONS, false),
            area_of_focus: FormField::choice(
                "areaOfFocus",
                "Area of focus",
                AREA_OF_FOCUS_OPTIONS,
                true,
            ),
            email: FormField::text("email", "Email", true),
            active_field_index: 0,
        }
    }

    /// Move focus to the next slot (wraps through the submit button)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % SLOT_COUNT;
    }

    /// Move focus to the previous slot
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = SLOT_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Whether focus is on the submit button slot
    pub fn is_submit_row(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            FIELD_FULL_NAME => Some(&self.full_name),
            FIELD_DATE_OF_BIRTH => Some(&self.date_of_birth),
            FIELD_TIME_OF_BIRTH => Some(&self.time_of_birth),
            FIELD_PLACE_OF_BIRTH => Some(&self.place_of_birth),
            FIELD_GENDER => Some(&self.gender),
            FIELD_AREA_OF_FOCUS => Some(&self.area_of_focus),
            FIELD_EMAIL => Some(&self.email),
            _ => None,
        }
    }

    pub fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            FIELD_FULL_NAME => Some(&mut self.full_name),
            FIELD_DATE_OF_BIRTH => Some(&mut self.date_of_birth),
            FIELD_TIME_OF_BIRTH => Some(&mut self.time_of_birth),
            FIELD_PLACE_OF_BIRTH => Some(&mut self.place_of_birth),
            FIELD_GENDER => Some(&mut self.gender),
            FIELD_AREA_OF_FOCUS => Some(&mut self.area_of_focus),
            FIELD_EMAIL => Some(&mut self.email),
            _ => None,
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.get_field_mut(self.active_field_index)
    }

    /// Re-run the validator for a single field and update only its error
    /// slot. Optional fields have no validator and are left untouched.
    pub fn validate_field(&mut self, index: usize) {
        match index {
            FIELD_FULL_NAME => {
                self.full_name.error = validate::validate_name(self.full_name.as_text())
                    .err()
                    .map(|e| e.to_string());
            }
            FIELD_DATE_OF_BIRTH => {
                self.date_of_birth.error = validate::validate_date(self.date_of_birth.as_text())
                    .err()
                    .map(|e| e.to_string());
            }
            FIELD_PLACE_OF_BIRTH => {
                self.place_of_birth.error = validate::validate_place(self.place_of_birth.as_text())
                    .err()
                    .map(|e| e.to_string());
            }
            FIELD_AREA_OF_FOCUS => {
                self.area_of_focus.error =
                    validate::validate_area_of_focus(self.area_of_focus.as_text())
                        .err()
                        .map(|e| e.to_string());
            }
            FIELD_EMAIL => {
                self.email.error = validate::validate_email(self.email.as_text())
                    .err()
                    .map(|e| e.to_string());
            }
            _ => {}
        }
    }

    /// Clear prior errors, run every validator (no short-circuit), and
    /// return true iff all fields pass.
    pub fn validate_all(&mut self) -> bool {
        self.clear_errors();
        for index in [
            FIELD_FULL_NAME,
            FIELD_DATE_OF_BIRTH,
            FIELD_PLACE_OF_BIRTH,
            FIELD_AREA_OF_FOCUS,
            FIELD_EMAIL,
        ] {
            self.validate_field(index);
        }
        self.field_errors().is_empty()
    }

    /// Clear all field-level errors
    pub fn clear_errors(&mut self) {
        self.full_name.error = None;
        self.date_of_birth.error = None;
        self.time_of_birth.error = None;
        self.place_of_birth.error = None;
        self.gender.error = None;
        self.area_of_focus.error = None;
        self.email.error = None;
    }

    /// Names of the fields that currently carry an error
    pub fn field_errors(&self) -> Vec<&'static str> {
        (0..SUBMIT_ROW)
            .filter_map(|i| self.get_field(i))
            .filter(|f| f.error.is_some())
            .map(|f| f.name)
            .collect()
    }

    /// Clear all values and errors and return focus to the first field
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.date_of_birth.clear();
        self.time_of_birth.clear();
        self.place_of_birth.clear();
        self.gender.clear();
        self.area_of_focus.clear();
        self.email.clear();
        self.clear_errors();
        self.active_field_index = 0;
    }
}

impl Default for InsightsForm {
    fn default() -> Self {
        Self::new()
    }
}
