//! Input form state: six widgets, one focused at a time.
//!
//! Numeric fields step with the arrow keys or accept typed digits. A typed
//! value is held in a buffer until it is committed, then clamped to range.
//! Select fields cycle through their options.

use crate::core::input::{AGE_MAX, AGE_MIN, BMI_MAX, BMI_MIN, CHILDREN_MAX, CHILDREN_MIN};
use crate::core::{Categorical, InputRecord, Region, Sex, Smoker};
use crate::errors::Result;

const BMI_STEP: f64 = 0.1;
const MAX_BUFFER_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Age,
    Bmi,
    Children,
    Sex,
    Smoker,
    Region,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Age,
        FormField::Bmi,
        FormField::Children,
        FormField::Sex,
        FormField::Smoker,
        FormField::Region,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Age => "Age",
            FormField::Bmi => "BMI (Body Mass Index)",
            FormField::Children => "Number of Children",
            FormField::Sex => "Sex",
            FormField::Smoker => "Smoker",
            FormField::Region => "Region",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, FormField::Age | FormField::Bmi | FormField::Children)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    age: u32,
    bmi: f64,
    children: u32,
    sex: Sex,
    smoker: Smoker,
    region: Region,
    focus: FormField,
    buffer: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_record(&InputRecord::default())
    }
}

impl FormState {
    pub fn from_record(record: &InputRecord) -> Self {
        Self {
            age: record.age(),
            bmi: record.bmi(),
            children: record.children(),
            sex: record.sex(),
            smoker: record.smoker(),
            region: record.region(),
            focus: FormField::Age,
            buffer: None,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    /// Move focus forward, committing any typed value first.
    pub fn focus_next(&mut self) {
        self.commit_buffer();
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.commit_buffer();
        self.focus = self.focus.prev();
    }

    /// Step the focused field by `direction` (+1 or -1).
    pub fn adjust(&mut self, direction: i32) {
        self.commit_buffer();
        match self.focus {
            FormField::Age => self.age = step_u32(self.age, direction, AGE_MIN, AGE_MAX),
            FormField::Children => {
                self.children = step_u32(self.children, direction, CHILDREN_MIN, CHILDREN_MAX)
            }
            FormField::Bmi => {
                let stepped = round_tenth(self.bmi + f64::from(direction) * BMI_STEP);
                self.bmi = stepped.clamp(BMI_MIN, BMI_MAX);
            }
            FormField::Sex => self.sex = cycle(self.sex, direction),
            FormField::Smoker => self.smoker = cycle(self.smoker, direction),
            FormField::Region => self.region = cycle(self.region, direction),
        }
    }

    /// Append a typed character to the focused numeric field.
    ///
    /// Returns false when the character is not accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.focus.is_numeric() {
            return false;
        }
        let buffer = self.buffer.get_or_insert_with(String::new);
        let accepted = match c {
            '0'..='9' => buffer.len() < MAX_BUFFER_LEN,
            '.' => self.focus == FormField::Bmi && !buffer.contains('.'),
            _ => false,
        };
        if accepted {
            buffer.push(c);
        } else if buffer.is_empty() {
            self.buffer = None;
        }
        accepted
    }

    pub fn pop_char(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.pop();
            if buffer.is_empty() {
                self.buffer = None;
            }
        }
    }

    pub fn cancel_buffer(&mut self) {
        self.buffer = None;
    }

    /// Apply the typed value to the focused field, clamped to its range.
    ///
    /// An unparsable buffer (such as a lone ".") is discarded.
    pub fn commit_buffer(&mut self) {
        let Some(buffer) = self.buffer.take() else {
            return;
        };
        match self.focus {
            FormField::Age => {
                if let Ok(v) = buffer.parse::<u32>() {
                    self.age = v.clamp(AGE_MIN, AGE_MAX);
                }
            }
            FormField::Children => {
                if let Ok(v) = buffer.parse::<u32>() {
                    self.children = v.clamp(CHILDREN_MIN, CHILDREN_MAX);
                }
            }
            FormField::Bmi => {
                if let Ok(v) = buffer.parse::<f64>() {
                    self.bmi = v.clamp(BMI_MIN, BMI_MAX);
                }
            }
            FormField::Sex | FormField::Smoker | FormField::Region => {}
        }
    }

    /// Text shown for a field, including an uncommitted buffer.
    pub fn display_value(&self, field: FormField) -> String {
        if field == self.focus {
            if let Some(buffer) = &self.buffer {
                return buffer.clone();
            }
        }
        match field {
            FormField::Age => self.age.to_string(),
            FormField::Bmi => format_bmi(self.bmi),
            FormField::Children => self.children.to_string(),
            FormField::Sex => self.sex.label().to_string(),
            FormField::Smoker => self.smoker.label().to_string(),
            FormField::Region => self.region.label().to_string(),
        }
    }

    /// Build the record to submit. Commits any pending buffer first.
    pub fn to_record(&mut self) -> Result<InputRecord> {
        self.commit_buffer();
        InputRecord::new(
            self.age,
            self.bmi,
            self.children,
            self.sex,
            self.smoker,
            self.region,
        )
    }
}

fn step_u32(value: u32, direction: i32, min: u32, max: u32) -> u32 {
    if direction < 0 {
        value.saturating_sub(1).max(min)
    } else {
        value.saturating_add(1).min(max)
    }
}

fn cycle<T: Categorical>(value: T, direction: i32) -> T {
    if direction < 0 {
        value.prev()
    } else {
        value.next()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal for values on the step grid, full precision for typed ones.
fn format_bmi(value: f64) -> String {
    if round_tenth(value) == value {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut FormState, s: &str) {
        for c in s.chars() {
            form.push_char(c);
        }
    }

    #[test]
    fn test_defaults_match_record_defaults() {
        let mut form = FormState::default();
        assert_eq!(form.to_record().unwrap(), InputRecord::default());
        assert_eq!(form.focus(), FormField::Age);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormState::default();
        form.focus_prev();
        assert_eq!(form.focus(), FormField::Region);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Age);
    }

    #[test]
    fn test_age_steps_and_clamps() {
        let mut form = FormState::default();
        for _ in 0..200 {
            form.adjust(1);
        }
        assert_eq!(form.display_value(FormField::Age), "120");
        for _ in 0..200 {
            form.adjust(-1);
        }
        assert_eq!(form.display_value(FormField::Age), "0");
    }

    #[test]
    fn test_bmi_steps_by_tenth() {
        let mut form = FormState::default();
        form.focus_next();
        form.adjust(1);
        form.adjust(1);
        assert_eq!(form.display_value(FormField::Bmi), "25.2");
        form.adjust(-1);
        assert_eq!(form.to_record().unwrap().bmi(), 25.1);
    }

    #[test]
    fn test_typed_value_clamped_on_commit() {
        let mut form = FormState::default();
        type_str(&mut form, "999");
        assert!(form.is_editing());
        assert_eq!(form.display_value(FormField::Age), "999");
        form.commit_buffer();
        assert!(!form.is_editing());
        assert_eq!(form.display_value(FormField::Age), "120");

        form.focus_next();
        form.focus_next();
        type_str(&mut form, "42");
        let record = form.to_record().unwrap();
        assert_eq!(record.children(), 10);
    }

    #[test]
    fn test_typed_bmi_with_decimal() {
        let mut form = FormState::default();
        form.focus_next();
        type_str(&mut form, "31.75");
        form.focus_next();
        assert_eq!(form.display_value(FormField::Bmi), "31.75");
        assert_eq!(form.to_record().unwrap().bmi(), 31.75);

        form.focus_prev();
        type_str(&mut form, "150");
        form.commit_buffer();
        assert_eq!(form.display_value(FormField::Bmi), "100.0");
    }

    #[test]
    fn test_lone_dot_is_discarded() {
        let mut form = FormState::default();
        form.focus_next();
        type_str(&mut form, ".");
        form.commit_buffer();
        assert_eq!(form.display_value(FormField::Bmi), "25.0");
    }

    #[test]
    fn test_dot_rejected_for_integer_fields() {
        let mut form = FormState::default();
        assert!(!form.push_char('.'));
        assert!(!form.is_editing());
    }

    #[test]
    fn test_cancel_keeps_previous_value() {
        let mut form = FormState::default();
        type_str(&mut form, "55");
        form.cancel_buffer();
        assert_eq!(form.display_value(FormField::Age), "30");
    }

    #[test]
    fn test_backspace_empties_buffer() {
        let mut form = FormState::default();
        type_str(&mut form, "5");
        form.pop_char();
        assert!(!form.is_editing());
    }

    #[test]
    fn test_selects_cycle() {
        let mut form = FormState::default();
        for _ in 0..5 {
            form.focus_next();
        }
        assert_eq!(form.focus(), FormField::Region);
        form.adjust(-1);
        assert_eq!(form.display_value(FormField::Region), "Papua");
        form.adjust(1);
        form.adjust(1);
        assert_eq!(form.display_value(FormField::Region), "Kalimantan");
    }

    #[test]
    fn test_typing_ignored_on_select() {
        let mut form = FormState::default();
        for _ in 0..3 {
            form.focus_next();
        }
        assert!(!form.push_char('1'));
        assert!(!form.is_editing());
    }
}
