//! Form schemas, field validation and the submit state machine
//!
//! Validation runs synchronously when the user submits. It only checks
//! presence, format and numeric range; anything deeper is the backend's job.

use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").unwrap());

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 -]{6,14}[0-9]$").unwrap());

static ISBN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(97[89]-?)?[0-9]{1,5}-?[0-9]{1,7}-?[0-9]{1,7}-?[0-9X]$").unwrap()
});

/// Raw field values keyed by field key
pub type FormValues = BTreeMap<String, String>;

/// Well-known string formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Phone,
    Isbn,
}

impl Format {
    fn regex(&self) -> &'static Regex {
        match self {
            Format::Email => &EMAIL_REGEX,
            Format::Phone => &PHONE_REGEX,
            Format::Isbn => &ISBN_REGEX,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Format::Email => "a valid email address",
            Format::Phone => "a valid phone number",
            Format::Isbn => "a valid ISBN",
        }
    }
}

/// Input kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Number,
    /// `YYYY-MM-DD`
    Date,
    /// One of a fixed set of labels, cycled with Left/Right
    Choice(&'static [&'static str]),
}

/// A validation rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    Required,
    Format(Format),
    Range { min: f64, max: f64 },
    MaxLength(usize),
}

/// One field of a form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: Vec<FieldRule>,
}

impl FieldSpec {
    fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            rules: Vec::new(),
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn integer(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Integer)
    }

    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(key, label, FieldKind::Choice(options))
    }

    pub fn required(mut self) -> Self {
        self.rules.push(FieldRule::Required);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.rules.push(FieldRule::Format(format));
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.rules.push(FieldRule::Range { min, max });
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.rules.push(FieldRule::MaxLength(len));
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&FieldRule::Required)
    }

    /// Check one raw value, returning the first failing rule's message
    pub fn check(&self, raw: &str) -> Option<String> {
        let value = raw.trim();

        if value.is_empty() {
            return if self.is_required() {
                Some(format!("{} is required", self.label))
            } else {
                None
            };
        }

        let numeric = match self.kind {
            FieldKind::Text => None,
            FieldKind::Integer => match value.parse::<i64>() {
                Ok(n) => Some(n as f64),
                Err(_) => return Some(format!("{} must be a whole number", self.label)),
            },
            FieldKind::Number => match value.parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => return Some(format!("{} must be a number", self.label)),
            },
            FieldKind::Date => {
                if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                    return Some(format!("{} must be a date (YYYY-MM-DD)", self.label));
                }
                None
            }
            FieldKind::Choice(options) => {
                if !options.contains(&value) {
                    return Some(format!("{} must be one of: {}", self.label, options.join(", ")));
                }
                None
            }
        };

        for rule in &self.rules {
            match rule {
                FieldRule::Required => {}
                FieldRule::Format(format) => {
                    if !format.regex().is_match(value) {
                        return Some(format!("{} must be {}", self.label, format.describe()));
                    }
                }
                FieldRule::Range { min, max } => {
                    if let Some(n) = numeric {
                        if n < *min || n > *max {
                            return Some(format!(
                                "{} must be between {} and {}",
                                self.label, min, max
                            ));
                        }
                    }
                }
                FieldRule::MaxLength(len) => {
                    if value.chars().count() > *len {
                        return Some(format!("{} must be at most {} characters", self.label, len));
                    }
                }
            }
        }

        None
    }
}

/// A field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Schema of a create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(title: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { title, fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Values for an empty create form; choices start at their first option
    pub fn blank_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| {
                let initial = match f.kind {
                    FieldKind::Choice(options) => options.first().copied().unwrap_or_default(),
                    _ => "",
                };
                (f.key.to_string(), initial.to_string())
            })
            .collect()
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self, values: &FormValues) -> Result<ValidValues, Vec<FieldError>> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|f| {
                let raw = values.get(f.key).map(String::as_str).unwrap_or("");
                f.check(raw).map(|message| FieldError {
                    field: f.key.to_string(),
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            let trimmed = values
                .iter()
                .map(|(k, v)| (k.clone(), v.trim().to_string()))
                .collect();
            Ok(ValidValues { values: trimmed })
        } else {
            Err(errors)
        }
    }
}

/// Values that passed `FormSchema::validate`
#[derive(Debug, Clone, PartialEq)]
pub struct ValidValues {
    values: FormValues,
}

impl ValidValues {
    pub fn text(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    pub fn integer(&self, key: &str) -> i64 {
        self.values
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn number(&self, key: &str) -> f64 {
        self.values
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.values
            .get(key)
            .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
    }
}

/// Submit lifecycle of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Request handed to the mutation sink; submit is disabled
    Submitting,
    /// Acknowledged by the sink
    Submitted,
}

/// Editing state of one open form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    /// Inline error per field key
    pub errors: BTreeMap<String, String>,
    pub status: FormStatus,
    /// Index of the focused field
    pub focused: usize,
}

impl FormState {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            errors: BTreeMap::new(),
            status: FormStatus::Idle,
            focused: 0,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    fn is_locked(&self) -> bool {
        self.status != FormStatus::Idle
    }

    pub fn focused_field<'a>(&self, schema: &'a FormSchema) -> Option<&'a FieldSpec> {
        schema.fields.get(self.focused)
    }

    pub fn focus_next(&mut self, schema: &FormSchema) {
        if !schema.fields.is_empty() {
            self.focused = (self.focused + 1) % schema.fields.len();
        }
    }

    pub fn focus_prev(&mut self, schema: &FormSchema) {
        if !schema.fields.is_empty() {
            self.focused = (self.focused + schema.fields.len() - 1) % schema.fields.len();
        }
    }

    /// Type a character into the focused field
    pub fn input(&mut self, schema: &FormSchema, c: char) {
        if self.is_locked() {
            return;
        }
        let Some(field) = self.focused_field(schema) else {
            return;
        };
        if let FieldKind::Choice(_) = field.kind {
            if c == ' ' {
                self.cycle_choice(schema, true);
            }
            return;
        }
        self.values.entry(field.key.to_string()).or_default().push(c);
        self.errors.remove(field.key);
    }

    pub fn backspace(&mut self, schema: &FormSchema) {
        if self.is_locked() {
            return;
        }
        let Some(field) = self.focused_field(schema) else {
            return;
        };
        if matches!(field.kind, FieldKind::Choice(_)) {
            return;
        }
        if let Some(value) = self.values.get_mut(field.key) {
            value.pop();
        }
        self.errors.remove(field.key);
    }

    /// Move a choice field to its next/previous option
    pub fn cycle_choice(&mut self, schema: &FormSchema, forward: bool) {
        if self.is_locked() {
            return;
        }
        let Some(field) = self.focused_field(schema) else {
            return;
        };
        let FieldKind::Choice(options) = field.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.values.get(field.key).map(String::as_str).unwrap_or("");
        let idx = options.iter().position(|o| *o == current);
        let next = match (idx, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.values.insert(field.key.to_string(), options[next].to_string());
        self.errors.remove(field.key);
    }

    /// Validate and enter `Submitting`
    ///
    /// Returns `None` while a submission is outstanding or when validation
    /// fails; failures are stored in `errors` and focus jumps to the first.
    pub fn begin_submit(&mut self, schema: &FormSchema) -> Option<ValidValues> {
        if self.is_locked() {
            return None;
        }
        match schema.validate(&self.values) {
            Ok(valid) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                Some(valid)
            }
            Err(errors) => {
                if let Some(first) = errors.first() {
                    if let Some(idx) = schema.fields.iter().position(|f| f.key == first.field) {
                        self.focused = idx;
                    }
                }
                self.errors = errors.into_iter().map(|e| (e.field, e.message)).collect();
                None
            }
        }
    }

    /// Record the sink's answer; failure returns the form to `Idle`
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.status = if succeeded {
            FormStatus::Submitted
        } else {
            FormStatus::Idle
        };
    }
}
