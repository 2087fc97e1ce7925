use regex::Regex;
use serde_json::Value;

use crate::server::error::validation::FieldError;

type Check = Box<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

/// A single constraint on one field: a predicate plus the message reported when it fails.
///
/// The predicate receives `None` when the field is absent from the body.
pub struct Rule {
    message: &'static str,
    check: Check,
}

impl Rule {
    pub fn new<F>(message: &'static str, check: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self {
            message,
            check: Box::new(check),
        }
    }

    /// Value must be a JSON string.
    pub fn string(message: &'static str) -> Self {
        Self::new(message, |value| matches!(value, Some(Value::String(_))))
    }

    /// Value must be present, non-null, and not the empty string.
    pub fn not_empty(message: &'static str) -> Self {
        Self::new(message, |value| match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        })
    }

    /// Value must be a string matched by `pattern`.
    ///
    /// Anchor the pattern to constrain the whole value.
    pub fn pattern(pattern: &'static Regex, message: &'static str) -> Self {
        Self::new(message, move |value| match value {
            Some(Value::String(s)) => pattern.is_match(s),
            _ => false,
        })
    }

    /// Value must be a string of at most `max` characters.
    pub fn max_chars(max: usize, message: &'static str) -> Self {
        Self::new(message, move |value| match value {
            Some(Value::String(s)) => s.chars().count() <= max,
            _ => false,
        })
    }

    /// Value must be an integer greater than or equal to zero.
    pub fn non_negative_integer(message: &'static str) -> Self {
        Self::new(message, |value| match value {
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n >= 0),
            _ => false,
        })
    }

    /// Runs the predicate, returning the failure message if it does not hold.
    pub fn check(&self, value: Option<&Value>) -> Option<&'static str> {
        if (self.check)(value) {
            None
        } else {
            Some(self.message)
        }
    }
}

/// The ordered rule list for one named field.
pub struct FieldRules {
    field: &'static str,
    optional: bool,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Rules for a field that must be present; its rules always run.
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            optional: false,
            rules: Vec::new(),
        }
    }

    /// Rules for a field that may be absent or null; its rules run only when a value is given.
    pub fn optional(field: &'static str) -> Self {
        Self {
            field,
            optional: true,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Evaluates every rule against the field's value in `body`.
    ///
    /// # Returns
    /// - `None` - All rules passed, or the field is optional and absent
    /// - `Some(FieldError)` - The field with every failing rule's message
    pub fn evaluate(&self, body: &Value) -> Option<FieldError> {
        let value = body.get(self.field);

        if self.optional && matches!(value, None | Some(Value::Null)) {
            return None;
        }

        let messages: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(value))
            .map(str::to_string)
            .collect();

        if messages.is_empty() {
            None
        } else {
            Some(FieldError {
                field: self.field.to_string(),
                messages,
            })
        }
    }
}
