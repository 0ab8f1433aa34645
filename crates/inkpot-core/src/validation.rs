//! Declarative validation rules for post fields.
//!
//! Each field of [`PostFields`] is described once in [`POST_FIELD_RULES`]: its form name,
//! its display label, how to read it and which rules apply. [`validate_post`] walks the
//! table generically, so both the HTTP form and the store enforce the same contract.

use std::collections::BTreeMap;
use std::fmt;

use url::{Host, Url};

use crate::domain::PostFields;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_URL_MESSAGE: &str = "Invalid URL.";
pub const TOO_LONG_MESSAGE: &str = "Field cannot be longer than 250 characters.";

/// Column width of the single-line fields in `blog_post`.
pub const MAX_FIELD_LEN: usize = 250;

/// A single field-level check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain something other than whitespace.
    Required,
    /// Value must be an absolute http(s) URL with a host.
    Url,
    /// Value must fit in [`MAX_FIELD_LEN`] characters.
    MaxLen,
}

impl Rule {
    /// Returns the failure message, or `None` when the value passes.
    pub fn check(self, value: &str) -> Option<&'static str> {
        let ok = match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::Url => is_well_formed_url(value),
            Rule::MaxLen => value.chars().count() <= MAX_FIELD_LEN,
        };
        (!ok).then_some(match self {
            Rule::Required => REQUIRED_MESSAGE,
            Rule::Url => INVALID_URL_MESSAGE,
            Rule::MaxLen => TOO_LONG_MESSAGE,
        })
    }
}

/// Validation rules attached to one form field.
pub struct FieldRules {
    pub name: &'static str,
    pub label: &'static str,
    pub value: fn(&PostFields) -> &str,
    pub rules: &'static [Rule],
}

pub const POST_FIELD_RULES: &[FieldRules] = &[
    FieldRules {
        name: "title",
        label: "Blog Post Title",
        value: |f| f.title.as_str(),
        rules: &[Rule::Required, Rule::MaxLen],
    },
    FieldRules {
        name: "subtitle",
        label: "Subtitle",
        value: |f| f.subtitle.as_str(),
        rules: &[Rule::Required, Rule::MaxLen],
    },
    FieldRules {
        name: "author",
        label: "Your Name",
        value: |f| f.author.as_str(),
        rules: &[Rule::Required, Rule::MaxLen],
    },
    FieldRules {
        name: "img_url",
        label: "Blog Image URL",
        value: |f| f.img_url.as_str(),
        rules: &[Rule::Required, Rule::MaxLen, Rule::Url],
    },
    FieldRules {
        name: "body",
        label: "Blog Content",
        value: |f| f.body.as_str(),
        rules: &[Rule::Required],
    },
];

/// Per-field error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for `field`, empty when it passed.
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.errors.iter().map(|(field, msgs)| (*field, msgs.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Evaluate every rule in [`POST_FIELD_RULES`] against `fields`.
///
/// Rules for a field stop at the first failure.
pub fn validate_post(fields: &PostFields) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for field in POST_FIELD_RULES {
        let value = (field.value)(fields);
        if let Some(message) = field.rules.iter().find_map(|rule| rule.check(value)) {
            errors.add(field.name, message);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Absolute http(s) URL; domain hosts need a top-level domain.
fn is_well_formed_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value.trim()) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => domain.split('.').filter(|l| !l.is_empty()).count() >= 2,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
