//! Draft validation.
//!
//! Runs before a draft reaches the store: both translations of the brand and
//! owner names must be present and the phone number must be a national
//! mobile number (`09` followed by nine digits). Every problem is reported,
//! so a form can flag all offending fields at once.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{Locale, ValidatedDraft, VendorDraft};

/// National mobile number format. ASCII digits only.
pub const PHONE_PATTERN: &str = r"^09[0-9]{9}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

/// Draft field a validation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    BrandName,
    OwnerName,
    PhoneNumber,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrandName => "brandName",
            Self::OwnerName => "ownerName",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Required,
    InvalidFormat,
}

/// One problem with one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: DraftField,
    /// Set for localized fields.
    pub locale: Option<Locale>,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field.as_str())?;
        if let Some(locale) = self.locale {
            write!(f, " ({locale})")?;
        }
        match self.kind {
            IssueKind::Required => f.write_str(" is required"),
            IssueKind::InvalidFormat => f.write_str(" has an invalid format"),
        }
    }
}

/// A draft was rejected by the form checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid vendor draft: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn has_issue(&self, field: DraftField, kind: IssueKind) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.field == field && issue.kind == kind)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Whether `phone` matches [`PHONE_PATTERN`].
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

impl VendorDraft {
    /// Check the draft and wrap it as a [`ValidatedDraft`].
    pub fn validate(self) -> Result<ValidatedDraft, ValidationError> {
        let mut issues = Vec::new();
        for (field, text) in [
            (DraftField::BrandName, &self.brand_name),
            (DraftField::OwnerName, &self.owner_name),
        ] {
            for locale in text.blank_locales() {
                issues.push(FieldIssue {
                    field,
                    locale: Some(locale),
                    kind: IssueKind::Required,
                });
            }
        }

        let phone = &self.phone_number;
        if phone.trim().is_empty() {
            issues.push(FieldIssue {
                field: DraftField::PhoneNumber,
                locale: None,
                kind: IssueKind::Required,
            });
        } else if !is_valid_phone(phone) {
            issues.push(FieldIssue {
                field: DraftField::PhoneNumber,
                locale: None,
                kind: IssueKind::InvalidFormat,
            });
        }

        if issues.is_empty() {
            Ok(ValidatedDraft::new(self))
        } else {
            Err(ValidationError { issues })
        }
    }
}
