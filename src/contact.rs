//! Contact form draft. Submissions stay local: nothing is sent anywhere.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const ACKNOWLEDGMENT: &str = "Thanks! Your message is on its way.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Project,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Project,
        ContactField::Message,
    ];

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Project)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Project => "Project",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ContactField>),
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ContactError {
    pub fn is_missing(&self, field: ContactField) -> bool {
        match self {
            ContactError::MissingFields(fields) => fields.contains(&field),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

/// A draft that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project: Option<String>,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Project => &self.project,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Project => self.project = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        let project = self.project.trim();
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            project: (!project.is_empty()).then(|| project.to_string()),
            message: self.message.trim().to_string(),
        })
    }

    /// Validates and, on success, clears every field.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactError> {
        let submission = self.validate()?;
        *self = Self::default();
        Ok(submission)
    }
}
