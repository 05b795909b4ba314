//! Recruiter and interviewer contacts.

use serde::{Deserialize, Serialize};

/// A person on the company side. Contacts are only read and written together
/// with their company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
