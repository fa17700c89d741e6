//! Wire types for the enrollment backend.
//!
//! The backend stores `interests` and `projects` as JSON columns and some
//! rows come back double-encoded (a JSON string containing JSON). The
//! lenient deserializers here accept both shapes and degrade malformed
//! strings to empty lists instead of failing the whole row. Ids arrive as
//! either numbers or strings depending on the endpoint; both normalize to
//! `String`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Login form payload for `POST /login`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /verify`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
}

/// Standard `{ data: … }` wrapper on read endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Approval workflow status of an enrollment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Canceled,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Canceled => "canceled",
        }
    }
}

/// One portfolio entry on a member record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub link: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Enrollment counts for the dashboard.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnrollmentStats {
    pub pending: u64,
    pub approved: u64,
    pub canceled: u64,
}

impl EnrollmentStats {
    pub fn total(&self) -> u64 {
        self.pending + self.approved + self.canceled
    }
}

/// A membership enrollment record.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub tools: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub agreement: bool,
    #[serde(default)]
    pub request_status: RequestStatus,
    #[serde(default, deserialize_with = "lenient_project_list")]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub cit_front: Option<String>,
    #[serde(default)]
    pub cit_back: Option<String>,
    #[serde(default)]
    pub cv_slug: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(list) => list,
        Raw::Text(text) => serde_json::from_str(&text).unwrap_or_default(),
        Raw::Other(_) => Vec::new(),
    })
}

fn lenient_project_list<'de, D>(deserializer: D) -> Result<Vec<Project>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Project>),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(list) => list,
        Raw::Text(text) => serde_json::from_str(&text).unwrap_or_default(),
        Raw::Other(_) => Vec::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Number(i64),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Flag(b) => b,
        Raw::Number(n) => n != 0,
        Raw::Other(_) => false,
    })
}
