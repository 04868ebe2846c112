//! Public API surface for the FundSpark backend.
//!
//! This file consolidates the domain records, request payloads and report
//! types exchanged over the HTTP API. All types derive Serialize/Deserialize
//! for JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Startup identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StartupId(pub i64);

/// Content item identifier. Allocated from one counter shared by all startups.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ContentId(pub i64);

/// Investor identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct InvestorId(pub i64);

impl StartupId {
    pub fn new(value: i64) -> Self {
        StartupId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ContentId {
    pub fn new(value: i64) -> Self {
        ContentId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl InvestorId {
    pub fn new(value: i64) -> Self {
        InvestorId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StartupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for InvestorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Startups
// =============================================================================

/// Request body for creating a startup profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupCreate {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A stored startup profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    pub id: StartupId,
    pub name: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Startup {
    /// Build a startup record from a creation payload.
    pub fn from_create(id: StartupId, data: StartupCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            website: data.website,
            description: data.description,
            industry: data.industry,
            stage: data.stage,
            location: data.location,
            created_at,
        }
    }
}

// =============================================================================
// Content
// =============================================================================

/// Request body for attaching content to a startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCreate {
    /// Usually one of "manual", "website" or "document"; any value is accepted.
    pub source_type: String,
    /// URL or filename the text came from.
    #[serde(default)]
    pub source_identifier: Option<String>,
    pub text: String,
}

/// A piece of content owned by a startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub startup_id: StartupId,
    pub source_type: String,
    pub source_identifier: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Investors
// =============================================================================

/// Request body for creating or replacing an investor profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorCreate {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub focus_areas: Option<Vec<String>>,
    #[serde(default)]
    pub investment_stage: Option<String>,
    #[serde(default)]
    pub check_size: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A stored investor profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    pub id: InvestorId,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub focus_areas: Vec<String>,
    pub investment_stage: Option<String>,
    pub check_size: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Investor {
    /// Build an investor record from a payload. Omitted focus areas become empty.
    pub fn from_create(id: InvestorId, data: InvestorCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            company: data.company,
            focus_areas: data.focus_areas.unwrap_or_default(),
            investment_stage: data.investment_stage,
            check_size: data.check_size,
            location: data.location,
            created_at,
        }
    }
}

// =============================================================================
// Analysis
// =============================================================================

/// Rule-based analysis report for a startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleAnalysis {
    pub summary: String,
    pub target_customers: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}
