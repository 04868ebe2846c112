//! Data Transfer Objects for the HTTP API.
//!
//! Entity records are serialized directly from `crate::api`; this module only
//! holds the envelope types specific to the REST surface.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    ContentCreate, ContentItem, Investor, InvestorCreate, SimpleAnalysis, Startup, StartupCreate,
};

pub const API_MESSAGE: &str = "FundSpark AI Backend API";
pub const API_VERSION: &str = "1.0.0";

/// Response for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: API_MESSAGE.to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    pub startups_count: usize,
    pub investors_count: usize,
}

/// Plain acknowledgement, used by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
