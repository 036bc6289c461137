//! Build and deployment metadata endpoint.
//!
//! Values come from the process environment and are read on every request.
//! A variable that is unset reports as an empty string.

use axum::Json;
use serde::Serialize;

pub const ENV_MORE_INFO: &str = "PULSE_MOREINFO";
pub const ENV_BUILD: &str = "BUILD";
pub const ENV_COMMIT: &str = "COMMIT";
pub const ENV_BRANCH: &str = "BRANCH";
pub const ENV_BUILD_TIMESTAMP: &str = "BUILD_TIMESTAMP";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub info: String,
    pub build: String,
    pub commit: String,
    pub branch: String,
    pub build_timestamp: String,
}

impl BuildInfo {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();
        Self {
            info: var(ENV_MORE_INFO),
            build: var(ENV_BUILD),
            commit: var(ENV_COMMIT),
            branch: var(ENV_BRANCH),
            build_timestamp: var(ENV_BUILD_TIMESTAMP),
        }
    }
}

pub async fn get_info() -> Json<BuildInfo> {
    Json(BuildInfo::from_env())
}
