//! Group configuration layered from defaults and the environment.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::GroupResult,
    status::{BaselinePolicy, DEFAULT_STATUS_BASELINE, Status},
};

/// Settings applied when constructing an
/// [`ErrorStatusGroup`](crate::ErrorStatusGroup).
///
/// Values are read from `ERROR_GROUP_`-prefixed environment variables layered
/// over [`GroupConfig::default`]:
///
/// | field | variable | default |
/// |---|---|---|
/// | `status_baseline` | `ERROR_GROUP_STATUS_BASELINE` | `200` |
/// | `baseline_policy` | `ERROR_GROUP_BASELINE_POLICY` | `until_first_status` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Status the running range starts from before anything is recorded.
    pub status_baseline: Status,
    /// Whether the baseline stays part of the range once statuses arrive.
    pub baseline_policy: BaselinePolicy,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            status_baseline: DEFAULT_STATUS_BASELINE,
            baseline_policy: BaselinePolicy::default(),
        }
    }
}

impl GroupConfig {
    /// Prefix shared by every environment variable the loader reads.
    pub const ENV_PREFIX: &'static str = "ERROR_GROUP_";

    /// Provider stack used by [`Self::load`]: defaults, then environment.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Config`](crate::GroupError::Config) when a
    /// variable cannot be converted into its field type.
    pub fn load() -> GroupResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Extract configuration from an arbitrary provider stack.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Config`](crate::GroupError::Config) when
    /// extraction fails.
    pub fn from_figment(figment: &Figment) -> GroupResult<Self> {
        let config = figment.extract::<Self>()?;
        tracing::debug!(
            baseline = config.status_baseline,
            policy = ?config.baseline_policy,
            "loaded group configuration"
        );
        Ok(config)
    }
}
