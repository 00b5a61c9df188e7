//! UserDB user model.
//!
//! A [`User`] appears in two roles: as request-time targeting input (only
//! the key populated) and as a fully populated record decoded from a
//! decision response or a UserDB read. All user keys are issued by the ad
//! engine; the SDK never generates them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ADVERTISERS: &str = "advertisers";
const CAMPAIGNS: &str = "campaigns";
const CREATIVES: &str = "creatives";
const FLIGHTS: &str = "flights";

/// A unique user known to the ad engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    /// Server-issued opaque key identifying the user.
    #[serde(default)]
    pub key: String,

    /// True when the server created this user on first sight.
    #[serde(rename = "isNew", default, skip_serializing_if = "is_false")]
    pub is_new: bool,

    /// Interest keywords associated with the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,

    /// Advertiser-defined custom properties. Wire field name is `custom`.
    #[serde(rename = "custom", default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<Map<String, Value>>,

    /// True when the user has opted out of tracking.
    #[serde(rename = "optOut", default, skip_serializing_if = "is_false")]
    pub opt_out: bool,

    /// Blocked item ids per category (`advertisers`, `campaigns`,
    /// `creatives`, `flights`).
    #[serde(rename = "blockedItems", default, skip_serializing_if = "HashMap::is_empty")]
    pub blocked_items: HashMap<String, Vec<i64>>,

    /// Flight id to Unix epoch view timestamps.
    #[serde(rename = "flightViewTimes", default, skip_serializing_if = "HashMap::is_empty")]
    pub flight_view_times: HashMap<i64, Vec<i64>>,

    /// Ad id to Unix epoch view timestamps.
    #[serde(rename = "adViewTimes", default, skip_serializing_if = "HashMap::is_empty")]
    pub ad_view_times: HashMap<i64, Vec<i64>>,

    /// Site id to Unix epoch view timestamps.
    #[serde(rename = "siteViewTimes", default, skip_serializing_if = "HashMap::is_empty")]
    pub site_view_times: HashMap<i64, Vec<i64>>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl User {
    /// Create a request-time user carrying only a key. Serializes as
    /// `{"key": "..."}`.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Check whether the user has the given interest keyword.
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Value of one custom property, if set.
    pub fn custom_property(&self, key: &str) -> Option<&Value> {
        self.custom_properties.as_ref()?.get(key)
    }

    pub fn blocked_advertisers(&self) -> &[i64] {
        self.blocked_category(ADVERTISERS)
    }

    pub fn blocked_campaigns(&self) -> &[i64] {
        self.blocked_category(CAMPAIGNS)
    }

    pub fn blocked_creatives(&self) -> &[i64] {
        self.blocked_category(CREATIVES)
    }

    pub fn blocked_flights(&self) -> &[i64] {
        self.blocked_category(FLIGHTS)
    }

    fn blocked_category(&self, category: &str) -> &[i64] {
        self.blocked_items
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
