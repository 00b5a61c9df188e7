//! Ad request model: placements plus targeting context.
//!
//! A [`Request`] describes one call to the decision API. It is immutable;
//! all construction goes through [`RequestBuilder`], which owns the mutable
//! staging state and validates the non-empty placement invariant at
//! `build()`.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::user::User;

/// A named ad slot for which a decision is requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Name of the div the decision is keyed by in the response.
    pub div_name: String,
    pub network_id: i64,
    pub site_id: i64,
    /// Ad type ids eligible for this slot.
    pub ad_types: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_ids: Option<Vec<i64>>,
}

impl Placement {
    pub fn new(
        div_name: impl Into<String>,
        network_id: i64,
        site_id: i64,
        ad_types: Vec<i64>,
    ) -> Self {
        Self {
            div_name: div_name.into(),
            network_id,
            site_id,
            ad_types,
            zone_ids: None,
        }
    }

    /// Restrict the placement to specific zones.
    pub fn with_zone_ids(mut self, zone_ids: Vec<i64>) -> Self {
        self.zone_ids = Some(zone_ids);
        self
    }
}

/// An immutable ad request. Build one with [`Request::builder`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    placements: Vec<Placement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    keywords: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    /// Unix epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    blocked_creatives: BTreeSet<i64>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    flight_view_times: HashMap<i64, Vec<i64>>,
    #[serde(skip_serializing_if = "is_false")]
    is_mobile: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Request {
    /// Start building a request for the given placements.
    pub fn builder(placements: Vec<Placement>) -> RequestBuilder {
        RequestBuilder::new(placements)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn referrer(&self) -> Option<&str> {
        self.referrer.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn time(&self) -> Option<i64> {
        self.time
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    pub fn blocked_creatives(&self) -> &BTreeSet<i64> {
        &self.blocked_creatives
    }

    /// View timestamps for one flight id.
    pub fn flight_view_times(&self, flight_id: i64) -> Option<&[i64]> {
        self.flight_view_times.get(&flight_id).map(Vec::as_slice)
    }

    /// All flight view time entries, keyed by flight id.
    pub fn all_flight_view_times(&self) -> &HashMap<i64, Vec<i64>> {
        &self.flight_view_times
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }
}

/// Builder for [`Request`].
///
/// Keyword and blocked-creative setters normalize their input into sets, so
/// duplicate additions collapse. `build()` enforces that at least one
/// placement was provided.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    placements: Vec<Placement>,
    user: Option<User>,
    keywords: BTreeSet<String>,
    referrer: Option<String>,
    url: Option<String>,
    time: Option<i64>,
    ip: Option<String>,
    blocked_creatives: BTreeSet<i64>,
    flight_view_times: HashMap<i64, Vec<i64>>,
    is_mobile: bool,
}

impl RequestBuilder {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self {
            placements,
            user: None,
            keywords: BTreeSet::new(),
            referrer: None,
            url: None,
            time: None,
            ip: None,
            blocked_creatives: BTreeSet::new(),
            flight_view_times: HashMap::new(),
            is_mobile: false,
        }
    }

    /// Target the request to a known user key.
    pub fn user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Replace the keyword set. Duplicates collapse.
    pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single keyword. Adding the same keyword twice is a no-op.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    pub fn referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Unix epoch seconds of the request.
    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Replace the set of creative ids excluded from decisions.
    pub fn blocked_creatives(mut self, creative_ids: impl IntoIterator<Item = i64>) -> Self {
        self.blocked_creatives = creative_ids.into_iter().collect();
        self
    }

    /// Block a single creative id. Duplicate additions collapse.
    pub fn blocked_creative(mut self, creative_id: i64) -> Self {
        self.blocked_creatives.insert(creative_id);
        self
    }

    /// Record view timestamps for a flight; replaces any entry for the id.
    pub fn flight_view_times(mut self, flight_id: i64, times: Vec<i64>) -> Self {
        self.flight_view_times.insert(flight_id, times);
        self
    }

    pub fn mobile(mut self, is_mobile: bool) -> Self {
        self.is_mobile = is_mobile;
        self
    }

    /// Build the immutable [`Request`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] when the placement list is
    /// empty.
    pub fn build(self) -> Result<Request> {
        if self.placements.is_empty() {
            return Err(ClientError::InvalidRequest(
                "at least one placement is required".to_string(),
            ));
        }

        Ok(Request {
            placements: self.placements,
            user: self.user,
            keywords: self.keywords,
            referrer: self.referrer,
            url: self.url,
            time: self.time,
            ip: self.ip,
            blocked_creatives: self.blocked_creatives,
            flight_view_times: self.flight_view_times,
            is_mobile: self.is_mobile,
        })
    }
}
