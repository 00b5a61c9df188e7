//! Decision response models.
//!
//! Everything in this module is produced only by deserializing one response
//! payload from the ad engine; nothing is mutated or shared across requests.
//!
//! # Invariants
//! - A [`Response`] maps each requested placement div name to its decision;
//!   placements the engine could not fill decode as `None`.
//! - [`ContentData`] keeps the `customData` object reachable both inside the
//!   generic data map and through the lifted copy. The redundancy matches
//!   the wire format and is intentional.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::user::User;

/// The ad engine's answer to one [`Request`](crate::models::request::Request).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Response {
    /// The user the decisions were made for.
    #[serde(default)]
    pub user: Option<User>,

    /// Decision per placement div name; `None` for unfilled placements.
    #[serde(default)]
    pub decisions: HashMap<String, Option<Decision>>,
}

impl Response {
    /// Decision for a placement div name, flattening unfilled placements.
    pub fn decision(&self, div_name: &str) -> Option<&Decision> {
        self.decisions.get(div_name).and_then(Option::as_ref)
    }
}

/// The ad-serving outcome for one placement.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    #[serde(default)]
    pub ad_id: i64,
    #[serde(default)]
    pub creative_id: i64,
    #[serde(default)]
    pub flight_id: i64,
    #[serde(default)]
    pub campaign_id: i64,
    /// Tracking URL to fire on click.
    #[serde(default)]
    pub click_url: Option<String>,
    /// Tracking URL to fire once the ad is displayed.
    #[serde(default)]
    pub impression_url: Option<String>,
    /// Renderable contents for the selected creative.
    #[serde(default)]
    pub contents: Vec<Content>,
    /// Custom tracking events attached to the decision.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// The renderable payload of a [`Decision`].
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Content {
    /// Content type tag, e.g. [`Content::TYPE_HTML`].
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,

    /// Creative template tag, e.g. [`Content::TEMPLATE_IMAGE`].
    #[serde(default)]
    pub template: Option<String>,

    /// Creative data fields plus the lifted `customData` object.
    #[serde(default, deserialize_with = "crate::serde_helpers::content_data")]
    pub data: ContentData,

    /// Rendered markup body, ready to display.
    #[serde(default)]
    pub body: Option<String>,
}

impl Content {
    pub const TYPE_HTML: &'static str = "html";
    pub const TYPE_CSS: &'static str = "css";
    pub const TYPE_JS: &'static str = "js";
    pub const TYPE_JS_EXTERNAL: &'static str = "js-external";
    pub const TYPE_RAW: &'static str = "raw";

    pub const TEMPLATE_IMAGE: &'static str = "image";
    pub const TEMPLATE_FLASH: &'static str = "flash";
    pub const TEMPLATE_CUSTOM: &'static str = "custom";

    /// All decoded creative data fields.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data.map
    }

    /// One creative data field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.map.get(key)
    }

    /// The advertiser-defined `customData` object, when present.
    pub fn custom_data(&self) -> Option<&Map<String, Value>> {
        self.data.custom_data.as_ref()
    }

    /// Image URL for image-template creatives.
    pub fn image_url(&self) -> Option<&str> {
        self.get("imageUrl").and_then(Value::as_str)
    }

    /// Title for image-template creatives.
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    pub fn is_image(&self) -> bool {
        self.template.as_deref() == Some(Self::TEMPLATE_IMAGE)
    }
}

/// Holder for `Content.data`: the full decoded map plus the lifted
/// `customData` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentData {
    /// Every decoded field of the `data` object, `customData` included.
    pub map: Map<String, Value>,
    /// Denormalized copy of `data.customData`, when present.
    pub custom_data: Option<Map<String, Value>>,
}

/// A custom tracking event attached to a [`Decision`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Event {
    #[serde(rename = "eventId", default)]
    pub event_id: i64,
    #[serde(rename = "eventUrl", default)]
    pub event_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference_payload() -> Value {
        json!({
            "user": { "key": "K" },
            "decisions": {
                "div1": {
                    "adId": 111,
                    "creativeId": 222,
                    "flightId": 333,
                    "campaignId": 444,
                    "clickUrl": "http://x/c",
                    "contents": [{
                        "type": "html",
                        "template": "image",
                        "data": {
                            "imageUrl": "http://x/i.jpg",
                            "title": "T",
                            "customData": { "foo": 42, "bar": "s" }
                        }
                    }],
                    "impressionUrl": "http://x/i.gif",
                    "events": [{ "eventId": 12, "eventUrl": "http://x/e.gif" }]
                }
            }
        })
    }

    #[test]
    fn test_decode_reference_payload() {
        let response: Response = serde_json::from_value(reference_payload()).unwrap();

        assert_eq!(response.user.as_ref().unwrap().key, "K");
        let decision = response.decision("div1").unwrap();
        assert_eq!(decision.ad_id, 111);
        assert_eq!(decision.creative_id, 222);
        assert_eq!(decision.flight_id, 333);
        assert_eq!(decision.campaign_id, 444);
        assert_eq!(decision.click_url.as_deref(), Some("http://x/c"));
        assert_eq!(decision.impression_url.as_deref(), Some("http://x/i.gif"));

        assert_eq!(decision.contents.len(), 1);
        let content = &decision.contents[0];
        assert_eq!(content.content_type.as_deref(), Some(Content::TYPE_HTML));
        assert_eq!(content.template.as_deref(), Some(Content::TEMPLATE_IMAGE));
        assert!(content.is_image());
        assert!(content.data().contains_key("imageUrl"));
        assert!(content.data().contains_key("title"));
        // The nested object stays in the generic map as well.
        assert!(content.data().contains_key("customData"));
        assert_eq!(content.image_url(), Some("http://x/i.jpg"));
        assert_eq!(content.title(), Some("T"));

        let custom = content.custom_data().unwrap();
        assert_eq!(custom.get("foo"), Some(&json!(42)));
        assert_eq!(custom.get("bar"), Some(&json!("s")));

        assert_eq!(decision.events.len(), 1);
        assert_eq!(decision.events[0].event_id, 12);
        assert_eq!(decision.events[0].event_url, "http://x/e.gif");
    }

    #[test]
    fn test_unfilled_placement_decodes_as_none() {
        let response: Response = serde_json::from_value(json!({
            "user": { "key": "K" },
            "decisions": { "div1": null }
        }))
        .unwrap();

        assert!(response.decisions.contains_key("div1"));
        assert!(response.decision("div1").is_none());
    }

    #[test]
    fn test_decision_defaults_for_absent_lists() {
        let decision: Decision = serde_json::from_value(json!({
            "adId": 1,
            "creativeId": 2,
            "flightId": 3,
            "campaignId": 4
        }))
        .unwrap();

        assert!(decision.contents.is_empty());
        assert!(decision.events.is_empty());
        assert!(decision.click_url.is_none());
    }

    #[test]
    fn test_content_without_data() {
        let content: Content = serde_json::from_value(json!({
            "type": "raw",
            "body": "<h1>hi</h1>"
        }))
        .unwrap();

        assert!(content.data().is_empty());
        assert!(content.custom_data().is_none());
        assert_eq!(content.body.as_deref(), Some("<h1>hi</h1>"));
    }
}
