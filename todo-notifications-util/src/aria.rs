use serde::{Deserialize, Serialize};

/// Politeness hint forwarded untouched to the accessibility layer.
///
/// Mirrors the `aria-live` attribute values; the manager never interprets
/// it beyond picking a severity-appropriate default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaLive {
    Off,
    #[default]
    Polite,
    Assertive,
}
