use serde::Serialize;

/// Text keyed by language code. Only English is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: String,
}

impl LocalizedText {
    pub fn en(text: &str) -> Self {
        Self { en: text.to_string() }
    }
}

/// Provider audience field. Flattened into the payload, so exactly one of
/// `included_segments` or `include_player_ids` is ever serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PayloadAudience {
    #[serde(rename = "included_segments")]
    IncludedSegments(Vec<String>),
    #[serde(rename = "include_player_ids")]
    IncludePlayerIds(Vec<String>),
}

/// Request body for the provider's create-notification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub app_id: String,
    pub headings: LocalizedText,
    pub contents: LocalizedText,
    #[serde(flatten)]
    pub audience: PayloadAudience,
}

impl NotificationPayload {
    /// Number of explicit device ids, `None` when targeting segments.
    pub fn device_count(&self) -> Option<usize> {
        match &self.audience {
            PayloadAudience::IncludedSegments(_) => None,
            PayloadAudience::IncludePlayerIds(ids) => Some(ids.len()),
        }
    }
}
