use crate::audience::AudienceDescriptor;
use super::notification_models::{LocalizedText, NotificationPayload, PayloadAudience};

/// Builds the provider payload for a resolved audience.
///
/// Title and body are taken as-is; they are validated at the HTTP boundary.
pub fn build_payload(
    app_id: &str,
    title: &str,
    body: &str,
    audience: AudienceDescriptor,
) -> NotificationPayload {
    let audience = match audience {
        AudienceDescriptor::Segment(name) => PayloadAudience::IncludedSegments(vec![name]),
        AudienceDescriptor::DeviceList(ids) => PayloadAudience::IncludePlayerIds(ids),
    };

    NotificationPayload {
        app_id: app_id.to_string(),
        headings: LocalizedText::en(title),
        contents: LocalizedText::en(body),
        audience,
    }
}
