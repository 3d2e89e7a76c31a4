use std::collections::HashSet;

use crate::{error::Result, user::UserSource};
use super::audience_models::AudienceDescriptor;

/// Provider segment that addresses every subscriber.
pub const ALL_SEGMENT: &str = "All";

/// Resolves the audience for a broadcast.
///
/// With `to_all` set the user source is never read. Otherwise every record is
/// loaded and the usable device ids are collected in order, keeping the first
/// occurrence of each id. An empty result is returned as an empty
/// `DeviceList`, not an error.
pub async fn resolve_audience(
    to_all: bool,
    user_source: &dyn UserSource,
) -> Result<AudienceDescriptor> {
    if to_all {
        return Ok(AudienceDescriptor::Segment(ALL_SEGMENT.to_string()));
    }

    let users = user_source.fetch_all().await?;

    let mut seen = HashSet::new();
    let device_ids: Vec<String> = users
        .iter()
        .filter_map(|user| user.usable_device_id())
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        "Resolved {} device ids from {} user records",
        device_ids.len(),
        users.len()
    );

    Ok(AudienceDescriptor::DeviceList(device_ids))
}
