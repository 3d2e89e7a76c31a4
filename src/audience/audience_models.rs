/// Who receives a broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudienceDescriptor {
    /// A provider-defined audience group, e.g. `"All"`.
    Segment(String),
    /// Explicit device ids in encounter order, without duplicates. May be empty.
    DeviceList(Vec<String>),
}

impl AudienceDescriptor {
    /// True for an empty device list: nothing to send.
    pub fn is_empty(&self) -> bool {
        matches!(self, AudienceDescriptor::DeviceList(ids) if ids.is_empty())
    }

    /// Number of explicit recipients, or `None` for a segment.
    pub fn device_count(&self) -> Option<usize> {
        match self {
            AudienceDescriptor::Segment(_) => None,
            AudienceDescriptor::DeviceList(ids) => Some(ids.len()),
        }
    }
}
