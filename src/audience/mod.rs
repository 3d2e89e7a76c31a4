pub mod audience_models;
pub mod audience_resolver;

pub use audience_models::AudienceDescriptor;
pub use audience_resolver::{resolve_audience, ALL_SEGMENT};
