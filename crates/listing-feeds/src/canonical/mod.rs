mod agent;
mod fields;
mod property;

pub use agent::{normalize_phone, CanonicalAgent};
pub use fields::{AgentField, PropertyField};
pub use property::{
    Address, Age, AgeUnit, Amenities, CanonicalProperty, CompletionStatus, Coordinates, Currency,
    FurnishedStatus, Location, Media, MediaKind, Permit, PermitAuthority, Price, RentDuration,
    SaleType,
};

use serde::Serialize;

/// Normalized output for one raw feed record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedData {
    pub property: CanonicalProperty,
    pub agent: CanonicalAgent,
    pub warnings: Vec<String>,
}
