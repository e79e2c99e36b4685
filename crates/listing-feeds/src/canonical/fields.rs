use serde::Serialize;

/// Canonical property keys, in the order of the default property object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyField {
    ReferenceNumber,
    LastUpdated,
    Type,
    Completion,
    SubCategory,
    Title,
    Description,
    Furnished,
    Developer,
    Age,
    Bedroom,
    Toilet,
    PlotArea,
    BuiltInArea,
    Location,
    Media,
    Amenities,
    Permit,
    Price,
}

impl PropertyField {
    pub const fn ordered() -> [Self; 19] {
        [
            Self::ReferenceNumber,
            Self::LastUpdated,
            Self::Type,
            Self::Completion,
            Self::SubCategory,
            Self::Title,
            Self::Description,
            Self::Furnished,
            Self::Developer,
            Self::Age,
            Self::Bedroom,
            Self::Toilet,
            Self::PlotArea,
            Self::BuiltInArea,
            Self::Location,
            Self::Media,
            Self::Amenities,
            Self::Permit,
            Self::Price,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ReferenceNumber => "referenceNumber",
            Self::LastUpdated => "lastUpdated",
            Self::Type => "type",
            Self::Completion => "completion",
            Self::SubCategory => "subCategory",
            Self::Title => "title",
            Self::Description => "description",
            Self::Furnished => "furnished",
            Self::Developer => "developer",
            Self::Age => "age",
            Self::Bedroom => "bedroom",
            Self::Toilet => "toilet",
            Self::PlotArea => "plotArea",
            Self::BuiltInArea => "builtInArea",
            Self::Location => "location",
            Self::Media => "media",
            Self::Amenities => "amenities",
            Self::Permit => "permit",
            Self::Price => "price",
        }
    }
}

/// Canonical agent keys, in the order of the default agent object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AgentField {
    Name,
    Email,
    Phone,
    Photo,
}

impl AgentField {
    pub const fn ordered() -> [Self; 4] {
        [Self::Name, Self::Email, Self::Phone, Self::Photo]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "agent.name",
            Self::Email => "agent.email",
            Self::Phone => "agent.phone",
            Self::Photo => "agent.photo",
        }
    }
}
