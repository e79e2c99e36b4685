use crate::feeds::KeyBinding;

pub const REFERENCE_NUMBER: &str = "reference_number";
pub const LAST_UPDATE: &str = "last_update";
pub const OFFERING_TYPE: &str = "offering_type";
pub const COMPLETION_STATUS: &str = "completion_status";
pub const PROPERTY_TYPE: &str = "property_type";
pub const TITLE: &str = "title_en";
pub const DESCRIPTION: &str = "description_en";
pub const FURNISHED: &str = "furnished";
pub const DEVELOPER: &str = "developer";
pub const BUILD_YEAR: &str = "build_year";
pub const BEDROOM: &str = "bedroom";
pub const BATHROOM: &str = "bathroom";
pub const PLOT_SIZE: &str = "plot_size";
pub const SIZE: &str = "size";
pub const CITY: &str = "city";
pub const COMMUNITY: &str = "community";
pub const SUB_COMMUNITY: &str = "sub_community";
pub const PROPERTY_NAME: &str = "property_name";
pub const GEOPOINTS: &str = "geopoints";
pub const PHOTO_URL: &str = "photo.url";
pub const VIDEO_TOUR_URL: &str = "video_tour_url";
pub const PRIVATE_AMENITIES: &str = "private_amenities";
pub const COMMERCIAL_AMENITIES: &str = "commercial_amenities";
pub const FEATURES: &str = "features";
pub const PERMIT_NUMBER: &str = "permit_number";
pub const DTCM_PERMIT: &str = "dtcm_permit";
pub const PRICE: &str = "price";
pub const RENTAL_PERIOD: &str = "rental_period";

pub const AGENT: &str = "agent";
pub const AGENT_NAME: &str = "name";
pub const AGENT_EMAIL: &str = "email";
pub const AGENT_PHONE: &str = "phone";
pub const AGENT_PHOTO: &str = "photo";

pub const KEYS: &[KeyBinding] = &[
    KeyBinding { field: "referenceNumber", raw: REFERENCE_NUMBER },
    KeyBinding { field: "lastUpdated", raw: LAST_UPDATE },
    KeyBinding { field: "type", raw: OFFERING_TYPE },
    KeyBinding { field: "completion", raw: COMPLETION_STATUS },
    KeyBinding { field: "subCategory", raw: PROPERTY_TYPE },
    KeyBinding { field: "title", raw: TITLE },
    KeyBinding { field: "description", raw: DESCRIPTION },
    KeyBinding { field: "furnished", raw: FURNISHED },
    KeyBinding { field: "developer", raw: DEVELOPER },
    KeyBinding { field: "age", raw: BUILD_YEAR },
    KeyBinding { field: "bedroom", raw: BEDROOM },
    KeyBinding { field: "toilet", raw: BATHROOM },
    KeyBinding { field: "plotArea", raw: PLOT_SIZE },
    KeyBinding { field: "builtInArea", raw: SIZE },
    KeyBinding { field: "location.address.city", raw: CITY },
    KeyBinding { field: "location.address.neighborhood", raw: COMMUNITY },
    KeyBinding { field: "location.address.street", raw: SUB_COMMUNITY },
    KeyBinding { field: "location.address.building", raw: PROPERTY_NAME },
    KeyBinding { field: "location.coordinates", raw: GEOPOINTS },
    KeyBinding { field: "media", raw: PHOTO_URL },
    KeyBinding { field: "amenities", raw: PRIVATE_AMENITIES },
    KeyBinding { field: "permit", raw: PERMIT_NUMBER },
    KeyBinding { field: "price", raw: PRICE },
    KeyBinding { field: "price.duration", raw: RENTAL_PERIOD },
    KeyBinding { field: "agent", raw: AGENT },
    KeyBinding { field: "agent.name", raw: AGENT_NAME },
    KeyBinding { field: "agent.email", raw: AGENT_EMAIL },
    KeyBinding { field: "agent.phone", raw: AGENT_PHONE },
    KeyBinding { field: "agent.photo", raw: AGENT_PHOTO },
];
