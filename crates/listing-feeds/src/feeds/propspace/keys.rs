use crate::feeds::KeyBinding;

pub const REFERENCE_NUMBER: &str = "Unit_Reference_No";
pub const LAST_UPDATED: &str = "Last_Updated";
pub const AD_TYPE: &str = "Ad_Type";
pub const COMPLETION_STATUS: &str = "Completion_Status";
pub const UNIT_TYPE: &str = "Unit_Type";
pub const TITLE: &str = "Property_Title";
pub const DESCRIPTION: &str = "Web_Remarks";
pub const FURNISHED: &str = "Furnished";
pub const DEVELOPER: &str = "Developer";
pub const PROPERTY_AGE: &str = "Property_Age";
pub const BEDROOMS: &str = "Bedrooms";
pub const BATHROOMS: &str = "No_of_Bathroom";
pub const PLOT_AREA: &str = "Plot_Area";
pub const BUILTUP_AREA: &str = "Unit_Builtup_Area";
pub const EMIRATE: &str = "Emirate";
pub const COMMUNITY: &str = "Community";
pub const SUB_COMMUNITY: &str = "Sub_Community";
pub const PROPERTY_NAME: &str = "Property_Name";
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";
pub const IMAGES: &str = "Images.image";
pub const VIDEOS: &str = "Videos.video";
pub const FACILITIES: &str = "Facilities";
pub const FACILITY_ITEMS: &str = "Facilities.facility";
pub const PERMIT_NUMBER: &str = "Permit_Number";
pub const PRICE: &str = "Price";
pub const FREQUENCY: &str = "Frequency";

pub const AGENT_NAME: &str = "Listing_Agent";
pub const AGENT_EMAIL: &str = "Listing_Agent_Email";
pub const AGENT_PHONE: &str = "Listing_Agent_Phone";
pub const AGENT_PHOTO: &str = "Listing_Agent_Photo";

pub const KEYS: &[KeyBinding] = &[
    KeyBinding { field: "referenceNumber", raw: REFERENCE_NUMBER },
    KeyBinding { field: "lastUpdated", raw: LAST_UPDATED },
    KeyBinding { field: "type", raw: AD_TYPE },
    KeyBinding { field: "completion", raw: COMPLETION_STATUS },
    KeyBinding { field: "subCategory", raw: UNIT_TYPE },
    KeyBinding { field: "title", raw: TITLE },
    KeyBinding { field: "description", raw: DESCRIPTION },
    KeyBinding { field: "furnished", raw: FURNISHED },
    KeyBinding { field: "developer", raw: DEVELOPER },
    KeyBinding { field: "age", raw: PROPERTY_AGE },
    KeyBinding { field: "bedroom", raw: BEDROOMS },
    KeyBinding { field: "toilet", raw: BATHROOMS },
    KeyBinding { field: "plotArea", raw: PLOT_AREA },
    KeyBinding { field: "builtInArea", raw: BUILTUP_AREA },
    KeyBinding { field: "location.address.state", raw: EMIRATE },
    KeyBinding { field: "location.address.city", raw: EMIRATE },
    KeyBinding { field: "location.address.neighborhood", raw: COMMUNITY },
    KeyBinding { field: "location.address.street", raw: SUB_COMMUNITY },
    KeyBinding { field: "location.address.building", raw: PROPERTY_NAME },
    KeyBinding { field: "location.coordinates.lat", raw: LATITUDE },
    KeyBinding { field: "location.coordinates.lng", raw: LONGITUDE },
    KeyBinding { field: "media", raw: IMAGES },
    KeyBinding { field: "amenities", raw: FACILITIES },
    KeyBinding { field: "permit", raw: PERMIT_NUMBER },
    KeyBinding { field: "price", raw: PRICE },
    KeyBinding { field: "price.duration", raw: FREQUENCY },
    KeyBinding { field: "agent.name", raw: AGENT_NAME },
    KeyBinding { field: "agent.email", raw: AGENT_EMAIL },
    KeyBinding { field: "agent.phone", raw: AGENT_PHONE },
    KeyBinding { field: "agent.photo", raw: AGENT_PHOTO },
];
