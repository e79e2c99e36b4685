use super::subcategories::default_sub_category;
use crate::canonical::{
    Address, Age, AgeUnit, Amenities, CanonicalAgent, CanonicalProperty, CompletionStatus,
    Coordinates, Currency, FurnishedStatus, Location, Permit, PermitAuthority, Price, SaleType,
};
use chrono::{DateTime, Utc};

pub const SALE_TYPE: SaleType = SaleType::Sale;
pub const COMPLETION: CompletionStatus = CompletionStatus::Ready;
pub const FURNISHED: FurnishedStatus = FurnishedStatus::Unfurnished;
pub const DEVELOPER: &str = "";
pub const AGE: Age = Age {
    value: 0,
    unit: AgeUnit::Years,
};
pub const BEDROOM: u32 = 0;
pub const TOILET: u32 = 0;
pub const PLOT_AREA: f64 = 0.0;
pub const BUILT_IN_AREA: f64 = 0.0;
pub const ADDRESS_PART: &str = "";
pub const COORDINATES: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };
pub const PERMIT_NUMBER: &str = "";
pub const PRICE_VALUE: f64 = 0.0;
pub const AGENT_NAME: &str = "";
pub const AGENT_PHONE: &str = "";
pub const AGENT_PHOTO: &str = "";

/// Unix epoch.
pub fn last_updated() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// Builds a fresh default property. Every call returns an independent value;
/// extraction writes into its own copy and never into shared state.
pub fn default_property() -> CanonicalProperty {
    let sub_category = default_sub_category();
    CanonicalProperty {
        reference_number: String::new(),
        last_updated: last_updated(),
        sale_type: SALE_TYPE,
        completion: COMPLETION,
        category: sub_category.category.id.to_string(),
        sub_category: sub_category.id.to_string(),
        title: String::new(),
        description: String::new(),
        furnished: FURNISHED,
        developer: DEVELOPER.to_string(),
        age: AGE,
        bedroom: BEDROOM,
        toilet: TOILET,
        plot_area: PLOT_AREA,
        built_in_area: BUILT_IN_AREA,
        location: Location {
            address: Address::default(),
            coordinates: COORDINATES,
        },
        media: Vec::new(),
        amenities: Amenities::default(),
        permit: Permit {
            number: PERMIT_NUMBER.to_string(),
            authority: PermitAuthority::Unknown,
        },
        price: Price {
            value: PRICE_VALUE,
            currency: Currency::default(),
            duration: None,
        },
    }
}

pub fn default_agent() -> CanonicalAgent {
    CanonicalAgent {
        name: AGENT_NAME.to_string(),
        email: String::new(),
        phone: AGENT_PHONE.to_string(),
        photo: AGENT_PHOTO.to_string(),
    }
}
