use crate::feeds::Vocabulary;

pub const SALE: &str = "Sale";
pub const RENT: &str = "Rent";
pub const COMMERCIAL_SALE: &str = "Commercial Sale";
pub const COMMERCIAL_RENT: &str = "Commercial Rent";

pub const READY: &str = "Ready";
pub const COMPLETED: &str = "Completed";
pub const OFF_PLAN: &str = "Off Plan";
pub const OFF_PLAN_HYPHENATED: &str = "Off-Plan";

pub const FURNISHED: &str = "Furnished";
pub const UNFURNISHED: &str = "Unfurnished";
pub const SEMI_FURNISHED: &str = "Semi-Furnished";
pub const PARTLY_FURNISHED: &str = "Partly Furnished";

pub const STUDIO: &str = "Studio";
pub const COUNTRY: &str = "United Arab Emirates";

pub static VOCABULARY: Vocabulary = Vocabulary {
    offer_types: &[SALE, RENT, COMMERCIAL_SALE, COMMERCIAL_RENT],
    completion_statuses: &[READY, COMPLETED, OFF_PLAN, OFF_PLAN_HYPHENATED],
    furnished_statuses: &[FURNISHED, UNFURNISHED, SEMI_FURNISHED, PARTLY_FURNISHED],
    property_types: &[
        "Apartment",
        "Villa",
        "Townhouse",
        "Penthouse",
        "Duplex",
        "Hotel Apartment",
        "Bungalow",
        "Compound",
        "Full Floor",
        "Half Floor",
        "Residential Land",
        "Residential Building",
        "Bulk Units",
        "Office",
        "Shop",
        "Retail",
        "Warehouse",
        "Showroom",
        "Labour Camp",
        "Factory",
        "Staff Accommodation",
        "Business Centre",
        "Commercial Villa",
        "Commercial Land",
        "Commercial Building",
        "Commercial Floor",
    ],
    rental_periods: &[
        "Yearly",
        "Monthly",
        "Weekly",
        "Daily",
        "per year",
        "per month",
        "per week",
        "per day",
    ],
    studio: STUDIO,
    country: COUNTRY,
};
