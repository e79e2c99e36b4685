use crate::feeds::Vocabulary;

pub const RESIDENTIAL_SALE: &str = "RS";
pub const RESIDENTIAL_RENT: &str = "RR";
pub const COMMERCIAL_SALE: &str = "CS";
pub const COMMERCIAL_RENT: &str = "CR";

pub const COMPLETED: &str = "completed";
pub const COMPLETED_PRIMARY: &str = "completed_primary";
pub const OFF_PLAN: &str = "off_plan";
pub const OFF_PLAN_PRIMARY: &str = "off_plan_primary";

pub const FURNISHED_YES: &str = "Yes";
pub const FURNISHED_NO: &str = "No";
pub const FURNISHED_PARTLY: &str = "Partly";

pub const STUDIO: &str = "studio";
pub const COUNTRY: &str = "United Arab Emirates";

/// Nested price keys, in the order they are tried.
pub const PRICE_PERIOD_KEYS: [&str; 4] = ["yearly", "monthly", "weekly", "daily"];

pub static VOCABULARY: Vocabulary = Vocabulary {
    offer_types: &[RESIDENTIAL_SALE, RESIDENTIAL_RENT, COMMERCIAL_SALE, COMMERCIAL_RENT],
    completion_statuses: &[COMPLETED, COMPLETED_PRIMARY, OFF_PLAN, OFF_PLAN_PRIMARY],
    furnished_statuses: &[FURNISHED_YES, FURNISHED_NO, FURNISHED_PARTLY],
    property_types: &[
        "AP", "BW", "CD", "DX", "FF", "HF", "LP", "PH", "TH", "VH", "WB", "HA", "BU", "OF", "SH",
        "RE", "WH", "SR", "LC", "FA", "ST", "BC", "CW", "RT",
    ],
    rental_periods: &["Y", "M", "W", "D"],
    studio: STUDIO,
    country: COUNTRY,
};
