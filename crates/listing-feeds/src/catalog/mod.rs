//! Static reference data shared read-only by every extraction.

mod amenities;
pub mod defaults;
mod subcategories;

pub use amenities::{amenity_by_code, AmenityEntry, DEFAULT_AMENITIES};
pub use subcategories::{
    default_sub_category, sub_category, CategoryEntry, SubCategoryEntry, COMMERCIAL,
    DEFAULT_SUBCATEGORIES, DEFAULT_SUB_CATEGORY_CODE, RESIDENTIAL,
};
