use super::values::{
    COMMERCIAL_RENT, COMMERCIAL_SALE, COMPLETED, COMPLETED_PRIMARY, FURNISHED_NO,
    FURNISHED_PARTLY, FURNISHED_YES, OFF_PLAN, OFF_PLAN_PRIMARY, RESIDENTIAL_RENT,
    RESIDENTIAL_SALE,
};
use crate::canonical::{CompletionStatus, FurnishedStatus, RentDuration, SaleType};
use crate::feeds::{
    AmenityTables, CategoryFamily, CodeTable, Mappers, OfferType, SubCategoryTables,
};

pub static OFFER_TYPES: CodeTable<OfferType> = CodeTable::new(&[
    (
        RESIDENTIAL_SALE,
        OfferType {
            sale_type: SaleType::Sale,
            family: CategoryFamily::Residential,
        },
    ),
    (
        RESIDENTIAL_RENT,
        OfferType {
            sale_type: SaleType::Rent,
            family: CategoryFamily::Residential,
        },
    ),
    (
        COMMERCIAL_SALE,
        OfferType {
            sale_type: SaleType::Sale,
            family: CategoryFamily::Commercial,
        },
    ),
    (
        COMMERCIAL_RENT,
        OfferType {
            sale_type: SaleType::Rent,
            family: CategoryFamily::Commercial,
        },
    ),
]);

pub static COMPLETION: CodeTable<CompletionStatus> = CodeTable::new(&[
    (COMPLETED, CompletionStatus::Ready),
    (COMPLETED_PRIMARY, CompletionStatus::Ready),
    (OFF_PLAN, CompletionStatus::OffPlan),
    (OFF_PLAN_PRIMARY, CompletionStatus::OffPlan),
]);

pub static FURNISHED: CodeTable<FurnishedStatus> = CodeTable::new(&[
    (FURNISHED_YES, FurnishedStatus::Furnished),
    (FURNISHED_NO, FurnishedStatus::Unfurnished),
    (FURNISHED_PARTLY, FurnishedStatus::PartlyFurnished),
]);

pub static RESIDENTIAL_SUB_CATEGORIES: CodeTable<&'static str> = CodeTable::new(&[
    ("AP", "apartment"),
    ("BW", "bungalow"),
    ("CD", "compound"),
    ("DX", "duplex"),
    ("FF", "full-floor"),
    ("LP", "residential-land"),
    ("PH", "penthouse"),
    ("TH", "townhouse"),
    ("VH", "villa"),
    ("WB", "residential-building"),
    ("HA", "hotel-apartment"),
]);

pub static COMMERCIAL_SUB_CATEGORIES: CodeTable<&'static str> = CodeTable::new(&[
    ("OF", "office"),
    ("SH", "shop"),
    ("RE", "retail"),
    ("WH", "warehouse"),
    ("SR", "showroom"),
    ("LC", "labour-camp"),
    ("FA", "factory"),
    ("ST", "staff-accommodation"),
    ("BC", "business-centre"),
    ("CW", "co-working"),
    ("VH", "commercial-villa"),
    ("LP", "commercial-land"),
    ("WB", "commercial-building"),
    ("FF", "commercial-floor"),
    ("HF", "commercial-floor"),
]);

pub static AMENITY_CODES: CodeTable<&'static str> = CodeTable::new(&[
    ("AC", "Central A/C & Heating"),
    ("BA", "Balcony"),
    ("BK", "Built in Kitchen Appliances"),
    ("BL", "View of Landmark"),
    ("BW", "Built in Wardrobes"),
    ("CP", "Covered Parking"),
    ("CS", "Concierge Service"),
    ("LB", "Lobby in Building"),
    ("MR", "Maid's Room"),
    ("MS", "Maid Service"),
    ("PA", "Pets Allowed"),
    ("PG", "Private Garden"),
    ("PJ", "Private Jacuzzi"),
    ("PP", "Private Pool"),
    ("PY", "Private Gym"),
    ("SE", "Security"),
    ("SP", "Shared Pool"),
    ("SS", "Shared Spa"),
    ("ST", "Study"),
    ("SY", "Shared Gym"),
    ("VC", "Vastu-compliant"),
    ("VW", "View of Water"),
    ("WC", "Walk-in Closet"),
    ("BR", "Barbecue Area"),
    ("CO", "Children's Pool"),
    ("PR", "Children's Play Area"),
    ("AN", "Cable-ready"),
    ("CR", "Conference Room"),
    ("DN", "Dining in building"),
    ("MT", "Maintenance"),
    ("NT", "Networked"),
    ("SH", "Shared Kitchen"),
    ("PN", "Pantry"),
]);

pub static AMENITY_FEATURES: CodeTable<&'static str> = CodeTable::new(&[
    ("Central A/C & Heating", "central-ac"),
    ("Balcony", "balcony"),
    ("Built in Kitchen Appliances", "kitchen-appliances"),
    ("View of Landmark", "view-of-landmark"),
    ("Built in Wardrobes", "built-in-wardrobes"),
    ("Covered Parking", "covered-parking"),
    ("Concierge Service", "concierge"),
    ("Lobby in Building", "lobby-in-building"),
    ("Maid's Room", "maids-room"),
    ("Pets Allowed", "pets-allowed"),
    ("Private Garden", "private-garden"),
    ("Private Pool", "private-pool"),
    ("Private Gym", "private-gym"),
    ("Security", "security"),
    ("Shared Pool", "shared-pool"),
    ("Shared Spa", "shared-spa"),
    ("Study", "study"),
    ("Shared Gym", "shared-gym"),
    ("View of Water", "view-of-water"),
    ("Walk-in Closet", "walk-in-closet"),
    ("Barbecue Area", "barbecue-area"),
    ("Children's Play Area", "childrens-play-area"),
    ("Conference Room", "conference-room"),
    ("Networked", "networked"),
]);

pub static RENTAL_PERIODS: CodeTable<RentDuration> = CodeTable::new(&[
    ("Y", RentDuration::Yearly),
    ("M", RentDuration::Monthly),
    ("W", RentDuration::Weekly),
    ("D", RentDuration::Daily),
    ("yearly", RentDuration::Yearly),
    ("monthly", RentDuration::Monthly),
    ("weekly", RentDuration::Weekly),
    ("daily", RentDuration::Daily),
]);

pub static MAPPERS: Mappers = Mappers {
    offer_types: &OFFER_TYPES,
    completion: &COMPLETION,
    furnished: &FURNISHED,
    sub_categories: SubCategoryTables {
        residential: &RESIDENTIAL_SUB_CATEGORIES,
        commercial: &COMMERCIAL_SUB_CATEGORIES,
    },
    amenities: AmenityTables {
        codes: Some(&AMENITY_CODES),
        features: &AMENITY_FEATURES,
    },
    rental_periods: &RENTAL_PERIODS,
};

#[cfg(test)]
mod tests {
    use super::super::values::VOCABULARY;
    use super::*;
    use crate::catalog;
    use crate::feeds::Vocabulary;

    #[test]
    fn sub_category_targets_exist_in_catalog_with_matching_family() {
        for (code, target) in RESIDENTIAL_SUB_CATEGORIES.entries() {
            let entry = catalog::sub_category(target).expect("residential target in catalog");
            assert_eq!(entry.category, catalog::RESIDENTIAL, "{code} -> {target}");
            assert!(Vocabulary::is_legal(VOCABULARY.property_types, code));
        }
        for (code, target) in COMMERCIAL_SUB_CATEGORIES.entries() {
            let entry = catalog::sub_category(target).expect("commercial target in catalog");
            assert_eq!(entry.category, catalog::COMMERCIAL, "{code} -> {target}");
            assert!(Vocabulary::is_legal(VOCABULARY.property_types, code));
        }
    }

    #[test]
    fn amenity_stages_chain_into_catalog() {
        for (feature, target) in AMENITY_FEATURES.entries() {
            assert!(
                catalog::amenity_by_code(target).is_some(),
                "{feature} -> {target} missing from catalog"
            );
        }
        assert_eq!(
            AMENITY_CODES
                .translate("sp")
                .and_then(|feature| AMENITY_FEATURES.translate(feature)),
            Some("shared-pool")
        );
    }
}
