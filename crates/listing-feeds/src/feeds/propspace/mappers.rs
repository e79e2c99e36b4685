use super::values::{
    COMMERCIAL_RENT, COMMERCIAL_SALE, COMPLETED, FURNISHED, OFF_PLAN, OFF_PLAN_HYPHENATED,
    PARTLY_FURNISHED, READY, RENT, SALE, SEMI_FURNISHED, UNFURNISHED,
};
use crate::canonical::{CompletionStatus, FurnishedStatus, RentDuration, SaleType};
use crate::feeds::{
    AmenityTables, CategoryFamily, CodeTable, Mappers, OfferType, SubCategoryTables,
};

pub static OFFER_TYPES: CodeTable<OfferType> = CodeTable::new(&[
    (
        SALE,
        OfferType {
            sale_type: SaleType::Sale,
            family: CategoryFamily::Residential,
        },
    ),
    (
        RENT,
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
    (READY, CompletionStatus::Ready),
    (COMPLETED, CompletionStatus::Ready),
    (OFF_PLAN, CompletionStatus::OffPlan),
    (OFF_PLAN_HYPHENATED, CompletionStatus::OffPlan),
]);

pub static FURNISHING: CodeTable<FurnishedStatus> = CodeTable::new(&[
    (FURNISHED, FurnishedStatus::Furnished),
    (UNFURNISHED, FurnishedStatus::Unfurnished),
    (SEMI_FURNISHED, FurnishedStatus::PartlyFurnished),
    (PARTLY_FURNISHED, FurnishedStatus::PartlyFurnished),
]);

pub static RESIDENTIAL_SUB_CATEGORIES: CodeTable<&'static str> = CodeTable::new(&[
    ("Apartment", "apartment"),
    ("Villa", "villa"),
    ("Townhouse", "townhouse"),
    ("Penthouse", "penthouse"),
    ("Duplex", "duplex"),
    ("Hotel Apartment", "hotel-apartment"),
    ("Bungalow", "bungalow"),
    ("Compound", "compound"),
    ("Full Floor", "full-floor"),
    ("Residential Land", "residential-land"),
    ("Residential Building", "residential-building"),
]);

pub static COMMERCIAL_SUB_CATEGORIES: CodeTable<&'static str> = CodeTable::new(&[
    ("Office", "office"),
    ("Shop", "shop"),
    ("Retail", "retail"),
    ("Warehouse", "warehouse"),
    ("Showroom", "showroom"),
    ("Labour Camp", "labour-camp"),
    ("Factory", "factory"),
    ("Staff Accommodation", "staff-accommodation"),
    ("Business Centre", "business-centre"),
    ("Villa", "commercial-villa"),
    ("Commercial Villa", "commercial-villa"),
    ("Commercial Land", "commercial-land"),
    ("Commercial Building", "commercial-building"),
    ("Commercial Floor", "commercial-floor"),
    ("Full Floor", "commercial-floor"),
    ("Half Floor", "commercial-floor"),
]);

pub static FACILITIES: CodeTable<&'static str> = CodeTable::new(&[
    ("Central air conditioning", "central-ac"),
    ("Central A/C", "central-ac"),
    ("Balcony", "balcony"),
    ("Shared swimming pool", "shared-pool"),
    ("Swimming pool", "shared-pool"),
    ("Private swimming pool", "private-pool"),
    ("Gymnasium", "shared-gym"),
    ("Shared gym", "shared-gym"),
    ("Private gym", "private-gym"),
    ("Covered parking", "covered-parking"),
    ("Security", "security"),
    ("24 hour security", "security"),
    ("Concierge", "concierge"),
    ("Maids room", "maids-room"),
    ("Maid's room", "maids-room"),
    ("Study", "study"),
    ("Built in wardrobes", "built-in-wardrobes"),
    ("Kitchen appliances", "kitchen-appliances"),
    ("Pets allowed", "pets-allowed"),
    ("Sea view", "view-of-water"),
    ("Lake view", "view-of-water"),
    ("Burj Khalifa view", "view-of-landmark"),
    ("Children's play area", "childrens-play-area"),
    ("Barbecue area", "barbecue-area"),
    ("Private garden", "private-garden"),
    ("Spa", "shared-spa"),
    ("Walk-in closet", "walk-in-closet"),
    ("Lobby in building", "lobby-in-building"),
    ("Meeting rooms", "conference-room"),
    ("Networked", "networked"),
]);

pub static RENTAL_PERIODS: CodeTable<RentDuration> = CodeTable::new(&[
    ("Yearly", RentDuration::Yearly),
    ("Monthly", RentDuration::Monthly),
    ("Weekly", RentDuration::Weekly),
    ("Daily", RentDuration::Daily),
    ("per year", RentDuration::Yearly),
    ("per month", RentDuration::Monthly),
    ("per week", RentDuration::Weekly),
    ("per day", RentDuration::Daily),
]);

pub static MAPPERS: Mappers = Mappers {
    offer_types: &OFFER_TYPES,
    completion: &COMPLETION,
    furnished: &FURNISHING,
    sub_categories: SubCategoryTables {
        residential: &RESIDENTIAL_SUB_CATEGORIES,
        commercial: &COMMERCIAL_SUB_CATEGORIES,
    },
    amenities: AmenityTables {
        codes: None,
        features: &FACILITIES,
    },
    rental_periods: &RENTAL_PERIODS,
};
