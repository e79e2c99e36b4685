/// Top-level listing category from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub code: &'static str,
    pub id: &'static str,
}

/// Sub-category from the catalog, carrying its parent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCategoryEntry {
    pub code: &'static str,
    pub id: &'static str,
    pub category: CategoryEntry,
}

pub const RESIDENTIAL: CategoryEntry = CategoryEntry {
    code: "residential",
    id: "6540a1f2c3b4d5e6f7a80001",
};

pub const COMMERCIAL: CategoryEntry = CategoryEntry {
    code: "commercial",
    id: "6540a1f2c3b4d5e6f7a80002",
};

pub const DEFAULT_SUB_CATEGORY_CODE: &str = "apartment";

const fn residential(code: &'static str, id: &'static str) -> SubCategoryEntry {
    SubCategoryEntry {
        code,
        id,
        category: RESIDENTIAL,
    }
}

const fn commercial(code: &'static str, id: &'static str) -> SubCategoryEntry {
    SubCategoryEntry {
        code,
        id,
        category: COMMERCIAL,
    }
}

pub static DEFAULT_SUBCATEGORIES: &[SubCategoryEntry] = &[
    residential("apartment", "6540a1f2c3b4d5e6f7a81001"),
    residential("villa", "6540a1f2c3b4d5e6f7a81002"),
    residential("townhouse", "6540a1f2c3b4d5e6f7a81003"),
    residential("penthouse", "6540a1f2c3b4d5e6f7a81004"),
    residential("duplex", "6540a1f2c3b4d5e6f7a81005"),
    residential("hotel-apartment", "6540a1f2c3b4d5e6f7a81006"),
    residential("bungalow", "6540a1f2c3b4d5e6f7a81007"),
    residential("compound", "6540a1f2c3b4d5e6f7a81008"),
    residential("full-floor", "6540a1f2c3b4d5e6f7a81009"),
    residential("residential-land", "6540a1f2c3b4d5e6f7a8100a"),
    residential("residential-building", "6540a1f2c3b4d5e6f7a8100b"),
    commercial("office", "6540a1f2c3b4d5e6f7a82001"),
    commercial("shop", "6540a1f2c3b4d5e6f7a82002"),
    commercial("retail", "6540a1f2c3b4d5e6f7a82003"),
    commercial("warehouse", "6540a1f2c3b4d5e6f7a82004"),
    commercial("showroom", "6540a1f2c3b4d5e6f7a82005"),
    commercial("labour-camp", "6540a1f2c3b4d5e6f7a82006"),
    commercial("factory", "6540a1f2c3b4d5e6f7a82007"),
    commercial("staff-accommodation", "6540a1f2c3b4d5e6f7a82008"),
    commercial("business-centre", "6540a1f2c3b4d5e6f7a82009"),
    commercial("co-working", "6540a1f2c3b4d5e6f7a8200a"),
    commercial("commercial-villa", "6540a1f2c3b4d5e6f7a8200b"),
    commercial("commercial-land", "6540a1f2c3b4d5e6f7a8200c"),
    commercial("commercial-building", "6540a1f2c3b4d5e6f7a8200d"),
    commercial("commercial-floor", "6540a1f2c3b4d5e6f7a8200e"),
];

pub fn sub_category(code: &str) -> Option<&'static SubCategoryEntry> {
    DEFAULT_SUBCATEGORIES.iter().find(|entry| entry.code == code)
}

/// Catalog entry used whenever sub-category resolution fails.
pub fn default_sub_category() -> &'static SubCategoryEntry {
    // DEFAULT_SUB_CATEGORY_CODE is the first catalog entry.
    sub_category(DEFAULT_SUB_CATEGORY_CODE).unwrap_or(&DEFAULT_SUBCATEGORIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_codes_and_ids_are_unique() {
        let codes: HashSet<_> = DEFAULT_SUBCATEGORIES.iter().map(|entry| entry.code).collect();
        let ids: HashSet<_> = DEFAULT_SUBCATEGORIES.iter().map(|entry| entry.id).collect();
        assert_eq!(codes.len(), DEFAULT_SUBCATEGORIES.len());
        assert_eq!(ids.len(), DEFAULT_SUBCATEGORIES.len());
    }

    #[test]
    fn default_sub_category_is_residential_apartment() {
        let entry = default_sub_category();
        assert_eq!(entry.code, "apartment");
        assert_eq!(entry.category, RESIDENTIAL);
    }
}
