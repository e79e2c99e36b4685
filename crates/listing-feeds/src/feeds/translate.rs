use super::extraction::{CategoryAssignment, Extraction};
use crate::canonical::{Amenities, CompletionStatus, FurnishedStatus, RentDuration, SaleType};
use crate::catalog::{self, SubCategoryEntry};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

/// Canonical form for comparing vendor tokens: no BOM or zero-width
/// characters, single spaces, lowercase.
pub fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Static vendor-to-canonical lookup table, indexed on first use.
pub struct CodeTable<T: 'static> {
    entries: &'static [(&'static str, T)],
    index: OnceLock<HashMap<String, T>>,
}

impl<T: Copy + Send + Sync + 'static> CodeTable<T> {
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self {
        Self {
            entries,
            index: OnceLock::new(),
        }
    }

    pub fn translate(&self, code: &str) -> Option<T> {
        self.index().get(&normalize_token(code)).copied()
    }

    pub fn entries(&self) -> &'static [(&'static str, T)] {
        self.entries
    }

    fn index(&self) -> &HashMap<String, T> {
        self.index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.entries.len());
            for (code, target) in self.entries {
                map.insert(normalize_token(code), *target);
            }
            map
        })
    }
}

/// Vendor offer types carry both the sale/rent split and the category family
/// that selects the sub-category mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferType {
    pub sale_type: SaleType,
    pub family: CategoryFamily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFamily {
    Residential,
    Commercial,
}

/// Legal value sets a vendor publishes for its enumerated keys.
pub struct Vocabulary {
    pub offer_types: &'static [&'static str],
    pub completion_statuses: &'static [&'static str],
    pub furnished_statuses: &'static [&'static str],
    pub property_types: &'static [&'static str],
    pub rental_periods: &'static [&'static str],
    /// Bedroom token meaning zero bedrooms.
    pub studio: &'static str,
    /// Country implied by the feed; every listing it carries is in it.
    pub country: &'static str,
}

impl Vocabulary {
    pub fn is_legal(values: &[&str], raw: &str) -> bool {
        let wanted = normalize_token(raw);
        values.iter().any(|value| normalize_token(value) == wanted)
    }
}

pub struct SubCategoryTables {
    pub residential: &'static CodeTable<&'static str>,
    pub commercial: &'static CodeTable<&'static str>,
}

impl SubCategoryTables {
    pub fn for_family(&self, family: CategoryFamily) -> &'static CodeTable<&'static str> {
        match family {
            CategoryFamily::Residential => self.residential,
            CategoryFamily::Commercial => self.commercial,
        }
    }
}

/// Two composable amenity stages. Vendors whose feed already lists feature
/// names leave `codes` empty.
pub struct AmenityTables {
    pub codes: Option<&'static CodeTable<&'static str>>,
    pub features: &'static CodeTable<&'static str>,
}

pub struct Mappers {
    pub offer_types: &'static CodeTable<OfferType>,
    pub completion: &'static CodeTable<CompletionStatus>,
    pub furnished: &'static CodeTable<FurnishedStatus>,
    pub sub_categories: SubCategoryTables,
    pub amenities: AmenityTables,
    pub rental_periods: &'static CodeTable<RentDuration>,
}

const SUB_CATEGORY_FIELD: &str = "subCategory";
const AMENITIES_FIELD: &str = "amenities";

fn assignment(entry: &SubCategoryEntry) -> CategoryAssignment {
    CategoryAssignment {
        category: entry.category.id.to_string(),
        sub_category: entry.id.to_string(),
    }
}

/// Resolves a vendor property type to catalog ids through the family's
/// mapper. Any failed step yields the default pairing and one warning.
pub(crate) fn resolve_sub_category(
    family: Option<CategoryFamily>,
    property_type: Option<&str>,
    legal_types: &[&str],
    tables: &SubCategoryTables,
) -> Extraction<CategoryAssignment> {
    let fallback = catalog::default_sub_category();
    let defaulted = |reason: String| {
        Extraction::defaulted(
            assignment(fallback),
            format!(
                "{SUB_CATEGORY_FIELD}: {reason}, using default sub-category '{}' in category '{}'",
                fallback.code, fallback.category.code
            ),
        )
    };

    let Some(family) = family else {
        return defaulted("offering type missing or unsupported".to_string());
    };
    let Some(property_type) = property_type else {
        return defaulted("property type missing".to_string());
    };
    if !Vocabulary::is_legal(legal_types, property_type) {
        return defaulted(format!("unsupported property type '{property_type}'"));
    }
    let Some(code) = tables.for_family(family).translate(property_type) else {
        return defaulted(format!(
            "no {family:?} sub-category mapping for property type '{property_type}'"
        ));
    };
    match catalog::sub_category(code) {
        Some(entry) => Extraction::ok(assignment(entry)),
        None => defaulted(format!("sub-category '{code}' not in catalog")),
    }
}

/// Merges amenity codes and free-text features into basic/other sets.
///
/// Codes translate to feature names (unknown codes are dropped with a
/// warning), the union is deduplicated on the normalized name, and each
/// feature lands in `basic` when it maps to a catalog amenity, otherwise in
/// `other`. The output is independent of input order.
pub(crate) fn resolve_amenities(
    codes: &[String],
    features: &[String],
    tables: &AmenityTables,
) -> Extraction<Amenities> {
    let mut warnings = Vec::new();
    let mut names: BTreeMap<String, String> = BTreeMap::new();
    let mut add_name = |name: &str| {
        let key = normalize_token(name);
        if key.is_empty() {
            return;
        }
        names
            .entry(key)
            .and_modify(|kept| {
                if name < kept.as_str() {
                    *kept = name.to_string();
                }
            })
            .or_insert_with(|| name.to_string());
    };

    let unique_codes: BTreeSet<String> = codes.iter().map(|code| code.trim().to_string()).collect();
    for code in unique_codes.iter().filter(|code| !code.is_empty()) {
        match tables.codes.and_then(|table| table.translate(code)) {
            Some(feature) => add_name(feature),
            None => warnings.push(format!(
                "{AMENITIES_FIELD}: unknown amenity code '{code}' dropped"
            )),
        }
    }
    for feature in features {
        add_name(feature.trim());
    }

    let mut basic = BTreeSet::new();
    let mut other = BTreeSet::new();
    for name in names.into_values() {
        match tables
            .features
            .translate(&name)
            .and_then(catalog::amenity_by_code)
        {
            Some(entry) => {
                basic.insert(entry.id.to_string());
            }
            None => {
                other.insert(name);
            }
        }
    }

    Extraction::ok(Amenities {
        basic: basic.into_iter().collect(),
        other: other.into_iter().collect(),
    })
    .with_warnings(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    static FEATURES: CodeTable<&'static str> = CodeTable::new(&[
        ("Balcony", "balcony"),
        ("Shared Pool", "shared-pool"),
        ("Rooftop Cinema", "rooftop-cinema"),
    ]);
    static CODES: CodeTable<&'static str> =
        CodeTable::new(&[("BA", "Balcony"), ("SP", "Shared Pool")]);
    static RESIDENTIAL: CodeTable<&'static str> =
        CodeTable::new(&[("AP", "apartment"), ("VH", "villa"), ("XX", "castle")]);
    static COMMERCIAL: CodeTable<&'static str> = CodeTable::new(&[("OF", "office")]);

    fn amenity_tables() -> AmenityTables {
        AmenityTables {
            codes: Some(&CODES),
            features: &FEATURES,
        }
    }

    fn sub_category_tables() -> SubCategoryTables {
        SubCategoryTables {
            residential: &RESIDENTIAL,
            commercial: &COMMERCIAL,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn normalize_token_removes_whitespace_and_case() {
        assert_eq!(normalize_token("\u{feff}Shared   Pool "), "shared pool");
    }

    #[test]
    fn code_table_matches_case_insensitively() {
        assert_eq!(CODES.translate(" ba "), Some("Balcony"));
        assert_eq!(CODES.translate("ZZ"), None);
    }

    #[test]
    fn amenities_split_into_basic_and_other() {
        let resolved = resolve_amenities(
            &strings(&["BA", "ZZ"]),
            &strings(&["balcony", "Sauna", "Rooftop Cinema"]),
            &amenity_tables(),
        );

        let balcony = catalog::amenity_by_code("balcony").expect("catalog entry");
        assert_eq!(resolved.data.basic, vec![balcony.id.to_string()]);
        // rooftop-cinema maps at stage two but is not a catalog amenity.
        assert_eq!(resolved.data.other, vec!["Rooftop Cinema", "Sauna"]);
        assert_eq!(
            resolved.errors,
            vec!["amenities: unknown amenity code 'ZZ' dropped"]
        );
    }

    #[test]
    fn amenities_are_order_independent() {
        let forward = resolve_amenities(
            &strings(&["SP", "BA", "QQ"]),
            &strings(&["Sauna", "sauna", "Shared Pool"]),
            &amenity_tables(),
        );
        let reversed = resolve_amenities(
            &strings(&["QQ", "BA", "SP"]),
            &strings(&["Shared Pool", "sauna", "Sauna"]),
            &amenity_tables(),
        );
        assert_eq!(forward, reversed);
    }

    #[test]
    fn feature_only_vendors_skip_the_code_stage() {
        let tables = AmenityTables {
            codes: None,
            features: &FEATURES,
        };
        let resolved = resolve_amenities(&[], &strings(&["Shared Pool"]), &tables);
        assert_eq!(resolved.data.basic.len(), 1);
        assert!(resolved.errors.is_empty());
    }

    #[test]
    fn sub_category_resolves_category_from_catalog() {
        let resolved = resolve_sub_category(
            Some(CategoryFamily::Residential),
            Some("VH"),
            &["AP", "VH", "XX"],
            &sub_category_tables(),
        );
        let villa = catalog::sub_category("villa").expect("villa");
        assert!(resolved.errors.is_empty());
        assert_eq!(resolved.data.sub_category, villa.id);
        assert_eq!(resolved.data.category, villa.category.id);
    }

    #[test]
    fn sub_category_failures_fall_back_to_default_pair() {
        let fallback = catalog::default_sub_category();
        let cases = [
            (None, Some("AP")),
            (Some(CategoryFamily::Residential), None),
            (Some(CategoryFamily::Residential), Some("ZZ")),
            (Some(CategoryFamily::Commercial), Some("AP")),
            (Some(CategoryFamily::Residential), Some("XX")),
        ];

        for (family, property_type) in cases {
            let resolved = resolve_sub_category(
                family,
                property_type,
                &["AP", "VH", "XX"],
                &sub_category_tables(),
            );
            assert_eq!(resolved.data.sub_category, fallback.id);
            assert_eq!(resolved.data.category, fallback.category.id);
            assert_eq!(resolved.errors.len(), 1);
            assert!(resolved.errors[0].starts_with("subCategory: "));
        }
    }
}
