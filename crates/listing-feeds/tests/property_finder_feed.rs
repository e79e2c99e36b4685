use chrono::{TimeZone, Utc};
use listing_feeds::batch::parse_records;
use listing_feeds::canonical::{
    AgeUnit, CompletionStatus, ExtractedData, FurnishedStatus, MediaKind, PermitAuthority,
    RentDuration, SaleType,
};
use listing_feeds::catalog;
use listing_feeds::feeds::{adapter_for, ExtractionError, RawRecord, Vendor};
use serde_json::json;

fn fixture() -> Vec<RawRecord> {
    parse_records(include_str!("fixtures/property_finder.json")).expect("fixture parses")
}

fn record(reference: &str) -> RawRecord {
    fixture()
        .into_iter()
        .find(|raw| raw["reference_number"] == reference)
        .unwrap_or_else(|| panic!("fixture record {reference} present"))
}

fn extract(raw: &RawRecord) -> Result<ExtractedData, ExtractionError> {
    adapter_for(Vendor::PropertyFinder).extract(raw)
}

#[test]
fn complete_sale_listing_extracts_without_warnings() {
    let extracted = extract(&record("PF-1001")).expect("record extracts");
    assert!(extracted.warnings.is_empty(), "{:?}", extracted.warnings);

    let property = &extracted.property;
    assert_eq!(property.reference_number, "PF-1001");
    assert_eq!(
        property.last_updated,
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    );
    assert_eq!(property.sale_type, SaleType::Sale);
    assert_eq!(property.completion, CompletionStatus::Ready);
    assert_eq!(property.furnished, FurnishedStatus::Furnished);
    assert_eq!(property.age.value, 9);
    assert_eq!(property.age.unit, AgeUnit::Years);
    assert_eq!(property.bedroom, 2);
    assert_eq!(property.toilet, 3);
    assert_eq!(property.built_in_area, 1450.5);

    let apartment = catalog::sub_category("apartment").expect("apartment");
    assert_eq!(property.sub_category, apartment.id);
    assert_eq!(property.category, catalog::RESIDENTIAL.id);

    let address = &property.location.address;
    assert_eq!(address.country, "United Arab Emirates");
    assert_eq!(address.state, "Dubai");
    assert_eq!(address.city, "Dubai");
    assert_eq!(address.neighborhood, "Dubai Marina");
    assert_eq!(address.street, "Marina Gate");
    assert_eq!(address.building, "Marina Gate 1");
    assert_eq!(property.location.coordinates.lat, 25.0805);

    assert_eq!(property.media.len(), 3);
    assert_eq!(property.media[2].kind, MediaKind::Video);

    assert_eq!(property.amenities.basic.len(), 3);
    assert_eq!(property.amenities.other, vec!["Sauna"]);

    assert_eq!(property.permit.authority, PermitAuthority::Rera);
    assert_eq!(property.price.value, 2_450_000.0);
    assert_eq!(property.price.duration, None);

    assert_eq!(extracted.agent.name, "Aisha Rahman");
    assert_eq!(extracted.agent.email, "aisha.rahman@example.com");
    assert_eq!(extracted.agent.phone, "+971501234567");
}

#[test]
fn missing_completion_and_bedroom_fall_back_with_warnings() {
    let extracted = extract(&record("PF-1002")).expect("record extracts");

    assert_eq!(extracted.property.completion, CompletionStatus::OffPlan);
    assert_eq!(extracted.property.bedroom, 0);
    assert_eq!(extracted.property.age.value, 0);
    assert_eq!(
        extracted.warnings,
        vec![
            "completion: missing value, using default OffPlan",
            "bedroom: missing value, using default 0",
        ]
    );
}

#[test]
fn record_without_reference_number_is_rejected() {
    let raw = fixture()
        .into_iter()
        .find(|raw| raw.get("reference_number").is_none())
        .expect("fixture has an unreferenced record");

    let err = extract(&raw).expect_err("reference number is mandatory");
    assert_eq!(
        err,
        ExtractionError::MissingField {
            vendor: Vendor::PropertyFinder,
            field: "referenceNumber",
            key: "reference_number",
        }
    );
}

#[test]
fn nested_monthly_rent_and_plus_bedrooms() {
    let extracted = extract(&record("PF-1004")).expect("record extracts");
    let property = &extracted.property;

    assert!(extracted.warnings.is_empty(), "{:?}", extracted.warnings);
    assert_eq!(property.sale_type, SaleType::Rent);
    assert_eq!(property.bedroom, 8);
    assert_eq!(property.furnished, FurnishedStatus::PartlyFurnished);
    assert_eq!(property.price.value, 95_000.0);
    assert_eq!(property.price.duration, Some(RentDuration::Monthly));
    assert_eq!(property.permit.authority, PermitAuthority::Dtcm);
    assert_eq!(property.permit.number, "DTCM-99812");

    let villa = catalog::sub_category("villa").expect("villa");
    assert_eq!(property.sub_category, villa.id);
}

#[test]
fn commercial_rent_resolves_commercial_catalog_entry() {
    let extracted = extract(&record("PF-1005")).expect("record extracts");
    let property = &extracted.property;

    let office = catalog::sub_category("office").expect("office");
    assert_eq!(property.category, catalog::COMMERCIAL.id);
    assert_eq!(property.sub_category, office.id);
    assert_eq!(property.bedroom, 0);
    assert_eq!(property.price.duration, Some(RentDuration::Yearly));
}

#[test]
fn amenity_order_does_not_change_output() {
    let mut forward = record("PF-1001");
    forward["private_amenities"] = json!("BA,SP,CP");
    forward["features"] = json!("Sauna, Rooftop Cinema");
    let mut reordered = forward.clone();
    reordered["private_amenities"] = json!("CP, SP,BA,SP");
    reordered["features"] = json!("Rooftop Cinema,Sauna");

    let forward = extract(&forward).expect("extracts");
    let reordered = extract(&reordered).expect("extracts");
    assert_eq!(forward.property.amenities, reordered.property.amenities);
}

fn without(raw: &RawRecord, path: &str) -> RawRecord {
    let mut raw = raw.clone();
    let (parent, key) = match path.rsplit_once('.') {
        Some((parent, key)) => (&mut raw[parent], key),
        None => (&mut raw, path),
    };
    parent.as_object_mut().expect("object").remove(key);
    raw
}

#[test]
fn each_missing_optional_field_adds_exactly_one_warning() {
    let complete = record("PF-1001");
    let optional: &[(&[&str], &str)] = &[
        (&["last_update"], "lastUpdated"),
        (&["completion_status"], "completion"),
        (&["property_type"], "subCategory"),
        (&["furnished"], "furnished"),
        (&["developer"], "developer"),
        (&["build_year"], "age"),
        (&["bedroom"], "bedroom"),
        (&["bathroom"], "toilet"),
        (&["plot_size"], "plotArea"),
        (&["size"], "builtInArea"),
        (&["city"], "location.address.city"),
        (&["community"], "location.address.neighborhood"),
        (&["sub_community"], "location.address.street"),
        (&["property_name"], "location.address.building"),
        (&["geopoints"], "location.coordinates"),
        (&["photo", "video_tour_url"], "media"),
        (&["private_amenities", "features"], "amenities"),
        (&["permit_number"], "permit"),
        (&["price"], "price"),
        (&["agent.name"], "agent.name"),
        (&["agent.phone"], "agent.phone"),
        (&["agent.photo"], "agent.photo"),
    ];

    for (paths, field) in optional {
        let raw = paths
            .iter()
            .fold(complete.clone(), |raw, path| without(&raw, path));
        let extracted = extract(&raw).expect("still extracts");
        assert_eq!(extracted.warnings.len(), 1, "{paths:?}: {:?}", extracted.warnings);
        assert!(
            extracted.warnings[0].starts_with(&format!("{field}: ")),
            "{paths:?}: {:?}",
            extracted.warnings
        );
    }
}

#[test]
fn missing_last_update_keeps_age_from_build_year() {
    let raw = without(&record("PF-1001"), "last_update");
    let extracted = extract(&raw).expect("still extracts");

    assert_eq!(extracted.warnings.len(), 1);
    assert!(extracted.warnings[0].starts_with("lastUpdated: "));
    // build_year 2015 is kept; age is measured against the current year.
    assert!(extracted.property.age.value >= 9);
}

#[test]
fn malformed_numbers_fall_back_with_a_warning() {
    let mut raw = record("PF-1001");
    raw["geopoints"] = json!("25.08,55.14,3");
    raw["size"] = json!("12,5");

    let extracted = extract(&raw).expect("still extracts");
    assert_eq!(extracted.property.built_in_area, 0.0);
    assert_eq!(extracted.property.location.coordinates.lat, 0.0);
    assert_eq!(
        extracted.warnings,
        vec![
            "builtInArea: invalid value '12,5', using default 0.0",
            "location.coordinates: invalid value '25.08,55.14,3', using default Coordinates { lat: 0.0, lng: 0.0 }",
        ]
    );
}

#[test]
fn unsupported_enum_values_use_defaults() {
    let mut raw = record("PF-1001");
    raw["furnished"] = json!("Maybe");
    raw["property_type"] = json!("ZZ");

    let extracted = extract(&raw).expect("extracts");
    let fallback = catalog::default_sub_category();
    assert_eq!(extracted.property.furnished, FurnishedStatus::Unfurnished);
    assert_eq!(extracted.property.sub_category, fallback.id);
    assert_eq!(extracted.warnings.len(), 2);
    assert!(extracted.warnings[0].starts_with("subCategory: "));
    assert_eq!(
        extracted.warnings[1],
        "furnished: unsupported value 'Maybe', using default Unfurnished"
    );
}

#[test]
fn missing_agent_email_is_fatal() {
    let mut raw = record("PF-1001");
    raw["agent"]
        .as_object_mut()
        .expect("agent object")
        .remove("email");

    let err = extract(&raw).expect_err("agent email is mandatory");
    assert!(matches!(
        err,
        ExtractionError::MissingField {
            field: "agent.email",
            ..
        }
    ));
}

#[test]
fn extraction_does_not_share_defaults_between_records() {
    let first = extract(&record("PF-1002")).expect("extracts");
    let second = extract(&record("PF-1002")).expect("extracts");
    assert_eq!(first, second);
}
