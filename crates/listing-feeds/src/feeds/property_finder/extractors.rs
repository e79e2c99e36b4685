use super::keys::*;
use super::mappers::MAPPERS;
use super::values::{PRICE_PERIOD_KEYS, VOCABULARY};
use crate::canonical::{
    Address, Age, Amenities, CompletionStatus, Coordinates, FurnishedStatus, Location, Media,
    MediaKind, Permit, PermitAuthority, Price, RentDuration, SaleType,
};
use crate::catalog::defaults;
use crate::feeds::extraction::{invalid, missing, CategoryAssignment, Extraction, FieldResult};
use crate::feeds::fields::{
    lookup, number_or_default, parse_timestamp, required_text, room_count_or_default,
    text_or_default, timestamp_or_default, translated_or_default, translated_with,
};
use crate::feeds::record::{parse_number, split_list, text_of, FieldAccess, RawRecord};
use crate::feeds::translate::{resolve_amenities, resolve_sub_category, OfferType};
use crate::feeds::{PropertyExtractors, Vendor};
use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;

const VENDOR: Vendor = Vendor::PropertyFinder;

pub(super) const PROPERTY_EXTRACTORS: PropertyExtractors = PropertyExtractors {
    reference_number,
    last_updated,
    sale_type,
    completion,
    sub_category,
    title,
    description,
    furnished,
    developer,
    age,
    bedroom,
    toilet,
    plot_area,
    built_in_area,
    location,
    media,
    amenities,
    permit,
    price,
};

fn offer_type(raw: &RawRecord) -> Option<OfferType> {
    lookup(raw, OFFERING_TYPE, VOCABULARY.offer_types, MAPPERS.offer_types)
}

fn reference_number(raw: &RawRecord) -> FieldResult<String> {
    required_text(raw, VENDOR, "referenceNumber", REFERENCE_NUMBER)
}

fn last_updated(raw: &RawRecord) -> FieldResult<DateTime<Utc>> {
    Ok(timestamp_or_default(
        raw,
        LAST_UPDATE,
        "lastUpdated",
        defaults::last_updated(),
    ))
}

fn sale_type(raw: &RawRecord) -> FieldResult<SaleType> {
    Ok(translated_with(
        raw,
        OFFERING_TYPE,
        "type",
        VOCABULARY.offer_types,
        MAPPERS.offer_types,
        |offer| offer.sale_type,
        defaults::SALE_TYPE,
    ))
}

/// Listings without a usable completion status are treated as ready when
/// offered for rent and off-plan when offered for sale.
fn completion(raw: &RawRecord) -> FieldResult<CompletionStatus> {
    let fallback = match offer_type(raw).map(|offer| offer.sale_type) {
        Some(SaleType::Rent) => CompletionStatus::Ready,
        Some(SaleType::Sale) | None => CompletionStatus::OffPlan,
    };
    Ok(translated_or_default(
        raw,
        COMPLETION_STATUS,
        "completion",
        VOCABULARY.completion_statuses,
        MAPPERS.completion,
        fallback,
    ))
}

fn sub_category(raw: &RawRecord) -> FieldResult<CategoryAssignment> {
    let property_type = raw.text(PROPERTY_TYPE);
    Ok(resolve_sub_category(
        offer_type(raw).map(|offer| offer.family),
        property_type.as_deref(),
        VOCABULARY.property_types,
        &MAPPERS.sub_categories,
    ))
}

fn title(raw: &RawRecord) -> FieldResult<String> {
    required_text(raw, VENDOR, "title", TITLE)
}

fn description(raw: &RawRecord) -> FieldResult<String> {
    required_text(raw, VENDOR, "description", DESCRIPTION)
}

fn furnished(raw: &RawRecord) -> FieldResult<FurnishedStatus> {
    Ok(translated_or_default(
        raw,
        FURNISHED,
        "furnished",
        VOCABULARY.furnished_statuses,
        MAPPERS.furnished,
        defaults::FURNISHED,
    ))
}

fn developer(raw: &RawRecord) -> FieldResult<String> {
    Ok(text_or_default(raw, DEVELOPER, "developer", defaults::DEVELOPER))
}

/// Age in years between `build_year` and the listing's `last_update`, or the
/// current year when the listing date is unusable (that gap is reported under
/// `lastUpdated`). Build years in the future (off-plan stock) count as new.
fn age(raw: &RawRecord) -> FieldResult<Age> {
    let fallback = defaults::AGE;
    let Some(text) = raw.text(BUILD_YEAR) else {
        return Ok(Extraction::defaulted(fallback, missing("age", fallback)));
    };
    let Some(built) = text.parse::<i32>().ok().filter(|year| *year >= 1800) else {
        return Ok(Extraction::defaulted(fallback, invalid("age", &text, fallback)));
    };
    let reference_year = raw
        .text(LAST_UPDATE)
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or_else(Utc::now)
        .year();

    let years = (reference_year - built).max(0);
    Ok(Extraction::ok(Age {
        value: years.unsigned_abs(),
        unit: fallback.unit,
    }))
}

fn bedroom(raw: &RawRecord) -> FieldResult<u32> {
    Ok(room_count_or_default(
        raw,
        BEDROOM,
        "bedroom",
        VOCABULARY.studio,
        defaults::BEDROOM,
    ))
}

fn toilet(raw: &RawRecord) -> FieldResult<u32> {
    Ok(room_count_or_default(
        raw,
        BATHROOM,
        "toilet",
        VOCABULARY.studio,
        defaults::TOILET,
    ))
}

fn plot_area(raw: &RawRecord) -> FieldResult<f64> {
    Ok(number_or_default(raw, PLOT_SIZE, "plotArea", defaults::PLOT_AREA))
}

fn built_in_area(raw: &RawRecord) -> FieldResult<f64> {
    Ok(number_or_default(raw, SIZE, "builtInArea", defaults::BUILT_IN_AREA))
}

fn location(raw: &RawRecord) -> FieldResult<Location> {
    let mut warnings = Vec::new();
    let mut part = |key: &str, field: &str| {
        text_or_default(raw, key, field, defaults::ADDRESS_PART).take(&mut warnings)
    };

    // The emirate is both city and state; it is read and reported once.
    let city = part(CITY, "location.address.city");
    let address = Address {
        country: VOCABULARY.country.to_string(),
        state: city.clone(),
        city,
        neighborhood: part(COMMUNITY, "location.address.neighborhood"),
        street: part(SUB_COMMUNITY, "location.address.street"),
        building: part(PROPERTY_NAME, "location.address.building"),
    };
    let coordinates = coordinates(raw).take(&mut warnings);

    Ok(Extraction::ok(Location {
        address,
        coordinates,
    })
    .with_warnings(warnings))
}

fn coordinates(raw: &RawRecord) -> Extraction<Coordinates> {
    let fallback = defaults::COORDINATES;
    let field = "location.coordinates";
    let Some(text) = raw.text(GEOPOINTS) else {
        return Extraction::defaulted(fallback, missing(field, fallback));
    };

    match parse_geopoints(&text) {
        Some(coordinates) => Extraction::ok(coordinates),
        None => Extraction::defaulted(fallback, invalid(field, &text, fallback)),
    }
}

/// `"lat,lng"` with both parts in range.
fn parse_geopoints(text: &str) -> Option<Coordinates> {
    let mut parts = text.split(',').map(|part| part.trim().parse::<f64>().ok());
    let (Some(Some(lat)), Some(Some(lng)), None) = (parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Some(Coordinates { lat, lng })
    } else {
        None
    }
}

fn media(raw: &RawRecord) -> FieldResult<Vec<Media>> {
    let mut items: Vec<Media> = Vec::new();
    let photos = raw.nodes(PHOTO_URL).into_iter().filter_map(text_of);
    let videos = raw.text(VIDEO_TOUR_URL);

    for (url, kind) in photos
        .map(|url| (url, MediaKind::Image))
        .chain(videos.map(|url| (url, MediaKind::Video)))
    {
        if !items.iter().any(|item| item.url == url) {
            items.push(Media { url, kind });
        }
    }

    if items.is_empty() {
        return Ok(Extraction::defaulted(
            items,
            "media: no photos or videos supplied, using default []",
        ));
    }
    Ok(Extraction::ok(items))
}

fn amenities(raw: &RawRecord) -> FieldResult<Amenities> {
    if ![PRIVATE_AMENITIES, COMMERCIAL_AMENITIES, FEATURES]
        .iter()
        .any(|key| raw.text(key).is_some())
    {
        return Ok(Extraction::defaulted(
            Amenities::default(),
            "amenities: no amenity codes or features supplied, using default empty lists",
        ));
    }

    let list = |key: &str| raw.text(key).map(|text| split_list(&text)).unwrap_or_default();
    let mut codes = list(PRIVATE_AMENITIES);
    codes.extend(list(COMMERCIAL_AMENITIES));
    let features = list(FEATURES);

    Ok(resolve_amenities(&codes, &features, &MAPPERS.amenities))
}

fn permit(raw: &RawRecord) -> FieldResult<Permit> {
    if let Some(number) = raw.text(PERMIT_NUMBER) {
        return Ok(Extraction::ok(Permit {
            number,
            authority: PermitAuthority::Rera,
        }));
    }
    if let Some(number) = raw.text(DTCM_PERMIT) {
        return Ok(Extraction::ok(Permit {
            number,
            authority: PermitAuthority::Dtcm,
        }));
    }

    let fallback = Permit {
        number: defaults::PERMIT_NUMBER.to_string(),
        authority: PermitAuthority::Unknown,
    };
    let warning = missing("permit", &fallback);
    Ok(Extraction::defaulted(fallback, warning))
}

/// Sale listings carry a single amount. Rent listings either nest the amount
/// under a period (`<price><yearly>…</yearly></price>`) or pair a flat amount
/// with `rental_period`.
fn price(raw: &RawRecord) -> FieldResult<Price> {
    let sale_type = offer_type(raw)
        .map(|offer| offer.sale_type)
        .unwrap_or(defaults::SALE_TYPE);

    let (value, duration) = match sale_type {
        SaleType::Sale => (
            number_or_default(raw, PRICE, "price", defaults::PRICE_VALUE),
            None,
        ),
        SaleType::Rent => match raw
            .node(PRICE)
            .filter(|node| text_of(node).is_none())
            .and_then(Value::as_object)
        {
            Some(block) => {
                let (value, duration) = nested_rent(block);
                (value, Some(duration))
            }
            None => {
                let value = number_or_default(raw, PRICE, "price", defaults::PRICE_VALUE);
                let duration = translated_or_default(
                    raw,
                    RENTAL_PERIOD,
                    "price.duration",
                    VOCABULARY.rental_periods,
                    MAPPERS.rental_periods,
                    RentDuration::Yearly,
                );
                (value, Some(duration))
            }
        },
    };

    let mut warnings = Vec::new();
    let value = value.take(&mut warnings);
    let duration = duration.map(|duration| duration.take(&mut warnings));

    Ok(Extraction::ok(Price {
        value,
        currency: Default::default(),
        duration,
    })
    .with_warnings(warnings))
}

fn nested_rent(
    block: &serde_json::Map<String, Value>,
) -> (Extraction<f64>, Extraction<RentDuration>) {
    for key in PRICE_PERIOD_KEYS {
        let amount = block.get(key).and_then(text_of);
        let Some(amount) = amount else { continue };
        let duration = MAPPERS.rental_periods.translate(key).unwrap_or(RentDuration::Yearly);
        let value = match parse_number(&amount) {
            Some(value) if value >= 0.0 => Extraction::ok(value),
            _ => Extraction::defaulted(
                defaults::PRICE_VALUE,
                invalid("price", &amount, defaults::PRICE_VALUE),
            ),
        };
        return (value, Extraction::ok(duration));
    }

    let periods: Vec<&str> = block.keys().map(String::as_str).collect();
    (
        Extraction::defaulted(
            defaults::PRICE_VALUE,
            missing("price", defaults::PRICE_VALUE),
        ),
        Extraction::defaulted(
            RentDuration::Yearly,
            format!(
                "price.duration: unsupported rental periods {periods:?}, using default {:?}",
                RentDuration::Yearly
            ),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn geopoints_parse_lat_lng_pairs() {
        let parsed = parse_geopoints("25.0805, 55.1403").expect("valid pair");
        assert_eq!(parsed, Coordinates { lat: 25.0805, lng: 55.1403 });
        assert!(parse_geopoints("255.1, 25.0").is_none());
        assert!(parse_geopoints("25.0").is_none());
        assert!(parse_geopoints("25.08,55.14,3").is_none());
        assert!(parse_geopoints("25.08, NaN").is_none());
    }

    #[test]
    fn nested_rent_price_prefers_yearly() {
        let record = json!({
            "offering_type": "RR",
            "price": { "monthly": "9,500", "yearly": "110000" }
        });
        let extracted = price(&record).expect("price");
        assert!(extracted.errors.is_empty());
        assert_eq!(extracted.data.value, 110_000.0);
        assert_eq!(extracted.data.duration, Some(RentDuration::Yearly));
    }

    #[test]
    fn nested_rent_price_without_known_period_defaults_to_yearly() {
        let record = json!({
            "offering_type": "RR",
            "price": { "quarterly": "30000" }
        });
        let extracted = price(&record).expect("price");
        assert_eq!(extracted.data.value, 0.0);
        assert_eq!(extracted.data.duration, Some(RentDuration::Yearly));
        assert_eq!(extracted.errors.len(), 2);
        assert!(extracted.errors[1].starts_with("price.duration: "));
    }

    #[test]
    fn flat_rent_price_uses_rental_period() {
        let record = json!({ "offering_type": "CR", "price": "85000", "rental_period": "M" });
        let extracted = price(&record).expect("price");
        assert!(extracted.errors.is_empty());
        assert_eq!(extracted.data.duration, Some(RentDuration::Monthly));

        let record = json!({ "offering_type": "RR", "price": "85000", "rental_period": "Q" });
        let extracted = price(&record).expect("price");
        assert_eq!(extracted.data.duration, Some(RentDuration::Yearly));
        assert_eq!(
            extracted.errors,
            vec!["price.duration: unsupported value 'Q', using default Yearly"]
        );
    }

    #[test]
    fn sale_price_has_no_duration() {
        let record = json!({ "offering_type": "RS", "price": "2,450,000" });
        let extracted = price(&record).expect("price");
        assert_eq!(extracted.data.value, 2_450_000.0);
        assert_eq!(extracted.data.duration, None);
    }

    #[test]
    fn age_is_derived_from_build_year_and_last_update() {
        let record = json!({ "build_year": "2015", "last_update": "2024-05-01 10:00:00" });
        assert_eq!(age(&record).expect("age").data.value, 9);

        let off_plan = json!({ "build_year": "2027", "last_update": "2024-05-01 10:00:00" });
        let extracted = age(&off_plan).expect("age");
        assert_eq!(extracted.data.value, 0);
        assert!(extracted.errors.is_empty());

        let undated = json!({ "build_year": "2015" });
        let extracted = age(&undated).expect("age");
        assert!(extracted.errors.is_empty());
        assert_eq!(
            i64::from(extracted.data.value),
            i64::from(Utc::now().year() - 2015)
        );

        let unparsable = json!({ "build_year": "2015", "last_update": "last week" });
        let extracted = age(&unparsable).expect("age");
        assert!(extracted.errors.is_empty());
        assert!(extracted.data.value >= 9);
    }

    #[test]
    fn completion_fallback_depends_on_offering_type() {
        let rent = json!({ "offering_type": "RR" });
        assert_eq!(completion(&rent).expect("completion").data, CompletionStatus::Ready);

        let sale = json!({ "offering_type": "RS", "completion_status": "someday" });
        let extracted = completion(&sale).expect("completion");
        assert_eq!(extracted.data, CompletionStatus::OffPlan);
        assert_eq!(
            extracted.errors,
            vec!["completion: unsupported value 'someday', using default OffPlan"]
        );
    }

    #[test]
    fn media_collects_photos_and_video_without_duplicates() {
        let record = json!({
            "photo": { "url": [
                { "#text": "https://cdn.example.com/1.jpg", "last_update": "2024-01-01" },
                "https://cdn.example.com/2.jpg",
                "https://cdn.example.com/1.jpg"
            ] },
            "video_tour_url": "https://video.example.com/tour"
        });
        let extracted = media(&record).expect("media");
        assert!(extracted.errors.is_empty());
        let kinds: Vec<MediaKind> = extracted.data.iter().map(|item| item.kind).collect();
        assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Image, MediaKind::Video]);
    }

    #[test]
    fn permit_prefers_rera_then_dtcm() {
        let dtcm = json!({ "dtcm_permit": "DTCM-55" });
        let extracted = permit(&dtcm).expect("permit");
        assert_eq!(extracted.data.authority, PermitAuthority::Dtcm);

        let none = json!({});
        let extracted = permit(&none).expect("permit");
        assert_eq!(extracted.data.authority, PermitAuthority::Unknown);
        assert_eq!(extracted.errors.len(), 1);
    }
}
