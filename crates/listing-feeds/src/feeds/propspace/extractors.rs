use super::keys::*;
use super::mappers::MAPPERS;
use super::values::VOCABULARY;
use crate::canonical::{
    Address, Age, AgeUnit, Amenities, CompletionStatus, Coordinates, FurnishedStatus, Location,
    Media, MediaKind, Permit, PermitAuthority, Price, RentDuration, SaleType,
};
use crate::catalog::defaults;
use crate::feeds::extraction::{invalid, missing, CategoryAssignment, Extraction, FieldResult};
use crate::feeds::fields::{
    lookup, number_or_default, required_text, room_count_or_default, text_or_default,
    timestamp_or_default, translated_or_default, translated_with,
};
use crate::feeds::record::{parse_number, split_list, text_of, FieldAccess, RawRecord};
use crate::feeds::translate::{resolve_amenities, resolve_sub_category, OfferType};
use crate::feeds::{PropertyExtractors, Vendor};
use chrono::{DateTime, Utc};

const VENDOR: Vendor = Vendor::PropSpace;

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
    lookup(raw, AD_TYPE, VOCABULARY.offer_types, MAPPERS.offer_types)
}

fn reference_number(raw: &RawRecord) -> FieldResult<String> {
    required_text(raw, VENDOR, "referenceNumber", REFERENCE_NUMBER)
}

fn last_updated(raw: &RawRecord) -> FieldResult<DateTime<Utc>> {
    Ok(timestamp_or_default(
        raw,
        LAST_UPDATED,
        "lastUpdated",
        defaults::last_updated(),
    ))
}

fn sale_type(raw: &RawRecord) -> FieldResult<SaleType> {
    Ok(translated_with(
        raw,
        AD_TYPE,
        "type",
        VOCABULARY.offer_types,
        MAPPERS.offer_types,
        |offer| offer.sale_type,
        defaults::SALE_TYPE,
    ))
}

fn completion(raw: &RawRecord) -> FieldResult<CompletionStatus> {
    Ok(translated_or_default(
        raw,
        COMPLETION_STATUS,
        "completion",
        VOCABULARY.completion_statuses,
        MAPPERS.completion,
        defaults::COMPLETION,
    ))
}

fn sub_category(raw: &RawRecord) -> FieldResult<CategoryAssignment> {
    let unit_type = raw.text(UNIT_TYPE);
    Ok(resolve_sub_category(
        offer_type(raw).map(|offer| offer.family),
        unit_type.as_deref(),
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

fn age(raw: &RawRecord) -> FieldResult<Age> {
    let fallback = defaults::AGE;
    let Some(text) = raw.text(PROPERTY_AGE) else {
        return Ok(Extraction::defaulted(fallback, missing("age", fallback)));
    };
    match parse_age(&text) {
        Some(age) => Ok(Extraction::ok(age)),
        None => Ok(Extraction::defaulted(fallback, invalid("age", &text, fallback))),
    }
}

/// `"5"`, `"5 years"` or `"8 months"`; a bare number counts years.
fn parse_age(text: &str) -> Option<Age> {
    let mut parts = text.split_whitespace();
    let value = parse_number(parts.next()?)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }

    let unit = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        None | Some("year" | "years" | "yr" | "yrs") => AgeUnit::Years,
        Some("month" | "months") => AgeUnit::Months,
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }

    Some(Age {
        value: value as u32,
        unit,
    })
}

fn bedroom(raw: &RawRecord) -> FieldResult<u32> {
    Ok(room_count_or_default(
        raw,
        BEDROOMS,
        "bedroom",
        VOCABULARY.studio,
        defaults::BEDROOM,
    ))
}

fn toilet(raw: &RawRecord) -> FieldResult<u32> {
    Ok(room_count_or_default(
        raw,
        BATHROOMS,
        "toilet",
        VOCABULARY.studio,
        defaults::TOILET,
    ))
}

fn plot_area(raw: &RawRecord) -> FieldResult<f64> {
    Ok(number_or_default(raw, PLOT_AREA, "plotArea", defaults::PLOT_AREA))
}

fn built_in_area(raw: &RawRecord) -> FieldResult<f64> {
    Ok(number_or_default(
        raw,
        BUILTUP_AREA,
        "builtInArea",
        defaults::BUILT_IN_AREA,
    ))
}

fn location(raw: &RawRecord) -> FieldResult<Location> {
    let mut warnings = Vec::new();
    let mut part = |key: &str, field: &str| {
        text_or_default(raw, key, field, defaults::ADDRESS_PART).take(&mut warnings)
    };

    // The emirate is both city and state; it is read and reported once.
    let city = part(EMIRATE, "location.address.city");
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

/// Latitude and longitude arrive as separate keys; both must be present and
/// in range, otherwise the pair falls back together.
fn coordinates(raw: &RawRecord) -> Extraction<Coordinates> {
    let fallback = defaults::COORDINATES;
    let field = "location.coordinates";
    let (lat_text, lng_text) = match (raw.text(LATITUDE), raw.text(LONGITUDE)) {
        (Some(lat), Some(lng)) => (lat, lng),
        (None, None) => return Extraction::defaulted(fallback, missing(field, fallback)),
        (lat, lng) => {
            let supplied = lat.or(lng).unwrap_or_default();
            return Extraction::defaulted(
                fallback,
                format!("{field}: incomplete pair '{supplied}', using default {fallback:?}"),
            );
        }
    };

    let lat = parse_number(&lat_text).filter(|lat| (-90.0..=90.0).contains(lat));
    let lng = parse_number(&lng_text).filter(|lng| (-180.0..=180.0).contains(lng));
    match (lat, lng) {
        (Some(lat), Some(lng)) => Extraction::ok(Coordinates { lat, lng }),
        _ => Extraction::defaulted(
            fallback,
            invalid(field, &format!("{lat_text},{lng_text}"), fallback),
        ),
    }
}

fn media(raw: &RawRecord) -> FieldResult<Vec<Media>> {
    let mut items: Vec<Media> = Vec::new();
    let images = raw.nodes(IMAGES).into_iter().filter_map(text_of);
    let videos = raw.nodes(VIDEOS).into_iter().filter_map(text_of);

    for (url, kind) in images
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
            "media: no images or videos supplied, using default []",
        ));
    }
    Ok(Extraction::ok(items))
}

/// Facilities are either repeated `<facility>` elements or one
/// comma-separated text.
fn amenities(raw: &RawRecord) -> FieldResult<Amenities> {
    let mut features: Vec<String> = raw
        .nodes(FACILITY_ITEMS)
        .into_iter()
        .filter_map(text_of)
        .collect();
    if features.is_empty() {
        if let Some(text) = raw.text(FACILITIES) {
            features = split_list(&text);
        }
    }

    if features.is_empty() {
        return Ok(Extraction::defaulted(
            Amenities::default(),
            "amenities: no facilities supplied, using default empty lists",
        ));
    }
    Ok(resolve_amenities(&[], &features, &MAPPERS.amenities))
}

fn permit(raw: &RawRecord) -> FieldResult<Permit> {
    if let Some(number) = raw.text(PERMIT_NUMBER) {
        return Ok(Extraction::ok(Permit {
            number,
            authority: PermitAuthority::Rera,
        }));
    }

    let fallback = Permit {
        number: defaults::PERMIT_NUMBER.to_string(),
        authority: PermitAuthority::Unknown,
    };
    let warning = missing("permit", &fallback);
    Ok(Extraction::defaulted(fallback, warning))
}

/// Amount in `Price`; rent listings qualify it with `Frequency`.
fn price(raw: &RawRecord) -> FieldResult<Price> {
    let sale_type = offer_type(raw)
        .map(|offer| offer.sale_type)
        .unwrap_or(defaults::SALE_TYPE);

    let mut warnings = Vec::new();
    let value =
        number_or_default(raw, PRICE, "price", defaults::PRICE_VALUE).take(&mut warnings);
    let duration = match sale_type {
        SaleType::Sale => None,
        SaleType::Rent => Some(
            translated_or_default(
                raw,
                FREQUENCY,
                "price.duration",
                VOCABULARY.rental_periods,
                MAPPERS.rental_periods,
                RentDuration::Yearly,
            )
            .take(&mut warnings),
        ),
    };

    Ok(Extraction::ok(Price {
        value,
        currency: Default::default(),
        duration,
    })
    .with_warnings(warnings))
}
