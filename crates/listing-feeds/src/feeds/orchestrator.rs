use super::extraction::ExtractionError;
use super::record::RawRecord;
use super::Adapter;
use crate::canonical::{AgentField, ExtractedData, PropertyField};
use crate::catalog::defaults;
use tracing::{debug, trace};

/// Runs every property extractor, then every agent extractor, over one raw
/// record. Fields are visited in canonical order; the first fatal error
/// aborts the record and nothing partial is returned.
pub fn extract(adapter: &Adapter, raw: &RawRecord) -> Result<ExtractedData, ExtractionError> {
    let mut property = defaults::default_property();
    let mut agent = defaults::default_agent();
    let mut warnings = Vec::new();
    let set = &adapter.extractors.property;

    for field in PropertyField::ordered() {
        let before = warnings.len();
        match field {
            PropertyField::ReferenceNumber => {
                property.reference_number = (set.reference_number)(raw)?.take(&mut warnings)
            }
            PropertyField::LastUpdated => {
                property.last_updated = (set.last_updated)(raw)?.take(&mut warnings)
            }
            PropertyField::Type => property.sale_type = (set.sale_type)(raw)?.take(&mut warnings),
            PropertyField::Completion => {
                property.completion = (set.completion)(raw)?.take(&mut warnings)
            }
            PropertyField::SubCategory => {
                let assignment = (set.sub_category)(raw)?.take(&mut warnings);
                property.category = assignment.category;
                property.sub_category = assignment.sub_category;
            }
            PropertyField::Title => property.title = (set.title)(raw)?.take(&mut warnings),
            PropertyField::Description => {
                property.description = (set.description)(raw)?.take(&mut warnings)
            }
            PropertyField::Furnished => {
                property.furnished = (set.furnished)(raw)?.take(&mut warnings)
            }
            PropertyField::Developer => {
                property.developer = (set.developer)(raw)?.take(&mut warnings)
            }
            PropertyField::Age => property.age = (set.age)(raw)?.take(&mut warnings),
            PropertyField::Bedroom => property.bedroom = (set.bedroom)(raw)?.take(&mut warnings),
            PropertyField::Toilet => property.toilet = (set.toilet)(raw)?.take(&mut warnings),
            PropertyField::PlotArea => {
                property.plot_area = (set.plot_area)(raw)?.take(&mut warnings)
            }
            PropertyField::BuiltInArea => {
                property.built_in_area = (set.built_in_area)(raw)?.take(&mut warnings)
            }
            PropertyField::Location => {
                property.location = (set.location)(raw)?.take(&mut warnings)
            }
            PropertyField::Media => property.media = (set.media)(raw)?.take(&mut warnings),
            PropertyField::Amenities => {
                property.amenities = (set.amenities)(raw)?.take(&mut warnings)
            }
            PropertyField::Permit => property.permit = (set.permit)(raw)?.take(&mut warnings),
            PropertyField::Price => property.price = (set.price)(raw)?.take(&mut warnings),
        }
        if warnings.len() > before {
            trace!(field = field.key(), added = warnings.len() - before, "defaults applied");
        }
    }

    let agent_raw =
        (adapter.extractors.agent_node)(raw).ok_or(ExtractionError::MissingAgent {
            vendor: adapter.vendor,
        })?;
    let set = &adapter.extractors.agent;

    for field in AgentField::ordered() {
        match field {
            AgentField::Name => agent.name = (set.name)(agent_raw)?.take(&mut warnings),
            AgentField::Email => agent.email = (set.email)(agent_raw)?.take(&mut warnings),
            AgentField::Phone => agent.phone = (set.phone)(agent_raw)?.take(&mut warnings),
            AgentField::Photo => agent.photo = (set.photo)(agent_raw)?.take(&mut warnings),
        }
    }

    debug!(
        vendor = %adapter.vendor,
        reference = %property.reference_number,
        warnings = warnings.len(),
        "feed record extracted"
    );

    Ok(ExtractedData {
        property,
        agent,
        warnings,
    })
}
