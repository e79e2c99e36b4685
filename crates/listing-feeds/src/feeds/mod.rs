//! Feed-normalization engine: vendor adapters and the extraction
//! orchestrator that turns one raw feed record into canonical data.

mod extraction;
mod fields;
mod orchestrator;
pub mod property_finder;
pub mod propspace;
mod record;
mod translate;
mod vendor;

pub use extraction::{
    AgentExtractors, CategoryAssignment, Extraction, ExtractionError, Extractor, FieldResult,
    PropertyExtractors,
};
pub use fields::{parse_room_count, parse_timestamp};
pub use orchestrator::extract;
pub use record::{FieldAccess, RawRecord};
pub use translate::{
    normalize_token, AmenityTables, CategoryFamily, CodeTable, Mappers, OfferType,
    SubCategoryTables, Vocabulary,
};
pub use vendor::{AdapterError, Vendor};

use crate::canonical::ExtractedData;

/// Canonical field name bound to the vendor's raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub field: &'static str,
    pub raw: &'static str,
}

pub struct Extractors {
    pub property: PropertyExtractors,
    pub agent: AgentExtractors,
    /// Locates the agent sub-structure inside a record.
    pub agent_node: fn(&RawRecord) -> Option<&RawRecord>,
}

/// Everything needed to normalize one vendor's feed.
pub struct Adapter {
    pub vendor: Vendor,
    pub keys: &'static [KeyBinding],
    pub values: &'static Vocabulary,
    pub mappers: &'static Mappers,
    pub extractors: Extractors,
}

impl Adapter {
    pub fn extract(&self, raw: &RawRecord) -> Result<ExtractedData, ExtractionError> {
        orchestrator::extract(self, raw)
    }

    pub fn raw_key(&self, field: &str) -> Option<&'static str> {
        self.keys
            .iter()
            .find(|binding| binding.field == field)
            .map(|binding| binding.raw)
    }
}

pub fn adapter_for(vendor: Vendor) -> &'static Adapter {
    match vendor {
        Vendor::PropertyFinder => &property_finder::ADAPTER,
        Vendor::PropSpace => &propspace::ADAPTER,
    }
}

pub fn select_adapter(vendor_id: &str) -> Result<&'static Adapter, AdapterError> {
    vendor_id.parse::<Vendor>().map(adapter_for)
}
