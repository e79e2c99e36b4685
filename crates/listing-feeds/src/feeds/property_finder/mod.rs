//! Property Finder XML feed (`<list><property>…</property></list>`).

mod agent;
mod extractors;
pub mod keys;
pub mod mappers;
pub mod values;

use super::{Adapter, Extractors, Vendor};

pub static ADAPTER: Adapter = Adapter {
    vendor: Vendor::PropertyFinder,
    keys: keys::KEYS,
    values: &values::VOCABULARY,
    mappers: &mappers::MAPPERS,
    extractors: Extractors {
        property: extractors::PROPERTY_EXTRACTORS,
        agent: agent::AGENT_EXTRACTORS,
        agent_node: agent::agent_node,
    },
};
