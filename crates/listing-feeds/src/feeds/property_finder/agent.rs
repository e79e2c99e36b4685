use super::keys::{AGENT, AGENT_EMAIL, AGENT_NAME, AGENT_PHONE, AGENT_PHOTO};
use crate::catalog::defaults;
use crate::feeds::fields::{phone_or_default, required_text, text_or_default};
use crate::feeds::record::{FieldAccess, RawRecord};
use crate::feeds::{AgentExtractors, FieldResult, Vendor};

pub(super) const AGENT_EXTRACTORS: AgentExtractors = AgentExtractors {
    name,
    email,
    phone,
    photo,
};

/// The nested `<agent>` element.
pub(super) fn agent_node(raw: &RawRecord) -> Option<&RawRecord> {
    raw.node(AGENT).filter(|node| node.is_object())
}

fn name(agent: &RawRecord) -> FieldResult<String> {
    Ok(text_or_default(agent, AGENT_NAME, "agent.name", defaults::AGENT_NAME))
}

fn email(agent: &RawRecord) -> FieldResult<String> {
    required_text(agent, Vendor::PropertyFinder, "agent.email", AGENT_EMAIL)
}

fn phone(agent: &RawRecord) -> FieldResult<String> {
    Ok(phone_or_default(agent, AGENT_PHONE, "agent.phone", defaults::AGENT_PHONE))
}

fn photo(agent: &RawRecord) -> FieldResult<String> {
    Ok(text_or_default(agent, AGENT_PHOTO, "agent.photo", defaults::AGENT_PHOTO))
}
