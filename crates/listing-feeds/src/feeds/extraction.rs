use super::record::RawRecord;
use super::vendor::Vendor;
use crate::canonical::{
    Age, Amenities, CompletionStatus, FurnishedStatus, Location, Media, Permit, Price, SaleType,
};
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// A recovered field value plus the warnings explaining how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub data: T,
    pub errors: Vec<String>,
}

impl<T> Extraction<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn defaulted(data: T, warning: impl Into<String>) -> Self {
        Self {
            data,
            errors: vec![warning.into()],
        }
    }

    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = String>) -> Self {
        self.errors.extend(warnings);
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        Extraction {
            data: f(self.data),
            errors: self.errors,
        }
    }

    /// Moves the warnings into `warnings` and hands back the value.
    pub fn take(self, warnings: &mut Vec<String>) -> T {
        warnings.extend(self.errors);
        self.data
    }
}

/// Fatal defects: the record cannot be published and must be skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("{vendor} record is missing mandatory field {field} (feed key `{key}`)")]
    MissingField {
        vendor: Vendor,
        field: &'static str,
        key: &'static str,
    },
    #[error("{vendor} record has no agent information")]
    MissingAgent { vendor: Vendor },
}

pub type FieldResult<T> = Result<Extraction<T>, ExtractionError>;

pub type Extractor<T> = fn(&RawRecord) -> FieldResult<T>;

/// Category and sub-category ids resolved together from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAssignment {
    pub category: String,
    pub sub_category: String,
}

/// One extractor per canonical property field.
#[derive(Clone, Copy)]
pub struct PropertyExtractors {
    pub reference_number: Extractor<String>,
    pub last_updated: Extractor<DateTime<Utc>>,
    pub sale_type: Extractor<SaleType>,
    pub completion: Extractor<CompletionStatus>,
    pub sub_category: Extractor<CategoryAssignment>,
    pub title: Extractor<String>,
    pub description: Extractor<String>,
    pub furnished: Extractor<FurnishedStatus>,
    pub developer: Extractor<String>,
    pub age: Extractor<Age>,
    pub bedroom: Extractor<u32>,
    pub toilet: Extractor<u32>,
    pub plot_area: Extractor<f64>,
    pub built_in_area: Extractor<f64>,
    pub location: Extractor<Location>,
    pub media: Extractor<Vec<Media>>,
    pub amenities: Extractor<Amenities>,
    pub permit: Extractor<Permit>,
    pub price: Extractor<Price>,
}

/// One extractor per canonical agent field, applied to the agent node.
#[derive(Clone, Copy)]
pub struct AgentExtractors {
    pub name: Extractor<String>,
    pub email: Extractor<String>,
    pub phone: Extractor<String>,
    pub photo: Extractor<String>,
}

pub(crate) fn missing(field: &str, default: impl fmt::Debug) -> String {
    format!("{field}: missing value, using default {default:?}")
}

pub(crate) fn invalid(field: &str, raw: &str, default: impl fmt::Debug) -> String {
    format!("{field}: invalid value '{raw}', using default {default:?}")
}

pub(crate) fn unsupported(field: &str, raw: &str, default: impl fmt::Debug) -> String {
    format!("{field}: unsupported value '{raw}', using default {default:?}")
}

pub(crate) fn unmapped(field: &str, raw: &str, default: impl fmt::Debug) -> String {
    format!("{field}: no canonical mapping for '{raw}', using default {default:?}")
}
