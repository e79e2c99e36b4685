use serde_json::Value;

/// One parsed feed record: the nested key/value tree produced by the
/// upstream XML parser. Read-only to the engine.
pub type RawRecord = Value;

/// Text content of an XML element that also carried attributes.
const TEXT_NODE: &str = "#text";

/// Read access to vendor keys on a raw record.
///
/// Keys may be dotted paths (`photo.url`) for nested elements. Values coming
/// out of XML are usually strings even when numeric, so numeric reads accept
/// both JSON numbers and numeric text.
pub trait FieldAccess {
    fn node(&self, key: &str) -> Option<&Value>;

    /// Trimmed, non-empty text at `key`.
    fn text(&self, key: &str) -> Option<String> {
        self.node(key).and_then(text_of)
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.text(key).as_deref().and_then(parse_number)
    }

    /// Every element at `key`, whether the parser produced one or many.
    fn nodes(&self, key: &str) -> Vec<&Value> {
        match self.node(key) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(single) => vec![single],
        }
    }

    fn has(&self, key: &str) -> bool {
        self.node(key).is_some_and(|value| !value.is_null())
    }
}

impl FieldAccess for Value {
    fn node(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(self, |current, segment| current.as_object()?.get(segment))
    }
}

pub(crate) fn text_of(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Object(map) => return map.get(TEXT_NODE).and_then(text_of),
        Value::Array(_) | Value::Null => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parses feed numbers. Commas are accepted only as thousands separators
/// (`1,250,000.50`); anything else with a comma is rejected.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let cleaned = if trimmed.contains(',') {
        let unsigned = trimmed.trim_start_matches(['-', '+']);
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if fraction.contains(',') || !has_thousands_groups(integer) {
            return None;
        }
        trimmed.replace(',', "")
    } else {
        trimmed.to_string()
    };
    cleaned.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// `\d{1,3}(,\d{3})*`
fn has_thousands_groups(integer: &str) -> bool {
    let mut groups = integer.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|group| (1..=3).contains(&group.len()) && is_digits(group));
    leading_ok && groups.all(|group| group.len() == 3 && is_digits(group))
}

fn is_digits(group: &str) -> bool {
    group.bytes().all(|byte| byte.is_ascii_digit())
}

/// Splits a comma-separated list, dropping blank entries.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_follows_dotted_paths() {
        let record = json!({ "photo": { "url": ["a.jpg", "b.jpg"] } });
        assert_eq!(record.nodes("photo.url").len(), 2);
        assert!(record.node("photo.missing").is_none());
        assert!(record.node("photo.url.deeper").is_none());
    }

    #[test]
    fn text_reads_strings_numbers_and_text_nodes() {
        let record = json!({
            "plain": "  Marina Gate  ",
            "blank": "   ",
            "count": 3,
            "element": { "#text": "https://cdn.example.com/1.jpg", "last_update": "2024-01-01" }
        });
        assert_eq!(record.text("plain").as_deref(), Some("Marina Gate"));
        assert_eq!(record.text("blank"), None);
        assert_eq!(record.text("count").as_deref(), Some("3"));
        assert_eq!(
            record.text("element").as_deref(),
            Some("https://cdn.example.com/1.jpg")
        );
    }

    #[test]
    fn number_accepts_separators_and_rejects_garbage() {
        let record = json!({ "price": "1,250,000", "size": 1200.5, "bad": "call us" });
        assert_eq!(record.number("price"), Some(1_250_000.0));
        assert_eq!(record.number("size"), Some(1200.5));
        assert_eq!(record.number("bad"), None);
    }

    #[test]
    fn number_rejects_misplaced_commas() {
        assert_eq!(parse_number("12,5"), None);
        assert_eq!(parse_number("1,25,000"), None);
        assert_eq!(parse_number(",500"), None);
        assert_eq!(parse_number("1.5,000"), None);
        assert_eq!(parse_number("9,500.75"), Some(9_500.75));
        assert_eq!(parse_number("-1,000"), Some(-1_000.0));
        assert_eq!(parse_number(" 480 "), Some(480.0));
    }

    #[test]
    fn split_list_drops_blank_entries() {
        assert_eq!(split_list("BA, SP,,  CP "), vec!["BA", "SP", "CP"]);
        assert!(split_list(" , ").is_empty());
    }
}
