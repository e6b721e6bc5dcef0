use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The formatter's internal state snapshot at some point of the search.
///
/// Deliberately opaque: the inspector displays keys and values verbatim and
/// never interprets the contents, so formatter-side changes to the state
/// shape need no change here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatterState(pub serde_json::Map<String, Value>);

impl FormatterState {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key/value pairs in the producer's order, values rendered as compact
    /// JSON for display.
    pub fn entries(&self) -> impl Iterator<Item = (&str, String)> {
        self.0.iter().map(|(k, v)| {
            let rendered = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.as_str(), rendered)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_producer_order_and_render_values() {
        let state: FormatterState = serde_json::from_value(serde_json::json!({
            "lastIndent": 4,
            "column": 17,
            "mustBreak": false,
            "note": "text"
        }))
        .unwrap();

        let entries: Vec<(String, String)> = state
            .entries()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("lastIndent".to_string(), "4".to_string()),
                ("column".to_string(), "17".to_string()),
                ("mustBreak".to_string(), "false".to_string()),
                ("note".to_string(), "text".to_string()),
            ]
        );
    }
}
