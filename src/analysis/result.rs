use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Structured output of one analysis, opaque to the playback core.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    fields: Map<String, Value>,
}

impl AnalysisResult {
    /// Accepts provider output only when it is a JSON object without an
    /// `error` member. Everything else means "analysis unavailable".
    pub fn from_value(key: &str, value: Value) -> AppResult<Self> {
        let Value::Object(fields) = value else {
            return Err(AppError::analysis(key, "result is not an object"));
        };
        if let Some(error) = fields.get("error")
            && !error.is_null()
        {
            let message = match error {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            };
            return Err(AppError::analysis(key, message));
        }
        if fields.is_empty() {
            return Err(AppError::analysis(key, "result is empty"));
        }
        Ok(Self { fields })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn summary_lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(name, value)| match value {
                Value::String(text) => format!("{name}: {text}"),
                other => format!("{name}: {other}"),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::AnalysisResult;

    #[test]
    fn accepts_plain_objects() {
        let result = AnalysisResult::from_value("topBrands", json!({"brands": ["a", "b"]}))
            .expect("object should be accepted");
        assert_eq!(result.get("brands"), Some(&json!(["a", "b"])));
        assert_eq!(result.summary_lines(), vec![r#"brands: ["a","b"]"#.to_string()]);
    }

    #[test]
    fn error_members_and_non_objects_are_unavailable() {
        assert!(AnalysisResult::from_value("k", json!({"error": "quota"})).is_err());
        assert!(AnalysisResult::from_value("k", json!("just text")).is_err());
        assert!(AnalysisResult::from_value("k", json!([1, 2])).is_err());
        assert!(AnalysisResult::from_value("k", json!({})).is_err());
    }

    #[test]
    fn null_error_member_is_ignored() {
        let result = AnalysisResult::from_value("k", json!({"error": null, "score": 3}))
            .expect("null error is not a failure");
        assert_eq!(result.get("score"), Some(&json!(3)));
    }
}
