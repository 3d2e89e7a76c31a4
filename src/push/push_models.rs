use serde_json::Value;

/// Reply from the provider's create-notification endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProviderResponse {
    pub id: Option<String>,
    pub recipients: Option<u64>,
    pub errors: Option<Value>,
    pub raw: Value,
}

impl ProviderResponse {
    /// Reads each field on its own so a mistyped `id` or `recipients` never hides `errors`.
    pub fn from_value(raw: Value) -> Self {
        let id = match raw.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };

        let recipients = match raw.get("recipients") {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(n)) => n.trim().parse().ok(),
            _ => None,
        };

        Self {
            id,
            recipients,
            errors: raw.get("errors").cloned(),
            raw,
        }
    }

    /// The `errors` field when it reports anything: null, `[]` and `{}` do not count.
    pub fn reported_errors(&self) -> Option<&Value> {
        match &self.errors {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) if items.is_empty() => None,
            Some(Value::Object(map)) if map.is_empty() => None,
            Some(errors) => Some(errors),
        }
    }
}
