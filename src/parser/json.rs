use serde_json::{Map, Value};

/// Outcome of looking for a JSON object in model text
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Found(Map<String, Value>),
    NotFound,
}

#[cfg(test)]
impl Extracted {
    pub fn into_object(self) -> Option<Map<String, Value>> {
        match self {
            Extracted::Found(object) => Some(object),
            Extracted::NotFound => None,
        }
    }
}

/// Extract a single JSON object from text that may carry prose around it.
///
/// Takes everything from the first `{` to the last `}` and parses it. Several
/// top-level objects in one response therefore merge into one invalid slice and
/// yield `NotFound`; nested objects are fine. Arrays and scalars are rejected.
pub fn extract_object(raw: &str) -> Extracted {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return Extracted::NotFound;
    };
    if end <= start {
        return Extracted::NotFound;
    }

    // Both indices sit on single-byte ASCII braces, so the slice is on char boundaries
    let candidate = &raw[start..=end];
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Extracted::Found(object),
        Ok(_) => Extracted::NotFound,
        Err(e) => {
            tracing::debug!(
                "Failed to parse JSON candidate: {} ({}...)",
                e,
                candidate.chars().take(200).collect::<String>()
            );
            Extracted::NotFound
        }
    }
}
