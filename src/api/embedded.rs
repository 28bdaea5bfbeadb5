//! Embedded collection normalisation
//!
//! List endpoints wrap their items as `{"_embedded": {"<relation>": [...]}}`.
//! Every collection read goes through [`embedded_items`] so an absent
//! envelope always means "no items".

use serde_json::Value;

/// Sentinel field holding embedded collections.
pub const EMBEDDED_KEY: &str = "_embedded";

/// Relation keys used inside the embedded envelope.
pub mod relation {
    pub const APPLICATION: &str = "be:application";
    pub const APPLICATION_FORM: &str = "be:application_form";
    pub const ATTRIBUTE: &str = "be:attribute";
    pub const AUTHENTICATION: &str = "be:authentication";
    pub const CAPTURE: &str = "be:capture";
    pub const CELL: &str = "be:cell";
    pub const CONCEPT: &str = "be:concept";
    pub const CONTEXT: &str = "be:context";
    pub const EVENT: &str = "be:event";
    pub const EXHIBITION: &str = "be:exhibition";
    pub const INSTANCE: &str = "be:instance";
    pub const MEMBER: &str = "be:member";
    pub const ORGANIZATION: &str = "be:organization";
    pub const PROJECT: &str = "be:project";
    pub const RESOURCE: &str = "be:resource";
    pub const ROLE: &str = "be:role";
    pub const SPECIFICATION: &str = "be:specification";
    pub const TEAM: &str = "be:team";
}

/// Extract the items embedded under `relation`, in server order.
///
/// Returns an empty vector when the envelope or the relation is missing,
/// or when the relation does not hold an array.
pub fn embedded_items(body: Value, relation: &str) -> Vec<Value> {
    let Value::Object(mut body) = body else {
        return Vec::new();
    };

    let Some(Value::Object(mut embedded)) = body.remove(EMBEDDED_KEY) else {
        return Vec::new();
    };

    match embedded.remove(relation) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::warn!(
                "Embedded relation {} is not a list ({}), treating as empty",
                relation,
                kind_of(&other)
            );
            Vec::new()
        },
        None => Vec::new(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwraps_relation_in_order() {
        let body = json!({"_embedded": {"be:project": [{"id": "a"}, {"id": "b"}]}});
        let items = embedded_items(body, relation::PROJECT);
        assert_eq!(items, vec![json!({"id": "a"}), json!({"id": "b"})]);
    }

    #[test]
    fn test_missing_envelope_is_empty() {
        assert!(embedded_items(json!({}), relation::PROJECT).is_empty());
        assert!(embedded_items(Value::Null, relation::PROJECT).is_empty());
    }

    #[test]
    fn test_missing_relation_is_empty() {
        let body = json!({"_embedded": {"be:team": [{"id": "t"}]}});
        assert!(embedded_items(body, relation::PROJECT).is_empty());
    }

    #[test]
    fn test_non_array_relation_is_empty() {
        let body = json!({"_embedded": {"be:project": {"id": "a"}}});
        assert!(embedded_items(body, relation::PROJECT).is_empty());
    }

    #[test]
    fn test_other_fields_ignored() {
        let body = json!({
            "_links": {"self": {"href": "/projects"}},
            "_embedded": {"be:project": [{"id": "p1"}]},
            "total": 1
        });
        assert_eq!(embedded_items(body, relation::PROJECT), vec![json!({"id": "p1"})]);
    }
}
