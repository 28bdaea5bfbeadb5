//! Property-based tests for endpoint path resolution and embedded lists
//!
//! Uses proptest to check that path resolution is deterministic and
//! injective, and that embedded collections are unwrapped without loss.

use business_elements::api::embedded_items;
use business_elements::{Endpoint, Error};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Identifier-like path segments, never containing '/' or braces
fn arb_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,24}"
}

fn arb_item() -> impl Strategy<Value = Value> {
    (arb_id(), any::<i64>()).prop_map(|(id, n)| json!({"id": id, "n": n}))
}

proptest! {
    #[test]
    fn instance_path_is_deterministic(project in arb_id(), instance in arb_id()) {
        let first = Endpoint::Instance.path(&[&project, &instance]).unwrap();
        let second = Endpoint::Instance.path(&[&project, &instance]).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn params_are_placed_verbatim_in_order(
        project in arb_id(),
        instance in arb_id(),
        cell in arb_id(),
        resource in arb_id(),
    ) {
        let path = Endpoint::CellResource
            .path(&[&project, &instance, &cell, &resource])
            .unwrap();
        prop_assert_eq!(
            path,
            format!(
                "/projects/{}/instances/{}/cells/{}/resources/{}",
                project, instance, cell, resource
            )
        );
    }

    #[test]
    fn distinct_params_give_distinct_paths(a in arb_id(), b in arb_id()) {
        prop_assume!(a != b);
        let path_a = Endpoint::Project.path(&[&a]).unwrap();
        let path_b = Endpoint::Project.path(&[&b]).unwrap();
        prop_assert_ne!(path_a, path_b);
    }

    #[test]
    fn wrong_arity_is_configuration_error(params in prop::collection::vec(arb_id(), 0..6)) {
        prop_assume!(params.len() != 2);
        let refs: Vec<&str> = params.iter().map(String::as_str).collect();
        let result = Endpoint::Instance.path(&refs);
        prop_assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn every_endpoint_resolves_with_matching_arity(id in arb_id()) {
        for endpoint in Endpoint::ALL {
            let params = vec![id.as_str(); endpoint.arity()];
            let path = endpoint.path(&params).unwrap();
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.contains('{'), "path contains '{{': {}", path);
        }
    }

    #[test]
    fn embedded_items_keep_server_order(items in prop::collection::vec(arb_item(), 0..20)) {
        let body = json!({"_embedded": {"be:instance": items.clone()}});
        prop_assert_eq!(embedded_items(body, "be:instance"), items);
    }

    #[test]
    fn other_relations_are_ignored(items in prop::collection::vec(arb_item(), 1..10)) {
        let body = json!({"_embedded": {"be:project": items}});
        prop_assert!(embedded_items(body, "be:instance").is_empty());
    }
}

#[test]
fn unknown_endpoint_name_is_rejected() {
    let result = "noSuchEndpoint".parse::<Endpoint>();
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn endpoint_names_round_trip_through_display() {
    for endpoint in Endpoint::ALL {
        let parsed: Endpoint = endpoint.to_string().parse().unwrap();
        assert_eq!(parsed, *endpoint);
    }
}
