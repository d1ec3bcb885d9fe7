//! Property tests for host discovery in Terraform outputs.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use terramena::domain::entities::{HostRecord, HOST_TYPE_KEY, HOST_TYPE_VALUE};
use terramena::{StateExtractor, TagFilter};

const TAG_POOL: &[&str] = &["dns", "web", "edge", "db", "mail"];

#[derive(Debug, Clone)]
struct PlantedHost {
    hostname: String,
    tags: Vec<String>,
    /// Wrapping layers: `true` nests in an object, `false` in a list
    wrapping: Vec<bool>,
}

fn tag() -> impl Strategy<Value = String> {
    proptest::sample::select(TAG_POOL).prop_map(str::to_string)
}

fn planted_host() -> impl Strategy<Value = PlantedHost> {
    (
        "[a-z][a-z0-9-]{0,11}",
        proptest::collection::vec(tag(), 0..3),
        proptest::collection::vec(any::<bool>(), 0..4),
    )
        .prop_map(|(hostname, tags, wrapping)| PlantedHost {
            hostname,
            tags,
            wrapping,
        })
}

fn host_node(host: &PlantedHost) -> Value {
    let mut node = json!({
        "_type": "nixos_host",
        "hostname": host.hostname,
        "ip": "10.0.0.1",
        "tags": host.tags,
    });
    for object in host.wrapping.iter().rev() {
        node = if *object {
            json!({ "value": node })
        } else {
            json!([node])
        };
    }
    node
}

/// Outputs with one key per host, so traversal order is planting order
fn outputs_for(hosts: &[PlantedHost]) -> Value {
    let outputs: Map<String, Value> = hosts
        .iter()
        .enumerate()
        .map(|(i, host)| (format!("output_{}", i), host_node(host)))
        .collect();
    Value::Object(outputs)
}

/// Arbitrary JSON with no `nixos_host` marker anywhere
fn unmarked_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn attribute_key() -> impl Strategy<Value = String> {
    "x_[a-z]{1,6}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every planted host is found, in document order.
    #[test]
    fn property_planted_hosts_found_in_order(
        hosts in proptest::collection::vec(planted_host(), 0..8)
    ) {
        let found = StateExtractor::new().extract(&outputs_for(&hosts), &TagFilter::all()).hosts;

        let found_names: Vec<&str> = found.iter().map(|h| h.hostname()).collect();
        let planted_names: Vec<&str> = hosts.iter().map(|h| h.hostname.as_str()).collect();
        prop_assert_eq!(found_names, planted_names);
    }

    /// PROPERTY: A tag filter keeps exactly the hosts sharing at least one tag.
    #[test]
    fn property_tag_filter_is_inclusive_or(
        hosts in proptest::collection::vec(planted_host(), 0..8),
        wanted in proptest::collection::vec(tag(), 1..3),
    ) {
        let filter = TagFilter::new(wanted.clone());
        let found = StateExtractor::new().extract(&outputs_for(&hosts), &filter).hosts;

        let expected: Vec<&str> = hosts
            .iter()
            .filter(|h| h.tags.iter().any(|t| wanted.contains(t)))
            .map(|h| h.hostname.as_str())
            .collect();
        let found_names: Vec<&str> = found.iter().map(|h| h.hostname()).collect();
        prop_assert_eq!(found_names, expected);
    }

    /// PROPERTY: Trees without the marker never yield hosts.
    #[test]
    fn property_unmarked_tree_yields_nothing(tree in unmarked_tree()) {
        let state = json!({ "outputs": tree });
        prop_assert!(StateExtractor::new()
            .extract_from_state(&state, &TagFilter::all())
            .hosts
            .is_empty());
    }

    /// PROPERTY: Extraction never panics on arbitrary JSON, marked or not.
    #[test]
    fn property_extract_never_panics(
        tree in unmarked_tree(),
        hosts in proptest::collection::vec(planted_host(), 0..3),
    ) {
        let outputs = json!({ "noise": tree, "hosts": outputs_for(&hosts) });
        let extraction = StateExtractor::new().extract(&outputs, &TagFilter::all());
        prop_assert_eq!(extraction.hosts.len(), hosts.len());
        prop_assert!(extraction.skipped.is_empty());
    }

    /// PROPERTY: Writing a host back out and re-reading it keeps every attribute.
    #[test]
    fn property_host_record_survives_serialization(
        host in planted_host(),
        extra in proptest::collection::btree_map(attribute_key(), "[a-z0-9 ]{0,12}", 0..4),
    ) {
        let mut record = HostRecord::new(host.hostname.clone())
            .with_ip("192.0.2.10")
            .with_tags(host.tags.clone());
        for (key, value) in &extra {
            record = record.with_attribute(key.clone(), Value::String(value.clone()));
        }

        let mut node = match serde_json::to_value(&record).unwrap() {
            Value::Object(map) => map,
            other => panic!("host serialized to {:?}", other),
        };
        node.insert(HOST_TYPE_KEY.to_string(), Value::String(HOST_TYPE_VALUE.to_string()));

        prop_assert_eq!(HostRecord::from_node(&node).unwrap().unwrap(), record);
    }
}
