use std::collections::{BTreeMap, HashMap};

use vc_form::{DecodeError, Form, Value};

fn round_trip(input: &str) -> String {
    let value: Value = vc_form::from_str(input).unwrap();
    vc_form::to_string(&value).unwrap()
}

#[test]
fn leaves_stay_text() {
    let value: Value = vc_form::from_str("val=007&flag=true&n=1e3").unwrap();
    assert_eq!(value["val"], "007");
    assert_eq!(value["flag"], "true");
    assert_eq!(value["n"], "1e3");
    assert_eq!(round_trip("val=007"), "val=007");
}

#[test]
fn index_markers_append() {
    let value: Value = vc_form::from_str("items[]=a&items[]=b&items[]=c").unwrap();
    assert_eq!(value["items"].as_list().map(<[Value]>::len), Some(3));
    assert_eq!(value["items"], Value::from(vec!["a".into(), "b".into(), "c".into()]));
}

#[test]
fn nested_maps_merge() {
    let value: Value = vc_form::from_str("a[b][c]=v&a[b][d]=w&a[e]=x").unwrap();
    assert_eq!(value["a"]["b"]["c"], "v");
    assert_eq!(value["a"]["b"]["d"], "w");
    assert_eq!(value["a"]["e"], "x");
}

#[test]
fn canonical_round_trip() {
    assert_eq!(
        round_trip("data[items][]=a&data[items][]=b"),
        "data%5Bitems%5D%5B%5D=a&data%5Bitems%5D%5B%5D=b"
    );
    assert_eq!(round_trip("b=2&a=1&c[x]=3"), "a=1&b=2&c%5Bx%5D=3");

    let pairs = vc_form::to_pairs(&vc_form::from_str::<Value>("data[items][]=a&data[items][]=b").unwrap()).unwrap();
    let pairs: Vec<(&str, &str)> = pairs.iter().collect();
    assert_eq!(pairs, [("data[items][]", "a"), ("data[items][]", "b")]);
}

#[test]
fn each_marker_starts_a_new_element() {
    let value: Value = vc_form::from_str("rows[][id]=1&rows[][id]=2").unwrap();
    let rows = value["rows"].as_list().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "1");
    assert_eq!(rows[1]["id"], "2");
}

#[test]
fn dynamic_fields_in_records() {
    #[derive(Form, Default)]
    struct Envelope {
        kind: String,
        data: Value,
        extra: HashMap<String, Value>,
    }

    let envelope: Envelope =
        vc_form::from_str("kind=event&data[user][name]=ann&data[tags][]=x&extra[a][]=1&extra[b]=2").unwrap();
    assert_eq!(envelope.kind, "event");
    assert_eq!(envelope.data["user"]["name"], "ann");
    assert_eq!(envelope.data["tags"][0], "x");
    assert_eq!(envelope.extra["a"][0], "1");
    assert_eq!(envelope.extra["b"], "2");

    let encoded = vc_form::to_string(&envelope).unwrap();
    let decoded: Envelope = vc_form::from_str(&encoded).unwrap();
    assert_eq!(decoded.data, envelope.data);
    assert_eq!(decoded.extra, envelope.extra);
}

#[test]
fn empty_containers_encode_nothing() {
    let mut root = BTreeMap::new();
    root.insert(String::from("empty_map"), Value::default());
    root.insert(String::from("empty_list"), Value::List(Vec::new()));
    root.insert(String::from("text"), Value::from(""));
    let value = Value::from(root);

    assert_eq!(vc_form::to_string(&value).unwrap(), "text=");
}

#[test]
fn text_root_is_rejected() {
    let err = vc_form::to_string(&Value::from("x")).unwrap_err();
    assert_eq!(err.category(), vc_form::ErrorCategory::Structural);

    let mut list = Value::List(Vec::new());
    assert!(vc_form::decode_str("a=1", &mut list).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn decoded_value_as_json() {
    let value: Value = vc_form::from_str("user[name]=ann&user[roles][]=admin&n=1").unwrap();
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "n": "1", "user": { "name": "ann", "roles": ["admin"] } })
    );
}

#[test]
fn leading_index_keeps_root_a_map() {
    let mut value = Value::default();
    let err = vc_form::decode_str("a=1&[]=x", &mut value).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedIndex { ref key, .. } if key == "[]"));
    assert_eq!(err.category(), vc_form::ErrorCategory::Structural);
    assert!(value.as_map().is_some());
    assert_eq!(value["a"], "1");

    assert!(vc_form::from_str::<Value>("[][b]=x").is_err());
}
