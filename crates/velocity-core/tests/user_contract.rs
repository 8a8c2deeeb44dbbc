//! Wire-shape contract for the user record.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use velocity_core::model::{encode_json_line, User};

#[test]
fn single_user_wire_shape() {
    let body = encode_json_line(&User::from_raw_id("42")).unwrap();
    assert_eq!(
        &body[..],
        b"{\"id\":42,\"name\":\"User 42\",\"email\":\"user42@example.com\"}\n"
    );
}

#[test]
fn roster_wire_shape_and_roundtrip() {
    let body = encode_json_line(&User::roster()).unwrap();
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with(r#"[{"id":1,"name":"User 1","email":"user1@example.com"},"#));
    assert!(text.ends_with("}]\n"));

    let decoded: Vec<User> = serde_json::from_slice(&body).unwrap();
    assert_eq!(decoded, User::roster());
}

#[test]
fn all_fields_present() {
    let body = encode_json_line(&User::synthesize(1)).unwrap();
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert!(map.contains_key("id"));
    assert!(map.contains_key("name"));
    assert!(map.contains_key("email"));
    assert_eq!(map.len(), 3);
}
