// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for typed calendar user parameters
//!
//! These tests drive `Organizer` and `Attendee` the way a document parser and
//! serializer would: through the raw store on one side and the typed
//! attributes on the other.

use icalperson::{
    Attendee, Organizer, Person, PersonError, PersonKind, PropertyAccessor, RawPropertyStore, Uri,
    ValueType,
};

fn uri(s: &str) -> Uri {
    s.parse().unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&s| s.to_owned()).collect()
}

fn store<const N: usize>(entries: [(&str, &[&str]); N]) -> RawPropertyStore {
    entries
        .into_iter()
        .map(|(name, values)| (name, strings(values)))
        .collect()
}

#[test]
fn test_attendee_status_lifecycle() {
    let mut attendee = Attendee::new("a@example.com");
    assert_eq!(attendee.email(), "a@example.com");
    assert_eq!(attendee.status().unwrap(), "NEEDS-ACTION");
    assert!(!attendee.rsvp().unwrap());

    attendee.set_status("ACCEPTED");
    assert_eq!(attendee.extra(), &store([("PARTSTAT", &["ACCEPTED"])]));
    assert_eq!(attendee.status().unwrap(), "ACCEPTED");

    attendee.delete_status();
    assert_eq!(attendee.status().unwrap(), "NEEDS-ACTION");
    assert!(attendee.extra().is_empty());
}

#[test]
fn test_attendee_delegated_to_keeps_order() {
    let delegates = [uri("mailto:x@example.com"), uri("mailto:y@example.com")];
    let attendee = Attendee::builder("a@example.com")
        .delegated_to(delegates.clone())
        .build();

    assert_eq!(
        attendee.extra().get("DELEGATED-TO"),
        Some(&strings(&["mailto:x@example.com", "mailto:y@example.com"])[..])
    );
    assert_eq!(attendee.delegated_to().unwrap(), Some(delegates.to_vec()));
}

#[test]
fn test_multi_valued_keeps_duplicates() {
    let a = uri("mailto:a@example.com");
    let b = uri("mailto:b@example.com");

    let mut attendee = Attendee::new("me@example.com");
    attendee.set_member([a.clone(), a.clone(), b.clone()]);
    assert_eq!(attendee.member().unwrap(), Some(vec![a.clone(), a, b]));
    assert_eq!(attendee.extra().get("MEMBER").map(<[String]>::len), Some(3));
}

#[test]
fn test_single_valued_rejects_two_raw_values() {
    let attendee = Attendee::with_extra(
        "a@example.com",
        store([("PARTSTAT", &["ACCEPTED", "DECLINED"])]),
    );

    match attendee.status() {
        Err(PersonError::Cardinality { property, values }) => {
            assert_eq!(property, "PARTSTAT");
            assert_eq!(values, strings(&["ACCEPTED", "DECLINED"]));
        }
        other => panic!("expected a cardinality error, got {other:?}"),
    }

    // other accessors are unaffected
    assert_eq!(attendee.role().unwrap(), "REQ-PARTICIPANT");
}

#[test]
fn test_case_variants_count_towards_cardinality() {
    let attendee = Attendee::with_extra(
        "a@example.com",
        store([("partstat", &["ACCEPTED"]), ("PARTSTAT", &["DECLINED"])]),
    );

    assert_eq!(
        attendee.status(),
        Err(PersonError::Cardinality {
            property: "PARTSTAT",
            values: strings(&["ACCEPTED", "DECLINED"]),
        })
    );
    assert_eq!(attendee.extra().len(), 1);
}

#[test]
fn test_present_but_empty_differs_by_cardinality() {
    let attendee = Attendee::with_extra(
        "a@example.com",
        store([("ROLE", &[]), ("RSVP", &[]), ("MEMBER", &[]), ("DELEGATED-FROM", &[])]),
    );

    // single-valued: empty reads as the default
    assert_eq!(attendee.role().unwrap(), "REQ-PARTICIPANT");
    assert!(!attendee.rsvp().unwrap());

    // multi-valued: empty reads as an empty list, not as missing
    assert_eq!(attendee.member().unwrap(), Some(Vec::new()));
    assert_eq!(attendee.delegated_from().unwrap(), Some(Vec::new()));
    assert_eq!(attendee.delegated_to().unwrap(), None);
}

#[test]
fn test_delete_restores_defaults() {
    let mut attendee = Attendee::builder("a@example.com")
        .user_type("RESOURCE")
        .role("CHAIR")
        .status("TENTATIVE")
        .rsvp(true)
        .member([uri("mailto:g@example.com")])
        .delegated_to([uri("mailto:d@example.com")])
        .delegated_from([uri("mailto:f@example.com")])
        .common_name("Conference Room")
        .sent_by(uri("mailto:assistant@example.com"))
        .directory(uri("ldap://example.com/cn=room"))
        .build();
    assert_eq!(attendee.extra().len(), Attendee::PROPERTY_NAMES.len());

    attendee.delete_user_type();
    attendee.delete_role();
    attendee.delete_status();
    attendee.delete_rsvp();
    attendee.delete_member();
    attendee.delete_delegated_to();
    attendee.delete_delegated_from();
    attendee.delete_common_name();
    attendee.delete_sent_by();
    attendee.delete_directory();

    assert!(attendee.extra().is_empty());
    assert_eq!(attendee.user_type().unwrap(), "INDIVIDUAL");
    assert_eq!(attendee.role().unwrap(), "REQ-PARTICIPANT");
    assert_eq!(attendee.status().unwrap(), "NEEDS-ACTION");
    assert!(!attendee.rsvp().unwrap());
    assert_eq!(attendee.member().unwrap(), None);
    assert_eq!(attendee.common_name().unwrap(), None);
    assert_eq!(attendee.sent_by().unwrap(), None);
    assert_eq!(attendee.directory().unwrap(), None);
}

#[test]
fn test_accessors_do_not_touch_other_entries() {
    let mut attendee = Attendee::with_extra(
        "a@example.com",
        store([("LANGUAGE", &["en"]), ("X-CUSTOM", &["1", "2"])]),
    );

    attendee.set_rsvp(true);
    attendee.set_common_name("Jane");
    attendee.delete_common_name();
    attendee.set_delegated_from([]);

    assert_eq!(attendee.extra().get("LANGUAGE"), Some(&strings(&["en"])[..]));
    assert_eq!(attendee.extra().get("X-CUSTOM"), Some(&strings(&["1", "2"])[..]));
    assert_eq!(attendee.extra().get("RSVP"), Some(&strings(&["TRUE"])[..]));
    assert_eq!(attendee.extra().get("DELEGATED-FROM"), Some(&[][..]));
}

#[test]
fn test_lowercase_parameter_names_are_found() {
    let mut attendee = Attendee::with_extra(
        "a@example.com",
        store([("partstat", &["DECLINED"]), ("rsvp", &["true"])]),
    );
    assert_eq!(attendee.status().unwrap(), "DECLINED");
    assert!(attendee.rsvp().unwrap());

    attendee.set_status("ACCEPTED");
    assert_eq!(attendee.extra(), &store([("partstat", &["ACCEPTED"]), ("rsvp", &["true"])]));
}

#[test]
fn test_invalid_raw_values_are_surfaced() {
    let attendee = Attendee::with_extra(
        "a@example.com",
        store([("RSVP", &["maybe"]), ("MEMBER", &["not a uri"])]),
    );

    let Err(PersonError::ValueFormat(err)) = attendee.rsvp() else {
        panic!("expected a value format error");
    };
    assert_eq!(err.expected, ValueType::Boolean);
    assert_eq!(err.value, "maybe");

    let Err(PersonError::ValueFormat(err)) = attendee.member() else {
        panic!("expected a value format error");
    };
    assert_eq!(err.expected, ValueType::Uri);
}

#[test]
fn test_organizer_shared_accessors() {
    let mut organizer = Organizer::builder("mailto:boss@example.com")
        .common_name("The Boss")
        .build();
    assert_eq!(organizer.kind(), PersonKind::Organizer);
    assert_eq!(organizer.common_name().unwrap().as_deref(), Some("The Boss"));
    assert_eq!(organizer.sent_by().unwrap(), None);

    organizer.set_sent_by(uri("mailto:assistant@example.com"));
    organizer.set_directory(uri("ldap://example.com/cn=boss"));
    assert_eq!(
        organizer.extra(),
        &store([
            ("CN", &["The Boss"]),
            ("SENT-BY", &["mailto:assistant@example.com"]),
            ("DIR", &["ldap://example.com/cn=boss"]),
        ])
    );

    organizer.set_email("mailto:chief@example.com");
    assert_eq!(organizer.email(), "mailto:chief@example.com");
}

#[test]
fn test_builder_applies_values_over_initial_store() {
    let attendee = Attendee::builder("a@example.com")
        .status("DELEGATED")
        .extra(store([("PARTSTAT", &["ACCEPTED"]), ("CN", &["Jane"])]))
        .build();

    assert_eq!(attendee.status().unwrap(), "DELEGATED");
    assert_eq!(attendee.common_name().unwrap().as_deref(), Some("Jane"));
}

#[test]
fn test_property_names_are_declared_once() {
    for names in [Organizer::PROPERTY_NAMES, Attendee::PROPERTY_NAMES] {
        let mut seen: Vec<&str> = Vec::new();
        for &name in names {
            assert!(
                !seen.iter().any(|other| other.eq_ignore_ascii_case(name)),
                "{name} declared twice"
            );
            seen.push(name);
        }
    }
    assert_eq!(Organizer::SENT_BY.name(), "SENT-BY");
    assert_eq!(Attendee::STATUS.name(), "PARTSTAT");
    assert_eq!(Attendee::MEMBER.name(), "MEMBER");
}

#[test]
fn test_raw_store_is_directly_mutable() {
    let mut attendee = Attendee::new("a@example.com");
    attendee
        .extra_mut()
        .insert("PARTSTAT", strings(&["ACCEPTED", "TENTATIVE"]));
    assert!(matches!(
        attendee.status(),
        Err(PersonError::Cardinality { .. })
    ));

    attendee.extra_mut().remove("PARTSTAT");
    assert_eq!(attendee.status().unwrap(), "NEEDS-ACTION");
}

#[cfg(feature = "serde")]
#[test]
fn test_store_from_json() {
    let extra = RawPropertyStore::from_json_str(
        r#"{"CUTYPE": ["GROUP"], "RSVP": ["TRUE"], "MEMBER": ["mailto:a@example.com"]}"#,
    )
    .unwrap();
    let attendee = Attendee::with_extra("a@example.com", extra);

    assert_eq!(attendee.user_type().unwrap(), "GROUP");
    assert!(attendee.rsvp().unwrap());
    assert_eq!(
        attendee.member().unwrap(),
        Some(vec![uri("mailto:a@example.com")])
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_store_from_json_keeps_case_variants() {
    let extra = RawPropertyStore::from_json_str(
        r#"{"member": ["mailto:a@example.com"], "MEMBER": ["mailto:b@example.com"]}"#,
    )
    .unwrap();
    let attendee = Attendee::with_extra("a@example.com", extra);

    assert_eq!(
        attendee.member().unwrap(),
        Some(vec![uri("mailto:a@example.com"), uri("mailto:b@example.com")])
    );

    let attendee: Attendee = serde_json::from_str(
        r#"{"email": "a@example.com", "extra": {"rsvp": ["TRUE"], "RSVP": ["FALSE"]}}"#,
    )
    .unwrap();
    assert!(matches!(
        attendee.rsvp(),
        Err(PersonError::Cardinality { .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_store_rejects_non_mapping_json() {
    let value = serde_json::json!({ "CN": "Jane" });
    let err = RawPropertyStore::try_from(&value).unwrap_err();
    assert!(matches!(err, PersonError::InvalidStore { .. }));
    assert!(err.to_string().contains("CN"));

    let value = serde_json::json!(["CN", "Jane"]);
    assert!(matches!(
        RawPropertyStore::try_from(&value),
        Err(PersonError::InvalidStore { .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_attendee_serde() {
    let mut attendee = Attendee::new("a@example.com");
    attendee.set_status("ACCEPTED");
    attendee.set_delegated_to([uri("mailto:x@example.com")]);

    let json = serde_json::to_value(&attendee).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "email": "a@example.com",
            "extra": {
                "PARTSTAT": ["ACCEPTED"],
                "DELEGATED-TO": ["mailto:x@example.com"],
            },
        })
    );

    let back: Attendee = serde_json::from_value(json).unwrap();
    assert_eq!(back, attendee);

    let bare: Organizer = serde_json::from_str(r#"{"email": "o@example.com"}"#).unwrap();
    assert!(bare.extra().is_empty());
}
