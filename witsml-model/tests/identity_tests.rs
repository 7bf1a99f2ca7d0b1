use pretty_assertions::assert_eq;
use witsml_model::{ModelError, ObjectIdentity, Well, WitsmlObject};
use witsml_types::ObjectType;

fn well(id: &str) -> ObjectIdentity {
    ObjectIdentity::root(Some(id.to_string()))
}

#[test]
fn same_id_means_equal() {
    let a = well("42");
    let b = well("42");
    assert!(a.same_id(&b));
    assert_eq!(a, b);
}

#[test]
fn different_ids_are_not_equal() {
    assert_ne!(well("1"), well("2"));
}

#[test]
#[allow(clippy::eq_op)]
fn idless_instances_are_never_equal() {
    let a = ObjectIdentity::root(None);
    let b = ObjectIdentity::root(None);
    assert!(a != b);
    // An instance is still equal to itself.
    assert!(a == a);
    assert!(a.is_same_instance(&a));
    assert!(!a.is_same_instance(&b));
}

#[test]
fn idless_never_matches_an_id() {
    assert!(ObjectIdentity::root(None) != well("42"));
}

#[test]
fn child_chain_is_innermost_first() {
    let well = well("W1");
    let wellbore =
        ObjectIdentity::child_of(ObjectType::Wellbore, Some("B1".into()), &well).unwrap();
    let log = ObjectIdentity::child_of(ObjectType::Log, Some("L1".into()), &wellbore).unwrap();
    assert_eq!(log.parent_ids(), ["B1", "W1"]);
    assert_eq!(log.parent().map(|p| p.object_type), Some(ObjectType::Wellbore));
    assert_eq!(log.parent().and_then(|p| p.id.as_deref()), Some("B1"));
}

#[test]
fn log_under_a_well_is_rejected() {
    let err = ObjectIdentity::child_of(ObjectType::Log, None, &well("W1")).unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidParent {
            object_type: ObjectType::Log,
            parent_type: ObjectType::Well
        }
    ));
}

#[test]
fn parent_without_id_cannot_have_children() {
    let anonymous = ObjectIdentity::root(None);
    let err = ObjectIdentity::child_of(ObjectType::Wellbore, None, &anonymous).unwrap_err();
    assert!(matches!(err, ModelError::ParentWithoutId(ObjectType::Well)));
}

#[test]
fn wire_ancestors_must_match_depth() {
    let ok = ObjectIdentity::with_ancestors(
        ObjectType::Trajectory,
        Some("T1".into()),
        vec!["B1".into(), "W1".into()],
    )
    .unwrap();
    assert_eq!(ok.parent_ids(), ["B1", "W1"]);

    let err = ObjectIdentity::with_ancestors(ObjectType::Trajectory, None, vec!["B1".into()])
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::AncestorChain {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn name_updates_skip_absent_values() {
    let mut id = well("W1");
    id.set_name(Some("Alpha".into()));
    id.set_name(None);
    assert_eq!(id.name(), Some("Alpha"));
}

#[test]
fn display_includes_chain() {
    let wellbore = ObjectIdentity::with_ancestors(
        ObjectType::Wellbore,
        Some("B1".into()),
        vec!["W1".into()],
    )
    .unwrap();
    assert_eq!(wellbore.to_string(), "wellbore B1 in [W1]");
}

#[test]
fn objects_compare_by_identity() {
    let a = WitsmlObject::Well(Well::new(well("42")));
    let mut other = Well::new(well("42"));
    other.field = Some("Troll".into());
    let b = WitsmlObject::Well(other);
    assert_eq!(a, b);
    assert_eq!(a.object_type(), ObjectType::Well);
    assert!(a.as_log().is_none());
    assert_eq!(b.as_well().and_then(|w| w.field.as_deref()), Some("Troll"));
}

#[test]
fn object_serializes_with_type_tag() {
    let object = WitsmlObject::Well(Well::new(well("W1")));
    let json = serde_json::to_value(&object).unwrap();
    assert_eq!(json["type"], "well");
    assert_eq!(json["identity"]["id"], "W1");
}
