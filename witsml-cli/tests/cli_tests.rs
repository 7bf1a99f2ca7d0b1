use pretty_assertions::assert_eq;
use roxmltree::Document;
use std::io::Write;
use witsml_cli::{QueryRequest, parent_identity, parse_response, render_query};
use witsml_query::QueryConstraints;
use witsml_store::{ClientConfig, StoreError};
use witsml_types::{ObjectType, UnitProfile, WitsmlVersion};

fn request(object_type: ObjectType, parents: &[&str]) -> QueryRequest {
    QueryRequest {
        version: WitsmlVersion::V1_4_1,
        object_type,
        id: None,
        parents: parents.iter().map(|p| p.to_string()).collect(),
        units: UnitProfile::Metric,
        constraints: QueryConstraints::new(),
    }
}

#[test]
fn query_carries_ids_and_constraints() {
    let mut req = request(ObjectType::Log, &["B1", "W1"]);
    req.id = Some("L1".into());
    req.constraints = QueryConstraints::new()
        .include("name")
        .include("logCurveInfo")
        .with_value("mnemonic", "GR");
    let query = render_query(&req).unwrap();

    let doc = Document::parse(&query).unwrap();
    let log = doc.root_element().first_element_child().unwrap();
    assert_eq!(log.attribute("uidWell"), Some("W1"));
    assert_eq!(log.attribute("uidWellbore"), Some("B1"));
    assert_eq!(log.attribute("uid"), Some("L1"));

    let children: Vec<_> = log
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect();
    assert_eq!(children, ["name", "logCurveInfo"]);
    let mnemonic = log
        .descendants()
        .find(|n| n.has_tag_name("mnemonic"))
        .and_then(|n| n.text());
    assert_eq!(mnemonic, Some("GR"));
}

#[test]
fn query_rejects_a_short_parent_chain() {
    let err = render_query(&request(ObjectType::Log, &["B1"])).unwrap_err();
    assert!(matches!(err, StoreError::InvalidParent(_)), "{err}");

    let err = render_query(&request(ObjectType::Well, &["X"])).unwrap_err();
    assert!(matches!(err, StoreError::InvalidParent(_)), "{err}");
}

#[test]
fn query_for_an_undefined_pair_fails() {
    let err = render_query(&request(ObjectType::Realtime, &[])).unwrap_err();
    assert!(matches!(err, StoreError::TemplateResolution { .. }));
}

#[test]
fn parent_identity_builds_the_chain() {
    assert!(parent_identity(ObjectType::Wellbore, &[]).unwrap().is_none());
    let parent = parent_identity(ObjectType::Trajectory, &["B1".into(), "W1".into()])
        .unwrap()
        .unwrap();
    assert_eq!(parent.object_type(), ObjectType::Wellbore);
    assert_eq!(parent.id(), Some("B1"));
    assert_eq!(parent.parent_ids(), ["W1".to_string()]);
}

#[test]
fn saved_responses_parse_to_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<rigs xmlns="http://www.witsml.org/schemas/1series" version="1.4.1.1">
             <rig uidWell="W1" uidWellbore="B1" uid="R1">
               <name>Deep Explorer</name>
               <owner>Acme Drilling</owner>
               <yearEntService>2009</yearEntService>
               <airGap uom="m">25</airGap>
             </rig>
           </rigs>"#
    )
    .unwrap();
    let xml = std::fs::read_to_string(file.path()).unwrap();

    let objects = parse_response(&ClientConfig::default(), ObjectType::Rig, &xml, &[]).unwrap();
    assert_eq!(objects.len(), 1);
    let rig = objects[0].as_rig().unwrap();
    assert_eq!(rig.owner.as_deref(), Some("Acme Drilling"));
    assert_eq!(rig.year_ent_service, Some(2009));

    let json = serde_json::to_value(&objects).unwrap();
    assert_eq!(json[0]["type"], "rig");
}

#[test]
fn parse_uses_the_configured_version() {
    let xml = r#"<formationMarkers xmlns="http://www.witsml.org/schemas/131" version="1.3.1.1">
        <formationMarker uidWell="W1" uidWellbore="B1" uid="F1"><name>Top Brent</name></formationMarker>
    </formationMarkers>"#;
    let mut config = ClientConfig::default();
    config.version = WitsmlVersion::V1_3_1;
    let objects = parse_response(&config, ObjectType::FormationMarker, xml, &[]).unwrap();
    assert_eq!(objects[0].name(), Some("Top Brent"));

    config.version = WitsmlVersion::V1_2_0;
    let err = parse_response(&config, ObjectType::FormationMarker, xml, &[]).unwrap_err();
    assert!(matches!(err, StoreError::TemplateResolution { .. }));
}
