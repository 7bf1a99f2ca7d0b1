use pretty_assertions::assert_eq;
use roxmltree::Document;
use witsml_store::{resolve, supported_types, StoreError};
use witsml_types::{ObjectType, UnitProfile, WitsmlVersion};

#[test]
fn formation_markers_need_1_3_1_or_later() {
    assert!(matches!(
        resolve(WitsmlVersion::V1_2_0, ObjectType::FormationMarker),
        Err(StoreError::TemplateResolution {
            version: WitsmlVersion::V1_2_0,
            object_type: ObjectType::FormationMarker,
        })
    ));
    assert!(resolve(WitsmlVersion::V1_3_1, ObjectType::FormationMarker).is_ok());
    assert!(resolve(WitsmlVersion::V1_4_1, ObjectType::FormationMarker).is_ok());
}

#[test]
fn realtime_is_not_defined_in_1_4_1() {
    assert!(resolve(WitsmlVersion::V1_2_0, ObjectType::Realtime).is_ok());
    assert!(resolve(WitsmlVersion::V1_3_1, ObjectType::Realtime).is_ok());
    let err = resolve(WitsmlVersion::V1_4_1, ObjectType::Realtime).err().unwrap();
    assert_eq!(err.to_string(), "no realtime template for WITSML 1.4.1.1");
}

#[test]
fn supported_types_per_version() {
    assert_eq!(supported_types(WitsmlVersion::V1_3_1), ObjectType::ALL.to_vec());
    assert!(!supported_types(WitsmlVersion::V1_2_0).contains(&ObjectType::FormationMarker));
    assert!(!supported_types(WitsmlVersion::V1_4_1).contains(&ObjectType::Realtime));
    assert_eq!(supported_types(WitsmlVersion::V1_4_1).len(), 7);
}

#[test]
fn codecs_report_their_pair() {
    for version in WitsmlVersion::ALL {
        for object_type in supported_types(version) {
            let codec = resolve(version, object_type).unwrap();
            assert_eq!(codec.version(), version);
            assert_eq!(codec.object_type(), object_type);
        }
    }
}

#[test]
fn every_rendered_template_is_well_formed() {
    let parents = vec!["B1".to_string(), "W1".to_string()];
    for version in WitsmlVersion::ALL {
        for object_type in supported_types(version) {
            let codec = resolve(version, object_type).unwrap();
            let parent_ids = &parents[parents.len() - object_type.ancestor_count()..];
            let query = codec.build_query("X1", parent_ids, UnitProfile::Metric);

            assert!(!query.contains('%'), "{version} {object_type}: {query}");
            let doc = Document::parse(&query)
                .unwrap_or_else(|e| panic!("{version} {object_type}: {e}"));
            let root = doc.root_element();
            assert_eq!(root.tag_name().name(), object_type.collection_name());
            assert_eq!(root.tag_name().namespace(), Some(version.namespace()));
            assert_eq!(root.attribute("version"), Some(version.as_str()));

            let element = root.first_element_child().unwrap();
            assert_eq!(element.tag_name().name(), object_type.element_name());
            assert_eq!(element.attribute("uid"), Some("X1"));
        }
    }
}

#[test]
fn rendered_templates_carry_the_ancestor_chain() {
    let codec = resolve(WitsmlVersion::V1_3_1, ObjectType::Log).unwrap();
    let query = codec.build_query("", &["B1".into(), "W1".into()], UnitProfile::ServerDefault);
    let doc = Document::parse(&query).unwrap();
    let log = doc.root_element().first_element_child().unwrap();
    assert_eq!(log.attribute("uidWellbore"), Some("B1"));
    assert_eq!(log.attribute("uidWell"), Some("W1"));
    assert_eq!(log.attribute("uid"), Some(""));

    let codec = resolve(WitsmlVersion::V1_4_1, ObjectType::Wellbore).unwrap();
    let query = codec.build_query("B1", &["W1".into()], UnitProfile::ServerDefault);
    let doc = Document::parse(&query).unwrap();
    let wellbore = doc.root_element().first_element_child().unwrap();
    assert_eq!(wellbore.attribute("uidWell"), Some("W1"));
}

#[test]
fn unit_profiles_reach_the_uom_attributes() {
    let codec = resolve(WitsmlVersion::V1_4_1, ObjectType::Trajectory).unwrap();
    let metric = codec.build_query("", &[], UnitProfile::Metric);
    let imperial = codec.build_query("", &[], UnitProfile::Imperial);
    assert!(metric.contains(r#"<md uom="m"/>"#));
    assert!(imperial.contains(r#"<md uom="ft"/>"#));
    assert!(metric.contains(r#"<incl uom="dega"/>"#));
}

#[test]
fn log_layout_differs_between_versions() {
    let v131 = resolve(WitsmlVersion::V1_3_1, ObjectType::Log)
        .unwrap()
        .skeleton();
    let v141 = resolve(WitsmlVersion::V1_4_1, ObjectType::Log)
        .unwrap()
        .skeleton();
    assert!(v131.contains("<columnIndex/>"));
    assert!(!v141.contains("<columnIndex/>"));
    assert!(v141.contains("<mnemonicList/>"));
    assert!(v141.contains("<dataDelimiter/>"));
}
