use pretty_assertions::assert_eq;
use roxmltree::Document;
use witsml_query::{constrain, QueryConstraints, QueryError};

const WELL_TEMPLATE: &str = r#"<wells xmlns="http://www.witsml.org/schemas/1series" version="1.4.1.1">
  <well uid="">
    <name/>
    <field/>
    <country/>
    <groundElevation uom="m"/>
    <wellLocation uid="">
      <latitude uom="dega"/>
      <longitude uom="dega"/>
    </wellLocation>
    <commonData>
      <name/>
      <dTimLastChange/>
    </commonData>
  </well>
</wells>"#;

const LOG_TEMPLATE: &str = r#"<logs xmlns="http://www.witsml.org/schemas/131" version="1.3.1.1">
  <log uidWell="W1" uidWellbore="B1" uid="">
    <name/>
    <indexCurve columnIndex=""/>
    <logCurveInfo uid="">
      <mnemonic/>
      <unit/>
      <columnIndex/>
    </logCurveInfo>
    <logData>
      <data/>
    </logData>
  </log>
</logs>"#;

fn element_names(xml: &str) -> Vec<String> {
    let doc = Document::parse(xml).unwrap();
    doc.descendants()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name().to_string())
        .collect()
}

// ── No-op ────────────────────────────────────────────────────────

#[test]
fn empty_constraints_keep_every_element() {
    let out = constrain(WELL_TEMPLATE, &QueryConstraints::new()).unwrap();
    assert_eq!(element_names(&out), element_names(WELL_TEMPLATE));
}

#[test]
fn namespace_and_attributes_survive() {
    let out = constrain(WELL_TEMPLATE, &QueryConstraints::new()).unwrap();
    let doc = Document::parse(&out).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().namespace(), Some("http://www.witsml.org/schemas/1series"));
    assert_eq!(root.attribute("version"), Some("1.4.1.1"));
}

// ── Inclusion / exclusion ────────────────────────────────────────

#[test]
fn include_only_name_keeps_names_and_their_ancestors() {
    let constraints = QueryConstraints::new().include("name");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    assert_eq!(
        element_names(&out),
        vec!["wells", "well", "name", "commonData", "name"]
    );
}

#[test]
fn include_keeps_the_whole_subtree() {
    let constraints = QueryConstraints::new().include("wellLocation");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    assert_eq!(
        element_names(&out),
        vec!["wells", "well", "wellLocation", "latitude", "longitude"]
    );
}

#[test]
fn exclude_without_include_drops_only_the_excluded_subtree() {
    let constraints = QueryConstraints::new().exclude("commonData");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    let names = element_names(&out);
    assert!(!names.contains(&"commonData".to_string()));
    assert!(!names.contains(&"dTimLastChange".to_string()));
    assert!(names.contains(&"wellLocation".to_string()));
    assert_eq!(names.iter().filter(|n| *n == "name").count(), 1);
}

#[test]
fn exclude_dominates_include() {
    let constraints = QueryConstraints::new().include("field").exclude("field");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    assert!(!element_names(&out).contains(&"field".to_string()));
}

#[test]
fn excluded_ancestor_hides_included_descendant() {
    let constraints = QueryConstraints::new().include("latitude").exclude("wellLocation");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    assert_eq!(element_names(&out), vec!["wells"]);
}

#[test]
fn excluding_bulk_data_keeps_curve_headers() {
    let constraints = QueryConstraints::new().exclude("logData");
    let out = constrain(LOG_TEMPLATE, &constraints).unwrap();
    let names = element_names(&out);
    assert!(names.contains(&"logCurveInfo".to_string()));
    assert!(!names.contains(&"data".to_string()));
}

// ── Element values ───────────────────────────────────────────────

#[test]
fn single_value_sets_text_in_place() {
    let constraints = QueryConstraints::new().with_value("field", "Troll");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    let doc = Document::parse(&out).unwrap();
    let field = doc.descendants().find(|n| n.has_tag_name("field")).unwrap();
    assert_eq!(field.text(), Some("Troll"));
    assert_eq!(doc.descendants().filter(|n| n.has_tag_name("well")).count(), 1);
}

#[test]
fn repeated_value_produces_sibling_groups() {
    let template = "<wells><well><uid/><name/></well></wells>";
    let constraints = QueryConstraints::new()
        .with_value("uid", "A")
        .with_value("uid", "B");
    let out = constrain(template, &constraints).unwrap();
    assert_eq!(
        out,
        "<wells><well><uid>A</uid><name/></well><well><uid>B</uid><name/></well></wells>"
    );
}

#[test]
fn three_values_produce_three_groups_carrying_earlier_constraints() {
    let constraints = QueryConstraints::new()
        .with_value("name", "Well 1")
        .with_value("field", "F1")
        .with_value("field", "F2")
        .with_value("field", "F3");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    let doc = Document::parse(&out).unwrap();

    let wells: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("well")).collect();
    assert_eq!(wells.len(), 3);

    let fields: Vec<_> = wells
        .iter()
        .map(|w| {
            w.children()
                .find(|c| c.has_tag_name("field"))
                .and_then(|c| c.text())
                .unwrap()
        })
        .collect();
    assert_eq!(fields, vec!["F1", "F2", "F3"]);

    // The name constraint applied before the repeats is copied into every group.
    for well in wells {
        let name = well.children().find(|c| c.has_tag_name("name")).unwrap();
        assert_eq!(name.text(), Some("Well 1"));
    }
}

#[test]
fn repeated_curve_mnemonics_clone_the_curve_header() {
    let constraints = QueryConstraints::new()
        .include("logCurveInfo")
        .with_value("mnemonic", "DEPT")
        .with_value("mnemonic", "GR");
    let out = constrain(LOG_TEMPLATE, &constraints).unwrap();
    let doc = Document::parse(&out).unwrap();
    let mnemonics: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("mnemonic"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(mnemonics, vec!["DEPT", "GR"]);
    assert_eq!(doc.descendants().filter(|n| n.has_tag_name("log")).count(), 1);
}

#[test]
fn value_for_missing_element_is_ignored() {
    let constraints = QueryConstraints::new().with_value("nope", "x");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    assert_eq!(element_names(&out), element_names(WELL_TEMPLATE));
}

#[test]
fn value_is_escaped() {
    let constraints = QueryConstraints::new().with_value("field", "A&B <north>");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    assert!(out.contains("A&amp;B &lt;north&gt;"));
    let doc = Document::parse(&out).unwrap();
    let field = doc.descendants().find(|n| n.has_tag_name("field")).unwrap();
    assert_eq!(field.text(), Some("A&B <north>"));
}

#[test]
fn repeating_a_value_on_a_root_child_fails() {
    let constraints = QueryConstraints::new()
        .with_value("well", "x")
        .with_value("well", "y");
    let err = constrain("<wells><well/></wells>", &constraints).unwrap_err();
    assert!(matches!(err, QueryError::Unclonable { ref element } if element == "well"));
}

// ── Attribute values ─────────────────────────────────────────────

#[test]
fn attribute_constraint_sets_existing_attribute() {
    let constraints = QueryConstraints::new().with_attribute("well", "uid", "W-42");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    let doc = Document::parse(&out).unwrap();
    let well = doc.descendants().find(|n| n.has_tag_name("well")).unwrap();
    assert_eq!(well.attribute("uid"), Some("W-42"));
}

#[test]
fn attribute_constraint_on_absent_attribute_is_noop() {
    let constraints = QueryConstraints::new().with_attribute("name", "uom", "m");
    let out = constrain(WELL_TEMPLATE, &constraints).unwrap();
    let doc = Document::parse(&out).unwrap();
    let name = doc.descendants().find(|n| n.has_tag_name("name")).unwrap();
    assert_eq!(name.attribute("uom"), None);
}

#[test]
fn attribute_constraint_reaches_cloned_groups() {
    let constraints = QueryConstraints::new()
        .with_value("mnemonic", "DEPT")
        .with_value("mnemonic", "GR")
        .with_attribute("logCurveInfo", "uid", "x");
    let out = constrain(LOG_TEMPLATE, &constraints).unwrap();
    let doc = Document::parse(&out).unwrap();
    let uids: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("logCurveInfo"))
        .filter_map(|n| n.attribute("uid"))
        .collect();
    assert_eq!(uids, vec!["x", "x"]);
}

// ── Malformed templates ──────────────────────────────────────────

#[test]
fn malformed_template_is_rejected() {
    let err = constrain("<wells><well></wells>", &QueryConstraints::new()).unwrap_err();
    assert!(matches!(err, QueryError::Malformed(_)));
}

#[test]
fn unclosed_template_is_rejected() {
    let err = constrain("<wells><well>", &QueryConstraints::new()).unwrap_err();
    assert!(matches!(err, QueryError::Malformed(_)));
}

#[test]
fn empty_template_is_rejected() {
    let err = constrain("   ", &QueryConstraints::new()).unwrap_err();
    assert!(err.to_string().contains("no root element"));
}
