use pretty_assertions::assert_eq;
use witsml_query::{constrain, render_template, QueryConstraints};
use witsml_types::UnitProfile;

const SKELETON: &str = r#"<logs><log uidWell="%parent.1%" uidWellbore="%parent.0%" uid="%uid%"><startIndex uom="%uom:length%"/></log></logs>"#;

fn chain(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn ids_are_substituted_closest_ancestor_first() {
    let out = render_template(SKELETON, "L1", &chain(&["B1", "W1"]), UnitProfile::ServerDefault);
    assert_eq!(
        out,
        r#"<logs><log uidWell="W1" uidWellbore="B1" uid="L1"><startIndex uom=""/></log></logs>"#
    );
}

#[test]
fn missing_ids_become_wildcards() {
    let out = render_template(SKELETON, "", &[], UnitProfile::ServerDefault);
    assert!(out.contains(r#"uidWell="" uidWellbore="" uid="""#));
    assert!(!out.contains('%'));
}

#[test]
fn unit_profile_fills_uom() {
    let metric = render_template(SKELETON, "", &[], UnitProfile::Metric);
    assert!(metric.contains(r#"uom="m""#));
    let imperial = render_template(SKELETON, "", &[], UnitProfile::Imperial);
    assert!(imperial.contains(r#"uom="ft""#));
}

#[test]
fn ids_are_escaped() {
    let out = render_template(SKELETON, r#"a"b&c"#, &[], UnitProfile::ServerDefault);
    assert!(out.contains("a&quot;b&amp;c"));
    // Still well-formed for the constraint engine.
    let constrained = constrain(&out, &QueryConstraints::new()).unwrap();
    assert!(constrained.contains("uid=\"a&quot;b&amp;c\""));
}
