//! The constraint engine.
//!
//! Rewrites a rendered template in three passes, always in this order:
//!
//! 1. inclusion/exclusion (mark and sweep)
//! 2. element value constraints (clone the group on repeats)
//! 3. attribute value constraints
//!
//! The engine works on its own parsed copy of the template and only returns
//! text once every pass succeeded.

use std::collections::HashSet;
use tracing::debug;

use crate::constraint::QueryConstraints;
use crate::error::{QueryError, QueryResult};
use crate::tree::{NodeId, XmlTree};

/// Applies `constraints` to `template` and returns the query text.
pub fn constrain(template: &str, constraints: &QueryConstraints) -> QueryResult<String> {
    let mut tree = XmlTree::parse(template)?;

    let removed = select(&mut tree, constraints.includes(), constraints.excludes());
    debug!("Selection detached {} element(s)", removed);

    for constraint in constraints.values() {
        pin_value(&mut tree, &constraint.element, &constraint.value)?;
    }

    for constraint in constraints.attributes() {
        let targets = tree.find_all(&constraint.element);
        let mut applied = 0;
        for target in targets {
            if tree.set_attribute(target, &constraint.attribute, constraint.value.as_str()) {
                applied += 1;
            }
        }
        if applied == 0 {
            debug!(
                "No <{}> carries attribute {}; constraint ignored",
                constraint.element, constraint.attribute
            );
        }
    }

    tree.to_xml()
}

/// Inclusion/exclusion pass. Returns the number of elements detached.
///
/// Every element starts in the removal set. Each element that qualifies
/// for inclusion takes itself and all its ancestors out of the set; what
/// remains is detached afterwards, so nothing is removed while the tree is
/// being walked.
fn select(tree: &mut XmlTree, includes: &[String], excludes: &[String]) -> usize {
    if includes.is_empty() && excludes.is_empty() {
        return 0;
    }

    let elements = tree.elements();
    let mut removal: HashSet<NodeId> = elements.iter().copied().collect();

    for &id in &elements {
        if qualifies(tree, id, includes, excludes) {
            removal.remove(&id);
            for ancestor in tree.ancestors(id) {
                removal.remove(&ancestor);
            }
        }
    }
    removal.remove(&tree.root());

    // Document order keeps the sweep deterministic.
    let doomed: Vec<NodeId> = elements
        .into_iter()
        .filter(|id| removal.contains(id))
        .collect();
    for id in &doomed {
        tree.detach(*id);
    }
    doomed.len()
}

fn qualifies(tree: &XmlTree, id: NodeId, includes: &[String], excludes: &[String]) -> bool {
    let lineage: Vec<&str> = std::iter::once(id)
        .chain(tree.ancestors(id))
        .map(|n| tree.local_name(n))
        .collect();

    let listed = |names: &[String]| lineage.iter().any(|n| names.iter().any(|name| name == n));

    (includes.is_empty() || listed(includes)) && !listed(excludes)
}

/// Element value pass for one constraint.
///
/// The first element with the name takes the value if it is still empty.
/// Otherwise its enclosing group (the parent) is deep-cloned, the clone's
/// copy of the element gets the value, and the clone is appended to the
/// grandparent. The protocol only matches one exact value per element
/// occurrence, so repeated values become sibling groups.
fn pin_value(tree: &mut XmlTree, element: &str, value: &str) -> QueryResult<()> {
    let Some(target) = tree.find_first(element) else {
        debug!("No <{}> in template; value constraint ignored", element);
        return Ok(());
    };

    if tree.text(target).is_empty() {
        tree.set_text(target, value);
        return Ok(());
    }

    let unclonable = || QueryError::Unclonable {
        element: element.to_string(),
    };
    let group = tree.parent(target).ok_or_else(unclonable)?;
    let holder = tree.parent(group).ok_or_else(unclonable)?;
    let position = tree
        .children(group)
        .iter()
        .position(|child| *child == target)
        .ok_or_else(unclonable)?;

    let copy = tree.deep_clone(group);
    let copied_target = tree.children(copy)[position];
    tree.set_text(copied_target, value);
    tree.append_child(holder, copy);

    debug!(
        "Repeated constraint on <{}>: appended sibling <{}> group",
        element,
        tree.local_name(group)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &XmlTree) -> Vec<String> {
        tree.elements()
            .into_iter()
            .map(|id| tree.local_name(id).to_string())
            .collect()
    }

    #[test]
    fn empty_constraint_lists_detach_nothing() {
        let mut tree = XmlTree::parse("<a><b/><c/></a>").unwrap();
        assert_eq!(select(&mut tree, &[], &[]), 0);
        assert_eq!(names(&tree), ["a", "b", "c"]);
    }

    #[test]
    fn root_survives_an_include_that_matches_nothing() {
        let mut tree = XmlTree::parse("<a><b/><c/></a>").unwrap();
        select(&mut tree, &["zzz".to_string()], &[]);
        assert_eq!(names(&tree), ["a"]);
    }

    #[test]
    fn qualifies_checks_ancestors() {
        let tree = XmlTree::parse("<a><b><c/></b></a>").unwrap();
        let c = tree.find_first("c").unwrap();
        assert!(qualifies(&tree, c, &["b".to_string()], &[]));
        assert!(!qualifies(&tree, c, &[], &["a".to_string()]));
    }
}
