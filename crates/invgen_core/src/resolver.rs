//! Invokability resolution.
//!
//! The category tree flattens into `path -> invokable` entries (paths joined
//! with `/`). A role identifier counts as invokable when it starts with any
//! invokable path rewritten to hyphens plus a trailing hyphen, e.g. path
//! `infra/db` covers `infra-db-postgres`. Prefix matching lets one category
//! path cover a whole family of role names without enumerating them.

use indexmap::IndexMap;

use crate::categories::CategoryNode;

/// Flatten the tree depth-first into `path -> invokable`.
///
/// Every node except the root contributes exactly one entry; the root has no
/// name and none of its own. Entries appear in document order, parents before
/// their children.
pub fn flatten(tree: &CategoryNode) -> IndexMap<String, bool> {
    let mut acc = IndexMap::new();
    walk(tree, &mut Vec::new(), &mut acc);
    acc
}

fn walk<'a>(node: &'a CategoryNode, prefix: &mut Vec<&'a str>, acc: &mut IndexMap<String, bool>) {
    for (name, child) in &node.roles {
        prefix.push(name);
        acc.insert(prefix.join("/"), child.invokable);
        walk(child, prefix, acc);
        prefix.pop();
    }
}

/// The prefix rules derived from all invokable paths: `/` becomes `-`, plus a
/// trailing `-`. Case-sensitive, no normalization.
pub fn invokable_prefixes(tree: &CategoryNode) -> Vec<String> {
    flatten(tree)
        .into_iter()
        .filter(|(_, invokable)| *invokable)
        .map(|(path, _)| path.replace('/', "-") + "-")
        .collect()
}

/// Whether `role_id` falls under any invokable category path. Overlapping
/// prefixes are a plain OR; multiplicity does not change the result.
pub fn is_invokable(role_id: &str, tree: &CategoryNode) -> bool {
    invokable_prefixes(tree)
        .iter()
        .any(|prefix| role_id.starts_with(prefix.as_str()))
}

/// Filter `roles` down to the invokable ones, preserving input order. The
/// prefix set is computed once, unlike per-role [`is_invokable`] calls.
pub fn filter_invokable(roles: Vec<String>, tree: &CategoryNode) -> Vec<String> {
    let prefixes = invokable_prefixes(tree);
    roles
        .into_iter()
        .filter(|role| prefixes.iter().any(|prefix| role.starts_with(prefix.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(yaml: &str) -> CategoryNode {
        serde_yaml::from_str(yaml).unwrap()
    }

    // ── flatten ──────────────────────────────────────────────────

    #[test]
    fn flatten_empty_tree_is_empty() {
        assert!(flatten(&CategoryNode::default()).is_empty());
    }

    #[test]
    fn flatten_one_entry_per_non_root_node() {
        let t = tree(
            r#"
roles:
  infra:
    invokable: true
    roles:
      db: {}
      web:
        invokable: true
  util: {}
"#,
        );
        let flat = flatten(&t);
        assert_eq!(flat.len(), 4);
        assert_eq!(flat["infra"], true);
        assert_eq!(flat["infra/db"], false);
        assert_eq!(flat["infra/web"], true);
        assert_eq!(flat["util"], false);
    }

    #[test]
    fn flatten_keys_are_slash_joined_paths() {
        let t = tree("roles:\n  a:\n    roles:\n      b:\n        roles:\n          c: {}\n");
        let flat = flatten(&t);
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "a/b", "a/b/c"]);
    }

    #[test]
    fn flatten_missing_invokable_defaults_to_false() {
        let t = tree("roles:\n  x: {}\n");
        assert_eq!(flatten(&t)["x"], false);
    }

    // ── is_invokable ─────────────────────────────────────────────

    #[test]
    fn matches_on_hyphenated_prefix() {
        let t = tree("roles:\n  infra:\n    invokable: true\n");
        assert!(is_invokable("infra-db", &t));
        assert!(is_invokable("infra-web-nginx", &t));
        assert!(!is_invokable("util-misc", &t));
    }

    #[test]
    fn requires_trailing_hyphen_after_the_path() {
        let t = tree("roles:\n  infra:\n    invokable: true\n");
        // The bare category name is not itself a covered role id.
        assert!(!is_invokable("infra", &t));
        assert!(!is_invokable("infrastructure", &t));
    }

    #[test]
    fn nested_paths_become_hyphen_chains() {
        let t = tree(
            "roles:\n  infra:\n    roles:\n      db:\n        invokable: true\n",
        );
        assert!(is_invokable("infra-db-postgres", &t));
        assert!(!is_invokable("infra-web", &t));
    }

    #[test]
    fn non_invokable_parent_does_not_block_invokable_child() {
        let t = tree(
            "roles:\n  svc:\n    invokable: false\n    roles:\n      mail:\n        invokable: true\n",
        );
        assert!(is_invokable("svc-mail-postfix", &t));
        assert!(!is_invokable("svc-web-nginx", &t));
    }

    #[test]
    fn overlapping_prefixes_are_a_plain_or() {
        let t = tree(
            "roles:\n  infra:\n    invokable: true\n    roles:\n      db:\n        invokable: true\n",
        );
        assert!(is_invokable("infra-db-postgres", &t));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let t = tree("roles:\n  Infra:\n    invokable: true\n");
        assert!(is_invokable("Infra-db", &t));
        assert!(!is_invokable("infra-db", &t));
    }

    #[test]
    fn empty_tree_makes_nothing_invokable() {
        assert!(!is_invokable("infra-db", &CategoryNode::default()));
    }

    // ── filter_invokable ─────────────────────────────────────────

    #[test]
    fn filter_preserves_catalog_order() {
        let t = tree("roles:\n  infra:\n    invokable: true\n");
        let roles = vec![
            "infra-web".to_string(),
            "util-misc".to_string(),
            "infra-db".to_string(),
        ];
        assert_eq!(filter_invokable(roles, &t), ["infra-web", "infra-db"]);
    }

    #[test]
    fn filter_agrees_with_is_invokable() {
        let t = tree(
            "roles:\n  infra:\n    invokable: true\n  svc:\n    roles:\n      mail:\n        invokable: true\n",
        );
        let roles = vec![
            "infra-db".to_string(),
            "svc-mail-postfix".to_string(),
            "svc-web".to_string(),
            "other".to_string(),
        ];
        let filtered = filter_invokable(roles.clone(), &t);
        for role in &roles {
            assert_eq!(filtered.contains(role), is_invokable(role, &t));
        }
    }
}
