//! Inventory document builders.
//!
//! Both builders are pure functions over `(roles, host)`; they do not
//! validate the host or the role list. Documents are insertion-ordered YAML
//! mappings so serialized key order matches construction order.

use serde_yaml::{Mapping, Value};

use crate::error::InvgenError;

/// The response filename is a constant regardless of style.
pub const INVENTORY_FILENAME: &str = "inventory.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryStyle {
    Group,
    Hostvars,
}

impl std::str::FromStr for InventoryStyle {
    type Err = InvgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(Self::Group),
            "hostvars" => Ok(Self::Hostvars),
            _ => Err(InvgenError::InvalidInput(
                "style must be 'group' or 'hostvars'".to_string(),
            )),
        }
    }
}

/// Group-style inventory: the host sits under `all`, every role becomes an
/// empty child group of `all` plus a top-level group holding the host
/// directly. Duplicate role names collapse last-write-wins.
pub fn build_group(roles: &[String], host: &str) -> Value {
    let mut children = Mapping::new();
    for role in roles {
        children.insert(Value::String(role.clone()), Value::Mapping(Mapping::new()));
    }

    let mut all = Mapping::new();
    all.insert("hosts".into(), host_list(host));
    all.insert("children".into(), Value::Mapping(children));

    let mut doc = Mapping::new();
    doc.insert("all".into(), Value::Mapping(all));
    for role in roles {
        let mut group = Mapping::new();
        group.insert("hosts".into(), host_list(host));
        doc.insert(Value::String(role.clone()), Value::Mapping(group));
    }
    Value::Mapping(doc)
}

/// Hostvars-style inventory: a single host under `all` and a `_meta` block
/// binding `invokable_applications` to the full role list, order and
/// duplicates preserved.
pub fn build_hostvars(roles: &[String], host: &str) -> Value {
    let mut all = Mapping::new();
    all.insert("hosts".into(), host_list(host));

    let mut vars = Mapping::new();
    vars.insert(
        "invokable_applications".into(),
        Value::Sequence(roles.iter().map(|r| Value::String(r.clone())).collect()),
    );
    let mut by_host = Mapping::new();
    by_host.insert(Value::String(host.to_string()), Value::Mapping(vars));
    let mut meta = Mapping::new();
    meta.insert("hostvars".into(), Value::Mapping(by_host));

    let mut doc = Mapping::new();
    doc.insert("all".into(), Value::Mapping(all));
    doc.insert("_meta".into(), Value::Mapping(meta));
    Value::Mapping(doc)
}

/// Serialize a built document to YAML text.
pub fn render(doc: &Value) -> Result<String, InvgenError> {
    serde_yaml::to_string(doc)
        .map_err(|e| InvgenError::Internal(anyhow::anyhow!("inventory serialization failed: {e}")))
}

fn host_list(host: &str) -> Value {
    Value::Sequence(vec![Value::String(host.to_string())])
}
