//! Accessibility tree extraction.
//!
//! Only elements with a [`Role`] appear in the tree; role-less containers
//! are transparent and their accessible descendants are lifted to the
//! nearest accessible ancestor.

use crate::element::{Content, Element, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessNode {
    pub id: String,
    pub role: Role,
    pub name: String,
    pub checked: Option<bool>,
    pub disabled: bool,
    pub children: Vec<AccessNode>,
}

impl AccessNode {
    /// Accessible descendants (depth-first) with the given role.
    pub fn find_all(&self, role: Role) -> Vec<&AccessNode> {
        let mut found = Vec::new();
        self.collect_role(role, &mut found);
        found
    }

    fn collect_role<'a>(&'a self, role: Role, found: &mut Vec<&'a AccessNode>) {
        for child in &self.children {
            if child.role == role {
                found.push(child);
            }
            child.collect_role(role, found);
        }
    }
}

/// Build the accessibility forest rooted at `root`.
pub fn accessibility_tree(root: &Element) -> Vec<AccessNode> {
    let mut nodes = Vec::new();
    collect(root, &mut nodes);
    nodes
}

fn collect(element: &Element, out: &mut Vec<AccessNode>) {
    if element.hidden {
        return;
    }

    let mut children = Vec::new();
    if let Content::Children(kids) = &element.content {
        for kid in kids {
            collect(kid, &mut children);
        }
    }

    if element.role == Role::None {
        out.extend(children);
        return;
    }

    // Groups are named by their author only, never by their contents.
    let name = match (&element.accessible_name, element.role) {
        (Some(name), _) => name.clone(),
        (None, Role::Group) => String::new(),
        (None, _) => text_content(element).trim().to_string(),
    };

    out.push(AccessNode {
        id: element.id.clone(),
        role: element.role,
        name,
        checked: element.checked,
        disabled: element.disabled,
        children,
    });
}

/// Concatenated text of an element and its descendants, space separated.
pub fn text_content(element: &Element) -> String {
    match &element.content {
        Content::Children(children) => children
            .iter()
            .filter(|c| !c.hidden)
            .map(text_content)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        other => other.plain_text().unwrap_or_default(),
    }
}
