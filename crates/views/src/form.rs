//! Form controls as they appear in a rendered tree.

use crate::tree::{find_all, Element, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    /// Radio group; holds the selectable values in order.
    Choice(Vec<String>),
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub control: FieldControl,
    pub required: bool,
}

impl FormField {
    pub fn accepts(&self, value: &str) -> bool {
        match &self.control {
            FieldControl::Choice(values) => values.iter().any(|v| v == value),
            FieldControl::Text => true,
        }
    }
}

/// Named form controls in document order, radios grouped by name.
pub fn form_fields(nodes: &[Node]) -> Vec<FormField> {
    let mut fields: Vec<FormField> = Vec::new();

    for element in find_all(nodes, is_named_control) {
        let Some(name) = element.get_attr("name") else {
            continue;
        };
        let required = element.has_attr("required");

        if element.tag == "textarea" {
            fields.push(FormField {
                name: name.to_string(),
                control: FieldControl::Text,
                required,
            });
            continue;
        }

        let value = element.get_attr("value").unwrap_or("on").to_string();
        match fields.iter_mut().find(|field| field.name == name) {
            Some(FormField {
                control: FieldControl::Choice(values),
                required: group_required,
                ..
            }) => {
                values.push(value);
                *group_required |= required;
            }
            Some(_) => {}
            None => fields.push(FormField {
                name: name.to_string(),
                control: FieldControl::Choice(vec![value]),
                required,
            }),
        }
    }

    fields
}

fn is_named_control(element: &Element) -> bool {
    let named = element.has_attr("name");
    match element.tag {
        "textarea" => named,
        "input" => named && element.get_attr("type") == Some("radio"),
        _ => false,
    }
}
