//! Inspector model - property reads and header for the selection.

use std::fmt;

use crate::scene::{NodeId, Property, PropertyValue, SceneGraph};

/// A property read across the whole selection.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyReading {
    /// Nothing selected, or a selected node lacks the property
    Empty,
    /// Every selected node holds the same value
    Uniform(PropertyValue),
    /// Values differ; one entry per selected node
    Mixed(Vec<PropertyValue>),
}

impl PropertyReading {
    pub fn is_mixed(&self) -> bool {
        matches!(self, PropertyReading::Mixed(_))
    }

    pub fn value(&self) -> Option<PropertyValue> {
        match self {
            PropertyReading::Uniform(value) => Some(*value),
            _ => None,
        }
    }
}

/// Read `property` from every node in `selection`.
pub fn read_property(scene: &SceneGraph, selection: &[NodeId], property: Property) -> PropertyReading {
    let values: Option<Vec<PropertyValue>> = selection
        .iter()
        .map(|&id| scene.get(id).and_then(|node| node.get_property(property)))
        .collect();

    match values {
        Some(values) if !values.is_empty() => {
            let first = values[0];
            if values.iter().all(|v| *v == first) {
                PropertyReading::Uniform(first)
            } else {
                PropertyReading::Mixed(values)
            }
        }
        _ => PropertyReading::Empty,
    }
}

/// One visible row of the inspector.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyEntry {
    pub property: Property,
    pub reading: PropertyReading,
}

/// Rows to show for the selection: the properties every selected node
/// supports, in the first node's order. Empty when nothing is selected,
/// which hides the panel.
pub fn panel_entries(scene: &SceneGraph, selection: &[NodeId]) -> Vec<PropertyEntry> {
    let Some(first) = selection.first().and_then(|&id| scene.get(id)) else {
        return Vec::new();
    };

    first
        .kind
        .option_keys()
        .iter()
        .copied()
        .filter(|&property| {
            selection
                .iter()
                .all(|&id| scene.get(id).is_some_and(|node| node.supports(property)))
        })
        .map(|property| PropertyEntry {
            property,
            reading: read_property(scene, selection, property),
        })
        .collect()
}

/// One ancestor in the header path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// Steps up from the selected node; 0 is the node itself
    pub offset: usize,
}

/// Inspector header text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionHeader {
    Nothing,
    Multiple(usize),
    /// Path from the top-level ancestor down to the single selected node
    Path(Vec<Breadcrumb>),
}

impl SelectionHeader {
    pub fn build(scene: &SceneGraph, selection: &[NodeId]) -> Self {
        match selection {
            [] => SelectionHeader::Nothing,
            [single] => {
                let mut crumbs = Vec::new();
                let mut current = scene.get(*single);
                let mut offset = 0;
                while let Some(node) = current {
                    let Some(parent) = node.parent() else { break };
                    crumbs.push(Breadcrumb {
                        label: node.kind.type_name().to_string(),
                        offset,
                    });
                    offset += 1;
                    current = scene.get(parent);
                }
                crumbs.reverse();
                SelectionHeader::Path(crumbs)
            }
            many => SelectionHeader::Multiple(many.len()),
        }
    }
}

impl fmt::Display for SelectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionHeader::Nothing => f.write_str("No objects selected"),
            SelectionHeader::Multiple(n) => write!(f, "{} objects selected", n),
            SelectionHeader::Path(crumbs) => {
                for (i, crumb) in crumbs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" / ")?;
                    }
                    f.write_str(&crumb.label)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Layer, Node, ShapeKind};

    fn scene() -> (SceneGraph, NodeId, NodeId, NodeId) {
        let mut scene = SceneGraph::new();
        let root = scene.create_root(Layer::Scene);
        let group = scene.add(root, Node::anchor()).unwrap();
        let a = scene.add(group, Node::new(ShapeKind::Ellipse).with_diameter(2.0)).unwrap();
        let b = scene.add(root, Node::new(ShapeKind::Cone).with_diameter(2.0).with_stroke(3.0)).unwrap();
        (scene, group, a, b)
    }

    #[test]
    fn test_read_property_uniform_and_mixed() {
        let (scene, _, a, b) = scene();
        assert_eq!(
            read_property(&scene, &[a, b], Property::Diameter),
            PropertyReading::Uniform(PropertyValue::Number(2.0))
        );
        assert_eq!(
            read_property(&scene, &[a, b], Property::Stroke),
            PropertyReading::Mixed(vec![PropertyValue::Number(1.0), PropertyValue::Number(3.0)])
        );
        assert_eq!(read_property(&scene, &[], Property::Stroke), PropertyReading::Empty);
    }

    #[test]
    fn test_unsupported_property_reads_empty() {
        let (scene, group, a, _) = scene();
        assert_eq!(read_property(&scene, &[group, a], Property::Diameter), PropertyReading::Empty);
    }

    #[test]
    fn test_entries_are_shared_properties() {
        let (scene, group, a, b) = scene();
        let entries = panel_entries(&scene, &[a, b]);
        let props: Vec<_> = entries.iter().map(|e| e.property).collect();
        assert!(props.contains(&Property::Diameter));
        assert!(!props.contains(&Property::Length));

        let entries = panel_entries(&scene, &[group, a]);
        let props: Vec<_> = entries.iter().map(|e| e.property).collect();
        assert_eq!(props, vec![Property::Translate, Property::Rotate, Property::Scale]);

        assert!(panel_entries(&scene, &[]).is_empty());
    }

    #[test]
    fn test_header_text() {
        let (scene, _, a, b) = scene();
        assert_eq!(SelectionHeader::build(&scene, &[]).to_string(), "No objects selected");
        assert_eq!(SelectionHeader::build(&scene, &[a, b]).to_string(), "2 objects selected");

        let header = SelectionHeader::build(&scene, &[a]);
        assert_eq!(header.to_string(), "Anchor / Ellipse");
        let SelectionHeader::Path(crumbs) = header else { panic!("expected a path") };
        assert_eq!(crumbs[0].offset, 1);
        assert_eq!(crumbs[1].offset, 0);
    }
}
