use indexmap::IndexMap;

use crate::engine::{DomNode, NodeKind};

/// Element-filtered traversal over an external parse tree.
///
/// These are pure pointer-chasing walks over the raw [`DomNode`] links,
/// skipping text and comment nodes; no XPath is involved. The trait is an
/// explicit, enumerated capability set and is implemented for every
/// [`DomNode`].
pub trait NodeAccess: DomNode {
    /// The lowercased tag name, for element nodes.
    fn tag(&self) -> Option<String> {
        self.name().map(|name| name.to_lowercase())
    }

    /// All attributes as an ordered name-to-value map; [`None`] when the
    /// node carries no attributes.
    fn attribute_map(&self) -> Option<IndexMap<String, String>> {
        let attributes: IndexMap<String, String> = self.attributes().into_iter().collect();
        if attributes.is_empty() {
            None
        } else {
            Some(attributes)
        }
    }

    /// The next sibling element, skipping non-element siblings.
    fn next(&self) -> Option<Self> {
        let mut next = self.next_sibling();
        while let Some(node) = next {
            if node.kind() == NodeKind::Element {
                return Some(node);
            }
            next = node.next_sibling();
        }
        None
    }

    /// All following sibling elements, nearest first.
    fn next_all(&self) -> Vec<Self> {
        let mut nexts = Vec::new();
        let mut next = self.next_sibling();
        while let Some(node) = next {
            if node.kind() == NodeKind::Element {
                nexts.push(node.clone());
            }
            next = node.next_sibling();
        }
        nexts
    }

    /// The previous sibling element, skipping non-element siblings.
    fn prev(&self) -> Option<Self> {
        let mut prev = self.previous_sibling();
        while let Some(node) = prev {
            if node.kind() == NodeKind::Element {
                return Some(node);
            }
            prev = node.previous_sibling();
        }
        None
    }

    /// All preceding sibling elements, nearest first.
    fn prev_all(&self) -> Vec<Self> {
        let mut prevs = Vec::new();
        let mut prev = self.previous_sibling();
        while let Some(node) = prev {
            if node.kind() == NodeKind::Element {
                prevs.push(node.clone());
            }
            prev = node.previous_sibling();
        }
        prevs
    }

    /// The nearest element or document ancestor.
    fn parent(&self) -> Option<Self> {
        self.parents(Some(1)).into_iter().next()
    }

    /// Ancestors of element or document kind, nearest first, up to `limit`
    /// raw parent steps when given. A limit of zero means no limit.
    fn parents(&self, limit: Option<usize>) -> Vec<Self> {
        let limit = limit.filter(|&limit| limit > 0);
        let mut parents = Vec::new();
        let mut parent = self.parent_node();
        let mut i = 0;

        while let Some(node) = parent {
            match node.kind() {
                NodeKind::Element | NodeKind::Document => parents.push(node.clone()),
                _ => {}
            }
            parent = node.parent_node();

            i += 1;
            if let Some(limit) = limit {
                if i >= limit {
                    break;
                }
            }
        }
        parents
    }

    /// The `i`-th child element, if any.
    fn child(&self, i: usize) -> Option<Self> {
        self.children().into_iter().nth(i)
    }

    /// All child elements, in document order.
    fn children(&self) -> Vec<Self> {
        let mut children = Vec::new();
        let mut child = self.first_child();
        while let Some(node) = child {
            if node.kind() == NodeKind::Element {
                children.push(node.clone());
            }
            child = node.next_sibling();
        }
        children
    }

    /// Trimmed text content; [`None`] when blank.
    fn text_trimmed(&self) -> Option<String> {
        let text = self.text();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl<N: DomNode> NodeAccess for N {}
