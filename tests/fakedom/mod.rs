#![allow(dead_code)]

//! A small in-memory DOM engine used to exercise the query facade.
//!
//! It keeps the parsed tree as a flat node arena, records every evaluated
//! expression, and implements just enough of XPath (the `//tag`,
//! `//*[@attr]`, `//*[@attr='v']` and `contains(@attr, 'v')` forms, with an
//! optional `.` prefix for relative scope) to prove the query-building and
//! scoping behavior of the facade.

use std::cell::RefCell;
use std::rc::Rc;

use markdom::{
    DocType, DomEngine, DomNode, EvaluationError, NodeKind, Parsed, ParseError, ParseOptions,
};

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    name: Option<String>,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

/// Node handle: a shared tree plus an index.
#[derive(Debug, Clone)]
pub struct FakeNode {
    tree: Rc<Tree>,
    id: usize,
}

impl FakeNode {
    pub fn new(tree: Rc<Tree>, id: usize) -> Self {
        FakeNode { tree, id }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    fn data(&self) -> &NodeData {
        &self.tree.nodes[self.id]
    }

    fn sibling_position(&self) -> Option<(usize, usize)> {
        let parent = self.data().parent?;
        let pos = self.tree.nodes[parent]
            .children
            .iter()
            .position(|&c| c == self.id)?;
        Some((parent, pos))
    }

    fn collect_text(&self, out: &mut String) {
        let data = self.data();
        if data.kind == NodeKind::Text {
            out.push_str(&data.text);
        }
        for &child in &data.children {
            FakeNode::new(self.tree.clone(), child).collect_text(out);
        }
    }
}

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl DomNode for FakeNode {
    fn kind(&self) -> NodeKind {
        self.data().kind
    }

    fn name(&self) -> Option<String> {
        self.data().name.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.data()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.data().attributes.clone()
    }

    fn parent_node(&self) -> Option<Self> {
        self.data()
            .parent
            .map(|id| FakeNode::new(self.tree.clone(), id))
    }

    fn first_child(&self) -> Option<Self> {
        self.data()
            .children
            .first()
            .map(|&id| FakeNode::new(self.tree.clone(), id))
    }

    fn next_sibling(&self) -> Option<Self> {
        let (parent, pos) = self.sibling_position()?;
        self.tree.nodes[parent]
            .children
            .get(pos + 1)
            .map(|&id| FakeNode::new(self.tree.clone(), id))
    }

    fn previous_sibling(&self) -> Option<Self> {
        let (parent, pos) = self.sibling_position()?;
        let pos = pos.checked_sub(1)?;
        self.tree.nodes[parent]
            .children
            .get(pos)
            .map(|&id| FakeNode::new(self.tree.clone(), id))
    }

    fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }
}

/// Builds a tree; node 0 is always the document node.
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                name: None,
                attributes: Vec::new(),
                text: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    fn push(&mut self, parent: usize, data: NodeData) -> usize {
        let id = self.nodes.len();
        self.nodes.push(data);
        self.nodes[parent].children.push(id);
        id
    }

    pub fn element(&mut self, parent: usize, name: &str, attributes: &[(&str, &str)]) -> usize {
        self.push(
            parent,
            NodeData {
                kind: NodeKind::Element,
                name: Some(name.to_string()),
                attributes: attributes
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
                text: String::new(),
                parent: Some(parent),
                children: Vec::new(),
            },
        )
    }

    pub fn set_attribute(&mut self, node: usize, name: &str, value: &str) {
        self.nodes[node]
            .attributes
            .push((name.to_string(), value.to_string()));
    }

    pub fn text(&mut self, parent: usize, text: &str) -> usize {
        self.push(
            parent,
            NodeData {
                kind: NodeKind::Text,
                name: None,
                attributes: Vec::new(),
                text: text.to_string(),
                parent: Some(parent),
                children: Vec::new(),
            },
        )
    }

    pub fn comment(&mut self, parent: usize, text: &str) -> usize {
        self.push(
            parent,
            NodeData {
                kind: NodeKind::Comment,
                name: None,
                attributes: Vec::new(),
                text: text.to_string(),
                parent: Some(parent),
                children: Vec::new(),
            },
        )
    }

    pub fn build(self) -> Rc<Tree> {
        Rc::new(Tree { nodes: self.nodes })
    }
}

enum Pred {
    Has(String),
    Eq(String, String),
    Contains(String, String),
}

fn parse_pred(body: &str) -> Option<Pred> {
    if let Some(rest) = body.strip_prefix("contains(@") {
        let rest = rest.strip_suffix(')')?;
        let (attr, value) = rest.split_once(',')?;
        let value = value.trim().strip_prefix('\'')?.strip_suffix('\'')?;
        return Some(Pred::Contains(attr.trim().to_string(), value.to_string()));
    }
    let body = body.strip_prefix('@')?;
    match body.split_once('=') {
        None => Some(Pred::Has(body.to_string())),
        Some((attr, value)) => {
            let value = value.strip_prefix('\'')?.strip_suffix('\'')?;
            Some(Pred::Eq(attr.to_string(), value.to_string()))
        }
    }
}

fn parse_query(query: &str) -> Option<(bool, String, Vec<Pred>)> {
    let (relative, rest) = if let Some(rest) = query.strip_prefix(".//") {
        (true, rest)
    } else if let Some(rest) = query.strip_prefix("//") {
        (false, rest)
    } else {
        return None;
    };

    let (tag, mut preds_str) = match rest.find('[') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    if tag.is_empty() {
        return None;
    }
    if tag != "*"
        && !tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }

    let mut preds = Vec::new();
    while !preds_str.is_empty() {
        let rest = preds_str.strip_prefix('[')?;
        let end = rest.find(']')?;
        preds.push(parse_pred(&rest[..end])?);
        preds_str = &rest[end + 1..];
    }
    Some((relative, tag.to_string(), preds))
}

fn matches(node: &FakeNode, tag: &str, preds: &[Pred]) -> bool {
    if node.kind() != NodeKind::Element {
        return false;
    }
    if tag != "*" && node.name().as_deref() != Some(tag) {
        return false;
    }
    preds.iter().all(|pred| match pred {
        Pred::Has(attr) => node.has_attribute(attr),
        Pred::Eq(attr, value) => node.attribute(attr).as_deref() == Some(value.as_str()),
        Pred::Contains(attr, value) => node
            .attribute(attr)
            .map(|v| v.contains(value.as_str()))
            .unwrap_or(false),
    })
}

fn descendants(tree: &Rc<Tree>, id: usize, out: &mut Vec<usize>) {
    for &child in &tree.nodes[id].children {
        out.push(child);
        descendants(tree, child, out);
    }
}

/// A canned engine: `parse` hands out a prebuilt tree (plus optional canned
/// errors), `evaluate` records every expression it sees.
pub struct FakeEngine {
    tree: Rc<Tree>,
    errors: Vec<ParseError>,
    fail: Option<ParseError>,
    queries: Rc<RefCell<Vec<String>>>,
}

impl FakeEngine {
    pub fn new(tree: Rc<Tree>) -> Self {
        FakeEngine {
            tree,
            errors: Vec::new(),
            fail: None,
            queries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_errors(tree: Rc<Tree>, errors: Vec<ParseError>) -> Self {
        FakeEngine {
            errors,
            ..FakeEngine::new(tree)
        }
    }

    pub fn failing(error: ParseError) -> Self {
        FakeEngine {
            fail: Some(error),
            ..FakeEngine::new(TreeBuilder::new().build())
        }
    }

    /// Handle onto the expression log, usable after the engine is moved
    /// into a `DomDocument`.
    pub fn query_log(&self) -> Rc<RefCell<Vec<String>>> {
        self.queries.clone()
    }
}

impl DomEngine for FakeEngine {
    type Node = FakeNode;
    type Document = Rc<Tree>;

    fn parse(
        &self,
        _doc_type: DocType,
        _source: &str,
        _options: &ParseOptions,
    ) -> Result<Parsed<Rc<Tree>>, ParseError> {
        if let Some(error) = &self.fail {
            return Err(error.clone());
        }
        Ok(Parsed {
            document: self.tree.clone(),
            errors: self.errors.clone(),
        })
    }

    fn evaluate(
        &self,
        document: &Rc<Tree>,
        query: &str,
        context: Option<&FakeNode>,
    ) -> Result<Vec<FakeNode>, EvaluationError> {
        self.queries.borrow_mut().push(query.to_string());

        let (relative, tag, preds) = parse_query(query)
            .ok_or_else(|| EvaluationError::new(format!("invalid expression: {}", query)))?;

        let start = match (relative, context) {
            (true, Some(node)) => node.id,
            _ => 0,
        };
        let mut candidates = Vec::new();
        descendants(document, start, &mut candidates);

        Ok(candidates
            .into_iter()
            .map(|id| FakeNode::new(document.clone(), id))
            .filter(|node| matches(node, &tag, &preds))
            .collect())
    }

    fn root(&self, document: &Rc<Tree>) -> Option<FakeNode> {
        Some(FakeNode::new(document.clone(), 0))
    }
}
