//! Arena-backed document shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use css_cascade::{
    CascadeAdapter, DocumentMode, MediumEvaluator, Origin, Rule, Stylesheet, StylesheetSet,
};
use css_orchestrator::{StyleComputer, StyleConfig, StyleTree};
use css_properties::{DeclarationBlock, PropertyId, Value};
use css_selectors::{CompoundSelector, ElementAdapter, ElementState};
use indextree::{Arena, NodeId};

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element(String),
    Text(String),
}

#[derive(Debug, Clone, Default)]
pub struct TestNode {
    pub kind: NodeKind,
    pub attrs: Vec<(String, String)>,
    pub state: ElementState,
    pub inline: Option<DeclarationBlock>,
    pub hints: Option<DeclarationBlock>,
    /// Simulates a removal racing with a style pass: the node stays linked
    /// but reports itself disconnected.
    pub detached: bool,
}

pub struct TestDocument {
    arena: Arena<TestNode>,
    document: NodeId,
}

impl TestDocument {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let document = arena.new_node(TestNode::default());
        Self { arena, document }
    }

    /// Append an element under `parent`, or under the document node.
    pub fn element(&mut self, parent: Option<NodeId>, tag: &str) -> NodeId {
        let node = self.arena.new_node(TestNode {
            kind: NodeKind::Element(tag.to_owned()),
            ..TestNode::default()
        });
        parent.unwrap_or(self.document).append(node, &mut self.arena);
        node
    }

    pub fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.arena.new_node(TestNode {
            kind: NodeKind::Text(text.to_owned()),
            ..TestNode::default()
        });
        parent.append(node, &mut self.arena);
        node
    }

    fn node_mut(&mut self, node: NodeId) -> &mut TestNode {
        self.arena[node].get_mut()
    }

    fn node(&self, node: NodeId) -> &TestNode {
        self.arena[node].get()
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        let attrs = &mut self.node_mut(node).attrs;
        if let Some(slot) = attrs.iter_mut().find(|(existing, _)| existing == name) {
            value.clone_into(&mut slot.1);
        } else {
            attrs.push((name.to_owned(), value.to_owned()));
        }
    }

    pub fn set_inline(&mut self, node: NodeId, block: DeclarationBlock) {
        self.node_mut(node).inline = Some(block);
    }

    pub fn set_hints(&mut self, node: NodeId, block: DeclarationBlock) {
        self.node_mut(node).hints = Some(block);
    }

    pub fn set_state(&mut self, node: NodeId, state: ElementState) {
        self.node_mut(node).state = state;
    }

    pub fn mark_detached(&mut self, node: NodeId) {
        self.node_mut(node).detached = true;
    }

    pub fn remove(&mut self, node: NodeId) {
        node.remove_subtree(&mut self.arena);
    }

    pub fn key(&self, node: NodeId) -> u64 {
        self.unique_key(node)
    }

    fn is_element(&self, node: NodeId) -> bool {
        matches!(self.node(node).kind, NodeKind::Element(_))
    }
}

impl ElementAdapter for TestDocument {
    type Handle = NodeId;

    fn unique_key(&self, element: NodeId) -> u64 {
        usize::from(element) as u64
    }

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        element
            .parent(&self.arena)
            .filter(|parent| self.is_element(*parent))
    }

    fn previous_sibling_element(&self, element: NodeId) -> Option<NodeId> {
        element
            .preceding_siblings(&self.arena)
            .skip(1)
            .find(|sibling| self.is_element(*sibling))
    }

    fn next_sibling_element(&self, element: NodeId) -> Option<NodeId> {
        element
            .following_siblings(&self.arena)
            .skip(1)
            .find(|sibling| self.is_element(*sibling))
    }

    fn tag_name(&self, element: NodeId) -> &str {
        match &self.node(element).kind {
            NodeKind::Element(tag) => tag,
            NodeKind::Document | NodeKind::Text(_) => "",
        }
    }

    fn element_id(&self, element: NodeId) -> Option<&str> {
        self.attr(element, "id").filter(|id| !id.is_empty())
    }

    fn for_each_class<F: FnMut(&str)>(&self, element: NodeId, mut callback: F) {
        if let Some(classes) = self.attr(element, "class") {
            for class in classes.split_ascii_whitespace() {
                callback(class);
            }
        }
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        self.node(element)
            .attrs
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn state(&self, element: NodeId) -> ElementState {
        self.node(element).state
    }

    fn is_empty(&self, element: NodeId) -> bool {
        element
            .children(&self.arena)
            .all(|child| matches!(&self.node(child).kind, NodeKind::Text(text) if text.is_empty()))
    }
}

impl CascadeAdapter for TestDocument {
    fn inline_style(&self, element: NodeId) -> Option<&DeclarationBlock> {
        self.node(element).inline.as_ref()
    }

    fn presentational_hints(&self, element: NodeId) -> Option<&DeclarationBlock> {
        self.node(element).hints.as_ref()
    }
}

impl StyleTree for TestDocument {
    fn first_child_element(&self, element: NodeId) -> Option<NodeId> {
        element
            .children(&self.arena)
            .find(|child| self.is_element(*child))
    }

    fn is_connected(&self, element: NodeId) -> bool {
        !element.is_removed(&self.arena)
            && element
                .ancestors(&self.arena)
                .all(|node| !self.node(node).detached)
            && element.ancestors(&self.arena).last() == Some(self.document)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rule for a single compound selector.
pub fn rule(selector: CompoundSelector, declarations: &[(PropertyId, Value)]) -> Rule {
    Rule::new(
        selector,
        declarations
            .iter()
            .cloned()
            .fold(DeclarationBlock::new(), |block, (property, value)| {
                block.with(property, value)
            }),
    )
}

pub fn author_sheet(rules: Vec<Rule>) -> Stylesheet {
    rules
        .into_iter()
        .fold(Stylesheet::new(Origin::Author), Stylesheet::with_rule)
}

/// Computer over author rules only, so expectations do not depend on the
/// default sheet.
pub fn author_computer(config: StyleConfig, rules: Vec<Rule>) -> StyleComputer {
    let set = StylesheetSet::new(DocumentMode::Standards).with_sheet(author_sheet(rules));
    StyleComputer::new(config, &set, &MediumEvaluator::screen())
}
