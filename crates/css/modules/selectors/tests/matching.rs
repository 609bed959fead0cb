#![cfg(test)]

use css_selectors::{
    AncestorFilter, AttrOperator, AttributeSelector, Combinator, ComplexSelector,
    CompoundSelector, DependencyKinds, DependencyTable, ElementAdapter, ElementState, MatchCache,
    MatchingContext, Nth, PseudoClass, PseudoElement, QuirksMode, SelectorId, SelectorMatch,
    SimpleSelector, match_selector, matches_complex,
};

/// One element of the test tree.
#[derive(Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    state: ElementState,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Flat arena tree; index 0 is the root element.
#[derive(Default)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn with_root(tag: &str) -> Self {
        Self {
            nodes: vec![Node {
                tag: tag.to_owned(),
                ..Node::default()
            }],
        }
    }

    fn add(&mut self, parent: usize, tag: &str) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            tag: tag.to_owned(),
            parent: Some(parent),
            ..Node::default()
        });
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(index);
        }
        index
    }

    fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    fn sibling(&self, element: usize, offset: isize) -> Option<usize> {
        let parent = self.node(element).parent?;
        let siblings = &self.node(parent).children;
        let position = siblings.iter().position(|&child| child == element)?;
        let target = position.checked_add_signed(offset)?;
        siblings.get(target).copied()
    }
}

impl ElementAdapter for Tree {
    type Handle = usize;

    fn unique_key(&self, element: usize) -> u64 {
        element as u64
    }

    fn parent(&self, element: usize) -> Option<usize> {
        self.node(element).parent
    }

    fn previous_sibling_element(&self, element: usize) -> Option<usize> {
        self.sibling(element, -1)
    }

    fn next_sibling_element(&self, element: usize) -> Option<usize> {
        self.sibling(element, 1)
    }

    fn tag_name(&self, element: usize) -> &str {
        &self.node(element).tag
    }

    fn element_id(&self, element: usize) -> Option<&str> {
        self.node(element).id.as_deref()
    }

    fn for_each_class<F: FnMut(&str)>(&self, element: usize, mut callback: F) {
        for class in &self.node(element).classes {
            callback(class);
        }
    }

    fn attr(&self, element: usize, name: &str) -> Option<&str> {
        self.node(element)
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    fn state(&self, element: usize) -> ElementState {
        self.node(element).state
    }

    fn is_empty(&self, element: usize) -> bool {
        self.node(element).children.is_empty()
    }
}

/// `<html><body><ul><li/><li class="x"/><li/></ul><p id="intro"/></body></html>`
fn list_tree() -> (Tree, [usize; 6]) {
    let mut tree = Tree::with_root("html");
    let body = tree.add(0, "body");
    let list = tree.add(body, "ul");
    let first = tree.add(list, "li");
    let second = tree.add(list, "li");
    let third = tree.add(list, "li");
    tree.node_mut(second).classes.push("x".into());
    let para = tree.add(body, "p");
    tree.node_mut(para).id = Some("intro".into());
    (tree, [body, list, first, second, third, para])
}

#[test]
fn descendant_and_child_combinators() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (tree, [_, _, first, _, _, para]) = list_tree();
    let body_li = ComplexSelector::compound(CompoundSelector::tag("body"))
        .then(Combinator::Descendant, CompoundSelector::tag("li"));
    let body_child_li = ComplexSelector::compound(CompoundSelector::tag("body"))
        .then(Combinator::Child, CompoundSelector::tag("li"));
    assert!(matches_complex(&tree, first, &body_li));
    assert!(!matches_complex(&tree, first, &body_child_li));
    assert!(!matches_complex(&tree, para, &body_li));
}

#[test]
fn empty_type_selector_matches_nothing() {
    let (tree, [body, list, first, second, third, para]) = list_tree();
    let nameless = || CompoundSelector::from_simples(vec![SimpleSelector::Type(String::new())]);
    let alone = ComplexSelector::compound(nameless());
    let as_ancestor = ComplexSelector::compound(nameless())
        .then(Combinator::Descendant, CompoundSelector::tag("li"));
    for element in [0, body, list, first, second, third, para] {
        assert!(!matches_complex(&tree, element, &alone), "element {element}");
        assert!(!matches_complex(&tree, element, &as_ancestor), "element {element}");
    }
}

#[test]
fn sibling_combinators() {
    let (tree, [_, _, first, second, third, _]) = list_tree();
    let after_x = ComplexSelector::compound(CompoundSelector::class("x"))
        .then(Combinator::AdjacentSibling, CompoundSelector::tag("li"));
    let later_than_x = ComplexSelector::compound(CompoundSelector::class("x"))
        .then(Combinator::GeneralSibling, CompoundSelector::tag("li"));
    assert!(matches_complex(&tree, third, &after_x));
    assert!(!matches_complex(&tree, first, &after_x));
    assert!(matches_complex(&tree, third, &later_than_x));
    assert!(!matches_complex(&tree, second, &later_than_x));
}

#[test]
fn missing_ancestor_fails_the_whole_subtree() {
    let (tree, [_, _, first, _, _, _]) = list_tree();
    let table_li = ComplexSelector::compound(CompoundSelector::tag("table"))
        .then(Combinator::Descendant, CompoundSelector::tag("li"));
    let mut ctx = MatchingContext::new(QuirksMode::NoQuirks);
    assert_eq!(
        match_selector(&tree, first, &table_li, None, &mut ctx),
        SelectorMatch::FailsSubtree
    );
    // Subject mismatch only fails locally.
    assert_eq!(
        match_selector(&tree, 0, &table_li, None, &mut ctx),
        SelectorMatch::FailsLocal
    );
}

#[test]
fn structural_pseudo_classes() {
    let (tree, [_, list, first, second, third, para]) = list_tree();
    let check = |element: usize, pseudo: PseudoClass| {
        matches_complex(
            &tree,
            element,
            &ComplexSelector::compound(CompoundSelector::universal().with_pseudo_class(pseudo)),
        )
    };
    assert!(check(first, PseudoClass::FirstChild));
    assert!(!check(second, PseudoClass::FirstChild));
    assert!(check(third, PseudoClass::LastChild));
    assert!(check(second, PseudoClass::NthChild(Nth::even())));
    assert!(check(third, PseudoClass::NthChild(Nth::odd())));
    assert!(check(first, PseudoClass::NthLastChild(Nth::new(0, 3))));
    assert!(check(list, PseudoClass::FirstOfType));
    assert!(check(para, PseudoClass::OnlyOfType));
    assert!(!check(first, PseudoClass::OnlyOfType));
    assert!(check(first, PseudoClass::Empty));
    assert!(!check(list, PseudoClass::Empty));
    assert!(check(0, PseudoClass::Root));
}

#[test]
fn attribute_operators() {
    let mut tree = Tree::with_root("html");
    let link = tree.add(0, "a");
    tree.node_mut(link).attrs = vec![
        ("href".into(), "https://example.org/docs.pdf".into()),
        ("rel".into(), "noopener external".into()),
        ("hreflang".into(), "en-US".into()),
    ];
    let check = |attr: AttributeSelector| {
        matches_complex(
            &tree,
            link,
            &ComplexSelector::compound(CompoundSelector::tag("a").with_attr(attr)),
        )
    };
    assert!(check(AttributeSelector::exists("href")));
    assert!(!check(AttributeSelector::exists("title")));
    assert!(check(AttributeSelector::new("rel", AttrOperator::Includes, "external")));
    assert!(!check(AttributeSelector::new("rel", AttrOperator::Includes, "extern")));
    assert!(check(AttributeSelector::new("hreflang", AttrOperator::DashMatch, "en")));
    assert!(check(AttributeSelector::new("href", AttrOperator::Prefix, "https:")));
    assert!(check(AttributeSelector::new("href", AttrOperator::Suffix, ".pdf")));
    assert!(check(AttributeSelector::new("href", AttrOperator::Substring, "example")));
    assert!(!check(AttributeSelector::new("href", AttrOperator::Substring, "")));
    let mut folded = AttributeSelector::new("hreflang", AttrOperator::Equals, "EN-us");
    folded.case_insensitive = true;
    assert!(check(folded));
}

#[test]
fn pseudo_element_only_matches_on_the_subject() {
    let (tree, [_, list, first, _, _, _]) = list_tree();
    let before = ComplexSelector::compound(
        CompoundSelector::tag("li").with_pseudo_element(PseudoElement::Before),
    );
    let mut ctx = MatchingContext::new(QuirksMode::NoQuirks);
    assert!(match_selector(&tree, first, &before, None, &mut ctx).is_match());
    assert_eq!(ctx.dynamic_pseudo(), Some(PseudoElement::Before));

    let misplaced = ComplexSelector::compound(
        CompoundSelector::tag("ul").with_pseudo_element(PseudoElement::Before),
    )
    .then(Combinator::Child, CompoundSelector::tag("li"));
    assert!(!match_selector(&tree, first, &misplaced, None, &mut ctx).is_match());
    assert_eq!(ctx.dynamic_pseudo(), None);
    assert!(!matches_complex(&tree, list, &before));
}

#[test]
fn quirks_mode_folds_case_and_restricts_bare_hover() {
    let (mut tree, [body, _, _, second, _, para]) = list_tree();
    tree.node_mut(body).state = ElementState::HOVER;
    tree.node_mut(para).state = ElementState::HOVER | ElementState::FOCUSABLE;
    let upper_class = ComplexSelector::compound(CompoundSelector::class("X"));
    let bare_hover = ComplexSelector::compound(
        CompoundSelector::universal().with_pseudo_class(PseudoClass::Hover),
    );

    let mut standards = MatchingContext::new(QuirksMode::NoQuirks);
    assert!(!match_selector(&tree, second, &upper_class, None, &mut standards).is_match());
    assert!(match_selector(&tree, body, &bare_hover, None, &mut standards).is_match());

    let mut quirks = MatchingContext::new(QuirksMode::Quirks);
    assert!(match_selector(&tree, second, &upper_class, None, &mut quirks).is_match());
    assert!(!match_selector(&tree, body, &bare_hover, None, &mut quirks).is_match());
    assert!(match_selector(&tree, para, &bare_hover, None, &mut quirks).is_match());
    let tagged_hover = ComplexSelector::compound(
        CompoundSelector::tag("body").with_pseudo_class(PseudoClass::Hover),
    );
    assert!(match_selector(&tree, body, &tagged_hover, None, &mut quirks).is_match());
}

#[test]
fn negation_and_lang() {
    let (mut tree, [body, _, first, second, _, _]) = list_tree();
    tree.node_mut(body).attrs.push(("lang".into(), "de-CH".into()));
    let not_x = ComplexSelector::compound(
        CompoundSelector::tag("li").with_negation(CompoundSelector::class("x")),
    );
    assert!(matches_complex(&tree, first, &not_x));
    assert!(!matches_complex(&tree, second, &not_x));
    let german = ComplexSelector::compound(
        CompoundSelector::universal().with_pseudo_class(PseudoClass::Lang("de".into())),
    );
    let dutch = ComplexSelector::compound(
        CompoundSelector::universal().with_pseudo_class(PseudoClass::Lang("d".into())),
    );
    assert!(matches_complex(&tree, first, &german));
    assert!(!matches_complex(&tree, first, &dutch));
    assert!(!matches_complex(&tree, 0, &german));
}

#[test]
fn dependencies_are_recorded_on_the_state_bearing_element() {
    let (tree, [body, list, first, second, _, _]) = list_tree();
    let mut table = DependencyTable::new();
    let hover_descendant = ComplexSelector::compound(
        CompoundSelector::tag("body").with_pseudo_class(PseudoClass::Hover),
    )
    .then(Combinator::Descendant, CompoundSelector::tag("li"));
    let adjacent = ComplexSelector::compound(CompoundSelector::tag("li"))
        .then(Combinator::AdjacentSibling, CompoundSelector::tag("li"));
    let last = ComplexSelector::compound(
        CompoundSelector::tag("li").with_pseudo_class(PseudoClass::LastChild),
    );
    {
        let mut ctx = MatchingContext::new(QuirksMode::NoQuirks).with_dependencies(&mut table);
        assert!(!match_selector(&tree, first, &hover_descendant, None, &mut ctx).is_match());
        assert!(match_selector(&tree, second, &adjacent, None, &mut ctx).is_match());
        assert!(!match_selector(&tree, first, &last, None, &mut ctx).is_match());
    }
    assert!(table.depends_on(body as u64, DependencyKinds::HOVER));
    assert!(table.depends_on(list as u64, DependencyKinds::STRUCTURAL));
    assert!(table.depends_on(list as u64, DependencyKinds::BACKWARDS_STRUCTURAL));
    assert!(!table.depends_on(first as u64, DependencyKinds::HOVER));
}

#[test]
fn cache_and_filter_agree_with_plain_matching() {
    let (tree, [body, list, first, second, third, para]) = list_tree();
    let selectors = [
        ComplexSelector::compound(CompoundSelector::tag("ul"))
            .then(Combinator::Child, CompoundSelector::tag("li")),
        ComplexSelector::compound(CompoundSelector::tag("body"))
            .then(Combinator::Descendant, CompoundSelector::class("x"))
            .then(Combinator::GeneralSibling, CompoundSelector::tag("li")),
        ComplexSelector::compound(CompoundSelector::tag("table"))
            .then(Combinator::Descendant, CompoundSelector::universal()),
        ComplexSelector::compound(CompoundSelector::id("intro")),
        ComplexSelector::compound(CompoundSelector::from_simples(vec![SimpleSelector::Type(
            String::new(),
        )]))
        .then(Combinator::Descendant, CompoundSelector::tag("li")),
    ];
    let mut cache = MatchCache::new();
    cache.begin_pass();
    let mut filter = AncestorFilter::new();
    for element in [0, body, list, first, second, third, para] {
        filter.rebuild_for(&tree, element);
        for (index, selector) in selectors.iter().enumerate() {
            let expected = matches_complex(&tree, element, selector);
            let id = SelectorId::new(index as u32, 0);
            let mut ctx = MatchingContext::new(QuirksMode::NoQuirks)
                .with_cache(&mut cache)
                .with_ancestor_filter(&filter);
            let actual = match_selector(&tree, element, selector, Some(id), &mut ctx).is_match();
            assert_eq!(actual, expected, "element {element} selector {index}");
        }
    }
    let (hits, _) = cache.stats();
    assert!(hits > 0);
}
