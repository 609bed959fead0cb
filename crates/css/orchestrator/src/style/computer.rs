//! Style computation over a document tree.
//!
//! A pass walks a subtree in document order. Each element is matched,
//! cascaded and applied against its parent's fresh style, then diffed
//! against the style it had before so the caller learns how much layout
//! work the pass produced.

use crate::config::StyleConfig;
use crate::font::{ApproximateFontMetrics, FontMetricsProvider};
use crate::style::apply::{ApplyContext, apply};
use crate::style::sharing::{SharingSignature, SiblingHistory};
use crate::tree::{StyleTree, child_elements};
use anyhow::{Result, anyhow, bail};
use css_cascade::{MatchedDeclarations, MediaEvaluator, RuleIndex, StylesheetSet, collect};
use css_properties::{ComputedStyle, DefaultStyle, Difference, PseudoElement, diff};
use css_selectors::{AncestorFilter, DependencyKinds, DependencyTable, MatchCache, MatchingContext};
use std::collections::HashMap;
use tracing::debug_span;

/// How much of the tree must be restyled after a change to one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RestyleScope {
    /// No recorded match depended on the change.
    Nothing,
    /// The element and its descendants.
    Subtree,
    /// The element's parent and everything below it, which covers sibling
    /// selectors keyed on the element.
    ParentSubtree,
}

/// What one style pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylePass {
    /// Elements whose style was computed and committed.
    pub styled: usize,
    /// Committed styles that adopted a sibling's groups.
    pub shared: usize,
    /// Elements found detached before commit; their results were dropped.
    pub discarded: Vec<u64>,
    /// Largest difference of the pass.
    pub worst: Difference,
    /// Elements whose style changed, with the difference of each.
    pub changed: Vec<(u64, Difference)>,
}

impl StylePass {
    fn record(&mut self, key: u64, difference: Difference) {
        self.styled += 1;
        self.worst = self.worst.max(difference);
        if difference != Difference::Equal {
            self.changed.push((key, difference));
        }
    }
}

/// Owns the rule index, the per-pass matching state and the last computed
/// style of every element.
pub struct StyleComputer {
    config: StyleConfig,
    defaults: DefaultStyle,
    index: RuleIndex,
    cache: MatchCache,
    dependencies: DependencyTable,
    filter: AncestorFilter,
    fonts: Box<dyn FontMetricsProvider>,
    styles: HashMap<u64, ComputedStyle>,
    differences: HashMap<u64, Difference>,
    root_font_size: f32,
}

impl StyleComputer {
    /// Index `sheets` for the medium `media` accepts.
    pub fn new<M: MediaEvaluator + ?Sized>(
        config: StyleConfig,
        sheets: &StylesheetSet,
        media: &M,
    ) -> Self {
        let defaults = DefaultStyle::with_font_size(config.default_font_size_px);
        let root_font_size = config.default_font_size_px;
        Self {
            config,
            defaults,
            index: RuleIndex::build(sheets, media),
            cache: MatchCache::new(),
            dependencies: DependencyTable::new(),
            filter: AncestorFilter::new(),
            fonts: Box::new(ApproximateFontMetrics),
            styles: HashMap::new(),
            differences: HashMap::new(),
            root_font_size,
        }
    }

    /// Use real font metrics for `ex` units.
    #[must_use]
    pub fn with_font_metrics(mut self, fonts: Box<dyn FontMetricsProvider>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Swap the stylesheets. Stored styles stay until the next pass, which
    /// diffs against them; recorded dependencies are dropped.
    pub fn replace_stylesheets<M: MediaEvaluator + ?Sized>(
        &mut self,
        sheets: &StylesheetSet,
        media: &M,
    ) {
        self.index = RuleIndex::build(sheets, media);
        self.cache.clear();
        self.dependencies.clear();
    }

    #[inline]
    pub const fn config(&self) -> &StyleConfig {
        &self.config
    }

    #[inline]
    pub const fn rule_index(&self) -> &RuleIndex {
        &self.index
    }

    #[inline]
    pub const fn dependencies(&self) -> &DependencyTable {
        &self.dependencies
    }

    /// Last committed style of an element.
    #[inline]
    pub fn computed_style(&self, element_key: u64) -> Option<&ComputedStyle> {
        self.styles.get(&element_key)
    }

    /// Difference recorded for an element by the last pass that styled it.
    #[inline]
    pub fn difference(&self, element_key: u64) -> Option<Difference> {
        self.differences.get(&element_key).copied()
    }

    /// Drop everything known about a removed element.
    pub fn forget(&mut self, element_key: u64) {
        self.styles.remove(&element_key);
        self.differences.remove(&element_key);
        self.dependencies.forget(element_key);
    }

    /// How much must be restyled after the `change` inputs of an element
    /// moved: its hover/active/focus/other state, or the sibling structure
    /// of its children.
    pub fn restyle_scope(&self, element_key: u64, change: DependencyKinds) -> RestyleScope {
        let hit = self.dependencies.kinds(element_key) & change;
        if hit.is_empty() {
            RestyleScope::Nothing
        } else if hit.intersects(
            DependencyKinds::HOVER
                | DependencyKinds::ACTIVE
                | DependencyKinds::FOCUS
                | DependencyKinds::OTHER_STATE,
        ) {
            RestyleScope::ParentSubtree
        } else {
            RestyleScope::Subtree
        }
    }

    /// Restyle `root` and its descendants.
    ///
    /// # Errors
    /// Fails without committing anything if `root` is detached, or if its
    /// parent has never been styled.
    pub fn restyle<T: StyleTree>(&mut self, tree: &T, root: T::Handle) -> Result<StylePass> {
        let root_key = tree.unique_key(root);
        if !tree.is_connected(root) {
            bail!("cannot restyle detached element {root_key}");
        }
        let _span = debug_span!("style_pass", root = root_key).entered();

        let parent_style = tree
            .parent(root)
            .map(|parent| {
                let parent_key = tree.unique_key(parent);
                self.styles.get(&parent_key).cloned().ok_or_else(|| {
                    anyhow!("parent {parent_key} of restyle root {root_key} has no computed style")
                })
            })
            .transpose()?;

        // The root's entry may hold kinds recorded by siblings outside this
        // pass; only the document element can start from scratch.
        if parent_style.is_none() {
            self.dependencies.forget(root_key);
        }
        self.cache.begin_pass();
        self.filter.rebuild_for(tree, root);

        let mut pass = StylePass::default();
        let mut history = SiblingHistory::new(self.config.sharing_scan_limit);
        self.style_subtree(tree, root, parent_style.as_ref(), &mut pass, &mut history);

        let (hits, misses) = self.cache.stats();
        log::debug!(
            target: "css_orchestrator",
            "style pass root={root_key} styled={} shared={} discarded={} worst={:?} cache_hits={hits} cache_misses={misses}",
            pass.styled,
            pass.shared,
            pass.discarded.len(),
            pass.worst
        );
        Ok(pass)
    }

    fn style_subtree<T: StyleTree>(
        &mut self,
        tree: &T,
        element: T::Handle,
        parent: Option<&ComputedStyle>,
        pass: &mut StylePass,
        history: &mut SiblingHistory,
    ) {
        let key = tree.unique_key(element);
        let is_root = tree.is_root(element);

        let mut ctx = MatchingContext::new(self.index.mode().quirks_mode())
            .with_dependencies(&mut self.dependencies)
            .with_cache(&mut self.cache)
            .with_ancestor_filter(&self.filter);
        let matched = collect(&self.index, tree, element, &mut ctx);

        let apply_ctx = ApplyContext {
            defaults: &self.defaults,
            config: &self.config,
            fonts: self.fonts.as_ref(),
            parent,
            pseudo: None,
            is_root,
            root_font_size: if is_root {
                self.config.default_font_size_px
            } else {
                self.root_font_size
            },
        };
        let mut style = apply(&matched.entries, &apply_ctx);
        attach_pseudo_styles(&mut style, &matched, &apply_ctx);

        let signature = self
            .config
            .style_sharing
            .then(|| SharingSignature::of(tree, element, &matched.matched_selectors));
        drop(matched);

        if !tree.is_connected(element) {
            log::debug!(target: "css_orchestrator", "element {key} detached during pass; result dropped");
            self.forget(key);
            pass.discarded.push(key);
            return;
        }

        if let Some(signature) = signature {
            let sibling = history
                .find(&signature)
                .and_then(|sibling_key| self.styles.get(&sibling_key));
            match (sibling, parent) {
                (Some(sibling), _) => {
                    style.compact_with(sibling);
                    pass.shared += 1;
                }
                (None, Some(parent)) => style.compact_with(parent),
                (None, None) => {}
            }
            history.remember(key, signature);
        }

        let difference = self
            .styles
            .get(&key)
            .map_or(Difference::ContainingBlockLayout, |old| diff(old, &style));
        self.differences.insert(key, difference);
        pass.record(key, difference);
        if is_root {
            self.root_font_size = style.font_size();
        }
        self.styles.insert(key, style.clone());
        log::trace!(target: "css_orchestrator", "styled element={key} difference={difference:?}");

        self.filter.push(tree, element);
        let mut children = SiblingHistory::new(self.config.sharing_scan_limit);
        for child in child_elements(tree, element) {
            self.dependencies.forget(tree.unique_key(child));
            self.style_subtree(tree, child, Some(&style), pass, &mut children);
        }
        self.filter.pop(tree, element);
    }
}

/// Cascade and attach the pseudo-element styles `matched` has declarations for.
fn attach_pseudo_styles(
    style: &mut ComputedStyle,
    matched: &MatchedDeclarations<'_>,
    ctx: &ApplyContext<'_>,
) {
    for pseudo in matched.pseudo_elements() {
        let pseudo_style = apply(
            matched.for_pseudo(pseudo),
            &ApplyContext {
                parent: Some(&*style),
                pseudo: Some(pseudo),
                is_root: false,
                ..*ctx
            },
        );
        // Generated boxes without content do not exist.
        if matches!(pseudo, PseudoElement::Before | PseudoElement::After)
            && pseudo_style.content().is_none()
        {
            continue;
        }
        style.add_pseudo_style(pseudo_style);
    }
}
