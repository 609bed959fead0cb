//! Document access needed by a style pass.

use core::iter;
use css_cascade::CascadeAdapter;

/// A markup tree the style engine can walk.
///
/// Matching and cascading only need [`CascadeAdapter`]; walking also needs
/// children and a liveness check, since an element can be detached while a
/// pass is running.
pub trait StyleTree: CascadeAdapter {
    fn first_child_element(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// False once the element has been removed from the document.
    fn is_connected(&self, element: Self::Handle) -> bool;
}

/// Child elements of `element`, in document order.
pub fn child_elements<T: StyleTree>(
    tree: &T,
    element: T::Handle,
) -> impl Iterator<Item = T::Handle> + '_ {
    iter::successors(tree.first_child_element(element), move |child| {
        tree.next_sibling_element(*child)
    })
}
