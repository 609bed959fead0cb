//! Dynamic element state consulted by user-action and form pseudo-classes.

use bitflags::bitflags;

bitflags! {
    /// State bits an element can carry while a style pass runs.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementState: u32 {
        const HOVER = 1 << 0;
        const ACTIVE = 1 << 1;
        const FOCUS = 1 << 2;
        /// The element can take focus; gates the `*:hover` quirk.
        const FOCUSABLE = 1 << 3;
        const LINK = 1 << 4;
        const VISITED = 1 << 5;
        const CHECKED = 1 << 6;
        const DISABLED = 1 << 7;
        const ENABLED = 1 << 8;
        const TARGET = 1 << 9;
    }
}
