//! System color-scheme seam.

use std::cell::Cell;

/// Source of the operating system's light/dark preference.
pub trait ColorScheme {
    /// `true` when the system prefers dark. Sources that cannot tell report
    /// `false` so the theme falls back to light.
    fn prefers_dark(&self) -> bool;
}

impl<T: ColorScheme + ?Sized> ColorScheme for std::rc::Rc<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

/// A scheme whose answer is set by hand. Used natively and in tests.
#[derive(Debug, Default)]
pub struct FixedScheme {
    dark: Cell<bool>,
}

impl FixedScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark: Cell::new(dark) }
    }

    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }
}

impl ColorScheme for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}
