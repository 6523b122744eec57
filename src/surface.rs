//! Document rendering seam for the theme modules.

use crate::theme::{ButtonDisplay, Theme};

/// Where theme state becomes visible.
///
/// Implementations must be idempotent: rendering the same theme or display
/// twice leaves the page exactly as rendering it once. A missing button is a
/// silent no-op.
pub trait ThemeSurface {
    /// Mark the document with exactly one of the light/dark markers.
    fn apply_theme(&self, theme: Theme);

    /// Refresh the toggle button's icon, label, and tooltip.
    fn render_button(&self, display: &ButtonDisplay);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for std::rc::Rc<T> {
    fn apply_theme(&self, theme: Theme) {
        (**self).apply_theme(theme);
    }

    fn render_button(&self, display: &ButtonDisplay) {
        (**self).render_button(display);
    }
}
