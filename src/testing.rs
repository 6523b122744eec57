//! Shared test doubles.

use std::cell::RefCell;

use crate::surface::ThemeSurface;
use crate::theme::{ButtonDisplay, Theme};

/// Records what the theme modules rendered, the way a document would hold it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub theme: RefCell<Option<Theme>>,
    pub button: RefCell<Option<ButtonDisplay>>,
    pub applies: RefCell<usize>,
}

impl RecordingSurface {
    pub fn theme(&self) -> Option<Theme> {
        *self.theme.borrow()
    }

    pub fn button(&self) -> Option<ButtonDisplay> {
        self.button.borrow().clone()
    }

    pub fn applies(&self) -> usize {
        *self.applies.borrow()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply_theme(&self, theme: Theme) {
        *self.theme.borrow_mut() = Some(theme);
        *self.applies.borrow_mut() += 1;
    }

    fn render_button(&self, display: &ButtonDisplay) {
        *self.button.borrow_mut() = Some(display.clone());
    }
}
