use tripsheet_core::{MutableState, Subscription};

/// Visibility of the app's persistent chrome (the tab bar).
///
/// Cloning shares the flag, so a screen and the sheets it owns see the same
/// value.
#[derive(Clone, Debug)]
pub struct ChromeVisibility {
    visible: MutableState<bool>,
}

impl Default for ChromeVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeVisibility {
    pub fn new() -> Self {
        Self {
            visible: MutableState::new(true),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn show(&self) {
        self.visible.set(true);
    }

    pub fn hide(&self) {
        self.visible.set(false);
    }

    pub fn toggle(&self) {
        self.visible.update(|visible| *visible = !*visible);
    }

    pub fn subscribe(&self, observer: impl Fn(bool) + 'static) -> Subscription {
        self.visible.subscribe(move |visible| observer(*visible))
    }
}
