/// Which face of the on-screen card is up, plus the guard that swallows the
/// click a finished drag leaves behind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardFlip {
    flipped: bool,
    swallow_click: bool,
}

impl CardFlip {
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// A new press starts clean; only a drag arms the guard.
    pub fn press(&mut self) {
        self.swallow_click = false;
    }

    pub fn drag_finished(&mut self) {
        self.swallow_click = true;
    }

    pub fn click(&mut self) {
        if std::mem::take(&mut self.swallow_click) {
            return;
        }
        self.flipped = !self.flipped;
    }

    /// A different card became current: show its front.
    pub fn card_changed(&mut self) {
        self.flipped = false;
    }
}
