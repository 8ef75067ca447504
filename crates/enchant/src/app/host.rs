use enchant_core::Host;

/// Frame scheduler backed by flags the event loop polls every tick
#[derive(Debug, Default)]
pub struct TerminalHost {
    frame_pending: bool,
    needs_layout: bool,
}

impl TerminalHost {
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Consume the pending frame, if any
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }

    pub fn take_layout(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }
}

impl Host for TerminalHost {
    fn schedule_next_frame(&mut self) {
        self.frame_pending = true;
    }

    fn cancel_frame(&mut self) {
        self.frame_pending = false;
    }

    fn request_relayout(&mut self) {
        self.needs_layout = true;
    }
}
