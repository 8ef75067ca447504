use super::App;
use enchant_core::AnimationSteps;
use std::time::Instant;

const STEP_INCREMENT: u32 = 5;
const MAX_STEPS: u32 = 500;

impl App {
    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
        self.last_autoplay_tick = Instant::now();
    }

    pub fn increase_speed(&mut self) {
        self.autoplay_speed = (self.autoplay_speed + 100).min(10_000);
    }

    pub fn decrease_speed(&mut self) {
        self.autoplay_speed = self.autoplay_speed.saturating_sub(100).max(100);
    }

    /// Applies from the next transition on
    pub fn toggle_fade(&mut self) {
        self.view.set_fade_in(!self.view.fade_in());
    }

    pub fn cycle_interpolator(&mut self) {
        self.view.set_interpolator(self.view.interpolator().next());
    }

    pub fn cycle_gravity(&mut self) {
        let mut gravity = self.view.gravity();
        gravity.horizontal = gravity.horizontal.next();
        self.view.set_gravity(gravity, &mut self.host);
    }

    /// Switch between a box filling the width and one hugging the text
    pub fn toggle_fill(&mut self) {
        self.fill_width = !self.fill_width;
        self.measured_for = None;
    }

    pub fn increase_steps(&mut self) {
        let steps = (self.view.animation_steps() + STEP_INCREMENT).min(MAX_STEPS);
        self.set_steps(steps);
    }

    pub fn decrease_steps(&mut self) {
        let steps = self
            .view
            .animation_steps()
            .saturating_sub(STEP_INCREMENT)
            .max(AnimationSteps::MIN);
        self.set_steps(steps);
    }

    fn set_steps(&mut self, steps: u32) {
        if let Err(e) = self.view.set_animation_steps(steps) {
            tracing::warn!("{}", e);
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
