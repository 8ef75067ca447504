//! Application state and logic

use crate::config::{Config, MONTHS};
use enchant_core::{
    Argb, CellFont, ConfigError, DrawInstruction, EnchantedText, MeasureSpec, Padding, Size,
};
use std::time::{Duration, Instant};

mod host;
mod navigation;
mod playback;

pub use host::TerminalHost;

/// The main application state
pub struct App {
    /// Words cycled through, never empty
    pub words: Vec<String>,
    /// Index of the word currently shown
    pub index: usize,
    /// The animated text widget
    pub view: EnchantedText,
    /// Cell-based font backend
    pub font: CellFont,
    /// Frame and layout flags set by the widget
    pub host: TerminalHost,
    /// Whether autoplay is enabled
    pub autoplay: bool,
    /// Autoplay delay between words in milliseconds
    pub autoplay_speed: u64,
    /// Last autoplay tick time
    last_autoplay_tick: Instant,
    /// Box background the glyph colors are blended over
    pub background: Argb,
    /// Glyphs of the most recently drawn frame
    pub glyphs: Vec<DrawInstruction>,
    /// Fill the available width instead of hugging the text
    pub fill_width: bool,
    /// Measured size of the widget in cells
    pub size: Size,
    /// Space available when the widget was last measured
    measured_for: Option<Size>,
    /// Whether to show the help popover
    pub show_help: bool,
    /// Whether to quit
    pub should_quit: bool,
    /// The first word has been handed to the widget
    started: bool,
}

impl App {
    /// Build the app from a resolved config. The first word animates in on
    /// the first render.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut host = TerminalHost::default();
        let mut font = CellFont::default();
        let mut view = EnchantedText::new();

        view.set_animation_steps(config.playback.animation_steps)?;
        view.set_text_color(config.text.color, &mut host);
        view.set_text_size(config.text.size, &mut host);
        view.set_fade_in(config.text.fade_in);
        view.set_gravity(config.text.gravity, &mut host);
        view.set_interpolator(config.text.interpolator);
        let padding = config.ui.padding as f32;
        view.set_padding(
            Padding {
                left: padding,
                top: 0.0,
                right: padding,
                bottom: 0.0,
            },
            &mut host,
        );
        if let Some(path) = config.text.typeface.as_deref() {
            view.set_typeface(Some(path), &mut font, &mut host);
        }

        let words = if config.ui.words.is_empty() {
            MONTHS.iter().map(|m| m.to_string()).collect()
        } else {
            config.ui.words.clone()
        };

        Ok(Self {
            words,
            index: 0,
            view,
            font,
            host,
            autoplay: config.playback.autoplay,
            autoplay_speed: config.playback.speed,
            last_autoplay_tick: Instant::now(),
            background: config.ui.background,
            fill_width: config.ui.fill_width,
            glyphs: Vec::new(),
            size: Size::default(),
            measured_for: None,
            show_help: false,
            should_quit: false,
            started: false,
        })
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.index]
    }

    /// Hand the current word to the widget
    fn show_current(&mut self) {
        let word = self.words[self.index].clone();
        tracing::debug!(index = self.index, "showing {:?}", word);
        self.view.set_text(word, &self.font, &mut self.host);
    }

    /// Lay out and draw the widget for this render pass.
    ///
    /// `available` is the space inside the box border, in cells. A frame is
    /// only drawn when the widget asked for one, so each step of a transition
    /// is drawn exactly once.
    pub fn prepare_frame(&mut self, available: Size) {
        if !self.started {
            // The first word needs real bounds to place its transition
            self.started = true;
            self.relayout(available);
            self.show_current();
        }

        if self.host.take_layout() || self.measured_for != Some(available) {
            self.relayout(available);
        }

        if self.host.take_frame() {
            self.glyphs = self.view.draw(&self.font, &mut self.host);
        }
    }

    fn relayout(&mut self, available: Size) {
        let width_spec = if self.fill_width {
            MeasureSpec::Exactly(available.width)
        } else {
            MeasureSpec::AtMost(available.width)
        };
        self.size = self
            .view
            .measure(width_spec, MeasureSpec::AtMost(available.height), &self.font);
        self.view.layout_to(self.size);
        self.measured_for = Some(available);
        tracing::trace!(width = self.size.width, height = self.size.height, "relayout");

        if !self.view.is_animating() {
            self.glyphs = self.view.draw(&self.font, &mut self.host);
        }
    }

    /// Handle autoplay
    pub fn tick(&mut self) {
        if !self.autoplay {
            return;
        }
        let now = Instant::now();
        if now.duration_since(self.last_autoplay_tick) >= Duration::from_millis(self.autoplay_speed)
        {
            self.last_autoplay_tick = now;
            self.next_word();
        }
    }
}

#[cfg(test)]
mod tests;
