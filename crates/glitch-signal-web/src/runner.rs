use glitch_signal::{
    write_frame, ConfigError, FixedTimestep, FrameLayout, InputEvent, InputQueue, SignalWidget,
    WidgetConfig, WordBank,
};

/// Drives the widget from the browser loop.
///
/// The page pushes pointer events and calls `tick` once per animation
/// frame; the runner applies input, advances the fixed-rate animations,
/// and keeps the frame/word buffers current for zero-copy reads from JS.
pub struct WidgetRunner {
    widget: SignalWidget,
    input: InputQueue,
    timestep: FixedTimestep,
    layout: FrameLayout,
    frame: Vec<f32>,
    word_bytes: Vec<u8>,
    frame_counter: u64,
}

impl WidgetRunner {
    /// Default config and the stock word bank.
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        let config = WidgetConfig {
            seed,
            ..WidgetConfig::default()
        };
        Self::with_config(config, WordBank::default())
    }

    pub fn with_config(config: WidgetConfig, bank: WordBank) -> Result<Self, ConfigError> {
        let layout = FrameLayout::from_config(&config);
        let timestep = FixedTimestep::new(config.fixed_dt);
        let widget = SignalWidget::new(config, bank)?;
        let mut runner = Self {
            widget,
            input: InputQueue::new(),
            timestep,
            layout,
            frame: Vec::new(),
            word_bytes: Vec::new(),
            frame_counter: 0,
        };
        runner.refresh_buffers();
        Ok(runner)
    }

    /// Push an input event into the queue (called from JS via wasm-bindgen).
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Parse, validate, and swap in a word bank. On error the current bank
    /// stays in place.
    pub fn load_words(&mut self, json: &str) -> Result<(), ConfigError> {
        let bank = WordBank::from_json(json)?;
        self.widget.load_bank(bank)?;
        self.refresh_buffers();
        Ok(())
    }

    /// Run one browser frame.
    ///
    /// Input is applied exactly once per frame, before the fixed steps —
    /// a queued click must toggle once, however many animation steps this
    /// frame happens to run.
    pub fn tick(&mut self, dt: f32) {
        self.widget.handle_input(&self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.widget.tick(self.timestep.dt());
        }

        self.frame_counter += 1;
        self.refresh_buffers();
    }

    fn refresh_buffers(&mut self) {
        write_frame(
            &self.widget,
            self.frame_counter,
            &self.layout,
            &mut self.frame,
        );
        self.word_bytes.clear();
        self.word_bytes
            .extend_from_slice(self.widget.cycle().word().as_bytes());
    }

    pub fn widget(&self) -> &SignalWidget {
        &self.widget
    }

    // ---- Pointer accessors for zero-copy reads from JS ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_floats(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn word_ptr(&self) -> *const u8 {
        self.word_bytes.as_ptr()
    }

    pub fn word_len(&self) -> u32 {
        self.word_bytes.len() as u32
    }

    pub fn trigger(&self) -> f64 {
        self.widget.cycle().trigger() as f64
    }

    pub fn color_index(&self) -> u32 {
        self.widget.cycle().color().index() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.widget.config().world_width
    }

    pub fn world_height(&self) -> f32 {
        self.widget.config().world_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glitch_signal::LightColor;

    #[test]
    fn click_toggles_once_per_frame() {
        let mut runner = WidgetRunner::new(7).unwrap();
        let center = runner.widget().box_center();
        runner.push_input(InputEvent::PointerDown {
            x: center.x,
            y: center.y,
        });
        // A slow frame runs several fixed steps; the click still counts once.
        runner.tick(0.1);
        assert_eq!(runner.trigger(), 1.0);
        assert_eq!(runner.widget().cycle().color(), LightColor::Green);
    }

    #[test]
    fn buffers_track_state() {
        let mut runner = WidgetRunner::new(3).unwrap();
        assert_eq!(
            runner.frame_floats(),
            FrameLayout::from_config(runner.widget().config()).total_floats as u32
        );
        let word = runner.widget().cycle().word().to_owned();
        assert_eq!(runner.word_len() as usize, word.len());

        let center = runner.widget().box_center();
        runner.push_input(InputEvent::PointerDown {
            x: center.x,
            y: center.y,
        });
        runner.tick(1.0 / 60.0);
        let new_word = runner.widget().cycle().word();
        assert_eq!(runner.word_len() as usize, new_word.len());
    }

    #[test]
    fn bad_word_bank_is_rejected_and_kept_out() {
        let mut runner = WidgetRunner::new(1).unwrap();
        let word_before = runner.widget().cycle().word().to_owned();
        assert!(runner.load_words(r#"{"red": []}"#).is_err());
        assert_eq!(runner.widget().cycle().word(), word_before);
    }

    #[test]
    fn custom_word_bank_loads() {
        let mut runner = WidgetRunner::new(1).unwrap();
        runner
            .load_words(r#"{"red": ["NOPE"], "yellow": ["HMM"], "green": ["YEP"]}"#)
            .unwrap();
        assert_eq!(runner.widget().cycle().word(), "NOPE");
    }
}
