use glam::Vec2;

use crate::core::cycle::{LightColor, LightCycle};
use crate::core::words::{ConfigError, WordBank};
use crate::effects::burst::WordBurst;
use crate::effects::easing::{lerp, Easing};
use crate::effects::rng::Rng;
use crate::effects::shake::Shake;
use crate::input::queue::{InputEvent, InputQueue};

/// Lamp intensity when unlit / fully lit.
const LAMP_DIM: f32 = 0.3;
const LAMP_LIT: f32 = 1.0;
/// Lamp scale when unlit / fully lit.
const LAMP_SCALE_DIM: f32 = 0.9;
const LAMP_SCALE_LIT: f32 = 1.15;

/// Box transform while the pointer is over it.
const HOVER_SCALE: f32 = 1.05;
const HOVER_ROTATION_DEG: f32 = 2.0;

/// Configuration for the widget, provided by the host page.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in widget units.
    pub world_width: f32,
    /// World height in widget units.
    pub world_height: f32,
    /// Light box size in world units.
    pub box_size: Vec2,
    /// Lamp circle radius in world units.
    pub lamp_radius: f32,
    /// Number of glitch clip slices per word burst.
    pub slice_count: usize,
    /// Click-shake duration in seconds.
    pub shake_duration: f32,
    /// Seconds for a lamp to reach full intensity.
    pub lamp_attack: f32,
    /// Seconds for a lamp to dim back down.
    pub lamp_release: f32,
    /// Seconds between slice re-rolls while a burst is live.
    pub flicker_interval: f32,
    /// RNG seed. Word choice and all effect jitter replay for a given seed.
    pub seed: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            box_size: Vec2::new(150.0, 420.0),
            lamp_radius: 55.0,
            slice_count: 3,
            shake_duration: 0.8,
            lamp_attack: 0.25,
            lamp_release: 0.35,
            flicker_interval: 0.12,
            seed: 42,
        }
    }
}

/// Eased intensity/scale animation for one lamp.
///
/// `progress` runs toward `target` linearly; the displayed values apply a
/// spring pop on the way up and a plain fade on the way down.
#[derive(Debug, Clone, Copy)]
pub struct LampAnim {
    progress: f32,
    target: f32,
}

impl LampAnim {
    fn new(lit: bool) -> Self {
        let level = if lit { 1.0 } else { 0.0 };
        Self {
            progress: level,
            target: level,
        }
    }

    fn set_lit(&mut self, lit: bool) {
        self.target = if lit { 1.0 } else { 0.0 };
    }

    fn tick(&mut self, dt: f32, attack: f32, release: f32) {
        if self.progress < self.target {
            self.progress = (self.progress + dt / attack).min(self.target);
        } else if self.progress > self.target {
            self.progress = (self.progress - dt / release).max(self.target);
        }
    }

    fn eased(&self) -> f32 {
        if self.target >= 1.0 {
            Easing::ElasticOut.apply(self.progress)
        } else {
            Easing::QuadOut.apply(self.progress)
        }
    }

    /// Current render intensity in [0.3, ~1.0+] (the spring overshoots).
    pub fn intensity(&self) -> f32 {
        lerp(LAMP_DIM, LAMP_LIT, self.eased())
    }

    /// Current render scale.
    pub fn scale(&self) -> f32 {
        lerp(LAMP_SCALE_DIM, LAMP_SCALE_LIT, self.eased())
    }
}

/// The headless widget: cycle state, word burst, box shake, lamp animation,
/// and pointer handling, composed behind one single-writer surface.
pub struct SignalWidget {
    config: WidgetConfig,
    bank: WordBank,
    rng: Rng,
    cycle: LightCycle,
    burst: WordBurst,
    shake: Shake,
    lamps: [LampAnim; 3],
    hovered: bool,
    flicker_clock: f32,
}

impl SignalWidget {
    /// Validate the bank and build the initial widget: red lit, a random
    /// red word on display, trigger zero.
    pub fn new(config: WidgetConfig, bank: WordBank) -> Result<Self, ConfigError> {
        let mut rng = Rng::new(config.seed);
        let cycle = LightCycle::new(&bank, &mut rng)?;
        let burst = WordBurst::generate(cycle.word(), config.slice_count, &mut rng);
        let shake = Shake::new(config.shake_duration);
        let lamps = [
            LampAnim::new(true), // red starts lit
            LampAnim::new(false),
            LampAnim::new(false),
        ];
        log::info!("signal widget up: \"{}\" on {:?}", cycle.word(), cycle.color());
        Ok(Self {
            config,
            bank,
            rng,
            cycle,
            burst,
            shake,
            lamps,
            hovered: false,
            flicker_clock: 0.0,
        })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The core (color, word, trigger) state. Reading has no side effects.
    pub fn cycle(&self) -> &LightCycle {
        &self.cycle
    }

    pub fn burst(&self) -> &WordBurst {
        &self.burst
    }

    pub fn shake(&self) -> &Shake {
        &self.shake
    }

    pub fn lamps(&self) -> &[LampAnim; 3] {
        &self.lamps
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn hover_scale(&self) -> f32 {
        if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    pub fn hover_rotation_deg(&self) -> f32 {
        if self.hovered {
            HOVER_ROTATION_DEG
        } else {
            0.0
        }
    }

    /// Center of the light box in world coordinates.
    pub fn box_center(&self) -> Vec2 {
        Vec2::new(self.config.world_width, self.config.world_height) * 0.5
    }

    /// Center of lamp `i` (0 = red on top, 2 = green at the bottom).
    pub fn lamp_center(&self, index: usize) -> Vec2 {
        let spacing = self.config.box_size.y / 3.0;
        self.box_center() + Vec2::new(0.0, (index as f32 - 1.0) * spacing)
    }

    fn contains(&self, p: Vec2) -> bool {
        let half = self.config.box_size * 0.5;
        let d = p - self.box_center();
        d.x.abs() <= half.x && d.y.abs() <= half.y
    }

    /// Process pending pointer events. One pointer-down inside the box is
    /// one toggle — the queue is drained by the runner after this runs.
    pub fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    if self.contains(Vec2::new(x, y)) {
                        self.toggle();
                    }
                }
                InputEvent::PointerMove { x, y } => {
                    self.hovered = self.contains(Vec2::new(x, y));
                }
                InputEvent::PointerUp { .. } => {}
            }
        }
    }

    /// The single state transition: advance the color cycle, roll a fresh
    /// word burst, kick the box shake, and retarget the lamps.
    pub fn toggle(&mut self) {
        self.cycle.toggle(&self.bank, &mut self.rng);
        self.burst = WordBurst::generate(self.cycle.word(), self.config.slice_count, &mut self.rng);
        self.shake.start();
        self.flicker_clock = 0.0;
        for color in LightColor::ALL {
            self.lamps[color.index()].set_lit(color == self.cycle.color());
        }
    }

    /// Swap in a new word bank. The current color and trigger survive; the
    /// word is re-picked from the new bank so the membership invariant
    /// holds. Rejects invalid banks without touching state.
    pub fn load_bank(&mut self, bank: WordBank) -> Result<(), ConfigError> {
        bank.validate()?;
        self.bank = bank;
        self.cycle.repick_word(&self.bank, &mut self.rng);
        log::info!("word bank replaced, now showing \"{}\"", self.cycle.word());
        Ok(())
    }

    /// Advance animations by one fixed step. No I/O, no state transitions.
    pub fn tick(&mut self, dt: f32) {
        self.shake.tick(dt);
        for lamp in self.lamps.iter_mut() {
            lamp.tick(dt, self.config.lamp_attack, self.config.lamp_release);
        }
        self.flicker_clock += dt;
        while self.flicker_clock >= self.config.flicker_interval {
            self.burst.twitch(&mut self.rng);
            self.flicker_clock -= self.config.flicker_interval;
        }
    }
}
