use crate::core::words::{ConfigError, WordBank};
use crate::effects::rng::Rng;

/// The three lamp states of the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightColor {
    Red,
    Yellow,
    Green,
}

impl LightColor {
    /// All colors in lamp order, top to bottom on the widget.
    pub const ALL: [LightColor; 3] = [LightColor::Red, LightColor::Yellow, LightColor::Green];

    /// The next color in the toggle cycle: RED → GREEN → YELLOW → RED.
    ///
    /// Green follows red here, which is not how a road signal behaves.
    /// That order ships on purpose (the signal is glitched); keep it,
    /// don't "correct" it. `cycle_order_is_red_green_yellow` pins it down.
    pub fn next(self) -> Self {
        match self {
            LightColor::Red => LightColor::Green,
            LightColor::Green => LightColor::Yellow,
            LightColor::Yellow => LightColor::Red,
        }
    }

    /// Stable index used by the frame protocol and lamp layout.
    pub fn index(self) -> usize {
        match self {
            LightColor::Red => 0,
            LightColor::Yellow => 1,
            LightColor::Green => 2,
        }
    }
}

/// The widget's mutable core: current color, current word, and a
/// generation counter that bumps on every transition.
///
/// Owned by a single writer; `toggle` is the only mutation.
#[derive(Debug, Clone)]
pub struct LightCycle {
    color: LightColor,
    word: String,
    trigger: u64,
}

impl LightCycle {
    /// Validate the bank and build the initial state: red light, a random
    /// red word, trigger zero.
    pub fn new(bank: &WordBank, rng: &mut Rng) -> Result<Self, ConfigError> {
        bank.validate()?;
        let word = pick_word(bank.words(LightColor::Red), "", rng);
        Ok(Self {
            color: LightColor::Red,
            word,
            trigger: 0,
        })
    }

    /// The currently lit color.
    pub fn color(&self) -> LightColor {
        self.color
    }

    /// The word currently on display. Always a member of the bank's list
    /// for the current color.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Generation counter. Strictly +1 per toggle, never reset — consumers
    /// compare it only to detect that a new transition happened.
    pub fn trigger(&self) -> u64 {
        self.trigger
    }

    /// Advance to the next color and pick a fresh word for it.
    ///
    /// The bank must be the one this state was validated against (or one
    /// that passed `validate` since) — an empty list here would spin the
    /// word picker forever. That is a caller precondition, not a checked
    /// error.
    pub fn toggle(&mut self, bank: &WordBank, rng: &mut Rng) {
        let next = self.color.next();
        self.word = pick_word(bank.words(next), &self.word, rng);
        self.color = next;
        self.trigger += 1;
        log::debug!(
            "toggle -> {:?} \"{}\" (trigger {})",
            self.color,
            self.word,
            self.trigger
        );
    }

    /// Re-seat the word after a bank swap: uniform pick from the new list
    /// for the current color. Not a transition — the trigger stays put.
    pub(crate) fn repick_word(&mut self, bank: &WordBank, rng: &mut Rng) {
        self.word = pick_word(bank.words(self.color), "", rng);
    }
}

/// Uniform pick with rejection: resample until the result differs from
/// `current`, unless the list has a single entry, which is returned as-is.
/// The list must be non-empty.
fn pick_word(list: &[String], current: &str, rng: &mut Rng) -> String {
    let mut word = &list[rng.next_int(list.len() as u32) as usize];
    while word == current && list.len() > 1 {
        word = &list[rng.next_int(list.len() as u32) as usize];
    }
    word.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_word_bank() -> WordBank {
        WordBank {
            red: vec!["STOP".into(), "HALT".into()],
            yellow: vec!["WAIT".into(), "SLOW".into()],
            green: vec!["GO".into(), "RUSH".into()],
        }
    }

    #[test]
    fn cycle_order_is_red_green_yellow() {
        // The shipped order skips yellow after red — asserted, not fixed.
        let bank = two_word_bank();
        let mut rng = Rng::new(7);
        let mut cycle = LightCycle::new(&bank, &mut rng).unwrap();
        assert_eq!(cycle.color(), LightColor::Red);

        let expected = [
            LightColor::Green,
            LightColor::Yellow,
            LightColor::Red,
            LightColor::Green,
            LightColor::Yellow,
            LightColor::Red,
        ];
        for want in expected {
            cycle.toggle(&bank, &mut rng);
            assert_eq!(cycle.color(), want);
        }
    }

    #[test]
    fn trigger_counts_toggles_exactly() {
        let bank = two_word_bank();
        let mut rng = Rng::new(3);
        let mut cycle = LightCycle::new(&bank, &mut rng).unwrap();
        assert_eq!(cycle.trigger(), 0);
        for n in 1..=20u64 {
            cycle.toggle(&bank, &mut rng);
            assert_eq!(cycle.trigger(), n);
        }
    }

    #[test]
    fn word_is_always_from_current_list() {
        let bank = two_word_bank();
        let mut rng = Rng::new(11);
        let mut cycle = LightCycle::new(&bank, &mut rng).unwrap();
        for _ in 0..30 {
            cycle.toggle(&bank, &mut rng);
            let list = bank.words(cycle.color());
            assert!(list.iter().any(|w| w == cycle.word()));
        }
    }

    #[test]
    fn never_repeats_previous_word_with_two_candidates() {
        let bank = two_word_bank();
        let mut rng = Rng::new(42);
        let mut cycle = LightCycle::new(&bank, &mut rng).unwrap();
        for _ in 0..50 {
            let before = cycle.word().to_owned();
            cycle.toggle(&bank, &mut rng);
            assert_ne!(cycle.word(), before);
        }
    }

    #[test]
    fn single_word_lists_fall_back_to_the_only_entry() {
        let bank = WordBank {
            red: vec!["ONLY".into()],
            yellow: vec!["ONLY".into()],
            green: vec!["ONLY".into()],
        };
        let mut rng = Rng::new(5);
        let mut cycle = LightCycle::new(&bank, &mut rng).unwrap();
        assert_eq!(cycle.word(), "ONLY");
        // Identical neighbor words must not loop or error.
        for _ in 0..9 {
            cycle.toggle(&bank, &mut rng);
            assert_eq!(cycle.word(), "ONLY");
        }
    }

    #[test]
    fn new_rejects_invalid_bank() {
        let bank = WordBank {
            red: vec!["STOP".into()],
            yellow: vec![],
            green: vec!["GO".into()],
        };
        let mut rng = Rng::new(1);
        assert!(LightCycle::new(&bank, &mut rng).is_err());
    }

    #[test]
    fn reads_are_idempotent() {
        let bank = two_word_bank();
        let mut rng = Rng::new(9);
        let cycle = LightCycle::new(&bank, &mut rng).unwrap();
        let snapshot = (cycle.color(), cycle.word().to_owned(), cycle.trigger());
        for _ in 0..5 {
            assert_eq!(
                (cycle.color(), cycle.word().to_owned(), cycle.trigger()),
                snapshot
            );
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let bank = two_word_bank();
        let mut rng_a = Rng::new(77);
        let mut rng_b = Rng::new(77);
        let mut a = LightCycle::new(&bank, &mut rng_a).unwrap();
        let mut b = LightCycle::new(&bank, &mut rng_b).unwrap();
        for _ in 0..12 {
            a.toggle(&bank, &mut rng_a);
            b.toggle(&bank, &mut rng_b);
            assert_eq!(a.word(), b.word());
        }
    }
}
