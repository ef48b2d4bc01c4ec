//! `bruteforce-crc generate`: random messages protected by a random CRC.
//!
//! The output is a `#`-commented parameter header followed by one
//! `<message bits> <crc bits>` line per message, readable by `search` and
//! `known` with the default CRC offset.

use std::fmt::Write as _;

use bfcrc_engine::{
    check_width, max_value, BitCrcEngine, BitMessage, CrcModel, EngineError, FeedOrder, TestVector,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{GenerateArgs, GlobalArgs};

/// Choices for the generated model; `None` fields are drawn at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerateOptions {
    /// CRC width; random in `5..=16` when unset.
    pub width: Option<u8>,
    /// Message length in bits; random in `30..=80` when unset.
    pub bits: Option<usize>,
    /// Final XOR; random below width 12 and zero above when unset.
    pub final_xor: Option<u32>,
    /// Number of messages.
    pub messages: usize,
}

/// A random model and the messages generated with it.
#[derive(Debug)]
pub struct GeneratedSet {
    /// The model every CRC was computed with.
    pub model: CrcModel,
    /// Length of every message in bits.
    pub message_bits: usize,
    /// The messages and their CRCs.
    pub vectors: Vec<TestVector>,
}

/// Draws a random model and `options.messages` random messages.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenerateOptions,
) -> Result<GeneratedSet, EngineError> {
    let width = match options.width {
        Some(width) => check_width(width as u32)?,
        None => rng.gen_range(5..=16),
    };
    let max = max_value(width) as u32;
    let final_xor = match options.final_xor {
        Some(value) => value,
        None if width < 12 => rng.gen_range(0..=max),
        None => 0,
    };
    let model = CrcModel {
        width,
        polynomial: rng.gen_range(0..=max),
        initial: rng.gen_range(0..=max),
        final_xor,
        reflected_input: rng.gen(),
        reflected_output: rng.gen(),
        feed_order: FeedOrder::Auto,
    };
    model.validate()?;

    let message_bits = options.bits.unwrap_or_else(|| rng.gen_range(30..=80));
    let mut engine = BitCrcEngine::for_model(&model)?;
    let vectors = (0..options.messages)
        .map(|_| {
            let message: BitMessage = (0..message_bits).map(|_| rng.gen::<bool>()).collect();
            let crc = engine.compute(model.initial, &message);
            TestVector::new(message, crc)
        })
        .collect();

    Ok(GeneratedSet {
        model,
        message_bits,
        vectors,
    })
}

impl GeneratedSet {
    /// Renders the header and message lines.
    pub fn render(&self) -> String {
        let m = &self.model;
        let mut out = String::new();
        let _ = writeln!(out, "# width                : {} bits", m.width);
        let _ = writeln!(out, "# CRC offset           : {}", self.message_bits);
        let _ = writeln!(out, "# message bits         : 0 .. {}", self.message_bits);
        let _ = writeln!(out, "# truncated polynomial : {:#x}", m.polynomial);
        let _ = writeln!(out, "# initial value        : {:#x}", m.initial);
        let _ = writeln!(out, "# final XOR            : {:#x}", m.final_xor);
        let _ = writeln!(out, "# reflected input      : {}", m.reflected_input);
        let _ = writeln!(out, "# reflected output     : {}", m.reflected_output);
        out.push('\n');
        let width = m.width as usize;
        for vector in &self.vectors {
            let _ = writeln!(out, "{} {:0width$b}", vector.message, vector.expected_crc);
        }
        out
    }
}

/// Runs the `bruteforce-crc generate` command.
pub fn run(args: &GenerateArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let options = GenerateOptions {
        width: args.width,
        bits: args.bits,
        final_xor: args.final_xor,
        messages: args.messages,
    };
    let set = match args.seed {
        Some(seed) => generate(&mut StdRng::seed_from_u64(seed), &options)?,
        None => generate(&mut rand::thread_rng(), &options)?,
    };
    print!("{}", set.render());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_vectors, InputOptions};
    use bfcrc_search::model_matches;

    #[test]
    fn rendered_output_reads_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = GenerateOptions {
            messages: 4,
            ..GenerateOptions::default()
        };
        let set = generate(&mut rng, &options).unwrap();
        let parsed = parse_vectors(
            &set.render(),
            &InputOptions {
                width: set.model.width,
                offs_crc: None,
                start: 0,
                end: None,
            },
        )
        .unwrap();
        assert_eq!(parsed, set.vectors);
        assert_eq!(model_matches(&set.model, &parsed), Ok(true));
    }

    #[test]
    fn random_choices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let set = generate(&mut rng, &GenerateOptions::default()).unwrap();
            assert!((5..=16).contains(&set.model.width));
            assert!((30..=80).contains(&set.message_bits));
            if set.model.width >= 12 {
                assert_eq!(set.model.final_xor, 0);
            }
            assert!(set.model.validate().is_ok());
            assert!(set.vectors.is_empty());
        }
    }

    #[test]
    fn explicit_choices_are_used() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = GenerateOptions {
            width: Some(24),
            bits: Some(17),
            final_xor: Some(0xABCDEF),
            messages: 3,
        };
        let set = generate(&mut rng, &options).unwrap();
        assert_eq!(set.model.width, 24);
        assert_eq!(set.model.final_xor, 0xABCDEF);
        assert_eq!(set.vectors.len(), 3);
        assert!(set.vectors.iter().all(|v| v.message.len() == 17));
    }

    #[test]
    fn final_xor_wider_than_width_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = GenerateOptions {
            width: Some(8),
            final_xor: Some(0x100),
            messages: 1,
            ..GenerateOptions::default()
        };
        assert!(generate(&mut rng, &options).is_err());
    }

    #[test]
    fn same_seed_same_output() {
        let options = GenerateOptions {
            messages: 2,
            ..GenerateOptions::default()
        };
        let a = generate(&mut StdRng::seed_from_u64(9), &options).unwrap();
        let b = generate(&mut StdRng::seed_from_u64(9), &options).unwrap();
        assert_eq!(a.render(), b.render());
    }
}
