//! Search configuration: which CRC parameters are fixed and which are probed.

use crate::dimension::Dimension;
use crate::error::SearchError;
use bfcrc_engine::{check_fits, check_width, max_value, CrcModel, FeedOrder};
use serde::Deserialize;

/// Flat, user-facing search settings as read from the CLI or a config file.
///
/// A `polynomial` of zero means "probe the polynomial" over
/// `polynomial_start..=polynomial_end` (defaulting to the whole width). The
/// `probe_*` flags select whether the matching fixed value is used or the
/// whole width is searched. Turned into a validated [`SearchConfig`] by
/// [`configure`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchParams {
    /// CRC width in bits.
    pub width: u8,
    /// Fixed truncated polynomial, or 0 to probe.
    pub polynomial: u32,
    /// First polynomial to probe.
    pub polynomial_start: Option<u32>,
    /// Last polynomial to probe (inclusive).
    pub polynomial_end: Option<u32>,
    /// Probe every initial value.
    pub probe_initial: bool,
    /// Fixed initial value.
    pub initial: u32,
    /// Probe every final XOR value.
    pub probe_final_xor: bool,
    /// Fixed final XOR value.
    pub final_xor: u32,
    /// Probe both input reflections.
    pub probe_reflected_input: bool,
    /// Fixed input reflection.
    pub reflected_input: bool,
    /// Probe both output reflections.
    pub probe_reflected_output: bool,
    /// Fixed output reflection.
    pub reflected_output: bool,
    /// Feed order used for every candidate.
    pub feed_order: FeedOrder,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            width: 16,
            polynomial: 0,
            polynomial_start: None,
            polynomial_end: None,
            probe_initial: false,
            initial: 0,
            probe_final_xor: false,
            final_xor: 0,
            probe_reflected_input: false,
            reflected_input: false,
            probe_reflected_output: false,
            reflected_output: false,
            feed_order: FeedOrder::Auto,
        }
    }
}

/// A validated description of the parameter space for one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// CRC width in bits, `1..=32`.
    pub width: u8,
    /// Truncated polynomial axis.
    pub polynomial: Dimension<u32>,
    /// Initial value axis.
    pub initial: Dimension<u32>,
    /// Final XOR axis.
    pub final_xor: Dimension<u32>,
    /// Input reflection axis.
    pub reflected_input: Dimension<bool>,
    /// Output reflection axis.
    pub reflected_output: Dimension<bool>,
    /// Feed order applied to every candidate.
    pub feed_order: FeedOrder,
}

/// Validates `params` and builds the search space they describe.
pub fn configure(params: &SearchParams) -> Result<SearchConfig, SearchError> {
    let width = check_width(params.width as u32)?;

    let polynomial = if params.polynomial > 0 {
        Dimension::Fixed(params.polynomial)
    } else {
        let start = params.polynomial_start.unwrap_or(0);
        let end = params
            .polynomial_end
            .unwrap_or(max_value(width) as u32);
        Dimension::Probed(start..=end)
    };

    let initial = if params.probe_initial {
        Dimension::full(width)
    } else {
        Dimension::Fixed(params.initial)
    };

    let final_xor = if params.probe_final_xor {
        Dimension::full(width)
    } else {
        Dimension::Fixed(params.final_xor)
    };

    let reflected_input = if params.probe_reflected_input {
        Dimension::both()
    } else {
        Dimension::Fixed(params.reflected_input)
    };

    let reflected_output = if params.probe_reflected_output {
        Dimension::both()
    } else {
        Dimension::Fixed(params.reflected_output)
    };

    let config = SearchConfig {
        width,
        polynomial,
        initial,
        final_xor,
        reflected_input,
        reflected_output,
        feed_order: params.feed_order,
    };
    config.validate()?;
    Ok(config)
}

impl SearchConfig {
    /// A search space containing exactly `model`.
    pub fn fixed(model: &CrcModel) -> Self {
        Self {
            width: model.width,
            polynomial: Dimension::Fixed(model.polynomial),
            initial: Dimension::Fixed(model.initial),
            final_xor: Dimension::Fixed(model.final_xor),
            reflected_input: Dimension::Fixed(model.reflected_input),
            reflected_output: Dimension::Fixed(model.reflected_output),
            feed_order: model.feed_order,
        }
    }

    /// Checks the width and that every value and range bound fits within it.
    pub fn validate(&self) -> Result<(), SearchError> {
        let width = check_width(self.width as u32)?;
        let axes = [
            ("polynomial", &self.polynomial),
            ("initial", &self.initial),
            ("final_xor", &self.final_xor),
        ];
        for (field, dim) in axes {
            let span = dim.span();
            check_fits(field, *span.start(), width)?;
            check_fits(field, *span.end(), width)?;
        }
        if let Dimension::Probed(range) = &self.polynomial {
            if range.is_empty() {
                return Err(SearchError::InvalidPolynomialRange {
                    start: *range.start(),
                    end: *range.end(),
                });
            }
        }
        Ok(())
    }

    /// Total number of candidate models, saturating at `u64::MAX`.
    ///
    /// This is the denominator for progress and ETA reporting.
    pub fn crc_steps(&self) -> u64 {
        [
            self.polynomial.len(),
            self.final_xor.len(),
            self.initial.len(),
            self.reflected_input.len(),
            self.reflected_output.len(),
        ]
        .into_iter()
        .fold(1u64, u64::saturating_mul)
    }

    /// Returns `true` if `model` lies inside this search space.
    pub fn contains(&self, model: &CrcModel) -> bool {
        model.width == self.width
            && self.polynomial.contains(model.polynomial)
            && self.initial.contains(model.initial)
            && self.final_xor.contains(model.final_xor)
            && self.reflected_input.contains(model.reflected_input)
            && self.reflected_output.contains(model.reflected_output)
    }

    /// Builds the result record for one candidate of this search.
    pub fn model(
        &self,
        polynomial: u32,
        initial: u32,
        final_xor: u32,
        reflected_input: bool,
        reflected_output: bool,
    ) -> CrcModel {
        CrcModel {
            width: self.width,
            polynomial,
            initial,
            final_xor,
            reflected_input,
            reflected_output,
            feed_order: self.feed_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfcrc_engine::EngineError;

    #[test]
    fn defaults_probe_polynomial_only() {
        let config = configure(&SearchParams::default()).unwrap();
        assert_eq!(config.width, 16);
        assert_eq!(config.polynomial, Dimension::Probed(0..=0xFFFF));
        assert_eq!(config.initial, Dimension::Fixed(0));
        assert_eq!(config.final_xor, Dimension::Fixed(0));
        assert_eq!(config.reflected_input, Dimension::Fixed(false));
        assert_eq!(config.crc_steps(), 0x1_0000);
    }

    #[test]
    fn fixed_polynomial_ignores_range() {
        let params = SearchParams {
            polynomial: 0x1021,
            polynomial_start: Some(0x10),
            ..SearchParams::default()
        };
        let config = configure(&params).unwrap();
        assert_eq!(config.polynomial, Dimension::Fixed(0x1021));
    }

    #[test]
    fn probe_flags_expand_to_full_width() {
        let params = SearchParams {
            width: 8,
            probe_initial: true,
            probe_final_xor: true,
            probe_reflected_input: true,
            probe_reflected_output: true,
            ..SearchParams::default()
        };
        let config = configure(&params).unwrap();
        assert_eq!(config.initial, Dimension::Probed(0..=0xFF));
        assert_eq!(config.final_xor, Dimension::Probed(0..=0xFF));
        assert_eq!(config.reflected_input, Dimension::both());
        assert_eq!(config.crc_steps(), 256 * 256 * 256 * 4);
    }

    #[test]
    fn rejects_bad_width() {
        let params = SearchParams {
            width: 33,
            ..SearchParams::default()
        };
        assert!(matches!(
            configure(&params),
            Err(SearchError::Engine(EngineError::InvalidWidth(33)))
        ));
    }

    #[test]
    fn rejects_wide_fixed_values() {
        let params = SearchParams {
            width: 8,
            initial: 0x100,
            ..SearchParams::default()
        };
        assert!(matches!(
            configure(&params),
            Err(SearchError::Engine(EngineError::ValueTooWide {
                field: "initial",
                ..
            }))
        ));

        let params = SearchParams {
            width: 8,
            polynomial: 0x107,
            ..SearchParams::default()
        };
        assert!(configure(&params).is_err());
    }

    #[test]
    fn rejects_inverted_polynomial_range() {
        let params = SearchParams {
            width: 8,
            polynomial_start: Some(0x80),
            polynomial_end: Some(0x10),
            ..SearchParams::default()
        };
        assert!(matches!(
            configure(&params),
            Err(SearchError::InvalidPolynomialRange { .. })
        ));
    }

    #[test]
    fn rejects_range_past_width() {
        let params = SearchParams {
            width: 8,
            polynomial_end: Some(0x1FF),
            ..SearchParams::default()
        };
        assert!(configure(&params).is_err());
    }

    #[test]
    fn crc_steps_saturates() {
        let params = SearchParams {
            width: 32,
            probe_initial: true,
            probe_final_xor: true,
            ..SearchParams::default()
        };
        assert_eq!(configure(&params).unwrap().crc_steps(), u64::MAX);
    }

    #[test]
    fn contains_model() {
        let params = SearchParams {
            width: 16,
            polynomial: 0x1021,
            probe_initial: true,
            ..SearchParams::default()
        };
        let config = configure(&params).unwrap();
        assert!(config.contains(&config.model(0x1021, 0xFFFF, 0, false, false)));
        assert!(!config.contains(&config.model(0x8005, 0xFFFF, 0, false, false)));
        assert!(!config.contains(&config.model(0x1021, 0xFFFF, 0, true, false)));
    }

    #[test]
    fn deserialize_from_json() {
        let params: SearchParams = serde_json::from_str(
            r#"{"width": 8, "probe_initial": true, "feed_order": "bytewise-reversed"}"#,
        )
        .unwrap();
        assert_eq!(params.width, 8);
        assert!(params.probe_initial);
        assert_eq!(params.feed_order, FeedOrder::BytewiseReversed);
        assert_eq!(params.polynomial, 0);
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let result: Result<SearchParams, _> = serde_json::from_str(r#"{"widht": 8}"#);
        assert!(result.is_err());
    }
}
