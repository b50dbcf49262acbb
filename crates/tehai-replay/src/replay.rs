//! Hand replay: threads one hand through a script of steps.

use std::io::Write;
use tehai_core::{ankan_candidates, Call, CallEngine, Hand, RulesOracle, StandardRules, Tile};
use thiserror::Error;
use tracing::{debug, info};

use crate::script::{Legality, Step, StepReport};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Step {index}: discarded {tile} which is not in {hand}")]
    DiscardNotHeld { index: usize, tile: Tile, hand: Hand },

    #[error("Step {index}: {step} is not legal for {hand}")]
    IllegalCall {
        index: usize,
        step: &'static str,
        hand: Hand,
    },

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Replay state for a single hand.
pub struct Replay<O = StandardRules> {
    engine: CallEngine<O>,
    hand: Hand,
    index: usize,
}

impl Replay<StandardRules> {
    pub fn new(hand: Hand) -> Self {
        Self::with_engine(hand, CallEngine::default())
    }
}

impl<O: RulesOracle> Replay<O> {
    pub fn with_engine(hand: Hand, engine: CallEngine<O>) -> Self {
        Self {
            engine,
            hand,
            index: 0,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Apply one step and report the resulting hand.
    pub fn apply(&mut self, step: &Step) -> Result<StepReport, ReplayError> {
        let index = self.index;
        let mut legality = None;

        match step {
            Step::Draw { tile, nokori } => {
                let answers = Legality {
                    tsumo: self.engine.can_tsumo(&self.hand, Some(*tile)),
                    ankan: self.engine.can_ankan(&self.hand, Some(*tile), *nokori),
                    kakan: self.engine.can_kakan(&self.hand, Some(*tile), *nokori),
                };
                debug!(index, %tile, ?answers, "drew tile");
                legality = Some(answers);
                self.hand.add_tile(*tile);
            }
            Step::Discard { tile } => {
                if self.hand.remove_tiles(&[*tile]) == 0 {
                    return Err(ReplayError::DiscardNotHeld {
                        index,
                        tile: *tile,
                        hand: self.hand.clone(),
                    });
                }
            }
            Step::Call(call) => {
                if !self.is_declarable(call) {
                    return Err(ReplayError::IllegalCall {
                        index,
                        step: step.name(),
                        hand: self.hand.clone(),
                    });
                }
                let hand = std::mem::take(&mut self.hand);
                self.hand = hand.apply(call);
            }
        }

        self.index += 1;
        Ok(StepReport {
            index,
            step: step.name().to_string(),
            hand: self.hand.clone(),
            legality,
        })
    }

    /// Apply every step in order, writing each report to `out` as soon as
    /// the step succeeds. Stops at the first illegal step; reports already
    /// written stay written.
    pub fn run<W: Write>(
        &mut self,
        steps: &[Step],
        out: &mut W,
        pretty: bool,
    ) -> Result<(), ReplayError> {
        info!(hand = %self.hand, steps = steps.len(), "replay started");

        for step in steps {
            let report = self.apply(step)?;
            let line = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// The tiles a call needs must be in hand. Drawn tiles are already in
    /// the hand here, so kan checks run without a separate drawn tile.
    fn is_declarable(&self, call: &Call) -> bool {
        match call {
            Call::Furo { used, .. } => {
                let mut probe = self.hand.clone();
                probe.remove_tiles(used) == used.len()
            }
            Call::Kakan { tile } => self
                .engine
                .oracle()
                .kakan_candidates(&self.hand)
                .contains(tile),
            Call::Ankan { tile } => ankan_candidates(&self.hand).contains(tile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t(s: &str) -> Tile {
        s.parse().unwrap()
    }

    fn script(json: &str) -> crate::script::Script {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_draw_reports_legality() {
        let mut replay = Replay::new("1m2m3m4m5m6m7m8m9m1p1p1p5z".parse().unwrap());
        let report = replay
            .apply(&Step::Draw {
                tile: t("5z"),
                nokori: 12,
            })
            .unwrap();

        assert_eq!(
            report.legality,
            Some(Legality {
                tsumo: true,
                ankan: false,
                kakan: false,
            })
        );
        assert_eq!(report.hand.to_string(), "1m2m3m4m5m6m7m8m9m1p1p1p5z5z");
    }

    #[test]
    fn test_script_runs_calls_in_order() {
        let s = script(
            r#"{
                "hand": "1m1m1m2p3p5s5s5s7z7z8s8s9s",
                "steps": [
                    {"type": "Call", "payload": {"type": "Furo", "discard": "4p", "used": "23p"}},
                    {"type": "Discard", "payload": {"tile": "9s"}},
                    {"type": "Draw", "payload": {"tile": "1m", "nokori": 50}},
                    {"type": "Call", "payload": {"type": "Ankan", "tile": "1m"}}
                ]
            }"#,
        );

        let mut out = Vec::new();
        Replay::new(s.hand.clone())
            .run(&s.steps, &mut out, false)
            .unwrap();
        let reports: Vec<StepReport> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let hands: Vec<String> = reports.iter().map(|r| r.hand.to_string()).collect();

        assert_eq!(
            hands,
            vec![
                "1m1m1m5s5s5s8s8s9s7z7z<2p3p4p>",
                "1m1m1m5s5s5s8s8s7z7z<2p3p4p>",
                "1m1m1m1m5s5s5s8s8s7z7z<2p3p4p>",
                "5s5s5s8s8s7z7z(1m1m1m1m)<2p3p4p>",
            ]
        );
        assert_eq!(reports[2].legality.map(|l| l.ankan), Some(true));
        assert_eq!(reports[3].step, "ankan");
    }

    #[test]
    fn test_reports_before_a_failing_step_are_written() {
        let s = script(
            r#"{
                "hand": "1m2m",
                "steps": [
                    {"type": "Discard", "payload": {"tile": "1m"}},
                    {"type": "Discard", "payload": {"tile": "3m"}}
                ]
            }"#,
        );

        let mut out = Vec::new();
        let err = Replay::new(s.hand.clone())
            .run(&s.steps, &mut out, false)
            .unwrap_err();

        assert!(matches!(err, ReplayError::DiscardNotHeld { index: 1, .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"index\":0,\"step\":\"discard\",\"hand\":\"2m\"}\n"
        );
    }

    #[test]
    fn test_discard_must_be_held() {
        let mut replay = Replay::new("1m2m".parse().unwrap());
        let err = replay.apply(&Step::Discard { tile: t("3m") }).unwrap_err();
        assert!(matches!(err, ReplayError::DiscardNotHeld { index: 0, .. }));
        assert_eq!(replay.hand().to_string(), "1m2m");
    }

    #[test]
    fn test_illegal_calls_are_rejected() {
        let mut replay = Replay::new("5p5p5p1m<2z2z2z>".parse().unwrap());
        for call in [
            Call::Ankan { tile: t("5p") },
            Call::Kakan { tile: t("1m") },
            Call::Furo {
                discard: t("3m"),
                used: vec![t("1m"), t("2m")],
            },
        ] {
            let err = replay.apply(&Step::Call(call)).unwrap_err();
            assert!(matches!(err, ReplayError::IllegalCall { .. }));
        }
        assert_eq!(replay.hand().to_string(), "1m5p5p5p<2z2z2z>");
    }

    #[test]
    fn test_report_json_omits_missing_legality() {
        let mut replay = Replay::new("1m2m".parse().unwrap());
        let report = replay.apply(&Step::Discard { tile: t("2m") }).unwrap();
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"index":0,"step":"discard","hand":"1m"}"#
        );
    }
}
