//! Generation controller: targeted attempts, then relaxed attempts, then the
//! hand-built fallback. Never fails; quality degrades instead.

mod candidate;
mod fallback;

use rand_chacha::rand_core::Rng;

use super::config::{ConfigError, GeneratorConfig};
use super::model::{GeneratedLevel, GenerationOutcome, LayoutVariant};
use super::progression::GenerationParams;
use candidate::{Candidate, build_candidate};

pub use fallback::verify_fallback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Targeted,
    Relaxed,
    Fallback,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds a fresh level for `level_index`. The random source is borrowed
    /// for this call only.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        level_index: u32,
        rng: &mut R,
        variant: LayoutVariant,
    ) -> GeneratedLevel {
        let params = GenerationParams::for_level(level_index);
        let mut phase = Phase::Targeted;
        loop {
            phase = match phase {
                Phase::Targeted => {
                    match self.attempt_loop(rng, variant, &params, self.config.max_attempts) {
                        Some((candidate, attempts)) => {
                            return into_level(
                                candidate,
                                variant,
                                GenerationOutcome::Accepted { attempts },
                            );
                        }
                        None => {
                            log::info!(
                                "level {level_index} {variant:?}: relaxing constraints after {} \
                                 attempts",
                                self.config.max_attempts
                            );
                            Phase::Relaxed
                        }
                    }
                }
                Phase::Relaxed => {
                    let relaxed = params.relaxed();
                    match self.attempt_loop(rng, variant, &relaxed, self.config.relaxed_attempts) {
                        Some((candidate, attempts)) => {
                            return into_level(
                                candidate,
                                variant,
                                GenerationOutcome::Relaxed { attempts },
                            );
                        }
                        None => Phase::Fallback,
                    }
                }
                Phase::Fallback => {
                    log::warn!(
                        "level {level_index} {variant:?}: using fallback layout after {} relaxed \
                         attempts",
                        self.config.relaxed_attempts
                    );
                    return fallback::fallback_level(variant, &params);
                }
            };
        }
    }

    fn attempt_loop<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        variant: LayoutVariant,
        params: &GenerationParams,
        max_attempts: u32,
    ) -> Option<(Candidate, u32)> {
        for attempt in 1..=max_attempts {
            match build_candidate(rng, variant, params, &self.config) {
                Ok(candidate) => return Some((candidate, attempt)),
                Err(rejection) => {
                    log::debug!(
                        "{variant:?} candidate {attempt}/{max_attempts} rejected: {rejection}"
                    );
                }
            }
        }
        None
    }
}

fn into_level(
    candidate: Candidate,
    variant: LayoutVariant,
    outcome: GenerationOutcome,
) -> GeneratedLevel {
    GeneratedLevel {
        grid: candidate.grid,
        start: candidate.start,
        goal: candidate.goal,
        reachable: candidate.reachable,
        variant,
        outcome,
        solution_length: candidate.solution_length,
    }
}
