//! The Memetic Tabu Search run.
//!
//! One run walks Initialize → LocalSearch → (Combine → LocalSearch →
//! Accept/Reject)* → Terminate. Everything stochastic draws from a
//! single `SmallRng` seeded per run, so identical inputs replay the
//! identical trajectory, including the per-step best-energy history.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use merit_core::{Sampler, SamplerSettings, Sequence, energy};

use crate::config::{InitStrategy, MtsConfig, ParentSelection};
use crate::error::{MtsError, MtsResult};
use crate::operators::{crossover, mutate};
use crate::population::{Individual, Population};
use crate::tabu::TabuList;

/// How the population was actually initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitKind {
    /// Uniform random, as configured.
    Random,
    /// Seeded from the sampler's distribution, as configured.
    Quantum,
    /// Quantum was configured but the sampler failed; fell back to
    /// random (a warning was emitted).
    RandomFallback,
}

impl std::fmt::Display for InitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitKind::Random => f.write_str("random"),
            InitKind::Quantum => f.write_str("quantum"),
            InitKind::RandomFallback => f.write_str("random_fallback"),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtsOutcome {
    /// Best sequence found across the whole run.
    pub best: Sequence,
    /// Its energy.
    pub best_energy: u64,
    /// Best-known energy after each combine step; monotone
    /// non-increasing by construction.
    pub history: Vec<u64>,
    /// How the population was actually initialized.
    pub init_used: InitKind,
    /// Number of energy-function evaluations performed.
    pub evaluations: u64,
}

/// A configured Memetic Tabu Search.
pub struct MemeticTabuSearch<'a> {
    config: MtsConfig,
    sampler: Option<(&'a dyn Sampler, SamplerSettings)>,
}

impl<'a> MemeticTabuSearch<'a> {
    /// Create a search with the given configuration and no sampler.
    pub fn new(config: MtsConfig) -> Self {
        Self {
            config,
            sampler: None,
        }
    }

    /// Attach a sampler for quantum-seeded initialization.
    #[must_use]
    pub fn with_sampler(mut self, sampler: &'a dyn Sampler, settings: SamplerSettings) -> Self {
        self.sampler = Some((sampler, settings));
        self
    }

    /// Execute one search run over sequences of length `n`.
    pub fn run(&self, n: usize, seed: u64) -> MtsResult<MtsOutcome> {
        self.config.validate()?;
        if n < 2 {
            return Err(MtsError::InvalidConfig(format!(
                "sequence length must be at least 2, got {n}"
            )));
        }
        if self.config.init == InitStrategy::Quantum && self.sampler.is_none() {
            return Err(MtsError::SamplerNotConfigured);
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut evaluations = 0u64;

        let (mut population, init_used) = self.initialize(n, &mut rng, &mut evaluations)?;
        for i in 0..population.len() {
            self.local_search(population.member_mut(i), &mut evaluations);
        }

        let mut best = population.best().clone();
        info!(
            n,
            seed,
            init = %init_used,
            initial_best = best.energy,
            "starting combine phase"
        );

        let mut history = Vec::with_capacity(self.config.mts_steps);
        for step in 0..self.config.mts_steps {
            let (a, b) = self.select_parents(&population, &mut rng);
            let child = crossover(&a, &b, &mut rng)?;
            let child = mutate(&child, self.config.mutation_rate, &mut rng);

            let child_energy = energy(&child);
            evaluations += 1;
            let mut offspring = Individual::new(child, child_energy);
            self.local_search(&mut offspring, &mut evaluations);

            if offspring.energy < best.energy {
                debug!(step, energy = offspring.energy, "new best");
                best = offspring.clone();
            }

            let worst = population.worst_index();
            if offspring.energy < population.members()[worst].energy
                && !population.contains(&offspring.sequence)
            {
                population.replace(worst, offspring);
            }

            history.push(best.energy);
        }

        info!(
            n,
            seed,
            best_energy = best.energy,
            evaluations,
            "search finished"
        );
        Ok(MtsOutcome {
            best: best.sequence,
            best_energy: best.energy,
            history,
            init_used,
            evaluations,
        })
    }

    /// Build the initial population.
    fn initialize(
        &self,
        n: usize,
        rng: &mut SmallRng,
        evaluations: &mut u64,
    ) -> MtsResult<(Population, InitKind)> {
        let size = self.config.population_size;

        if self.config.init == InitStrategy::Quantum {
            // Presence was checked in `run`.
            let (sampler, settings) = self.sampler.expect("sampler checked before init");
            let request = settings.request(n, rng.next_u64());
            match sampler.sample(&request) {
                Ok(distribution) => {
                    let usable: Vec<(Sequence, u64)> = distribution
                        .iter()
                        .filter(|(seq, count)| seq.len() == n && *count > 0)
                        .map(|(seq, count)| (seq.clone(), count))
                        .collect();
                    let skipped = distribution.len() - usable.len();
                    if skipped > 0 {
                        warn!(
                            skipped,
                            expected = n,
                            "sampler returned unusable distribution entries; skipping them"
                        );
                    }
                    if usable.is_empty() {
                        warn!("sampler distribution has no usable entries; falling back to random initialization");
                    } else {
                        let members = Self::draw_weighted(&usable, size, rng, evaluations);
                        return Ok((Population::new(members), InitKind::Quantum));
                    }
                }
                Err(err) => {
                    warn!(error = %err, "sampler failed; falling back to random initialization");
                }
            }
            let members = Self::random_members(n, size, rng, evaluations)?;
            return Ok((Population::new(members), InitKind::RandomFallback));
        }

        let members = Self::random_members(n, size, rng, evaluations)?;
        Ok((Population::new(members), InitKind::Random))
    }

    fn random_members(
        n: usize,
        size: usize,
        rng: &mut SmallRng,
        evaluations: &mut u64,
    ) -> MtsResult<Vec<Individual>> {
        (0..size)
            .map(|_| {
                let seq = Sequence::random(n, rng)?;
                let e = energy(&seq);
                *evaluations += 1;
                Ok(Individual::new(seq, e))
            })
            .collect()
    }

    /// Draw `size` members from the distribution, weighted by observed
    /// counts (with replacement).
    fn draw_weighted(
        usable: &[(Sequence, u64)],
        size: usize,
        rng: &mut SmallRng,
        evaluations: &mut u64,
    ) -> Vec<Individual> {
        let total: u64 = usable.iter().map(|(_, c)| c).sum();
        (0..size)
            .map(|_| {
                let mut r = rng.gen_range(0..total);
                let mut picked = &usable[usable.len() - 1].0;
                for (seq, count) in usable {
                    if r < *count {
                        picked = seq;
                        break;
                    }
                    r -= count;
                }
                let e = energy(picked);
                *evaluations += 1;
                Individual::new(picked.clone(), e)
            })
            .collect()
    }

    /// Tabu-constrained single-flip descent on one individual.
    ///
    /// Scans flip positions in index order and applies the first
    /// non-tabu flip that does not worsen the energy (first-found-wins
    /// tie-break). Stops when no admissible move exists, after
    /// `local_iters` iterations, or after `patience` consecutive
    /// non-improving accepts.
    fn local_search(&self, individual: &mut Individual, evaluations: &mut u64) {
        let n = individual.sequence.len();
        let mut tabu = TabuList::new(self.config.tabu_tenure);
        let mut stagnant = 0usize;

        for iter in 0..self.config.local_iters {
            let now = iter as u64;
            tabu.purge(now);

            let mut chosen: Option<(usize, u64)> = None;
            for bit in 0..n {
                if tabu.is_tabu(bit, now) {
                    continue;
                }
                let e = energy(&individual.sequence.flipped(bit));
                *evaluations += 1;
                if e <= individual.energy {
                    chosen = Some((bit, e));
                    break;
                }
            }

            // No admissible move: the local phase simply ends.
            let Some((bit, e)) = chosen else { break };

            let improved = e < individual.energy;
            individual.sequence = individual.sequence.flipped(bit);
            individual.energy = e;
            tabu.forbid(bit, now);

            if improved {
                stagnant = 0;
            } else {
                stagnant += 1;
                if stagnant >= self.config.patience {
                    break;
                }
            }
        }
    }

    fn select_parents<R: Rng + ?Sized>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> (Sequence, Sequence) {
        let members = population.members();
        let pick_uniform = |rng: &mut R| members[rng.gen_range(0..members.len())].clone();
        match self.config.parent_selection {
            ParentSelection::Uniform => {
                let a = pick_uniform(rng);
                let b = pick_uniform(rng);
                (a.sequence, b.sequence)
            }
            ParentSelection::Fitness => {
                let tournament = |rng: &mut R| {
                    let x = pick_uniform(rng);
                    let y = pick_uniform(rng);
                    if y.energy < x.energy { y } else { x }
                };
                let a = tournament(rng);
                let b = tournament(rng);
                (a.sequence, b.sequence)
            }
        }
    }
}
