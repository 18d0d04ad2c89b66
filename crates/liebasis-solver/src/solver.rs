//! The basis-closure loop.
//!
//! Given derivations D_1, ..., D_m of an algebra with generators
//! x_0, ..., x_{n-1}, the solver decides whether the Lie algebra they
//! generate contains every d/dx_i. It runs a Buchberger-style completion:
//!
//! 1. Pop the lowest-degree pending candidate (FIFO among equal degrees).
//! 2. Reduce it against the basis by leading term.
//! 3. Discard it if it vanished; otherwise normalize it to leading
//!    coefficient 1 and insert it at its (component, monomial) key.
//! 4. A basis element with leading monomial 1 is c · d/dx_i plus constant
//!    multiples of d/dx_j for j < i; it marks target i as found.
//! 5. Queue the bracket of the new element with every earlier one.
//!
//! The closure of an arbitrary generating set need not be finite, so the
//! loop is capped by an iteration budget. A negative answer is therefore
//! only inconclusive.

use std::fmt;
use std::sync::Arc;

use liebasis_derivation::Derivation;
use liebasis_poly::Algebra;
use tracing::{debug, info, info_span, trace, warn};

use crate::basis::{monic, BasisStore};
use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::events::SolverEvent;
use crate::queue::WorkQueue;

/// Where the solver is in its run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverState {
    /// Candidates are pending and budget remains.
    Running,
    /// Every d/dx_i has been found.
    Succeeded,
    /// The queue emptied without success.
    Exhausted,
    /// The iteration budget ran out without success.
    BudgetExceeded,
}

impl SolverState {
    /// Returns true for every state except `Running`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != SolverState::Running
    }
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverState::Running => "running",
            SolverState::Succeeded => "succeeded",
            SolverState::Exhausted => "exhausted",
            SolverState::BudgetExceeded => "budget exceeded",
        };
        f.write_str(name)
    }
}

/// Outcome of [`LieBasisSolver::run`].
#[derive(Debug)]
pub struct SolverReport<A: Algebra> {
    /// Terminal state.
    pub state: SolverState,
    /// Number of candidates popped.
    pub iterations: usize,
    /// Number of distinct d/dx_i found.
    pub targets_found: usize,
    /// Every recorded transition, in order.
    pub events: Vec<SolverEvent>,
    /// On success, the exact operators d/dx_0, ..., d/dx_{n-1} recovered
    /// from the basis.
    pub partials: Option<Vec<Derivation<A>>>,
}

impl<A: Algebra> SolverReport<A> {
    /// True iff every d/dx_i was reconstructed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state == SolverState::Succeeded
    }
}

/// Decides whether a set of derivations generates all d/dx_i.
///
/// A solver is single-use: [`run`](Self::run) consumes it. Callers that
/// want to interleave their own logic can drive it with
/// [`step`](Self::step) instead.
#[derive(Debug)]
pub struct LieBasisSolver<A: Algebra> {
    algebra: Arc<A>,
    config: SolverConfig,
    basis: BasisStore<A>,
    queue: WorkQueue<Derivation<A>>,
    /// Accepted elements in acceptance order.
    processed: Vec<Derivation<A>>,
    targets: Vec<bool>,
    iterations: usize,
    state: SolverState,
    events: Vec<SolverEvent>,
    announced: bool,
}

impl<A: Algebra> LieBasisSolver<A> {
    /// Seeds a solver with the given generators.
    ///
    /// # Errors
    ///
    /// Fails on an empty generator list, generators over different
    /// algebras, or a zero iteration budget.
    pub fn new(generators: Vec<Derivation<A>>, config: SolverConfig) -> Result<Self, SolverError> {
        let first = generators.first().ok_or(SolverError::EmptyGenerators)?;
        if let Some(index) = generators.iter().position(|g| !g.same_algebra(first)) {
            return Err(SolverError::MixedAlgebras { index });
        }
        config.validate()?;

        let algebra = Arc::clone(first.algebra());
        let n = algebra.num_gens();

        let mut queue = WorkQueue::new();
        let mut events = Vec::with_capacity(generators.len());
        for (index, g) in generators.into_iter().enumerate() {
            let degree = g.degree();
            events.push(SolverEvent::Seeded { index, degree });
            queue.push(degree, g);
        }

        Ok(Self {
            algebra,
            config,
            basis: BasisStore::new(n),
            queue,
            processed: Vec::new(),
            targets: vec![false; n],
            iterations: 0,
            state: SolverState::Running,
            events,
            announced: false,
        })
    }

    /// Performs one transition and returns the resulting state.
    ///
    /// Once a terminal state is reached, further calls return it unchanged.
    pub fn step(&mut self) -> SolverState {
        if self.state.is_terminal() {
            return self.state;
        }
        if self.queue.is_empty() {
            return self.finish(SolverState::Exhausted);
        }
        if self.iterations >= self.config.max_iter {
            return self.finish(SolverState::BudgetExceeded);
        }
        let Some((_, candidate)) = self.queue.pop() else {
            return self.finish(SolverState::Exhausted);
        };

        self.iterations += 1;
        let iteration = self.iterations;

        let reduced = self.basis.reduce(candidate);
        let Some((lt, element)) = monic(&reduced) else {
            trace!(iteration, "candidate reduced to zero");
            self.events.push(SolverEvent::Annihilated { iteration });
            return self.state;
        };

        let replaced = self.basis.insert(lt.key(), element.clone()).is_some();
        debug!(
            iteration,
            component = lt.component,
            monomial = %lt.monomial.display_with(self.algebra.gen_names()),
            degree = lt.monomial.total_degree(),
            replaced,
            "accepted basis element"
        );
        self.events.push(SolverEvent::Accepted {
            iteration,
            component: lt.component,
            monomial: lt.monomial.clone(),
            replaced,
        });

        if lt.is_constant() {
            self.mark_target(lt.component);
            if self.all_found() {
                if self.config.stop_on_success {
                    return self.finish(SolverState::Succeeded);
                }
                self.announce_success();
            }
        }

        for old in &self.processed {
            let bracket = element.bracket(old);
            self.queue.push(bracket.degree(), bracket);
        }
        self.processed.push(element);

        SolverState::Running
    }

    /// Steps until a terminal state and reports the outcome.
    #[must_use]
    pub fn run(mut self) -> SolverReport<A> {
        let span = info_span!(
            "lie_basis_closure",
            generators = self.queue.len(),
            gens = self.algebra.num_gens()
        );
        let _guard = span.enter();
        info!(max_iter = self.config.max_iter, "starting basis closure");

        while !self.step().is_terminal() {}

        let partials = self.recover_partials();
        SolverReport {
            state: self.state,
            iterations: self.iterations,
            targets_found: self.targets_found(),
            events: self.events,
            partials,
        }
    }

    fn mark_target(&mut self, component: usize) {
        if self.targets[component] {
            return;
        }
        self.targets[component] = true;
        info!(
            iteration = self.iterations,
            target = %self.algebra.gen_names()[component],
            "found partial derivative"
        );
        self.events.push(SolverEvent::TargetFound {
            iteration: self.iterations,
            component,
        });
    }

    fn announce_success(&mut self) {
        if self.announced {
            return;
        }
        self.announced = true;
        info!(
            iterations = self.iterations,
            gens = self.targets.len(),
            "all partial derivatives found"
        );
        self.events.push(SolverEvent::Succeeded {
            iteration: self.iterations,
        });
    }

    /// Enters a terminal state. Success wins whenever every target is found.
    fn finish(&mut self, stopped: SolverState) -> SolverState {
        if self.all_found() {
            self.announce_success();
            self.state = SolverState::Succeeded;
        } else {
            warn!(
                state = %stopped,
                iterations = self.iterations,
                found = self.targets_found(),
                gens = self.targets.len(),
                max_iter = self.config.max_iter,
                "basis closure stopped without all partial derivatives"
            );
            self.events.push(SolverEvent::Stopped {
                state: stopped,
                iterations: self.iterations,
                targets_found: self.targets_found(),
            });
            self.state = stopped;
        }
        self.state
    }

    /// Recovers d/dx_0, ..., d/dx_{n-1} from the constant basis entries.
    ///
    /// The entry keyed (i, 1) is d/dx_i + Σ_{j<i} c_j d/dx_j: a nonzero
    /// image at j > i would lead instead. Subtracting c_j times the already
    /// recovered d/dx_j leaves d/dx_i.
    fn recover_partials(&self) -> Option<Vec<Derivation<A>>> {
        if !self.all_found() {
            return None;
        }
        let mut partials: Vec<Derivation<A>> = Vec::with_capacity(self.targets.len());
        for i in 0..self.targets.len() {
            let entry = self.basis.constant_entry(i)?;
            let mut exact = entry.clone();
            for (j, partial) in partials.iter().enumerate() {
                let image = entry.image(j);
                if image.is_zero() {
                    continue;
                }
                exact = exact.sub_scaled(&image.as_constant()?, partial);
            }
            partials.push(exact);
        }
        Some(partials)
    }

    fn all_found(&self) -> bool {
        self.targets.iter().all(|&t| t)
    }

    /// The algebra the generators act on.
    #[must_use]
    pub fn algebra(&self) -> &Arc<A> {
        &self.algebra
    }

    /// The run configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Number of candidates popped so far.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of distinct d/dx_i found so far.
    #[must_use]
    pub fn targets_found(&self) -> usize {
        self.targets.iter().filter(|&&t| t).count()
    }

    /// Per-generator flags: entry i is true once d/dx_i has been found.
    #[must_use]
    pub fn target_flags(&self) -> &[bool] {
        &self.targets
    }

    /// The basis accumulated so far.
    #[must_use]
    pub fn basis(&self) -> &BasisStore<A> {
        &self.basis
    }

    /// Number of pending candidates.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[SolverEvent] {
        &self.events
    }
}

/// Returns true iff `generators` are shown to generate every d/dx_i within
/// `max_iter` iterations.
///
/// # Errors
///
/// Fails on an empty generator list, generators over different algebras,
/// or a zero budget.
pub fn check<A: Algebra>(generators: Vec<Derivation<A>>, max_iter: usize) -> Result<bool, SolverError> {
    let solver = LieBasisSolver::new(generators, SolverConfig::with_max_iter(max_iter))?;
    Ok(solver.run().is_success())
}
