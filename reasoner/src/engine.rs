//! I define the [`ClosureEngine`], computing the deductive closure of a [`TripleStore`].
//!
//! The engine first inserts the axiomatic triples of its [`RuleSet`],
//! then repeats *passes* until one of them adds no triple.
//! Each pass has a read phase, where all rules are evaluated in parallel
//! against the current content of the store,
//! followed by a write phase, where the union of their proposals is inserted.
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use std::time::Instant;

use deduce_inmem::{TripleIds, TripleStore};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::ruleset::{Rdfs, RuleSet};
use crate::vocab::Vocab;

mod _options;
pub use _options::*;
mod _report;
pub use _report::*;

/// A forward-chaining engine, saturating triple stores under the rule set `R`.
pub struct ClosureEngine<R = Rdfs> {
    options: ClosureOptions,
    _phantom: PhantomData<R>,
}

impl<R: RuleSet> ClosureEngine<R> {
    /// Build an engine with default options.
    pub fn new() -> Self {
        Self::with_options(ClosureOptions::default())
    }

    /// Build an engine with the given options.
    pub fn with_options(options: ClosureOptions) -> Self {
        ClosureEngine {
            options,
            _phantom: PhantomData,
        }
    }

    /// The options of this engine.
    pub fn options(&self) -> &ClosureOptions {
        &self.options
    }

    /// Saturate `store` with all the triples entailed under `R`.
    ///
    /// Triples are only ever added to `store`.
    /// Expanding a store that is already closed performs exactly one pass, which adds nothing.
    pub fn expand(&self, store: &mut TripleStore) -> ClosureReport {
        match self.thread_pool() {
            Some(pool) => pool.install(|| self.run(store)),
            None => self.run(store),
        }
    }

    /// Perform a single pass of all rules (without inserting the axioms),
    /// and return the number of added triples.
    ///
    /// On a store closed by [`expand`](Self::expand), this returns 0.
    pub fn one_pass(&self, store: &mut TripleStore) -> usize {
        let vocab = Vocab::intern(store);
        match self.thread_pool() {
            Some(pool) => pool.install(|| pass::<R>(store, &vocab)),
            None => pass::<R>(store, &vocab),
        }
    }

    fn run(&self, store: &mut TripleStore) -> ClosureReport {
        let start = Instant::now();
        let before = store.len();
        insert_axioms::<R>(store);
        let vocab = Vocab::intern(store);
        let mut passes = 0;
        let state = loop {
            if let Some(max) = self.options.max_passes() {
                if passes >= max {
                    log::warn!("Closure stopped after {passes} passes, before reaching a fixpoint");
                    break ClosureState::Running;
                }
            }
            if let Some(max) = self.options.max_duration() {
                if start.elapsed() >= max {
                    log::warn!(
                        "Closure stopped after {:?} ({passes} passes), before reaching a fixpoint",
                        start.elapsed()
                    );
                    break ClosureState::Running;
                }
            }
            passes += 1;
            let added = pass::<R>(store, &vocab);
            log::debug!("pass {passes}: {added} triples added, {} in store", store.len());
            if added == 0 {
                break ClosureState::Fixpoint;
            }
        };
        let report = ClosureReport {
            state,
            passes,
            added: store.len() - before,
            elapsed: start.elapsed(),
        };
        if report.is_fixpoint() {
            log::info!("{report}");
        }
        report
    }

    fn thread_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self.options.threads()?;
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(err) => {
                log::warn!("Could not build a pool of {threads} threads, using the global pool: {err}");
                None
            }
        }
    }
}

impl<R: RuleSet> Default for ClosureEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ClosureEngine<R> {
    fn clone(&self) -> Self {
        ClosureEngine {
            options: self.options.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ClosureEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureEngine")
            .field("rule_set", &std::any::type_name::<R>())
            .field("options", &self.options)
            .finish()
    }
}

fn insert_axioms<R: RuleSet>(store: &mut TripleStore) {
    for axiom in R::axioms() {
        let ids = axiom.map(|t| store.intern_iri(&t.iri()));
        store.insert_ids(ids);
    }
}

/// Evaluate all rules against `store`, then insert their proposals.
///
/// # Panics
/// If a rule proposes a triple that does not comply with the RDF data model.
fn pass<R: RuleSet>(store: &mut TripleStore, vocab: &Vocab) -> usize {
    let snapshot: &TripleStore = store;
    let proposals: Vec<(&'static str, Vec<TripleIds>)> = R::rules()
        .par_iter()
        .map(|rule| {
            let mut buf = Vec::new();
            (rule.apply)(snapshot, vocab, &mut buf);
            log::trace!("rule {}: {} candidate triples", rule.name, buf.len());
            (rule.name, buf)
        })
        .collect();

    let mut fresh = BTreeSet::new();
    for (name, buf) in proposals {
        for ids in buf {
            if let Err(defect) = snapshot.check_ids(ids) {
                let [s, p, o] = ids.map(|i| snapshot.term(i));
                panic!("Rule {name} produced malformed triple {s} {p} {o} .: {defect}");
            }
            if !snapshot.contains_ids(ids) {
                fresh.insert(ids);
            }
        }
    }

    let added = fresh.len();
    for ids in fresh {
        store.insert_ids(ids);
    }
    added
}
