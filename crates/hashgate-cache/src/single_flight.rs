use crate::TokenCache;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use hashgate_core::{CoreError, Result, Token};
use hashgate_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A computation every caller racing on the same key awaits.
type InFlight = Shared<BoxFuture<'static, Result<Token>>>;

/// Per-key state. A key that is not in the map is absent.
#[derive(Clone)]
enum Slot {
    Computing(InFlight),
    Present(Token),
}

/// An unbounded, process-local token cache with single-flight semantics.
///
/// Each key moves from absent to computing to present, and never back once
/// present. Only the first caller for an absent key starts a computation;
/// everyone else arriving while it runs awaits that same computation and
/// receives the identical token.
///
/// # Locking
///
/// The map is sharded. A shard lock is held only for the membership check and
/// for the absent-to-computing transition. Salt generation and hashing run on
/// the blocking thread pool with no lock held, so keys never wait on each
/// other's computations.
///
/// # Cancellation
///
/// A started computation is detached from its callers. If every caller gives
/// up, it still runs to completion and commits its token for the next caller.
///
/// # Failures
///
/// If the generator fails, every caller waiting on that computation receives
/// the same error and the key goes back to absent. Nothing is retried
/// automatically.
pub struct SingleFlightCache<G> {
    generator: Arc<G>,
    slots: Arc<DashMap<String, Slot>>,
}

impl<G: Generator> SingleFlightCache<G> {
    /// Creates an empty cache in front of `generator`.
    pub fn new(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
            slots: Arc::new(DashMap::new()),
        }
    }

    /// Number of keys that are either present or being computed.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn lookup(&self, input: &str) -> Option<Slot> {
        self.slots.get(input).map(|slot| slot.value().clone())
    }

    /// Moves an absent key to computing, or returns whatever slot won the race.
    fn claim(&self, input: &str) -> Slot {
        match self.slots.entry(input.to_owned()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let flight = self.spawn_computation(entry.key().clone());
                entry.insert(Slot::Computing(flight.clone()));
                Slot::Computing(flight)
            }
        }
    }

    /// Starts the generator on the blocking pool.
    ///
    /// The task publishes its own outcome into the map, so publication does not
    /// depend on any caller still polling. It may start before the caller has
    /// inserted the computing slot, but it cannot touch the map until the
    /// caller releases the shard lock.
    fn spawn_computation(&self, input: String) -> InFlight {
        let generator = Arc::clone(&self.generator);
        let slots = Arc::clone(&self.slots);
        let key = input.clone();

        let task = tokio::task::spawn_blocking({
            let slots = Arc::clone(&slots);
            move || {
                let result = generator.generate(&input);
                match &result {
                    Ok(token) => {
                        debug!(input = %input, token = %token, "committed token");
                        slots.insert(input, Slot::Present(token.clone()));
                    }
                    Err(e) => {
                        warn!(input = %input, error = %e, "token computation failed");
                        slots.remove_if(&input, |_, slot| matches!(slot, Slot::Computing(_)));
                    }
                }
                result
            }
        });

        async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    // panicked, or cancelled by runtime shutdown
                    slots.remove_if(&key, |_, slot| matches!(slot, Slot::Computing(_)));
                    Err(CoreError::Computation(e.to_string()))
                }
            }
        }
        .boxed()
        .shared()
    }
}

impl<G> Clone for SingleFlightCache<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<G> std::fmt::Debug for SingleFlightCache<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleFlightCache")
            .field("keys", &self.slots.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<G: Generator> TokenCache for SingleFlightCache<G> {
    async fn get_or_create(&self, input: &str) -> Result<Token> {
        let slot = match self.lookup(input) {
            Some(slot) => slot,
            None => {
                trace!(input = %input, "cache miss, claiming key");
                self.claim(input)
            }
        };

        match slot {
            Slot::Present(token) => {
                trace!(input = %input, "cache hit");
                Ok(token)
            }
            Slot::Computing(flight) => {
                trace!(input = %input, "awaiting in-flight computation");
                flight.await
            }
        }
    }
}
