//! In-memory fakes for the core ports, shared by the unit tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mindset_domain::{MindsetError, QuoteTriple, Result};
use parking_lot::Mutex;

use crate::quotes::ports::{GenerationError, GenerationRequest, QuoteGenerator};
use crate::storage::ports::KeyValueStore;

/// `HashMap`-backed store with switchable read/write failures
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    rejected_keys: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().fold(Self::new(), |store, (key, value)| store.with_value(key, value))
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_writes(self) -> Self {
        self.set_fail_writes(true);
        self
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Fail writes to `key` only, until [`Self::accept_writes_to`].
    pub fn reject_writes_to(&self, key: &str) {
        self.rejected_keys.lock().insert(key.to_string());
    }

    pub fn accept_writes_to(&self, key: &str) {
        self.rejected_keys.lock().remove(key);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn check_write(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) || self.rejected_keys.lock().contains(key) {
            return Err(MindsetError::Storage("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(MindsetError::Storage("simulated read failure".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_write(key)?;
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.check_write(key)?;
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Generator that replays queued responses and records every request
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<std::result::Result<QuoteTriple, GenerationError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(self, text: &str, author: &str, category: &str) -> Self {
        self.responses.lock().push_back(Ok(QuoteTriple {
            text: text.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }));
        self
    }

    pub fn failing_with(self, error: GenerationError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl QuoteGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<QuoteTriple, GenerationError> {
        self.requests.lock().push(request.clone());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Network("no scripted response".to_string())))
    }
}
