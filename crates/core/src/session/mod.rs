//! Session controller
//!
//! [`MindsetSession`] owns the application state and is the only writer to
//! the persisted store. Every handler computes the next state, writes it
//! through [`RecordStore`] and commits it in memory only after the write
//! succeeded, so the in-memory view never runs ahead of what is durable.
//!
//! Progress events (favorite added, journal created) are routed through the
//! [`MilestonePolicy`] which decides whether a reward unlocks.

use std::sync::Arc;

use mindset_domain::constants::{REWARD_EXCERPT_MAX_CHARS, REWARD_JOURNAL_EXCERPTS};
use mindset_domain::{
    Config, HierarchyLevel, JournalDraft, JournalEntry, JournalQuery, MindsetError, Quote,
    Result, RewardMode, UserProgress,
};
use tracing::{error, info, warn};

use crate::clock::Clock;
use crate::journal::{JournalBook, UpsertOutcome};
use crate::progress::MilestonePolicy;
use crate::quotes::ports::{DailyQuoteRequest, QuoteGenerator, RewardQuoteRequest};
use crate::quotes::{greeting, DateContext, QuoteService};
use crate::storage::ports::KeyValueStore;
use crate::storage::RecordStore;

/// Tunables for a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub milestones: MilestonePolicy,
    /// `MM-DD`
    pub birthday: Option<String>,
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            milestones: MilestonePolicy::from_config(&config.milestones),
            birthday: config.profile.birthday.clone(),
        }
    }
}

/// Result of toggling a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Everything but the journal, which lives in its own [`JournalBook`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub level: HierarchyLevel,
    pub genres: Vec<String>,
    pub favorites: Vec<Quote>,
    pub onboarded: bool,
    pub progress: UserProgress,
}

/// The single owner of application state
pub struct MindsetSession {
    records: RecordStore,
    quotes: QuoteService,
    clock: Arc<dyn Clock>,
    options: SessionOptions,
    state: AppState,
    journal: JournalBook,
}

impl MindsetSession {
    /// Load every persisted record. Each unreadable record falls back to its
    /// default independently.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        generator: Arc<dyn QuoteGenerator>,
        clock: Arc<dyn Clock>,
        options: SessionOptions,
    ) -> Self {
        let records = RecordStore::new(store);

        let state = AppState {
            level: records.load_level().await,
            genres: records.load_genres().await,
            favorites: records.load_favorites().await,
            onboarded: records.load_onboarded().await,
            progress: records.load_progress().await,
        };
        let journal = JournalBook::load(records.clone()).await;

        info!(
            level = %state.level,
            onboarded = state.onboarded,
            favorites = state.favorites.len(),
            journal_entries = journal.len(),
            "session loaded"
        );

        Self {
            quotes: QuoteService::new(generator, Arc::clone(&clock)),
            records,
            clock,
            options,
            state,
            journal,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn level(&self) -> HierarchyLevel {
        self.state.level
    }

    pub fn genres(&self) -> &[String] {
        &self.state.genres
    }

    pub fn favorites(&self) -> &[Quote] {
        &self.state.favorites
    }

    pub fn is_onboarded(&self) -> bool {
        self.state.onboarded
    }

    pub fn progress(&self) -> UserProgress {
        self.state.progress
    }

    pub fn journal(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub async fn set_level(&mut self, level: HierarchyLevel) -> Result<()> {
        self.records.save_level(level).await?;
        self.state.level = level;
        Ok(())
    }

    /// Add `genre` if absent, remove it otherwise. Returns whether the genre
    /// is selected afterwards.
    pub async fn toggle_genre(&mut self, genre: &str) -> Result<bool> {
        let mut genres = self.state.genres.clone();
        let selected = match genres.iter().position(|g| g == genre) {
            Some(index) => {
                genres.remove(index);
                false
            }
            None => {
                genres.push(genre.to_string());
                true
            }
        };

        self.records.save_genres(&genres).await?;
        self.state.genres = genres;
        Ok(selected)
    }

    /// Store the first-run choices and mark onboarding complete.
    pub async fn complete_onboarding(
        &mut self,
        level: HierarchyLevel,
        genres: Vec<String>,
    ) -> Result<()> {
        let mut unique: Vec<String> = Vec::with_capacity(genres.len());
        for genre in genres {
            if !unique.contains(&genre) {
                unique.push(genre);
            }
        }

        self.set_level(level).await?;
        self.records.save_genres(&unique).await?;
        self.state.genres = unique;
        self.records.mark_onboarded().await?;
        self.state.onboarded = true;

        info!(level = %level, genres = self.state.genres.len(), "onboarding complete");
        Ok(())
    }

    pub fn is_favorite(&self, quote: &Quote) -> bool {
        self.state.favorites.iter().any(|f| f.same_text(quote))
    }

    /// Look up a favorite by its id.
    pub fn favorite_by_id(&self, id: &str) -> Result<&Quote> {
        self.state
            .favorites
            .iter()
            .find(|quote| quote.id == id)
            .ok_or_else(|| MindsetError::NotFound(format!("favorite {id}")))
    }

    /// Remove `quote` if an equal-text favorite exists, append it otherwise.
    ///
    /// Adding counts toward the saves milestone; removing never decrements.
    /// The favorites list is written before progress. If the progress write
    /// fails the previous list is written back, so neither record advances.
    pub async fn toggle_favorite(&mut self, quote: Quote) -> Result<FavoriteToggle> {
        if self.is_favorite(&quote) {
            let favorites: Vec<Quote> =
                self.state.favorites.iter().filter(|f| !f.same_text(&quote)).cloned().collect();
            self.records.save_favorites(&favorites).await?;
            self.state.favorites = favorites;
            return Ok(FavoriteToggle::Removed);
        }

        let mut favorites = self.state.favorites.clone();
        favorites.push(quote);
        self.records.save_favorites(&favorites).await?;

        let progress = self.options.milestones.record_favorite_added(self.state.progress);
        if let Err(err) = self.records.save_progress(&progress).await {
            warn!(error = %err, "progress not persisted, restoring favorites");
            if let Err(restore_err) = self.records.save_favorites(&self.state.favorites).await {
                error!(error = %restore_err, "failed to restore favorites after progress write");
            }
            return Err(err);
        }

        self.state.favorites = favorites;
        self.state.progress = progress;
        Ok(FavoriteToggle::Added)
    }

    /// Favorite `quote` if needed and return a draft linked to it.
    pub async fn journal_about_quote(&mut self, quote: Quote) -> Result<JournalDraft> {
        if !self.is_favorite(&quote) {
            self.toggle_favorite(quote.clone()).await?;
        }
        Ok(JournalDraft::about_quote(quote))
    }

    /// Save a draft. Blank drafts are ignored and yield `None`.
    ///
    /// Drafts without an id, or with an id no entry has, create a new entry
    /// and count toward the journal milestone. Edits keep the original
    /// timestamp and do not count. A new entry is rolled back when its
    /// progress write fails.
    pub async fn save_journal(&mut self, draft: JournalDraft) -> Result<Option<JournalEntry>> {
        if draft.is_blank() {
            info!("ignoring blank journal entry");
            return Ok(None);
        }

        let now = self.clock.now_millis();
        let id = draft.id.clone().unwrap_or_else(|| now.to_string());
        let entry = draft.into_entry(id.clone(), now);

        let previous = self.journal.entries().to_vec();
        let outcome = self.journal.upsert(entry).await?;
        if outcome == UpsertOutcome::Created {
            let progress = self.options.milestones.record_journal_created(self.state.progress);
            if let Err(err) = self.commit_progress(progress).await {
                if let Err(restore_err) = self.journal.restore(previous).await {
                    error!(error = %restore_err, "failed to restore journal after progress write");
                }
                return Err(err);
            }
        }

        info!(id = %id, outcome = ?outcome, "journal entry saved");
        Ok(self.journal.get(&id).cloned())
    }

    pub async fn update_journal_tags(
        &mut self,
        id: &str,
        tags: Vec<String>,
    ) -> Result<JournalEntry> {
        self.journal.update_tags(id, tags).await
    }

    /// Returns `false` when no entry had that id.
    pub async fn delete_journal(&mut self, id: &str) -> Result<bool> {
        self.journal.remove(id).await
    }

    pub fn query_journal(&self, query: &JournalQuery) -> Vec<JournalEntry> {
        self.journal.query(query)
    }

    pub fn available_tags(&self) -> Vec<String> {
        self.journal.available_tags()
    }

    /// Calendar context for the local date.
    pub fn today(&self) -> DateContext {
        DateContext::for_date(self.clock.local_now().date(), self.options.birthday.as_deref())
    }

    pub fn greeting(&self) -> String {
        greeting(self.clock.local_now())
    }

    pub async fn daily_quote(&self) -> Quote {
        let request = DailyQuoteRequest {
            level: self.state.level,
            genres: self.state.genres.clone(),
            context: self.today(),
        };
        self.quotes.daily_quote(request).await
    }

    /// Spend one reward and generate its quote.
    ///
    /// Returns `None` without touching the store when no reward is available.
    pub async fn claim_reward(&mut self, mode: RewardMode) -> Result<Option<Quote>> {
        let progress = match self.options.milestones.claim_reward(self.state.progress) {
            Ok(progress) => progress,
            Err(err) => {
                warn!(error = %err, "reward claim ignored");
                return Ok(None);
            }
        };
        self.commit_progress(progress).await?;

        let request = RewardQuoteRequest {
            journal_excerpts: self
                .journal
                .recent_excerpts(REWARD_JOURNAL_EXCERPTS, REWARD_EXCERPT_MAX_CHARS),
            ignored_levels: self.state.level.others(),
            preferred_genres: self.state.genres.clone(),
            mode,
        };
        let quote = self.quotes.reward_quote(request).await;

        info!(
            mode = %mode,
            rewards_available = self.state.progress.rewards_available,
            "reward claimed"
        );
        Ok(Some(quote))
    }

    async fn commit_progress(&mut self, progress: UserProgress) -> Result<()> {
        self.records.save_progress(&progress).await.map_err(|err| {
            warn!(error = %err, "progress not persisted, keeping previous state");
            err
        })?;
        self.state.progress = progress;
        Ok(())
    }
}
