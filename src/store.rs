//! Observable recipe catalog and favorites.
//!
//! [`RecipeStore`] keeps its state in a `tokio::sync::watch` channel. Every
//! mutation notifies subscribers once, and [`RecipeStore::subscribe`] hands
//! out receivers that a UI layer can await to re-render from
//! [`RecipeStore::snapshot`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::watch;

use crate::error::RecipeError;
use crate::model::Recipe;
use crate::search;
use crate::source::RecipeSource;

/// Point-in-time view of a [`RecipeStore`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeState {
    /// The catalog, replaced wholesale by each successful fetch
    pub recipes: Vec<Recipe>,
    /// Favorited recipes in the order they were marked, unique by id
    pub favorites: Vec<Recipe>,
    pub loading: bool,
    /// Set when the latest fetch failed, cleared when a new fetch starts
    pub error: bool,
}

impl RecipeState {
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|r| r.id == id)
    }

    /// Catalog entries matching `query`, see [`search::search`]
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        search::search(&self.recipes, query)
    }
}

/// Observable catalog, favorites and fetch status for one browsing session
pub struct RecipeStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    source: Arc<dyn RecipeSource>,
    state: watch::Sender<RecipeState>,
    // Ticket of the most recently started fetch
    generation: AtomicU64,
}

impl StoreInner {
    /// Apply a finished fetch if `ticket` is still the newest one.
    fn settle(&self, ticket: u64, result: &Result<Vec<Recipe>, RecipeError>) {
        let current = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                return false;
            }
            state.loading = false;
            match result {
                Ok(recipes) => state.recipes = recipes.clone(),
                Err(_) => state.error = true,
            }
            true
        });

        match result {
            _ if !current => debug!("fetch #{} superseded, result discarded", ticket),
            Ok(recipes) => info!("loaded {} recipes", recipes.len()),
            Err(e) => error!("recipe fetch failed: {}", e),
        }
    }
}

impl RecipeStore {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        let (state, _) = watch::channel(RecipeState::default());
        Self {
            inner: Arc::new(StoreInner {
                source,
                state,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Receive a notification after every state change
    pub fn subscribe(&self) -> watch::Receiver<RecipeState> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> RecipeState {
        self.inner.state.borrow().clone()
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.inner.state.borrow().recipes.clone()
    }

    pub fn favorites(&self) -> Vec<Recipe> {
        self.inner.state.borrow().favorites.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    pub fn has_error(&self) -> bool {
        self.inner.state.borrow().error
    }

    /// Load the catalog from the source.
    ///
    /// Sets `loading` and clears `error` (one notification), performs a single
    /// request, then settles with one more notification: the catalog is
    /// replaced on success, `error` is set on failure, and `loading` is
    /// cleared either way. Favorites are never touched.
    ///
    /// The request and the settle step run on a spawned task, so dropping
    /// the returned future (a timeout, a torn-down screen) does not cancel
    /// them and `loading` is still cleared. If another fetch starts before
    /// this one completes, this one's result is discarded and only the newest
    /// fetch settles the state.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn fetch_recipes(&self) -> Result<(), RecipeError> {
        let ticket = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_modify(|state| {
            state.loading = true;
            state.error = false;
        });

        let inner = self.inner.clone();
        let task = tokio::spawn(async move {
            let result = inner.source.fetch_catalog().await;
            inner.settle(ticket, &result);
            result.map(|_| ())
        });

        task.await?
    }

    /// Add `recipe` to favorites, or remove the favorite with the same id.
    pub fn toggle_favorite(&self, recipe: &Recipe) {
        self.inner.state.send_modify(|state| {
            if let Some(pos) = state.favorites.iter().position(|r| r.id == recipe.id) {
                state.favorites.remove(pos);
                debug!("unfavorited {}", recipe.id);
            } else {
                state.favorites.push(recipe.clone());
                debug!("favorited {}", recipe.id);
            }
        });
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.inner.state.borrow().is_favorite(id)
    }

    /// Catalog entries matching `query`, in catalog order
    pub fn search(&self, query: &str) -> Vec<Recipe> {
        self.inner
            .state
            .borrow()
            .search(query)
            .into_iter()
            .cloned()
            .collect()
    }
}
