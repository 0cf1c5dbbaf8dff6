//! Query client - one cache per provider resource, behind typed accessors
//!
//! The UI never builds request keys itself: it asks for "the roster", "the
//! category list", "grass's members" or "pikachu's detail" and gets back the
//! latest `Query` state. Fetching accessors go to the network only when the
//! cache says so; `peek_*` accessors never do.

use std::collections::HashMap;
use std::sync::Arc;

use futures_channel::mpsc;
use futures_util::future::join_all;

use pokedex_domain::{Category, CategoryName, Item, ItemName, RosterPage};

use super::{CachePolicy, ChangeNotifier, Query, QueryCache};
use crate::application::services::PokedexService;
use crate::config::PlayerConfig;
use crate::ports::outbound::ClockPort;

pub struct QueryClient {
    service: PokedexService,
    roster_limit: u32,
    roster: QueryCache<u32, RosterPage>,
    category_list: QueryCache<(), Vec<CategoryName>>,
    category_members: QueryCache<CategoryName, Category>,
    item_detail: QueryCache<ItemName, Item>,
    notifier: ChangeNotifier,
}

impl QueryClient {
    pub fn new(
        service: PokedexService,
        config: &PlayerConfig,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::with_policy(
            service,
            config.roster_limit,
            CachePolicy::from_config(config),
            clock,
        )
    }

    pub fn with_policy(
        service: PokedexService,
        roster_limit: u32,
        policy: CachePolicy,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let notifier = ChangeNotifier::new();
        Self {
            service,
            roster_limit,
            roster: QueryCache::new("roster", policy, clock.clone(), notifier.clone()),
            category_list: QueryCache::new(
                "category_list",
                policy,
                clock.clone(),
                notifier.clone(),
            ),
            category_members: QueryCache::new(
                "category_members",
                policy,
                clock.clone(),
                notifier.clone(),
            ),
            item_detail: QueryCache::new("item_detail", policy, clock, notifier.clone()),
            notifier,
        }
    }

    /// One message per state change in any cache
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<()> {
        self.notifier.subscribe()
    }

    // -------------------------------------------------------------------------
    // Roster
    // -------------------------------------------------------------------------

    pub async fn roster(&self) -> Query<RosterPage> {
        let limit = self.roster_limit;
        self.roster
            .fetch(limit, || self.service.fetch_roster(limit))
            .await
    }

    pub fn peek_roster(&self) -> Query<RosterPage> {
        self.roster.peek(&self.roster_limit)
    }

    // -------------------------------------------------------------------------
    // Category list
    // -------------------------------------------------------------------------

    pub async fn category_list(&self) -> Query<Vec<CategoryName>> {
        self.category_list
            .fetch((), || self.service.fetch_category_list())
            .await
    }

    pub fn peek_category_list(&self) -> Query<Vec<CategoryName>> {
        self.category_list.peek(&())
    }

    // -------------------------------------------------------------------------
    // Category members
    // -------------------------------------------------------------------------

    pub async fn category_members(&self, name: CategoryName) -> Query<Category> {
        let key = name.clone();
        self.category_members
            .fetch(key, || self.service.fetch_category_members(&name))
            .await
    }

    pub fn peek_category_members(&self, name: &CategoryName) -> Query<Category> {
        self.category_members.peek(name)
    }

    /// Fetch every selected category's members concurrently. Results come
    /// back in selection order, whatever order the responses arrive in.
    pub async fn fetch_memberships(&self, names: &[CategoryName]) -> Vec<Query<Category>> {
        join_all(names.iter().cloned().map(|name| self.category_members(name))).await
    }

    /// Snapshot of the selected categories' member queries
    pub fn memberships(&self, names: &[CategoryName]) -> HashMap<CategoryName, Query<Category>> {
        names
            .iter()
            .map(|name| (name.clone(), self.peek_category_members(name)))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Item detail
    // -------------------------------------------------------------------------

    pub async fn item_detail(&self, name: ItemName) -> Query<Item> {
        let key = name.clone();
        self.item_detail
            .fetch(key, || self.service.fetch_item_detail(&name))
            .await
    }

    pub fn peek_item_detail(&self, name: &ItemName) -> Query<Item> {
        self.item_detail.peek(name)
    }
}
