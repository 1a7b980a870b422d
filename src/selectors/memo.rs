//! Memoized selectors.
//!
//! `SelectorCache` keeps the results of the multi-step selectors for one
//! snapshot, keyed on `(game id, version)`. Repeated calls against the same
//! snapshot return the same `Rc` (check with `Rc::ptr_eq`), and any mutation
//! of the game changes its version and so invalidates the cache.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::query::CardLocation;
use crate::core::{CardId, Game, GameId, PlayerId, ZoneType};
use crate::zones::Zone;

type CacheKey = Option<(GameId, u64)>;

fn key_of(snapshot: Option<&Game>) -> CacheKey {
    snapshot.map(|g| (g.id().clone(), g.version()))
}

/// Hit/miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Version-keyed cache for the multi-step selectors.
#[derive(Debug, Default)]
pub struct SelectorCache {
    key: Option<CacheKey>,
    all_zones: Option<Rc<Vec<Zone>>>,
    zones_by_type: FxHashMap<ZoneType, Rc<Vec<Zone>>>,
    cards_by_owner: FxHashMap<PlayerId, Rc<Vec<CardId>>>,
    locations: Option<Rc<FxHashMap<CardId, CardLocation>>>,
    stats: CacheStats,
}

impl SelectorCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every cached result.
    pub fn clear(&mut self) {
        self.key = None;
        self.all_zones = None;
        self.zones_by_type.clear();
        self.cards_by_owner.clear();
        self.locations = None;
    }

    fn sync(&mut self, snapshot: Option<&Game>) {
        let key = key_of(snapshot);
        if self.key.as_ref() != Some(&key) {
            self.clear();
            self.key = Some(key);
        }
    }

    fn record(&mut self, hit: bool) {
        if hit {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
    }

    /// Every zone of every player.
    pub fn all_zones(&mut self, snapshot: Option<&Game>) -> Rc<Vec<Zone>> {
        self.sync(snapshot);
        if let Some(zones) = &self.all_zones {
            let zones = Rc::clone(zones);
            self.record(true);
            return zones;
        }
        self.record(false);
        let zones: Rc<Vec<Zone>> = Rc::new(
            snapshot
                .map(|g| g.zones().cloned().collect())
                .unwrap_or_default(),
        );
        self.all_zones = Some(Rc::clone(&zones));
        zones
    }

    /// Zones of one type across all players.
    pub fn zones_by_type(&mut self, snapshot: Option<&Game>, zone_type: ZoneType) -> Rc<Vec<Zone>> {
        self.sync(snapshot);
        if let Some(zones) = self.zones_by_type.get(&zone_type) {
            let zones = Rc::clone(zones);
            self.record(true);
            return zones;
        }
        self.record(false);
        let all = self.all_zones(snapshot);
        let zones: Rc<Vec<Zone>> = Rc::new(
            all.iter()
                .filter(|z| z.zone_type == zone_type)
                .cloned()
                .collect(),
        );
        self.zones_by_type.insert(zone_type, Rc::clone(&zones));
        zones
    }

    /// Card ids across a player's zones.
    pub fn cards_by_owner(&mut self, snapshot: Option<&Game>, player_id: &str) -> Rc<Vec<CardId>> {
        self.sync(snapshot);
        if let Some(cards) = self.cards_by_owner.get(player_id) {
            let cards = Rc::clone(cards);
            self.record(true);
            return cards;
        }
        self.record(false);
        let cards: Rc<Vec<CardId>> = Rc::new(
            snapshot
                .and_then(|g| g.player(player_id))
                .map(|p| p.iter_zones().flat_map(|z| z.cards.iter().cloned()).collect())
                .unwrap_or_default(),
        );
        self.cards_by_owner.insert(PlayerId::new(player_id), Rc::clone(&cards));
        cards
    }

    /// Location of every card, first holding zone wins.
    pub fn card_locations(&mut self, snapshot: Option<&Game>) -> Rc<FxHashMap<CardId, CardLocation>> {
        self.sync(snapshot);
        if let Some(index) = &self.locations {
            let index = Rc::clone(index);
            self.record(true);
            return index;
        }
        self.record(false);
        let mut index = FxHashMap::default();
        if let Some(game) = snapshot {
            for zone in game.zones() {
                for card_id in &zone.cards {
                    index.entry(card_id.clone()).or_insert_with(|| CardLocation {
                        zone_id: zone.id.clone(),
                        owner_id: zone.owner_id.clone(),
                    });
                }
            }
        }
        let index = Rc::new(index);
        self.locations = Some(Rc::clone(&index));
        index
    }

    /// Indexed variant of [`card_location`](super::card_location).
    pub fn card_location(&mut self, snapshot: Option<&Game>, card_id: &str) -> Option<CardLocation> {
        self.card_locations(snapshot).get(card_id).cloned()
    }
}
