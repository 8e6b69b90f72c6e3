use slotmap::SlotMap;

use crate::content::tower_spec;
use crate::types::{Element, Pos, TowerClass, TowerKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedTower {
    pub key: TowerKey,
    pub class: TowerClass,
    pub element: Element,
    pub pos: Pos,
}

/// Every tower currently standing in the session. Iteration follows slot
/// order, which is deterministic for a given placement history.
#[derive(Default)]
pub struct TowerRegistry {
    towers: SlotMap<TowerKey, PlacedTower>,
}

impl TowerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, class: TowerClass, pos: Pos) -> TowerKey {
        let element = tower_spec(class).element;
        let key = self.towers.insert(PlacedTower {
            key: TowerKey::default(), // Backfilled below
            class,
            element,
            pos,
        });
        self.towers[key].key = key;
        key
    }

    pub fn remove(&mut self, key: TowerKey) -> Option<PlacedTower> {
        self.towers.remove(key)
    }

    pub fn get(&self, key: TowerKey) -> Option<&PlacedTower> {
        self.towers.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedTower> {
        self.towers.values()
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    pub fn occupant_at(&self, pos: Pos) -> Option<TowerKey> {
        self.towers.values().find(|tower| tower.pos == pos).map(|tower| tower.key)
    }

    pub fn count_of_class(&self, class: TowerClass) -> u32 {
        self.towers.values().filter(|tower| tower.class == class).count() as u32
    }

    pub fn count_of_element(&self, element: Element) -> u32 {
        self.towers.values().filter(|tower| tower.element == element).count() as u32
    }
}
