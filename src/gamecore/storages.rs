//! `gamecore::storages` submodule implements [`GameObjectStorage`] - generational arena
//! that owns game objects of a [`Scene`](super::scenes::Scene).
//!

use crate::gamecore::{
    gameobjects::{BoxedGameObject, GameObject},
    identifiers::GameObjectId,
};

/// [`Slot`] struct is a single cell of [`GameObjectStorage`].
///
#[derive(Debug)]
struct Slot {
    /// Generation is increased every time object is removed from this slot.
    ///
    generation: u32,
    /// Stored object, if slot is occupied.
    ///
    object: Option<BoxedGameObject>,
}

/// [`GameObjectStorage`] is a generational arena that maps [`GameObjectId`]s to game objects.
///
/// Removed slots are reused by later insertions with increased generation,
/// so every id that was obtained before removal becomes stale and stops resolving.
///
/// # Note
/// Functions that require [`GameObjectId`] do nothing (and return `None`)
/// if the object with that id is not present. That allows treating stale ids as no-ops.
///
/// # Example
/// ```rust
/// # use ggscene::gamecore::{gameobjects::GameObjectBase, storages::GameObjectStorage};
/// let mut storage: GameObjectStorage = GameObjectStorage::new();
/// let id = storage.insert(Box::new(GameObjectBase::new("player")));
/// assert_eq!(storage.get(id).map(|object| object.tag()), Some("player"));
///
/// let _ = storage.remove(id);
/// let other_id = storage.insert(Box::new(GameObjectBase::new("enemy")));
/// assert_eq!(id.index(), other_id.index());
/// assert!(storage.get(id).is_none());
/// ```
///
#[derive(Debug, Default)]
pub struct GameObjectStorage {
    /// Arena slots.
    ///
    slots: Vec<Slot>,
    /// Indices of vacant slots.
    ///
    vacant: Vec<u32>,
    /// Amount of occupied slots.
    ///
    len: usize,
}
impl GameObjectStorage {
    /// Initializes new [`GameObjectStorage`].
    ///
    /// Created [`GameObjectStorage`] will not allocate until first insertions.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns amount of stored objects.
    ///
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns whether storage is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Returns whether id points at stored object.
    ///
    pub fn contains(&self, id: GameObjectId) -> bool {
        self.slot(id).is_some()
    }

    /// Stores object and returns its id.
    ///
    pub fn insert(&mut self, object: BoxedGameObject) -> GameObjectId {
        self.len += 1;
        if let Some(index) = self.vacant.pop() {
            let slot: &mut Slot = &mut self.slots[index as usize];
            slot.object = Some(object);
            return GameObjectId::new(index, slot.generation);
        }

        let index: u32 = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            object: Some(object),
        });
        GameObjectId::new(index, 0)
    }
    /// Removes object and returns it.
    ///
    /// Stale or unknown id is a no-op.
    ///
    pub fn remove(&mut self, id: GameObjectId) -> Option<BoxedGameObject> {
        let slot: &mut Slot = self
            .slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())?;
        let object: BoxedGameObject = slot.object.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        self.vacant.push(id.index());
        self.len -= 1;
        Some(object)
    }
    /// Removes all objects.
    ///
    /// Ids that were obtained before clearing become stale.
    ///
    pub fn clear(&mut self) {
        let ids: Vec<GameObjectId> = self.ids().collect();
        for id in ids {
            let _ = self.remove(id);
        }
    }

    /// Returns reference to the object.
    ///
    pub fn get(&self, id: GameObjectId) -> Option<&dyn GameObject> {
        self.slot(id)?.object.as_deref()
    }
    /// Returns mutable reference to the object.
    ///
    pub fn get_mut(&mut self, id: GameObjectId) -> Option<&mut dyn GameObject> {
        self.slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())?
            .object
            .as_deref_mut()
    }
    /// Returns mutable references to two different objects at once.
    ///
    /// Returns `None` if ids are equal or if any of them is stale.
    ///
    /// # Example
    /// ```rust
    /// # use ggscene::gamecore::{gameobjects::{GameObject, GameObjectBase}, storages::GameObjectStorage};
    /// let mut storage: GameObjectStorage = GameObjectStorage::new();
    /// let first = storage.insert(Box::new(GameObjectBase::new("first")));
    /// let second = storage.insert(Box::new(GameObjectBase::new("second")));
    ///
    /// let (object1, object2) = storage.pair_mut(second, first).expect("Both objects are present");
    /// assert_eq!((object1.tag(), object2.tag()), ("second", "first"));
    /// assert!(storage.pair_mut(first, first).is_none());
    /// ```
    ///
    pub fn pair_mut(
        &mut self,
        id1: GameObjectId,
        id2: GameObjectId,
    ) -> Option<(&mut dyn GameObject, &mut dyn GameObject)> {
        if id1.index() == id2.index() || !self.contains(id1) || !self.contains(id2) {
            return None;
        }

        let (index1, index2): (usize, usize) = (id1.index() as usize, id2.index() as usize);
        let (head, tail): (&mut [Slot], &mut [Slot]) = self.slots.split_at_mut(index1.max(index2));
        let low: &mut dyn GameObject = head[index1.min(index2)].object.as_deref_mut()?;
        let high: &mut dyn GameObject = tail[0].object.as_deref_mut()?;
        if index1 < index2 {
            Some((low, high))
        } else {
            Some((high, low))
        }
    }

    /// Returns iterator over ids of stored objects in ascending order.
    ///
    pub fn ids(&self) -> impl Iterator<Item = GameObjectId> + '_ {
        self.iter().map(|(id, _)| id)
    }
    /// Returns iterator over stored objects and their ids.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (GameObjectId, &dyn GameObject)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.object
                .as_deref()
                .map(|object| (GameObjectId::new(index as u32, slot.generation), object))
        })
    }
    /// Returns iterator over mutable stored objects and their ids.
    ///
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GameObjectId, &mut dyn GameObject)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation: u32 = slot.generation;
            slot.object
                .as_deref_mut()
                .map(|object| (GameObjectId::new(index as u32, generation), object))
        })
    }

    /// Returns occupied slot that id points at.
    ///
    fn slot(&self, id: GameObjectId) -> Option<&Slot> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation() && slot.object.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::GameObjectStorage;
    use crate::gamecore::{
        gameobjects::{GameObject, GameObjectBase},
        identifiers::GameObjectId,
    };

    fn tagged(tag: &str) -> Box<GameObjectBase> {
        Box::new(GameObjectBase::new(tag))
    }

    #[test]
    fn insertion_and_removal() {
        let mut storage: GameObjectStorage = GameObjectStorage::new();
        assert!(storage.is_empty());

        let id1: GameObjectId = storage.insert(tagged("a"));
        let id2: GameObjectId = storage.insert(tagged("b"));
        assert_eq!(storage.len(), 2);
        assert!(storage.contains(id1) && storage.contains(id2));

        let removed = storage.remove(id1).expect("Object was inserted");
        assert_eq!(removed.tag(), "a");
        assert_eq!(storage.len(), 1);
        assert!(!storage.contains(id1));
        assert!(storage.remove(id1).is_none());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn stale_ids() {
        let mut storage: GameObjectStorage = GameObjectStorage::new();
        let old: GameObjectId = storage.insert(tagged("old"));
        let _ = storage.remove(old);

        let new: GameObjectId = storage.insert(tagged("new"));
        assert_eq!(old.index(), new.index());
        assert_ne!(old.generation(), new.generation());

        assert!(storage.get(old).is_none());
        assert!(storage.get_mut(old).is_none());
        assert!(storage.remove(old).is_none());
        assert_eq!(storage.get(new).map(|object| object.tag()), Some("new"));
        assert!(storage.get(GameObjectId::new(10, 0)).is_none());
    }

    #[test]
    fn pairs() {
        let mut storage: GameObjectStorage = GameObjectStorage::new();
        let ids: Vec<GameObjectId> = ["a", "b", "c"]
            .into_iter()
            .map(|tag| storage.insert(tagged(tag)))
            .collect();

        {
            let (c, a) = storage.pair_mut(ids[2], ids[0]).expect("Both objects are present");
            c.set_active(false);
            assert_eq!(a.tag(), "a");
        }
        assert_eq!(storage.get(ids[2]).map(|object| object.is_active()), Some(false));

        let _ = storage.remove(ids[1]);
        assert!(storage.pair_mut(ids[0], ids[1]).is_none());
        assert!(storage.pair_mut(ids[0], ids[0]).is_none());
    }

    #[test]
    fn iteration() {
        let mut storage: GameObjectStorage = GameObjectStorage::new();
        let ids: Vec<GameObjectId> = ["a", "b", "c"]
            .into_iter()
            .map(|tag| storage.insert(tagged(tag)))
            .collect();
        let _ = storage.remove(ids[1]);

        assert_eq!(storage.ids().collect::<Vec<_>>(), vec![ids[0], ids[2]]);
        for (_, object) in storage.iter_mut() {
            object.transform_mut().rotate(90.0);
        }
        assert!(storage
            .iter()
            .all(|(_, object)| object.transform().rotation == 90.0));

        storage.clear();
        assert!(storage.is_empty());
        assert_eq!(storage.ids().count(), 0);
    }
}
