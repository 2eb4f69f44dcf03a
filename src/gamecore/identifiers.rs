//! `gamecore::identifiers` submodule provides id structs that
//! identify objects registered in a [`Scene`](super::scenes::Scene).
//!

use std::fmt;

/// [`GameObjectId`] id struct is needed to identify [`GameObject`](super::gameobjects::GameObject)s
/// in [`Scene`](super::scenes::Scene).
///
/// It is assigned by the [`Scene`](super::scenes::Scene) in which
/// this [`GameObject`](super::gameobjects::GameObject) is registered.
///
/// # Note
/// Id consists of slot index and generation of that slot.
/// When game object is removed, its slot is reused with increased generation,
/// so stale ids never point at objects that were registered later.
/// [`GameObjectId`] is only valid for the [`Scene`](super::scenes::Scene) it was obtained from.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameObjectId {
    /// Index of slot in storage.
    ///
    index: u32,
    /// Generation of slot at the moment of insertion.
    ///
    generation: u32,
}
impl GameObjectId {
    /// Creates new id with given index and generation.
    ///
    /// Uniqueness is not provided by this struct, and that is why `new` associated function is
    /// exposed only to crate visibility - it is storage's job to provide soundness.
    ///
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        GameObjectId { index, generation }
    }

    /// Returns index of slot this id points at.
    ///
    pub fn index(&self) -> u32 {
        self.index
    }
    /// Returns generation of slot this id was issued for.
    ///
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
impl fmt::Display for GameObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::GameObjectId;

    #[test]
    fn ordering() {
        let id1: GameObjectId = GameObjectId::new(1, 0);
        let id2: GameObjectId = GameObjectId::new(1, 1);
        let id3: GameObjectId = GameObjectId::new(2, 0);

        assert!(id1 < id2 && id2 < id3);
        assert_ne!(id1, id2);
        assert_eq!((id2.index(), id2.generation()), (1, 1));
        assert_eq!(id3.to_string(), "#2v0");
    }
}
