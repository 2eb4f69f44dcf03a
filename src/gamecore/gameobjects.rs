//! `gamecore::gameobjects` submodule implements [`GameObject`] trait - entity of a [`Scene`](super::scenes::Scene)
//! that combines transform, optional sprite, optional collider and game logic.
//!

use crate::{
    graphicscore::drawing::{Canvas, DrawError, Sprite},
    mathcore::{collisions::Collider, transforms::Transform},
};
use std::{
    any::{type_name, Any},
    fmt,
    rc::Rc,
};
use thiserror::Error;

/// `as_any` hidden module is needed to hide trait upcasting workaround.
///
/// [`AsAny`](as_any::AsAny) trait converts `&dyn GameObject` to `&dyn Any`,
/// which is needed for checked downcasting of game objects.
///
/// # Note
/// Although `as_any_ref` method could belong to the [`GameObject`] trait itself,
/// it would require users to manually implement it (even if it is trivial),
/// so it is instead moved to the hidden trait with blanket implementation.
///
pub(in crate::gamecore) mod as_any {
    use std::any::Any;

    /// [`AsAny`] trait is a workaround for trait upcasting.
    ///
    /// [`AsAny`] trait blanket implementation for all types that implement `Any`
    /// allows for `&self` to coerce to `&dyn Any`.
    ///
    pub trait AsAny {
        /// Method that coerces `&self` to `&dyn Any`.
        ///
        fn as_any_ref(&self) -> &dyn Any;
        /// Method that coerces `&mut self` to `&mut dyn Any`.
        ///
        fn as_any_mut(&mut self) -> &mut dyn Any;
        /// Method that coerces `Box<dyn T>` to `Box<dyn Any>`.
        ///
        fn as_any_box(self: Box<Self>) -> Box<dyn Any>;
    }
    impl<T: Any> AsAny for T {
        fn as_any_ref(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
        fn as_any_box(self: Box<Self>) -> Box<dyn Any> {
            self
        }
    }
}

/// [`GameObjectError`] enum lists faults that game object can report from its update or render.
///
/// Those faults never abort the frame: scene records them and continues with other objects.
///
#[derive(Error, Clone, Debug, PartialEq)]
pub enum GameObjectError {
    /// Canvas refused to draw.
    ///
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Game logic failed.
    ///
    #[error("game object failed: {0}")]
    Failed(String),
}

/// [`GameObjectBase`] struct holds state that is shared by all game objects:
/// tag, active flag, transform, optional sprite and optional collider.
///
/// [`GameObjectBase`] implements [`GameObject`] itself and can be registered in scene as is,
/// which is enough for static objects (walls, triggers, decorations).
///
/// # Example
/// ```rust
/// # use ggscene::gamecore::gameobjects::{GameObject, GameObjectBase};
/// # use ggscene::mathcore::{collisions::Collider, transforms::Transform, vectors::Vector2};
/// let wall: GameObjectBase = GameObjectBase::new("wall")
///     .with_transform(Transform::from_position(Vector2::new(10.0, 0.0)))
///     .with_collider(Collider::rectangle(20.0, 100.0));
/// assert_eq!(wall.tag(), "wall");
/// assert!(wall.is_active());
/// assert!(wall.collider().is_some());
/// ```
///
#[derive(Clone, Debug)]
pub struct GameObjectBase {
    /// Non-unique label that groups objects.
    ///
    tag: String,
    /// Inactive objects neither collide nor render.
    ///
    active: bool,
    /// Pending removal; scene prunes destroyed objects after the update loop.
    ///
    destroyed: bool,

    /// Transform of an object.
    ///
    transform: Transform,
    /// Sprite that is shared with other objects.
    ///
    sprite: Option<Rc<dyn Sprite>>,
    /// Collider that is shared with other objects.
    ///
    collider: Option<Rc<Collider>>,
}
impl GameObjectBase {
    /// Constructs active object with given tag, default transform and no sprite or collider.
    ///
    /// Empty tag means that object is not indexed by tag.
    ///
    pub fn new(tag: impl Into<String>) -> Self {
        GameObjectBase {
            tag: tag.into(),
            active: true,
            destroyed: false,

            transform: Transform::default(),
            sprite: None,
            collider: None,
        }
    }
    /// Replaces transform.
    ///
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
    /// Attaches sprite.
    ///
    pub fn with_sprite(mut self, sprite: Rc<dyn Sprite>) -> Self {
        self.sprite = Some(sprite);
        self
    }
    /// Attaches collider.
    ///
    pub fn with_collider(mut self, collider: impl Into<Rc<Collider>>) -> Self {
        self.collider = Some(collider.into());
        self
    }

    /// Returns tag of an object.
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }
    /// Returns whether object is active.
    ///
    pub fn is_active(&self) -> bool {
        self.active
    }
    /// Activates or deactivates object.
    ///
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
    /// Returns whether object was marked for removal.
    ///
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
    /// Marks object for removal, which happens after all objects of a scene are updated.
    ///
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Returns transform of an object.
    ///
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
    /// Returns mutable transform of an object.
    ///
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Returns attached sprite.
    ///
    pub fn sprite(&self) -> Option<&Rc<dyn Sprite>> {
        self.sprite.as_ref()
    }
    /// Attaches or detaches sprite.
    ///
    pub fn set_sprite(&mut self, sprite: Option<Rc<dyn Sprite>>) {
        self.sprite = sprite;
    }
    /// Returns attached collider.
    ///
    pub fn collider(&self) -> Option<&Rc<Collider>> {
        self.collider.as_ref()
    }
    /// Attaches or detaches collider.
    ///
    pub fn set_collider(&mut self, collider: Option<Rc<Collider>>) {
        self.collider = collider;
    }
}
impl Default for GameObjectBase {
    fn default() -> Self {
        GameObjectBase::new("")
    }
}

/// [`GameObject`] trait defines entities that are registered in [`Scene`](super::scenes::Scene).
///
/// Implementors only provide access to [`GameObjectBase`]; every other method has default implementation
/// which can be overridden to add game logic.
///
/// # Implementation
/// [`GameObject`] trait requires `'static` trait bound, because it allows checked downcasting
/// of `dyn GameObject` (see `is`, `downcast_ref`, `downcast_mut`).
///
/// ```rust
/// # use ggscene::gamecore::gameobjects::{GameObject, GameObjectBase, GameObjectError};
/// # use ggscene::mathcore::vectors::Vector2;
/// struct Bullet {
///     base: GameObjectBase,
///     velocity: Vector2,
/// }
/// impl GameObject for Bullet {
///     fn base(&self) -> &GameObjectBase {
///         &self.base
///     }
///     fn base_mut(&mut self) -> &mut GameObjectBase {
///         &mut self.base
///     }
///
///     fn update(&mut self, delta_time: f32) -> Result<(), GameObjectError> {
///         let velocity: Vector2 = self.velocity * delta_time;
///         self.transform_mut().translate(velocity);
///         Ok(())
///     }
///     fn on_collision_enter(&mut self, _other: &dyn GameObject) {
///         self.destroy();
///     }
/// }
///
/// let mut bullet: Box<dyn GameObject> = Box::new(Bullet {
///     base: GameObjectBase::new("bullet"),
///     velocity: Vector2::new(10.0, 0.0),
/// });
/// bullet.update(0.5).expect("Bullet never fails");
/// assert_eq!(bullet.transform().position, Vector2::new(5.0, 0.0));
/// assert!(bullet.is::<Bullet>());
/// ```
///
pub trait GameObject: as_any::AsAny + 'static {
    /// Returns shared state of an object.
    ///
    fn base(&self) -> &GameObjectBase;
    /// Returns mutable shared state of an object.
    ///
    fn base_mut(&mut self) -> &mut GameObjectBase;

    /// Advances game logic of an object.
    ///
    /// Scene calls this for every registered object (active or not) once per frame.
    ///
    fn update(&mut self, delta_time: f32) -> Result<(), GameObjectError> {
        let _ = delta_time;
        Ok(())
    }
    /// Draws an object.
    ///
    /// By default, active object draws its sprite (if any) at its transform.
    ///
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GameObjectError> {
        let base: &GameObjectBase = self.base();
        if let (true, Some(sprite)) = (base.is_active(), base.sprite()) {
            sprite.render(canvas, base.transform())?;
        }
        Ok(())
    }

    /// Is called once when this object starts colliding with other object.
    ///
    fn on_collision_enter(&mut self, other: &dyn GameObject) {
        let _ = other;
    }
    /// Is called once when this object stops colliding with other object.
    ///
    fn on_collision_exit(&mut self, other: &dyn GameObject) {
        let _ = other;
    }

    /// Returns tag of an object.
    ///
    fn tag(&self) -> &str {
        self.base().tag()
    }
    /// Returns whether object is active.
    ///
    fn is_active(&self) -> bool {
        self.base().is_active()
    }
    /// Activates or deactivates object.
    ///
    fn set_active(&mut self, active: bool) {
        self.base_mut().set_active(active);
    }
    /// Returns transform of an object.
    ///
    fn transform(&self) -> &Transform {
        self.base().transform()
    }
    /// Returns mutable transform of an object.
    ///
    fn transform_mut(&mut self) -> &mut Transform {
        self.base_mut().transform_mut()
    }
    /// Marks object for removal from its scene.
    ///
    fn destroy(&mut self) {
        self.base_mut().destroy();
    }

    /// Checks whether colliders of two objects intersect.
    ///
    /// Inactive objects and objects without collider never collide.
    ///
    fn check_collision(&self, other: &dyn GameObject) -> bool {
        if !self.is_active() || !other.is_active() {
            return false;
        }
        match (self.base().collider(), other.base().collider()) {
            (Some(collider), Some(other_collider)) => {
                collider.check_collision(other_collider, self.transform(), other.transform())
            }
            _ => false,
        }
    }
}
impl GameObject for GameObjectBase {
    fn base(&self) -> &GameObjectBase {
        self
    }
    fn base_mut(&mut self) -> &mut GameObjectBase {
        self
    }
}
impl dyn GameObject {
    /// Returns true if the inner type is the same as `T`.
    ///
    pub fn is<T: GameObject>(&self) -> bool {
        self.as_any_ref().is::<T>()
    }

    /// Attempts to downcast the box to a concrete type.
    ///
    /// # Note
    /// On failure box is returned in upcasted form (`Box<dyn Any>`),
    /// since it is impossible to return initial type.
    ///
    pub fn downcast<T: GameObject>(self: Box<Self>) -> Result<Box<T>, Box<dyn Any>> {
        self.as_any_box().downcast::<T>()
    }
    /// Returns some reference to the inner value if it is of type `T`, or `None` if it isn't.
    ///
    pub fn downcast_ref<T: GameObject>(&self) -> Option<&T> {
        self.as_any_ref().downcast_ref::<T>()
    }
    /// Returns some mutable reference to the inner value if it is of type `T`, or `None` if it isn't.
    ///
    pub fn downcast_mut<T: GameObject>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
impl fmt::Debug for dyn GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("tag", &self.tag())
            .field("active", &self.is_active())
            .field("transform", self.transform())
            .finish_non_exhaustive()
    }
}
/// Type alias for `Box<dyn GameObject>`.
///
/// Scene owns its game objects in that form.
///
pub type BoxedGameObject = Box<dyn GameObject>;

#[cfg(test)]
mod tests {
    use super::{GameObject, GameObjectBase, GameObjectError};
    use crate::{
        graphicscore::drawing::{Canvas, CommandCanvas, DrawError, Sprite},
        mathcore::{collisions::Collider, shapes::Rect, transforms::Transform, vectors::Vector2},
    };
    use std::rc::Rc;

    #[derive(Debug)]
    struct Square;
    impl Sprite for Square {
        fn render(&self, canvas: &mut dyn Canvas, transform: &Transform) -> Result<(), DrawError> {
            canvas.draw_rect(Rect::from_center(transform.position, 2.0, 2.0))
        }
    }

    struct Counter {
        base: GameObjectBase,
        entered: usize,
    }
    impl GameObject for Counter {
        fn base(&self) -> &GameObjectBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut GameObjectBase {
            &mut self.base
        }

        fn update(&mut self, _delta_time: f32) -> Result<(), GameObjectError> {
            Err(GameObjectError::Failed(String::from("counter cannot update")))
        }
        fn on_collision_enter(&mut self, _other: &dyn GameObject) {
            self.entered += 1;
        }
    }

    #[test]
    fn check_collision() {
        let collider: Rc<Collider> = Rc::new(Collider::rectangle(100.0, 100.0));
        let mut object1: GameObjectBase = GameObjectBase::new("a").with_collider(Rc::clone(&collider));
        let object2: GameObjectBase = GameObjectBase::new("b")
            .with_collider(collider)
            .with_transform(Transform::from_position(Vector2::new(50.0, 0.0)));
        let no_collider: GameObjectBase = GameObjectBase::new("c");

        assert!(object1.check_collision(&object2));
        assert!(!object1.check_collision(&no_collider));
        assert!(!no_collider.check_collision(&object1));

        object1.set_active(false);
        assert!(!object1.check_collision(&object2));
        assert!(!object2.check_collision(&object1));
    }

    #[test]
    fn render() {
        let mut canvas: CommandCanvas = CommandCanvas::new();
        let mut object: GameObjectBase = GameObjectBase::new("")
            .with_sprite(Rc::new(Square))
            .with_transform(Transform::from_position(Vector2::new(1.0, 1.0)));

        object.render(&mut canvas).expect("Command canvas never fails");
        assert_eq!(canvas.rects().collect::<Vec<_>>(), vec![&Rect::new(0.0, 0.0, 2.0, 2.0)]);

        canvas.clear();
        object.set_active(false);
        object.render(&mut canvas).expect("Command canvas never fails");
        assert!(canvas.commands().is_empty());

        object.set_sprite(None);
        object.set_active(true);
        object.render(&mut canvas).expect("Command canvas never fails");
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn downcasting() {
        let mut object: Box<dyn GameObject> = Box::new(Counter {
            base: GameObjectBase::new("counter"),
            entered: 0,
        });
        assert!(object.is::<Counter>());
        assert!(!object.is::<GameObjectBase>());
        assert!(object.downcast_ref::<GameObjectBase>().is_none());

        let other: GameObjectBase = GameObjectBase::default();
        object.on_collision_enter(&other);
        object
            .downcast_mut::<Counter>()
            .expect("Object is a counter")
            .entered += 1;
        assert_eq!(object.downcast_ref::<Counter>().map(|counter| counter.entered), Some(2));

        assert_eq!(
            object.update(1.0),
            Err(GameObjectError::Failed(String::from("counter cannot update")))
        );
        assert!(object.downcast::<Counter>().is_ok());
    }

    #[test]
    fn destroy() {
        let mut object: GameObjectBase = GameObjectBase::new("temporary");
        assert!(!object.is_destroyed());
        GameObject::destroy(&mut object);
        assert!(object.is_destroyed());
        assert!(format!("{:?}", &object as &dyn GameObject).contains("temporary"));
    }
}
