//! `gamecore::scenes` submodule implements [`Scene`] - struct that handles and manages
//! all game objects that are registered in that [`Scene`] and
//! [`SceneManager`] - struct that holds currently running [`Scene`].
//!
//! # Frame
//! Every frame, owning application calls [`Scene::update`] and then [`Scene::render`].
//! Update advances logic of all game objects and runs collision pass, which compares pairs
//! that intersect in this frame against pairs that intersected in previous frame and synthesizes
//! enter and exit notifications. Destroyed game objects are pruned after the pass.
//!

use crate::{
    datacore::settings::{DebugDrawFlags, SceneSettings},
    gamecore::{
        gameobjects::{BoxedGameObject, GameObject, GameObjectError},
        identifiers::GameObjectId,
        storages::GameObjectStorage,
    },
    graphicscore::drawing::{Canvas, DrawError},
    mathcore::{collisions::Collider, transforms::Transform, Color},
};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    panic::{self, AssertUnwindSafe},
    thread,
};
use thiserror::Error;

/// [`SceneError`] enum lists errors that scene operations report to the calling code.
///
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// Game object cannot be registered.
    ///
    #[error("invalid game object: {0}")]
    InvalidGameObject(&'static str),
    /// Collision pass was requested while another collision pass of the same scene is running.
    ///
    #[error("collision pass is already running")]
    ReentrantCollisionPass,
    /// Scene handler failed while handling scene event.
    ///
    #[error("scene handler failed: {0}")]
    Handler(String),
}

/// [`FramePhase`] enum lists parts of a frame in which game object can fault.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FramePhase {
    /// [`GameObject::update`] call.
    ///
    Update,
    /// [`GameObject::render`] call.
    ///
    Render,
    /// Drawing of collider overlay.
    ///
    DebugDraw,
}

/// [`FrameFault`] struct describes single isolated fault of a game object.
///
/// Faults do not abort the frame; scene collects them for diagnostics.
///
#[derive(Clone, Debug, PartialEq)]
pub struct FrameFault {
    /// Id of faulty object.
    ///
    pub id: GameObjectId,
    /// Tag of faulty object.
    ///
    pub tag: String,
    /// Part of a frame in which fault happened.
    ///
    pub phase: FramePhase,
    /// Reported error.
    ///
    pub error: GameObjectError,
}

/// [`CollisionPair`] struct represents unordered pair of two distinct colliding game objects.
///
/// Pair is normalized on construction, so `(a, b)` and `(b, a)` are equal.
///
/// # Example
/// ```rust
/// # use ggscene::gamecore::{gameobjects::GameObjectBase, scenes::{CollisionPair, Scene}};
/// let mut scene: Scene = Scene::new();
/// let a = scene.add_game_object(Box::new(GameObjectBase::new("a"))).expect("Object is valid");
/// let b = scene.add_game_object(Box::new(GameObjectBase::new("b"))).expect("Object is valid");
///
/// assert_eq!(CollisionPair::new(a, b), CollisionPair::new(b, a));
/// assert_eq!(CollisionPair::new(b, a).first(), a);
/// assert_eq!(CollisionPair::new(a, b).other(a), Some(b));
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollisionPair {
    /// Smaller id.
    ///
    first: GameObjectId,
    /// Bigger id.
    ///
    second: GameObjectId,
}
impl CollisionPair {
    /// Constructs normalized pair.
    ///
    pub fn new(id1: GameObjectId, id2: GameObjectId) -> Self {
        CollisionPair {
            first: id1.min(id2),
            second: id1.max(id2),
        }
    }

    /// Returns smaller id of a pair.
    ///
    pub fn first(&self) -> GameObjectId {
        self.first
    }
    /// Returns bigger id of a pair.
    ///
    pub fn second(&self) -> GameObjectId {
        self.second
    }
    /// Returns whether pair contains given id.
    ///
    pub fn contains(&self, id: GameObjectId) -> bool {
        self.first == id || self.second == id
    }
    /// Returns the other participant of a pair.
    ///
    pub fn other(&self, id: GameObjectId) -> Option<GameObjectId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }
}
impl fmt::Display for CollisionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// [`SceneHandler`] trait defines scene-level hooks of game logic.
///
/// Handler is attached to a [`Scene`] and receives mutable access to it on every call,
/// so it can add, remove or modify game objects of that scene.
///
/// # Example
/// ```rust
/// # use ggscene::gamecore::{gameobjects::GameObject, identifiers::GameObjectId, scenes::{Scene, SceneError, SceneHandler}};
/// struct Referee;
/// impl SceneHandler for Referee {
///     fn on_collision(
///         &mut self,
///         scene: &mut Scene,
///         first: GameObjectId,
///         second: GameObjectId,
///     ) -> Result<(), SceneError> {
///         for id in [first, second] {
///             if let Some(object) = scene.game_object_mut(id) {
///                 if object.tag() == "bullet" {
///                     object.destroy();
///                 }
///             }
///         }
///         Ok(())
///     }
/// }
///
/// let scene: Scene = Scene::new().with_handler(Referee);
/// assert!(scene.has_handler());
/// ```
///
pub trait SceneHandler {
    /// Is called when scene becomes current.
    ///
    fn on_enter(&mut self, scene: &mut Scene) {
        let _ = scene;
    }
    /// Is called when scene stops being current.
    ///
    fn on_exit(&mut self, scene: &mut Scene) {
        let _ = scene;
    }
    /// Is called once when two game objects start colliding,
    /// after both of them were notified with [`GameObject::on_collision_enter`].
    ///
    /// Returned error is propagated from [`Scene::check_collisions`] after the collision pass is finished.
    ///
    fn on_collision(
        &mut self,
        scene: &mut Scene,
        first: GameObjectId,
        second: GameObjectId,
    ) -> Result<(), SceneError> {
        let _ = (scene, first, second);
        Ok(())
    }
}

/// [`Scene`] struct owns game objects and runs frames over them.
///
/// # Collisions
/// Each unordered pair of game objects is either colliding or not.
/// Pair starts colliding when colliders of both active objects intersect:
/// both objects receive [`GameObject::on_collision_enter`] and then [`SceneHandler::on_collision`] is called.
/// Pair stays colliding while intersection holds, and no callbacks are fired in that state.
/// Pair stops colliding when intersection is lost or any participant becomes inactive:
/// both objects receive [`GameObject::on_collision_exit`].
/// If one of participants was removed from the scene, exit notification of that pair is skipped.
///
/// # Example
/// ```rust
/// # use ggscene::gamecore::{gameobjects::{GameObject, GameObjectBase}, scenes::Scene};
/// # use ggscene::mathcore::{collisions::Collider, transforms::Transform, vectors::Vector2};
/// let mut scene: Scene = Scene::new();
/// let wall = scene
///     .add_game_object(Box::new(GameObjectBase::new("wall").with_collider(Collider::rectangle(10.0, 10.0))))
///     .expect("Object is valid");
/// let ball = scene
///     .add_game_object(Box::new(
///         GameObjectBase::new("ball")
///             .with_collider(Collider::circle(10.0))
///             .with_transform(Transform::from_position(Vector2::new(100.0, 0.0))),
///     ))
///     .expect("Object is valid");
///
/// scene.update(1.0).expect("No handler is attached");
/// assert!(!scene.is_colliding(wall, ball));
///
/// if let Some(object) = scene.game_object_mut(ball) {
///     object.transform_mut().position = Vector2::new(5.0, 0.0);
/// }
/// scene.update(1.0).expect("No handler is attached");
/// assert!(scene.is_colliding(ball, wall));
/// ```
///
pub struct Scene {
    /// Registered game objects.
    ///
    game_objects: GameObjectStorage,
    /// Tag index; may contain stale ids until next compaction.
    ///
    tagged_game_objects: HashMap<String, Vec<GameObjectId>>,
    /// Pairs that were colliding as of the last collision pass.
    ///
    active_collisions: HashSet<CollisionPair>,

    /// Scene-level hooks.
    ///
    handler: Option<Box<dyn SceneHandler>>,
    /// Configuration.
    ///
    settings: SceneSettings,

    /// Faults of the most recent frame.
    ///
    frame_faults: Vec<FrameFault>,
    /// Set while collision pass is running.
    ///
    checking_collisions: bool,
}
impl Scene {
    /// Constructs empty scene with default settings and without handler.
    ///
    pub fn new() -> Self {
        Scene::with_settings(SceneSettings::default())
    }
    /// Constructs empty scene with given settings.
    ///
    pub fn with_settings(settings: SceneSettings) -> Self {
        Scene {
            game_objects: GameObjectStorage::new(),
            tagged_game_objects: HashMap::new(),
            active_collisions: HashSet::new(),

            handler: None,
            settings,

            frame_faults: Vec::new(),
            checking_collisions: false,
        }
    }
    /// Attaches handler to the scene.
    ///
    pub fn with_handler(mut self, handler: impl SceneHandler + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }
    /// Replaces handler of the scene and returns previous one.
    ///
    pub fn set_handler(
        &mut self,
        handler: Option<Box<dyn SceneHandler>>,
    ) -> Option<Box<dyn SceneHandler>> {
        std::mem::replace(&mut self.handler, handler)
    }
    /// Returns whether handler is attached.
    ///
    /// Handler is detached while it is being called.
    ///
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Returns settings of the scene.
    ///
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }
    /// Returns mutable settings of the scene.
    ///
    pub fn settings_mut(&mut self) -> &mut SceneSettings {
        &mut self.settings
    }
    /// Enables or disables drawing of collider outlines.
    ///
    pub fn set_debug_draw_enabled(&mut self, enabled: bool) {
        self.settings.set_debug_draw_enabled(enabled);
    }
    /// Returns whether collider outlines are drawn.
    ///
    pub fn is_debug_draw_enabled(&self) -> bool {
        self.settings.is_debug_draw_enabled()
    }

    /// Is called when scene becomes current.
    ///
    pub fn enter(&mut self) {
        log::debug!("Entering scene with {} game objects", self.len());
        if let Some(mut handler) = self.handler.take() {
            handler.on_enter(self);
            self.restore_handler(handler);
        }
    }
    /// Is called when scene stops being current.
    ///
    pub fn exit(&mut self) {
        log::debug!("Exiting scene with {} game objects", self.len());
        if let Some(mut handler) = self.handler.take() {
            handler.on_exit(self);
            self.restore_handler(handler);
        }
    }

    /// Registers game object in the scene and returns its id.
    ///
    /// Game object is indexed by its tag unless tag is empty.
    ///
    /// # Errors
    /// Registration fails if transform of the object is not finite, if its collider is not valid,
    /// or if scene is in the middle of a collision pass.
    ///
    pub fn add_game_object(
        &mut self,
        game_object: BoxedGameObject,
    ) -> Result<GameObjectId, SceneError> {
        if self.checking_collisions {
            return Err(SceneError::InvalidGameObject(
                "game objects cannot be registered during collision pass",
            ));
        }
        if !game_object.transform().is_finite() {
            return Err(SceneError::InvalidGameObject("transform is not finite"));
        }
        if let Some(collider) = game_object.base().collider() {
            if !collider.is_valid() {
                return Err(SceneError::InvalidGameObject("collider is not valid"));
            }
        }

        let tag: String = game_object.tag().to_string();
        let id: GameObjectId = self.game_objects.insert(game_object);
        if !tag.is_empty() {
            self.tagged_game_objects.entry(tag).or_default().push(id);
        }
        Ok(id)
    }
    /// Removes game object from the scene and returns it.
    ///
    /// Removing an object that is not registered is a no-op.
    ///
    pub fn remove_game_object(&mut self, id: GameObjectId) -> Option<BoxedGameObject> {
        let game_object: BoxedGameObject = self.game_objects.remove(id)?;
        if let Some(bucket) = self.tagged_game_objects.get_mut(game_object.tag()) {
            bucket.retain(|tagged_id| *tagged_id != id);
        }
        Some(game_object)
    }

    /// Returns game object with given id.
    ///
    pub fn game_object(&self, id: GameObjectId) -> Option<&dyn GameObject> {
        self.game_objects.get(id)
    }
    /// Returns mutable game object with given id.
    ///
    pub fn game_object_mut(&mut self, id: GameObjectId) -> Option<&mut dyn GameObject> {
        self.game_objects.get_mut(id)
    }
    /// Returns whether game object with given id is registered.
    ///
    pub fn contains(&self, id: GameObjectId) -> bool {
        self.game_objects.contains(id)
    }
    /// Returns amount of registered game objects.
    ///
    pub fn len(&self) -> usize {
        self.game_objects.len()
    }
    /// Returns whether scene has no game objects.
    ///
    pub fn is_empty(&self) -> bool {
        self.game_objects.is_empty()
    }
    /// Returns iterator over ids of all registered game objects.
    ///
    pub fn ids(&self) -> impl Iterator<Item = GameObjectId> + '_ {
        self.game_objects.ids()
    }

    /// Returns ids of registered game objects with given tag in order of registration.
    ///
    /// Unknown tag results in empty vector.
    ///
    pub fn game_objects_by_tag(&self, tag: &str) -> Vec<GameObjectId> {
        self.tagged_game_objects
            .get(tag)
            .map(|bucket| {
                bucket
                    .iter()
                    .copied()
                    .filter(|id| self.game_objects.contains(*id))
                    .collect()
            })
            .unwrap_or_default()
    }
    /// Returns id of the first registered game object with given tag.
    ///
    pub fn game_object_by_tag(&self, tag: &str) -> Option<GameObjectId> {
        self.tagged_game_objects
            .get(tag)?
            .iter()
            .copied()
            .find(|id| self.game_objects.contains(*id))
    }

    /// Returns faults that game objects reported during the most recent frame.
    ///
    /// List is cleared at the start of every [`Scene::update`].
    ///
    pub fn frame_faults(&self) -> &[FrameFault] {
        &self.frame_faults
    }
    /// Returns iterator over pairs that were colliding as of the last collision pass.
    ///
    pub fn active_collisions(&self) -> impl Iterator<Item = CollisionPair> + '_ {
        self.active_collisions.iter().copied()
    }
    /// Returns whether two game objects were colliding as of the last collision pass.
    ///
    pub fn is_colliding(&self, id1: GameObjectId, id2: GameObjectId) -> bool {
        self.active_collisions
            .contains(&CollisionPair::new(id1, id2))
    }

    /// Runs logic of a frame.
    ///
    /// Every game object is updated (fault of one object is recorded and does not stop the others),
    /// then collision pass is run. Objects that were destroyed take part in the pass as inactive ones,
    /// so their partners still receive exit notifications; after the pass they are removed
    /// and tag index is compacted.
    ///
    /// # Errors
    /// Errors of collision pass (see [`Scene::check_collisions`]) are propagated.
    ///
    pub fn update(&mut self, delta_time: f32) -> Result<(), SceneError> {
        if self.checking_collisions {
            return Err(SceneError::ReentrantCollisionPass);
        }

        self.frame_faults.clear();
        for (id, game_object) in self.game_objects.iter_mut() {
            if let Err(error) = game_object.update(delta_time) {
                log::error!("Game object {id} ('{}') failed to update: {error}", game_object.tag());
                self.frame_faults.push(FrameFault {
                    id,
                    tag: game_object.tag().to_string(),
                    phase: FramePhase::Update,
                    error,
                });
            }
        }

        let result: Result<(), SceneError> = self.check_collisions();
        self.prune_destroyed();
        self.compact_tags();
        result
    }
    /// Draws all active game objects and collider overlays (if debug drawing is enabled).
    ///
    /// Fault of one object is recorded and does not stop the others.
    ///
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        for (id, game_object) in self.game_objects.iter() {
            if !game_object.is_active() {
                continue;
            }
            if let Err(error) = game_object.render(canvas) {
                log::error!("Game object {id} ('{}') failed to render: {error}", game_object.tag());
                self.frame_faults.push(FrameFault {
                    id,
                    tag: game_object.tag().to_string(),
                    phase: FramePhase::Render,
                    error,
                });
            }
        }

        if self.settings.debug_draw.is_empty() {
            return;
        }
        for (id, game_object) in self.game_objects.iter() {
            let Some(collider) = game_object.base().collider() else {
                continue;
            };
            if !game_object.is_active() {
                continue;
            }
            if let Err(error) = self.render_overlay(collider, game_object.transform(), canvas) {
                log::error!("Collider of game object {id} could not be drawn: {error}");
                self.frame_faults.push(FrameFault {
                    id,
                    tag: game_object.tag().to_string(),
                    phase: FramePhase::DebugDraw,
                    error: GameObjectError::Draw(error),
                });
            }
        }
    }

    /// Runs collision pass.
    ///
    /// All pairs of active game objects are checked, pairs that started colliding are notified
    /// with enter callbacks and pairs that stopped colliding are notified with exit callbacks.
    /// Set of active collisions is replaced before any callback is fired.
    ///
    /// # Errors
    /// Nested call (e.g. from [`SceneHandler::on_collision`]) fails with [`SceneError::ReentrantCollisionPass`].
    /// First error that was returned by [`SceneHandler::on_collision`] is returned after all
    /// notifications of this pass are fired. In every case scene is able to run next collision pass.
    ///
    /// # Panics
    /// Panic of a callback is propagated after the pass is marked as finished.
    ///
    pub fn check_collisions(&mut self) -> Result<(), SceneError> {
        if self.checking_collisions {
            return Err(SceneError::ReentrantCollisionPass);
        }

        self.checking_collisions = true;
        let result: thread::Result<Result<(), SceneError>> =
            panic::catch_unwind(AssertUnwindSafe(|| self.run_collision_pass()));
        self.checking_collisions = false;
        result.unwrap_or_else(|payload| panic::resume_unwind(payload))
    }

    /// Computes current collision pairs, commits them and fires notifications.
    ///
    fn run_collision_pass(&mut self) -> Result<(), SceneError> {
        let current: Vec<CollisionPair> = self.collect_collisions();
        let current_set: HashSet<CollisionPair> = current.iter().copied().collect();

        let entered: Vec<CollisionPair> = current
            .into_iter()
            .filter(|pair| !self.active_collisions.contains(pair))
            .collect();
        let mut exited: Vec<CollisionPair> = self
            .active_collisions
            .difference(&current_set)
            .copied()
            .collect();
        exited.sort();
        self.active_collisions = current_set;

        let mut result: Result<(), SceneError> = Ok(());
        for pair in entered {
            if let Err(error) = self.dispatch_enter(pair) {
                log::error!("Collision handler failed on {pair}: {error}");
                if result.is_ok() {
                    result = Err(error);
                }
            }
        }
        for pair in exited {
            self.dispatch_exit(pair);
        }
        result
    }
    /// Returns all pairs of game objects that collide at this moment in order of their ids.
    ///
    fn collect_collisions(&self) -> Vec<CollisionPair> {
        let game_objects: Vec<(GameObjectId, &dyn GameObject)> = self
            .game_objects
            .iter()
            .filter(|(_, game_object)| {
                game_object.is_active() && !game_object.base().is_destroyed()
            })
            .collect();

        let mut collisions: Vec<CollisionPair> = Vec::new();
        for (i, (id1, game_object1)) in game_objects.iter().enumerate() {
            for (id2, game_object2) in &game_objects[i + 1..] {
                if game_object1.check_collision(*game_object2) {
                    collisions.push(CollisionPair::new(*id1, *id2));
                }
            }
        }
        collisions
    }
    /// Notifies both participants and handler that pair started colliding.
    ///
    fn dispatch_enter(&mut self, pair: CollisionPair) -> Result<(), SceneError> {
        let Some((first, second)) = self.game_objects.pair_mut(pair.first(), pair.second()) else {
            log::warn!("Skipping collision enter of {pair}: participant was removed");
            return Ok(());
        };
        log::debug!("Collision enter: '{}' and '{}' {pair}", first.tag(), second.tag());
        first.on_collision_enter(&*second);
        second.on_collision_enter(&*first);

        match self.handler.take() {
            Some(mut handler) => {
                let result: Result<(), SceneError> =
                    handler.on_collision(self, pair.first(), pair.second());
                self.restore_handler(handler);
                result
            }
            None => Ok(()),
        }
    }
    /// Notifies both participants that pair stopped colliding.
    ///
    fn dispatch_exit(&mut self, pair: CollisionPair) {
        let Some((first, second)) = self.game_objects.pair_mut(pair.first(), pair.second()) else {
            log::warn!("Skipping collision exit of {pair}: participant was removed");
            return;
        };
        log::debug!("Collision exit: '{}' and '{}' {pair}", first.tag(), second.tag());
        first.on_collision_exit(&*second);
        second.on_collision_exit(&*first);
    }

    /// Removes game objects that were marked as destroyed.
    ///
    /// Pairs that are still active with destroyed participant (it was destroyed during collision pass)
    /// are closed with exit notifications before removal.
    ///
    fn prune_destroyed(&mut self) {
        let destroyed: Vec<GameObjectId> = self
            .game_objects
            .iter()
            .filter(|(_, game_object)| game_object.base().is_destroyed())
            .map(|(id, _)| id)
            .collect();
        if destroyed.is_empty() {
            return;
        }

        let mut closed: Vec<CollisionPair> = self
            .active_collisions
            .iter()
            .copied()
            .filter(|pair| destroyed.iter().any(|id| pair.contains(*id)))
            .collect();
        closed.sort();
        for pair in closed {
            let _ = self.active_collisions.remove(&pair);
            self.dispatch_exit(pair);
        }

        for id in destroyed {
            if let Some(game_object) = self.remove_game_object(id) {
                log::debug!("Destroyed game object {id} ('{}')", game_object.tag());
            }
        }
    }
    /// Drops stale ids and empty buckets from tag index.
    ///
    fn compact_tags(&mut self) {
        let game_objects: &GameObjectStorage = &self.game_objects;
        self.tagged_game_objects.retain(|_, bucket| {
            bucket.retain(|id| game_objects.contains(*id));
            !bucket.is_empty()
        });
    }
    /// Draws overlays that are enabled in settings for a single collider.
    ///
    fn render_overlay(
        &self,
        collider: &Collider,
        transform: &Transform,
        canvas: &mut dyn Canvas,
    ) -> Result<(), DrawError> {
        let settings: &SceneSettings = &self.settings;
        if settings.debug_draw.contains(DebugDrawFlags::COLLIDERS) {
            collider.render_debug_with(
                canvas,
                transform,
                settings.debug_color,
                settings.circle_segments,
            )?;
        }
        if settings.debug_draw.contains(DebugDrawFlags::BOUNDS) {
            let previous: Color = canvas.draw_color();
            canvas.set_draw_color(settings.debug_color);
            let result: Result<(), DrawError> = canvas.draw_rect(collider.bounds(transform));
            canvas.set_draw_color(previous);
            result?;
        }
        Ok(())
    }
    /// Puts handler back unless it was replaced during the call.
    ///
    fn restore_handler(&mut self, handler: Box<dyn SceneHandler>) {
        if self.handler.is_none() {
            self.handler = Some(handler);
        }
    }
}
impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}
impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("game_objects", &self.game_objects)
            .field("tagged_game_objects", &self.tagged_game_objects)
            .field("active_collisions", &self.active_collisions)
            .field("has_handler", &self.has_handler())
            .field("settings", &self.settings)
            .field("frame_faults", &self.frame_faults)
            .finish_non_exhaustive()
    }
}

/// [`SceneManager`] struct holds currently running [`Scene`] and switches between scenes.
///
/// # Example
/// ```rust
/// # use ggscene::gamecore::scenes::{Scene, SceneManager};
/// let mut manager: SceneManager = SceneManager::new();
/// manager.update(1.0).expect("Nothing to update");
///
/// assert!(manager.change_scene(Scene::new()).is_none());
/// let previous: Option<Scene> = manager.change_scene(Scene::new());
/// assert!(previous.is_some());
/// ```
///
#[derive(Debug, Default)]
pub struct SceneManager {
    /// Currently running scene.
    ///
    current_scene: Option<Scene>,
}
impl SceneManager {
    /// Constructs manager without current scene.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns current scene.
    ///
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current_scene.as_ref()
    }
    /// Returns mutable current scene.
    ///
    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.current_scene.as_mut()
    }

    /// Exits current scene, enters given one and returns the previous scene.
    ///
    pub fn change_scene(&mut self, mut scene: Scene) -> Option<Scene> {
        let previous: Option<Scene> = self.take_scene();
        scene.enter();
        self.current_scene = Some(scene);
        previous
    }
    /// Exits current scene and returns it, leaving manager without scene.
    ///
    pub fn take_scene(&mut self) -> Option<Scene> {
        let mut scene: Scene = self.current_scene.take()?;
        scene.exit();
        Some(scene)
    }

    /// Updates current scene, if any.
    ///
    pub fn update(&mut self, delta_time: f32) -> Result<(), SceneError> {
        match self.current_scene.as_mut() {
            Some(scene) => scene.update(delta_time),
            None => Ok(()),
        }
    }
    /// Renders current scene, if any.
    ///
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        if let Some(scene) = self.current_scene.as_mut() {
            scene.render(canvas);
        }
    }
}
