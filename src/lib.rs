//! # GGScene
//!
//! **GGScene** - 2d game engine core written in pure Rust that implements Unity-like scenes
//! of game objects with exact collision detection and collision lifecycle notifications.
//!
//! # Cores
//! * `mathcore` - vectors, transforms and colliders (box, circle, and polygon via separating axis theorem);
//! * `graphicscore` - rendering collaborator interface and diagnostic drawing of colliders;
//! * `gamecore` - game objects, scenes, scene manager and object pools;
//! * `datacore` - persistence of engine data and scene settings.
//!
//! # Example
//! ```rust
//! use ggscene::gamecore::{gameobjects::{GameObject, GameObjectBase}, scenes::Scene};
//! use ggscene::graphicscore::drawing::CommandCanvas;
//! use ggscene::mathcore::{collisions::Collider, transforms::Transform, vectors::Vector2};
//!
//! let mut scene: Scene = Scene::new();
//! let player = scene
//!     .add_game_object(Box::new(GameObjectBase::new("player").with_collider(Collider::circle(10.0))))
//!     .expect("Object is valid");
//! let coin = scene
//!     .add_game_object(Box::new(
//!         GameObjectBase::new("coin")
//!             .with_collider(Collider::circle(4.0))
//!             .with_transform(Transform::from_position(Vector2::new(6.0, 0.0))),
//!     ))
//!     .expect("Object is valid");
//!
//! scene.update(1.0 / 60.0).expect("No handler is attached");
//! assert!(scene.is_colliding(player, coin));
//!
//! scene.set_debug_draw_enabled(true);
//! let mut canvas: CommandCanvas = CommandCanvas::new();
//! scene.render(&mut canvas);
//! assert_eq!(canvas.segments().count(), 64);
//! ```
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate bitflags;

#[cfg(feature = "sdl2")]
extern crate sdl2;

extern crate serde;
extern crate serde_cbor;

extern crate log;
extern crate thiserror;

// cores
pub mod datacore;
pub mod gamecore;
pub mod graphicscore;
pub mod mathcore;
