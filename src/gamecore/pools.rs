//! `gamecore::pools` submodule implements [`ObjectPool`] - storage of preallocated objects
//! that are reused instead of being constructed every time (bullets, particles, effects).
//!

use std::{collections::VecDeque, fmt};

/// Type alias for pool initializer.
///
/// Initializer is applied to every object that pool creates.
///
pub type Initializer<T> = Box<dyn Fn(&mut T)>;

/// [`ObjectPool`] struct stores boxed objects that can be acquired and released back.
///
/// When pool runs out of available objects, it grows by `grow_size` objects.
/// Objects are created with `Default` implementation and then passed to initializer (if any).
/// Released objects are not reset; that is the job of the caller.
///
/// # Example
/// ```rust
/// # use ggscene::gamecore::pools::ObjectPool;
/// let mut pool: ObjectPool<Vec<u8>> = ObjectPool::with_initializer(2, 3, |buffer: &mut Vec<u8>| buffer.reserve(64));
/// assert_eq!(pool.available_count(), 2);
///
/// let buffers: Vec<Box<Vec<u8>>> = (0..3).map(|_| pool.acquire()).collect();
/// assert!(buffers.iter().all(|buffer| buffer.capacity() >= 64));
/// assert_eq!(pool.total_size(), 5);
/// assert_eq!(pool.available_count(), 2);
///
/// for buffer in buffers {
///     pool.release(buffer);
/// }
/// assert_eq!(pool.available_count(), 5);
/// ```
///
pub struct ObjectPool<T> {
    /// Amount of objects that are created when pool is empty.
    ///
    grow_size: usize,
    /// Function that prepares newly created objects.
    ///
    initializer: Option<Initializer<T>>,

    /// Objects that can be acquired.
    ///
    available: VecDeque<Box<T>>,
    /// Amount of objects that were created by this pool and were not dropped by [`ObjectPool::clear`].
    ///
    total_size: usize,
}
impl<T: Default> ObjectPool<T> {
    /// Constructs pool with `initial_size` objects.
    ///
    pub fn new(initial_size: usize, grow_size: usize) -> Self {
        let mut pool: ObjectPool<T> = ObjectPool {
            grow_size,
            initializer: None,

            available: VecDeque::with_capacity(initial_size),
            total_size: 0,
        };
        pool.grow(initial_size);
        pool
    }
    /// Constructs pool with `initial_size` objects that are prepared with initializer.
    ///
    pub fn with_initializer(
        initial_size: usize,
        grow_size: usize,
        initializer: impl Fn(&mut T) + 'static,
    ) -> Self {
        let mut pool: ObjectPool<T> = ObjectPool {
            grow_size,
            initializer: Some(Box::new(initializer)),

            available: VecDeque::with_capacity(initial_size),
            total_size: 0,
        };
        pool.grow(initial_size);
        pool
    }

    /// Takes object from the pool, growing the pool if it is empty.
    ///
    /// Pool with zero `grow_size` grows by one object.
    ///
    pub fn acquire(&mut self) -> Box<T> {
        if let Some(object) = self.available.pop_front() {
            return object;
        }
        self.grow(self.grow_size.max(1) - 1);
        self.create()
    }
    /// Returns object to the pool.
    ///
    pub fn release(&mut self, object: Box<T>) {
        self.available.push_back(object);
    }

    /// Returns amount of objects that can be acquired without growing.
    ///
    pub fn available_count(&self) -> usize {
        self.available.len()
    }
    /// Returns amount of objects that were created by this pool and are still owned by it
    /// or acquired from it.
    ///
    pub fn total_size(&self) -> usize {
        self.total_size
    }
    /// Drops all available objects.
    ///
    /// Objects that are currently acquired are not affected, are still counted
    /// in [`ObjectPool::total_size`] and can still be released.
    ///
    pub fn clear(&mut self) {
        self.total_size -= self.available.len();
        self.available.clear();
    }

    /// Creates `count` objects and makes them available.
    ///
    fn grow(&mut self, count: usize) {
        for _ in 0..count {
            let object: Box<T> = self.create();
            self.available.push_back(object);
        }
    }
    /// Creates single prepared object.
    ///
    fn create(&mut self) -> Box<T> {
        let mut object: Box<T> = Box::default();
        if let Some(initializer) = &self.initializer {
            initializer(object.as_mut());
        }
        self.total_size += 1;
        object
    }
}
impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("grow_size", &self.grow_size)
            .field("has_initializer", &self.initializer.is_some())
            .field("available", &self.available.len())
            .field("total_size", &self.total_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectPool;

    #[derive(Default)]
    struct Particle {
        lifetime: f32,
    }

    #[test]
    fn growth() {
        let mut pool: ObjectPool<Particle> = ObjectPool::new(1, 4);
        assert_eq!((pool.available_count(), pool.total_size()), (1, 1));

        let first: Box<Particle> = pool.acquire();
        assert_eq!((pool.available_count(), pool.total_size()), (0, 1));
        let second: Box<Particle> = pool.acquire();
        assert_eq!((pool.available_count(), pool.total_size()), (3, 5));

        pool.release(first);
        pool.release(second);
        assert_eq!(pool.available_count(), 5);
    }

    #[test]
    fn initializer() {
        let mut pool: ObjectPool<Particle> =
            ObjectPool::with_initializer(0, 2, |particle: &mut Particle| particle.lifetime = 3.0);
        assert_eq!(pool.total_size(), 0);

        let mut particle: Box<Particle> = pool.acquire();
        assert_eq!(particle.lifetime, 3.0);
        assert_eq!(pool.available_count(), 1);

        particle.lifetime = 0.5;
        pool.release(particle);
        let reused: Box<Particle> = pool.acquire();
        assert_eq!(reused.lifetime, 3.0);
        let released: Box<Particle> = pool.acquire();
        assert_eq!(released.lifetime, 0.5);
    }

    #[test]
    fn zero_grow_size() {
        let mut pool: ObjectPool<Particle> = ObjectPool::new(0, 0);
        let _particle: Box<Particle> = pool.acquire();
        assert_eq!((pool.available_count(), pool.total_size()), (0, 1));

        pool.clear();
        assert_eq!((pool.available_count(), pool.total_size()), (0, 1));
        assert!(format!("{pool:?}").contains("ObjectPool"));
    }

    #[test]
    fn clear_keeps_acquired_objects() {
        let mut pool: ObjectPool<Particle> = ObjectPool::new(3, 1);
        let first: Box<Particle> = pool.acquire();
        let second: Box<Particle> = pool.acquire();

        pool.clear();
        assert_eq!((pool.available_count(), pool.total_size()), (0, 2));

        pool.release(first);
        pool.release(second);
        assert_eq!((pool.available_count(), pool.total_size()), (2, 2));

        pool.clear();
        assert_eq!((pool.available_count(), pool.total_size()), (0, 0));
    }
}
