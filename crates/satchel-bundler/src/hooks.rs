//! Lifecycle hooks: named listener registration with synchronous
//! invocation in registration order.
//!
//! Hooks are plain instance state owned by the [`Compiler`](crate::Compiler)
//! and passed by reference to whoever taps or calls them; there is no
//! process-wide registry.

use std::fmt;

use tracing::trace;

struct Tap {
    name: String,
    callback: Box<dyn Fn()>,
}

/// A synchronous, argument-less hook.
#[derive(Default)]
pub struct SyncHook {
    taps: Vec<Tap>,
}

impl SyncHook {
    /// Register a listener under a name tag. Listeners fire in
    /// registration order.
    pub fn tap(&mut self, name: impl Into<String>, callback: impl Fn() + 'static) {
        self.taps.push(Tap {
            name: name.into(),
            callback: Box::new(callback),
        });
    }

    /// Invoke every listener, synchronously, in registration order.
    pub fn call(&self) {
        for tap in &self.taps {
            trace!(tap = %tap.name, "invoking hook listener");
            (tap.callback)();
        }
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl fmt::Debug for SyncHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.taps.iter().map(|tap| &tap.name))
            .finish()
    }
}

/// The compiler's lifecycle hooks.
#[derive(Debug, Default)]
pub struct CompilerHooks {
    /// Fires before each build pass.
    pub run: SyncHook,
    /// Fires after each build pass, successful or not.
    pub done: SyncHook,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn listeners_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut hook = SyncHook::default();

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            hook.tap(tag, move || order.borrow_mut().push(tag));
        }

        hook.call();
        assert_eq!(*order.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn calling_twice_fires_twice() {
        let count = Rc::new(RefCell::new(0));
        let mut hook = SyncHook::default();
        {
            let count = Rc::clone(&count);
            hook.tap("counter", move || *count.borrow_mut() += 1);
        }

        hook.call();
        hook.call();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn empty_hook_is_a_noop() {
        let hook = SyncHook::default();
        assert!(hook.is_empty());
        hook.call();
    }

    #[test]
    fn debug_lists_tap_names() {
        let mut hook = SyncHook::default();
        hook.tap("reporter", || {});
        assert_eq!(format!("{hook:?}"), "[\"reporter\"]");
    }
}
