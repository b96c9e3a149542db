//! Plugin surface: a plugin receives the compiler once, at construction,
//! and taps whatever hooks it cares about.

use crate::compiler::Compiler;

/// A compiler plugin.
///
/// `apply` runs exactly once per compiler, before the first build pass;
/// plugins registered earlier tap hooks earlier and therefore fire earlier.
pub trait Plugin {
    fn apply(&self, compiler: &mut Compiler);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use satchel_config::Config;

    use super::*;
    use crate::compiler::create_compiler;

    struct Recorder {
        log: Rc<RefCell<Vec<&'static str>>>,
        start: &'static str,
        end: &'static str,
    }

    impl Plugin for Recorder {
        fn apply(&self, compiler: &mut Compiler) {
            let log = Rc::clone(&self.log);
            let tag = self.start;
            compiler.hooks.run.tap(tag, move || log.borrow_mut().push(tag));
            let log = Rc::clone(&self.log);
            let tag = self.end;
            compiler.hooks.done.tap(tag, move || log.borrow_mut().push(tag));
        }
    }

    #[test]
    fn plugins_apply_in_order_and_observe_both_passes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.js"), "module.exports = 1;\n").unwrap();

        let mut config = Config::with_entry("index.js");
        config.context = Some(dir.path().to_path_buf());

        let log = Rc::new(RefCell::new(Vec::new()));
        let plugins: Vec<Box<dyn Plugin>> = vec![
            Box::new(Recorder {
                log: Rc::clone(&log),
                start: "a:run",
                end: "a:done",
            }),
            Box::new(Recorder {
                log: Rc::clone(&log),
                start: "b:run",
                end: "b:done",
            }),
        ];

        let compiler = create_compiler(config, &plugins).unwrap();
        compiler.run().unwrap();

        assert_eq!(*log.borrow(), ["a:run", "b:run", "a:done", "b:done"]);
    }
}
