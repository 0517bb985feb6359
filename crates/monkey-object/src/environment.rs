use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

/// Environments are jointly owned by the interpreter frame that creates
/// them and by every closure that captures them (§3.4, §9); `Rc<RefCell<_>>`
/// gives that shared-ownership discipline without a garbage collector,
/// since the language can never construct a reference cycle between
/// environments (§9's "cycle question").
pub type Env = Rc<RefCell<Environment>>;

/// A mapping from identifier name to value, plus an optional link to an
/// enclosing environment (§3.4). Lookup walks outward to the root;
/// `set` always defines in the current environment, never an ancestor.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment { store: HashMap::new(), outer: None }))
    }

    /// A call frame's environment: params are bound here, and lookup
    /// falls back to `outer` (the function's captured environment, not
    /// necessarily the caller's).
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment { store: HashMap::new(), outer: Some(outer) }))
    }
}

/// Walks the environment chain outward, returning the first binding found.
pub fn get(env: &Env, name: &str) -> Option<Object> {
    let inner = env.borrow();
    match inner.store.get(name) {
        Some(value) => Some(value.clone()),
        None => inner.outer.as_ref().and_then(|outer| get(outer, name)),
    }
}

/// Defines or overwrites `name` in `env` itself, never an ancestor (§3.4).
pub fn set(env: &Env, name: String, value: Object) {
    env.borrow_mut().store.insert(name, value);
}

/// Rebinds `name` in the innermost environment that already defines it
/// (the pinned semantics of §4.3/§9 for `AssignExpression`). Returns
/// `false` if the name is undefined anywhere in the chain.
pub fn assign(env: &Env, name: &str, value: Object) -> bool {
    if env.borrow().store.contains_key(name) {
        env.borrow_mut().store.insert(name.to_string(), value);
        return true;
    }
    let outer = env.borrow().outer.clone();
    match outer {
        Some(outer) => assign(&outer, name, value),
        None => false,
    }
}
