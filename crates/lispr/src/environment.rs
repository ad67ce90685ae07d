//! Lexical scopes: a chain of frames, looked up from the innermost outward.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// Shared, mutable handle to an [`Environment`] frame.
///
/// Cloning an `EnvRef` is a cheap pointer clone, used for parent links and
/// for sharing the caller's frame during function application. Deep-copying
/// a frame's own bindings while keeping its parent link shared (the
/// operation closures actually need when a function value is copied) is
/// [`Environment::deep_clone`], never plain `Clone`.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A single lexical scope: an ordered list of bindings plus an optional
/// parent frame.
#[derive(Debug)]
pub struct Environment {
    bindings: Vec<(String, Value)>,
    parent: Option<EnvRef>,
}

impl Environment {
    /// An empty frame with no parent.
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Environment {
            bindings: Vec::new(),
            parent: None,
        }))
    }

    /// The global environment, pre-populated with every builtin.
    pub fn new_global() -> EnvRef {
        let env = Self::new();
        crate::builtins::register_all(&env);
        env
    }

    /// An empty frame whose parent is `parent`.
    pub fn child(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            bindings: Vec::new(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Re-parents `env` onto `parent`, replacing whatever parent it had.
    ///
    /// The applier uses this to extend a function's captured frame with the
    /// caller's environment for the duration of one call.
    pub fn set_parent(env: &EnvRef, parent: EnvRef) {
        env.borrow_mut().parent = Some(parent);
    }

    /// Looks up `name` in `env`, then each parent in turn, returning a
    /// (deep) clone of the bound value, or `Value::Error` if unbound
    /// anywhere in the chain.
    pub fn get(env: &EnvRef, name: &str) -> Value {
        let borrowed = env.borrow();
        if let Some((_, value)) = borrowed.bindings.iter().find(|(n, _)| n == name) {
            return value.clone();
        }
        let parent = borrowed.parent.clone();
        drop(borrowed);
        match parent {
            Some(parent) => Self::get(&parent, name),
            None => Value::Error(format!("Unbound symbol '{name}'")),
        }
    }

    /// Binds `name` to `value` in `env`'s own frame only, replacing any
    /// existing binding for `name` there.
    pub fn put_local(env: &EnvRef, name: &str, value: Value) {
        let mut borrowed = env.borrow_mut();
        match borrowed.bindings.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => borrowed.bindings.push((name.to_owned(), value)),
        }
    }

    /// Binds `name` to `value` in the root of `env`'s chain.
    pub fn put_global(env: &EnvRef, name: &str, value: Value) {
        let mut current = Rc::clone(env);
        loop {
            let parent = current.borrow().parent.clone();
            match parent {
                Some(p) => current = p,
                None => break,
            }
        }
        Self::put_local(&current, name, value);
    }

    /// Deep-copies `env`'s own bindings; the parent link is shared, not
    /// copied. This is the clone semantics a captured closure environment
    /// needs: a partial application owns independent bindings for the
    /// arguments bound so far, while still pointing at the same enclosing
    /// scope as the function it was curried from.
    pub fn deep_clone(env: &EnvRef) -> EnvRef {
        let borrowed = env.borrow();
        Rc::new(RefCell::new(Environment {
            bindings: borrowed.bindings.clone(),
            parent: borrowed.parent.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn lookup_walks_the_parent_chain() {
        let root = Environment::new();
        Environment::put_local(&root, "x", Value::Number(Number::Int(1)));
        let child = Environment::child(&root);
        assert!(matches!(Environment::get(&child, "x"), Value::Number(Number::Int(1))));
    }

    #[test]
    fn unbound_symbol_is_an_error_value() {
        let root = Environment::new();
        assert!(Environment::get(&root, "nope").is_error());
    }

    #[test]
    fn put_local_never_escapes_to_parent() {
        let root = Environment::new();
        let child = Environment::child(&root);
        Environment::put_local(&child, "x", Value::Number(Number::Int(1)));
        assert!(Environment::get(&root, "x").is_error());
    }

    #[test]
    fn put_global_reaches_the_root_from_a_deep_child() {
        let root = Environment::new();
        let child = Environment::child(&root);
        let grandchild = Environment::child(&child);
        Environment::put_global(&grandchild, "x", Value::Number(Number::Int(9)));
        assert!(matches!(Environment::get(&root, "x"), Value::Number(Number::Int(9))));
    }

    #[test]
    fn deep_clone_frame_is_independent_of_the_original() {
        let root = Environment::new();
        let child = Environment::child(&root);
        Environment::put_local(&child, "x", Value::Number(Number::Int(1)));
        let cloned = Environment::deep_clone(&child);
        Environment::put_local(&child, "x", Value::Number(Number::Int(2)));
        assert!(matches!(Environment::get(&cloned, "x"), Value::Number(Number::Int(1))));
    }
}
