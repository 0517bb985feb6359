use once_cell::sync::Lazy;

use crate::object::Object;

/// Process-wide constants (§3.3, §5): initialized once and immutable
/// thereafter. Booleans and `null` carry no payload, so in this
/// representation "singleton identity" collapses to ordinary value
/// equality — there is exactly one `Object::Boolean(true)` value a Rust
/// program can construct, so every `TRUE` the evaluator hands back
/// already compares equal to every other.
pub static TRUE: Lazy<Object> = Lazy::new(|| Object::Boolean(true));
pub static FALSE: Lazy<Object> = Lazy::new(|| Object::Boolean(false));
pub static NULL: Lazy<Object> = Lazy::new(|| Object::Null);

pub fn native_bool(value: bool) -> Object {
    if value { TRUE.clone() } else { FALSE.clone() }
}
