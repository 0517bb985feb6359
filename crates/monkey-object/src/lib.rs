mod environment;
mod hash_key;
mod object;
mod singletons;

pub use environment::{assign, get, set, Env, Environment};
pub use hash_key::{HashKey, Hashable};
pub use object::{Builtin, Function, Object};
pub use singletons::{native_bool, FALSE, NULL, TRUE};
