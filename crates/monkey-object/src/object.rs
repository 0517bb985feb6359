use std::fmt;
use std::rc::Rc;

use fxhash::FxHashMap;
use monkey_ast::{BlockStatement, Identifier};

use crate::environment::Env;
use crate::hash_key::HashKey;

/// A runtime value (§3.3). `ReturnValue` and `Error` are internal
/// control-flow sentinels: they pass through `eval` untouched but are
/// never bindable by user code and never appear inside an `Array` or
/// `Hash`.
#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Array(Vec<Object>),
    Hash(FxHashMap<HashKey, (Object, Object)>),
    Function(Rc<Function>),
    Builtin(Builtin),
    ReturnValue(Box<Object>),
    Error(String),
}

#[derive(Debug)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

/// A host-provided function (§4.4). Builtins never capture an
/// environment, so the function pointer is `Copy` and the table of
/// them can be a plain `fn` lookup rather than a boxed closure.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(&[Object]) -> Object,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl Object {
    /// The upper-case type tag used throughout error messages
    /// (`"type mismatch: INTEGER + BOOLEAN"`, etc.).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    /// Falsy iff `FALSE` or `NULL`; every other value, including `0`
    /// and empty aggregates, is truthy (§4.3.1).
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::String(value) => write!(f, "{value}"),
            Object::Null => write!(f, "null"),
            Object::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(Object::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Object::Hash(pairs) => {
                let rendered: Vec<String> = pairs.values().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Object::Function(function) => {
                let params: Vec<String> = function.parameters.iter().map(|p| p.name.clone()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), function.body)
            }
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}
