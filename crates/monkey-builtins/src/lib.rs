//! The fixed, process-wide builtin table of §4.4. Every entry is a
//! plain `fn(&[Object]) -> Object`; none of them capture an environment,
//! so `lookup` is a cheap name match rather than a constructed closure
//! table.

use monkey_errors::EvalError;
use monkey_object::{Object, NULL};

pub fn lookup(name: &str) -> Option<Object> {
    let func = match name {
        "len" => len,
        "first" | "head" => first,
        "last" => last,
        "rest" | "tail" => rest,
        "push" => push,
        "puts" => puts,
        _ => return None,
    };
    Some(Object::Builtin(monkey_object::Builtin { name: builtin_name(name), func }))
}

/// Canonicalizes an alias to the name reported in error messages, so
/// `head(1)` and `first(1)` produce the same wording.
fn builtin_name(name: &str) -> &'static str {
    match name {
        "first" | "head" => "first",
        "rest" | "tail" => "rest",
        "len" => "len",
        "last" => "last",
        "push" => "push",
        "puts" => "puts",
        _ => unreachable!("lookup only calls builtin_name for known names"),
    }
}

fn wrong_arity(got: usize, want: usize) -> Object {
    Object::Error(EvalError::WrongArgumentCount { got, want: want.to_string() }.to_string())
}

fn len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::String(s) => Object::Integer(s.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::Error(
            EvalError::ArgumentNotSupported { name: "len".to_string(), got: other.type_name().to_string() }
                .to_string(),
        ),
    }
}

fn first(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or_else(|| NULL.clone()),
        other => array_type_error("first", other),
    }
}

fn last(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or_else(|| NULL.clone()),
        other => array_type_error("last", other),
    }
}

fn rest(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) if elements.len() >= 2 => Object::Array(elements[1..].to_vec()),
        Object::Array(_) => NULL.clone(),
        other => array_type_error("rest", other),
    }
}

fn push(args: &[Object]) -> Object {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match &args[0] {
        Object::Array(elements) => {
            let mut elements = elements.clone();
            elements.push(args[1].clone());
            Object::Array(elements)
        }
        other => array_type_error("push", other),
    }
}

fn puts(args: &[Object]) -> Object {
    for arg in args {
        tracing::debug!(%arg, "puts");
        println!("{arg}");
    }
    NULL.clone()
}

fn array_type_error(name: &str, got: &Object) -> Object {
    Object::Error(
        EvalError::ArgumentTypeError { name: name.to_string(), expected: "ARRAY".to_string(), got: got.type_name().to_string() }
            .to_string(),
    )
}
