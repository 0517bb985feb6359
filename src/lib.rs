//! Public entry points for the Monkey interpreter: parse a source string
//! into an AST, or parse-and-evaluate it against an environment. The
//! REPL (`repl` module) and the `monkey` binary are both thin callers
//! of this API; nothing below depends on stdin/stdout.

pub mod repl;

pub use monkey_ast::Program;
pub use monkey_object::{Env, Environment, Object};

/// The outcome of parsing a line or file: either a `Program` ready for
/// evaluation, or the accumulated parser error strings (§7.1).
pub struct Parsed {
    pub program: Program,
    pub errors: Vec<String>,
}

/// Lexes and parses `source`. Never panics: a malformed program comes
/// back with a non-empty `errors` and whatever statements the parser
/// managed to recover (§4.2).
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(source: &str) -> Parsed {
    let mut parser = monkey_parser::Parser::new(monkey_lexer::Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors();
    Parsed { program, errors }
}

/// Parses `source` and, if parsing succeeded without errors, evaluates
/// it against `env`. Returns the parser errors on the `Err` side so
/// callers can print them instead of attempting evaluation (§7.1).
pub fn eval(source: &str, env: &Env) -> Result<Object, Vec<String>> {
    let Parsed { program, errors } = parse(source);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(monkey_eval::eval(&program, env))
}
