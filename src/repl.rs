//! The interactive REPL of §6.1: a constant prompt, one line of source
//! per iteration, parser errors printed and skipped, otherwise
//! evaluated against a single environment that persists for the whole
//! session.

use std::io::{self, BufRead, Write};

use monkey_object::Environment;

const PROMPT: &str = ">> ";

/// Runs the REPL against `input`/`output` until EOF, then returns
/// (§6.1's "on EOF, exits with status 0" is left to the caller).
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let env = Environment::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(());
        }

        let crate::Parsed { program, errors } = crate::parse(&line);
        if !errors.is_empty() {
            for message in &errors {
                writeln!(output, "\t{message}")?;
            }
            continue;
        }

        let env_ref = env.clone();
        let result = monkey_eval::eval(&program, &env_ref);
        writeln!(output, "{result}")?;
    }
}

/// Convenience entry point for the binary: wires `start` to real stdin/stdout.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    start(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn prints_the_inspect_form_of_each_line() {
        let transcript = run_session("5 + 5\n");
        assert_eq!(transcript, ">> 10\n>> ");
    }

    #[test]
    fn bare_statements_still_print_null() {
        let transcript = run_session("let x = 5;\n");
        assert_eq!(transcript, ">> null\n>> ");
    }

    #[test]
    fn parser_errors_are_printed_tab_indented_and_evaluation_is_skipped() {
        let transcript = run_session("let = 5;\n");
        assert!(transcript.contains('\t'), "expected a tab-indented error line, got {transcript:?}");
    }

    #[test]
    fn the_environment_persists_across_lines() {
        let transcript = run_session("let x = 5;\nx + 1\n");
        assert_eq!(transcript, ">> null\n>> 6\n>> ");
    }

    #[test]
    fn runtime_errors_print_in_their_display_form() {
        let transcript = run_session("foobar\n");
        assert_eq!(transcript, ">> ERROR: identifier not found: foobar\n>> ");
    }
}
