mod parser;
mod precedence;

pub use parser::Parser;
pub use precedence::Precedence;

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_ast::{Expression, Statement};
    use monkey_lexer::Lexer;

    fn parse(input: &str) -> (monkey_ast::Program, Vec<String>) {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        (program, parser.errors())
    }

    fn parse_ok(input: &str) -> monkey_ast::Program {
        let (program, errors) = parse(input);
        assert!(errors.is_empty(), "unexpected parser errors for {input:?}: {errors:?}");
        program
    }

    #[test]
    fn let_statements_bind_name_to_value() {
        let program = parse_ok("let x = 5;\nlet y = true;\nlet foobar = y;");
        assert_eq!(program.statements.len(), 3);
        for (statement, (name, expected)) in
            program.statements.iter().zip([("x", "5"), ("y", "true"), ("foobar", "y")])
        {
            match statement {
                Statement::Let(let_stmt) => {
                    assert_eq!(let_stmt.name.name, name);
                    assert_eq!(let_stmt.value.to_string(), expected);
                }
                other => panic!("expected LetStatement, got {other:?}"),
            }
        }
    }

    #[test]
    fn return_statements_carry_their_value() {
        let program = parse_ok("return 5;\nreturn 10;\nreturn 993322;");
        assert_eq!(program.statements.len(), 3);
        for statement in &program.statements {
            assert!(matches!(statement, Statement::Return(_)));
        }
    }

    #[test]
    fn let_statement_missing_assign_is_reported_and_program_still_returns() {
        let (program, errors) = parse("let x 5;");
        assert_eq!(errors, vec!["expected next token to be =, got INT instead"]);
        assert!(program.statements.is_empty());
    }

    #[test]
    fn no_prefix_parse_fn_error_is_reported() {
        let (_, errors) = parse(";");
        assert_eq!(errors, vec!["no prefix parse function for ; found"]);
    }

    #[test]
    fn function_literal_parses_its_parameter_list() {
        let program = parse_ok("fn(x, y) { x + y; }");
        let Statement::Expression(stmt) = &program.statements[0] else { panic!("expected expression statement") };
        let Expression::FunctionLiteral(func) = &stmt.expression else { panic!("expected function literal") };
        assert_eq!(func.parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(func.body.to_string(), "(x + y)");
    }

    #[test]
    fn assign_expression_requires_an_identifier_target() {
        let program = parse_ok("let x = 1; x = 2;");
        let Statement::Expression(stmt) = &program.statements[1] else { panic!("expected expression statement") };
        assert_eq!(stmt.expression.to_string(), "(x = 2)");
    }

    #[test]
    fn hash_literal_parses_key_value_pairs() {
        let program = parse_ok(r#"{"one": 1, "two": 2, "three": 3}"#);
        let Statement::Expression(stmt) = &program.statements[0] else { panic!("expected expression statement") };
        let Expression::HashLiteral(hash) = &stmt.expression else { panic!("expected hash literal") };
        assert_eq!(hash.pairs.len(), 3);
    }

    #[test]
    fn empty_hash_literal_parses() {
        let program = parse_ok("{}");
        let Statement::Expression(stmt) = &program.statements[0] else { panic!("expected expression statement") };
        let Expression::HashLiteral(hash) = &stmt.expression else { panic!("expected hash literal") };
        assert!(hash.pairs.is_empty());
    }

    /// The precedence round-trip table of §8: each input must
    /// pretty-print to the paired canonical parenthesized form.
    #[test]
    fn operator_precedence_round_trips_to_canonical_form() {
        let cases = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
            ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in cases {
            let program = parse_ok(input);
            assert_eq!(program.to_string(), expected, "input: {input:?}");
        }
    }

    /// A handful of pretty-printer snapshots via `expect-test`, covering
    /// shapes the plain-`assert_eq` table above doesn't: functions,
    /// conditionals, assignment, and hash literals.
    #[test]
    fn pretty_printer_snapshots() {
        expect_test::expect!["fn(x, y) (x + y)"].assert_eq(&parse_ok("fn(x, y) { x + y; }").to_string());
        expect_test::expect!["if(x < y) xelse y"].assert_eq(&parse_ok("if (x < y) { x } else { y }").to_string());
        expect_test::expect!["(x = (x + 1))"].assert_eq(&parse_ok("x = x + 1;").to_string());
        expect_test::expect!["{a:1, b:2}"].assert_eq(&parse_ok(r#"{"a": 1, "b": 2}"#).to_string());
    }
}
