use monkey_ast::{BlockStatement, Expression, Program, Statement};
use monkey_errors::EvalError;
use monkey_object::{assign, get, set, Env, Environment, Function, Hashable, Object, FALSE, NULL, TRUE};
use std::rc::Rc;

/// Evaluates a parsed program against `env` (§4.3). Top-level statements
/// see `env` directly: there is no per-block lexical scoping in Monkey,
/// only function calls introduce a new environment.
#[tracing::instrument(level = "debug", skip_all)]
pub fn eval_program(program: &Program, env: &Env) -> Object {
    let mut result = NULL.clone();
    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Env) -> Object {
    tracing::trace!(kind = ?statement_kind(statement), "eval statement");
    match statement {
        Statement::Let(let_stmt) => {
            let value = eval_expression(&let_stmt.value, env);
            if value.is_error() {
                return value;
            }
            set(env, let_stmt.name.name.clone(), value);
            NULL.clone()
        }
        Statement::Return(return_stmt) => {
            let value = eval_expression(&return_stmt.value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::Expression(expr_stmt) => eval_expression(&expr_stmt.expression, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

/// Propagates `ReturnValue` and `Error` as-is rather than unwrapping
/// them, so an outer function call (or the program) can see past
/// arbitrarily nested `if`/block boundaries (§4.3, §4.5).
fn eval_block_statement(block: &BlockStatement, env: &Env) -> Object {
    let mut result = NULL.clone();
    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn statement_kind(statement: &Statement) -> &'static str {
    match statement {
        Statement::Let(_) => "let",
        Statement::Return(_) => "return",
        Statement::Expression(_) => "expression",
        Statement::Block(_) => "block",
    }
}

fn eval_expression(expr: &Expression, env: &Env) -> Object {
    tracing::trace!(kind = ?expression_kind(expr), "eval expression");
    match expr {
        Expression::IntegerLiteral(lit) => Object::Integer(lit.value),
        Expression::StringLiteral(lit) => Object::String(lit.value.clone()),
        Expression::Boolean(lit) => native_bool(lit.value),
        Expression::Identifier(ident) => eval_identifier(&ident.name, env),
        Expression::Prefix(prefix) => {
            let right = eval_expression(&prefix.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&prefix.operator, right)
        }
        Expression::Infix(infix) => {
            let left = eval_expression(&infix.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&infix.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&infix.operator, left, right)
        }
        Expression::If(if_expr) => eval_if_expression(if_expr, env),
        Expression::FunctionLiteral(func) => Object::Function(Rc::new(Function {
            parameters: func.parameters.clone(),
            body: func.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(call) => {
            let function = eval_expression(&call.function, env);
            if function.is_error() {
                return function;
            }
            let args = match eval_expressions(&call.arguments, env) {
                Ok(args) => args,
                Err(err) => return err,
            };
            apply_function(function, args)
        }
        Expression::Assign(assign_expr) => eval_assign_expression(assign_expr, env),
        Expression::ArrayLiteral(array) => match eval_expressions(&array.elements, env) {
            Ok(elements) => Object::Array(elements),
            Err(err) => err,
        },
        Expression::Index(index) => {
            let left = eval_expression(&index.left, env);
            if left.is_error() {
                return left;
            }
            let index_value = eval_expression(&index.index, env);
            if index_value.is_error() {
                return index_value;
            }
            eval_index_expression(left, index_value)
        }
        Expression::HashLiteral(hash) => eval_hash_literal(hash, env),
    }
}

fn expression_kind(expr: &Expression) -> &'static str {
    match expr {
        Expression::Identifier(_) => "identifier",
        Expression::IntegerLiteral(_) => "integer",
        Expression::StringLiteral(_) => "string",
        Expression::Boolean(_) => "boolean",
        Expression::Prefix(_) => "prefix",
        Expression::Infix(_) => "infix",
        Expression::If(_) => "if",
        Expression::FunctionLiteral(_) => "function_literal",
        Expression::Call(_) => "call",
        Expression::Assign(_) => "assign",
        Expression::ArrayLiteral(_) => "array_literal",
        Expression::Index(_) => "index",
        Expression::HashLiteral(_) => "hash_literal",
    }
}

fn native_bool(value: bool) -> Object {
    if value { TRUE.clone() } else { FALSE.clone() }
}

fn eval_identifier(name: &str, env: &Env) -> Object {
    if let Some(value) = get(env, name) {
        return value;
    }
    if let Some(builtin) = monkey_builtins::lookup(name) {
        return builtin;
    }
    Object::Error(EvalError::IdentifierNotFound { name: name.to_string() }.to_string())
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => native_bool(!right.is_truthy()),
        "-" => match right {
            Object::Integer(value) => Object::Integer(-value),
            other => {
                Object::Error(EvalError::UnknownOperator { op: "-".to_string(), operand: other.type_name().to_string() }.to_string())
            }
        },
        other => unreachable!("parser never emits prefix operator {other:?}"),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix_expression(operator, *l, *r),
        (Object::String(_), Object::String(_)) if operator == "+" => {
            let (Object::String(l), Object::String(r)) = (left, right) else { unreachable!() };
            Object::String(l + &r)
        }
        (Object::String(_), Object::String(_)) => Object::Error(
            EvalError::UnknownInfixOperator {
                left: left.type_name().to_string(),
                op: operator.to_string(),
                right: right.type_name().to_string(),
            }
            .to_string(),
        ),
        (Object::Boolean(l), Object::Boolean(r)) => match operator {
            "==" => native_bool(l == r),
            "!=" => native_bool(l != r),
            _ => Object::Error(
                EvalError::UnknownInfixOperator {
                    left: left.type_name().to_string(),
                    op: operator.to_string(),
                    right: right.type_name().to_string(),
                }
                .to_string(),
            ),
        },
        _ if left.type_name() != right.type_name() => Object::Error(
            EvalError::TypeMismatch {
                left: left.type_name().to_string(),
                op: operator.to_string(),
                right: right.type_name().to_string(),
            }
            .to_string(),
        ),
        _ => Object::Error(
            EvalError::UnknownInfixOperator {
                left: left.type_name().to_string(),
                op: operator.to_string(),
                right: right.type_name().to_string(),
            }
            .to_string(),
        ),
    }
}

/// Left operand first, right operand second, fed to the primitive in
/// that order (§4.3.2 — this pins the source's "TODO: order reversed"
/// ambiguity to left-then-right).
fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => checked_integer_op(left, operator, right, left.checked_add(right)),
        "-" => checked_integer_op(left, operator, right, left.checked_sub(right)),
        "*" => checked_integer_op(left, operator, right, left.checked_mul(right)),
        "/" => {
            if right == 0 {
                Object::Error(EvalError::DivisionByZero.to_string())
            } else {
                checked_integer_op(left, operator, right, left.checked_div(right))
            }
        }
        "<" => native_bool(left < right),
        ">" => native_bool(left > right),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => Object::Error(
            EvalError::UnknownInfixOperator { left: "INTEGER".to_string(), op: other.to_string(), right: "INTEGER".to_string() }
                .to_string(),
        ),
    }
}

/// Maps a `checked_*` arithmetic result to a `Value`/`Error` (§7): an
/// overflowing operation never panics the process, it produces a
/// deterministic runtime error instead, the same way division by zero
/// does two lines up.
fn checked_integer_op(left: i64, operator: &str, right: i64, result: Option<i64>) -> Object {
    match result {
        Some(value) => Object::Integer(value),
        None => Object::Error(EvalError::IntegerOverflow { left, op: operator.to_string(), right }.to_string()),
    }
}

fn eval_if_expression(if_expr: &monkey_ast::IfExpression, env: &Env) -> Object {
    let condition = eval_expression(&if_expr.condition, env);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block_statement(&if_expr.consequence, env)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        NULL.clone()
    }
}

fn eval_assign_expression(assign_expr: &monkey_ast::AssignExpression, env: &Env) -> Object {
    if get(env, &assign_expr.name.name).is_none() {
        return Object::Error(EvalError::IdentifierNotFound { name: assign_expr.name.name.clone() }.to_string());
    }
    let value = eval_expression(&assign_expr.value, env);
    if value.is_error() {
        return value;
    }
    assign(env, &assign_expr.name.name, value.clone());
    value
}

/// Evaluates a left-to-right expression list (call arguments, array
/// elements), short-circuiting on the first `Error` (§4.3).
fn eval_expressions(expressions: &[Expression], env: &Env) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(expressions.len());
    for expr in expressions {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        results.push(value);
    }
    Ok(results)
}

fn apply_function(function: Object, args: Vec<Object>) -> Object {
    match function {
        Object::Function(func) => {
            let call_env = Environment::new_enclosed(func.env.clone());
            for (param, arg) in func.parameters.iter().zip(args) {
                set(&call_env, param.name.clone(), arg);
            }
            let evaluated = eval_block_statement(&func.body, &call_env);
            match evaluated {
                Object::ReturnValue(value) => *value,
                other => other,
            }
        }
        Object::Builtin(builtin) => {
            tracing::debug!(name = builtin.name, "invoking builtin");
            (builtin.func)(&args)
        }
        other => Object::Error(EvalError::NotAFunction { type_name: other.type_name().to_string() }.to_string()),
    }
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (&left, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                NULL.clone()
            } else {
                elements[*i as usize].clone()
            }
        }
        (Object::Hash(_), _) => eval_hash_index_expression(left, index),
        _ => Object::Error(EvalError::IndexNotSupported { type_name: left.type_name().to_string() }.to_string()),
    }
}

fn eval_hash_index_expression(hash: Object, index: Object) -> Object {
    let Object::Hash(pairs) = hash else { unreachable!("caller only passes Object::Hash") };
    match index.hash_key() {
        Some(key) => pairs.get(&key).map(|(_, value)| value.clone()).unwrap_or_else(|| NULL.clone()),
        None => Object::Error(EvalError::UnusableHashKey { type_name: index.type_name().to_string() }.to_string()),
    }
}

fn eval_hash_literal(hash: &monkey_ast::HashLiteral, env: &Env) -> Object {
    let mut pairs = fxhash::FxHashMap::default();
    for (key_expr, value_expr) in &hash.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return Object::Error(EvalError::UnusableHashKey { type_name: key.type_name().to_string() }.to_string());
        };
        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }
        pairs.insert(hash_key, (key, value));
    }
    Object::Hash(pairs)
}
