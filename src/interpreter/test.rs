use super::{eval, standard_env, Env, Environment, Procedure};
use crate::error::Error;
use crate::parser::{parse, Expression};

fn eval_str(input: &str, env: &Env) -> Result<Option<Expression>, Error> {
    eval(&parse(input)?, env)
}

fn run(env: &Env, lines: &[&str]) {
    for line in lines {
        eval_str(line, env).unwrap_or_else(|err| panic!("\"{line}\" failed: {err}"));
    }
}

fn assert_eval(input: &str, env: &Env, expected: &str) {
    match eval_str(input, env) {
        Ok(Some(value)) => assert_eq!(
            value.to_string(),
            expected,
            "\nEvaluating \"{}\":\nexpected {}, got {}\n",
            input,
            expected,
            value
        ),
        other => panic!("Evaluating \"{input}\": expected {expected}, got {other:?}"),
    }
}

fn assert_raises(input: &str, env: &Env, error: Error) {
    assert_eq!(eval_str(input, env), Err(error));
}

#[test]
fn test_arithmetic() {
    let env = standard_env();
    assert_eval("(+ 1 2)", &env, "3");
    assert_eval("(- 10 4)", &env, "6");
    assert_eval("(* 2.5 4)", &env, "10");
    assert_eval("(/ 1 4)", &env, "0.25");
    assert_eval("(+ 1 (* 2 3))", &env, "7");
    assert_eval("42", &env, "42");
    assert_eval("(42)", &env, "42");
}

#[test]
fn test_standard_env_surface() {
    let env = standard_env();
    for name in ["+", "-", "*", "/"] {
        assert!(env.contains(name), "{name} is not bound");
    }
    assert!(!env.contains("if"));
    assert!(env.parent().is_none());
    assert_eval("+", &env, "#<primitive +>");
}

#[test]
fn test_primitive_failures() {
    let env = standard_env();
    assert_raises("(/ 1 0)", &env, Error::DivisionByZero);
    assert_raises(
        "(+ 1 2 3)",
        &env,
        Error::ArityMismatch {
            expected: 2,
            found: 3,
        },
    );
    assert_raises(
        "(+ 1 (quote a))",
        &env,
        Error::NotANumber("a".to_string()),
    );
    assert_raises("(1 2)", &env, Error::NotAProcedure("1".to_string()));
}

#[test]
fn test_define_mutates_frame() {
    let env = standard_env();
    assert_eq!(eval_str("(define x 10)", &env), Ok(None));
    assert_eval("x", &env, "10");
    assert_eval("(x)", &env, "10");
    assert_eq!(env.get("x"), Some(Expression::Number(10.0)));
    run(&env, &["(define x 11)"]);
    assert_eval("x", &env, "11");
    assert_eq!(env.get("x"), Some(Expression::Number(11.0)));
}

#[test]
fn test_define_binds_in_current_frame_only() {
    let root = standard_env();
    run(&root, &["(define x 1)"]);
    let child = Environment::new(&[], vec![], Some(root.clone())).unwrap();
    run(&child, &["(define x 2)"]);
    assert_eval("x", &child, "2");
    assert_eval("x", &root, "1");
}

#[test]
fn test_set() {
    let root = standard_env();
    run(&root, &["(define x 10)"]);
    let child = Environment::new(&[], vec![], Some(root.clone())).unwrap();
    assert_eq!(eval_str("(set! x 99)", &child), Ok(None));
    assert!(!child.contains("x"));
    assert_eval("x", &root, "99");
    assert_raises("(set! y 1)", &root, Error::UnboundSymbol("y".to_string()));
}

#[test]
fn test_unbound_symbol() {
    let env = standard_env();
    assert_raises("nope", &env, Error::UnboundSymbol("nope".to_string()));
    assert_raises("(nope 1)", &env, Error::UnboundSymbol("nope".to_string()));
}

#[test]
fn test_quote() {
    let env = standard_env();
    assert_eval("(quote (1 (2 3) ()))", &env, "(1 (2 3) ())");
    assert_eval("(quote x)", &env, "x");
    assert_eval("(quote (+ 1 2))", &env, "(+ 1 2)");
    let data = parse("(1 (2 3) (4 (5)))").unwrap();
    let quoted = Expression::List(vec![Expression::symbol("quote"), data.clone()]);
    let once = eval(&quoted, &env).unwrap().unwrap();
    assert_eq!(once, data);
    let again = Expression::List(vec![Expression::symbol("quote"), once]);
    assert_eq!(eval(&again, &env).unwrap(), Some(data));
}

#[test]
fn test_if_truthiness() {
    let env = standard_env();
    assert_eval("(if 1 2 3)", &env, "2");
    assert_eval("(if 0 2 3)", &env, "3");
    assert_eval("(if (- 2 2) 2 3)", &env, "3");
    assert_eval("(if (quote ()) 2 3)", &env, "3");
    assert_eval("(if (quote (0)) 2 3)", &env, "2");
    assert_eval("(if + 2 3)", &env, "2");
    assert_eval("(if 1 2 undefined)", &env, "2");
}

#[test]
fn test_lambda_application() {
    let env = standard_env();
    assert_eval("((lambda (x y) (* x y)) 3 4)", &env, "12");
    assert!(!env.contains("x"));
    assert!(!env.contains("y"));
    assert_raises("x", &env, Error::UnboundSymbol("x".to_string()));
    assert_raises(
        "((lambda (x y) (* x y)) 3)",
        &env,
        Error::ArityMismatch {
            expected: 2,
            found: 1,
        },
    );
}

#[test]
fn test_closures_capture_defining_env() {
    let env = standard_env();
    run(
        &env,
        &[
            "(define adder (lambda (n) (lambda (x) (+ x n))))",
            "(define add5 (adder 5))",
        ],
    );
    assert_eval("((add5) 10)", &env, "15");
    assert_eval("(add5 1)", &env, "6");
    assert_raises("n", &env, Error::UnboundSymbol("n".to_string()));
}

#[test]
fn test_closure_counter() {
    let env = standard_env();
    run(
        &env,
        &[
            "(define make-counter (lambda (count) (lambda (step) (set! count (+ count step)))))",
            "(define counter (make-counter 0))",
            "(counter 1)",
            "(counter 5)",
        ],
    );
    match env.get("counter") {
        Some(Expression::Procedure(Procedure::Lambda(lambda))) => {
            assert_eq!(lambda.env.get("count"), Some(Expression::Number(6.0)))
        }
        other => panic!("expected a closure, got {other:?}"),
    }
}

#[test]
fn test_recursion() {
    let env = standard_env();
    run(
        &env,
        &["(define fact (lambda (n) (if n (* n (fact (- n 1))) 1)))"],
    );
    assert_eval("(fact 5)", &env, "120");
    assert_eval("(fact 0)", &env, "1");
}

#[test]
fn test_malformed_forms() {
    let env = standard_env();
    assert!(matches!(
        eval_str("(if 1 2)", &env),
        Err(Error::MalformedForm("if", _))
    ));
    assert!(matches!(
        eval_str("(define 1 2)", &env),
        Err(Error::MalformedForm("define", _))
    ));
    assert!(matches!(
        eval_str("(lambda x x)", &env),
        Err(Error::MalformedForm("lambda", _))
    ));
    assert!(matches!(
        eval_str("(lambda (1) 1)", &env),
        Err(Error::MalformedForm("lambda", _))
    ));
    assert!(matches!(
        eval_str("(quote 1 2)", &env),
        Err(Error::MalformedForm("quote", _))
    ));
    assert_raises("(+ (define x 1) 2)", &env, Error::NoValue);
}

#[test]
fn test_environment_construction() {
    let params = vec!["a".to_string(), "b".to_string()];
    let env = Environment::new(
        &params,
        vec![Expression::Number(1.0), Expression::Number(2.0)],
        None,
    )
    .unwrap();
    assert_eq!(env.get("a"), Some(Expression::Number(1.0)));
    assert_eq!(env.get("b"), Some(Expression::Number(2.0)));
    assert!(Environment::new(&params, vec![], None).is_err());
    let child = Environment::new(&[], vec![], Some(env.clone())).unwrap();
    assert!(std::rc::Rc::ptr_eq(&child.find("a").unwrap(), &env));
    assert_eq!(
        child.find("c").err(),
        Some(Error::UnboundSymbol("c".to_string()))
    );
}
