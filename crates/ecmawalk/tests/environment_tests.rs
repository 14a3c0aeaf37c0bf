//! Environment tests

use std::sync::Arc;

use ecmawalk::*;
use pretty_assertions::assert_eq;

const ALL_KINDS: [DeclarationKind; 5] = [
    DeclarationKind::Const,
    DeclarationKind::Let,
    DeclarationKind::Var,
    DeclarationKind::Using,
    DeclarationKind::AwaitUsing,
];

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_new_environment_has_only_console() {
    let env = Environment::new();
    assert_eq!(env.names(), vec!["console"]);
    assert_eq!(env.len(), 1);
    assert!(!env.is_empty());
    assert!(env.contains("console"));
    assert!(!env.contains("x"));
    assert_eq!(env.depth(), 0);
}

#[test]
fn test_console_log_is_variadic_builtin() {
    let env = Environment::new();
    match env.get("console").and_then(|c| c.property("log")) {
        Some(Value::Callable(f)) => {
            assert_eq!(f.name, "log");
            assert!(f.is_variadic());
        }
        other => panic!("Expected console.log builtin, got {:?}", other),
    }
}

#[test]
fn test_each_environment_writes_to_its_own_output() {
    let first = Arc::new(Output::buffer());
    let second = Arc::new(Output::buffer());
    let env_a = Environment::with_output(first.clone());
    let env_b = Environment::with_output(second.clone());

    let call = |env: &Environment, text: &str| match env
        .get("console")
        .and_then(|c| c.property("log"))
    {
        Some(Value::Callable(f)) => f.call(&[Value::from(text)]).unwrap(),
        other => panic!("Expected console.log builtin, got {:?}", other),
    };

    call(&env_a, "a");
    call(&env_b, "b");

    assert_eq!(first.lines(), vec!["a"]);
    assert_eq!(second.lines(), vec!["b"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Binding Rules
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_get_binding_unbound() {
    let env = Environment::new();
    assert_eq!(
        env.get_binding("x"),
        Err(EnvironmentError::UnboundIdentifier {
            name: "x".to_string()
        })
    );
}

#[test]
fn test_set_binding_every_kind() {
    let mut env = Environment::new();
    for (i, kind) in ALL_KINDS.iter().enumerate() {
        let name = format!("v{}", i);
        env.set_binding(name.as_str(), Value::Number(i as f64), *kind)
            .unwrap();
        assert_eq!(env.binding(&name).unwrap().kind, *kind);
        assert_eq!(env.get_binding(&name).unwrap(), &Value::Number(i as f64));
    }
}

#[test]
fn test_const_is_never_rebound() {
    for kind in ALL_KINDS {
        let mut env = Environment::new();
        env.set_binding("x", Value::Number(1.0), DeclarationKind::Const)
            .unwrap();
        assert_eq!(
            env.set_binding("x", Value::Number(2.0), kind),
            Err(EnvironmentError::ConstReassignment {
                name: "x".to_string()
            })
        );
        assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    }
}

#[test]
fn test_non_const_rebinding_keeps_one_entry() {
    let mut env = Environment::new();
    env.set_binding("x", Value::Number(1.0), DeclarationKind::Let)
        .unwrap();
    env.set_binding("x", Value::from("two"), DeclarationKind::Using)
        .unwrap();

    assert_eq!(env.len(), 2);
    assert_eq!(env.get("x"), Some(&Value::from("two")));
    assert_eq!(env.binding("x").unwrap().kind, DeclarationKind::Using);
}

#[test]
fn test_iteration_is_in_declaration_order() {
    let mut env = Environment::new();
    env.set_binding("b", Value::Null, DeclarationKind::Var).unwrap();
    env.set_binding("a", Value::Null, DeclarationKind::Var).unwrap();

    let names: Vec<&str> = env.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["console", "b", "a"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Nesting Guard
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_nesting_guard_restores_depth() {
    let mut env = Environment::new();
    {
        let mut outer = env.nesting_guard(3).unwrap();
        {
            let inner = outer.nesting_guard(3).unwrap();
            assert_eq!(inner.depth(), 2);
        }
        assert_eq!(outer.depth(), 1);
    }
    assert_eq!(env.depth(), 0);
}

#[test]
fn test_nesting_guard_limit() {
    let mut env = Environment::new();
    let mut guard = env.nesting_guard(1).unwrap();
    assert!(matches!(
        guard.nesting_guard(1),
        Err(EnvironmentError::NestingTooDeep { depth: 2, max: 1 })
    ));
}

#[test]
fn test_environment_errors_convert() {
    let err: EvalError = EnvironmentError::ConstReassignment {
        name: "k".to_string(),
    }
    .into();
    assert_eq!(
        err,
        EvalError::ConstReassignment {
            name: "k".to_string(),
            span: None
        }
    );
}
