#[cfg(test)]
mod tests {
    use std::{rc::Rc, result};

    use serde_json::{Value, json};

    use crate::{
        ArgError, Args, Component, ConfigNode, Construct, EmptyStore, Error, Provider,
        ProviderKind, ProviderRegistry, Resolved, Result, Surface, Table, Variant, resolver,
    };

    /// Service component carrying a single numeric value.
    #[derive(Debug)]
    struct Svc {
        value: i64,
    }

    impl Component for Svc {
        fn format(&self) -> ConfigNode {
            ConfigNode::new().with("value", self.value)
        }
    }

    impl Construct for Svc {
        fn construct(args: &[Value]) -> result::Result<Self, ArgError> {
            let args = Args::new(args).arity(1, 1)?;
            match args.value(0).and_then(Value::as_i64) {
                Some(value) => Ok(Self { value }),
                None => Err(ArgError::Type {
                    index: 0,
                    what: "value",
                    expected: "an integer",
                }),
            }
        }
    }

    fn greet(args: &[Value]) -> Result<Value> {
        let who = Args::new(args).arity(1, 1)?.str(0, "who")?;
        Ok(Value::String(format!("hi {who}")))
    }

    fn scenario() -> ProviderRegistry {
        ProviderRegistry::new("demo")
            .with("greet", Provider::invoke(greet))
            .with("svc", Provider::construct::<Svc>())
            .with("flag", Provider::literal(true))
    }

    #[test]
    fn invoke_construct_and_literal_branches() {
        let registry = scenario();

        let greeting = registry.make("greet", &[json!("bob")]).unwrap();
        assert_eq!(greeting.as_value(), Some(&json!("hi bob")));

        let svc = registry.make("svc", &[json!(5)]).unwrap();
        assert_eq!(svc.downcast_ref::<Svc>().map(|s| s.value), Some(5));
        assert_eq!(svc.format().get("value"), Some(&json!(5)));

        let flag = registry.make("flag", &[json!("ignored"), json!(1)]).unwrap();
        assert_eq!(flag.into_value(), Some(Value::Bool(true)));
    }

    #[test]
    fn each_construct_call_builds_a_fresh_instance() {
        let registry = scenario();
        let a = registry.make("svc", &[json!(1)]).unwrap();
        let b = registry.make("svc", &[json!(2)]).unwrap();
        assert_eq!(a.downcast_ref::<Svc>().map(|s| s.value), Some(1));
        assert_eq!(b.downcast_ref::<Svc>().map(|s| s.value), Some(2));
    }

    #[test]
    fn missing_name_is_component_not_found() {
        let err = scenario().make("nope", &[]).unwrap_err();
        match err {
            Error::ComponentNotFound { surface, name } => {
                assert_eq!(surface, "demo");
                assert_eq!(name, "nope");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn constructor_rejection_is_instantiation_failure() {
        let err = scenario().make("svc", &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::InstantiationFailure {
                ref name,
                source: ArgError::Arity { min: 1, max: 1, got: 0 },
            } if name == "svc"
        ));

        let err = scenario().make("svc", &[json!("five")]).unwrap_err();
        assert!(matches!(err, Error::InstantiationFailure { .. }));
    }

    #[test]
    fn invocable_errors_pass_through() {
        let err = scenario().make("greet", &[]).unwrap_err();
        assert!(matches!(err, Error::Arguments(ArgError::Arity { .. })));
    }

    #[test]
    fn last_registration_wins_and_keeps_position() {
        let mut registry = scenario();
        registry.register("greet", Provider::literal("replaced"));
        let listed: Vec<_> = registry.list().collect();
        assert_eq!(
            listed,
            vec![
                ("greet", ProviderKind::Literal),
                ("svc", ProviderKind::Construct),
                ("flag", ProviderKind::Literal),
            ]
        );
        let value = registry.make("greet", &[json!("bob")]).unwrap();
        assert_eq!(value.as_value(), Some(&json!("replaced")));
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("svc"));
    }

    #[test]
    fn closures_capture_their_receiver() {
        let prefix = Rc::new(String::from("col_"));
        let captured = Rc::clone(&prefix);
        let registry = ProviderRegistry::new("demo").with(
            "named",
            Provider::invoke(move |args: &[Value]| {
                let name = Args::new(args).str(0, "name")?;
                Ok(json!({ "prop": format!("{captured}{name}") }))
            }),
        );
        let resolved = registry.make("named", &[json!("id")]).unwrap();
        assert_eq!(resolved.format().get("prop"), Some(&json!("col_id")));
        assert_eq!(Rc::strong_count(&prefix), 2);
    }

    #[test]
    fn resolve_directly_without_registry() {
        let resolved = resolver::resolve("flag", &Provider::literal(3), &[]).unwrap();
        assert!(matches!(resolved, Resolved::Value(Value::Number(_))));
        assert_eq!(resolved.format().get("value"), Some(&json!(3)));
    }

    #[test]
    fn non_object_values_cannot_attach() {
        let resolved = Resolved::from(json!("text"));
        let err = resolved.into_component("greet").unwrap_err();
        assert!(matches!(err, Error::NotAComponent { ref name } if name == "greet"));
    }

    #[test]
    fn surface_dispatch_and_attach() {
        let registry = Table::registry(&Table::name()).with("greet", Provider::invoke(greet));
        let mut table = Surface::<Table>::new(Rc::new(registry), &EmptyStore, None).unwrap();

        let greeting = table.call("greet", &[json!("ann")]).unwrap();
        assert_eq!(greeting.as_value(), Some(&json!("hi ann")));
        assert!(table.columns().is_empty());

        table
            .attach("column", &[json!("id"), json!("ID")])
            .unwrap()
            .attach("component", &[json!({"type": "custom"})])
            .unwrap();
        assert_eq!(
            table.columns_value(),
            json!([
                {"type": "column", "prop": "id", "label": "ID"},
                {"type": "custom"}
            ])
        );

        let err = table.attach("greet", &[json!("ann")]).unwrap_err();
        assert!(matches!(err, Error::NotAComponent { .. }));
        assert_eq!(table.columns().len(), 2);
    }
}
