#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use serde_json::{Value, json};

    use crate::{
        ConfigNode, Error, Factory, Form, Provider, ProviderRegistry, Result, Store, Surface,
        Table, Variant,
        table::{Button, Header, Pagination},
    };

    /// Variant whose configuration closure runs during construction.
    #[derive(Debug, Default)]
    struct Eager;

    impl Variant for Eager {
        const IDENT: &'static str = "EagerPanel";
        const DELAY: bool = false;

        fn registry(name: &str) -> ProviderRegistry {
            ProviderRegistry::new(name).with("note", Provider::literal(json!({"type": "note"})))
        }

        fn emit(_surface: &mut Surface<Self>, _tree: &mut ConfigNode) -> Result<()> {
            Ok(())
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        (Rc::clone(&count), count)
    }

    #[test]
    fn deferred_task_runs_exactly_once() {
        let (seen, count) = counter();
        let mut factory = Factory::default();
        let mut table = factory
            .build::<Table, _>(move |t| {
                count.set(count.get() + 1);
                t.attach("column", &[json!("id")])?;
                Ok(())
            })
            .unwrap();

        assert_eq!(seen.get(), 0);
        assert!(table.is_pending());
        table.execute().unwrap();
        table.execute().unwrap();
        let first = table.view().unwrap();
        let second = table.view().unwrap();
        assert_eq!(seen.get(), 1);
        assert!(!table.is_pending());
        assert_eq!(first, second);
        assert_eq!(table.columns().len(), 1);
    }

    #[test]
    fn failing_task_is_consumed() {
        let (seen, count) = counter();
        let mut factory = Factory::default();
        let mut table = factory
            .build::<Table, _>(move |t| {
                count.set(count.get() + 1);
                t.attach("missing", &[])?;
                Ok(())
            })
            .unwrap();
        assert!(matches!(
            table.execute().unwrap_err(),
            Error::ComponentNotFound { .. }
        ));
        assert!(table.execute().is_ok());
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn eager_variant_runs_at_construction() {
        let (seen, count) = counter();
        let mut factory = Factory::default();
        let panel = factory
            .build::<Eager, _>(move |p| {
                count.set(count.get() + 1);
                p.attach("note", &[])?;
                Ok(())
            })
            .unwrap();
        assert_eq!(seen.get(), 1);
        assert!(!panel.is_pending());
        assert_eq!(panel.name(), "eager_panel");
        assert_eq!(panel.columns_value(), json!([{"type": "note"}]));
    }

    #[test]
    fn eager_construction_surfaces_task_errors() {
        let mut factory = Factory::default();
        let err = factory
            .build::<Eager, _>(|p| {
                p.attach("missing", &[])?;
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, Error::ComponentNotFound { .. }));
    }

    #[test]
    fn id_is_stable_and_unique() {
        let mut factory = Factory::default();
        let a = factory.surface::<Table>().unwrap();
        let b = factory.surface::<Table>().unwrap();
        let first = a.id().to_string();
        assert_eq!(a.id(), first);
        assert!(first.starts_with('z'));
        assert_eq!(first.len(), 33);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn default_resources_and_theme() {
        let mut factory = Factory::default();
        let table = factory.surface::<Table>().unwrap();
        assert_eq!(
            table.script(),
            vec![
                "//cdn.staticfile.org/vue/2.6.12/vue.min.js",
                "//cdn.staticfile.org/axios/0.24.0/axios.min.js",
                "//cdn.staticfile.org/element-ui/2.15.6/index.min.js",
                "//cdn.jsdelivr.net/gh/iszsw/surface-src@main/table.js",
            ]
        );
        assert!(table.style().is_empty());
        assert_eq!(
            table.theme(),
            ["//cdn.jsdelivr.net/gh/iszsw/surface-src@main/element-ui/index.dark.css"]
        );
    }

    #[test]
    fn theme_replace_and_append() {
        let mut factory = Factory::default();
        let mut form = factory.surface::<Form>().unwrap();
        form.set_theme("a.css", true);
        assert_eq!(form.theme(), ["a.css"]);
        form.set_theme(["b.css", "c.css"], false);
        assert_eq!(form.theme(), ["a.css", "b.css", "c.css"]);
        form.set_theme(Vec::<String>::new(), true);
        assert!(form.theme().is_empty());
    }

    #[test]
    fn resources_deduplicate_across_calls() {
        let mut factory = Factory::default();
        let mut table = factory.surface::<Table>().unwrap();
        let before = table.script().len();
        table.add_script(["x.js", "y.js"]).add_script("x.js");
        table.add_style("s.css").add_style(["s.css"]);
        assert_eq!(table.script().len(), before + 2);
        assert_eq!(table.style(), vec!["s.css"]);
    }

    #[test]
    fn store_drives_initialization() {
        let store = Store::from_json_str(
            r#"{
                "cdn": "https://assets.local",
                "table": {
                    "style": ["/css/app.css"],
                    "script": ["/js/app.js"],
                    "theme": ["/css/light.css"]
                }
            }"#,
        )
        .unwrap();
        let mut factory = Factory::new(store);
        let table = factory.surface::<Table>().unwrap();
        assert_eq!(
            table.script(),
            vec![
                "https://assets.local/vue/2.6.12/vue.min.js",
                "https://assets.local/axios/0.24.0/axios.min.js",
                "https://assets.local/element-ui/2.15.6/index.min.js",
                "https://assets.local/table.js",
                "/js/app.js",
            ]
        );
        assert_eq!(table.style(), vec!["/css/app.css"]);
        assert_eq!(table.theme(), ["/css/light.css"]);

        let form = factory.surface::<Form>().unwrap();
        assert!(form.style().is_empty());
        assert_eq!(form.theme(), ["https://assets.local/element-ui/index.dark.css"]);
    }

    #[test]
    fn ron_store_with_flat_keys() {
        let store = Store::from_ron_str(r#"{"form.style": ["f.css"]}"#).unwrap();
        let mut factory = Factory::new(store);
        let form = factory.surface::<Form>().unwrap();
        assert_eq!(form.style(), vec!["f.css"]);
    }

    #[test]
    fn registration_is_copy_on_write() {
        let mut factory = Factory::default();
        let before = factory.surface::<Table>().unwrap();
        factory.register::<Table>("badge", Provider::literal(json!({"type": "badge"})));
        let after = factory.surface::<Table>().unwrap();

        assert!(!before.registry().contains("badge"));
        assert!(after.registry().contains("badge"));
        assert!(factory.registry::<Table>().contains("badge"));
        assert!(!factory.registry::<Form>().contains("badge"));

        let made = factory.make::<Table>("badge", &[]).unwrap();
        assert_eq!(made.format().get("type"), Some(&json!("badge")));
        assert!(matches!(
            factory.make::<Form>("badge", &[]).unwrap_err(),
            Error::ComponentNotFound { ref surface, .. } if surface == "form"
        ));
    }

    #[test]
    fn table_tree_slot_order() {
        let mut factory = Factory::default();
        let mut table = factory
            .build::<Table, _>(|t| {
                t.options(ConfigNode::new().with("stripe", true));
                t.attach("selection", &[json!("id")])?
                    .attach("column", &[json!("name"), json!("Name")])?;
                t.variant_mut()
                    .set_pagination(Pagination::default())
                    .set_header(Header::default().button(Button::new("create", None)));
                Ok(())
            })
            .unwrap();
        let page = table.view().unwrap();
        assert_eq!(page.name, "table");
        assert_eq!(
            page.tree.keys().collect::<Vec<_>>(),
            vec!["options", "columns", "pagination", "header", "search"]
        );
        assert_eq!(
            Value::from(page.tree),
            json!({
                "options": {"stripe": true},
                "columns": [
                    {"type": "selection", "prop": "id"},
                    {"type": "column", "prop": "name", "label": "Name"}
                ],
                "pagination": {
                    "pageSize": 15,
                    "layout": "total, sizes, prev, pager, next, jumper"
                },
                "header": {"buttons": [{"type": "button", "handler": "create"}]},
                "search": null
            })
        );
    }

    #[test]
    fn options_merge_deeply() {
        let mut factory = Factory::default();
        let mut form = factory.surface::<Form>().unwrap();
        form.options(ConfigNode::try_from(json!({"props": {"size": "small"}})).unwrap());
        form.options(ConfigNode::try_from(json!({"props": {"inline": true}})).unwrap());
        assert_eq!(
            Value::from(form.options_node().clone()),
            json!({"props": {"size": "small", "inline": true}})
        );
    }
}
