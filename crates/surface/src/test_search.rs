#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{ConfigNode, Error, Factory, Form, Search, Surface, Table, table::search_overlay};

    fn search_form(factory: &mut Factory) -> Surface<Form> {
        factory
            .build::<Form, _>(|f| {
                f.add_script("/js/search.js").add_style("/css/search.css");
                let submit = json!({"props": {"type": "primary"}});
                f.options(ConfigNode::new().with("submitBtn", submit));
                f.attach("input", &[json!("keyword"), json!("Keyword")])?;
                Ok(())
            })
            .unwrap()
    }

    #[test]
    fn embedded_form_nests_under_search() {
        let mut factory = Factory::default();
        let form = search_form(&mut factory);
        assert!(form.is_pending());

        let mut table = factory
            .build::<Table, _>(move |t| {
                t.add_script("/js/table.js");
                t.attach("column", &[json!("id")])?;
                t.set_search(form);
                Ok(())
            })
            .unwrap();
        assert!(!table.search().is_on());

        let page = table.view().unwrap();
        assert!(table.search().is_on());

        let search = page.tree.get("search").unwrap();
        assert_eq!(search["options"]["props"]["inline"], json!(true));
        assert_eq!(
            search["options"]["submitBtn"],
            json!({"props": {"type": "primary", "prop": {"icon": "el-icon-search"}}})
        );
        assert_eq!(
            search["columns"],
            json!([{"type": "input", "field": "keyword", "title": "Keyword", "value": null}])
        );
        assert!(search.get("search").is_none());

        let table_js = page.script.iter().position(|s| s == "/js/table.js");
        let search_js = page.script.iter().position(|s| s == "/js/search.js");
        assert!(table_js.is_some());
        assert!(table_js < search_js);
        assert_eq!(page.style, vec!["/css/search.css"]);
        // Shared defaults are not duplicated by the merge.
        let vue = page.script.iter().filter(|s| s.ends_with("vue.min.js")).count();
        assert_eq!(vue, 1);
        assert!(page.script.iter().any(|s| s.ends_with("/form.js")));
    }

    #[test]
    fn child_enters_search_mode() {
        let mut factory = Factory::default();
        let form = search_form(&mut factory);
        let mut table = factory.surface::<Table>().unwrap();
        table.set_search(form);
        table.view().unwrap();

        let Search::Embedded(child) = table.search() else {
            panic!("search surface missing");
        };
        assert_eq!(child.surface_name(), "form");
        assert!(!child.has_embedded());
    }

    #[test]
    fn view_twice_is_stable() {
        let mut factory = Factory::default();
        let form = search_form(&mut factory);
        let mut table = factory.surface::<Table>().unwrap();
        table.set_search(form);
        let first = table.view().unwrap();
        let second = table.view().unwrap();
        assert_eq!(first.tree, second.tree);
        assert_eq!(first.script, second.script);
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn nested_search_is_rejected() {
        let mut factory = Factory::default();
        let inner = search_form(&mut factory);
        let mut middle = factory.surface::<Table>().unwrap();
        middle.set_search(inner);

        let mut outer = factory.surface::<Table>().unwrap();
        outer.set_search(middle);
        let err = outer.view().unwrap_err();
        assert!(matches!(err, Error::NestedSearch { ref name } if name == "table"));
    }

    #[test]
    fn nesting_set_inside_a_task_is_rejected() {
        let mut factory = Factory::default();
        let inner = factory
            .build::<Form, _>(|f| {
                f.add_script("/js/grandchild.js");
                Ok(())
            })
            .unwrap();
        let middle = factory
            .build::<Table, _>(move |t| {
                t.attach("column", &[json!("id")])?;
                t.set_search(inner);
                Ok(())
            })
            .unwrap();

        let mut outer = factory.surface::<Table>().unwrap();
        outer.set_search(middle);
        let err = outer.view().unwrap_err();
        assert!(matches!(err, Error::NestedSearch { ref name } if name == "table"));
        assert!(!outer.script().contains(&"/js/grandchild.js"));
        assert!(outer.search().embedded().is_some());
    }

    #[test]
    fn plain_flag_emits_null_slot_for_tables() {
        let mut factory = Factory::default();
        let mut table = factory.surface::<Table>().unwrap();
        table.set_search(true);
        assert!(table.search().is_on());
        let page = table.view().unwrap();
        assert_eq!(page.tree.get("search"), Some(&Value::Null));
    }

    #[test]
    fn search_flag_reaches_form_tree() {
        let mut factory = Factory::default();
        let mut form = factory.surface::<Form>().unwrap();
        form.set_search(true);
        let page = form.view().unwrap();
        assert_eq!(page.tree.get("search"), Some(&Value::Bool(true)));
    }

    #[test]
    fn overlay_shape() {
        assert_eq!(
            Value::from(search_overlay()),
            json!({
                "props": {"inline": true},
                "submitBtn": {"props": {"prop": {"icon": "el-icon-search"}}}
            })
        );
    }
}
