// Default resources and store keys used when a surface is initialized

use crate::{ConfigStore, ConfigStoreExt, Surface, Variant};

/// Static CDN serving third-party libraries.
pub(crate) const STATIC_CDN: &str = "//cdn.staticfile.org";
/// CDN serving per-variant surface bundles and themes.
pub(crate) const SURFACE_CDN: &str = "//cdn.jsdelivr.net/gh/iszsw/surface-src@main";

/// Third-party scripts every surface loads, relative to the static CDN.
pub(crate) const LIBRARY_SCRIPTS: &[&str] = &[
    "vue/2.6.12/vue.min.js",
    "axios/0.24.0/axios.min.js",
    "element-ui/2.15.6/index.min.js",
];

/// Default theme stylesheet, relative to the surface CDN.
pub(crate) const DEFAULT_THEME: &str = "element-ui/index.dark.css";

/// Store key overriding both CDN bases.
pub(crate) const CDN_KEY: &str = "cdn";

/// Join a base URL and a relative path with exactly one slash.
fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Seed default scripts and theme, then append store-configured resources.
///
/// Store keys: `cdn`, `<name>.script`, `<name>.style`, `<name>.theme`.
pub(crate) fn seed<V: Variant>(surface: &mut Surface<V>, store: &dyn ConfigStore) {
    let cdn: String = store.configure(CDN_KEY, String::new());
    let (library_base, surface_base) = if cdn.is_empty() {
        (STATIC_CDN, SURFACE_CDN)
    } else {
        (cdn.as_str(), cdn.as_str())
    };
    let name = surface.name().to_string();

    let mut scripts: Vec<String> = LIBRARY_SCRIPTS
        .iter()
        .map(|s| join(library_base, s))
        .collect();
    scripts.push(join(surface_base, &format!("{}.js", name)));
    surface.add_script(scripts);

    let theme: Vec<String> = store.configure(
        &format!("{}.theme", name),
        vec![join(surface_base, DEFAULT_THEME)],
    );
    surface.set_theme(theme, true);

    let styles: Vec<String> = store.configure(&format!("{}.style", name), Vec::new());
    let scripts: Vec<String> = store.configure(&format!("{}.script", name), Vec::new());
    if !styles.is_empty() {
        surface.add_style(styles);
    }
    if !scripts.is_empty() {
        surface.add_script(scripts);
    }
}
