use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use toml_edit::{Document, Item, Table};

/// The dependency tables of the Cargo.toml that invokes a macro.
///
/// Generated code must name the runtime crate the way the *calling* crate sees
/// it, which depends on how that crate declared its dependencies.
///
/// # Resolution rules
///
/// For a requested crate such as `vc_form`:
///
/// 1. Listed directly in `dependencies`: `::vc_form`.
/// 2. The umbrella crate `vc_forms` is listed: `::vc_forms::form`.
/// 3. Steps 1 and 2 again against `dev-dependencies`.
/// 4. Otherwise `::vc_form`.
///
/// A crate that refers to itself from doctests should declare
/// `extern crate self as vc_form;` so that rule 4 still resolves.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let path: syn::Path = Manifest::crate_path("vc_form");
/// ```
#[derive(Debug, Default)]
pub struct Manifest {
    dependencies: Vec<String>,
    dev_dependencies: Vec<String>,
}

const UMBRELLA_NAME: &str = "vc_forms";
const MEMBER_PREFIX: &str = "vc_";

impl Manifest {
    /// Read the caller's manifest.
    ///
    /// A missing or unreadable manifest yields an empty dependency list, which
    /// makes every lookup fall back to the absolute crate path.
    fn load() -> Self {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            return Self::default();
        };
        let path = PathBuf::from(dir).join("Cargo.toml");
        let Ok(text) = fs::read_to_string(&path) else {
            return Self::default();
        };
        let Ok(document) = Document::parse(text.into_boxed_str()) else {
            return Self::default();
        };

        let names = |key: &str| -> Vec<String> {
            match document.get(key) {
                Some(Item::Table(table)) => Self::table_keys(table),
                _ => Vec::new(),
            }
        };

        Self {
            dependencies: names("dependencies"),
            dev_dependencies: names("dev-dependencies"),
        }
    }

    fn table_keys(table: &Table) -> Vec<String> {
        table.iter().map(|(name, _)| name.to_owned()).collect()
    }

    fn resolve_in(deps: &[String], name: &str) -> Option<String> {
        if deps.iter().any(|dep| dep == name) {
            return Some(format!("::{name}"));
        }
        let module = name.strip_prefix(MEMBER_PREFIX)?;
        if deps.iter().any(|dep| dep == UMBRELLA_NAME) {
            return Some(format!("::{UMBRELLA_NAME}::{module}"));
        }
        None
    }

    /// Resolve `name` against this manifest, see the type docs.
    pub fn resolve(&self, name: &str) -> syn::Path {
        let path = Self::resolve_in(&self.dependencies, name)
            .or_else(|| Self::resolve_in(&self.dev_dependencies, name))
            .unwrap_or_else(|| format!("::{name}"));

        syn::parse_str(&path).unwrap_or_else(|err| panic!("invalid crate path `{path}`: {err}"))
    }

    /// Resolve `name` for the crate currently being compiled.
    ///
    /// Manifests are parsed once per crate directory and kept for the lifetime
    /// of the compiler process.
    pub fn crate_path(name: &str) -> syn::Path {
        static MANIFESTS: Mutex<BTreeMap<PathBuf, Manifest>> = Mutex::new(BTreeMap::new());

        let key = env::var_os("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_default();

        let mut manifests = MANIFESTS.lock().unwrap_or_else(PoisonError::into_inner);
        manifests.entry(key).or_insert_with(Self::load).resolve(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn manifest(deps: &[&str], dev: &[&str]) -> Manifest {
        Manifest {
            dependencies: deps.iter().map(|s| s.to_string()).collect(),
            dev_dependencies: dev.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn render(path: syn::Path) -> String {
        path.segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest(&["vc_form", "vc_forms"], &[]);
        assert_eq!(render(m.resolve("vc_form")), "vc_form");
    }

    #[test]
    fn umbrella_crate() {
        let m = manifest(&["vc_forms"], &[]);
        assert_eq!(render(m.resolve("vc_form")), "vc_forms::form");
    }

    #[test]
    fn dev_dependencies_and_fallback() {
        let m = manifest(&["log"], &["vc_forms"]);
        assert_eq!(render(m.resolve("vc_form")), "vc_forms::form");

        let m = manifest(&[], &[]);
        let path = m.resolve("vc_form");
        assert!(path.leading_colon.is_some());
        assert_eq!(render(path), "vc_form");
    }
}
