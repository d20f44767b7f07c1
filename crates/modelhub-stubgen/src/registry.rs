use std::collections::HashSet;
use std::path::Path;

use derive_new::new;
use modelhub_backends::Backend;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::StubgenError;

static CONSTANT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("Constant name pattern should be valid."));
static FUNCTION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("Function name pattern should be valid."));
static TYPE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("Type name pattern should be valid."));

/// Names the generated modules already use for their own items and imports.
const RESERVED_NAMES: &[&str] = &[
    "BACKENDS",
    "DUMMY_OBJECTS",
    "DUMMY_MODULES",
    "Backend",
    "RegistryEntry",
    "MissingBackendError",
    "requires_backends",
    "DummyObject",
    "Option",
    "Result",
];

const KEYWORDS: &[&str] = &[
    "_", "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for",
    "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override",
    "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Layout of `registry.toml`.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default, rename = "group")]
    groups: Vec<GroupTable>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct GroupTable {
    backends: Vec<String>,
    #[serde(default)]
    objects: Vec<String>,
}

/// What a registered name is in the real module, deduced from its casing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    /// `UPPER_SNAKE_CASE`, e.g. a pretrained archive list. Emitted as `None`.
    Constant,
    /// `lower_snake_case`. Emitted as a function running the backend check.
    Function,
    /// `UpperCamelCase`. Emitted as a placeholder struct.
    Type,
}

impl ObjectKind {
    pub fn classify(name: &str) -> Result<Self, StubgenError> {
        if KEYWORDS.contains(&name) || RESERVED_NAMES.contains(&name) {
            Err(StubgenError::InvalidName(name.to_string()))
        } else if CONSTANT_NAME.is_match(name) {
            Ok(Self::Constant)
        } else if FUNCTION_NAME.is_match(name) {
            Ok(Self::Function)
        } else if TYPE_NAME.is_match(name) {
            Ok(Self::Type)
        } else {
            Err(StubgenError::InvalidName(name.to_string()))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct DummyItem {
    pub name: String,
    pub kind: ObjectKind,
}

/// All the objects requiring one exact combination of backends, rendered as one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DummyModule {
    backends: Vec<Backend>,
    items: Vec<DummyItem>,
}

impl DummyModule {
    pub fn backends(&self) -> &[Backend] {
        &self.backends
    }

    pub fn items(&self) -> &[DummyItem] {
        &self.items
    }

    /// Items with a backend requirement, which end up in the module registry table.
    pub fn entries(&self) -> impl Iterator<Item = &DummyItem> {
        self.items
            .iter()
            .filter(|item| item.kind != ObjectKind::Constant)
    }

    /// Module name, e.g. `dummy_timm_and_vision_objects`.
    pub fn module_name(&self) -> String {
        let backends = self
            .backends
            .iter()
            .map(|backend| backend.name())
            .collect::<Vec<_>>()
            .join("_and_");
        format!("dummy_{backends}_objects")
    }

    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module_name())
    }
}

/// The authoritative list of objects that need optional backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    modules: Vec<DummyModule>,
}

impl Registry {
    pub fn from_path(path: &Path) -> Result<Self, StubgenError> {
        let content = std::fs::read_to_string(path).map_err(|source| StubgenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// One module per backend combination, in order of first appearance. Objects are sorted
    /// by name, ignoring case, so each model family stays together.
    pub fn modules(&self) -> &[DummyModule] {
        &self.modules
    }

    pub fn module(&self, backends: &[Backend]) -> Option<&DummyModule> {
        self.modules
            .iter()
            .find(|module| module.backends == backends)
    }
}

impl std::str::FromStr for Registry {
    type Err = StubgenError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let file: RegistryFile = toml::from_str(content)?;
        let mut modules: Vec<DummyModule> = Vec::new();
        let mut seen = HashSet::new();

        for (group, table) in file.groups.into_iter().enumerate() {
            if table.backends.is_empty() {
                return Err(StubgenError::EmptyBackends { group });
            }

            let mut backends = Vec::with_capacity(table.backends.len());
            for name in table.backends {
                let backend = name
                    .parse::<Backend>()
                    .map_err(|_| StubgenError::UnknownBackend(name.clone()))?;
                if backends.contains(&backend) {
                    return Err(StubgenError::DuplicateBackend {
                        backend: name,
                        group,
                    });
                }
                backends.push(backend);
            }

            let mut items = Vec::with_capacity(table.objects.len());
            for name in table.objects {
                let kind = ObjectKind::classify(&name)?;
                if !seen.insert(name.clone()) {
                    return Err(StubgenError::DuplicateObject(name));
                }
                items.push(DummyItem::new(name, kind));
            }

            match modules.iter_mut().find(|module| module.backends == backends) {
                Some(module) => module.items.extend(items),
                None => modules.push(DummyModule { backends, items }),
            }
        }

        for module in &mut modules {
            module
                .items
                .sort_by(|a, b| sort_key(&a.name).cmp(&sort_key(&b.name)));
        }

        Ok(Self { modules })
    }
}

fn sort_key(name: &str) -> (String, &str) {
    (name.to_lowercase(), name)
}
