use std::fmt::{self, Display, Formatter};

use modelhub_backends::Backend;

use crate::{DummyModule, ObjectKind, Registry};

pub(crate) const HEADER: &str =
    "// This file is autogenerated by `cargo xtask fix-copies`, do not edit.";

/// "the `timm` backend", "the `timm` and `vision` backends", ...
fn backends_phrase(backends: &[Backend]) -> String {
    let quoted: Vec<String> = backends
        .iter()
        .map(|backend| format!("`{backend}`"))
        .collect();

    match quoted.as_slice() {
        [] => "no backend".to_string(),
        [single] => format!("the {single} backend"),
        [init @ .., last] => format!("the {} and {last} backends", init.join(", ")),
    }
}

fn variants(backends: &[Backend]) -> String {
    backends
        .iter()
        .map(|backend| format!("Backend::{backend:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn identifiers(backends: &[Backend]) -> String {
    backends
        .iter()
        .map(|backend| backend.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The generated index of the placeholder modules: it declares each module, re-exports its
/// objects and collects their registry tables.
#[derive(Clone, Copy, Debug)]
pub struct ModuleIndex<'a> {
    modules: &'a [DummyModule],
}

impl ModuleIndex<'_> {
    pub const FILE_NAME: &'static str = "dummies.rs";
}

impl Registry {
    pub fn index(&self) -> ModuleIndex<'_> {
        ModuleIndex {
            modules: self.modules(),
        }
    }
}

impl Display for ModuleIndex<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(
            f,
            "//! Declares every placeholder module and re-exports its objects."
        )?;
        writeln!(f)?;
        writeln!(f, "use modelhub_backends::RegistryEntry;")?;

        for module in self.modules {
            let module_name = module.module_name();
            writeln!(f)?;
            writeln!(f, "#[path = \"{}\"]", module.file_name())?;
            writeln!(f, "pub mod {module_name};")?;
            if !module.items().is_empty() {
                writeln!(f, "pub use {module_name}::{{")?;
                for item in module.items() {
                    writeln!(f, "    {},", item.name)?;
                }
                writeln!(f, "}};")?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "/// The registry table of every generated placeholder module."
        )?;
        writeln!(
            f,
            "pub(crate) static DUMMY_MODULES: &[&[RegistryEntry]] = &["
        )?;
        for module in self.modules {
            if module.entries().next().is_some() {
                writeln!(f, "    {}::DUMMY_OBJECTS,", module.module_name())?;
            }
        }
        writeln!(f, "];")
    }
}

impl Display for DummyModule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let phrase = backends_phrase(self.backends());
        let has_types = self.items().iter().any(|item| item.kind == ObjectKind::Type);
        let has_functions = self
            .items()
            .iter()
            .any(|item| item.kind == ObjectKind::Function);

        writeln!(f, "{HEADER}")?;
        writeln!(f, "//! Placeholder objects for items that require {phrase}.")?;

        if has_functions {
            writeln!(f)?;
            writeln!(
                f,
                "use modelhub_backends::{{Backend, MissingBackendError, RegistryEntry, requires_backends}};"
            )?;
        } else if has_types {
            writeln!(f)?;
            writeln!(f, "use modelhub_backends::{{Backend, RegistryEntry}};")?;
        }
        if has_types {
            writeln!(f, "use modelhub_macros::DummyObject;")?;
        }

        if has_types || has_functions {
            writeln!(f)?;
            writeln!(
                f,
                "const BACKENDS: &[Backend] = &[{}];",
                variants(self.backends())
            )?;
            writeln!(f)?;
            writeln!(
                f,
                "/// Every placeholder of this module with the backends it requires."
            )?;
            writeln!(f, "pub const DUMMY_OBJECTS: &[RegistryEntry] = &[")?;
            for item in self.entries() {
                writeln!(f, "    RegistryEntry::new(\"{}\", BACKENDS),", item.name)?;
            }
            writeln!(f, "];")?;
        }

        for item in self.items() {
            writeln!(f)?;
            let name = &item.name;
            match item.kind {
                ObjectKind::Constant => {
                    writeln!(f, "pub const {name}: Option<&[&str]> = None;")?;
                }
                ObjectKind::Function => {
                    writeln!(f, "/// Placeholder for `{name}`, which requires {phrase}.")?;
                    writeln!(
                        f,
                        "pub fn {name}<A>(_args: A) -> Result<(), MissingBackendError> {{"
                    )?;
                    writeln!(f, "    requires_backends(\"{name}\", BACKENDS)")?;
                    writeln!(f, "}}")?;
                }
                ObjectKind::Type => {
                    writeln!(f, "/// Placeholder for `{name}`, which requires {phrase}.")?;
                    writeln!(f, "#[derive(Debug, DummyObject)]")?;
                    writeln!(f, "#[backends({})]", identifiers(self.backends()))?;
                    writeln!(f, "pub struct {name} {{")?;
                    writeln!(f, "    _private: (),")?;
                    writeln!(f, "}}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;

    fn render(registry: &str) -> String {
        let registry: Registry = registry.parse().unwrap();
        registry.modules()[0].to_string()
    }

    #[test]
    fn phrases() {
        assert_eq!(backends_phrase(&[Backend::Timm]), "the `timm` backend");
        assert_eq!(
            backends_phrase(&[Backend::Timm, Backend::Vision]),
            "the `timm` and `vision` backends"
        );
        assert_eq!(
            backends_phrase(&[Backend::Torch, Backend::Timm, Backend::Vision]),
            "the `torch`, `timm` and `vision` backends"
        );
    }

    #[test]
    fn renders_every_kind_of_object() {
        let source = render(
            r#"
            [[group]]
            backends = ["torch", "speech"]
            objects = ["SPEECH_PRETRAINED_MODEL_ARCHIVE_LIST", "SpeechModel", "load_speech_weights"]
            "#,
        );

        let expected = r#"// This file is autogenerated by `cargo xtask fix-copies`, do not edit.
//! Placeholder objects for items that require the `torch` and `speech` backends.

use modelhub_backends::{Backend, MissingBackendError, RegistryEntry, requires_backends};
use modelhub_macros::DummyObject;

const BACKENDS: &[Backend] = &[Backend::Torch, Backend::Speech];

/// Every placeholder of this module with the backends it requires.
pub const DUMMY_OBJECTS: &[RegistryEntry] = &[
    RegistryEntry::new("load_speech_weights", BACKENDS),
    RegistryEntry::new("SpeechModel", BACKENDS),
];

/// Placeholder for `load_speech_weights`, which requires the `torch` and `speech` backends.
pub fn load_speech_weights<A>(_args: A) -> Result<(), MissingBackendError> {
    requires_backends("load_speech_weights", BACKENDS)
}

pub const SPEECH_PRETRAINED_MODEL_ARCHIVE_LIST: Option<&[&str]> = None;

/// Placeholder for `SpeechModel`, which requires the `torch` and `speech` backends.
#[derive(Debug, DummyObject)]
#[backends(torch, speech)]
pub struct SpeechModel {
    _private: (),
}
"#;
        assert_eq!(source, expected);
    }

    #[test]
    fn constants_only_module_has_no_imports() {
        let source = render(
            r#"
            [[group]]
            backends = ["scipy"]
            objects = ["SCIPY_TABLE"]
            "#,
        );
        assert!(!source.contains("use "));
        assert!(!source.contains("DUMMY_OBJECTS"));
        assert!(source.ends_with("pub const SCIPY_TABLE: Option<&[&str]> = None;\n"));
    }

    #[test]
    fn index_declares_and_reexports_every_module() {
        let registry: Registry = r#"
            [[group]]
            backends = ["timm", "vision"]
            objects = ["DetrModel", "DETR_PRETRAINED_MODEL_ARCHIVE_LIST"]

            [[group]]
            backends = ["scipy"]
            objects = ["SCIPY_TABLE"]
        "#
        .parse()
        .unwrap();

        let expected = r#"// This file is autogenerated by `cargo xtask fix-copies`, do not edit.
//! Declares every placeholder module and re-exports its objects.

use modelhub_backends::RegistryEntry;

#[path = "dummy_timm_and_vision_objects.rs"]
pub mod dummy_timm_and_vision_objects;
pub use dummy_timm_and_vision_objects::{
    DETR_PRETRAINED_MODEL_ARCHIVE_LIST,
    DetrModel,
};

#[path = "dummy_scipy_objects.rs"]
pub mod dummy_scipy_objects;
pub use dummy_scipy_objects::{
    SCIPY_TABLE,
};

/// The registry table of every generated placeholder module.
pub(crate) static DUMMY_MODULES: &[&[RegistryEntry]] = &[
    dummy_timm_and_vision_objects::DUMMY_OBJECTS,
];
"#;
        assert_eq!(registry.index().to_string(), expected);
    }
}
