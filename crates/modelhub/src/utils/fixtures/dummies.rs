// This file is autogenerated by `cargo xtask fix-copies`, do not edit.
//! Declares every placeholder module and re-exports its objects.

use modelhub_backends::RegistryEntry;

#[path = "dummy_torch_and_speech_objects.rs"]
pub mod dummy_torch_and_speech_objects;
pub use dummy_torch_and_speech_objects::{
    load_speech_weights,
    SPEECH_PRETRAINED_MODEL_ARCHIVE_LIST,
    SpeechModel,
};

/// The registry table of every generated placeholder module.
pub(crate) static DUMMY_MODULES: &[&[RegistryEntry]] = &[
    dummy_torch_and_speech_objects::DUMMY_OBJECTS,
];
