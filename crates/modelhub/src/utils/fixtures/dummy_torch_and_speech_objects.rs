// This file is autogenerated by `cargo xtask fix-copies`, do not edit.
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
