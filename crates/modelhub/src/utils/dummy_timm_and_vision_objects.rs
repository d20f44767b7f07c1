// This file is autogenerated by `cargo xtask fix-copies`, do not edit.
//! Placeholder objects for items that require the `timm` and `vision` backends.

use modelhub_backends::{Backend, RegistryEntry};
use modelhub_macros::DummyObject;

const BACKENDS: &[Backend] = &[Backend::Timm, Backend::Vision];

/// Every placeholder of this module with the backends it requires.
pub const DUMMY_OBJECTS: &[RegistryEntry] = &[
    RegistryEntry::new("DeformableDetrForObjectDetection", BACKENDS),
    RegistryEntry::new("DeformableDetrModel", BACKENDS),
    RegistryEntry::new("DeformableDetrPreTrainedModel", BACKENDS),
    RegistryEntry::new("DetrForObjectDetection", BACKENDS),
    RegistryEntry::new("DetrForSegmentation", BACKENDS),
    RegistryEntry::new("DetrModel", BACKENDS),
    RegistryEntry::new("DetrPreTrainedModel", BACKENDS),
];

pub const DEFORMABLE_DETR_PRETRAINED_MODEL_ARCHIVE_LIST: Option<&[&str]> = None;

/// Placeholder for `DeformableDetrForObjectDetection`, which requires the `timm` and `vision` backends.
#[derive(Debug, DummyObject)]
#[backends(timm, vision)]
pub struct DeformableDetrForObjectDetection {
    _private: (),
}

/// Placeholder for `DeformableDetrModel`, which requires the `timm` and `vision` backends.
#[derive(Debug, DummyObject)]
#[backends(timm, vision)]
pub struct DeformableDetrModel {
    _private: (),
}

/// Placeholder for `DeformableDetrPreTrainedModel`, which requires the `timm` and `vision` backends.
#[derive(Debug, DummyObject)]
#[backends(timm, vision)]
pub struct DeformableDetrPreTrainedModel {
    _private: (),
}

pub const DETR_PRETRAINED_MODEL_ARCHIVE_LIST: Option<&[&str]> = None;

/// Placeholder for `DetrForObjectDetection`, which requires the `timm` and `vision` backends.
#[derive(Debug, DummyObject)]
#[backends(timm, vision)]
pub struct DetrForObjectDetection {
    _private: (),
}

/// Placeholder for `DetrForSegmentation`, which requires the `timm` and `vision` backends.
#[derive(Debug, DummyObject)]
#[backends(timm, vision)]
pub struct DetrForSegmentation {
    _private: (),
}

/// Placeholder for `DetrModel`, which requires the `timm` and `vision` backends.
#[derive(Debug, DummyObject)]
#[backends(timm, vision)]
pub struct DetrModel {
    _private: (),
}

/// Placeholder for `DetrPreTrainedModel`, which requires the `timm` and `vision` backends.
#[derive(Debug, DummyObject)]
#[backends(timm, vision)]
pub struct DetrPreTrainedModel {
    _private: (),
}
