// This file is autogenerated by `cargo xtask fix-copies`, do not edit.
//! Declares every placeholder module and re-exports its objects.

use modelhub_backends::RegistryEntry;

#[path = "dummy_timm_and_vision_objects.rs"]
pub mod dummy_timm_and_vision_objects;
pub use dummy_timm_and_vision_objects::{
    DEFORMABLE_DETR_PRETRAINED_MODEL_ARCHIVE_LIST,
    DeformableDetrForObjectDetection,
    DeformableDetrModel,
    DeformableDetrPreTrainedModel,
    DETR_PRETRAINED_MODEL_ARCHIVE_LIST,
    DetrForObjectDetection,
    DetrForSegmentation,
    DetrModel,
    DetrPreTrainedModel,
};

/// The registry table of every generated placeholder module.
pub(crate) static DUMMY_MODULES: &[&[RegistryEntry]] = &[
    dummy_timm_and_vision_objects::DUMMY_OBJECTS,
];
