use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// An optional backend some model families depend on.
///
/// Every variant maps to the Cargo feature of the same name, and its identifier is the
/// snake_case variant name (`timm`, `vision`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Backend {
    Timm,
    Vision,
    Torch,
    Tokenizers,
    Sentencepiece,
    Scipy,
    Speech,
}

impl Backend {
    /// The identifier of the backend, which is also the name of its Cargo feature.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Short human readable description used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            Backend::Timm => "pretrained image backbones",
            Backend::Vision => "image decoding and processing",
            Backend::Torch => "libtorch tensor runtime",
            Backend::Tokenizers => "fast tokenizers",
            Backend::Sentencepiece => "SentencePiece tokenization",
            Backend::Scipy => "scientific computing routines",
            Backend::Speech => "audio feature extraction",
        }
    }

    /// Whether the backend was enabled when this crate was compiled.
    pub fn is_compiled(self) -> bool {
        match self {
            Backend::Timm => cfg!(feature = "timm"),
            Backend::Vision => cfg!(feature = "vision"),
            Backend::Torch => cfg!(feature = "torch"),
            Backend::Tokenizers => cfg!(feature = "tokenizers"),
            Backend::Sentencepiece => cfg!(feature = "sentencepiece"),
            Backend::Scipy => cfg!(feature = "scipy"),
            Backend::Speech => cfg!(feature = "speech"),
        }
    }
}
