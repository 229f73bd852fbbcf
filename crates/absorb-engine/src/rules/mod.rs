//! Variant rules.
//!
//! Move geometry and check are shared by every variant. What a variant
//! decides is what happens to a piece that captures: the [`RuleSet`] trait
//! is that seam, and [`Variant`] picks an implementation by name.

mod absorb;
mod classic;

pub use absorb::AbsorbChess;
pub use classic::ClassicChess;

use absorb_core::PieceKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Capture behavior of a chess variant.
pub trait RuleSet: fmt::Debug + Send + Sync {
    /// Returns the variant's name.
    fn name(&self) -> &'static str;

    /// Returns the kind a piece of kind `mover` has after capturing a piece
    /// of kind `captured`.
    fn capture_result(&self, mover: PieceKind, captured: PieceKind) -> PieceKind;
}

/// The built-in variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Capturing pieces other than kings take the captured piece's kind.
    #[default]
    Absorb,
    /// Capturing pieces keep their kind.
    Classic,
}

impl Variant {
    /// All built-in variants.
    pub const ALL: [Variant; 2] = [Variant::Absorb, Variant::Classic];

    /// Returns the rule set implementing this variant.
    pub fn rules(self) -> &'static dyn RuleSet {
        match self {
            Variant::Absorb => &AbsorbChess,
            Variant::Classic => &ClassicChess,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rules().name())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{0}', expected 'absorb' or 'classic'")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.rules().name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
