//! Augments ("aumentos") - the numeric modifiers items and spells carry.

use serde::{Deserialize, Serialize};

use super::stat::StatTarget;

/// Whether an augment is always on or only granted while in combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AugmentKind {
    /// Permanent modifier, active as long as the source is linked.
    #[serde(rename = "fixo")]
    Fixed,
    /// Combat buff, granted on use and drained by damage.
    #[serde(rename = "temporario")]
    Temporary,
}

/// A single modifier entry on an item or spell.
///
/// Records come from free-form card editors, so both the target name and the
/// value are lenient: aggregation skips entries it cannot use instead of
/// failing the whole pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Augment {
    #[serde(rename = "tipo")]
    pub kind: AugmentKind,
    /// Stat or skill name as typed; matched diacritic/case-insensitively.
    #[serde(rename = "nome", default)]
    pub target: String,
    /// `None` when the record carries no usable number; such entries are
    /// skipped by aggregation.
    #[serde(rename = "valor", default, deserialize_with = "lenient_value")]
    pub value: Option<i32>,
}

/// Accept any JSON value in the `valor` slot, keeping only real numbers.
/// Card records come from years of hand-edited exports; a string or null
/// here must degrade to "no contribution", not fail the whole record.
fn lenient_value<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i32>, D::Error> {
    use serde::de::{Error, Visitor};

    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = Option<i32>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number, or any non-numeric value (ignored)")
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(i32::try_from(v).ok())
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(i32::try_from(v).ok())
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v as i32))
        }

        fn visit_str<E: Error>(self, _: &str) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_bool<E: Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: serde::Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientVisitor)
}

impl Augment {
    pub fn fixed(target: impl Into<String>, value: i32) -> Self {
        Self {
            kind: AugmentKind::Fixed,
            target: target.into(),
            value: Some(value),
        }
    }

    pub fn temporary(target: impl Into<String>, value: i32) -> Self {
        Self {
            kind: AugmentKind::Temporary,
            target: target.into(),
            value: Some(value),
        }
    }

    /// Target and value, if the entry is usable; `None` for malformed
    /// entries (empty name or missing value).
    pub fn resolved(&self) -> Option<(StatTarget, i32)> {
        if self.target.trim().is_empty() {
            return None;
        }
        let value = self.value?;
        Some((StatTarget::parse(&self.target), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::stat::StatKey;

    #[test]
    fn well_formed_augment_resolves_to_stat_target() {
        let augment = Augment::fixed("Armadura", 2);
        let (target, value) = augment.resolved().expect("well formed");
        assert!(target.is_stat(StatKey::Armor));
        assert_eq!(value, 2);
    }

    #[test]
    fn empty_name_is_malformed() {
        let augment = Augment {
            kind: AugmentKind::Fixed,
            target: "   ".to_string(),
            value: Some(3),
        };
        assert!(augment.resolved().is_none());
    }

    #[test]
    fn missing_value_is_malformed() {
        let augment = Augment {
            kind: AugmentKind::Temporary,
            target: "vida".to_string(),
            value: None,
        };
        assert!(augment.resolved().is_none());
    }

    #[test]
    fn deserializes_card_editor_shape() {
        let json = r#"{"tipo": "temporario", "nome": "Esquiva", "valor": 4}"#;
        let augment: Augment = serde_json::from_str(json).expect("deserialize");
        assert_eq!(augment.kind, AugmentKind::Temporary);
        assert_eq!(augment.value, Some(4));
    }

    #[test]
    fn deserializes_entry_with_missing_value_field() {
        let json = r#"{"tipo": "fixo", "nome": "Luta"}"#;
        let augment: Augment = serde_json::from_str(json).expect("deserialize");
        assert!(augment.resolved().is_none());
    }

    #[test]
    fn non_numeric_value_degrades_to_no_contribution() {
        let json = r#"{"tipo": "fixo", "nome": "vida", "valor": "cinco"}"#;
        let augment: Augment = serde_json::from_str(json).expect("deserialize");
        assert_eq!(augment.value, None);
        assert!(augment.resolved().is_none());

        let json = r#"{"tipo": "fixo", "nome": "vida", "valor": null}"#;
        let augment: Augment = serde_json::from_str(json).expect("deserialize");
        assert!(augment.resolved().is_none());
    }
}
