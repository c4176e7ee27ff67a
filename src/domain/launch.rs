use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A payload mass in kilograms.
///
/// Wraps `rust_decimal::Decimal` so that range bounds compare exactly. Values are
/// normalized on construction, which makes `500.0` and `500` equal and print the same.
/// Serialized as a number: whole masses as integers, fractional ones as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Kilograms(Decimal);

impl Kilograms {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Kilograms {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl FromStr for Kilograms {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self::new)
    }
}

impl<'de> Deserialize<'de> for Kilograms {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

impl Serialize for Kilograms {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract().is_zero()
            && let Some(whole) = self.0.to_i64()
        {
            return serializer.serialize_i64(whole);
        }
        match self.0.to_f64() {
            Some(mass) => serializer.serialize_f64(mass),
            None => Err(serde::ser::Error::custom(format!(
                "payload mass {} is not representable as a number",
                self.0
            ))),
        }
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Launch outcome, stored in the source data as the `class` column (1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Self::Success),
            0 => Some(Self::Failure),
            _ => None,
        }
    }

    pub fn class(&self) -> u8 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.class())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let class = u8::deserialize(deserializer)?;
        Self::from_class(class).ok_or_else(|| {
            serde::de::Error::custom(format!("class must be 0 or 1, got {class}"))
        })
    }
}

/// One row of the launch dataset.
///
/// Field names follow the column headers of the source CSV; any other columns
/// present in the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: Kilograms,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: impl Into<Kilograms>,
        booster_version_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg: payload_mass_kg.into(),
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}
