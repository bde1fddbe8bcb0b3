// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

/// Colour used for the `All` pseudo-category and for categories we do not know.
pub const NEUTRAL_COLOR: &str = "#7f8c8d";

/// Priority of a farm activity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Priority {
    /// Can wait.
    #[cfg_attr(feature = "clap", value(name = "low"))]
    Low,

    /// Normal priority.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "medium", alias = "mid"))]
    Medium,

    /// Must be done on the planned day.
    #[cfg_attr(feature = "clap", value(name = "high"))]
    High,
}

const PRIORITY_LOW: &str = "Low";
const PRIORITY_MEDIUM: &str = "Medium";
const PRIORITY_HIGH: &str = "High";

impl Priority {
    /// Hex colour used when rendering the priority badge.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Low => "#4CAF50",
            Priority::Medium => "#FF9800",
            Priority::High => "#F44336",
        }
    }
}

impl AsRef<str> for Priority {
    fn as_ref(&self) -> &str {
        match self {
            Priority::Low => PRIORITY_LOW,
            Priority::Medium => PRIORITY_MEDIUM,
            Priority::High => PRIORITY_HIGH,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            PRIORITY_LOW => Ok(Priority::Low),
            PRIORITY_MEDIUM => Ok(Priority::Medium),
            PRIORITY_HIGH => Ok(Priority::High),
            _ => Err(()),
        }
    }
}

/// Category of a farm activity.
///
/// Labels are matched exactly. A label outside the known set is kept verbatim in
/// [`Category::Other`] so it survives a load/save cycle unchanged; it is displayed with the
/// neutral style and is only ever selected by the `All` filter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Planting,
    Harvesting,
    Fertilizing,
    PestControl,
    Irrigation,
    Maintenance,
    Market,
    Meeting,

    /// Unknown or legacy label, preserved as stored.
    Other(String),
}

impl Category {
    /// The fixed set of categories, in display order.
    pub fn known() -> [Category; 8] {
        [
            Category::Planting,
            Category::Harvesting,
            Category::Fertilizing,
            Category::PestControl,
            Category::Irrigation,
            Category::Maintenance,
            Category::Market,
            Category::Meeting,
        ]
    }

    /// The label stored on disk and compared by the category filter.
    pub fn label(&self) -> &str {
        match self {
            Category::Planting => "Planting",
            Category::Harvesting => "Harvesting",
            Category::Fertilizing => "Fertilizing",
            Category::PestControl => "Pest Control",
            Category::Irrigation => "Irrigation",
            Category::Maintenance => "Maintenance",
            Category::Market => "Market",
            Category::Meeting => "Meeting",
            Category::Other(label) => label,
        }
    }

    /// Command-line friendly key, e.g. `pest-control`.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Category::Planting => Some("planting"),
            Category::Harvesting => Some("harvesting"),
            Category::Fertilizing => Some("fertilizing"),
            Category::PestControl => Some("pest-control"),
            Category::Irrigation => Some("irrigation"),
            Category::Maintenance => Some("maintenance"),
            Category::Market => Some("market"),
            Category::Meeting => Some("meeting"),
            Category::Other(_) => None,
        }
    }

    /// Icon name of the category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Planting => "leaf-outline",
            Category::Harvesting => "basket-outline",
            Category::Fertilizing => "water-outline",
            Category::PestControl => "bug-outline",
            Category::Irrigation => "rainy-outline",
            Category::Maintenance => "construct-outline",
            Category::Market => "cart-outline",
            Category::Meeting => "people-outline",
            Category::Other(_) => "apps-outline",
        }
    }

    /// Hex colour of the category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Planting => "#4CAF50",
            Category::Harvesting => "#FF9800",
            Category::Fertilizing => "#2196F3",
            Category::PestControl => "#F44336",
            Category::Irrigation => "#00BCD4",
            Category::Maintenance => "#795548",
            Category::Market => "#9C27B0",
            Category::Meeting => "#607D8B",
            Category::Other(_) => NEUTRAL_COLOR,
        }
    }

    /// Whether the category belongs to the fixed set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exact label conversion, used when reading stored records.
impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::known()
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or(Category::Other(label))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Lenient conversion for user input: accepts a label or a key, ignoring case.
/// Only known categories are accepted.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::known()
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s) || c.key().is_some_and(|k| k == s))
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Category::from)
    }
}
