//! Furniture catalog: read-only templates, icon resolution and per-kind
//! sizing/rotation constraints.
//!
//! Templates carry their icon as a string key. Keys are resolved to
//! [`IconKey`] once, when the catalog is built; an unrecognized key becomes
//! [`IconKey::Unknown`] and is logged a single time, no matter how many
//! templates or renders reference it.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::DEFAULT_MIN_DIMENSION;
use crate::error::EditorError;
use crate::model::{Placement, TemplateId};

// =============================================================================
// CATEGORIES AND ICONS
// =============================================================================

/// Library tab a template is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureCategory {
    Seating,
    Structural,
    Decor,
    Service,
    Equipment,
}

impl FurnitureCategory {
    /// All categories in library tab order.
    pub const ALL: [Self; 5] = [Self::Seating, Self::Structural, Self::Decor, Self::Service, Self::Equipment];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Seating => "Seating",
            Self::Structural => "Structural",
            Self::Decor => "Decor",
            Self::Service => "Service",
            Self::Equipment => "Equipment",
        }
    }
}

/// Every icon the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Chair,
    Stool,
    Sofa,
    Booth,
    Wall,
    Door,
    Window,
    Pillar,
    Stairs,
    Plant,
    Lamp,
    Artwork,
    HostStand,
    BarCounter,
    ServiceStation,
    Register,
    Refrigerator,
    Oven,
    Unknown,
}

impl IconKey {
    /// Resolve a template's icon string. Returns `None` for unknown keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let icon = match key {
            "chair" => Self::Chair,
            "stool" => Self::Stool,
            "sofa" => Self::Sofa,
            "booth" => Self::Booth,
            "wall" => Self::Wall,
            "door" => Self::Door,
            "window" => Self::Window,
            "pillar" => Self::Pillar,
            "stairs" => Self::Stairs,
            "plant" => Self::Plant,
            "lamp" => Self::Lamp,
            "artwork" => Self::Artwork,
            "host_stand" => Self::HostStand,
            "bar_counter" => Self::BarCounter,
            "service_station" => Self::ServiceStation,
            "register" => Self::Register,
            "refrigerator" => Self::Refrigerator,
            "oven" => Self::Oven,
            _ => return None,
        };
        Some(icon)
    }

    /// Glyph drawn at the center of the placement.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Chair => "🪑",
            Self::Stool => "⊙",
            Self::Sofa => "🛋",
            Self::Booth => "⊓",
            Self::Wall => "▬",
            Self::Door => "🚪",
            Self::Window => "⊞",
            Self::Pillar => "■",
            Self::Stairs => "☰",
            Self::Plant => "🪴",
            Self::Lamp => "💡",
            Self::Artwork => "🖼",
            Self::HostStand => "⌂",
            Self::BarCounter => "🍸",
            Self::ServiceStation => "🛎",
            Self::Register => "💳",
            Self::Refrigerator => "❄",
            Self::Oven => "🔥",
            Self::Unknown => "?",
        }
    }
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// A catalog entry from which furniture placements are instantiated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureTemplate {
    pub id: TemplateId,
    pub name: String,
    /// Icon key, resolved through [`IconKey::parse`].
    pub icon: String,
    pub category: FurnitureCategory,
    pub is_resizable: bool,
    pub is_rotatable: bool,
    pub default_width: f64,
    pub default_height: f64,
    #[serde(default)]
    pub min_width: Option<f64>,
    #[serde(default)]
    pub min_height: Option<f64>,
    #[serde(default)]
    pub max_width: Option<f64>,
    #[serde(default)]
    pub max_height: Option<f64>,
    /// Seats this piece provides, if it is seating.
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl FurnitureTemplate {
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints {
            resizable: self.is_resizable,
            rotatable: self.is_rotatable,
            min_width: self.min_width.unwrap_or(DEFAULT_MIN_DIMENSION),
            min_height: self.min_height.unwrap_or(DEFAULT_MIN_DIMENSION),
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }
}

/// Interaction limits consulted by the shared placement controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub resizable: bool,
    pub rotatable: bool,
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
}

impl Constraints {
    /// Tables resize and rotate freely above the default minimum.
    #[must_use]
    pub fn table() -> Self {
        Self {
            resizable: true,
            rotatable: true,
            min_width: DEFAULT_MIN_DIMENSION,
            min_height: DEFAULT_MIN_DIMENSION,
            max_width: None,
            max_height: None,
        }
    }

    /// Zones resize but never rotate.
    #[must_use]
    pub fn zone() -> Self {
        Self { rotatable: false, ..Self::table() }
    }

    /// Fallback for a furniture placement whose template is missing.
    #[must_use]
    pub fn fixed() -> Self {
        Self { resizable: false, rotatable: false, ..Self::table() }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// The read-only template catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<FurnitureTemplate>,
    icons: HashMap<TemplateId, IconKey>,
}

impl Catalog {
    /// Build a catalog, resolving every template's icon key once.
    #[must_use]
    pub fn new(templates: Vec<FurnitureTemplate>) -> Self {
        let mut warned: HashSet<&str> = HashSet::new();
        let mut icons = HashMap::with_capacity(templates.len());
        for template in &templates {
            let icon = IconKey::parse(&template.icon).unwrap_or_else(|| {
                if warned.insert(template.icon.as_str()) {
                    warn!(icon = %template.icon, template = %template.id, "unknown furniture icon; using fallback glyph");
                }
                IconKey::Unknown
            });
            icons.insert(template.id.clone(), icon);
        }
        Self { templates, icons }
    }

    /// Parse a JSON array of templates.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCatalog`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let templates: Vec<FurnitureTemplate> =
            serde_json::from_str(json).map_err(|e| EditorError::InvalidCatalog(e.to_string()))?;
        Ok(Self::new(templates))
    }

    /// The catalog shipped with the editor.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FurnitureTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Resolved icon for a template id; `Unknown` when the template is missing.
    #[must_use]
    pub fn icon_for(&self, id: &str) -> IconKey {
        self.icons.get(id).copied().unwrap_or(IconKey::Unknown)
    }

    /// Templates listed under `category`, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: FurnitureCategory) -> Vec<&FurnitureTemplate> {
        self.templates.iter().filter(|t| t.category == category).collect()
    }

    #[must_use]
    pub fn templates(&self) -> &[FurnitureTemplate] {
        &self.templates
    }

    /// Constraints for any placement kind.
    #[must_use]
    pub fn constraints_for(&self, placement: &Placement) -> Constraints {
        match placement {
            Placement::Table(_) => Constraints::table(),
            Placement::Zone(_) => Constraints::zone(),
            Placement::Furniture(f) => self
                .get(&f.furniture_template_id)
                .map_or_else(Constraints::fixed, FurnitureTemplate::constraints),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    icon: &str,
    category: FurnitureCategory,
    size: (f64, f64),
    resizable: bool,
    rotatable: bool,
    capacity: Option<u32>,
) -> FurnitureTemplate {
    FurnitureTemplate {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        category,
        is_resizable: resizable,
        is_rotatable: rotatable,
        default_width: size.0,
        default_height: size.1,
        min_width: None,
        min_height: None,
        max_width: None,
        max_height: None,
        capacity,
    }
}

fn builtin_templates() -> Vec<FurnitureTemplate> {
    use FurnitureCategory::{Decor, Equipment, Seating, Service, Structural};

    vec![
        template("chair", "Chair", "chair", Seating, (50.0, 50.0), false, true, Some(1)),
        template("bar-stool", "Bar Stool", "stool", Seating, (50.0, 50.0), false, false, Some(1)),
        template("sofa", "Sofa", "sofa", Seating, (160.0, 70.0), true, true, Some(3)),
        template("booth", "Booth", "booth", Seating, (150.0, 80.0), true, true, Some(4)),
        FurnitureTemplate {
            min_width: Some(20.0),
            min_height: Some(10.0),
            max_height: Some(40.0),
            ..template("wall", "Wall", "wall", Structural, (200.0, 20.0), true, true, None)
        },
        template("door", "Door", "door", Structural, (80.0, 50.0), false, true, None),
        template("window", "Window", "window", Structural, (100.0, 50.0), true, true, None),
        FurnitureTemplate {
            max_width: Some(120.0),
            max_height: Some(120.0),
            ..template("pillar", "Pillar", "pillar", Structural, (50.0, 50.0), true, false, None)
        },
        template("stairs", "Stairs", "stairs", Structural, (120.0, 200.0), true, true, None),
        template("plant", "Plant", "plant", Decor, (50.0, 50.0), false, false, None),
        template("lamp", "Floor Lamp", "lamp", Decor, (50.0, 50.0), false, false, None),
        template("artwork", "Artwork", "artwork", Decor, (100.0, 50.0), true, true, None),
        template("host-stand", "Host Stand", "host_stand", Service, (80.0, 60.0), false, true, None),
        FurnitureTemplate {
            max_height: Some(120.0),
            ..template("bar-counter", "Bar Counter", "bar_counter", Service, (300.0, 70.0), true, true, None)
        },
        template("service-station", "Service Station", "service_station", Service, (100.0, 60.0), true, true, None),
        template("register", "Register", "register", Service, (60.0, 50.0), false, true, None),
        template("refrigerator", "Refrigerator", "refrigerator", Equipment, (80.0, 80.0), false, true, None),
        template("oven", "Oven", "oven", Equipment, (100.0, 80.0), false, true, None),
    ]
}
