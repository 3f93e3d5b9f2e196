//! # Lens Materials Database
//!
//! Reference optical properties for the common spectacle lens materials.
//! Values are the standard figures used in opticianry coursework: the
//! refractive index drives curvature (and therefore thickness), the Abbe
//! value indicates chromatic dispersion, and the minimum center thickness
//! is the manufacturing floor used for minus lenses.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::materials::LensMaterial;
//!
//! let mat = LensMaterial::Polycarbonate;
//! let props = mat.properties();
//! assert_eq!(props.refractive_index, 1.586);
//! println!("{}: n = {}", mat.display_name(), props.refractive_index);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{OpticsError, OpticsResult};

/// Spectacle lens materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LensMaterial {
    /// CR-39 hard resin (the plastic baseline)
    #[serde(rename = "CR-39")]
    Cr39,
    /// Crown glass
    #[serde(rename = "CROWN")]
    CrownGlass,
    /// Trivex urethane monomer
    #[serde(rename = "TRIVEX")]
    Trivex,
    /// Polycarbonate
    #[serde(rename = "POLY")]
    Polycarbonate,
    /// High-index plastic, n = 1.60
    #[serde(rename = "HI-160")]
    HighIndex160,
    /// High-index plastic, n = 1.67
    #[serde(rename = "HI-167")]
    HighIndex167,
    /// High-index plastic, n = 1.74
    #[serde(rename = "HI-174")]
    HighIndex174,
}

impl LensMaterial {
    /// All material variants for UI selection
    pub const ALL: [LensMaterial; 7] = [
        LensMaterial::Cr39,
        LensMaterial::CrownGlass,
        LensMaterial::Trivex,
        LensMaterial::Polycarbonate,
        LensMaterial::HighIndex160,
        LensMaterial::HighIndex167,
        LensMaterial::HighIndex174,
    ];

    /// Get the short code string (e.g., "CR-39", "POLY")
    pub fn code(&self) -> &'static str {
        match self {
            LensMaterial::Cr39 => "CR-39",
            LensMaterial::CrownGlass => "CROWN",
            LensMaterial::Trivex => "TRIVEX",
            LensMaterial::Polycarbonate => "POLY",
            LensMaterial::HighIndex160 => "HI-160",
            LensMaterial::HighIndex167 => "HI-167",
            LensMaterial::HighIndex174 => "HI-174",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> OpticsResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "CR-39" | "CR39" | "HARD-RESIN" | "PLASTIC" => Ok(LensMaterial::Cr39),
            "CROWN" | "CROWN-GLASS" | "GLASS" => Ok(LensMaterial::CrownGlass),
            "TRIVEX" => Ok(LensMaterial::Trivex),
            "POLY" | "POLYCARBONATE" | "PC" => Ok(LensMaterial::Polycarbonate),
            "HI-160" | "1.60" | "160" => Ok(LensMaterial::HighIndex160),
            "HI-167" | "1.67" | "167" => Ok(LensMaterial::HighIndex167),
            "HI-174" | "1.74" | "174" => Ok(LensMaterial::HighIndex174),
            _ => Err(OpticsError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LensMaterial::Cr39 => "CR-39 Hard Resin",
            LensMaterial::CrownGlass => "Crown Glass",
            LensMaterial::Trivex => "Trivex",
            LensMaterial::Polycarbonate => "Polycarbonate",
            LensMaterial::HighIndex160 => "High-Index 1.60",
            LensMaterial::HighIndex167 => "High-Index 1.67",
            LensMaterial::HighIndex174 => "High-Index 1.74",
        }
    }

    /// Get the reference properties for this material
    pub fn properties(&self) -> MaterialProperties {
        MaterialProperties::lookup(*self)
    }
}

impl std::fmt::Display for LensMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reference optical properties for a lens material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Material
    pub material: LensMaterial,
    /// Refractive index n (helium d-line)
    pub refractive_index: f64,
    /// Abbe value (dispersion; higher is less chromatic aberration)
    pub abbe_value: f64,
    /// Minimum center thickness for minus lenses (mm)
    pub min_center_thickness_mm: f64,
}

impl MaterialProperties {
    /// Look up properties by material.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optics_core::materials::{LensMaterial, MaterialProperties};
    ///
    /// let props = MaterialProperties::lookup(LensMaterial::Cr39);
    /// assert_eq!(props.refractive_index, 1.498);
    /// ```
    pub fn lookup(material: LensMaterial) -> Self {
        let (refractive_index, abbe_value, min_center_thickness_mm) = match material {
            LensMaterial::Cr39 => (1.498, 58.0, 2.0),
            LensMaterial::CrownGlass => (1.523, 59.0, 2.0),
            LensMaterial::Trivex => (1.532, 44.0, 1.0),
            LensMaterial::Polycarbonate => (1.586, 30.0, 1.0),
            LensMaterial::HighIndex160 => (1.60, 36.0, 1.5),
            LensMaterial::HighIndex167 => (1.67, 32.0, 1.5),
            LensMaterial::HighIndex174 => (1.74, 33.0, 1.5),
        };
        MaterialProperties {
            material,
            refractive_index,
            abbe_value,
            min_center_thickness_mm,
        }
    }
}
