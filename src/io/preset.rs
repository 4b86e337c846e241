//! ROM extraction presets
//!
//! A preset bundles everything needed to pull one tile sheet out of a ROM:
//! where the tiles and palette live (both in ROM address space and in the
//! unpacked file), how they are compressed, and which layout pattern arranges
//! them. The pattern is referenced by name and resolved through a
//! [`PatternCatalog`](crate::io::catalog::PatternCatalog) by the caller.

use std::fs;
use std::path::Path;

use crate::io::error::{Result, file_system_error};
use crate::pattern::resource::Resource;

/// Section holding preset keys in a resource file
const PRESET_SECTION: &str = "preset";

/// Named bundle of tile sheet extraction metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePreset {
    /// Preset name
    pub name: String,
    /// Name of the ROM this preset targets
    pub rom_name: String,
    /// ROM type tag (e.g. `LoROM`, `HiROM`)
    pub rom_type: String,
    /// Name of the layout pattern to arrange the tiles with
    pub pattern: String,
    /// Tile data location in ROM address space
    pub rom_tiles_location: u64,
    /// Tile data location in the unpacked file, negative when unmapped
    pub pc_tiles_location: i64,
    /// Palette location in ROM address space
    pub rom_palette_location: u64,
    /// Palette location in the unpacked file
    pub pc_palette_location: u64,
    /// Whether palette entry zero is skipped when rendering
    pub palette_no_zero_color: bool,
    /// Length of the tile data in bytes
    pub length: u64,
    /// Bits per pixel of the stored tiles
    pub bpp: u64,
    /// Compression scheme tag, `none` for raw data
    pub compression: String,
}

impl Default for TilePreset {
    fn default() -> Self {
        Self {
            name: String::new(),
            rom_name: String::new(),
            rom_type: String::new(),
            pattern: String::new(),
            rom_tiles_location: 0,
            pc_tiles_location: 0,
            rom_palette_location: 0,
            pc_palette_location: 0,
            palette_no_zero_color: false,
            length: 0,
            bpp: 4,
            compression: "none".to_string(),
        }
    }
}

impl TilePreset {
    /// Load a preset from a resource file
    ///
    /// Missing keys keep their defaults, so older preset files load fine.
    ///
    /// # Errors
    ///
    /// - `FileSystem` if the file cannot be read
    /// - `InvalidParameter` if a numeric or boolean key fails to parse
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).map_err(|err| file_system_error(path, "read preset", err))?;
        Self::from_resource_text(&text)
    }

    /// Parse a preset from resource text
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a numeric or boolean key fails to parse
    pub fn from_resource_text(text: &str) -> Result<Self> {
        let resource = Resource::parse(text);
        let defaults = Self::default();

        let get_string = |key: &str, fallback: &str| {
            resource
                .get(PRESET_SECTION, key)
                .unwrap_or(fallback)
                .to_string()
        };

        Ok(Self {
            name: get_string("name", &defaults.name),
            rom_name: get_string("rom_name", &defaults.rom_name),
            rom_type: get_string("rom_type", &defaults.rom_type),
            pattern: get_string("pattern", &defaults.pattern),
            rom_tiles_location: resource
                .get_integer(PRESET_SECTION, "rom_tiles_location")?
                .map_or(defaults.rom_tiles_location, |v| v as u64),
            pc_tiles_location: resource
                .get_signed(PRESET_SECTION, "pc_tiles_location")?
                .unwrap_or(defaults.pc_tiles_location),
            rom_palette_location: resource
                .get_integer(PRESET_SECTION, "rom_palette_location")?
                .map_or(defaults.rom_palette_location, |v| v as u64),
            pc_palette_location: resource
                .get_integer(PRESET_SECTION, "pc_palette_location")?
                .map_or(defaults.pc_palette_location, |v| v as u64),
            palette_no_zero_color: resource
                .get_flag(PRESET_SECTION, "palette_no_zero_color")?
                .unwrap_or(defaults.palette_no_zero_color),
            length: resource
                .get_integer(PRESET_SECTION, "length")?
                .map_or(defaults.length, |v| v as u64),
            bpp: resource
                .get_integer(PRESET_SECTION, "bpp")?
                .map_or(defaults.bpp, |v| v as u64),
            compression: get_string("compression", &defaults.compression),
        })
    }

    /// Save the preset to a resource file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_resource_text())
            .map_err(|err| file_system_error(path, "write preset", err))
    }

    /// Render the preset as resource text
    pub fn to_resource_text(&self) -> String {
        let mut resource = Resource::new();
        resource.set(PRESET_SECTION, "name", &self.name);
        resource.set(PRESET_SECTION, "rom_name", &self.rom_name);
        resource.set(PRESET_SECTION, "rom_type", &self.rom_type);
        resource.set(PRESET_SECTION, "pattern", &self.pattern);
        resource.set(
            PRESET_SECTION,
            "rom_tiles_location",
            self.rom_tiles_location.to_string(),
        );
        resource.set(
            PRESET_SECTION,
            "pc_tiles_location",
            self.pc_tiles_location.to_string(),
        );
        resource.set(
            PRESET_SECTION,
            "rom_palette_location",
            self.rom_palette_location.to_string(),
        );
        resource.set(
            PRESET_SECTION,
            "pc_palette_location",
            self.pc_palette_location.to_string(),
        );
        resource.set(
            PRESET_SECTION,
            "palette_no_zero_color",
            self.palette_no_zero_color.to_string(),
        );
        resource.set(PRESET_SECTION, "length", self.length.to_string());
        resource.set(PRESET_SECTION, "bpp", self.bpp.to_string());
        resource.set(PRESET_SECTION, "compression", &self.compression);
        resource.render()
    }
}
