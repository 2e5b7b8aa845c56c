//! Material definitions and registry for arena geometry.

use bevy::prelude::*;
use std::collections::HashMap;

use super::tags::SurfaceTag;

/// Material registry mapping material names to handles.
pub struct MaterialRegistry {
    materials: HashMap<String, Handle<StandardMaterial>>,
}

impl MaterialRegistry {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        let mut registry = HashMap::new();

        // Ground material (default for Ground blocks) - muted green-grey
        registry.insert(
            "ground".to_string(),
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.30, 0.34, 0.28),
                perceptual_roughness: 0.95,
                ..default()
            }),
        );

        // Wall material (default for Wall blocks) - desaturated grey-brown
        registry.insert(
            "wall".to_string(),
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.32, 0.30, 0.28),
                perceptual_roughness: 0.8,
                ..default()
            }),
        );

        // Stone material - light grey so platforms stand out from the floor
        registry.insert(
            "stone".to_string(),
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.48, 0.47, 0.45),
                perceptual_roughness: 0.9,
                ..default()
            }),
        );

        // Wood material (default for Prop blocks) - muted brown
        registry.insert(
            "wood".to_string(),
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.45, 0.34, 0.22),
                perceptual_roughness: 0.7,
                ..default()
            }),
        );

        // Metal material - desaturated grey
        registry.insert(
            "metal".to_string(),
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.42, 0.42, 0.44),
                perceptual_roughness: 0.3,
                metallic: 0.8,
                ..default()
            }),
        );

        Self { materials: registry }
    }

    /// Default material name for a surface kind.
    fn default_for(tag: SurfaceTag) -> &'static str {
        match tag {
            SurfaceTag::Ground => "ground",
            SurfaceTag::Wall => "wall",
            SurfaceTag::Prop => "wood",
        }
    }

    /// Get material by name, falling back to the tag's default.
    pub fn get(&self, material_name: Option<&str>, tag: SurfaceTag) -> Handle<StandardMaterial> {
        let fallback = Self::default_for(tag);
        match material_name.and_then(|name| self.materials.get(name)) {
            Some(handle) => handle.clone(),
            None => {
                if let Some(name) = material_name {
                    warn!("Unknown material '{}', using '{}'", name, fallback);
                }
                self.materials[fallback].clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_material_falls_back_to_tag_default() {
        let mut assets = Assets::<StandardMaterial>::default();
        let registry = MaterialRegistry::new(&mut assets);

        assert_eq!(
            registry.get(Some("marble"), SurfaceTag::Wall),
            registry.get(None, SurfaceTag::Wall)
        );
        assert_eq!(
            registry.get(Some("stone"), SurfaceTag::Ground),
            registry.get(Some("stone"), SurfaceTag::Prop)
        );
        assert_ne!(
            registry.get(None, SurfaceTag::Ground),
            registry.get(None, SurfaceTag::Prop)
        );
    }
}
