//! Scene description loading.
//!
//! A scene is described in JSON as a shutter window, a material table and a
//! list of objects. Objects refer to materials by index, and each material is
//! built exactly once, so every object using it shares the same handle.
//!
//! ```json
//! {
//!   "shutter": [0.0, 1.0],
//!   "materials": [{ "type": "lambertian", "albedo": [0.5, 0.5, 0.5] }],
//!   "objects": [
//!     { "type": "sphere", "center": [0.0, -100.5, -1.0], "radius": 100.0, "material": 0 },
//!     { "type": "moving_sphere", "center_start": [0.0, 0.0, -1.0],
//!       "center_end": [0.0, 0.5, -1.0], "radius": 0.5, "material": 0 }
//!   ]
//! }
//! ```

use std::sync::Arc;

use blur_math::{GeometryError, Interval, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BvhNode, Hittable, HittableList, Lambertian, MaterialRef, MovingSphere, Sphere};

/// Errors that can occur while loading or building a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid shutter: {0}")]
    Shutter(GeometryError),

    #[error("Invalid geometry in object {index}: {source}")]
    Geometry {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("Object {object} references unknown material {material}")]
    UnknownMaterial { object: usize, material: usize },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

fn default_shutter() -> [f32; 2] {
    [0.0, 1.0]
}

/// Top-level scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    /// Time window rays are traced over; BVH boxes cover all of it
    #[serde(default = "default_shutter")]
    pub shutter: [f32; 2],

    #[serde(default)]
    pub materials: Vec<MaterialDesc>,

    #[serde(default)]
    pub objects: Vec<ObjectDesc>,
}

/// A material table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDesc {
    Lambertian { albedo: Vec3 },
}

/// An object entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDesc {
    Sphere {
        center: Vec3,
        radius: f32,
        material: usize,
    },
    MovingSphere {
        center_start: Vec3,
        center_end: Vec3,
        radius: f32,
        /// Motion window; the scene shutter when omitted
        #[serde(default)]
        motion: Option<[f32; 2]>,
        material: usize,
    },
}

impl Default for SceneDesc {
    fn default() -> Self {
        Self {
            shutter: default_shutter(),
            materials: Vec::new(),
            objects: Vec::new(),
        }
    }
}

impl SceneDesc {
    /// Parse a scene description from JSON text.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the description back to pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The validated shutter window.
    pub fn shutter(&self) -> SceneResult<Interval> {
        Interval::try_new(self.shutter[0], self.shutter[1]).map_err(SceneError::Shutter)
    }

    /// Build every object into a flat list.
    pub fn build_list(&self) -> SceneResult<HittableList> {
        let shutter = self.shutter()?;
        let materials: Vec<MaterialRef> = self.materials.iter().map(MaterialDesc::build).collect();

        let mut list = HittableList::new();
        for (index, object) in self.objects.iter().enumerate() {
            list.add(object.build(index, shutter, &materials)?);
        }

        log::debug!(
            "Built {} objects sharing {} materials",
            list.len(),
            materials.len()
        );
        Ok(list)
    }

    /// Build the scene into a BVH covering the shutter window.
    pub fn build(&self) -> SceneResult<BvhNode> {
        let shutter = self.shutter()?;
        let list = self.build_list()?;
        Ok(BvhNode::new(list.into_objects(), shutter.min, shutter.max))
    }
}

impl MaterialDesc {
    fn build(&self) -> MaterialRef {
        match self {
            MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(*albedo)),
        }
    }
}

impl ObjectDesc {
    fn material_index(&self) -> usize {
        match self {
            ObjectDesc::Sphere { material, .. } | ObjectDesc::MovingSphere { material, .. } => {
                *material
            }
        }
    }

    fn build(
        &self,
        index: usize,
        shutter: Interval,
        materials: &[MaterialRef],
    ) -> SceneResult<Box<dyn Hittable>> {
        let material_index = self.material_index();
        let material = materials
            .get(material_index)
            .cloned()
            .ok_or(SceneError::UnknownMaterial {
                object: index,
                material: material_index,
            })?;
        let geometry = |source| SceneError::Geometry { index, source };

        let object: Box<dyn Hittable> = match self {
            ObjectDesc::Sphere { center, radius, .. } => {
                Box::new(Sphere::new(*center, *radius, material).map_err(geometry)?)
            }
            ObjectDesc::MovingSphere {
                center_start,
                center_end,
                radius,
                motion,
                ..
            } => {
                let motion = match motion {
                    Some([t0, t1]) => Interval::new(*t0, *t1),
                    None => shutter,
                };
                Box::new(
                    MovingSphere::new(*center_start, *center_end, *radius, motion, material)
                        .map_err(geometry)?,
                )
            }
        };
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ray;

    const SCENE: &str = r#"{
        "shutter": [0.0, 1.0],
        "materials": [
            { "type": "lambertian", "albedo": [0.8, 0.8, 0.0] },
            { "type": "lambertian", "albedo": [0.1, 0.2, 0.5] }
        ],
        "objects": [
            { "type": "sphere", "center": [0.0, -100.5, -1.0], "radius": 100.0, "material": 0 },
            { "type": "moving_sphere", "center_start": [0.0, 0.0, -1.0],
              "center_end": [0.0, 0.0, -1.0], "radius": 0.5, "material": 1 },
            { "type": "moving_sphere", "center_start": [2.0, 0.0, -1.0],
              "center_end": [2.0, 0.5, -1.0], "radius": 0.25,
              "motion": [0.25, 0.75], "material": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let _ = env_logger::builder().is_test(true).try_init();

        let desc = SceneDesc::from_json(SCENE).unwrap();
        assert_eq!(desc.shutter, [0.0, 1.0]);
        assert_eq!(desc.materials.len(), 2);
        assert_eq!(desc.objects.len(), 3);
        assert_eq!(
            desc.objects[2],
            ObjectDesc::MovingSphere {
                center_start: Vec3::new(2.0, 0.0, -1.0),
                center_end: Vec3::new(2.0, 0.5, -1.0),
                radius: 0.25,
                motion: Some([0.25, 0.75]),
                material: 1,
            }
        );
    }

    #[test]
    fn test_build_and_hit() {
        let _ = env_logger::builder().is_test(true).try_init();

        let world = SceneDesc::from_json(SCENE).unwrap().build().unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.5).unwrap();

        let rec = world.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-5);
        assert_eq!(rec.material.albedo(), Vec3::new(0.1, 0.2, 0.5));
    }

    #[test]
    fn test_materials_are_shared() {
        let list = SceneDesc::from_json(SCENE).unwrap().build_list().unwrap();
        let ray_a = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let ray_b = Ray::new(Vec3::new(2.0, 0.5, 0.0), Vec3::new(0.0, 0.0, -1.0), 1.0).unwrap();
        let range = Interval::new(0.001, f32::INFINITY);

        let a = list.hit(&ray_a, range).unwrap();
        let b = list.hit(&ray_b, range).unwrap();

        // Both objects use material 1 and point at the same allocation
        assert!(std::ptr::eq(
            a.material as *const _ as *const u8,
            b.material as *const _ as *const u8
        ));
    }

    #[test]
    fn test_motion_defaults_to_shutter() {
        let json = r#"{
            "shutter": [2.0, 4.0],
            "materials": [{ "type": "lambertian", "albedo": [1.0, 1.0, 1.0] }],
            "objects": [
                { "type": "moving_sphere", "center_start": [0.0, 0.0, -2.0],
                  "center_end": [4.0, 0.0, -2.0], "radius": 0.5, "material": 0 }
            ]
        }"#;
        let world = SceneDesc::from_json(json).unwrap().build().unwrap();
        let range = Interval::new(0.001, f32::INFINITY);

        // Halfway through the shutter the sphere is at x = 2
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), 3.0).unwrap();
        assert!(world.hit(&ray, range).is_some());

        let bbox = world.bounding_box(2.0, 4.0);
        assert_eq!(bbox.x, Interval::new(-0.5, 4.5));
    }

    #[test]
    fn test_defaults() {
        let desc = SceneDesc::from_json("{}").unwrap();
        assert_eq!(desc, SceneDesc::default());
        assert!(matches!(desc.build().unwrap(), BvhNode::Empty));
    }

    #[test]
    fn test_round_trip_json() {
        let desc = SceneDesc::from_json(SCENE).unwrap();
        let again = SceneDesc::from_json(&desc.to_json().unwrap()).unwrap();
        assert_eq!(desc, again);
    }

    #[test]
    fn test_unknown_material() {
        let json = r#"{
            "objects": [{ "type": "sphere", "center": [0.0, 0.0, 0.0], "radius": 1.0, "material": 3 }]
        }"#;
        let err = SceneDesc::from_json(json).unwrap().build().unwrap_err();

        assert!(matches!(
            err,
            SceneError::UnknownMaterial {
                object: 0,
                material: 3
            }
        ));
    }

    #[test]
    fn test_invalid_geometry() {
        let json = r#"{
            "materials": [{ "type": "lambertian", "albedo": [1.0, 1.0, 1.0] }],
            "objects": [
                { "type": "sphere", "center": [0.0, 0.0, 0.0], "radius": 1.0, "material": 0 },
                { "type": "moving_sphere", "center_start": [0.0, 0.0, 0.0],
                  "center_end": [1.0, 0.0, 0.0], "radius": 1.0,
                  "motion": [1.0, 0.0], "material": 0 }
            ]
        }"#;
        let err = SceneDesc::from_json(json).unwrap().build().unwrap_err();

        assert!(matches!(
            err,
            SceneError::Geometry {
                index: 1,
                source: GeometryError::InvertedInterval { .. }
            }
        ));
    }

    #[test]
    fn test_invalid_shutter_and_json() {
        let err = SceneDesc::from_json(r#"{ "shutter": [1.0, 0.0] }"#)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::Shutter(_)));

        let err = SceneDesc::from_json(r#"{ "objects": [{ "type": "cube" }] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }
}
