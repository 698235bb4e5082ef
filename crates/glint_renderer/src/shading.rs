//! Phong direct lighting with hard shadows.

use glint_core::{Light, Scene};
use glint_math::{reflect, Ray, Vec3};

use crate::hittable::{scene_intersect, Hit};
use crate::RenderConfig;

/// Accumulated light intensities at a surface point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightingTerms {
    /// Lambertian intensity, weighted by the diffuse albedo
    pub diffuse: f32,
    /// Phong highlight intensity, weighted by the specular albedo
    pub specular: f32,
}

impl std::ops::AddAssign for LightingTerms {
    fn add_assign(&mut self, other: Self) {
        self.diffuse += other.diffuse;
        self.specular += other.specular;
    }
}

/// Push `point` off the surface by `bias` along the normal, on the side
/// `direction` leaves towards.
///
/// Keeps secondary rays from re-hitting the surface they start on.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3, bias: f32) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * bias
    } else {
        point + normal * bias
    }
}

/// Contribution of a single light at `hit`, seen along `ray`.
///
/// Returns `None` when something sits between the point and the light.
pub fn light_contribution(
    scene: &Scene,
    ray: &Ray,
    hit: &Hit,
    light: &Light,
    config: &RenderConfig,
) -> Option<LightingTerms> {
    let to_light = light.position - hit.point;
    let light_distance = to_light.length();
    let light_dir = to_light / light_distance;

    let shadow_origin = offset_origin(hit.point, hit.normal, light_dir, config.bias);
    let shadow_ray = Ray::new(shadow_origin, light_dir);
    if let Some(blocker) = scene_intersect(scene, &shadow_ray, config.max_distance) {
        if (blocker.point - shadow_origin).length() < light_distance {
            return None;
        }
    }

    let diffuse = light.intensity * light_dir.dot(hit.normal).max(0.0);
    let highlight = (-reflect(-light_dir, hit.normal).dot(ray.direction)).max(0.0);
    let specular = light.intensity * highlight.powf(hit.material.specular_exponent);

    Some(LightingTerms { diffuse, specular })
}

/// Sum the unoccluded contributions of every light in the scene.
pub fn direct_lighting(
    scene: &Scene,
    ray: &Ray,
    hit: &Hit,
    config: &RenderConfig,
) -> LightingTerms {
    let mut terms = LightingTerms::default();
    for light in &scene.lights {
        if let Some(contribution) = light_contribution(scene, ray, hit, light, config) {
            terms += contribution;
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Albedo, Material, Sphere};

    fn matte() -> Material {
        Material::new(Vec3::new(0.4, 0.4, 0.3), Albedo::new(1.0, 0.0, 0.0), 50.0)
    }

    /// Target sphere facing the camera, plus two lights: one straight ahead
    /// behind the camera and one off to the side.
    fn lit_scene(with_occluder: bool) -> Scene {
        let mut scene = Scene::new("shadow");
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 2.0, matte()));
        if with_occluder {
            scene.add(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, matte()));
        }
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, 10.0), 1.0));
        scene.add_light(Light::new(Vec3::new(10.0, 0.0, 0.0), 0.8));
        scene
    }

    fn primary_hit(scene: &Scene, config: &RenderConfig) -> (Ray, Hit) {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene_intersect(scene, &ray, config.max_distance).unwrap();
        (ray, hit)
    }

    #[test]
    fn test_offset_origin_follows_direction() {
        let p = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(offset_origin(p, Vec3::Y, Vec3::Y, 0.5), Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(offset_origin(p, Vec3::Y, Vec3::NEG_Y, 0.5), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_unoccluded_light_contributes() {
        let config = RenderConfig::default();
        let scene = lit_scene(false);
        let (ray, hit) = primary_hit(&scene, &config);

        let terms = light_contribution(&scene, &ray, &hit, &scene.lights[0], &config).unwrap();
        // Light straight along the normal
        assert!((terms.diffuse - 1.0).abs() < 1e-4);
        assert!(terms.specular > 0.0);
    }

    #[test]
    fn test_occluder_blocks_only_its_light() {
        let config = RenderConfig::default();
        let open = lit_scene(false);
        let blocked = lit_scene(true);

        let (ray, open_hit) = primary_hit(&open, &config);
        let (_, blocked_hit) = primary_hit(&blocked, &config);

        let blocked_light = &blocked.lights[0];
        assert!(light_contribution(&blocked, &ray, &blocked_hit, blocked_light, &config).is_none());

        let side_open =
            light_contribution(&open, &ray, &open_hit, &open.lights[1], &config).unwrap();
        let side_blocked =
            light_contribution(&blocked, &ray, &blocked_hit, &blocked.lights[1], &config).unwrap();
        assert_eq!(side_open, side_blocked);
        assert!(side_open.diffuse > 0.0);

        let total = direct_lighting(&blocked, &ray, &blocked_hit, &config);
        assert_eq!(total, side_blocked);
        assert!(total.diffuse < direct_lighting(&open, &ray, &open_hit, &config).diffuse);
    }

    #[test]
    fn test_light_behind_surface_gives_no_diffuse() {
        let config = RenderConfig::default();
        let mut scene = Scene::new("backlit");
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 2.0, matte()));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, -20.0), 1.0));
        let (ray, hit) = primary_hit(&scene, &config);

        // The sphere itself is in the way
        assert!(light_contribution(&scene, &ray, &hit, &scene.lights[0], &config).is_none());
        assert_eq!(direct_lighting(&scene, &ray, &hit, &config), LightingTerms::default());
    }
}
