//! Ray-sphere intersection.

use glint_core::Sphere;
use glint_math::Ray;

/// Distance along `ray` to the nearest visible point of `sphere`.
///
/// Uses the geometric test: project the center onto the ray and compare the
/// squared distance to the squared radius. When the near root lies behind the
/// origin (the origin is inside the sphere) the far root is used instead.
/// `ray.direction` must be unit length.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let l = sphere.center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;

    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;

    let t = if t0 < 0.0 { t1 } else { t0 };
    if t < 0.0 {
        return None;
    }
    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Material;
    use glint_math::Vec3;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::ivory())
    }

    #[test]
    fn test_sphere_hit() {
        let s = sphere(Vec3::new(0.0, 0.0, -5.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = intersect_sphere(&ray, &s).unwrap();
        assert!((t - 3.0).abs() < 1e-5); // Should hit at t=3
    }

    #[test]
    fn test_sphere_hit_towards_center_from_anywhere() {
        let s = sphere(Vec3::new(1.0, -2.0, -7.0), 1.5);
        let origins = [
            Vec3::new(10.0, 3.0, 4.0),
            Vec3::new(-6.0, 0.0, -20.0),
            Vec3::new(0.0, 30.0, 0.0),
        ];

        for origin in origins {
            let to_center = s.center - origin;
            let ray = Ray::new(origin, to_center.normalize());
            let t = intersect_sphere(&ray, &s).unwrap();
            assert!((t - (to_center.length() - s.radius)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let s = sphere(Vec3::new(0.0, 0.0, -5.0), 2.0);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(intersect_sphere(&ray, &s), None);

        // Ray passing just outside the silhouette
        let ray = Ray::new(Vec3::new(2.01, 0.0, 0.0), Vec3::NEG_Z);
        assert_eq!(intersect_sphere(&ray, &s), None);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let s = sphere(Vec3::new(0.0, 0.0, 5.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(intersect_sphere(&ray, &s), None);
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let s = sphere(Vec3::new(0.0, 0.0, -5.0), 2.0);
        let ray = Ray::new(s.center, Vec3::X);

        let t = intersect_sphere(&ray, &s).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }
}
