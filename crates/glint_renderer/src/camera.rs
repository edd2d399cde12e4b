//! Camera ray generation.

use glint_core::Camera;
use glint_math::{Ray, Vec3};

/// Evenly spaced sample `index` of `count` over [start, end], inclusive of
/// both ends.
#[inline]
fn linspace(start: f64, end: f64, count: u32, index: u32) -> f64 {
    if count <= 1 {
        return 0.5 * (start + end);
    }
    start + (end - start) * index as f64 / (count - 1) as f64
}

/// Generate the camera ray for pixel (x, y) of a `width` x `height` image.
///
/// Pixels span the screen rectangle edge to edge: `x` runs left to right,
/// `y` top to bottom. The returned direction is unit length.
pub fn pixel_ray(camera: &Camera, width: u32, height: u32, x: u32, y: u32) -> Ray {
    let screen = &camera.screen;
    let pixel = Vec3::new(
        linspace(screen.left, screen.right, width, x),
        linspace(screen.top, screen.bottom, height, y),
        camera.screen_z,
    );

    Ray::towards(camera.position, pixel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Screen;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(-1.0, 1.0, 5, 0), -1.0);
        assert_eq!(linspace(-1.0, 1.0, 5, 2), 0.0);
        assert_eq!(linspace(-1.0, 1.0, 5, 4), 1.0);
        assert_eq!(linspace(-1.0, 1.0, 1, 0), 0.0);
    }

    #[test]
    fn test_corner_rays() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 1.0),
            Screen {
                left: -1.0,
                top: 0.5,
                right: 1.0,
                bottom: -0.5,
            },
            0.0,
        );

        let top_left = pixel_ray(&camera, 3, 3, 0, 0);
        let expected = Vec3::new(-1.0, 0.5, -1.0).normalize();
        assert!((top_left.direction - expected).length() < 1e-12);
        assert_eq!(top_left.origin, camera.position);

        let bottom_right = pixel_ray(&camera, 3, 3, 2, 2);
        let expected = Vec3::new(1.0, -0.5, -1.0).normalize();
        assert!((bottom_right.direction - expected).length() < 1e-12);
    }

    #[test]
    fn test_center_ray_looks_down_z() {
        let camera = Camera::for_image(101, 101);
        let ray = pixel_ray(&camera, 101, 101, 50, 50);

        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-12);
        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
    }
}
