//! Simple ray tracer example.
//!
//! Renders a built-in scene of spheres over a checkered floor and saves it
//! as a PNG.

use glint_renderer::{
    render, Camera, Color, Light, Material, Pattern, RenderConfig, Scene, Shape, ToneMap, Vec3,
};

fn main() {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let (width, height) = (640, 480);

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene(width, height);
    println!("Scene built in {:?}", start.elapsed());

    println!(
        "Rendering {}x{} @ depth {}...",
        width, height, scene.depth
    );

    // Render
    let start = std::time::Instant::now();
    let image = render(&scene, width, height, &RenderConfig::default());
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    if let Err(e) = image.save(filename, ToneMap::Reinhard) {
        eprintln!("Failed to save image: {}", e);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene(width: u32, height: u32) -> Scene {
    let green = Color::new(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.0, 0.7, 0.0), Vec3::ONE);
    let purple = Color::new(Vec3::new(0.07, 0.0, 0.1), Vec3::new(0.7, 0.0, 1.0), Vec3::ONE);
    let grey = Color::new(Vec3::splat(0.1), Vec3::splat(0.5), Vec3::ONE);
    let shiny = Material::new(100.0, 0.75);
    let matte = Material::new(50.0, 0.2);

    Scene::new(Camera::for_image(width, height), 3)
        .with_light(Light::new(Vec3::new(5.0, 5.0, 5.0), Color::uniform(Vec3::ONE), 1.5))
        .with_shape(Shape::sphere(Vec3::new(-0.2, 0.0, -1.0), 0.7, green, shiny))
        .with_shape(Shape::sphere(Vec3::new(0.1, -0.3, 0.0), 0.1, purple, shiny))
        .with_shape(
            Shape::sphere(Vec3::new(0.6, -0.4, -0.6), 0.3, grey, matte)
                .with_pattern(Pattern::checkerboard(8.0)),
        )
        .with_shape(
            Shape::plane(Vec3::Y, -0.7, grey, matte).with_pattern(Pattern::checkerboard(2.0)),
        )
}
