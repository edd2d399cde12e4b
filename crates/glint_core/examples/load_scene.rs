//! Example: Load and inspect a scene description.
//!
//! Run with: cargo run --example load_scene -- demos/spheres.json

use std::env;

use glint_core::{load_scene, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene.json>");
        println!("\nExamples:");
        println!("  cargo run --example load_scene -- demos/spheres.json");
        println!("  cargo run --example load_scene -- demos/checkered_floor.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(file) => {
            let scene = &file.scene;
            println!("\n=== {}x{}, depth {} ===", file.width, file.height, scene.depth);
            println!(
                "Camera at ({:.2}, {:.2}, {:.2})",
                scene.camera.position.x, scene.camera.position.y, scene.camera.position.z
            );

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                let p = light.position();
                println!("  [{}] at ({:.2}, {:.2}, {:.2})", i, p.x, p.y, p.z);
            }

            println!("\n--- Shapes ---");
            for (i, shape) in scene.shapes.iter().enumerate() {
                let material = shape.material();
                let kind = match shape {
                    Shape::Sphere(sphere) => format!(
                        "sphere r={:.2} at ({:.2}, {:.2}, {:.2})",
                        sphere.radius(),
                        sphere.center().x,
                        sphere.center().y,
                        sphere.center().z
                    ),
                    Shape::Plane(plane) => {
                        let n = shape.normal(glint_math::Vec3::ZERO);
                        format!(
                            "plane n=({:.2}, {:.2}, {:.2}) d={:.2}",
                            n.x,
                            n.y,
                            n.z,
                            plane.distance()
                        )
                    }
                };
                println!(
                    "  [{}] {} luster={} reflectivity={} pattern={:?}",
                    i,
                    kind,
                    material.luster,
                    material.reflectivity,
                    shape.pattern()
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
