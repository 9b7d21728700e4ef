//! Cube drop example — three cubes tumbling onto a static floor.

use tumble::{advance_simulation, init_simulation, BruteForce, Frame, Scene, Vec3};

/// Axis-aligned box mesh with the given half-extents, outward orientation.
fn box_mesh(hx: f64, hy: f64, hz: f64) -> (Vec<[usize; 3]>, Vec<Vec3>) {
    let positions = vec![
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];
    let triangles = vec![
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 6, 2],
        [3, 7, 6],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];
    (triangles, positions)
}

fn main() {
    let mut scene = Scene::new(4);

    let (triangles, positions) = box_mesh(5.0, 0.5, 5.0);
    scene
        .set_body(
            0,
            Frame::from_translation(Vec3::new(0.0, -0.5, 0.0)),
            Vec3::zeros(),
            Vec3::zeros(),
            0.0,
            triangles,
            positions,
        )
        .expect("floor binds");

    for k in 0..3 {
        let (triangles, positions) = box_mesh(0.5, 0.5, 0.5);
        scene
            .set_body(
                k + 1,
                Frame::from_translation(Vec3::new(
                    0.4 * k as f64 - 0.4,
                    2.0 + 1.5 * k as f64,
                    0.2 * k as f64,
                )),
                Vec3::zeros(),
                Vec3::new(0.5 * k as f64, 0.0, 0.3),
                1.0,
                triangles,
                positions,
            )
            .expect("cube binds");
    }

    scene.set_broad_phase(Box::new(BruteForce));
    init_simulation(&mut scene);

    let dt = 1.0 / 60.0;
    println!("three cubes dropping onto a floor, dt = {dt:.4}");
    for step in 0..=300 {
        if step % 60 == 0 {
            let heights: Vec<String> = (1..4)
                .map(|id| format!("{:6.3}", scene.body_frame(id).pos.y))
                .collect();
            println!(
                "t = {:4.1}s  heights = [{}]  contacts = {}",
                step as f64 * dt,
                heights.join(", "),
                scene.collisions.len(),
            );
        }
        advance_simulation(&mut scene, dt);
    }

    println!("done; all cubes should rest near y = 0.5");
}
