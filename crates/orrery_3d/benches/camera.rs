use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery_3d::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn bench_frame(c: &mut Criterion) {
    let mut config = OrreryConfig::default();
    config.motion.moving = true;
    config.motion.planets_moving = true;

    c.bench_function("scene_and_camera_frame", |b| {
        let mut scene = SolarScene::new(&config).unwrap();
        let mut session = CameraSession::new(&config.camera);
        let bodies = ["Mercury", "Earth", "Moon", "Saturn", "Sun"];
        let mut frame = 0usize;

        b.iter(|| {
            if frame % 90 == 0 {
                session.request_focus(bodies[(frame / 90) % bodies.len()], &scene);
            }
            scene.update(DT);
            let state = session.tick(black_box(DT), scene.reference_frame());
            frame += 1;
            black_box(state)
        })
    });

    c.bench_function("plan_flight", |b| {
        let scene = SolarScene::new(&config).unwrap();
        let planner = FlyPlanner::new(&config.camera);
        let controller = OrbitController::default();
        let camera = Vec3::new(0.0, 12.0, 42.0);

        b.iter(|| planner.plan(black_box("Jupiter"), camera, &controller, &scene))
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
