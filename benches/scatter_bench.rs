use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{Point3, Vector3};
use raytrace_core::{
    path_rng, Color, Intersectable, Lambertian, Material, Ray, Reflective, Scatterer, Sphere,
    Transparent,
};
use std::sync::Arc;

fn materials() -> Vec<(&'static str, Arc<Material>)> {
    vec![
        (
            "lambertian",
            Arc::new(Material::Lambertian(Lambertian::new(Color::new(
                0.8, 0.3, 0.3,
            )))),
        ),
        (
            "reflective",
            Arc::new(Material::Reflective(Reflective::new(
                Color::new(0.8, 0.6, 0.2),
                0.3,
            ))),
        ),
        (
            "transparent",
            Arc::new(Material::Transparent(Transparent::new(1.5))),
        ),
    ]
}

pub fn intersection_benchmark(c: &mut Criterion) {
    let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, Arc::new(Material::default()));
    let hit_ray = Ray::new(Point3::origin(), Vector3::new(0.1, -0.05, -1.0));
    let miss_ray = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, -0.2));

    let mut group = c.benchmark_group("Sphere");
    group.bench_function("Hit", |b| {
        b.iter(|| sphere.intersect(black_box(&hit_ray), 1e-3, f64::INFINITY))
    });
    group.bench_function("Miss", |b| {
        b.iter(|| sphere.intersect(black_box(&miss_ray), 1e-3, f64::INFINITY))
    });
    group.finish();
}

pub fn scatter_benchmark(c: &mut Criterion) {
    let ray = Ray::new(Point3::origin(), Vector3::new(0.1, -0.05, -1.0).normalize());
    let mut rng = path_rng(0, 0);

    let mut group = c.benchmark_group("Scatter");
    for (name, material) in materials() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, material);
        let intersection = sphere
            .intersect(&ray, 1e-3, f64::INFINITY)
            .expect("benchmark ray misses the sphere");

        group.bench_with_input(
            BenchmarkId::new("Material", name),
            &intersection,
            |b, intersection| {
                b.iter(|| {
                    intersection
                        .material
                        .scatter(black_box(&ray), intersection, &mut rng)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, intersection_benchmark, scatter_benchmark);
criterion_main!(benches);
