use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use std::hint::black_box;
use trackroute::router::{PathValues, Router};
use trackroute::RoutesConfig;

fn example_routes() -> &'static str {
    r#"
routes:
  - { method: GET,  pattern: "/",                                 handler: "home#index" }
  - { method: GET,  pattern: "/zoo/animals",                      handler: "animals#index" }
  - { method: POST, pattern: "/zoo/animals",                      handler: "animals#create" }
  - { method: GET,  pattern: "/zoo/animals/{id}",                 handler: "animals#show" }
  - { method: POST, pattern: "/zoo/animals/{id}",                 handler: "animals#update" }
  - { method: GET,  pattern: "/zoo/animals/{id}/toys/{toyId}",    handler: "toys#show" }
  - { method: GET,  pattern: "/zoo/{category}/animals/{id}/habitats/{habitatId}/sections/{sectionId}", handler: "sections#show" }
  - { method: POST, pattern: "/inventory/{warehouseId}/feeds/{feedId}/items/{itemId}/batches/{batchId}", handler: "batches#create" }
  - { method: GET,  pattern: "/complex/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}", handler: "complex#show" }
  - { method: GET,  pattern: "/zoo/health",                       handler: "health#show" }
"#
}

fn build_router() -> Router {
    RoutesConfig::from_yaml_str(example_routes())
        .and_then(|config| config.build_router())
        .expect("failed to build router")
}

fn bench_route_throughput(c: &mut Criterion) {
    let router = build_router();
    c.bench_function("route_match", |b| {
        let test_paths = [
            (Method::GET, "/zoo/animals/123"),
            (Method::GET, "/zoo/animals/123/toys/456"),
            (Method::GET, "/zoo/cats/animals/123/habitats/88/sections/5"),
            (Method::POST, "/inventory/1/feeds/2/items/3/batches/4"),
            (Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
            (Method::GET, "/does/not/exist"),
        ];
        b.iter(|| {
            for (method, path) in test_paths.iter() {
                let res = router.match_route(method, path);
                black_box(&res);
            }
        })
    });
}

fn bench_path_generation(c: &mut Criterion) {
    let router = build_router();
    let values = PathValues::new()
        .with("category", "cats")
        .with("id", 123)
        .with("habitatId", 88)
        .with("sectionId", 5);
    c.bench_function("path_generation", |b| {
        b.iter(|| {
            let path = router.path(black_box("sections.show"), &values);
            black_box(&path);
        })
    });
}

criterion_group!(benches, bench_route_throughput, bench_path_generation);
criterion_main!(benches);
