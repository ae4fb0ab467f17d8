use criterion::{criterion_group, criterion_main, Criterion};
use maze_walls::{
    config::MazeConfig,
    geometry,
    maze::Maze,
    renderers::{self, RenderOptionsBuilder},
};

fn bench_export_geometry_viewport(c: &mut Criterion) {
    let config = MazeConfig::default().with_seed(7);
    let maze = Maze::from_config(&config).unwrap();
    let canvas = config.canvas().unwrap();

    c.bench_function("export_geometry_14x20", move |b| {
        b.iter(|| {
            geometry::export_geometry(maze.grid().verticals(), maze.grid().horizontals(), &canvas)
                .unwrap()
        })
    });
}

fn bench_render_geometry_viewport(c: &mut Criterion) {
    let config = MazeConfig::default().with_seed(7);
    let geometry = Maze::from_config(&config).unwrap().geometry(&config).unwrap();
    let options = RenderOptionsBuilder::new().build();

    c.bench_function("render_geometry_14x20", move |b| {
        b.iter(|| renderers::render_geometry(&geometry, &options).unwrap())
    });
}

criterion_group!(
    benches,
    bench_export_geometry_viewport,
    bench_render_geometry_viewport
);
criterion_main!(benches);
