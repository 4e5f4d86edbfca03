use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use static_init::dynamic;
use viewgraph::graph::*;
use viewgraph::map::*;
use viewgraph::view::*;

#[dynamic]
static NODE_SIZE: usize = std::env::var("NODE_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static ARC_SIZE: usize = std::env::var("ARC_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, direct, reversed, filtered, undirected, split);
criterion_main!(benches);

fn random_digraph() -> (TreeBackedDigraph, Vec<NodeId>, Vec<ArcId>) {
    let node_size = *NODE_SIZE;
    let arc_size = *ARC_SIZE;
    let mut g = TreeBackedDigraph::new();
    let mut nodes = vec![];
    let mut arcs = vec![];
    for _ in 0..node_size {
        nodes.push(g.add_node());
    }
    for _ in 0..arc_size {
        let s = nodes[rand::thread_rng().gen::<usize>() % nodes.len()];
        let t = nodes[rand::thread_rng().gen::<usize>() % nodes.len()];
        arcs.push(g.add_arc(s, t));
    }
    (g, nodes, arcs)
}

fn sweep<G: Digraph>(g: &G) -> usize {
    let mut touched = 0;
    for n in g.nodes() {
        for a in g.out_arcs(n) {
            black_box(g.target(a));
            touched += 1;
        }
    }
    touched
}

fn direct(c: &mut Criterion) {
    let (g, _, _) = random_digraph();
    c.bench_function("direct/out_sweep", |b| b.iter(|| sweep(&g)));
    c.bench_function("direct/iter_arcs", |b| b.iter(|| g.arcs().count()));
}

fn reversed(c: &mut Criterion) {
    let (g, _, _) = random_digraph();
    let rev = ReverseDigraph::new(&g);
    c.bench_function("reversed/out_sweep", |b| b.iter(|| sweep(&rev)));
}

fn filtered(c: &mut Criterion) {
    let (g, _, arcs) = random_digraph();
    let mut af = g.arc_map(true);
    for (i, a) in arcs.iter().enumerate() {
        af.set(a, i % 2 == 0);
    }
    let sub = filter_arcs(&g, &af);
    c.bench_function("filtered/out_sweep", |b| b.iter(|| sweep(&sub)));
    c.bench_function("filtered/iter_arcs", |b| b.iter(|| sub.arcs().count()));
}

fn undirected(c: &mut Criterion) {
    let (g, _, _) = random_digraph();
    let und = Undirector::new(&g);
    c.bench_function("undirected/out_sweep", |b| b.iter(|| sweep(&und)));
}

fn split(c: &mut Criterion) {
    let (g, _, _) = random_digraph();
    let split = SplitNodes::new(&g);
    c.bench_function("split/out_sweep", |b| b.iter(|| sweep(&split)));
}
