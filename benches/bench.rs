use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::owned::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in an unbalanced manner. This adds elements in an
/// ascending manner so the tree degenerates into a right-leaning list.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) as i32 {
        tree = tree.insert(x);
    }
    tree
}

/// Builds a tree by inserting values in a balanced manner: always the middle of the
/// remaining range first, so every level but the last is full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let tree = Tree::new();
    let xs: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
    fill_balanced_tree(tree, &xs)
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(mut tree: Tree<i32>, xs: &[i32]) -> Tree<i32> {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree = tree.insert(xs[mid]);
        tree = fill_balanced_tree(tree, &xs[..mid]);
        tree = fill_balanced_tree(tree, &xs[mid + 1..]);
    }
    tree
}

/// Helper to bench a read-only operation on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3 - 1, 2^7 - 1, etc. The unbalanced trees are lists of the
    // same length, so the sizes stay modest.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let num_nodes = num_nodes_in_full_tree(num_levels);
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name.to_string(), num_nodes);

            group.bench_with_input(id, &num_nodes, |b, _| {
                b.iter(|| {
                    f(black_box(&tree));
                })
            });
        }
    }

    group.finish();
}

/// Benchmarks the traversals and height against balanced and unbalanced trees of
/// various sizes, plus building the trees in the first place.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "inorder", |tree| {
        let _count = black_box(tree.inorder().count());
    });
    bench_helper(c, "level-order", |tree| {
        let _count = black_box(tree.level_order().count());
    });
    bench_helper(c, "zigzag", |tree| {
        let _levels = black_box(tree.zigzag());
    });
    bench_helper(c, "height", |tree| {
        let _height = black_box(tree.height());
    });

    let mut group = c.benchmark_group("build");
    for num_levels in [3, 7, 11] {
        let num_nodes = num_nodes_in_full_tree(num_levels);

        group.bench_with_input(
            BenchmarkId::new("unbalanced", num_nodes),
            &num_levels,
            |b, &num_levels| b.iter(|| black_box(get_unbalanced_tree(num_levels))),
        );
        group.bench_with_input(
            BenchmarkId::new("balanced", num_nodes),
            &num_levels,
            |b, &num_levels| b.iter(|| black_box(get_balanced_tree(num_levels))),
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
