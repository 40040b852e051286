//! Demo binary for the traversal exercise: build the reference tree and
//! print one line per traversal.

use bstree::owned::Tree;

/// Formats a sequence of values as a single space-separated line.
fn line<'a>(values: impl IntoIterator<Item = &'a i32>) -> String {
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let mut tree = Tree::new();
    for value in [50, 30, 70, 20, 40, 80] {
        tree = tree.insert(value);
    }

    println!("{}", line(tree.inorder()));
    println!("Level order Traversal: {}", line(tree.level_order()));
    println!(
        "Zigzag Traversal: {}",
        line(tree.zigzag().into_iter().flatten())
    );
}
