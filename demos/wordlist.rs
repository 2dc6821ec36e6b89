//! Example: an autocomplete box on top of a `Trie`.
//!
//! Builds a trie from a small word list and runs the four kinds of query against it,
//! then walks the tree by hand through `TrieNode` to list the letters that may follow a
//! prefix.
//!
//! Run with: cargo run --example wordlist

use libtrie::{Trie, TrieNode};

/// Letters that can follow `prefix` in some word of the trie.
fn next_letters(trie: &Trie, prefix: &str) -> Vec<char> {
    trie.find(prefix)
        .map(|node: &TrieNode<char>| node.children().map(|(ch, _)| ch).collect())
        .unwrap_or_default()
}

fn main() {
    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let trie: Trie = words.into_iter().collect();

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if trie.search(word) { "yes" } else { "no" });
    }

    // Autocomplete
    println!("\nAutocomplete:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {:?}", trie.autocomplete(prefix));
    }

    // Suffix queries
    println!("\nEnds with:");
    for suffix in ["KED", "ER", "AKE"] {
        println!("  *{suffix}: {:?}", trie.ends_with(suffix));
    }

    // Manual traversal
    println!("\nNext letters after BAKE: {:?}", next_letters(&trie, "BAKE"));

    println!("\nAll words: {:?}", trie.iter().collect::<Vec<_>>());
}
