//! Simple standalone example of building, applying, and inverting operations.
//!
//! This example demonstrates the basic functionality of the OT engine
//! in a simple, easy-to-understand scenario.
//!
//! Run with: cargo run --example simple

use text_ot::TextOperation;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Simple OT Example ===\n");

    let document = "Hello world!";
    println!("Starting document: '{document}'");

    // Describe an edit: keep "Hello ", insert a word in front of "world!"
    let op = TextOperation::new().retain(6).insert("beautiful ");
    println!("\nEdit: retain(6).insert(\"beautiful \")");
    println!("Wire form: {}", serde_json::to_string(&op).unwrap());

    let edited = op.apply(document).unwrap();
    println!("\nAfter applying: '{edited}'");

    // Undo comes for free: invert relative to the original document
    let undo = op.invert(document).unwrap();
    println!(
        "\nInverse operation: {}",
        serde_json::to_string(&undo).unwrap()
    );

    let restored = undo.apply(&edited).unwrap();
    println!("After undo: '{restored}'");

    if restored == document {
        println!("\n✓ SUCCESS: undo restored the original document!");
    } else {
        println!("\n✗ ERROR: undo did not restore the original document!");
    }
}
