//! Concurrent editing example: two users, one document, convergent result.
//!
//! This example walks through the full OT reconciliation cycle: both users
//! edit the same base text concurrently, exchange their operations, transform
//! the incoming remote operation against their own pending one, and converge
//! on an identical document.
//!
//! Run with: cargo run --example concurrent_editing

use text_ot::{TextOperation, transform};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Concurrent Editing Example ===\n");

    let base = "the quick brown fox";
    println!("Shared base document: '{base}'");

    // Alice inserts "very " before "quick"
    let alice = TextOperation::new().retain(4).insert("very ").retain(15);
    println!("\nAlice's edit: insert \"very \" at position 4");
    println!("  Alice's document: '{}'", alice.apply(base).unwrap());

    // Bob concurrently deletes "brown "
    let bob = TextOperation::new().retain(10).delete(6).retain(3);
    println!("Bob's edit: delete \"brown \"");
    println!("  Bob's document:   '{}'", bob.apply(base).unwrap());

    println!("\n--- Exchanging Operations ---");
    println!(
        "Alice sends: {}",
        serde_json::to_string(&alice).unwrap()
    );
    println!("Bob sends:   {}", serde_json::to_string(&bob).unwrap());

    // Each side transforms the remote operation against its own pending one
    let (alice_prime, bob_prime) = transform(&alice, &bob).unwrap();
    println!("\nTransformed for Alice's document: {}", serde_json::to_string(&bob_prime).unwrap());
    println!("Transformed for Bob's document:   {}", serde_json::to_string(&alice_prime).unwrap());

    // Alice applies the adjusted Bob edit on top of her own
    let at_alice = bob_prime.apply(&alice.apply(base).unwrap()).unwrap();
    // Bob applies the adjusted Alice edit on top of his own
    let at_bob = alice_prime.apply(&bob.apply(base).unwrap()).unwrap();

    println!("\n--- After Reconciliation ---");
    println!("  Alice sees: '{at_alice}'");
    println!("  Bob sees:   '{at_bob}'");

    if at_alice == at_bob {
        println!("\n✓ SUCCESS: Both users converged to the same document!");
        println!("✓ Final content: '{at_alice}'");
    } else {
        println!("\n✗ ERROR: Documents did not converge!");
    }
}
