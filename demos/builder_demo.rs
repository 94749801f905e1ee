/// Demonstrates the generic template builder API.
///
/// Builds a small product carousel, shows how validation failures surface,
/// and prints the JSON payload ready to be sent.
use fb_generic_template::builders::*;

fn main() -> BuilderResult<()> {
    println!("=== Generic Template Builder Demo ===\n");

    // Example 1: A two-card product carousel
    println!("1. Building a product carousel:");

    let mut carousel = GenericTemplateBuilder::new();
    carousel
        .add_bubble("Rust mug", Some("Ceramic, 350ml"))?
        .add_url("https://shop.example.com/mug")?
        .add_image("https://shop.example.com/mug.png")?
        .add_button("Buy", "BUY_MUG")?
        .add_button("Details", "https://shop.example.com/mug")?
        .add_bubble("Rust shirt", Some("Organic cotton"))?
        .add_image("https://shop.example.com/shirt.png")?
        .add_button("Buy", "BUY_SHIRT")?;

    println!("   Bubbles: {}\n", carousel.len());

    // Example 2: Validation errors keep the builder intact
    println!("2. Rejected calls:");

    if let Err(e) = carousel.add_url("http//invalid-url") {
        println!("   {} ({:?})", e, e.kind());
    }
    if let Err(e) = carousel.add_bubble(&"x".repeat(81), None) {
        println!("   {} ({:?})", e, e.kind());
    }
    println!("   Bubbles after rejected calls: {}\n", carousel.len());

    // Example 3: The payload
    println!("3. Payload:");
    let message = carousel.get()?;
    match serde_json::to_string_pretty(&message) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("   Could not serialize payload: {}", e),
    }

    Ok(())
}
