use packed_ints::PackedIntsContainer;

fn main() {
    println!("=== Packed Ints Examples ===\n");

    // Example 1: Storing small integers
    let _ = example_small_integers();

    // Example 2: Editing in the middle
    let _ = example_insert_erase();

    // Example 3: Memory comparison
    let _ = example_memory_savings();
}

fn example_small_integers() -> Result<(), packed_ints::PackedIntsError> {
    println!("Example 1: Storing palette indices (5 bits each)");

    let mut colors = PackedIntsContainer::<5>::new()?;

    // Palette indices (0-31)
    colors.push(15)?; // Red shade
    colors.push(8)?; // Green shade
    colors.push(23)?; // Blue shade

    println!("  Stored {} colors", colors.len());
    println!("  Color 0: {}", colors.get(0).unwrap());
    println!("  Color 1: {}", colors.get(1).unwrap());
    println!("  Color 2: {}", colors.get(2).unwrap());

    // Out-of-range values are rejected, not truncated
    assert!(colors.push(32).is_err());
    println!();

    Ok(())
}

fn example_insert_erase() -> Result<(), packed_ints::PackedIntsError> {
    println!("Example 2: Insert and erase through cursors");

    let mut scores = PackedIntsContainer::<7>::from_values(&[10, 20, 30, 40])?;

    // Splice a new score in at position 1
    scores.insert(scores.begin().advance(1), 15)?;
    println!("  After insert: {:?}", scores.to_values());

    // Drop positions 2..4
    scores.erase(scores.begin().advance(2), scores.begin().advance(4))?;
    println!("  After erase:  {:?}", scores.to_values());
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), packed_ints::PackedIntsError> {
    println!("Example 3: Memory savings comparison");

    let count: usize = 10_000;

    // Standard Vec<u64>
    let standard_bytes = count * 8;

    // PackedIntsContainer<12> (values 0-4095)
    let mut packed = PackedIntsContainer::<12>::with_capacity(count)?;
    for i in 0..count {
        packed.push(i as u64 % 4096)?;
    }
    let packed_bytes = packed.capacity() * 12 / 8;

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 12-bit values:", count);
    println!("  Vec<u64>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);

    Ok(())
}
