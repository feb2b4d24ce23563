//! Write two small matrices to disk, reload them and multiply

use splist::{MatrixFile, Operation, SparseEntryList, SparseMatrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let a = SparseEntryList::from_entries(
        3,
        4,
        [(0, 0, 1), (0, 2, 2), (1, 1, 3), (2, 0, 4), (2, 3, 5)],
    );
    let b = SparseEntryList::from_entries(4, 2, [(0, 0, 1), (1, 1, 2), (2, 0, 3), (3, 1, 4)]);

    MatrixFile::write(&a, "example_a.txt")?;
    MatrixFile::write(&b, "example_b.txt")?;
    println!(
        "Wrote example_a.txt ({} entries) and example_b.txt ({} entries)",
        a.len(),
        b.len()
    );

    let a = MatrixFile::read("example_a.txt")?;
    let b = MatrixFile::read("example_b.txt")?;
    let product = Operation::Multiply.apply(&a, &b)?;

    let (rows, cols) = product.dimensions();
    println!("\nProduct: {rows} x {cols}, {} non-zeros", product.nnz());
    for entry in &product {
        println!("   {entry}");
    }

    println!(
        "\nRun 'cargo run -- example_a.txt example_b.txt multiply' to do the same from the CLI"
    );
    Ok(())
}
