//! A simple example showing the use of a Bloom filter.
use chainbloom::BloomFilter;

fn main() -> Result<(), chainbloom::Error> {
    let capacity = 128;
    let mut bf = BloomFilter::<str>::with_capacity(capacity)?;

    bf.insert("foo");
    bf.insert("bar");

    bf.find("foo"); // true
    bf.find("bar"); // true
    bf.find("baz"); // false

    println!(
        "{} of {} bits set, projected false positive rate {:.6}",
        bf.set_bit_count(),
        bf.bits(),
        bf.false_positive_rate()
    );
    Ok(())
}
