//! Generates the Zobrist hash table consumed by `src/zobrist.rs`.
//!
//! The table is drawn from a fixed seed, so every build produces the same
//! codes and position hashes are stable across runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Must match `constants::MAX_BOARD_SIZE`.
const MAX_BOARD_SIZE: usize = 19;

/// Codes stay below the sign bit.
const MAX63: u64 = 0x7fff_ffff_ffff_ffff;

const SEED: u64 = 0x5eed_90ba_d000_0001;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let path = Path::new(&out_dir).join("zobrist_table.rs");

    write_table(&path).expect("failed to write zobrist table");
}

fn write_table(path: &Path) -> std::io::Result<()> {
    let mut rng = fastrand::Rng::with_seed(SEED);
    let mut f = BufWriter::new(File::create(path)?);

    let area = MAX_BOARD_SIZE * MAX_BOARD_SIZE;
    writeln!(f, "pub const HASH_CODE: [[u64; 2]; {area}] = [")?;
    // row-major over 1..=19 x 1..=19, [black, white] per point
    for _ in 0..area {
        let black = rng.u64(..) & MAX63;
        let white = rng.u64(..) & MAX63;
        writeln!(f, "    [0x{black:016x}, 0x{white:016x}],")?;
    }
    writeln!(f, "];")?;

    f.flush()
}
