//! Example using the safe wrapper over libmediainfo.
//!
//! Opens one file, prints every stream's parameters from a snapshot, then
//! releases the handle explicitly.
//!
//! Run with: cargo run --features native --example safe_example -- /path/to/video.mkv

use mediainfo_ffi::{MediaInfo, NativeLibrary};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <media_file>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];

    println!("Library: {}", MediaInfo::<NativeLibrary>::version()?);

    let mut media = MediaInfo::<NativeLibrary>::new()?;

    println!("Opening: {}", path);
    if !media.open(path)? {
        eprintln!("MediaInfo could not parse {}", path);
        media.dispose()?;
        std::process::exit(1);
    }

    let snapshot = media.snapshot()?;
    for (kind, streams) in snapshot.iter() {
        for (number, parameters) in streams.iter().enumerate() {
            println!("\n--- {} #{} ({} parameters) ---", kind, number, parameters.len());
            for (name, value) in parameters.iter() {
                println!("{:<40} {}", name, value);
            }
        }
    }

    media.close()?;
    media.dispose()?;

    println!("\nSafe wrapper example completed successfully!");
    Ok(())
}
