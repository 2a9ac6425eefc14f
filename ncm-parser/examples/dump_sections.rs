//! Dump the section layout of an NCM container.
//!
//! Usage: `cargo run --example dump_sections -- <file.ncm>`

use ncm_parser::NcmFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: dump_sections <file.ncm>")?;

    let mut ncm = NcmFile::open(&path)?;
    ncm.parse()?;

    println!("{}", ncm.file_name());
    println!("  file size: {} bytes", ncm.file_metadata()?.len());

    for (name, section) in [
        ("key", ncm.key()),
        ("metadata", ncm.metadata()),
        ("cover", ncm.cover()),
        ("audio", ncm.audio()),
    ] {
        if let Some(section) = section {
            println!("  {name:<9} {:>10} bytes", section.len());
        }
    }

    Ok(())
}
