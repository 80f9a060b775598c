use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_augment_blacklist(&out_dir);

    println!("cargo:rerun-if-changed=data/augment_blacklist.txt");
}

fn generate_augment_blacklist(out_dir: &str) {
    let text = fs::read_to_string("data/augment_blacklist.txt")
        .expect("failed to read augment_blacklist.txt");

    // One apiName per line, `#` starts a comment
    let mut ids: Vec<String> = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let path = Path::new(out_dir).join("augment_blacklist.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    let mut builder = phf_codegen::Set::new();
    for id in &ids {
        builder.entry(id.as_str());
    }

    writeln!(
        file,
        "pub static AUGMENT_BLACKLIST: phf::Set<&'static str> = {};",
        builder.build()
    )
    .unwrap();
}
