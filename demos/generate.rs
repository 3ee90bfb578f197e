//! Derive the rank-matched and control images from a photo.
//!
//! Usage:
//!   cargo run --example generate --release -- <input> [output_dir] [stamp]
//!
//! Writes `{base}_{stamp}_{SRC,RPC_A,RPC_B,CTRL}.png` into `output_dir`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rgb::RGBA;
use zenpermute::naming::output_file_name;
use zenpermute::prepare::prepare_source;
use zenpermute::{GenerateConfig, Variant, WORKING_SIZE, base_name, generate_img};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let input = args
        .get(1)
        .expect("usage: generate <input> [output_dir] [stamp]");
    let out_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let stamp = args.get(3).cloned().unwrap_or_else(|| "out".to_string());

    let file_name = Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    let base = base_name(file_name);

    let img = image::open(input).unwrap().to_rgba8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let pixels: Vec<RGBA<u8>> = img
        .pixels()
        .map(|p| RGBA::new(p.0[0], p.0[1], p.0[2], p.0[3]))
        .collect();

    let source = prepare_source(&pixels, w, h, WORKING_SIZE).unwrap();

    let start = Instant::now();
    let result = generate_img(source.as_ref(), file_name, &GenerateConfig::default()).unwrap();
    println!(
        "{file_name}: {w}x{h} -> {WORKING_SIZE}x{WORKING_SIZE}, seed {}, {:.1?}",
        result.seed(),
        start.elapsed()
    );

    std::fs::create_dir_all(&out_dir).unwrap();
    for variant in Variant::ALL {
        let view = result.get(variant);
        let bytes: Vec<u8> = view
            .pixels()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect();
        let path = out_dir.join(output_file_name(base, &stamp, variant));
        image::save_buffer(
            &path,
            &bytes,
            view.width() as u32,
            view.height() as u32,
            image::ColorType::Rgba8,
        )
        .unwrap();
        println!("  wrote {}", path.display());
    }
}
