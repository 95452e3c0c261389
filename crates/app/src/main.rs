//! gifcrypt: encode files into encrypted animated GIFs and recover them.
//!
//! Thin caller layer around `gifcrypt-core`: argument parsing, directory
//! defaults, and printing run summaries. All pipeline behavior lives in
//! the core crate.

mod config;
mod input_gen;

use config::{Config, Mode};
use gifcrypt_core::pipeline::{DecodeReport, EncodeReport};
use gifcrypt_core::{decode_file, encode_file, DecodeOptions, EncodeOptions};
use std::fs;
use std::time::Duration;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let key = config.cipher_key()?;

    let encode_options = EncodeOptions {
        resolution: config.resolution,
        frame_duration: Duration::from_millis(config.frame_ms),
        workdir: config.workdir.clone(),
        output_dir: config.out_dir.clone(),
    };
    let decode_options = DecodeOptions {
        output_dir: config.recovered_dir.clone(),
    };

    match &config.mode {
        Mode::Encode(path) => {
            let report = encode_file(path, &key, &encode_options)?;
            print_encode_summary(&report);
        }

        Mode::Decode(path) => {
            let report = decode_file(path, &key, &decode_options)?;
            print_decode_summary(&report);
        }

        Mode::Demo => {
            fs::create_dir_all(&config.workdir)?;
            let sample = config.workdir.join("sample.bin");
            input_gen::write_sample_file(&sample, config.seed, config.sample_bytes)?;
            println!(
                "Generated sample: {} bytes (seed {})",
                config.sample_bytes, config.seed
            );
            println!();

            let encoded = encode_file(&sample, &key, &encode_options)?;
            print_encode_summary(&encoded);

            let decoded = decode_file(&encoded.container_path, &key, &decode_options)?;
            print_decode_summary(&decoded);

            let original = fs::read(&sample)?;
            let recovered = fs::read(&decoded.recovered_path)?;
            if original == recovered {
                println!("Round trip OK: recovered file matches the sample");
            } else {
                return Err("round trip mismatch: recovered file differs from the sample".into());
            }
        }
    }

    Ok(())
}

fn print_encode_summary(report: &EncodeReport) {
    println!("=== Encode ===");
    println!("Container:  {:?}", report.container_path);
    println!("Source:     {} bytes", report.source_bytes);
    println!("Rendered:   {} bits across {} frames", report.total_bits, report.frames);
    println!("Elapsed:    {:.2?}", report.elapsed);
    println!();
}

fn print_decode_summary(report: &DecodeReport) {
    println!("=== Decode ===");
    println!("Recovered:  {:?}", report.recovered_path);
    println!("Size:       {} bytes", report.recovered_bytes);
    println!("Frames:     {}", report.frames);
    println!("Elapsed:    {:.2?}", report.elapsed);
    println!();
}
