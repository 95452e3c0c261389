//! Configuration for the gifcrypt command-line tool.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no flags it generates a
//! sample file, encodes it, decodes the container back, and verifies the
//! round trip. Defaults are printed with `--print-config` so runs are
//! reproducible.

use gifcrypt_core::{CipherKey, Resolution};
use std::path::PathBuf;

/// What the tool should do this run.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Encode the file at this path into a container
    Encode(PathBuf),

    /// Decode the container at this path back into a file
    Decode(PathBuf),

    /// Generate a sample file, encode it, decode it, verify
    Demo,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Operation ===
    /// Encode, decode, or self-checking demo
    pub mode: Mode,

    // === Cipher ===
    /// Textual passphrase, derived to key bits one pair per character
    pub key_text: String,

    /// Explicit key bit string; overrides the passphrase when set
    pub key_bits: Option<String>,

    // === Frames ===
    /// Frame resolution preset
    pub resolution: Resolution,

    /// Per-frame display duration in milliseconds
    pub frame_ms: u64,

    // === Directories ===
    /// Where containers are written
    pub out_dir: PathBuf,

    /// Where recovered files are written
    pub recovered_dir: PathBuf,

    /// Scratch directory for staged frames; one invocation owns it
    pub workdir: PathBuf,

    // === Demo ===
    /// Seed for the generated sample
    pub seed: u64,

    /// Size of the generated sample in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode: Option<Mode> = None;
        let mut key_text: Option<String> = None;
        let mut key_bits: Option<String> = None;
        let mut resolution: Option<Resolution> = None;
        let mut frame_ms: Option<u64> = None;
        let mut out_dir: Option<PathBuf> = None;
        let mut recovered_dir: Option<PathBuf> = None;
        let mut workdir: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--encode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--encode requires a path".to_string());
                    }
                    mode = Some(Mode::Encode(PathBuf::from(&args[i])));
                }
                "--decode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decode requires a path".to_string());
                    }
                    mode = Some(Mode::Decode(PathBuf::from(&args[i])));
                }
                "--key" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--key requires a passphrase".to_string());
                    }
                    key_text = Some(args[i].clone());
                }
                "--key-bits" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--key-bits requires a bit string".to_string());
                    }
                    key_bits = Some(args[i].clone());
                }
                "--res" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--res requires 4k or hd".to_string());
                    }
                    resolution = Some(match args[i].as_str() {
                        "4k" | "4K" => Resolution::FOUR_K,
                        "hd" | "HD" => Resolution::HD,
                        other => return Err(format!("unknown resolution: {other}")),
                    });
                }
                "--frame-ms" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--frame-ms requires a number".to_string());
                    }
                    frame_ms = Some(args[i].parse().map_err(|_| "invalid frame-ms")?);
                }
                "--out-dir" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out-dir requires a path".to_string());
                    }
                    out_dir = Some(PathBuf::from(&args[i]));
                }
                "--recovered-dir" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--recovered-dir requires a path".to_string());
                    }
                    recovered_dir = Some(PathBuf::from(&args[i]));
                }
                "--workdir" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--workdir requires a path".to_string());
                    }
                    workdir = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(Config {
            mode: mode.unwrap_or(Mode::Demo),
            key_text: key_text.unwrap_or_else(|| "SECRET".to_string()),
            key_bits,
            resolution: resolution.unwrap_or(Resolution::HD),
            frame_ms: frame_ms.unwrap_or(100),
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from(".")),
            recovered_dir: recovered_dir.unwrap_or_else(|| PathBuf::from("recovered_files")),
            // Unique per process: one invocation owns its staging directory
            workdir: workdir.unwrap_or_else(|| PathBuf::from(format!("temp-{}", std::process::id()))),
            seed,
            sample_bytes: sample_bytes.unwrap_or(4096),
            print_config,
        })
    }

    /// Build the cipher key from the configured bits or passphrase.
    pub fn cipher_key(&self) -> gifcrypt_core::Result<CipherKey> {
        match &self.key_bits {
            Some(bits) => CipherKey::parse(bits),
            None => CipherKey::from_text(&self.key_text),
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.mode {
            Mode::Encode(path) => println!("Mode: encode {:?}", path),
            Mode::Decode(path) => println!("Mode: decode {:?}", path),
            Mode::Demo => println!("Mode: demo (seed {}, {} sample bytes)", self.seed, self.sample_bytes),
        }
        match &self.key_bits {
            Some(bits) => println!("Key: {} explicit bits", bits.len()),
            None => println!("Key: derived from {}-character passphrase", self.key_text.chars().count()),
        }
        println!("Resolution: {} ({} bits/frame)", self.resolution, self.resolution.capacity());
        println!("Frame duration: {} ms", self.frame_ms);
        println!("Container dir: {:?}", self.out_dir);
        println!("Recovered dir: {:?}", self.recovered_dir);
        println!("Staging dir: {:?}", self.workdir);
        println!();
    }
}

fn print_help() {
    println!("gifcrypt: encode files into encrypted animated GIFs and back");
    println!();
    println!("USAGE:");
    println!("    gifcrypt [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --encode <PATH>         Encode a file into a container");
    println!("    --decode <PATH>         Decode a container back into a file");
    println!("                            (neither: run a self-checking demo)");
    println!();
    println!("    --key <TEXT>            Cipher passphrase (default: SECRET)");
    println!("    --key-bits <BITS>       Explicit key bits, e.g. 1010 (overrides --key)");
    println!();
    println!("    --res <4k|hd>           Frame resolution (default: hd)");
    println!("    --frame-ms <N>          Per-frame duration in ms (default: 100)");
    println!();
    println!("    --out-dir <PATH>        Container output dir (default: .)");
    println!("    --recovered-dir <PATH>  Recovered file dir (default: recovered_files)");
    println!("    --workdir <PATH>        Frame staging dir (default: temp-<pid>)");
    println!();
    println!("    --seed <N>              Demo sample seed (default: time-based)");
    println!("    --sample-bytes <N>      Demo sample size (default: 4096)");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    gifcrypt                                # Self-checking demo");
    println!("    gifcrypt --encode notes.txt --key hunter2");
    println!("    gifcrypt --decode notes.txt.gif --key hunter2");
    println!();
}
