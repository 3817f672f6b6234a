fn main() {
    if let Err(e) = typewriter_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
