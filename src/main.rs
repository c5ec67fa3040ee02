fn main() {
    if let Err(e) = cembed::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
