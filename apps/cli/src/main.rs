//! Binary entry point: delegates to the library's `run()`.

fn main() {
    ashkana_cli::run();
}
