fn main() -> anyhow::Result<()> {
    tintlab::cli::run()
}
