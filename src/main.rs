fn main() -> anyhow::Result<()> {
    career_portal::cli::run()
}
