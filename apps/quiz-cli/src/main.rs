fn main() -> anyhow::Result<()> {
    quiz_cli::run()
}
