use punchcard::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
