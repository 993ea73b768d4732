use anyhow::Result;

fn main() -> Result<()> {
    aconfig_gen::cli::run()
}
