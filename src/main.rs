use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = file_sorter::cli::parse();
    app::run(args)
}
