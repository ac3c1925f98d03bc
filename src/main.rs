use anyhow::Result;
use texpress::cli::{App, Args};
use texpress::TexConfig;

fn main() -> Result<()> {
    let args = Args::parse_args();
    let config = TexConfig::load(args.config.clone())?;

    let mut app = App::new(config);
    app.run(args)?;

    Ok(())
}
