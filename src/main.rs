use clap::Parser;
use tropycmd::cli::{
    run_create, run_data, run_items, run_photos, run_show, run_tag, run_tags, run_untag, Cli,
    Commands,
};
use tropycmd::{Config, TropyClient};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.api_url.clone());
    let client = TropyClient::new(config.base_url())?;

    match cli.command {
        Commands::Items => {
            run_items(&client)?;
        }
        Commands::Show(args) => {
            run_show(&client, &args.id)?;
        }
        Commands::Data(args) => {
            run_data(&client, &args.id)?;
        }
        Commands::Photos(args) => {
            run_photos(&client, &args.id)?;
        }
        Commands::Tags(args) => {
            run_tags(&client, args.item.as_ref())?;
        }
        Commands::Create(args) => {
            run_create(&client, &args.name, args.color.as_deref())?;
        }
        Commands::Tag(args) => {
            run_tag(&client, &args.item, &args.tags, args.by_id)?;
        }
        Commands::Untag(args) => {
            run_untag(&client, &args.item, &args.tags, args.by_id)?;
        }
    }

    Ok(())
}
