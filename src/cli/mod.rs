use clap::{Args, Parser, Subcommand};

use crate::models::Id;

pub mod create;
pub mod data;
pub mod items;
pub mod photos;
pub mod show;
pub mod tag;
pub mod tags;
pub mod untag;

pub use create::run_create;
pub use data::run_data;
pub use items::run_items;
pub use photos::run_photos;
pub use show::run_show;
pub use tag::run_tag;
pub use tags::run_tags;
pub use untag::run_untag;

#[derive(Parser)]
#[command(name = "tropycmd")]
#[command(about = "Command-line client for a running Tropy project")]
#[command(version)]
pub struct Cli {
    /// Base URL of the Tropy API (default http://localhost:2019)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every item id in the project
    Items,
    /// Show an item's full JSON record
    Show(ShowArgs),
    /// Show an item's metadata
    Data(DataArgs),
    /// List an item's photo paths
    Photos(PhotosArgs),
    /// List project tags, or one item's tags
    Tags(TagsArgs),
    /// Create a tag, reusing an existing one with the same name
    Create(CreateArgs),
    /// Attach tags to an item
    Tag(TagArgs),
    /// Detach tags from an item
    Untag(UntagArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Item id
    pub id: Id,
}

#[derive(Args)]
pub struct DataArgs {
    /// Item id
    pub id: Id,
}

#[derive(Args)]
pub struct PhotosArgs {
    /// Item id
    pub id: Id,
}

#[derive(Args)]
pub struct TagsArgs {
    /// Item id; omit to list the project's tags
    pub item: Option<Id>,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Tag name
    pub name: String,
    /// Tag color
    #[arg(short, long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct TagArgs {
    /// Item id
    pub item: Id,
    /// Tag names (or ids with --by-id)
    #[arg(required = true)]
    pub tags: Vec<String>,
    /// Treat the tag arguments as ids instead of names
    #[arg(long)]
    pub by_id: bool,
}

#[derive(Args)]
pub struct UntagArgs {
    /// Item id
    pub item: Id,
    /// Tag names (or ids with --by-id)
    #[arg(required = true)]
    pub tags: Vec<String>,
    /// Treat the tag arguments as ids instead of names
    #[arg(long)]
    pub by_id: bool,
}
