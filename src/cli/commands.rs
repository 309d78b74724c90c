use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "feedplus")]
#[command(about = "Renders a Google+ user's public posts as an RSS 2.0 feed")]
#[command(version)]
pub struct Cli {
    /// Google+ user ID
    #[arg(long, visible_alias = "user", value_name = "id")]
    pub id: Option<String>,

    /// Fetch only posts having these hashtags
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "tag1,tag2,...",
        value_delimiter = ','
    )]
    pub hashtags: Vec<String>,

    /// Fetch at most N posts per feed
    #[arg(short, long, value_name = "n", default_value_t = 20)]
    pub limit: usize,

    /// Feed title
    #[arg(short, long, default_value = "Your feed title")]
    pub title: String,

    /// Feed URL
    #[arg(short = 'u', long = "url", default_value = "http://your.domain.com/")]
    pub url: String,
}
