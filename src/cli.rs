use clap::{Parser, Subcommand};

use crate::models::Order;

#[derive(Parser)]
#[command(name = "thoughts")]
#[command(about = "A tiny board for short thoughts", long_about = None)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a board in the current directory
    Init,

    /// List thoughts, one page at a time
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        page: i64,

        /// Sort order
        #[arg(long, value_enum, default_value_t = Order::Newest)]
        order: Order,

        /// Only show thoughts with exactly this theme
        #[arg(long)]
        theme: Option<String>,
    },

    /// Post a new thought and show the refreshed board
    Post {
        /// The message (5-140 characters). End it with `~name` to sign it.
        message: String,

        /// Theme to file the thought under
        #[arg(long)]
        theme: Option<String>,

        /// Page of the refreshed board to show
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        page: i64,

        /// Sort order of the refreshed board
        #[arg(long, value_enum, default_value_t = Order::Newest)]
        order: Order,
    },

    /// Add a heart to a thought
    Like {
        /// The thought ID to like
        thought_id: String,
    },

    /// Delete every thought on the board
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_options() {
        let cli = Cli::try_parse_from([
            "thoughts", "list", "--page", "2", "--order", "mostliked", "--theme", "music", "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::List { page, order, theme } => {
                assert_eq!(page, 2);
                assert_eq!(order, Order::MostLiked);
                assert_eq!(theme.as_deref(), Some("music"));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn rejects_page_zero() {
        assert!(Cli::try_parse_from(["thoughts", "list", "--page", "0"]).is_err());
    }
}
