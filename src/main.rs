use colored::Colorize;
use sokol_dyn::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use sokol_dyn::Group;
    use sokol_dyn::cli::{Command, SdynCli};

    #[test]
    fn list_command_parses_group_filter() {
        let cli = SdynCli::parse_from(["sdyn", "list", "--group", "GFX", "--json"]);
        match cli.command() {
            Command::List { group, json } => {
                assert_eq!(*group, Some(Group::GFX));
                assert!(*json);
            }
            other => panic!("expected list command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_group_is_rejected() {
        assert!(SdynCli::try_parse_from(["sdyn", "list", "--group", "audio"]).is_err());
    }

    #[test]
    fn check_command_takes_optional_library() {
        let cli = SdynCli::parse_from(["sdyn", "check", "./libsokol.so"]);
        match cli.command() {
            Command::Check { library, json } => {
                assert_eq!(library.as_deref(), Some("./libsokol.so"));
                assert!(!*json);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }
}
